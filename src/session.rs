//! Per-session context.
//!
//! Replaces ambient session globals with one explicit object handed to each
//! handler: created at session start, populated by [`SessionContext::login`],
//! cleared by [`SessionContext::logout`].

use crate::home::HomeState;

/// The page the session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Home,
    FindRecipe,
    DailyIntake,
    HealthInsights,
}

/// All mutable per-session state.
#[derive(Debug, Default)]
pub struct SessionContext {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub current_page: Page,
    pub home: HomeState,
}

impl SessionContext {
    /// Fresh, logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Mark the session authenticated and land on the home page.
    pub fn login(&mut self, user_id: impl Into<String>, user_name: impl Into<String>) {
        self.user_id = Some(user_id.into());
        self.user_name = Some(user_name.into());
        self.current_page = Page::Home;
    }

    /// Clear every session field, including cached home samples.
    pub fn logout(&mut self) {
        *self = Self::default();
    }
}

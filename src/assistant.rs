//! Session-facing orchestration.
//!
//! Owns the degrade-rather-than-raise policy: store and generation failures
//! are caught at the failing call, logged, and converted into a user-visible
//! [`Notice`] plus a degraded return value. Nothing here propagates an
//! unhandled fault to the page layer.

use chrono::NaiveDate;
use log::{debug, error};

use crate::config::AppConfig;
use crate::model::{
    FavoriteOutcome, IntakeHistory, IntakeRecord, Notice, PreferenceSet, RecipeBlock, ReportBundle,
};
use crate::parser::parse_recipe_blocks;
use crate::preferences::add_favorite;
use crate::prompts::recommendation;
use crate::providers::{CompletionRequest, LlmProvider, ProviderFactory};
use crate::report;
use crate::store::{RestStore, UserStore};
use crate::AssistantError;

/// Form inputs for one recommendation run.
#[derive(Debug, Clone, Default)]
pub struct RecommendationRequest {
    pub mood: String,
    pub ingredients: Vec<String>,
    pub dietary_goals: String,
}

/// A recommendation result: parsed blocks plus whatever notices the run
/// produced. `blocks` is empty when generation failed.
#[derive(Debug)]
pub struct Recommendation {
    pub blocks: Vec<RecipeBlock>,
    pub notices: Vec<Notice>,
}

/// The assistant core: one provider, one store.
pub struct Assistant {
    provider: Box<dyn LlmProvider>,
    store: Box<dyn UserStore>,
}

impl Assistant {
    pub fn new(provider: Box<dyn LlmProvider>, store: Box<dyn UserStore>) -> Self {
        Assistant { provider, store }
    }

    /// Wire up the configured default provider and the remote store.
    pub fn from_config(config: &AppConfig) -> Result<Self, AssistantError> {
        let provider = ProviderFactory::default_provider(config)?;
        let store = Box::new(RestStore::new(config.store.base_url.clone()));
        Ok(Assistant { provider, store })
    }

    /// Generate recipe recommendations for the given form inputs.
    ///
    /// Store failures degrade to empty preference/history defaults; a
    /// generation failure yields an empty block list. Both surface notices.
    pub async fn recommend_recipes(
        &self,
        user_id: &str,
        request: &RecommendationRequest,
    ) -> Recommendation {
        let mut notices = Vec::new();

        let preferences = match self.store.get_preferences(user_id).await {
            Ok(preferences) => preferences,
            Err(e) => {
                error!("failed to fetch preferences for {user_id}: {e}");
                notices.push(Notice::error("Failed to fetch user preferences."));
                PreferenceSet::default()
            }
        };
        let history = match self.store.get_intake_history(user_id).await {
            Ok(history) => history,
            Err(e) => {
                error!("failed to fetch intake history for {user_id}: {e}");
                IntakeHistory::new()
            }
        };

        let prompt = recommendation::build(
            &request.mood,
            &request.ingredients,
            &request.dietary_goals,
            &preferences,
            &history,
        );
        let completion = CompletionRequest::new(prompt)
            .with_system(recommendation::SYSTEM_PROMPT)
            .with_max_tokens(recommendation::MAX_TOKENS);

        let blocks = match self.provider.complete(&completion).await {
            Ok(reply) => {
                let blocks = parse_recipe_blocks(&reply);
                debug!("{blocks:?}");
                blocks
            }
            Err(e) => {
                error!("error generating recipe recommendations: {e}");
                notices.push(Notice::error(
                    "Unable to generate recipe recommendations. Please try again later.",
                ));
                Vec::new()
            }
        };

        Recommendation { blocks, notices }
    }

    /// Save one day's intake (full overwrite of that date's record).
    pub async fn save_daily_intake(
        &self,
        user_id: &str,
        date: NaiveDate,
        record: &IntakeRecord,
    ) -> Vec<Notice> {
        match self.store.set_intake(user_id, date, record).await {
            Ok(()) => vec![Notice::success("Your daily intake has been saved!")],
            Err(e) => {
                error!("error saving daily intake for {user_id}: {e}");
                vec![Notice::error(
                    "Unable to save daily intake. Please try again later.",
                )]
            }
        }
    }

    /// Add a recipe to the user's favorites.
    pub async fn add_favorite(&self, user_id: &str, recipe_title: &str) -> Vec<Notice> {
        match add_favorite(self.store.as_ref(), user_id, recipe_title).await {
            Ok(FavoriteOutcome::Added) => {
                vec![Notice::success(format!(
                    "Added '{recipe_title}' to favorites!"
                ))]
            }
            Ok(FavoriteOutcome::AlreadyPresent) => {
                vec![Notice::info(format!(
                    "'{recipe_title}' is already in favorites."
                ))]
            }
            Err(e) => {
                error!("error adding to favorites: {e}");
                vec![Notice::error("Failed to add recipe to favorites.")]
            }
        }
    }

    /// Generate the health-report bundle for `today`.
    ///
    /// A store or required-generation failure yields `None` plus an error
    /// notice; a degraded (partially parsed) ideal intake still produces a
    /// bundle, flagged with an informational notice.
    pub async fn generate_health_reports(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> (Option<ReportBundle>, Vec<Notice>) {
        let profile = match self.store.get_profile(user_id).await {
            Ok(profile) => profile,
            Err(e) => {
                error!("error fetching profile for {user_id}: {e}");
                return (None, vec![Notice::error("Unable to fetch user data.")]);
            }
        };
        let history = match self.store.get_intake_history(user_id).await {
            Ok(history) => history,
            Err(e) => {
                error!("error fetching intake history for {user_id}: {e}");
                return (None, vec![Notice::error("Unable to fetch user data.")]);
            }
        };

        match report::generate(self.provider.as_ref(), &profile, &history, today).await {
            Ok(bundle) => {
                let mut notices = Vec::new();
                if bundle.is_degraded() {
                    notices.push(Notice::info(
                        "The ideal-intake estimate could not be fully parsed; the chart shows partial values.",
                    ));
                }
                (Some(bundle), notices)
            }
            Err(e) => {
                error!("error generating reports and graph: {e}");
                (
                    None,
                    vec![Notice::error(
                        "Unable to generate reports and graph. Please try again later.",
                    )],
                )
            }
        }
    }
}

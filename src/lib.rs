//! Core library for an LLM-backed nutrition and recipe assistant.
//!
//! A user records daily macro-nutrient intake, keeps recipe preferences, and
//! asks for AI-generated recommendations and health reports. This crate holds
//! the pieces with actual behavior: prompt construction, free-text reply
//! parsing, report assembly with the comparison chart and export archive, the
//! home-page refresh policy, and the narrow clients for the two external
//! collaborators (LLM service, user-record store). UI rendering and
//! authentication live outside.

pub mod assistant;
pub mod config;
pub mod dataset;
pub mod error;
pub mod home;
pub mod model;
pub mod parser;
pub mod preferences;
pub mod prompts;
pub mod providers;
pub mod report;
pub mod session;
pub mod store;

pub use assistant::{Assistant, Recommendation, RecommendationRequest};
pub use config::AppConfig;
pub use error::AssistantError;
pub use model::{
    FavoriteOutcome, IntakeHistory, IntakeRecord, Notice, NoticeLevel, NutrientMap, PreferenceSet,
    RecipeBlock, RecipeRecord, ReportBundle, UserProfile,
};
pub use parser::{parse_nutrient_map, parse_recipe_blocks};
pub use providers::{CompletionRequest, GenerationError, LlmProvider};
pub use store::{StoreError, UserStore};

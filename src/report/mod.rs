//! Health-report assembly.
//!
//! Orchestrates the multi-call generation flow: two report prompts, one
//! ideal-intake estimate, a numeric ideal-vs-actual comparison, and the
//! rendered chart, merged into one [`ReportBundle`].

pub mod chart;
pub mod export;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::error::AssistantError;
use crate::model::{IntakeHistory, IntakeRecord, NutrientMap, ReportBundle, UserProfile};
use crate::parser::parse_nutrient_map;
use crate::prompts::{health_report, ideal_intake};
use crate::providers::{CompletionRequest, LlmProvider};

/// Fixed chart label order.
pub const NUTRIENT_LABELS: [&str; 4] = ["Calories", "Proteins", "Carbs", "Fats"];

/// One `(ideal, actual)` pair per label, both sides defaulting to zero for
/// missing entries. An empty ideal map degrades the chart to zero-vs-actual
/// rather than failing the report.
pub fn comparison_pairs(ideal: &NutrientMap, actual: &IntakeRecord) -> [(f64, f64); 4] {
    NUTRIENT_LABELS.map(|label| (ideal.get(label), actual.nutrient(label)))
}

/// Generate the full report bundle for `today`.
///
/// The summary and daily calls run concurrently and are both required:
/// either failing aborts the whole operation (no partial bundle). The
/// ideal-intake call is best-effort; its failure only degrades the chart.
pub async fn generate(
    provider: &dyn LlmProvider,
    profile: &UserProfile,
    history: &IntakeHistory,
    today: NaiveDate,
) -> Result<ReportBundle, AssistantError> {
    let prompts = health_report::build(profile, history, today);

    let summary_request =
        CompletionRequest::new(prompts.summary).with_max_tokens(health_report::MAX_TOKENS);
    let daily_request =
        CompletionRequest::new(prompts.daily).with_max_tokens(health_report::MAX_TOKENS);

    let (summary_text, daily_text) = tokio::try_join!(
        provider.complete(&summary_request),
        provider.complete(&daily_request)
    )?;

    let ideal = request_ideal_intake(provider, profile).await;
    let actual = history.get(&today).copied().unwrap_or_default();

    let pairs = comparison_pairs(&ideal, &actual);
    debug!("chart pairs: {pairs:?}");
    let chart_png = chart::render(&pairs)?;

    Ok(ReportBundle {
        summary_text,
        daily_text,
        chart_png,
        ideal_intake: ideal,
    })
}

async fn request_ideal_intake(provider: &dyn LlmProvider, profile: &UserProfile) -> NutrientMap {
    let request = CompletionRequest::new(ideal_intake::build(profile))
        .with_max_tokens(ideal_intake::MAX_TOKENS);
    match provider.complete(&request).await {
        Ok(reply) => parse_nutrient_map(&reply),
        Err(e) => {
            warn!("ideal-intake request failed, chart degrades to zero: {e}");
            NutrientMap::new()
        }
    }
}

//! Prompt construction for the three generation use cases.
//!
//! Pure string formatting from structured inputs; no validation, no I/O.
//! Missing optional profile fields degrade to the literal `Unknown`.

pub mod health_report;
pub mod ideal_intake;
pub mod recommendation;

use crate::model::IntakeHistory;

/// Sampling temperature shared by every generation call.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Serialize intake history one line per date, ascending.
///
/// Format: `date: Calories: X, Proteins: Yg, Carbs: Zg, Fats: Wg`.
pub(crate) fn intake_summary(history: &IntakeHistory) -> String {
    history
        .iter()
        .map(|(date, record)| {
            format!(
                "{}: Calories: {}, Proteins: {}g, Carbs: {}g, Fats: {}g",
                date.format("%Y-%m-%d"),
                record.calories,
                record.proteins,
                record.carbs,
                record.fats
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

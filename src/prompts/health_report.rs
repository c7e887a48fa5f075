use chrono::NaiveDate;

use crate::model::{IntakeHistory, UserProfile};

/// Maximum tokens requested for each report reply.
pub const MAX_TOKENS: u32 = 800;

/// The prompt pair backing one health-report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPrompts {
    /// Multi-day summary with lifestyle recommendations.
    pub summary: String,
    /// Single-day ideal-vs-actual analysis for `today`.
    pub daily: String,
}

/// Render both health-report prompts.
///
/// Intake history is serialized one line per date, ascending, and embedded in
/// both prompts; the daily prompt is scoped to `today`.
pub fn build(profile: &UserProfile, history: &IntakeHistory, today: NaiveDate) -> ReportPrompts {
    let health_summary = super::intake_summary(history);
    let who = format!(
        "The user is a {age}-year-old {gender} named {name} and weighs {weight}",
        age = profile.age_text(),
        gender = profile.gender.to_lowercase(),
        name = profile.name,
        weight = profile.weight_text(),
    );

    let summary = format!(
        "{who}. Based on their health data:\n{health_summary}\n\n\
         Generate a detailed health report for {name}, including a summary of their \
         nutritional habits, areas of improvement, and personalized recommendations for a \
         healthier diet and lifestyle. Provide specific suggestions for meals, exercises, \
         and other health tips tailored to their age, gender, and weight.",
        name = profile.name,
    );

    let daily = format!(
        "{who}. Based on their health data for today ({today}):\n{health_summary}\n\n\
         Generate a daily report, including an analysis of their nutritional intake \
         (calories, proteins, carbs, and fats) compared to ideal intake for their age, \
         weight, and activity level. Explain areas where their intake deviates from the \
         ideal and suggest improvements.",
        today = today.format("%Y-%m-%d"),
    );

    ReportPrompts { summary, daily }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IntakeRecord;

    fn ana() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            gender: "Female".to_string(),
            age: Some(30),
            weight: Some(65.0),
        }
    }

    #[test]
    fn test_both_prompts_carry_history() {
        let mut history = IntakeHistory::new();
        history.insert(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            IntakeRecord {
                calories: 1800.0,
                proteins: 90.0,
                carbs: 200.0,
                fats: 60.0,
            },
        );

        let prompts = build(&ana(), &history, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        for text in [&prompts.summary, &prompts.daily] {
            assert!(text.contains("30-year-old female named Ana"));
            assert!(text.contains("2024-01-01: Calories: 1800"));
        }
    }

    #[test]
    fn test_daily_prompt_scoped_to_today() {
        let prompts = build(
            &ana(),
            &IntakeHistory::new(),
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
        );
        assert!(prompts.daily.contains("today (2024-05-20)"));
        assert!(!prompts.summary.contains("2024-05-20"));
    }
}

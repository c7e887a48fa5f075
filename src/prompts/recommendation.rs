use crate::model::{IntakeHistory, PreferenceSet};
use crate::parser::RECIPE_MARKER;

/// Maximum tokens requested for a recommendation reply.
pub const MAX_TOKENS: u32 = 700;

/// System message for recommendation calls.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant skilled in recipe suggestions.";

/// Render the recipe-recommendation prompt.
///
/// All inputs are embedded verbatim; an empty mood or goal string passes
/// through untouched (rejecting empty required fields is the form layer's
/// job). The template asks the model to reason in explicit numbered steps and
/// to introduce every recipe with the literal marker line the parser splits
/// on.
pub fn build(
    mood: &str,
    ingredients: &[String],
    dietary_goals: &str,
    preferences: &PreferenceSet,
    history: &IntakeHistory,
) -> String {
    let liked_recipes = preferences.liked_recipes.join(", ");
    let liked_ingredients = preferences
        .liked_ingredients
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let disliked_ingredients = preferences
        .disliked_ingredients
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let intake = super::intake_summary(history);

    format!(
        "The user is in the mood '{mood}' and has these ingredients available: {available}.\n\
         Their dietary goals: '{dietary_goals}'.\n\
         Recipes they have liked before: {liked_recipes}.\n\
         Ingredients they like: {liked_ingredients}. Ingredients they dislike: {disliked_ingredients}.\n\
         Their recent daily intake:\n{intake}\n\n\
         Work through this step by step:\n\
         1. Consider the mood, the available ingredients, and the dietary goals.\n\
         2. Rule out anything using disliked ingredients.\n\
         3. Balance the suggestions against the recent intake.\n\
         4. Pick one breakfast recipe, one lunch recipe, and one dinner recipe.\n\n\
         Then answer with exactly three recipes. Start each one on its own line reading\n\
         '{marker} <name>' and include a list of ingredients, step-by-step instructions,\n\
         and nutritional information (calories, proteins, carbs, and fats).",
        available = ingredients.join(", "),
        marker = RECIPE_MARKER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IntakeRecord;
    use chrono::NaiveDate;

    fn sample_preferences() -> PreferenceSet {
        PreferenceSet {
            liked_ingredients: ["basil".to_string()].into(),
            disliked_ingredients: ["cilantro".to_string()].into(),
            liked_recipes: vec!["Pancakes".to_string(), "Ramen".to_string()],
        }
    }

    #[test]
    fn test_inputs_embedded_verbatim() {
        let mut history = IntakeHistory::new();
        history.insert(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            IntakeRecord::default(),
        );

        let prompt = build(
            "adventurous",
            &["eggs".to_string(), "rice".to_string()],
            "high-protein",
            &sample_preferences(),
            &history,
        );

        assert!(prompt.contains("adventurous"));
        assert!(prompt.contains("eggs, rice"));
        assert!(prompt.contains("high-protein"));
        assert!(prompt.contains("Pancakes, Ramen"));
        assert!(prompt.contains("cilantro"));
        assert!(prompt.contains("2024-03-05"));
    }

    #[test]
    fn test_asks_for_marker_and_three_meals() {
        let prompt = build("", &[], "", &PreferenceSet::default(), &IntakeHistory::new());
        assert!(prompt.contains(RECIPE_MARKER));
        assert!(prompt.contains("breakfast"));
        assert!(prompt.contains("lunch"));
        assert!(prompt.contains("dinner"));
        assert!(prompt.contains("step by step"));
    }

    #[test]
    fn test_empty_mood_passes_through() {
        let prompt = build("", &[], "", &PreferenceSet::default(), &IntakeHistory::new());
        assert!(prompt.contains("the mood ''"));
    }
}

use nutricoach::assistant::{Assistant, RecommendationRequest};
use nutricoach::model::NoticeLevel;
use nutricoach::parser::split_preamble;
use nutricoach::providers::FakeProvider;
use nutricoach::store::MemoryStore;

fn request() -> RecommendationRequest {
    RecommendationRequest {
        mood: "tired".to_string(),
        ingredients: vec!["eggs".to_string(), "spinach".to_string()],
        dietary_goals: "high-protein".to_string(),
    }
}

const THREE_RECIPE_REPLY: &str = "\
Here are three recipes matching your mood and goals.
Recipe: Spinach Omelette
Ingredients: eggs, spinach
Instructions: Whisk, pour, fold.
Nutritional information: Calories: 300, Proteins: 20g, Carbs: 4g, Fats: 22g
Recipe: Egg Salad Bowl
Ingredients: eggs, spinach, yogurt
Instructions: Boil, chop, mix.
Nutritional information: Calories: 350, Proteins: 25g, Carbs: 10g, Fats: 20g
Recipe: Baked Frittata
Ingredients: eggs, spinach, cheese
Instructions: Mix and bake.
Nutritional information: Calories: 420, Proteins: 28g, Carbs: 6g, Fats: 30g";

#[tokio::test]
async fn test_reply_parses_to_preamble_and_three_recipes() {
    let provider = FakeProvider::with_response("exactly three recipes", THREE_RECIPE_REPLY);
    let assistant = Assistant::new(Box::new(provider), Box::new(MemoryStore::new()));

    let recommendation = assistant.recommend_recipes("u1", &request()).await;
    assert!(recommendation.notices.is_empty());
    assert_eq!(recommendation.blocks.len(), 4);

    let (preamble, recipes) = split_preamble(&recommendation.blocks);
    assert!(preamble.unwrap().text.contains("three recipes"));
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0].header_line(), "Recipe: Spinach Omelette");
    assert!(recipes[1].body().contains("Boil, chop, mix."));
}

#[tokio::test]
async fn test_generation_failure_degrades_to_empty_list() {
    // No registered response and no default: every call fails
    let provider = FakeProvider::new();
    let assistant = Assistant::new(Box::new(provider), Box::new(MemoryStore::new()));

    let recommendation = assistant.recommend_recipes("u1", &request()).await;
    assert!(recommendation.blocks.is_empty());
    assert_eq!(recommendation.notices.len(), 1);
    assert_eq!(recommendation.notices[0].level, NoticeLevel::Error);
    assert!(recommendation.notices[0]
        .message
        .contains("Unable to generate recipe recommendations"));
}

#[tokio::test]
async fn test_liked_recipes_flow_into_the_prompt() {
    let store = MemoryStore::new();
    let assistant = Assistant::new(
        Box::new(FakeProvider::with_response(
            "Pancakes",
            "Recipe: Pancakes Deluxe\nIngredients: flour\nInstructions: Fry.",
        )),
        Box::new(store),
    );

    // Favorite first, then recommend: the liked title must appear in the
    // prompt for the fake to match on it.
    assistant.add_favorite("u1", "Pancakes").await;
    let recommendation = assistant.recommend_recipes("u1", &request()).await;
    assert_eq!(recommendation.blocks.len(), 1);
    assert!(recommendation.blocks[0].is_recipe());
}

#[tokio::test]
async fn test_add_favorite_notices() {
    let provider = FakeProvider::new().with_default_response("ok");
    let assistant = Assistant::new(Box::new(provider), Box::new(MemoryStore::new()));

    let notices = assistant.add_favorite("u1", "Ramen").await;
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert!(notices[0].message.contains("Added 'Ramen' to favorites!"));

    let notices = assistant.add_favorite("u1", "Ramen").await;
    assert_eq!(notices[0].level, NoticeLevel::Info);
    assert!(notices[0].message.contains("already in favorites"));
}

#[tokio::test]
async fn test_save_daily_intake_notice() {
    use chrono::NaiveDate;
    use nutricoach::model::IntakeRecord;

    let provider = FakeProvider::new().with_default_response("ok");
    let store = MemoryStore::new();
    let assistant = Assistant::new(Box::new(provider), Box::new(store));

    let notices = assistant
        .save_daily_intake(
            "u1",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            &IntakeRecord {
                calories: 1800.0,
                proteins: 90.0,
                carbs: 200.0,
                fats: 60.0,
            },
        )
        .await;
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
}

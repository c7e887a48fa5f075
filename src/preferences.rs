//! Favorite-recipe bookkeeping on top of the user store.

use log::info;

use crate::model::FavoriteOutcome;
use crate::store::{StoreError, UserStore};

/// Add a recipe title to the user's favorites.
///
/// Idempotent: re-adding an existing title leaves the list untouched and
/// reports [`FavoriteOutcome::AlreadyPresent`]. The write is a full overwrite
/// of the preference document (last write wins).
pub async fn add_favorite(
    store: &dyn UserStore,
    user_id: &str,
    recipe_title: &str,
) -> Result<FavoriteOutcome, StoreError> {
    let mut preferences = store.get_preferences(user_id).await?;

    if preferences
        .liked_recipes
        .iter()
        .any(|title| title == recipe_title)
    {
        info!("'{recipe_title}' is already in favorites for {user_id}");
        return Ok(FavoriteOutcome::AlreadyPresent);
    }

    preferences.liked_recipes.push(recipe_title.to_string());
    store.set_preferences(user_id, &preferences).await?;
    Ok(FavoriteOutcome::Added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_add_then_read_back() {
        let store = MemoryStore::new();
        let outcome = add_favorite(&store, "u1", "Pancakes").await.unwrap();
        assert_eq!(outcome, FavoriteOutcome::Added);

        let preferences = store.get_preferences("u1").await.unwrap();
        assert_eq!(preferences.liked_recipes, vec!["Pancakes".to_string()]);
    }

    #[tokio::test]
    async fn test_double_add_is_a_noop() {
        let store = MemoryStore::new();
        add_favorite(&store, "u1", "Pancakes").await.unwrap();
        let outcome = add_favorite(&store, "u1", "Pancakes").await.unwrap();
        assert_eq!(outcome, FavoriteOutcome::AlreadyPresent);

        let preferences = store.get_preferences("u1").await.unwrap();
        assert_eq!(preferences.liked_recipes.len(), 1);
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let store = MemoryStore::new();
        add_favorite(&store, "u1", "Ramen").await.unwrap();
        add_favorite(&store, "u1", "Pancakes").await.unwrap();
        add_favorite(&store, "u1", "Ramen").await.unwrap();

        let preferences = store.get_preferences("u1").await.unwrap();
        assert_eq!(
            preferences.liked_recipes,
            vec!["Ramen".to_string(), "Pancakes".to_string()]
        );
    }
}

//! Landing-page refresh policy.
//!
//! Bounds how often the home page re-samples its recipe and ingredient
//! display: a simple debounce, not a cache-eviction engine. The clock is
//! passed in so the 30-second window is testable.

use chrono::{DateTime, Duration, Utc};
use log::debug;
use rand::seq::SliceRandom;

use crate::dataset::RecipeDataset;
use crate::model::RecipeRecord;

/// How many recipes and ingredients each refresh draws.
pub const SAMPLE_SIZE: usize = 3;

/// Minimum seconds between refreshes.
pub const REFRESH_INTERVAL_SECS: i64 = 30;

/// Cached samples for the landing page, owned by the session.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    last_refresh: Option<DateTime<Utc>>,
    recipes: Vec<RecipeRecord>,
    ingredients: Vec<String>,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipes(&self) -> &[RecipeRecord] {
        &self.recipes
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    /// Redraw both samples if the refresh window has elapsed.
    ///
    /// When `last_refresh` is unset or at least [`REFRESH_INTERVAL_SECS`] old,
    /// draws a uniform-without-replacement sample of [`SAMPLE_SIZE`] recipes
    /// and distinct ingredient strings, stamps `last_refresh = now`, and
    /// returns true. Otherwise the cached samples stay untouched.
    pub fn refresh_if_due(&mut self, dataset: &RecipeDataset, now: DateTime<Utc>) -> bool {
        let due = match self.last_refresh {
            None => true,
            Some(last) => now - last >= Duration::seconds(REFRESH_INTERVAL_SECS),
        };
        if !due {
            debug!("home refresh debounced");
            return false;
        }

        let mut rng = rand::thread_rng();
        self.recipes = dataset
            .recipes()
            .choose_multiple(&mut rng, SAMPLE_SIZE)
            .cloned()
            .collect();
        self.ingredients = dataset
            .ingredients()
            .choose_multiple(&mut rng, SAMPLE_SIZE)
            .cloned()
            .collect();
        self.last_refresh = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> RecipeDataset {
        let csv = "\
Title,Ingredients,Instructions,Image_Name
A,\"a1, a2\",step,img-a
B,\"b1, b2\",step,img-b
C,\"c1, c2\",step,img-c
D,\"d1, d2\",step,img-d
E,\"e1, e2\",step,img-e
";
        RecipeDataset::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_first_view_always_refreshes() {
        let mut state = HomeState::new();
        let now = Utc::now();
        assert!(state.refresh_if_due(&dataset(), now));
        assert_eq!(state.recipes().len(), SAMPLE_SIZE);
        assert_eq!(state.ingredients().len(), SAMPLE_SIZE);
        assert_eq!(state.last_refresh(), Some(now));
    }

    #[test]
    fn test_view_within_window_keeps_cache() {
        let data = dataset();
        let mut state = HomeState::new();
        let start = Utc::now();
        state.refresh_if_due(&data, start);
        let cached_recipes: Vec<String> =
            state.recipes().iter().map(|r| r.title.clone()).collect();
        let cached_ingredients = state.ingredients().to_vec();

        let refreshed = state.refresh_if_due(&data, start + Duration::seconds(29));
        assert!(!refreshed);
        let after: Vec<String> = state.recipes().iter().map(|r| r.title.clone()).collect();
        assert_eq!(after, cached_recipes);
        assert_eq!(state.ingredients(), cached_ingredients.as_slice());
        assert_eq!(state.last_refresh(), Some(start));
    }

    #[test]
    fn test_view_past_window_redraws_and_restamps() {
        let data = dataset();
        let mut state = HomeState::new();
        let start = Utc::now();
        state.refresh_if_due(&data, start);

        let later = start + Duration::seconds(31);
        assert!(state.refresh_if_due(&data, later));
        assert_eq!(state.last_refresh(), Some(later));
        assert_eq!(state.recipes().len(), SAMPLE_SIZE);
    }

    #[test]
    fn test_samples_are_without_replacement() {
        let data = dataset();
        let mut state = HomeState::new();
        state.refresh_if_due(&data, Utc::now());

        let mut titles: Vec<&str> = state.recipes().iter().map(|r| r.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), SAMPLE_SIZE);

        let mut ingredients = state.ingredients().to_vec();
        ingredients.sort_unstable();
        ingredients.dedup();
        assert_eq!(ingredients.len(), SAMPLE_SIZE);
    }

    #[test]
    fn test_small_dataset_caps_sample() {
        let csv = "Title,Ingredients,Instructions,Image_Name\nOnly,\"x, y\",step,img\n";
        let data = RecipeDataset::from_reader(csv.as_bytes()).unwrap();
        let mut state = HomeState::new();
        state.refresh_if_due(&data, Utc::now());
        assert_eq!(state.recipes().len(), 1);
        assert_eq!(state.ingredients().len(), 2);
    }
}

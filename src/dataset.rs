//! The static recipe dataset.
//!
//! A read-only CSV table with columns Title, Ingredients (comma-separated
//! string), Instructions, Image_Name. Loaded once and cached by the caller
//! for process lifetime; this core only samples from it.

use std::fs::File;
use std::io;
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::model::RecipeRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// The loaded dataset plus its derived ingredient universe.
#[derive(Debug, Clone)]
pub struct RecipeDataset {
    recipes: Vec<RecipeRecord>,
    ingredients: Vec<String>,
}

impl RecipeDataset {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = File::open(path.as_ref())?;
        let dataset = Self::from_reader(file)?;
        info!(
            "loaded {} recipes from {}",
            dataset.recipes.len(),
            path.as_ref().display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut recipes = Vec::new();
        for row in csv_reader.deserialize() {
            let record: RecipeRecord = row?;
            recipes.push(record);
        }

        let ingredients = ingredient_universe(&recipes);
        Ok(RecipeDataset {
            recipes,
            ingredients,
        })
    }

    pub fn recipes(&self) -> &[RecipeRecord] {
        &self.recipes
    }

    /// Distinct ingredient strings across the whole dataset, sorted.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Split every recipe's ingredient list on `", "` and take the set union.
fn ingredient_universe(recipes: &[RecipeRecord]) -> Vec<String> {
    let mut universe: std::collections::BTreeSet<String> = std::collections::BTreeSet::new();
    for recipe in recipes {
        for ingredient in recipe.ingredients.split(", ") {
            let ingredient = ingredient.trim();
            if !ingredient.is_empty() {
                universe.insert(ingredient.to_string());
            }
        }
    }
    universe.into_iter().collect()
}

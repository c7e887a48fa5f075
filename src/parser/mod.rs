//! Parsing of free-text model replies into structured data.
//!
//! The matching strategy is a literal-substring heuristic kept behind this
//! module boundary so it can be swapped for a stricter structured-output
//! contract without touching callers.

mod nutrient_map;
mod recipe_blocks;

pub use nutrient_map::parse_nutrient_map;
pub use recipe_blocks::{parse_recipe_blocks, split_preamble, RECIPE_MARKER};

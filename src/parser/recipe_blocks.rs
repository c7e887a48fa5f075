use log::debug;

use crate::model::RecipeBlock;

/// Literal marker a recommendation reply uses to introduce each recipe.
pub const RECIPE_MARKER: &str = "Recipe:";

/// Segment a recommendation reply into recipe blocks.
///
/// The reply is split on line breaks and accumulated into blocks: a line
/// containing [`RECIPE_MARKER`] starts a new block, every other line is
/// appended to the current one. Lines are trimmed as they are accumulated,
/// blocks are trimmed as they are emitted, and input order is preserved.
///
/// This is a best-effort heuristic. It does not validate block structure and
/// relies on the model echoing the marker text; a reply with no marker at all
/// comes back as a single block, and an empty reply as no blocks.
pub fn parse_recipe_blocks(text: &str) -> Vec<RecipeBlock> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.contains(RECIPE_MARKER) {
            if !current.is_empty() {
                blocks.push(RecipeBlock {
                    text: current.trim().to_string(),
                });
            }
            current = format!("{}\n", line.trim());
        } else {
            current.push_str(line.trim());
            current.push('\n');
        }
    }

    if !current.is_empty() {
        blocks.push(RecipeBlock {
            text: current.trim().to_string(),
        });
    }

    debug!("segmented reply into {} block(s)", blocks.len());
    blocks
}

/// Split a parsed reply into its optional preamble and the recipe blocks.
///
/// The first block counts as a preamble only when it lacks the marker.
pub fn split_preamble(blocks: &[RecipeBlock]) -> (Option<&RecipeBlock>, &[RecipeBlock]) {
    match blocks.first() {
        Some(first) if !first.is_recipe() => (Some(first), &blocks[1..]),
        _ => (None, blocks),
    }
}

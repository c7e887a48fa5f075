use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user profile as read from the store.
///
/// The store keeps age and weight as free-form values (numbers or strings,
/// sometimes with units). They are resolved to validated optional numerics at
/// the profile-read boundary; `None` renders as the literal `Unknown` in
/// prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub age: Option<u32>,
    pub weight: Option<f64>,
}

impl UserProfile {
    /// Age as prompt text, `Unknown` when unresolved.
    pub fn age_text(&self) -> String {
        self.age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Weight as prompt text, `Unknown` when unresolved.
    pub fn weight_text(&self) -> String {
        self.weight
            .map(|w| format!("{}", w))
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// One day's recorded nutrient intake. Missing fields read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntakeRecord {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub proteins: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fats: f64,
}

impl IntakeRecord {
    /// Look up a nutrient amount by its lower-cased label.
    ///
    /// Unrecognized labels read as zero, matching the chart's defaulting
    /// behavior.
    pub fn nutrient(&self, label: &str) -> f64 {
        match label.trim().to_lowercase().as_str() {
            "calories" => self.calories,
            "proteins" => self.proteins,
            "carbs" => self.carbs,
            "fats" => self.fats,
            _ => 0.0,
        }
    }
}

/// Intake records keyed by date, iterated in ascending date order.
pub type IntakeHistory = BTreeMap<NaiveDate, IntakeRecord>;

/// Per-user preference lists.
///
/// `liked_recipes` keeps insertion order and never contains a title twice;
/// the ingredient lists are plain sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(default)]
    pub liked_ingredients: BTreeSet<String>,
    #[serde(default)]
    pub disliked_ingredients: BTreeSet<String>,
    #[serde(default)]
    pub liked_recipes: Vec<String>,
}

/// Outcome of adding a recipe title to the favorites list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    /// The title was already present; the list is unchanged.
    AlreadyPresent,
}

/// One row of the static recipe dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Ingredients")]
    pub ingredients: String,
    #[serde(rename = "Instructions")]
    pub instructions: String,
    #[serde(rename = "Image_Name")]
    pub image_name: String,
}

/// One segment of a recommendation reply.
///
/// Blocks are split on lines containing the literal `Recipe:` marker. The
/// first block of a reply is conventionally introductory prose without a
/// marker; callers treat it as a preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeBlock {
    pub text: String,
}

impl RecipeBlock {
    /// The first line of the block.
    pub fn header_line(&self) -> &str {
        self.text.lines().next().unwrap_or("")
    }

    /// Everything after the header line.
    pub fn body(&self) -> &str {
        match self.text.split_once('\n') {
            Some((_, rest)) => rest,
            None => "",
        }
    }

    /// Whether the header carries the recipe marker.
    pub fn is_recipe(&self) -> bool {
        self.header_line().contains(crate::parser::RECIPE_MARKER)
    }
}

/// Nutrient name to numeric amount, as parsed from a model reply.
///
/// Keys are normalized (trimmed, bullets stripped, lower-cased) on insert and
/// lookup. The map records how many reply entries failed to parse so callers
/// can distinguish a fully parsed reply from a degraded one; an entirely
/// unparseable reply yields an empty map, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientMap {
    values: HashMap<String, f64>,
    dropped: usize,
}

impl NutrientMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an amount under the normalized form of `name`.
    pub fn insert(&mut self, name: &str, amount: f64) {
        self.values.insert(normalize_nutrient_key(name), amount);
    }

    /// Record one reply entry that could not be parsed.
    pub fn record_dropped(&mut self) {
        self.dropped += 1;
    }

    /// Amount for `name`, zero when absent.
    pub fn get(&self, name: &str) -> f64 {
        self.values
            .get(&normalize_nutrient_key(name))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&normalize_nutrient_key(name))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of reply entries dropped during parsing.
    pub fn dropped_entries(&self) -> usize {
        self.dropped
    }

    /// True when every entry of the reply parsed cleanly.
    pub fn is_complete(&self) -> bool {
        self.dropped == 0
    }
}

/// Normalize a nutrient key: trim, strip leading bullet characters, lower-case.
pub(crate) fn normalize_nutrient_key(name: &str) -> String {
    name.trim()
        .trim_start_matches(['-', '*', '•'])
        .trim()
        .to_lowercase()
}

/// The renderable output of a health-report run.
///
/// Transient: materialized for display or export, never persisted.
#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub summary_text: String,
    pub daily_text: String,
    /// PNG-encoded ideal-vs-actual comparison chart.
    pub chart_png: Vec<u8>,
    /// The ideal-intake estimate backing the chart. An empty or partially
    /// parsed map means the chart silently degraded toward zero bars.
    pub ideal_intake: NutrientMap,
}

impl ReportBundle {
    /// Whether the ideal-intake side of the chart is incomplete.
    pub fn is_degraded(&self) -> bool {
        self.ideal_intake.is_empty() || !self.ideal_intake.is_complete()
    }
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A message for the UI layer to surface.
///
/// Store and generation failures are converted into notices plus degraded
/// return values instead of propagating as faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

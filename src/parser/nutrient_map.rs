use log::{debug, warn};
use serde_json::Value;

use crate::model::NutrientMap;

/// Parse an ideal-intake reply into a [`NutrientMap`].
///
/// Two reply shapes are accepted, matching the output styles different models
/// produce for the same prompt:
///
/// 1. Line-oriented `Nutrient: amount` pairs, one per line. Amounts may carry
///    a trailing unit and thousands separators; both are stripped before
///    numeric conversion.
/// 2. A single flat object literal of `key: value` pairs with numeric values.
///
/// Entries that fail to parse are dropped and counted on the returned map;
/// a fully malformed reply yields an empty map rather than an error.
pub fn parse_nutrient_map(text: &str) -> NutrientMap {
    let trimmed = text.trim();

    if trimmed.starts_with('{') {
        if let Some(map) = parse_object_literal(trimmed) {
            return map;
        }
        debug!("reply looked like an object literal but did not parse; falling back to lines");
    }

    parse_lines(trimmed)
}

fn parse_lines(text: &str) -> NutrientMap {
    let mut map = NutrientMap::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            warn!("skipping nutrient line without a single key:value split: {line:?}");
            map.record_dropped();
            continue;
        }

        let key = parts[0];
        let amount = clean_amount(parts[1]);
        match amount.parse::<f64>() {
            Ok(value) => map.insert(key, value),
            Err(_) => {
                warn!("skipping nutrient line with non-numeric amount {amount:?}: {line:?}");
                map.record_dropped();
            }
        }
    }

    map
}

/// Strip thousands separators, surrounding whitespace, and a trailing unit.
fn clean_amount(raw: &str) -> String {
    raw.replace(',', "")
        .trim()
        .trim_end_matches(|c: char| c.is_alphabetic())
        .trim()
        .to_string()
}

/// Parse a flat object literal of numeric values.
///
/// Single-quoted literals are retried with double quotes since some models
/// emit them; anything still unparseable falls back to line parsing.
fn parse_object_literal(text: &str) -> Option<NutrientMap> {
    let object: serde_json::Map<String, Value> = serde_json::from_str(text)
        .or_else(|_| serde_json::from_str(&text.replace('\'', "\"")))
        .ok()?;

    let mut map = NutrientMap::new();
    for (key, value) in &object {
        match value.as_f64() {
            Some(amount) => map.insert(key, amount),
            None => {
                warn!("skipping non-numeric entry {key:?} in nutrient object literal");
                map.record_dropped();
            }
        }
    }
    Some(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        let map = parse_nutrient_map("Calories: 2000\nProteins: 100g\nCarbs: 220g\nFats: 70g");
        assert_eq!(map.get("calories"), 2000.0);
        assert_eq!(map.get("proteins"), 100.0);
        assert_eq!(map.get("carbs"), 220.0);
        assert_eq!(map.get("fats"), 70.0);
        assert!(map.is_complete());
    }

    #[test]
    fn test_bulleted_line_with_unit() {
        let map = parse_nutrient_map("  - Calories: 500g");
        assert_eq!(map.get("calories"), 500.0);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_thousands_separator_stripped() {
        let map = parse_nutrient_map("Calories: 2,000 kcal");
        assert_eq!(map.get("calories"), 2000.0);
    }

    #[test]
    fn test_bad_amount_dropped_others_kept() {
        let map = parse_nutrient_map("Calories: about five hundred\nProteins: 100g");
        assert!(!map.contains("calories"));
        assert_eq!(map.get("proteins"), 100.0);
        assert_eq!(map.dropped_entries(), 1);
        assert!(!map.is_complete());
    }

    #[test]
    fn test_line_with_extra_colons_dropped() {
        let map = parse_nutrient_map("Note: Calories: 2000\nFats: 70");
        assert_eq!(map.get("fats"), 70.0);
        assert_eq!(map.len(), 1);
        assert_eq!(map.dropped_entries(), 1);
    }

    #[test]
    fn test_fully_malformed_input_yields_empty_map() {
        let map = parse_nutrient_map("no structure here whatsoever");
        assert!(map.is_empty());

        let map = parse_nutrient_map("");
        assert!(map.is_empty());
        assert!(map.is_complete());
    }

    #[test]
    fn test_object_literal() {
        let map = parse_nutrient_map(r#"{"calories": 2000, "proteins": 100, "fats": 70.5}"#);
        assert_eq!(map.get("Calories"), 2000.0);
        assert_eq!(map.get("fats"), 70.5);
        assert!(map.is_complete());
    }

    #[test]
    fn test_single_quoted_object_literal() {
        let map = parse_nutrient_map("{'calories': 2000, 'carbs': 220}");
        assert_eq!(map.get("calories"), 2000.0);
        assert_eq!(map.get("carbs"), 220.0);
    }

    #[test]
    fn test_object_literal_non_numeric_entry_dropped() {
        let map = parse_nutrient_map(r#"{"calories": 2000, "note": "rough estimate"}"#);
        assert_eq!(map.get("calories"), 2000.0);
        assert_eq!(map.dropped_entries(), 1);
    }

    #[test]
    fn test_missing_key_reads_zero() {
        let map = parse_nutrient_map("Calories: 2000");
        assert_eq!(map.get("proteins"), 0.0);
    }
}

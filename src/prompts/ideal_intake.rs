use crate::model::UserProfile;

/// Maximum tokens requested for an ideal-intake reply.
pub const MAX_TOKENS: u32 = 800;

/// Render the ideal-intake prompt.
///
/// Requests single point estimates for the four tracked nutrients as flat
/// `Nutrient: amount` lines, with formatting instructions tight enough for
/// [`crate::parser::parse_nutrient_map`] to handle the reply.
pub fn build(profile: &UserProfile) -> String {
    format!(
        "Provide the ideal daily nutrient intake for {name}, \
         based on their age: {age}, gender: {gender}, and weight: {weight}.\n\
         Answer with exactly four lines and nothing else:\n\
         Calories: <amount>\n\
         Proteins: <amount>\n\
         Carbs: <amount>\n\
         Fats: <amount>\n\
         Give one value per nutrient, no ranges, no explanations.",
        name = profile.name,
        age = profile.age_text(),
        gender = profile.gender,
        weight = profile.weight_text(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_embedded() {
        let profile = UserProfile {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            gender: "Female".to_string(),
            age: Some(30),
            weight: Some(65.0),
        };
        let prompt = build(&profile);
        assert!(prompt.contains("Ana"));
        assert!(prompt.contains("age: 30"));
        assert!(prompt.contains("weight: 65"));
        assert!(prompt.contains("no ranges"));
    }

    #[test]
    fn test_unknown_fields_render_as_unknown() {
        let profile = UserProfile {
            id: "u1".to_string(),
            name: "User".to_string(),
            gender: "Unknown".to_string(),
            age: None,
            weight: None,
        };
        let prompt = build(&profile);
        assert!(prompt.contains("age: Unknown"));
        assert!(prompt.contains("weight: Unknown"));
    }
}

/// Normalize a display name into a URL-safe slug.
///
/// Lowercases and trims the input, strips everything outside
/// `[a-z0-9_\s-]`, collapses runs of whitespace, underscores, and hyphens
/// into a single hyphen, and drops leading/trailing hyphens. Idempotent;
/// not reversible.
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        }
        // any other character is stripped
    }

    slug
}

/// Best-effort inverse of `generate_slug`: hyphens become spaces and each
/// token is capitalized. Lossy — original casing, punctuation, and merged
/// words cannot be recovered.
pub fn slug_to_name(slug: &str) -> String {
    slug.split('-')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// True iff `slug` identifies the game called `name`. Equality check only,
/// never used to generate slugs.
pub fn slug_matches_game_name(slug: &str, name: &str) -> bool {
    generate_slug(name) == slug.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slug_basic() {
        assert_eq!(generate_slug("Rocket League"), "rocket-league");
        assert_eq!(generate_slug("  Apex Legends  "), "apex-legends");
    }

    #[test]
    fn test_generate_slug_strips_punctuation() {
        assert_eq!(
            generate_slug("Sid Meier's Civilization VI"),
            "sid-meiers-civilization-vi"
        );
        assert_eq!(generate_slug("Counter-Strike: Source"), "counter-strike-source");
    }

    #[test]
    fn test_generate_slug_collapses_separator_runs() {
        assert_eq!(generate_slug("a  -  b__c"), "a-b-c");
        assert_eq!(generate_slug("--edge--case--"), "edge-case");
    }

    #[test]
    fn test_generate_slug_empty_and_symbol_only() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("!!!"), "");
    }

    #[test]
    fn test_generate_slug_is_idempotent() {
        let inputs = [
            "Rocket League",
            "Sid Meier's Civilization VI",
            "  spaced   out  ",
            "--already--slugged--",
            "UPPER_case_MIX 42",
            "日本語 Title!",
        ];
        for input in inputs {
            let once = generate_slug(input);
            assert_eq!(generate_slug(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_slug_to_name_capitalizes_tokens() {
        assert_eq!(slug_to_name("rocket-league"), "Rocket League");
        assert_eq!(slug_to_name("apex"), "Apex");
        assert_eq!(slug_to_name(""), "");
    }

    #[test]
    fn test_slug_to_name_is_lossy() {
        // Punctuation from the original name is gone for good.
        let name = "Sid Meier's Civilization VI";
        let round_trip = slug_to_name(&generate_slug(name));
        assert_eq!(round_trip, "Sid Meiers Civilization Vi");
        assert_ne!(round_trip, name);
    }

    #[test]
    fn test_slug_matches_generated_slug_of_name() {
        let names = ["Rocket League", "Sid Meier's Civilization VI", "Overwatch 2"];
        for name in names {
            assert!(slug_matches_game_name(&generate_slug(name), name));
        }
    }

    #[test]
    fn test_slug_match_is_case_insensitive_on_slug() {
        assert!(slug_matches_game_name("Rocket-League", "Rocket League"));
        assert!(!slug_matches_game_name("rocket-league", "Apex Legends"));
    }
}

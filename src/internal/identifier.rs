/// Token used when a display name contains no usable characters at all.
pub const FALLBACK_IDENTIFIER: &str = "webapp";

/// Derives the stable app identifier from a display name. Pure and total:
/// the same name always yields the same token. Distinct names may collide,
/// collisions surface only through the overwrite prompt.
pub fn derive_identifier(display_name: &str) -> String {
    let token: String = display_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if token.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }

    // Desktop entry and icon names should not start with a digit
    if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("x{token}")
    } else {
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_separators() {
        assert_eq!(derive_identifier("My App"), "myapp");
        assert_eq!(derive_identifier("YouTube Music"), "youtubemusic");
        assert_eq!(derive_identifier("web.whatsapp.com"), "webwhatsappcom");
    }

    #[test]
    fn digit_leading_names_get_prefixed() {
        assert_eq!(derive_identifier("123 Go!"), "x123go");
        assert_eq!(derive_identifier("7zip"), "x7zip");
    }

    #[test]
    fn unusable_names_fall_back() {
        assert_eq!(derive_identifier(""), FALLBACK_IDENTIFIER);
        assert_eq!(derive_identifier("!!! ???"), FALLBACK_IDENTIFIER);
        assert_eq!(derive_identifier("   "), FALLBACK_IDENTIFIER);
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(derive_identifier("Café"), "caf");
    }

    #[test]
    fn derivation_is_deterministic() {
        for name in ["My App", "123 Go!", "", "Ünïcode Stuff 42"] {
            assert_eq!(derive_identifier(name), derive_identifier(name));
        }
    }

    #[test]
    fn output_is_always_a_valid_identifier() {
        for name in ["My App", "123 Go!", "!!!", "x", "9", "É"] {
            let id = derive_identifier(name);
            assert!(!id.is_empty());
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(id.chars().next().unwrap().is_ascii_lowercase());
        }
    }
}

/// Filename stem for a card image.
///
/// Lowercases the name, drops everything outside `[a-z0-9-]` and whitespace,
/// then joins the remaining words with single hyphens. Symbols are removed
/// before whitespace is collapsed, so `"Mind • Body"` becomes `"mind-body"`.
pub fn card_slug(name: &str) -> String {
    let kept: String = name
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| {
            ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-' || ch.is_whitespace()
        })
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::card_slug;

    #[test]
    fn plain_names() {
        assert_eq!(card_slug("The Fool"), "the-fool");
        assert_eq!(card_slug("Wheel of Fortune"), "wheel-of-fortune");
        assert_eq!(card_slug("Strength"), "strength");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(card_slug(""), "");
        assert_eq!(card_slug("   "), "");
        assert_eq!(card_slug("•"), "");
    }
}

//! Text normalization and brand/name splitting.

use super::patterns::NAME_SEPARATOR_RE;

/// Collapse whitespace runs to single spaces and trim.
///
/// Whitespace-only input yields `None`, so a populated field is never an
/// empty string.
pub fn clean_text(text: &str) -> Option<String> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Split a product title into brand and name.
///
/// Tries an explicit separator (" - " or a whitespace-bounded "by")
/// first, then falls back to treating the first word as the brand.
/// Multi-word brands mis-split under the fallback ("Arturo Fuente
/// Hemingway" yields brand "Arturo"); that is accepted heuristic
/// behavior, not something to correct per-brand.
pub fn split_brand_and_name(full_name: &str) -> (Option<String>, Option<String>) {
    let mut parts = NAME_SEPARATOR_RE.splitn(full_name, 2);
    if let (Some(brand), Some(name)) = (parts.next(), parts.next()) {
        return (clean_text(brand), clean_text(name));
    }

    let words: Vec<&str> = full_name.split_whitespace().collect();
    if words.len() > 1 {
        return (clean_text(words[0]), clean_text(&words[1..].join(" ")));
    }

    (None, clean_text(full_name))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", None)]
    #[case("   \t\n ", None)]
    #[case("  a   b ", Some("a b"))]
    #[case("already clean", Some("already clean"))]
    fn clean_text_collapses_whitespace(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(clean_text(input).as_deref(), expected);
    }

    #[rstest]
    #[case("Padron - 1964 Anniversary", Some("Padron"), Some("1964 Anniversary"))]
    #[case("Montecristo by AJ Fernandez", Some("Montecristo"), Some("AJ Fernandez"))]
    #[case("Undercrown BY Drew Estate", Some("Undercrown"), Some("Drew Estate"))]
    #[case("ArturoFuente", None, Some("ArturoFuente"))]
    // The first-word fallback mis-splits multi-word brands; documented
    // limitation.
    #[case("Arturo Fuente Hemingway", Some("Arturo"), Some("Fuente Hemingway"))]
    fn splits_brand_and_name(
        #[case] input: &str,
        #[case] brand: Option<&str>,
        #[case] name: Option<&str>,
    ) {
        let (got_brand, got_name) = split_brand_and_name(input);
        assert_eq!(got_brand.as_deref(), brand);
        assert_eq!(got_name.as_deref(), name);
    }

    #[test]
    fn separator_splits_at_most_once() {
        let (brand, name) = split_brand_and_name("Liga - Privada - No. 9");
        assert_eq!(brand.as_deref(), Some("Liga"));
        assert_eq!(name.as_deref(), Some("Privada - No. 9"));
    }

    #[test]
    fn by_inside_a_word_is_not_a_separator() {
        let (brand, name) = split_brand_and_name("Derby Especial");
        assert_eq!(brand.as_deref(), Some("Derby"));
        assert_eq!(name.as_deref(), Some("Especial"));
    }
}

use geo_grid_core::tags::TagExtractor;

fn extract_sorted(text: &str) -> Vec<String> {
    let mut tags = TagExtractor::new().extract(text);
    tags.sort();
    tags
}

#[test]
fn test_tags_bounded_by_whitespace_are_extracted() {
    assert_eq!(extract_sorted("a #x b #y c"), vec!["x", "y"]);
}

#[test]
fn test_tag_at_text_start_is_excluded() {
    assert!(extract_sorted("#x a").is_empty());
}

#[test]
fn test_tag_at_text_end_is_excluded() {
    assert!(extract_sorted("a #x").is_empty());
}

#[test]
fn test_tag_followed_by_punctuation_is_excluded() {
    assert!(extract_sorted("a #x, b").is_empty());
}

#[test]
fn test_repeated_tag_counts_once() {
    assert_eq!(extract_sorted("a #x b #x c"), vec!["x"]);
}

#[test]
fn test_adjacent_tags_without_spacing_are_excluded() {
    assert!(extract_sorted("a #x#y b").is_empty());
}

#[test]
fn test_blank_text_yields_nothing() {
    assert!(extract_sorted(" ").is_empty());
}

#[test]
fn test_word_characters_include_digits_and_underscores() {
    assert_eq!(extract_sorted("go #rust_2024 now"), vec!["rust_2024"]);
}

#[test]
fn test_bare_hash_is_not_a_tag() {
    assert!(extract_sorted("a # b").is_empty());
}

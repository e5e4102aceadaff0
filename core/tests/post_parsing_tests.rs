use geo_grid_core::post::Post;

#[test]
fn test_nested_coordinate_pair_is_preferred() {
    let line = r#"{"doc": {"coordinates": {"coordinates": [144.9, -37.8]}, "text": "Hello"}, "geo": {"coordinates": [1.0, 2.0]}}"#;
    let post = Post::parse_line(line).unwrap();
    assert_eq!(post.x, 144.9);
    assert_eq!(post.y, -37.8);
}

#[test]
fn test_geo_pair_is_the_fallback() {
    let line = r#"{"doc": {"text": "Hello"}, "geo": {"coordinates": [144.9, -37.8]}}"#;
    let post = Post::parse_line(line).unwrap();
    assert_eq!(post.x, 144.9);
    assert_eq!(post.y, -37.8);
}

#[test]
fn test_fallback_applies_when_nested_x_is_zero() {
    // The nested pair only sticks when it produces a non-zero x; a zero x
    // sends the lookup to the top-level geo pair, both components included.
    let line = r#"{"doc": {"coordinates": {"coordinates": [0.0, -37.8]}}, "geo": {"coordinates": [144.9, -37.5]}}"#;
    let post = Post::parse_line(line).unwrap();
    assert_eq!(post.x, 144.9);
    assert_eq!(post.y, -37.5);
}

#[test]
fn test_record_without_doc_defaults_to_origin_and_blank_text() {
    let post = Post::parse_line("{}").unwrap();
    assert_eq!(post.x, 0.0);
    assert_eq!(post.y, 0.0);
    assert_eq!(post.text, " ");
}

#[test]
fn test_text_is_lowercased() {
    let line = r#"{"doc": {"text": "Hello #Melbourne World"}}"#;
    let post = Post::parse_line(line).unwrap();
    assert_eq!(post.text, "hello #melbourne world");
}

#[test]
fn test_trailing_separator_is_stripped() {
    let line = r#"{"doc": {"coordinates": {"coordinates": [1.5, 0.5]}, "text": "hi"}},"#;
    let post = Post::parse_line(line).unwrap();
    assert_eq!(post.x, 1.5);
}

#[test]
fn test_malformed_line_is_rejected() {
    assert_eq!(Post::parse_line("["), None);
    assert_eq!(Post::parse_line(r#"{"rows": ["#), None);
    assert_eq!(Post::parse_line(""), None);
}

#[test]
fn test_short_coordinate_array_is_ignored() {
    let line = r#"{"doc": {"coordinates": {"coordinates": [144.9]}, "text": "hi"}}"#;
    let post = Post::parse_line(line).unwrap();
    assert_eq!(post.x, 0.0);
    assert_eq!(post.y, 0.0);
}

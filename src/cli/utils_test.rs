use crate::cli::utils::*;

#[test]
fn test_truncate_with_ellipsis_short_string() {
    let result = truncate_with_ellipsis("hello", 10);
    assert_eq!(result, "hello");
}

#[test]
fn test_truncate_with_ellipsis_exact_length() {
    let result = truncate_with_ellipsis("hello", 5);
    assert_eq!(result, "hello");
}

#[test]
fn test_truncate_with_ellipsis_long_url() {
    let result = truncate_with_ellipsis("https://github.com/rust-lang/rust", 15);
    assert_eq!(result, "https://gith...");
}

#[test]
fn test_truncate_with_ellipsis_tiny_max() {
    assert_eq!(truncate_with_ellipsis("abcdef", 2), "...");
}

#[test]
fn test_apply_table_style_uses_rounded_corners() {
    use tabled::builder::Builder;

    let mut builder = Builder::default();
    builder.push_record(["Name", "Language"]);
    builder.push_record(["tokio", "rust"]);
    let mut table = builder.build();

    apply_table_style(&mut table);
    let rendered = table.to_string();
    assert!(rendered.starts_with('╭'));
    assert!(rendered.contains("tokio"));
}

use crate::paths::PathNormalizer;
use std::path::MAIN_SEPARATOR;

fn sep(path: &str) -> String {
    path.replace('/', &MAIN_SEPARATOR.to_string())
}

#[test]
fn test_to_native_forward_slashes() {
    assert_eq!(PathNormalizer::to_native("test/test.txt"), sep("test/test.txt"));
}

#[test]
fn test_to_native_backslashes() {
    assert_eq!(PathNormalizer::to_native("test\\test.txt"), sep("test/test.txt"));
}

#[test]
fn test_to_native_mixed_separators() {
    assert_eq!(
        PathNormalizer::to_native("a/b\\c/d.txt"),
        sep("a/b/c/d.txt")
    );
}

#[test]
fn test_to_native_empty() {
    assert_eq!(PathNormalizer::to_native(""), "");
}

#[test]
fn test_to_dotted() {
    assert_eq!(PathNormalizer::to_dotted("test/test.txt"), "test.test.txt");
    assert_eq!(PathNormalizer::to_dotted("test\\test.txt"), "test.test.txt");
    assert_eq!(PathNormalizer::to_dotted("a/b\\c.txt"), "a.b.c.txt");
}

#[test]
fn test_from_dotted_recovers_nested_path() {
    assert_eq!(
        PathNormalizer::from_dotted("test.test.test.txt"),
        sep("test/test/test.txt")
    );
}

#[test]
fn test_from_dotted_single_segment() {
    assert_eq!(PathNormalizer::from_dotted("test.txt"), "test.txt");
}

#[test]
fn test_from_dotted_no_extension() {
    // Without a dot there is no segment information to recover
    assert_eq!(PathNormalizer::from_dotted("README"), "README");
}

#[test]
fn test_dotted_round_trip() {
    let dotted = PathNormalizer::to_dotted("a/b/c.txt");
    assert_eq!(dotted, "a.b.c.txt");
    assert_eq!(PathNormalizer::from_dotted(&dotted), sep("a/b/c.txt"));
}

#[test]
fn test_directory_prefix_empty_input() {
    assert_eq!(PathNormalizer::directory_prefix(""), "");
}

#[test]
fn test_directory_prefix_dot_input() {
    assert_eq!(PathNormalizer::directory_prefix("."), "");
}

#[test]
fn test_directory_prefix_appends_separator() {
    assert_eq!(PathNormalizer::directory_prefix("test"), sep("test/"));
}

#[test]
fn test_directory_prefix_keeps_existing_separator() {
    assert_eq!(PathNormalizer::directory_prefix("test/"), sep("test/"));
    assert_eq!(PathNormalizer::directory_prefix("test\\"), sep("test/"));
}

#[test]
fn test_directory_prefix_nested() {
    assert_eq!(
        PathNormalizer::directory_prefix("test/test"),
        sep("test/test/")
    );
}

#[test]
fn test_directory_prefix_disambiguates_siblings() {
    // The trailing separator is what keeps "test2/..." out of a "test" query
    let prefix = PathNormalizer::directory_prefix("test");
    assert!(sep("test/sub.txt").starts_with(&prefix));
    assert!(!sep("test2/sub.txt").starts_with(&prefix));
}

#[test]
fn test_strip_root_prefix_lone_dot() {
    assert_eq!(PathNormalizer::strip_root_prefix("."), "");
}

#[test]
fn test_strip_root_prefix_dot_slash() {
    assert_eq!(PathNormalizer::strip_root_prefix("./test"), "test");
    assert_eq!(PathNormalizer::strip_root_prefix(".\\test"), "test");
}

#[test]
fn test_strip_root_prefix_passthrough() {
    assert_eq!(PathNormalizer::strip_root_prefix("test/test.txt"), "test/test.txt");
    assert_eq!(PathNormalizer::strip_root_prefix(""), "");
}

#[test]
fn test_strip_root_prefix_keeps_hidden_files() {
    assert_eq!(PathNormalizer::strip_root_prefix(".gitignore"), ".gitignore");
}

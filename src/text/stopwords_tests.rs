use super::*;

use std::fs;
use std::io::Write;

fn temp_dir_with_file(name: &str, content: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut file = fs::File::create(dir.path().join(name)).expect("create stopword file");
    file.write_all(content.as_bytes()).expect("write stopword file");
    dir
}

#[test]
fn test_bundled_english_non_empty() {
    let store = StopwordStore::new();
    let set = store.stopwords("en");
    assert!(!set.is_empty());
    assert!(set.contains("the"));
    assert!(set.contains("and"));
}

#[test]
fn test_bundled_french_non_empty() {
    let store = StopwordStore::new();
    assert!(store.is_stopword("fr", "le"));
    assert!(store.is_stopword("fr", "avec"));
}

#[test]
fn test_unknown_language_is_empty() {
    let store = StopwordStore::new();
    assert!(store.stopwords("gibberish").is_empty());
    // Cached empty result stays empty on the second lookup.
    assert!(store.stopwords("gibberish").is_empty());
}

#[test]
fn test_is_stopword() {
    let store = StopwordStore::new();
    assert!(store.is_stopword("en", "here"));
    assert!(!store.is_stopword("en", "love"));
}

#[test]
fn test_search_path_wins_over_bundled() {
    let dir = temp_dir_with_file("en", "this words fun");
    let store = StopwordStore::new();
    store.register_search_path(dir.path());

    let set = store.stopwords("en");
    assert_eq!(set.len(), 3);
    assert!(set.contains("fun"));
    assert!(!set.contains("the"));
}

#[test]
fn test_custom_language_file() {
    let dir = temp_dir_with_file("tlh", "qapla batlh");
    let store = StopwordStore::new();
    store.register_search_path(dir.path());

    assert!(store.is_stopword("tlh", "qapla"));
    assert!(!store.is_stopword("tlh", "love"));
}

#[test]
fn test_registration_does_not_invalidate_cached_language() {
    let dir = temp_dir_with_file("en", "custom");
    let store = StopwordStore::new();

    // Warm the cache from the bundled corpus first.
    assert!(store.is_stopword("en", "the"));

    store.register_search_path(dir.path());
    assert!(store.is_stopword("en", "the"));
    assert!(!store.is_stopword("en", "custom"));

    store.invalidate("en");
    assert!(store.is_stopword("en", "custom"));
    assert!(!store.is_stopword("en", "the"));
}

#[test]
fn test_clear_resets_all_languages() {
    let dir = temp_dir_with_file("en", "custom");
    let store = StopwordStore::new();

    assert!(store.is_stopword("en", "the"));
    store.register_search_path(dir.path());
    store.clear();

    assert!(store.is_stopword("en", "custom"));
}

#[test]
fn test_first_matching_directory_wins() {
    let first = temp_dir_with_file("xy", "alpha");
    let second = temp_dir_with_file("xy", "beta");
    let store = StopwordStore::new();

    // Registration prepends, so the last registered path is scanned first.
    store.register_search_path(second.path());
    store.register_search_path(first.path());

    assert!(store.is_stopword("xy", "alpha"));
    assert!(!store.is_stopword("xy", "beta"));
}

#[test]
fn test_file_split_on_any_whitespace() {
    let dir = temp_dir_with_file("xy", "one\ttwo\nthree  four\n");
    let store = StopwordStore::new();
    store.register_search_path(dir.path());

    let set = store.stopwords("xy");
    assert_eq!(set.len(), 4);
    assert!(set.contains("three"));
}

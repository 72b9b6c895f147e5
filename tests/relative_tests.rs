#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Tests for common-base and relative-reference computation
use rusturl::Url;

fn parse(input: &str) -> Url {
    Url::parse(input).unwrap()
}

#[test]
fn test_common_base_of_siblings() {
    let a = parse("http://example.com/docs/guide/intro.html");
    let b = parse("http://example.com/docs/guide/setup.html#install");
    let base = a.common_base(&b).unwrap();
    assert_eq!(base.href(), "http://example.com/docs/guide");
    assert_eq!(base.query(), None);
    assert_eq!(base.fragment(), None);
}

#[test]
fn test_common_base_is_symmetric_in_path() {
    let a = parse("http://example.com/a/b/c");
    let b = parse("http://example.com/a/x");
    assert_eq!(a.common_base(&b).unwrap().path(), b.common_base(&a).unwrap().path());
}

#[test]
fn test_common_base_of_unrelated_paths_is_root() {
    let a = parse("https://example.com/left");
    let b = parse("https://example.com/right");
    assert_eq!(a.common_base(&b).unwrap().href(), "https://example.com/");

    let a = parse("foo://h/left");
    let b = parse("foo://h/right");
    assert_eq!(a.common_base(&b).unwrap().href(), "foo://h");
}

#[test]
fn test_no_common_base() {
    let a = parse("http://example.com/a");
    assert!(a.common_base(&parse("http://example.org/a")).is_none());
    assert!(a.common_base(&parse("http://user:pw@example.com/a")).is_none());
    assert!(parse("data:x").common_base(&parse("data:y")).is_none());
}

#[test]
fn test_make_relative_round_trips() {
    let base = parse("https://example.com/docs/guide/intro.html?lang=en");
    let targets = [
        "https://example.com/docs/guide/setup.html",
        "https://example.com/docs/guide/",
        "https://example.com/docs/api/index.html",
        "https://example.com/",
        "https://example.com/docs/guide/intro.html?lang=fr",
        "https://example.com/docs/guide/intro.html#top",
        "https://example.com/docs/guide/a:b",
        "https://example.com/docs/guide//deep",
    ];
    for target in targets {
        let target = parse(target);
        let relative = base.make_relative(&target).unwrap();
        assert_eq!(base.join(&relative).unwrap(), target, "{relative}");
    }
}

#[test]
fn test_make_relative_examples() {
    let base = parse("https://example.com/docs/guide/intro.html");
    let relative = |target: &str| base.make_relative(&parse(target)).unwrap();
    assert_eq!(relative("https://example.com/docs/guide/setup.html"), "setup.html");
    assert_eq!(relative("https://example.com/docs/api/x"), "../api/x");
    assert_eq!(relative("https://example.com/docs/guide/"), "./");
    assert_eq!(relative("https://example.com/docs/guide/intro.html"), "");
}

#[test]
fn test_make_relative_needs_same_origin_parts() {
    let base = parse("https://example.com/a");
    assert_eq!(base.make_relative(&parse("http://example.com/a")), None);
    assert_eq!(base.make_relative(&parse("https://example.com:8443/a")), None);
    assert_eq!(parse("mailto:a").make_relative(&parse("mailto:b")), None);
}

#[test]
fn test_make_relative_file_drive_letters() {
    let base = parse("file:///C:/docs/a.txt");
    let same_drive = parse("file:///C:/other/b.txt");
    let relative = base.make_relative(&same_drive).unwrap();
    assert_eq!(relative, "../other/b.txt");
    assert_eq!(base.join(&relative).unwrap(), same_drive);

    // Nothing relative reaches another drive
    assert_eq!(base.make_relative(&parse("file:///D:/b")), None);
    assert_eq!(parse("file:///C:/a").make_relative(&parse("file:///D:/b")), None);
}

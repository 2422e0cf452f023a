#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Edge cases: authority quirks, file URLs, encoding, host errors
use weburl::{Host, ParseError, Url};

fn parse(input: &str, base: Option<&str>) -> Result<Url, ParseError> {
    Url::parse(input, base)
}

#[test]
fn test_input_edges_are_trimmed() {
    let url = parse("  https://example.com/  ", None).unwrap();
    assert_eq!(url.href(), "https://example.com/");
}

#[test]
fn test_tabs_and_newlines_are_stripped() {
    let url = parse("ht\ttp://exa\nmple.com/pa\rth", None).unwrap();
    assert_eq!(url.href(), "http://example.com/path");
}

#[test]
fn test_multiple_at_signs_in_authority() {
    // Everything before the last '@' is userinfo
    let url = parse("http://u@v@example.com/", None).unwrap();
    assert_eq!(url.username(), "u%40v");
    assert_eq!(url.hostname(), "example.com");
    assert_eq!(url.href(), "http://u%40v@example.com/");
}

#[test]
fn test_userinfo_is_percent_encoded() {
    let url = parse("http://us er:pa:ss@example.com/", None).unwrap();
    assert_eq!(url.username(), "us%20er");
    assert_eq!(url.password(), "pa%3Ass");
}

#[test]
fn test_backslashes_in_special_urls() {
    let url = parse("http:\\\\example.com\\path", None).unwrap();
    assert_eq!(url.href(), "http://example.com/path");
}

#[test]
fn test_windows_drive_letter_normalization() {
    let url = parse("file:///C|/dir/file", None).unwrap();
    assert_eq!(url.href(), "file:///C:/dir/file");
    assert_eq!(url.pathname(), "/C:/dir/file");
}

#[test]
fn test_windows_drive_letter_is_not_a_host() {
    let url = parse("file://C:/dir", None).unwrap();
    assert_eq!(url.hostname(), "");
    assert_eq!(url.pathname(), "/C:/dir");
}

#[test]
fn test_relative_file_url_keeps_base_drive() {
    let url = parse("/x", Some("file:///C:/y")).unwrap();
    assert_eq!(url.href(), "file:///C:/x");

    // A fresh drive letter replaces the base's
    let url = parse("/D:/x", Some("file:///C:/y")).unwrap();
    assert_eq!(url.href(), "file:///D:/x");
}

#[test]
fn test_shorten_path_keeps_lone_drive_letter() {
    let url = parse("..", Some("file:///C:/dir")).unwrap();
    assert_eq!(url.pathname(), "/C:/");
}

#[test]
fn test_dot_segments_including_encoded_forms() {
    let url = parse("http://example.com/a/%2E%2E/b", None).unwrap();
    assert_eq!(url.pathname(), "/b");

    let url = parse("http://example.com/a/%2e/b", None).unwrap();
    assert_eq!(url.pathname(), "/a/b");

    let url = parse("http://example.com/a/./b/../c", None).unwrap();
    assert_eq!(url.pathname(), "/a/c");
}

#[test]
fn test_path_percent_encoding() {
    let url = parse("http://example.com/a b", None).unwrap();
    assert_eq!(url.pathname(), "/a%20b");

    // Already-encoded bytes pass through untouched
    let url = parse("http://example.com/a%20b", None).unwrap();
    assert_eq!(url.pathname(), "/a%20b");
}

#[test]
fn test_query_encoding_differs_for_special_schemes() {
    let url = parse("http://example.com/?it's", None).unwrap();
    assert_eq!(url.search(), "?it%27s");

    let url = parse("web+demo://example/?it's", None).unwrap();
    assert_eq!(url.search(), "?it's");
}

#[test]
fn test_fragment_encoding() {
    let url = parse("http://example.com/#a b`c", None).unwrap();
    assert_eq!(url.hash(), "#a%20b%60c");
}

#[test]
fn test_empty_query_and_fragment_are_kept_in_href() {
    let url = parse("http://example.com/?#", None).unwrap();
    assert_eq!(url.search(), "");
    assert_eq!(url.hash(), "");
    assert_eq!(url.href(), "http://example.com/?#");
}

#[test]
fn test_unicode_domain_to_ascii() {
    let url = parse("http://日本.jp/", None).unwrap();
    assert_eq!(url.hostname(), "xn--wgv71a.jp");
}

#[test]
fn test_percent_decoded_domain() {
    let url = parse("http://ex%61mple.com/", None).unwrap();
    assert_eq!(url.hostname(), "example.com");
}

#[test]
fn test_opaque_host_keeps_percent_sequences() {
    let url = parse("web+demo://h%6Fst/", None).unwrap();
    assert_eq!(url.hostname(), "h%6Fst");
}

#[test]
fn test_opaque_host_rejects_forbidden_code_points() {
    assert_eq!(
        parse("web+demo://ho st/", None),
        Err(ParseError::HostInvalidCodePoint)
    );
}

#[test]
fn test_domain_rejects_forbidden_code_points() {
    assert_eq!(
        parse("http://ex%7Cmple.com/", None),
        Err(ParseError::DomainInvalidCodePoint)
    );
}

#[test]
fn test_domain_ending_in_number_must_be_ipv4() {
    assert_eq!(
        parse("http://example.89/", None),
        Err(ParseError::Ipv4NonNumericPart)
    );
}

#[test]
fn test_ipv6_errors_surface() {
    assert_eq!(
        parse("http://[1:2:3]/", None),
        Err(ParseError::Ipv6TooFewPieces)
    );
    assert_eq!(parse("http://[::1/", None), Err(ParseError::Ipv6Unclosed));
    assert_eq!(
        parse("http://[1::2::3]/", None),
        Err(ParseError::Ipv6MultipleCompression)
    );
}

#[test]
fn test_parsed_host_variants() {
    let url = parse("http://example.com/", None).unwrap();
    assert_eq!(
        url.parsed_host(),
        Some(&Host::Domain("example.com".to_string()))
    );

    let url = parse("http://127.0.0.1/", None).unwrap();
    assert_eq!(url.parsed_host(), Some(&Host::Ipv4(0x7F00_0001)));

    let url = parse("http://[2001:0:0:0:1:0:0:1]/", None).unwrap();
    assert_eq!(
        url.parsed_host(),
        Some(&Host::Ipv6([0x2001, 0, 0, 0, 1, 0, 0, 1]))
    );

    let url = parse("file:///x", None).unwrap();
    assert_eq!(url.parsed_host(), Some(&Host::Empty));

    let url = parse("mailto:x@y", None).unwrap();
    assert_eq!(url.parsed_host(), None);
}

#[test]
fn test_fragment_only_against_opaque_path_base() {
    let url = parse("#frag", Some("mailto:user@example.com")).unwrap();
    assert_eq!(url.href(), "mailto:user@example.com#frag");

    // Anything else cannot be resolved against an opaque path
    assert_eq!(
        parse("x", Some("mailto:user@example.com")),
        Err(ParseError::MissingSchemeNonRelativeUrl)
    );
}

#[test]
fn test_non_special_scheme_with_authority() {
    let url = parse("web+demo://host/path", None).unwrap();
    assert_eq!(url.hostname(), "host");
    assert_eq!(url.pathname(), "/path");

    // Empty host is fine for non-special schemes
    let url = parse("web+demo:///path", None).unwrap();
    assert_eq!(url.hostname(), "");
    assert_eq!(url.href(), "web+demo:///path");
}

#[test]
fn test_scheme_lookalike_restarts_as_relative() {
    // "1:" cannot start a scheme, so the input re-reads as a path
    let url = parse("1:two", Some("http://example.com/dir/")).unwrap();
    assert_eq!(url.href(), "http://example.com/dir/1:two");
}

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::borrow::Cow;

// Encode sets per https://url.spec.whatwg.org/#percent-encoded-bytes
// Non-ASCII bytes are always encoded by utf8_percent_encode, which covers
// the "> 0x7E" half of the C0 rule.

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Query percent-encode set (for non-special URLs)
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special query percent-encode set (http, https, ws, wss, ftp, file)
/// Query + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// Path percent-encode set
/// Query + ?, \`, {, }
pub const PATH_SET: &AsciiSet = &QUERY_SET.add(b'?').add(b'`').add(b'{').add(b'}');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], ^, |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// Percent-encode a string using the provided encode set
pub fn percent_encode_with_set(input: &str, encode_set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, encode_set).to_string()
}

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode a single code point into the buffer
pub fn percent_encode_char_into(buffer: &mut String, c: char, encode_set: &'static AsciiSet) {
    let mut utf8 = [0u8; 4];
    percent_encode_into(buffer, c.encode_utf8(&mut utf8), encode_set);
}

/// Decode percent-encoded bytes, replacing invalid UTF-8 sequences.
/// A '%' not followed by two hex digits passes through literally.
pub fn percent_decode_lossy(input: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(input).decode_utf8_lossy()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_decode_lossy() {
        assert_eq!(percent_decode_lossy("hello%20world"), "hello world");
        assert_eq!(percent_decode_lossy("test"), "test");
        assert_eq!(percent_decode_lossy("%2F"), "/");
        assert_eq!(percent_decode_lossy("%C3%A9"), "é");

        // Lone '%' passes through
        assert_eq!(percent_decode_lossy("100%"), "100%");
        assert_eq!(percent_decode_lossy("%zz"), "%zz");
    }

    #[test]
    fn test_encode_sets() {
        // Space is encoded in every set; uppercase hex digits
        assert_eq!(percent_encode_with_set("a b", FRAGMENT_SET), "a%20b");

        // '?' is safe in queries but not in paths
        assert_eq!(percent_encode_with_set("a?b", QUERY_SET), "a?b");
        assert_eq!(percent_encode_with_set("a?b", PATH_SET), "a%3Fb");

        // '\'' only differs between the two query sets
        assert_eq!(percent_encode_with_set("it's", QUERY_SET), "it's");
        assert_eq!(percent_encode_with_set("it's", SPECIAL_QUERY_SET), "it%27s");

        // Userinfo encodes delimiters
        assert_eq!(percent_encode_with_set("a:b@c", USERINFO_SET), "a%3Ab%40c");

        // Non-ASCII is always encoded
        assert_eq!(percent_encode_with_set("é", FRAGMENT_SET), "%C3%A9");
    }
}

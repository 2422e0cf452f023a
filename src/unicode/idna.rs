use crate::error::{ParseError, Result};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    // Check for .xn-- patterns using memchr for faster scanning
    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Process a domain using IDNA `ToASCII`.
/// An empty result counts as failure.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    // Fast path: pure ASCII without Punycode needs no IDNA processing,
    // only lowercasing. Forbidden code points are checked by the caller.
    if domain.is_ascii() && !has_punycode(domain) {
        if domain.is_empty() {
            return Err(ParseError::DomainToAscii);
        }
        return Ok(domain.to_ascii_lowercase());
    }

    // Slow path: Unicode or Punycode requires full IDNA processing
    let ascii = idna::domain_to_ascii(domain).map_err(|_| ParseError::DomainToAscii)?;
    if ascii.is_empty() {
        return Err(ParseError::DomainToAscii);
    }
    Ok(ascii)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_to_ascii() {
        // ASCII domain passes through lowercased
        assert_eq!(domain_to_ascii("example.com").unwrap(), "example.com");
        assert_eq!(domain_to_ascii("EXAMPLE.COM").unwrap(), "example.com");

        // Unicode domain is converted
        let result = domain_to_ascii("日本.jp").unwrap();
        assert!(result.starts_with("xn--"));

        // Empty result is an error
        assert_eq!(domain_to_ascii(""), Err(ParseError::DomainToAscii));
    }

    #[test]
    fn test_has_punycode() {
        assert!(has_punycode("xn--wgv71a.jp"));
        assert!(has_punycode("sub.XN--wgv71a.jp"));
        assert!(!has_punycode("example.com"));
    }
}

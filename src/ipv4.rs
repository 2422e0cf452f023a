/// IPv4 address parser supporting decimal, octal, and hexadecimal notation
use crate::error::{ParseError, Result};

/// Parse an IPv4 address string into a u32.
/// Supports:
/// - Decimal: 192.168.1.1
/// - Hex: 0xC0A80101
/// - Octal: 0300.0250.01.01
/// - Mixed: 192.0x00A80001
/// - A single trailing dot is ignored
pub fn parse_ipv4(input: &str) -> Result<u32> {
    let mut parts: Vec<&str> = input.split('.').collect();

    // Trailing dot is allowed and dropped
    if parts.last() == Some(&"") && parts.len() > 1 {
        parts.pop();
    }

    let part_count = parts.len();
    if part_count > 4 {
        return Err(ParseError::Ipv4TooManyParts);
    }

    let numbers: Vec<u64> = parts
        .iter()
        .map(|part| parse_ipv4_number(part).ok_or(ParseError::Ipv4NonNumericPart))
        .collect::<Result<Vec<_>>>()?;

    // All but the last number are single bytes
    if numbers.iter().take(part_count - 1).any(|&num| num > 255) {
        return Err(ParseError::Ipv4OutOfRangePart);
    }

    // The last number fills the remaining bytes: it must be < 256^(5-n)
    let last = numbers[part_count - 1];
    if last >= 256u64.pow((5 - part_count) as u32) {
        return Err(ParseError::Ipv4OutOfRangePart);
    }

    let mut ipv4 = last as u32;
    for (i, &number) in numbers.iter().enumerate().take(part_count - 1) {
        ipv4 |= (number as u32) << ((3 - i) * 8);
    }

    Ok(ipv4)
}

/// Parse a single IPv4 number component with radix detection.
/// Returns None when the part does not round-trip through its radix.
pub fn parse_ipv4_number(input: &str) -> Option<u64> {
    if input.is_empty() {
        return None;
    }

    // Hex prefix (0x or 0X); a bare prefix is 0
    if let Some(hex_part) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        return if hex_part.is_empty() {
            Some(0)
        } else {
            u64::from_str_radix(hex_part, 16).ok()
        };
    }

    // Octal (leading 0 with more digits)
    if input.len() >= 2 && input.starts_with('0') {
        return u64::from_str_radix(input, 8).ok();
    }

    input.parse::<u64>().ok()
}

/// Serialize an IPv4 address (u32) to dotted decimal notation
pub fn serialize_ipv4(ipv4: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (ipv4 >> 24) & 0xFF,
        (ipv4 >> 16) & 0xFF,
        (ipv4 >> 8) & 0xFF,
        ipv4 & 0xFF
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::unreadable_literal)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4_decimal() {
        assert_eq!(parse_ipv4("192.168.1.1").unwrap(), 0xC0A80101);
        assert_eq!(parse_ipv4("127.0.0.1").unwrap(), 0x7F000001);
    }

    #[test]
    fn test_parse_ipv4_hex() {
        assert_eq!(parse_ipv4("0xC0A80101").unwrap(), 0xC0A80101);
        assert_eq!(parse_ipv4("192.0x00A80001").unwrap(), 0xC0A80001);
        assert_eq!(parse_ipv4("0x").unwrap(), 0);
    }

    #[test]
    fn test_parse_ipv4_octal() {
        assert_eq!(parse_ipv4("0300.0250.01.01").unwrap(), 0xC0A80101);
    }

    #[test]
    fn test_parse_ipv4_short_forms() {
        // The last part fills the remaining bytes
        assert_eq!(parse_ipv4("127.1").unwrap(), 0x7F000001);
        assert_eq!(parse_ipv4("2130706433").unwrap(), 0x7F000001);
        assert_eq!(parse_ipv4("192.168.257").unwrap(), 0xC0A80101);
    }

    #[test]
    fn test_parse_ipv4_trailing_dot() {
        assert_eq!(parse_ipv4("127.0.0.1.").unwrap(), 0x7F000001);
    }

    #[test]
    fn test_parse_ipv4_errors() {
        assert_eq!(
            parse_ipv4("1.2.3.4.5"),
            Err(ParseError::Ipv4TooManyParts)
        );
        assert_eq!(parse_ipv4("1..3.4"), Err(ParseError::Ipv4NonNumericPart));
        assert_eq!(parse_ipv4("08.1.1.1"), Err(ParseError::Ipv4NonNumericPart));
        assert_eq!(parse_ipv4("256.1.1.1"), Err(ParseError::Ipv4OutOfRangePart));
        assert_eq!(parse_ipv4("1.2.3.256"), Err(ParseError::Ipv4OutOfRangePart));
        assert_eq!(parse_ipv4("127.16777216"), Err(ParseError::Ipv4OutOfRangePart));
    }

    #[test]
    fn test_serialize_ipv4() {
        assert_eq!(serialize_ipv4(0xC0A80101), "192.168.1.1");
        assert_eq!(serialize_ipv4(0x7F000001), "127.0.0.1");
        assert_eq!(serialize_ipv4(0), "0.0.0.0");
    }
}

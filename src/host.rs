/// Host representation, parsing and serialization
use crate::character_sets::{is_forbidden_domain_code_point, is_forbidden_host_code_point};
use crate::error::{ParseError, Result};
use crate::ipv4::{parse_ipv4, parse_ipv4_number, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::unicode::idna::domain_to_ascii;
use crate::unicode::percent_encode::{C0_CONTROL_SET, percent_decode_lossy, percent_encode_with_set};

/// A parsed URL host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    /// Normalized ASCII domain
    Domain(String),
    /// IPv4 address as a big-endian 32-bit integer
    Ipv4(u32),
    /// IPv6 address as 8 pieces
    Ipv6([u16; 8]),
    /// Opaque host of a non-special URL, percent-encoded
    Opaque(String),
    /// The empty host
    Empty,
}

/// Parse a host string. Non-special URLs get an opaque host; special URLs
/// go through IDNA and may turn out to be an IPv4 address.
pub fn parse_host(input: &str, is_not_special: bool) -> Result<Host> {
    if let Some(rest) = input.strip_prefix('[') {
        let Some(address) = rest.strip_suffix(']') else {
            return Err(ParseError::Ipv6Unclosed);
        };
        return Ok(Host::Ipv6(parse_ipv6(address)?));
    }

    if is_not_special {
        return parse_opaque_host(input);
    }

    if input.is_empty() {
        return Ok(Host::Empty);
    }

    let domain = percent_decode_lossy(input);
    let ascii_domain = domain_to_ascii(&domain)?;

    if ascii_domain
        .chars()
        .any(is_forbidden_domain_code_point)
    {
        return Err(ParseError::DomainInvalidCodePoint);
    }

    if ends_in_a_number(&ascii_domain) {
        return Ok(Host::Ipv4(parse_ipv4(&ascii_domain)?));
    }

    Ok(Host::Domain(ascii_domain))
}

/// Opaque host: validate against forbidden host code points and
/// percent-encode C0 controls.
fn parse_opaque_host(input: &str) -> Result<Host> {
    if input.is_empty() {
        return Ok(Host::Empty);
    }
    if input.chars().any(is_forbidden_host_code_point) {
        return Err(ParseError::HostInvalidCodePoint);
    }
    Ok(Host::Opaque(percent_encode_with_set(input, C0_CONTROL_SET)))
}

/// Check if the last dot-separated label of a domain is numeric
/// (all digits, or 0x/0X-prefixed hex), which makes it an IPv4 candidate.
pub fn ends_in_a_number(input: &str) -> bool {
    let mut parts: Vec<&str> = input.split('.').collect();
    if parts.last() == Some(&"") {
        if parts.len() == 1 {
            return false;
        }
        parts.pop();
    }

    let Some(last) = parts.last() else {
        return false;
    };

    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    // Hex or octal forms only count when they parse
    (last.starts_with("0x") || last.starts_with("0X")) && parse_ipv4_number(last).is_some()
}

/// Serialize a host for use in a URL
pub fn serialize_host(host: &Host) -> String {
    match host {
        Host::Domain(domain) => domain.clone(),
        Host::Ipv4(address) => serialize_ipv4(*address),
        Host::Ipv6(pieces) => format!("[{}]", serialize_ipv6(pieces)),
        Host::Opaque(host) => host.clone(),
        Host::Empty => String::new(),
    }
}

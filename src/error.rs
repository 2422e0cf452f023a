/// Errors that can occur during URL parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input has no scheme and no usable base URL
    MissingSchemeNonRelativeUrl,
    /// Credentials delimiter with nothing before the authority terminator
    InvalidCredentials,
    /// Special-scheme URL with an empty host
    HostMissing,
    /// Port number outside the 16-bit range
    PortOutOfRange,
    /// Non-digit character in a port
    PortInvalid,
    /// IDNA domain-to-ASCII processing failed or produced an empty domain
    DomainToAscii,
    /// Forbidden code point in a domain
    DomainInvalidCodePoint,
    /// Forbidden code point in an opaque host
    HostInvalidCodePoint,
    /// IPv4 address with more than 4 parts
    Ipv4TooManyParts,
    /// IPv4 part that is not a number in any supported radix
    Ipv4NonNumericPart,
    /// IPv4 part outside its allowed range
    Ipv4OutOfRangePart,
    /// IPv6 address with an unclosed bracket
    Ipv6Unclosed,
    /// IPv6 address starting with a lone colon
    Ipv6InvalidCompression,
    /// IPv6 address with more than one `::`
    Ipv6MultipleCompression,
    /// IPv6 address with too many pieces
    Ipv6TooManyPieces,
    /// Uncompressed IPv6 address with fewer than 8 pieces
    Ipv6TooFewPieces,
    /// Invalid code point in an IPv6 address
    Ipv6InvalidCodePoint,
    /// Embedded IPv4 would not fit in the remaining IPv6 pieces
    Ipv4InIpv6TooManyPieces,
    /// Invalid code point in an embedded IPv4 address
    Ipv4InIpv6InvalidCodePoint,
    /// Embedded IPv4 part above 255
    Ipv4InIpv6OutOfRangePart,
    /// Embedded IPv4 address with fewer than 4 parts
    Ipv4InIpv6TooFewParts,
    /// Invalid URL structure
    InvalidUrl,
    /// Operation requires a different URL scheme
    InvalidUrlScheme,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingSchemeNonRelativeUrl => "missing scheme in non-relative URL",
            Self::InvalidCredentials => "invalid credentials",
            Self::HostMissing => "host missing",
            Self::PortOutOfRange => "port out of range",
            Self::PortInvalid => "invalid port",
            Self::DomainToAscii => "domain to ASCII conversion failed",
            Self::DomainInvalidCodePoint => "invalid code point in domain",
            Self::HostInvalidCodePoint => "invalid code point in host",
            Self::Ipv4TooManyParts => "IPv4 address has too many parts",
            Self::Ipv4NonNumericPart => "IPv4 address has a non-numeric part",
            Self::Ipv4OutOfRangePart => "IPv4 address part out of range",
            Self::Ipv6Unclosed => "IPv6 address is missing the closing bracket",
            Self::Ipv6InvalidCompression => "IPv6 address begins with a lone colon",
            Self::Ipv6MultipleCompression => "IPv6 address is compressed more than once",
            Self::Ipv6TooManyPieces => "IPv6 address has too many pieces",
            Self::Ipv6TooFewPieces => "IPv6 address has too few pieces",
            Self::Ipv6InvalidCodePoint => "invalid code point in IPv6 address",
            Self::Ipv4InIpv6TooManyPieces => "IPv6 address has no room for embedded IPv4",
            Self::Ipv4InIpv6InvalidCodePoint => "invalid code point in IPv4-in-IPv6 address",
            Self::Ipv4InIpv6OutOfRangePart => "IPv4-in-IPv6 address part out of range",
            Self::Ipv4InIpv6TooFewParts => "IPv4-in-IPv6 address has too few parts",
            Self::InvalidUrl => "Invalid URL",
            Self::InvalidUrlScheme => "invalid URL scheme",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;

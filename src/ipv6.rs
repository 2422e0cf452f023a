/// IPv6 address parsing and serialization
use crate::error::{ParseError, Result};
use core::fmt::Write;

/// Parse an IPv6 address (without brackets) into its 8 pieces.
pub fn parse_ipv6(input: &str) -> Result<[u16; 8]> {
    let bytes = input.as_bytes();
    let mut address = [0u16; 8];
    let mut piece_index = 0usize;
    let mut compress: Option<usize> = None;
    let mut pointer = 0usize;

    if bytes.first() == Some(&b':') {
        if bytes.get(1) != Some(&b':') {
            return Err(ParseError::Ipv6InvalidCompression);
        }
        pointer += 2;
        piece_index += 1;
        compress = Some(piece_index);
    }

    while pointer < bytes.len() {
        if piece_index == 8 {
            return Err(ParseError::Ipv6TooManyPieces);
        }

        if bytes[pointer] == b':' {
            if compress.is_some() {
                return Err(ParseError::Ipv6MultipleCompression);
            }
            pointer += 1;
            piece_index += 1;
            compress = Some(piece_index);
            continue;
        }

        // Up to 4 hex digits form one piece
        let mut value: u16 = 0;
        let mut length = 0;
        while length < 4 {
            let Some(digit) = bytes.get(pointer).and_then(|b| (*b as char).to_digit(16)) else {
                break;
            };
            value = value * 0x10 + digit as u16;
            pointer += 1;
            length += 1;
        }

        match bytes.get(pointer) {
            Some(b'.') => {
                if length == 0 {
                    return Err(ParseError::Ipv4InIpv6InvalidCodePoint);
                }
                pointer -= length;
                if piece_index > 6 {
                    return Err(ParseError::Ipv4InIpv6TooManyPieces);
                }
                return parse_embedded_ipv4(bytes, pointer, address, piece_index, compress);
            }
            Some(b':') => {
                pointer += 1;
                if pointer == bytes.len() {
                    return Err(ParseError::Ipv6InvalidCodePoint);
                }
            }
            Some(_) => return Err(ParseError::Ipv6InvalidCodePoint),
            None => {}
        }

        address[piece_index] = value;
        piece_index += 1;
    }

    finish_ipv6(address, piece_index, compress)
}

/// Parse the trailing dotted-decimal IPv4 of an IPv6 address.
/// The last two pieces hold the four IPv4 bytes.
fn parse_embedded_ipv4(
    bytes: &[u8],
    mut pointer: usize,
    mut address: [u16; 8],
    mut piece_index: usize,
    compress: Option<usize>,
) -> Result<[u16; 8]> {
    let mut numbers_seen = 0;

    while pointer < bytes.len() {
        if numbers_seen > 0 {
            if bytes[pointer] == b'.' && numbers_seen < 4 {
                pointer += 1;
            } else {
                return Err(ParseError::Ipv4InIpv6InvalidCodePoint);
            }
        }

        if !bytes.get(pointer).is_some_and(u8::is_ascii_digit) {
            return Err(ParseError::Ipv4InIpv6InvalidCodePoint);
        }

        let mut ipv4_piece: Option<u16> = None;
        while let Some(b) = bytes.get(pointer).filter(|b| b.is_ascii_digit()) {
            let number = u16::from(b - b'0');
            ipv4_piece = match ipv4_piece {
                None => Some(number),
                // Leading zeros are not allowed
                Some(0) => return Err(ParseError::Ipv4InIpv6InvalidCodePoint),
                Some(value) => {
                    let value = value * 10 + number;
                    if value > 255 {
                        return Err(ParseError::Ipv4InIpv6OutOfRangePart);
                    }
                    Some(value)
                }
            };
            pointer += 1;
        }

        address[piece_index] = address[piece_index] * 0x100 + ipv4_piece.unwrap_or(0);
        numbers_seen += 1;
        if numbers_seen == 2 || numbers_seen == 4 {
            piece_index += 1;
        }
    }

    if numbers_seen != 4 {
        return Err(ParseError::Ipv4InIpv6TooFewParts);
    }

    finish_ipv6(address, piece_index, compress)
}

/// Expand `::` compression, or require all 8 pieces.
fn finish_ipv6(
    mut address: [u16; 8],
    piece_index: usize,
    compress: Option<usize>,
) -> Result<[u16; 8]> {
    match compress {
        Some(compress) => {
            let mut swaps = piece_index - compress;
            let mut index = 7;
            while index != 0 && swaps > 0 {
                address.swap(index, compress + swaps - 1);
                index -= 1;
                swaps -= 1;
            }
        }
        None if piece_index != 8 => return Err(ParseError::Ipv6TooFewPieces),
        None => {}
    }
    Ok(address)
}

/// Serialize IPv6 pieces to lowercase hex groups, compressing the first
/// longest run of two or more zero pieces to `::`.
pub fn serialize_ipv6(pieces: &[u16; 8]) -> String {
    let compress_range = find_first_longest_zero_run(pieces);

    let mut result = String::with_capacity(39);
    let mut i = 0;
    while i < 8 {
        if let Some(ref range) = compress_range
            && range.start == i
        {
            result.push_str("::");
            i = range.end;
            continue;
        }

        if i > 0 && !result.ends_with("::") {
            result.push(':');
        }

        let _ = write!(&mut result, "{:x}", pieces[i]);
        i += 1;
    }

    result
}

/// Find the first run of consecutive zero pieces of maximal length,
/// ignoring runs shorter than 2.
fn find_first_longest_zero_run(pieces: &[u16; 8]) -> Option<core::ops::Range<usize>> {
    let mut best: Option<core::ops::Range<usize>> = None;
    let mut current_start: Option<usize> = None;

    for (i, &piece) in pieces.iter().enumerate() {
        if piece == 0 {
            let start = *current_start.get_or_insert(i);
            let len = i + 1 - start;
            // Strictly longer keeps the earliest run on ties
            if len >= 2 && best.as_ref().is_none_or(|b| len > b.len()) {
                best = Some(start..i + 1);
            }
        } else {
            current_start = None;
        }
    }

    best
}

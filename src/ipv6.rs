/// IPv6 address parsing and serialization
/// Implements the WHATWG IPv6 parser and serializer
use crate::compat::String;
use crate::error::HostError;
use core::fmt::Write;

/// Parse an IPv6 address, with or without the surrounding brackets
/// (e.g. "[`::1`]" or "`2001:db8::1`").
/// Returns the 8 u16 pieces if valid.
pub fn parse_ipv6(input: &str) -> Result<[u16; 8], HostError> {
    let input = input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(input);
    let bytes = input.as_bytes();
    let len = bytes.len();

    let mut pieces = [0u16; 8];
    let mut piece_index = 0;
    let mut compress = None;
    let mut i = 0;

    if bytes.first() == Some(&b':') {
        if bytes.get(1) != Some(&b':') {
            return Err(HostError::InvalidIpv6);
        }
        i = 2;
        piece_index = 1;
        compress = Some(1);
    }

    while i < len {
        if piece_index == 8 {
            return Err(HostError::InvalidIpv6);
        }

        if bytes[i] == b':' {
            if compress.is_some() {
                return Err(HostError::InvalidIpv6);
            }
            i += 1;
            piece_index += 1;
            compress = Some(piece_index);
            continue;
        }

        let start = i;
        let mut value: u16 = 0;
        while i < len && i - start < 4 {
            let Some(digit) = hex_value(bytes[i]) else {
                break;
            };
            value = value * 0x10 + digit;
            i += 1;
        }

        match bytes.get(i) {
            Some(b'.') => {
                if i == start || piece_index > 6 {
                    return Err(HostError::InvalidIpv6);
                }
                let [high, low] = parse_embedded_ipv4(&bytes[start..])?;
                pieces[piece_index] = high;
                pieces[piece_index + 1] = low;
                piece_index += 2;
                break;
            }
            Some(b':') => {
                i += 1;
                if i == len {
                    return Err(HostError::InvalidIpv6);
                }
            }
            Some(_) => return Err(HostError::InvalidIpv6),
            None => {}
        }

        pieces[piece_index] = value;
        piece_index += 1;
    }

    match compress {
        Some(compress) => {
            // Move the pieces after the "::" to the end of the address
            let mut swaps = piece_index - compress;
            let mut index = 7;
            while index != 0 && swaps > 0 {
                pieces.swap(index, compress + swaps - 1);
                index -= 1;
                swaps -= 1;
            }
        }
        None if piece_index != 8 => return Err(HostError::InvalidIpv6),
        None => {}
    }

    Ok(pieces)
}

/// Parse the dotted IPv4 tail of an IPv6 address into two pieces.
/// Each number is decimal without leading zeros; exactly four are required.
fn parse_embedded_ipv4(bytes: &[u8]) -> Result<[u16; 2], HostError> {
    let mut address: u32 = 0;
    let mut numbers_seen = 0;
    let mut i = 0;

    while i < bytes.len() {
        if numbers_seen > 0 {
            if bytes[i] == b'.' && numbers_seen < 4 {
                i += 1;
            } else {
                return Err(HostError::InvalidIpv6);
            }
        }

        if !bytes.get(i).is_some_and(u8::is_ascii_digit) {
            return Err(HostError::InvalidIpv6);
        }

        let mut number: Option<u32> = None;
        while let Some(&b) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
            let digit = u32::from(b - b'0');
            number = match number {
                None => Some(digit),
                Some(0) => return Err(HostError::InvalidIpv6),
                Some(n) => Some(n * 10 + digit),
            };
            if number.is_some_and(|n| n > 255) {
                return Err(HostError::InvalidIpv6);
            }
            i += 1;
        }

        address = (address << 8) | number.unwrap_or(0);
        numbers_seen += 1;
    }

    if numbers_seen != 4 {
        return Err(HostError::InvalidIpv6);
    }

    Ok([(address >> 16) as u16, (address & 0xFFFF) as u16])
}

fn hex_value(b: u8) -> Option<u16> {
    char::from(b).to_digit(16).map(|d| d as u16)
}

/// Serialize IPv6 pieces to a bracketed string with zero compression.
pub fn serialize_ipv6(pieces: &[u16; 8]) -> String {
    let compress = find_longest_zero_sequence(pieces);

    let mut result = String::with_capacity(41);
    result.push('[');

    let mut ignore_zero = false;
    for (i, &piece) in pieces.iter().enumerate() {
        if ignore_zero && piece == 0 {
            continue;
        }
        ignore_zero = false;

        if compress == Some(i) {
            result.push_str(if i == 0 { "::" } else { ":" });
            ignore_zero = true;
            continue;
        }

        let _ = write!(&mut result, "{piece:x}");
        if i != 7 {
            result.push(':');
        }
    }

    result.push(']');
    result
}

/// Start of the first longest run of two or more zero pieces.
fn find_longest_zero_sequence(pieces: &[u16; 8]) -> Option<usize> {
    let mut best_start = None;
    let mut best_len = 1;
    let mut current_start = 0;
    let mut current_len = 0;

    for (i, &piece) in pieces.iter().enumerate() {
        if piece == 0 {
            if current_len == 0 {
                current_start = i;
            }
            current_len += 1;
            if current_len > best_len {
                best_start = Some(current_start);
                best_len = current_len;
            }
        } else {
            current_len = 0;
        }
    }

    best_start
}

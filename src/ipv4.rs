/// Strict IPv4 address parser
///
/// Only the canonical dotted-decimal form is accepted. Octal, hexadecimal and
/// shortened forms (`0x7f.1`, `010.0.0.1`, `127.1`) are rejected as ambiguous.
use crate::compat::{String, format};
use crate::error::HostError;

/// Parse a dotted-decimal IPv4 address into its four octets.
/// A single trailing dot is tolerated.
pub fn parse_ipv4(input: &str) -> Result<[u8; 4], HostError> {
    let input = input.strip_suffix('.').unwrap_or(input);

    let mut octets = [0u8; 4];
    let mut parts = input.split('.');
    for octet in &mut octets {
        let part = parts.next().ok_or(HostError::InvalidIpv4)?;
        *octet = parse_octet(part)?;
    }
    if parts.next().is_some() {
        return Err(HostError::InvalidIpv4);
    }

    Ok(octets)
}

/// Parse one decimal octet: 1-3 digits, no leading zero, at most 255.
fn parse_octet(part: &str) -> Result<u8, HostError> {
    let bytes = part.as_bytes();
    if bytes.is_empty() || bytes.len() > 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(HostError::InvalidIpv4);
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return Err(HostError::InvalidIpv4);
    }
    part.parse::<u8>().map_err(|_| HostError::InvalidIpv4)
}

/// Serialize an IPv4 address to dotted decimal notation
pub fn serialize_ipv4(octets: [u8; 4]) -> String {
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

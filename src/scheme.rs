use crate::types::SchemeType;

/// Get the scheme type from a lowercase scheme string.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (2, Some(b'w')) if bytes == b"ws" => SchemeType::Ws,
        (3, Some(b'w')) if bytes == b"wss" => SchemeType::Wss,
        (3, Some(b'f')) if bytes == b"ftp" => SchemeType::Ftp,
        (4, Some(b'h')) if bytes == b"http" => SchemeType::Http,
        (4, Some(b'f')) if bytes == b"file" => SchemeType::File,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::Https,
        _ => SchemeType::NotSpecial,
    }
}

/// Length of the scheme token at the start of `input`, if it is followed by ':'.
///
/// A scheme is an ASCII letter followed by letters, digits, '+', '-' or '.'.
pub fn scheme_len(input: &[u8]) -> Option<usize> {
    if !input.first().is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    let len = input
        .iter()
        .position(|&b| !is_scheme_byte(b))
        .unwrap_or(input.len());
    (input.get(len) == Some(&b':')).then_some(len)
}

/// Check that `scheme` is a complete scheme token (no trailing ':')
pub fn is_valid_scheme(scheme: &str) -> bool {
    let bytes = scheme.as_bytes();
    bytes.first().is_some_and(u8::is_ascii_alphabetic) && bytes.iter().all(|&b| is_scheme_byte(b))
}

fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

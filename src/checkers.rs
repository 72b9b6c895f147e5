/// Check if a domain "ends in a number" and must therefore be parsed as IPv4.
/// Based on the WHATWG ends-in-a-number checker.
pub fn ends_in_number(input: &str) -> bool {
    let input = match input.strip_suffix('.') {
        Some("") => return false,
        Some(stripped) => stripped,
        None => input,
    };

    let last_segment = input.rsplit('.').next().unwrap_or(input);
    if last_segment.is_empty() {
        return false;
    }

    // Decimal
    if last_segment.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    // Hexadecimal (0x...), "0x" alone counts
    last_segment
        .strip_prefix("0x")
        .or_else(|| last_segment.strip_prefix("0X"))
        .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros are allowed and may exceed u16 digit count
    let digits = port.trim_start_matches('0');
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<u16>().ok()
}

/// A Windows drive letter: an ASCII letter followed by ':' or '|'
pub fn is_windows_drive_letter(segment: &[u8]) -> bool {
    segment.len() == 2 && segment[0].is_ascii_alphabetic() && matches!(segment[1], b':' | b'|')
}

/// A normalized Windows drive letter: an ASCII letter followed by ':'
pub fn is_normalized_windows_drive_letter(segment: &[u8]) -> bool {
    segment.len() == 2 && segment[0].is_ascii_alphabetic() && segment[1] == b':'
}

/// Check if `input` starts with a drive letter followed by end, '/', '\', '?' or '#'
pub fn starts_with_windows_drive_letter(input: &[u8]) -> bool {
    input.len() >= 2
        && is_windows_drive_letter(&input[..2])
        && (input.len() == 2 || matches!(input[2], b'/' | b'\\' | b'?' | b'#'))
}

/// "." or "%2e" (case-insensitive)
pub fn is_single_dot_segment(segment: &str) -> bool {
    segment == "." || segment.eq_ignore_ascii_case("%2e")
}

/// ".." and its percent-encoded spellings (case-insensitive)
pub fn is_double_dot_segment(segment: &str) -> bool {
    match segment.len() {
        2 => segment == "..",
        4 => segment.eq_ignore_ascii_case(".%2e") || segment.eq_ignore_ascii_case("%2e."),
        6 => segment.eq_ignore_ascii_case("%2e%2e"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_in_number() {
        assert!(ends_in_number("192.168.1.1"));
        assert!(ends_in_number("127.0.0.1."));
        assert!(ends_in_number("foo.0x1f"));
        assert!(ends_in_number("0x"));
        assert!(ends_in_number("999"));

        assert!(!ends_in_number(""));
        assert!(!ends_in_number("."));
        assert!(!ends_in_number("example.com"));
        assert!(!ends_in_number("1.2.3.com"));
        assert!(!ends_in_number("192.168.1.g"));
        assert!(!ends_in_number("ab"));
        assert!(!ends_in_number("1.2.."));
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("80"), Some(80));
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port("000080"), Some(80));
        assert_eq!(parse_port("0"), Some(0));
        assert_eq!(parse_port("65536"), None);
        assert_eq!(parse_port("99999"), None);
        assert_eq!(parse_port("+80"), None);
        assert_eq!(parse_port("abc"), None);
        assert_eq!(parse_port(""), None);
    }

    #[test]
    fn test_windows_drive_letters() {
        assert!(is_windows_drive_letter(b"c:"));
        assert!(is_windows_drive_letter(b"C|"));
        assert!(!is_windows_drive_letter(b"c"));
        assert!(!is_normalized_windows_drive_letter(b"c|"));
        assert!(starts_with_windows_drive_letter(b"c:/foo"));
        assert!(starts_with_windows_drive_letter(b"c|"));
        assert!(!starts_with_windows_drive_letter(b"c:x"));
    }

    #[test]
    fn test_dot_segments() {
        assert!(is_single_dot_segment("."));
        assert!(is_single_dot_segment("%2E"));
        assert!(!is_single_dot_segment(".."));
        assert!(is_double_dot_segment(".."));
        assert!(is_double_dot_segment(".%2e"));
        assert!(is_double_dot_segment("%2E."));
        assert!(is_double_dot_segment("%2e%2E"));
        assert!(!is_double_dot_segment("..."));
    }
}

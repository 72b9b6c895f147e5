use crate::compat::{Cow, String};
use crate::error::HostError;

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

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Lowercase ASCII letters, digits, '.' and '-' need no IDNA mapping
fn is_plain_ascii_domain(domain: &str) -> bool {
    domain
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-'))
        && !has_punycode(domain)
}

/// Process a domain using the IDNA `ToASCII` algorithm with the URL deny list
pub fn domain_to_ascii(domain: &str) -> Result<Cow<'_, str>, HostError> {
    if is_plain_ascii_domain(domain) {
        if domain.bytes().any(|b| b.is_ascii_uppercase()) {
            return Ok(Cow::Owned(domain.to_ascii_lowercase()));
        }
        return Ok(Cow::Borrowed(domain));
    }

    // Unicode, punycode or unusual ASCII go through full UTS #46 processing
    idna::domain_to_ascii_cow(domain.as_bytes(), idna::AsciiDenyList::URL)
        .map_err(|_| HostError::InvalidDomain)
}

/// Owned variant used where the result is stored directly
pub fn domain_to_ascii_owned(domain: &str) -> Result<String, HostError> {
    domain_to_ascii(domain).map(Cow::into_owned)
}

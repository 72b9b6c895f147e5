use crate::compat::{Cow, String, Vec};
use percent_encoding::{AsciiSet, CONTROLS, percent_encode as encode_bytes, percent_decode_str};

// Encode sets following https://url.spec.whatwg.org/#percent-encoded-bytes
// Bytes above 0x7E are always encoded by `percent_encoding`.

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Query percent-encode set (non-special URLs)
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special-query percent-encode set (special URLs)
/// Query + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// Path percent-encode set
/// Query + ?, ^, \`, {, }
pub const PATH_SET: &AsciiSet = &QUERY_SET
    .add(b'?')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'|');

/// The component-specific encode sets.
///
/// The caller picks the set for the component it is encoding; nothing is inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeSet {
    C0Control,
    Fragment,
    Path,
    Userinfo,
    SpecialQuery,
    Query,
}

impl EncodeSet {
    pub fn ascii_set(self) -> &'static AsciiSet {
        match self {
            Self::C0Control => C0_CONTROL_SET,
            Self::Fragment => FRAGMENT_SET,
            Self::Path => PATH_SET,
            Self::Userinfo => USERINFO_SET,
            Self::SpecialQuery => SPECIAL_QUERY_SET,
            Self::Query => QUERY_SET,
        }
    }

    /// Query set matching the scheme kind
    pub fn query(special: bool) -> Self {
        if special {
            Self::SpecialQuery
        } else {
            Self::Query
        }
    }
}

/// Percent-encode `input`, escaping every byte the set does not allow as `%XX`
pub fn percent_encode(input: &[u8], encode_set: EncodeSet) -> String {
    let mut buffer = String::with_capacity(input.len());
    percent_encode_into(&mut buffer, input, encode_set);
    buffer
}

/// Write percent-encoded bytes directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &[u8], encode_set: EncodeSet) {
    buffer.reserve(input.len());
    for chunk in encode_bytes(input, encode_set.ascii_set()) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode, borrowing the input when nothing needs escaping
pub fn percent_encode_cow(input: &str, encode_set: EncodeSet) -> Cow<'_, str> {
    encode_bytes(input.as_bytes(), encode_set.ascii_set()).into()
}

/// Decode `%XX` sequences. Malformed escapes are passed through literally.
pub fn percent_decode(input: &str) -> Vec<u8> {
    percent_decode_str(input).collect()
}

/// Decode `%XX` sequences and replace invalid UTF-8 with U+FFFD
pub fn percent_decode_lossy(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}

use crate::checkers::{
    is_double_dot_segment, is_normalized_windows_drive_letter, is_single_dot_segment,
    is_windows_drive_letter,
};
use crate::compat::{String, Vec};
use crate::types::SchemeType;
use crate::unicode::percent_encode::{EncodeSet, percent_encode, percent_encode_into};

/// Path of a URL record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UrlPath {
    /// Hierarchical path, percent-encoded segments without separators
    Segments(Vec<String>),
    /// Opaque path of a non-special URL such as `mailto:` or `data:`
    Opaque(String),
}

impl UrlPath {
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    pub fn segments(&self) -> Option<&[String]> {
        match self {
            Self::Segments(segments) => Some(segments),
            Self::Opaque(_) => None,
        }
    }

    /// Serialized path: `/`-joined segments or the opaque string verbatim
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Self::Segments(segments) => {
                for segment in segments {
                    out.push('/');
                    out.push_str(segment);
                }
            }
            Self::Opaque(path) => out.push_str(path),
        }
    }
}

/// Whether `b` separates path segments for this scheme
pub fn is_path_separator(b: u8, scheme: SchemeType) -> bool {
    b == b'/' || (b == b'\\' && scheme.is_special())
}

/// Remove the last segment, keeping a lone `file` drive letter
pub fn shorten(segments: &mut Vec<String>, scheme: SchemeType) {
    if scheme.is_file()
        && segments.len() == 1
        && is_normalized_windows_drive_letter(segments[0].as_bytes())
    {
        return;
    }
    segments.pop();
}

/// Apply one encoded segment to the output stack.
///
/// `is_last` is true when the segment ends the path rather than a separator,
/// in which case a dot segment leaves an empty final segment behind.
pub fn push_segment(
    segments: &mut Vec<String>,
    mut segment: String,
    is_last: bool,
    scheme: SchemeType,
) {
    if is_double_dot_segment(&segment) {
        shorten(segments, scheme);
        if is_last {
            segments.push(String::new());
        }
    } else if is_single_dot_segment(&segment) {
        if is_last {
            segments.push(String::new());
        }
    } else {
        if scheme.is_file() && segments.is_empty() && is_windows_drive_letter(segment.as_bytes()) {
            segment.replace_range(1..2, ":");
        }
        segments.push(segment);
    }
}

/// Parse path-state input into `segments`.
///
/// `input` starts after the separator that opened the path and ends before
/// any `?` or `#`. Every segment is encoded with the path set and normalized.
pub fn parse_path_into(segments: &mut Vec<String>, input: &str, scheme: SchemeType) {
    let bytes = input.as_bytes();
    let mut start = 0;
    loop {
        let end = bytes[start..]
            .iter()
            .position(|&b| is_path_separator(b, scheme))
            .map(|pos| start + pos);

        let piece = &bytes[start..end.unwrap_or(bytes.len())];
        let mut segment = String::with_capacity(piece.len());
        percent_encode_into(&mut segment, piece, EncodeSet::Path);
        push_segment(segments, segment, end.is_none(), scheme);

        match end {
            Some(end) => start = end + 1,
            None => break,
        }
    }
}

/// Encode an opaque path.
///
/// A space right before a following `?` or `#` is escaped so that it survives
/// trimming when the URL is serialized and re-parsed.
pub fn encode_opaque_path(input: &str, terminated: bool) -> String {
    let mut encoded = percent_encode(input.as_bytes(), EncodeSet::C0Control);
    if terminated && encoded.ends_with(' ') {
        encoded.pop();
        encoded.push_str("%20");
    }
    encoded
}

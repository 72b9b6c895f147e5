use crate::character_sets::{is_ascii_tab_or_newline, is_c0_control_or_space};
use crate::compat::{Cow, String};

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Remove every ASCII tab and newline, as the basic URL parser does for all input.
pub fn remove_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    if !has_tabs_or_newline(input) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .chars()
            .filter(|&c| !(c.is_ascii() && is_ascii_tab_or_newline(c as u8)))
            .collect::<String>(),
    )
}

/// Combined trim and remove tabs/newlines in single pass.
/// Returns a Cow to avoid allocation when possible.
/// Removes leading/trailing C0 controls+space and internal tabs/newlines.
pub fn clean_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();

    // Fast path: check if any C0/space exists
    if !bytes.iter().any(|&b| is_c0_control_or_space(b)) {
        return Cow::Borrowed(input);
    }

    let start = bytes
        .iter()
        .position(|&b| !is_c0_control_or_space(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_c0_control_or_space(b))
        .map_or(0, |pos| pos + 1);

    if start >= end {
        return Cow::Borrowed("");
    }

    // Trimmed bytes are ASCII, so both ends are char boundaries
    let trimmed = &input[start..end];
    match remove_tabs_and_newlines(trimmed) {
        Cow::Borrowed(_) => Cow::Borrowed(trimmed),
        Cow::Owned(cleaned) => Cow::Owned(cleaned),
    }
}

/// Check if a byte is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r')
}

/// C0 control or space, trimmed from both ends of URL input
pub fn is_c0_control_or_space(b: u8) -> bool {
    b <= 0x20
}

/// Host code point classification
/// 0 = allowed, 1 = forbidden host code point, 2 = forbidden in domains only
const HOST_CHAR_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];

    // C0 controls and DEL are forbidden in domains
    let mut i = 0;
    while i < 0x20 {
        table[i] = 2;
        i += 1;
    }
    table[0x7F] = 2;
    table[b'%' as usize] = 2;

    // Forbidden host code points (opaque hosts too)
    table[0x00] = 1;
    table[b'\t' as usize] = 1;
    table[b'\n' as usize] = 1;
    table[b'\r' as usize] = 1;
    table[b' ' as usize] = 1;
    table[b'#' as usize] = 1;
    table[b'/' as usize] = 1;
    table[b':' as usize] = 1;
    table[b'<' as usize] = 1;
    table[b'>' as usize] = 1;
    table[b'?' as usize] = 1;
    table[b'@' as usize] = 1;
    table[b'[' as usize] = 1;
    table[b'\\' as usize] = 1;
    table[b']' as usize] = 1;
    table[b'^' as usize] = 1;
    table[b'|' as usize] = 1;

    table
};

/// Forbidden anywhere in a host, opaque or not
pub fn is_forbidden_host_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] == 1
}

/// Forbidden in a domain: forbidden host code points, C0 controls, '%' and DEL
pub fn is_forbidden_domain_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] != 0
}

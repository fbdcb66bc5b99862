//! Transport-safe ciphertext tokens.
//!
//! Standard base64 is made safe for a URL query value by swapping the two
//! non-alphanumeric symbols and dropping the trailing padding. No percent
//! encoding is involved.

/// `+` → `-`, `/` → `_`, trailing `=` removed.
pub fn to_transport_safe(base64: &str) -> String {
    base64
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Restores standard padded base64 from a transport-safe token.
pub fn from_transport_safe(token: &str) -> String {
    let mut base64: String = token
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while base64.len() % 4 != 0 {
        base64.push('=');
    }
    base64
}

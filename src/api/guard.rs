//! Large-integer guarding for raw JSON bodies.
//!
//! The backend emits 64-bit identifiers as bare JSON numbers. Consumers that
//! read numbers as IEEE-754 doubles silently lose precision beyond 2^53 - 1,
//! so before parsing, every bare integer literal whose magnitude exceeds
//! [`MAX_SAFE_INTEGER`] is rewritten as a JSON string literal. Identifiers
//! then decode as strings and round-trip exactly.
//!
//! The rewrite is lexical: string literals are skipped (escapes included), and
//! numbers with a fraction or exponent are never touched.


/// Largest integer exactly representable in a double (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

const MAX_SAFE_DIGITS: &str = "9007199254740991";

/// Quote every unsafely large bare integer in `raw`.
///
/// Malformed input is passed through untouched; the JSON parser downstream
/// reports the error.
pub fn quote_large_integers(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len() + 8);
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = skip_string(bytes, i);
            }
            b'-' | b'0'..=b'9' => {
                let start = i;
                let end = scan_number(bytes, i);
                if is_bare_integer(&raw[start..end]) && is_unsafe(&raw[start..end]) {
                    out.push_str(&raw[copied..start]);
                    out.push('"');
                    out.push_str(&raw[start..end]);
                    out.push('"');
                    copied = end;
                }
                i = end;
            }
            _ => i += 1,
        }
    }

    out.push_str(&raw[copied..]);
    out
}

/// Index just past the string literal opening at `start`.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index just past the numeric token starting at `start`.
///
/// Consumes every byte that can appear in a JSON number so that a float such
/// as `12345678901234567.5` is seen whole and left alone.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-' => i += 1,
            _ => break,
        }
    }
    i
}

fn is_bare_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_unsafe(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    let digits = digits.trim_start_matches('0');
    match digits.len().cmp(&MAX_SAFE_DIGITS.len()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        // Same width: ASCII digit strings compare numerically.
        std::cmp::Ordering::Equal => digits > MAX_SAFE_DIGITS,
    }
}

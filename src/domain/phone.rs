//! Phone handle normalization.

/// Normalize a raw phone handle into a dialable, comparable form.
///
/// Every character except digits and a leading `+` is stripped. A cleaned
/// value that starts with `+` is returned as is; ten digits get a `+1`
/// prefix and eleven digits starting with `1` get a `+` prefix. Anything
/// else is returned cleaned, or untouched when cleaning leaves nothing.
///
/// # Example
///
/// ```
/// use contacts_mcp_server::domain::normalize_phone;
///
/// assert_eq!(normalize_phone("555-123-4567"), "+15551234567");
/// assert_eq!(normalize_phone("+44 20 7946 0958"), "+442079460958");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    let cleaned = clean(raw);

    if cleaned.is_empty() {
        return raw.to_string();
    }

    if cleaned.starts_with('+') {
        return cleaned;
    }

    match cleaned.len() {
        10 => format!("+1{}", cleaned),
        11 if cleaned.starts_with('1') => format!("+{}", cleaned),
        _ => cleaned,
    }
}

/// Keep ASCII digits plus a `+` that precedes every digit.
fn clean(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && cleaned.is_empty()) {
            cleaned.push(c);
        }
    }
    cleaned
}

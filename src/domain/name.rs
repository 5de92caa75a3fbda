//! Display-name derivation for contact entries.

/// Placeholder used when a record carries no usable name or organization.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Derive the display name for a record.
///
/// First and last name are joined with a single space, in that order. When
/// neither is present the organization is used, and when that is absent too
/// the result is [`UNKNOWN_NAME`]. Each part is trimmed, and blank strings
/// count as absent.
///
/// # Example
///
/// ```
/// use contacts_mcp_server::domain::display_name;
///
/// assert_eq!(display_name(Some("Jane"), Some("Doe"), None), "Jane Doe");
/// assert_eq!(display_name(None, None, Some("Acme Corp")), "Acme Corp");
/// assert_eq!(display_name(None, None, None), "Unknown");
/// ```
pub fn display_name(
    first_name: Option<&str>,
    last_name: Option<&str>,
    organization: Option<&str>,
) -> String {
    let joined = [present(first_name), present(last_name)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    if !joined.is_empty() {
        return joined;
    }

    present(organization)
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

fn present(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

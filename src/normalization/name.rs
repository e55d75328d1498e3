/// Product names longer than this many characters are shortened for charts.
pub const DISPLAY_NAME_LIMIT: usize = 35;

/// Marker appended to a shortened name.
pub const ELLIPSIS: &str = "...";

/// Keep the first [`DISPLAY_NAME_LIMIT`] characters and append [`ELLIPSIS`]
/// when the name is longer; otherwise return it unchanged.
pub fn truncate_display_name(name: &str) -> String {
    match name.char_indices().nth(DISPLAY_NAME_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &name[..cut]),
        None => name.to_string(),
    }
}

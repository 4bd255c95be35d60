//! Display-color lookup for item colors.

/// Fallback hex for colors not in the table.
pub const DEFAULT_DISPLAY_COLOR: &str = "#bdc3c7";

/// Fixed color-name to hex table. Lookup is case-insensitive.
const COLOR_TABLE: &[(&str, &str)] = &[
    ("red", "#e74c3c"),
    ("blue", "#3498db"),
    ("green", "#2ecc71"),
    ("black", "#2c3e50"),
    ("white", "#ecf0f1"),
    ("yellow", "#f1c40f"),
    ("orange", "#e67e22"),
    ("purple", "#9b59b6"),
    ("pink", "#fd79a8"),
    ("grey", "#95a5a6"),
    ("gray", "#95a5a6"),
    ("brown", "#8d6e63"),
    ("navy", "#34495e"),
    ("beige", "#d5c4a1"),
];

/// Map a color name to its display hex, falling back to
/// [`DEFAULT_DISPLAY_COLOR`] for unrecognized values.
pub fn display_color(name: &str) -> &'static str {
    let name = name.trim();
    COLOR_TABLE
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
        .unwrap_or(DEFAULT_DISPLAY_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(display_color("Red"), display_color("red"));
        assert_eq!(display_color("NAVY"), "#34495e");
    }

    #[test]
    fn unknown_colors_fall_back() {
        assert_eq!(display_color("chartreuse"), DEFAULT_DISPLAY_COLOR);
        assert_eq!(display_color(""), DEFAULT_DISPLAY_COLOR);
    }
}

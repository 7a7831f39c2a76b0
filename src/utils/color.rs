use ratatui::style::Color;

/// Parse a `#RRGGBB` hex string into a terminal color
#[must_use]
pub fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Convert a configured highlight color to a terminal color
#[must_use]
pub fn convert_highlight_color(color: &str) -> Color {
    parse_hex(color).unwrap_or(Color::Rgb(0, 122, 255)) // Default to the stock period blue
}

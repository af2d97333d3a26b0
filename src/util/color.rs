//! Hex color parsing for the derived `-rgb` style variables.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `RGB` or `RRGGBB`, with or without a leading `#`, into channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let digits = hex.chars().map(|c| c.to_digit(16)).collect::<Option<Vec<u32>>>()?;
    match digits.as_slice() {
        [r, g, b] => Some((channel(*r, *r), channel(*g, *g), channel(*b, *b))),
        [r1, r2, g1, g2, b1, b2] => Some((channel(*r1, *r2), channel(*g1, *g2), channel(*b1, *b2))),
        _ => None,
    }
}

fn channel(hi: u32, lo: u32) -> u8 {
    u8::try_from(hi * 16 + lo).unwrap_or(u8::MAX)
}

/// Format a hex color as the `R, G, B` triplet used inside `rgba(var(..), a)`.
pub fn hex_to_rgb_triplet(raw: &str) -> Option<String> {
    let (r, g, b) = parse_hex_rgb(raw)?;
    Some(format!("{r}, {g}, {b}"))
}

/// Custom property holding the hex value for a semantic color name.
pub fn color_var(name: &str) -> String {
    format!("--color-{name}")
}

/// Custom property receiving the derived triplet for a semantic color name.
pub fn color_rgb_var(name: &str) -> String {
    format!("--color-{name}-rgb")
}

use plotters::style::RGBAColor;

use crate::error::ThemeError;

/// Parse a CSS-style color string into a plotters color.
///
/// Supports `#RGB`, `#RRGGBB`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
pub fn parse_color(value: &str) -> Result<RGBAColor, ThemeError> {
    let invalid = || ThemeError::InvalidColor(value.to_string());
    let trimmed = value.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    let (body, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return Err(invalid());
    };

    let body = body.strip_suffix(')').ok_or_else(invalid)?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(invalid());
    }

    let channel = |s: &str| s.parse::<u8>().map_err(|_| invalid());
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if has_alpha {
        let a: f64 = parts[3].parse().map_err(|_| invalid())?;
        if !(0.0..=1.0).contains(&a) {
            return Err(invalid());
        }
        a
    } else {
        1.0
    };

    Ok(RGBAColor(r, g, b, a))
}

fn parse_hex(hex: &str) -> Option<RGBAColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(RGBAColor(channels.next()??, channels.next()??, channels.next()??, 1.0))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(RGBAColor(channel(0)?, channel(2)?, channel(4)?, 1.0))
        }
        _ => None,
    }
}

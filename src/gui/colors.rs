use nalgebra::Point3;

fn fallback() -> Point3<f32> {
    Point3::new(1.0, 1.0, 1.0)
}

/// Turns a color label from a data file into RGB.
///
/// Understands a handful of common color names, and hex codes with or
/// without a leading `#`. Anything else comes out white.
pub fn parse_color(label: &str) -> Point3<f32> {
    if let Some(color) = parse_hex(label.strip_prefix('#').unwrap_or(label)) {
        return color;
    }

    let rgb = match label.to_lowercase().as_str() {
        "white" => (255, 255, 255),
        "black" => (0, 0, 0),
        "red" => (255, 0, 0),
        "green" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        "purple" => (160, 32, 240),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "gray" | "grey" => (190, 190, 190),
        _ => {
            log::warn!("Unknown color {:?}, drawing it white", label);
            return fallback();
        }
    };
    from_bytes(rgb)
}

fn parse_hex(s: &str) -> Option<Point3<f32>> {
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(from_bytes((r, g, b)))
}

fn from_bytes((r, g, b): (u8, u8, u8)) -> Point3<f32> {
    Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

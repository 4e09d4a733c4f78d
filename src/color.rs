use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Route color tokens
// ---------------------------------------------------------------------------

/// Saturation/lightness matching the consuming map styling.
const ROUTE_SATURATION: f32 = 0.70;
const ROUTE_LIGHTNESS: f32 = 0.50;

/// Golden-angle hue increment: consecutive indices land far apart on the hue
/// wheel without knowing the collection size upfront.
const GOLDEN_ANGLE_DEG: f32 = 137.508;

/// Deterministic colour token for the route at `index`.
///
/// The token is cosmetic and opaque to the engine; collisions across large
/// route counts are acceptable.
pub fn route_color(index: usize) -> String {
    hex_token((index as f32 * GOLDEN_ANGLE_DEG) % 360.0)
}

/// Generates `n` visually distinct colour tokens using evenly spaced hues,
/// for renderers colouring a collection of known size.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| hex_token((i as f32 / n as f32) * 360.0))
        .collect()
}

fn hex_token(hue: f32) -> String {
    let hsl = Hsl::new(hue, ROUTE_SATURATION, ROUTE_LIGHTNESS);
    let rgb: Srgb = hsl.into_color();
    format!(
        "#{:02x}{:02x}{:02x}",
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

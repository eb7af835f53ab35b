//! HSBA color type with range normalization and predefined color constants.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Upper bound for hue values (degrees in one rotation).
pub const HUE_BOUND: f64 = 360.0;

/// Upper bound for saturation, brightness and alpha (percent).
pub const PERCENT_BOUND: f64 = 100.0;

/// Represents a color as hue, saturation, brightness and alpha.
///
/// Hue is in degrees, the other channels are percentages. Every value passed
/// in (constructor or setter) goes through [`normalize_channel`], so the
/// stored channels are always in range:
///
/// - values below zero become exactly `0` (a negative hue does not wrap)
/// - values above the bound wrap with the floating point remainder
/// - values in `[0, bound]` are kept as-is
///
/// Alongside the raw channels the color keeps renderer-unit values (raw
/// divided by its bound) which is what the Cairo backend consumes.
///
/// # Examples
///
/// ```
/// use easel::draw::Color;
/// let color = Color::new(400.0, -20.0, 150.0, 100.0);
/// assert_eq!(color.hue(), 40.0);
/// assert_eq!(color.saturation(), 0.0);
/// assert_eq!(color.brightness(), 50.0);
/// assert_eq!(color.translated_alpha(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Color {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
    translated_hue: f64,
    translated_saturation: f64,
    translated_brightness: f64,
    translated_alpha: f64,
}

/// Brings a raw channel value into `[0, bound]`.
///
/// Non-finite input normalizes to `0` so the function is total.
pub fn normalize_channel(value: f64, bound: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        0.0
    } else if value > bound {
        value % bound
    } else {
        value
    }
}

impl Color {
    /// Creates a new color, normalizing every channel.
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let mut color = Self {
            hue: 0.0,
            saturation: 0.0,
            brightness: 0.0,
            alpha: 0.0,
            translated_hue: 0.0,
            translated_saturation: 0.0,
            translated_brightness: 0.0,
            translated_alpha: 0.0,
        };
        color.set_hue(hue);
        color.set_saturation(saturation);
        color.set_brightness(brightness);
        color.set_alpha(alpha);
        color
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Hue in renderer units (`hue / 360`).
    pub fn translated_hue(&self) -> f64 {
        self.translated_hue
    }

    /// Saturation in renderer units (`saturation / 100`).
    pub fn translated_saturation(&self) -> f64 {
        self.translated_saturation
    }

    /// Brightness in renderer units (`brightness / 100`).
    pub fn translated_brightness(&self) -> f64 {
        self.translated_brightness
    }

    /// Alpha in renderer units (`alpha / 100`).
    pub fn translated_alpha(&self) -> f64 {
        self.translated_alpha
    }

    pub fn set_hue(&mut self, hue: f64) {
        self.hue = normalize_channel(hue, HUE_BOUND);
        self.translated_hue = self.hue / HUE_BOUND;
    }

    pub fn set_saturation(&mut self, saturation: f64) {
        self.saturation = normalize_channel(saturation, PERCENT_BOUND);
        self.translated_saturation = self.saturation / PERCENT_BOUND;
    }

    pub fn set_brightness(&mut self, brightness: f64) {
        self.brightness = normalize_channel(brightness, PERCENT_BOUND);
        self.translated_brightness = self.brightness / PERCENT_BOUND;
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = normalize_channel(alpha, PERCENT_BOUND);
        self.translated_alpha = self.alpha / PERCENT_BOUND;
    }

    /// Converts to RGBA components in `0.0..=1.0` for `cairo::Context::set_source_rgba`.
    pub fn to_rgba(&self) -> (f64, f64, f64, f64) {
        let (r, g, b) = crate::util::hsb_to_rgb(
            self.hue,
            self.translated_saturation,
            self.translated_brightness,
        );
        (r, g, b, self.translated_alpha)
    }

    /// Sets this color as the source of a Cairo context.
    pub(crate) fn apply_source(&self, ctx: &cairo::Context) {
        let (r, g, b, a) = self.to_rgba();
        ctx.set_source_rgba(r, g, b, a);
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

impl From<[f64; 4]> for Color {
    fn from([hue, saturation, brightness, alpha]: [f64; 4]) -> Self {
        Self::new(hue, saturation, brightness, alpha)
    }
}

impl From<Color> for [f64; 4] {
    fn from(color: Color) -> Self {
        [color.hue, color.saturation, color.brightness, color.alpha]
    }
}

// Colors are written as `[hue, saturation, brightness, alpha]` in config files.
impl JsonSchema for Color {
    fn schema_name() -> Cow<'static, str> {
        "Color".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <[f64; 4]>::json_schema(generator)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Opaque black, the default for line, fill and border colors.
pub const BLACK: Color = Color {
    hue: 0.0,
    saturation: 0.0,
    brightness: 0.0,
    alpha: 100.0,
    translated_hue: 0.0,
    translated_saturation: 0.0,
    translated_brightness: 0.0,
    translated_alpha: 1.0,
};

/// Opaque white.
pub const WHITE: Color = Color {
    hue: 0.0,
    saturation: 0.0,
    brightness: 100.0,
    alpha: 100.0,
    translated_hue: 0.0,
    translated_saturation: 0.0,
    translated_brightness: 1.0,
    translated_alpha: 1.0,
};

/// Fully transparent.
pub const TRANSPARENT: Color = Color {
    hue: 0.0,
    saturation: 0.0,
    brightness: 0.0,
    alpha: 0.0,
    translated_hue: 0.0,
    translated_saturation: 0.0,
    translated_brightness: 0.0,
    translated_alpha: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_follows_rotation_law() {
        assert_eq!(Color::new(-10.0, 0.0, 0.0, 0.0).hue(), 0.0);
        assert_eq!(Color::new(-370.0, 0.0, 0.0, 0.0).hue(), 0.0);
        assert_eq!(Color::new(0.0, 0.0, 0.0, 0.0).hue(), 0.0);
        assert_eq!(Color::new(135.5, 0.0, 0.0, 0.0).hue(), 135.5);
        assert_eq!(Color::new(360.0, 0.0, 0.0, 0.0).hue(), 360.0);
        assert_eq!(Color::new(370.0, 0.0, 0.0, 0.0).hue(), 10.0);
        assert_eq!(Color::new(720.0, 0.0, 0.0, 0.0).hue(), 0.0);
        assert_eq!(Color::new(1000.0, 0.0, 0.0, 0.0).hue(), 280.0);
    }

    #[test]
    fn percentages_follow_same_law_against_one_hundred() {
        let color = Color::new(0.0, -1.0, 100.0, 250.0);
        assert_eq!(color.saturation(), 0.0);
        assert_eq!(color.brightness(), 100.0);
        assert_eq!(color.alpha(), 50.0);

        let color = Color::new(0.0, 101.0, 42.0, 200.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.brightness(), 42.0);
        assert_eq!(color.alpha(), 0.0);
    }

    #[test]
    fn non_finite_values_normalize_to_zero() {
        let color = Color::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.saturation(), 0.0);
        assert_eq!(color.brightness(), 0.0);
        assert_eq!(color.alpha(), 0.0);
    }

    #[test]
    fn renderer_units_track_every_mutation() {
        let mut color = Color::new(180.0, 50.0, 25.0, 100.0);
        assert_eq!(color.translated_hue(), 0.5);
        assert_eq!(color.translated_saturation(), 0.5);
        assert_eq!(color.translated_brightness(), 0.25);
        assert_eq!(color.translated_alpha(), 1.0);

        color.set_hue(450.0);
        assert_eq!(color.hue(), 90.0);
        assert_eq!(color.translated_hue(), 0.25);

        color.set_saturation(-3.0);
        assert_eq!(color.translated_saturation(), 0.0);

        color.set_brightness(175.0);
        assert_eq!(color.brightness(), 75.0);
        assert_eq!(color.translated_brightness(), 0.75);

        color.set_alpha(10.0);
        assert_eq!(color.translated_alpha(), 0.1);
    }

    #[test]
    fn constants_match_constructed_colors() {
        assert_eq!(BLACK, Color::new(0.0, 0.0, 0.0, 100.0));
        assert_eq!(WHITE, Color::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(TRANSPARENT, Color::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Color::default(), BLACK);
    }

    #[test]
    fn rgba_conversion_for_primaries() {
        let (r, g, b, a) = Color::new(120.0, 100.0, 100.0, 50.0).to_rgba();
        assert!(r.abs() < 1e-9);
        assert!((g - 1.0).abs() < 1e-9);
        assert!(b.abs() < 1e-9);
        assert!((a - 0.5).abs() < 1e-9);

        let (r, g, b, _) = BLACK.to_rgba();
        assert_eq!((r, g, b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn deserializing_normalizes_channels() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: Color,
        }

        let wrapper: Wrapper = toml::from_str("color = [400.0, 50.0, -5.0, 100.0]").unwrap();
        assert_eq!(wrapper.color.hue(), 40.0);
        assert_eq!(wrapper.color.brightness(), 0.0);
    }
}

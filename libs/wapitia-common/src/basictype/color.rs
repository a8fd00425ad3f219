use serde::{Deserialize, Serialize};

/// RGB color with one byte per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn builder() -> ColorBuilder {
        ColorBuilder::default()
    }
}

/// Build a color from integer channels, keeping only the low byte of each
/// (`300` becomes `44`, `-1` becomes `255`).
#[must_use]
pub fn new_color(r: i32, g: i32, b: i32) -> Color {
    Color::new(low_byte(r), low_byte(g), low_byte(b))
}

fn low_byte(v: i32) -> u8 {
    v.to_le_bytes()[0]
}

/// Builder for [`Color`]; unset channels are 0.
#[derive(Debug, Default)]
pub struct ColorBuilder {
    r: i32,
    g: i32,
    b: i32,
}

impl ColorBuilder {
    #[must_use]
    pub fn r(mut self, r: i32) -> Self {
        self.r = r;
        self
    }

    #[must_use]
    pub fn g(mut self, g: i32) -> Self {
        self.g = g;
        self
    }

    #[must_use]
    pub fn b(mut self, b: i32) -> Self {
        self.b = b;
        self
    }

    #[must_use]
    pub fn build(self) -> Color {
        new_color(self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn channels_are_masked_to_a_byte() {
        assert_eq!(new_color(12, 34, 56), Color::new(12, 34, 56));
        assert_eq!(new_color(256, 300, 511), Color::new(0, 44, 255));
        assert_eq!(new_color(-1, -256, 0x1_0000), Color::new(255, 0, 0));
    }

    #[test]
    fn builder_defaults_to_black() {
        assert_eq!(Color::builder().build(), Color::default());
        assert_eq!(Color::builder().g(128).build(), Color::new(0, 128, 0));
        assert_eq!(
            Color::builder().r(255).g(264).b(7).build(),
            Color::new(255, 8, 7)
        );
    }

    #[test]
    fn serializes_as_struct() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3}"#);
    }
}

/// Premultiplied RGBA color, channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Tiles are stored premultiplied, so keeping paint premultiplied avoids
/// converting twice when compositing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight RGBA bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (
                (self.r * inv).min(1.0),
                (self.g * inv).min(1.0),
                (self.b * inv).min(1.0),
                self.a,
            )
        }
    }

    /// Scales the opacity by `alpha`; premultiplied channels scale with it.
    #[inline]
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let k = alpha.clamp(0.0, 1.0);
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    /// Gray of the same luminance (Rec. 709 weights on straight channels),
    /// alpha unchanged.
    #[must_use]
    pub fn grayscale(self) -> Self {
        let (r, g, b, a) = self.to_straight();
        let w = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        Self::from_straight(w, w, w, a)
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_round_trip() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
        let (r, g, b, a) = c.to_straight();
        assert!((r - 1.0).abs() < 1e-6 && (g - 0.5).abs() < 1e-6 && b == 0.0 && a == 0.5);
    }

    #[test]
    fn grayscale_uses_straight_luminance() {
        let white = Color::white().grayscale();
        assert!((white.r - 1.0).abs() < 1e-5 && white.r == white.g && white.g == white.b);

        // Half-transparent green: luminance 0.7152, premultiplied by 0.5.
        let g = Color::from_straight(0.0, 1.0, 0.0, 0.5).grayscale();
        assert!((g.r - 0.3576).abs() < 1e-4, "{g:?}");
        assert_eq!(g.a, 0.5);
        assert_eq!(Color::transparent().grayscale(), Color::transparent());
    }

    #[test]
    fn with_alpha_keeps_premultiplication() {
        let c = Color::from_srgb_u8(255, 0, 0, 255).with_alpha(0.25);
        assert_eq!(c, Color::from_premul(0.25, 0.0, 0.0, 0.25));
    }
}

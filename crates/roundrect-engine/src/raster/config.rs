/// Rasterization settings shared by every tile a caller produces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterConfig {
    /// Device pixels per logical unit (the platform's native density).
    pub scale: f32,
    /// Anti-aliased fills, strokes and masks.
    pub anti_alias: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self { scale: 1.0, anti_alias: true }
    }
}

impl RasterConfig {
    /// # Panics
    /// If `scale` is not finite and positive.
    #[inline]
    pub fn with_scale(scale: f32) -> Self {
        let config = Self { scale, ..Self::default() };
        config.validate();
        config
    }

    #[inline]
    pub(crate) fn validate(&self) {
        assert!(self.scale.is_finite() && self.scale > 0.0, "raster scale must be > 0, got {}", self.scale);
    }

    /// Pixel extent of `logical` units, rounded up so nothing is clipped.
    #[inline]
    pub(crate) fn to_px(&self, logical: f32) -> u32 {
        (logical * self.scale).ceil().max(0.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_px_rounds_up() {
        let c = RasterConfig::with_scale(2.0);
        assert_eq!(c.to_px(21.0), 42);
        assert_eq!(c.to_px(10.25), 21);
        assert_eq!(RasterConfig::default().to_px(0.0), 0);
    }

    #[test]
    #[should_panic(expected = "raster scale")]
    fn zero_scale_is_rejected() {
        RasterConfig::with_scale(0.0);
    }
}

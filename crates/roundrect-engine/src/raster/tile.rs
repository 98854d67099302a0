use tiny_skia::Pixmap;

use crate::coords::Vec2;
use crate::paint::Color;

use super::RasterError;

/// How a consumer should treat a tile's color channels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ColorMode {
    /// Colors are fixed; paint the pixels as they are.
    #[default]
    Original,
    /// Only coverage matters; recolor at paint time with [`Tile::tinted`].
    Template,
}

/// A rasterized shape or gradient: premultiplied RGBA8 pixels plus the
/// density they were produced at.
///
/// Tiles own their pixels and are immutable once built; the transforms
/// below return new tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pixmap: Pixmap,
    scale: f32,
    color_mode: ColorMode,
}

impl Tile {
    #[inline]
    pub(crate) fn new(pixmap: Pixmap, scale: f32) -> Self {
        Self { pixmap, scale, color_mode: ColorMode::Original }
    }

    /// Width in device pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in device pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Size in logical units.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32 / self.scale, self.height() as f32 / self.scale)
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Premultiplied `[r, g, b, a]` at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Same tile, marked for recoloring at paint time.
    #[inline]
    pub fn into_template(mut self) -> Self {
        self.color_mode = ColorMode::Template;
        self
    }

    /// Scales every pixel's opacity by `alpha`.
    ///
    /// The pixels are premultiplied, so every channel scales.
    ///
    /// # Panics
    /// If `alpha` is outside `[0, 1]`.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        assert!((0.0..=1.0).contains(&alpha), "alpha must be in [0, 1], got {alpha}");
        if alpha < 1.0 {
            for px in bytemuck::cast_slice_mut::<u8, [u8; 4]>(self.pixmap.data_mut()) {
                for c in px.iter_mut() {
                    *c = (*c as f32 * alpha).round() as u8;
                }
            }
        }
        self
    }

    /// Recolors every pixel with `color`, keeping only the coverage.
    ///
    /// The result is an [`ColorMode::Original`] tile.
    pub fn tinted(&self, color: Color) -> Tile {
        let mut pixmap = self.pixmap.clone();
        let tint = [color.r, color.g, color.b, color.a];
        for px in bytemuck::cast_slice_mut::<u8, [u8; 4]>(pixmap.data_mut()) {
            let coverage = px[3] as f32;
            for (c, t) in px.iter_mut().zip(tint) {
                *c = (t.clamp(0.0, 1.0) * coverage).round() as u8;
            }
        }
        Tile::new(pixmap, self.scale)
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        self.pixmap.encode_png().map_err(|e| RasterError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, px: [u8; 4]) -> Tile {
        let mut pixmap = Pixmap::new(w, h).expect("pixmap");
        for p in bytemuck::cast_slice_mut::<u8, [u8; 4]>(pixmap.data_mut()) {
            *p = px;
        }
        Tile::new(pixmap, 2.0)
    }

    #[test]
    fn size_is_logical() {
        let t = solid(42, 20, [0, 0, 0, 255]);
        assert_eq!(t.size(), Vec2::new(21.0, 10.0));
    }

    #[test]
    fn half_alpha_halves_every_channel() {
        let t = solid(2, 2, [200, 100, 0, 200]).with_alpha(0.5);
        assert_eq!(t.pixel(1, 1), Some([100, 50, 0, 100]));
    }

    #[test]
    fn full_alpha_is_identity() {
        let t = solid(2, 2, [10, 20, 30, 40]);
        assert_eq!(t.clone().with_alpha(1.0), t);
    }

    #[test]
    #[should_panic(expected = "alpha must be in [0, 1]")]
    fn alpha_out_of_range_panics() {
        solid(1, 1, [0, 0, 0, 0]).with_alpha(1.5);
    }

    #[test]
    fn tint_keeps_coverage() {
        let t = solid(1, 1, [0, 0, 0, 128]).into_template();
        assert_eq!(t.color_mode(), ColorMode::Template);
        let red = t.tinted(Color::from_srgb_u8(255, 0, 0, 255));
        assert_eq!(red.pixel(0, 0), Some([128, 0, 0, 128]));
        assert_eq!(red.color_mode(), ColorMode::Original);
    }

    #[test]
    fn png_has_signature() {
        let bytes = solid(3, 3, [0, 0, 0, 255]).encode_png().expect("png");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn tiles_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Tile>();
    }
}

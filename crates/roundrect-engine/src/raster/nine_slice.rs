use tiny_skia::Pixmap;

use crate::coords::{EdgeInsets, Vec2};
use crate::paint::Color;

use super::{ColorMode, RasterConfig, RasterError, Tile};

/// Cap insets in device pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CapInsets {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

/// A tile plus the caps that must not stretch.
///
/// Rendering at a larger size copies the four corners verbatim, stretches
/// the edge bands along one axis, and fills the middle from the center band.
#[derive(Debug, Clone, PartialEq)]
pub struct NineSlice {
    tile: Tile,
    insets: EdgeInsets,
}

impl NineSlice {
    /// # Panics
    /// If any inset is negative or not finite.
    pub fn new(tile: Tile, insets: EdgeInsets) -> Self {
        assert!(
            insets.is_finite() && insets.top >= 0.0 && insets.left >= 0.0 && insets.bottom >= 0.0 && insets.right >= 0.0,
            "cap insets must be >= 0, got {insets:?}"
        );
        Self { tile, insets }
    }

    #[inline]
    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    /// Caps in logical units.
    #[inline]
    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }

    #[inline]
    pub fn color_mode(&self) -> ColorMode {
        self.tile.color_mode()
    }

    /// Caps in device pixels.
    ///
    /// Each cap is floored to whole pixels, then trimmed so at least one
    /// pixel per axis is left to stretch.
    pub fn cap_insets_px(&self) -> CapInsets {
        let px = |v: f32| (v * self.tile.scale()).floor() as u32;
        let (left, right) = keep_stretch_room(px(self.insets.left), px(self.insets.right), self.tile.width());
        let (top, bottom) = keep_stretch_room(px(self.insets.top), px(self.insets.bottom), self.tile.height());
        CapInsets { top, left, bottom, right }
    }

    /// For template slices, the same slice recolored with `tint`; original
    /// slices come back unchanged.
    pub fn resolve_color(&self, tint: Color) -> NineSlice {
        match self.color_mode() {
            ColorMode::Original => self.clone(),
            ColorMode::Template => NineSlice { tile: self.tile.tinted(tint), insets: self.insets },
        }
    }

    /// Stretches to `width` x `height` device pixels.
    ///
    /// Targets smaller than the caps shrink the caps proportionally.
    pub fn render(&self, width: u32, height: u32) -> Result<Pixmap, RasterError> {
        let mut out = Pixmap::new(width, height).ok_or(RasterError::EmptyCanvas { width, height })?;
        let caps = self.cap_insets_px();
        let xs = axis_map(width, self.tile.width(), caps.left, caps.right);
        let ys = axis_map(height, self.tile.height(), caps.top, caps.bottom);

        let src_w = self.tile.width() as usize;
        let src = bytemuck::cast_slice::<u8, [u8; 4]>(self.tile.pixmap().data());
        let dst = bytemuck::cast_slice_mut::<u8, [u8; 4]>(out.data_mut());
        for (row, &sy) in dst.chunks_exact_mut(width as usize).zip(&ys) {
            let src_row = &src[sy as usize * src_w..][..src_w];
            for (px, &sx) in row.iter_mut().zip(&xs) {
                *px = src_row[sx as usize];
            }
        }
        Ok(out)
    }

    /// Stretches to `size` logical units at the tile's density.
    pub fn render_logical(&self, size: Vec2) -> Result<Pixmap, RasterError> {
        let config = RasterConfig { scale: self.tile.scale(), ..RasterConfig::default() };
        self.render(config.to_px(size.x), config.to_px(size.y))
    }
}

/// Trims `lo`/`hi` so `len` keeps at least one pixel between them.
fn keep_stretch_room(lo: u32, hi: u32, len: u32) -> (u32, u32) {
    let room = len.saturating_sub(1);
    let lo = lo.min(room);
    (lo, hi.min(room - lo))
}

/// Source index for every destination index along one axis.
fn axis_map(dst_len: u32, src_len: u32, lo: u32, hi: u32) -> Vec<u32> {
    let (lo, hi) = if lo + hi > dst_len {
        let shrunk = (lo as u64 * dst_len as u64 / (lo + hi) as u64) as u32;
        log::warn!("nine-slice target {dst_len}px is smaller than caps {lo}+{hi}px; shrinking caps");
        (shrunk, dst_len - shrunk)
    } else {
        (lo, hi)
    };
    // Caps always leave the source at least one pixel to stretch.
    let src_mid = src_len - lo - hi;
    let dst_mid = dst_len - lo - hi;
    (0..dst_len)
        .map(|d| {
            if d < lo {
                d
            } else if d >= dst_len - hi {
                src_len - (dst_len - d)
            } else {
                lo + ((d - lo) as u64 * src_mid as u64 / dst_mid as u64) as u32
            }
        })
        .collect()
}

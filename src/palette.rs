//! Precomputed mapping from escape time to display color.

use escape::MAX_ITERATIONS;
use std::ops::Index;

/// An RGB color triple.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Packs the color as `0x00RRGGBB`, the layout 32-bit framebuffers
    /// such as minifb's expect.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }
}

/// A fixed table of [`MAX_ITERATIONS`] + 1 colors, one per possible
/// escape time.  Built once when the renderer is constructed and
/// shared read-only by every worker thread afterward, so a pixel's
/// color is a single table lookup.
#[derive(Debug)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Builds the table.  Each escape time is normalized to
    /// `t = n / MAX_ITERATIONS` and pushed through three
    /// Bernstein-style polynomial blends:
    ///
    /// ```text
    /// r = 9(1-t)t³    g = 15(1-t)²t²    b = 8.5(1-t)³t
    /// ```
    ///
    /// Each blend is smooth, stays inside `[0, 1)`, and vanishes at
    /// both `t = 0` and `t = 1`, so instant escapes and presumed
    /// set-interior points are both near-black with a bright band in
    /// between.
    pub fn new() -> Palette {
        Palette {
            colors: (0..=MAX_ITERATIONS).map(Palette::blend).collect(),
        }
    }

    fn blend(iterations: usize) -> Color {
        let t = iterations as f64 / MAX_ITERATIONS as f64;
        let r = 9.0 * (1.0 - t) * t * t * t * 255.0;
        let g = 15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0;
        let b = 8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0;
        Color(r as u8, g as u8, b as u8)
    }

    /// The color assigned to an escape time.
    ///
    /// # Panics
    ///
    /// Panics if `iterations` exceeds `MAX_ITERATIONS`.  `escape_time`
    /// can never produce such a value.
    pub fn color(&self, iterations: usize) -> Color {
        self.colors[iterations]
    }

    /// The number of entries in the table, always `MAX_ITERATIONS + 1`.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette is never empty; this exists to pair with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette::new()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, iterations: usize) -> &Color {
        &self.colors[iterations]
    }
}

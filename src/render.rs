// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parallel renderer.  Owns no fractal math of its own: it splits
//! the grid into disjoint row bands, hands each band to a scoped
//! worker thread, and drives the viewport map, the escape-time
//! recurrence, and the palette lookup for every pixel.

use crossbeam;
use num_cpus;

use error::Error;
use escape::escape_time;
use palette::{Color, Palette};
use viewport::{Pixel, Viewport};

/// A contiguous, half-open range of grid rows owned by exactly one
/// worker for the duration of one render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowBand {
    /// First row of the band.
    pub min_row: usize,
    /// One past the last row of the band.
    pub max_row: usize,
}

impl RowBand {
    /// The number of rows in the band.
    pub fn rows(&self) -> usize {
        self.max_row - self.min_row
    }
}

/// Splits the rows `[0, height)` into contiguous bands of
/// `ceil(height / workers)` rows, the last band truncated to fit.
/// The bands are disjoint and cover every row exactly once; that
/// invariant is what lets the workers write the shared grid without
/// any locking.  A worker count of zero is treated as one, so the
/// partition is total.
///
/// When `height < workers` this produces fewer, single-row bands
/// rather than empty ones.
pub fn partition_rows(height: usize, workers: usize) -> Vec<RowBand> {
    if height == 0 {
        return vec![];
    }
    let step = (height + workers.max(1) - 1) / workers.max(1);
    (0..height)
        .step_by(step)
        .map(|min_row| RowBand {
            min_row,
            max_row: (min_row + step).min(height),
        })
        .collect()
}

/// Escape-time renderer for a pixel grid whose dimensions are fixed
/// at construction.  Builds its palette once and shares it read-only
/// with every worker; the renderer itself carries no mutable state,
/// so one instance can serve every render for the life of the window.
#[derive(Debug)]
pub struct Renderer {
    width: usize,
    height: usize,
    palette: Palette,
}

impl Renderer {
    /// Constructor.  Fails on an empty grid; everything downstream
    /// assumes there is at least one pixel.
    pub fn new(width: usize, height: usize) -> Result<Renderer, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid(width, height));
        }
        Ok(Renderer {
            width,
            height,
            palette: Palette::new(),
        })
    }

    /// Grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The palette this renderer colors with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Fills every cell of `cells`, one worker thread per row band,
    /// and returns only once all workers have joined.  The worker
    /// count comes from the machine's available parallelism.
    ///
    /// The caller owns the grid and must not read it or start another
    /// render into it until this call returns.
    ///
    /// # Panics
    ///
    /// Panics unless `cells.len()` is exactly `width * height`.
    pub fn render(&self, view: &Viewport, cells: &mut [Color]) {
        self.render_with_workers(view, cells, num_cpus::get());
    }

    /// As [`Renderer::render`], but with an explicit worker count.
    /// The produced bytes are identical for every worker count: each
    /// pixel's value depends only on its own coordinates and the
    /// immutable palette, never on where the band boundaries fall.
    pub fn render_with_workers(&self, view: &Viewport, cells: &mut [Color], workers: usize) {
        assert_eq!(cells.len(), self.width * self.height);
        let bands = partition_rows(self.height, workers);
        let band_len = bands[0].rows() * self.width;
        crossbeam::scope(|spawner| {
            for (band, chunk) in bands.iter().zip(cells.chunks_mut(band_len)) {
                spawner.spawn(move |_| self.render_band(view, band, chunk));
            }
        })
        .unwrap();
    }

    /// The per-worker pixel loop over one band.  `chunk` is the
    /// band's disjoint slice of the grid, `band.rows() * width` cells
    /// in row-major order.
    ///
    /// Rows sit in the outer loop so the complex coordinate can be
    /// advanced incrementally: within a row the real part grows by
    /// one `zoom` per column instead of being recomputed from the
    /// pixel index.  The imaginary part is derived from the absolute
    /// row index rather than accumulated from the band's first row,
    /// so the low float bits cannot vary with how the rows were
    /// banded.
    fn render_band(&self, view: &Viewport, band: &RowBand, chunk: &mut [Color]) {
        let rows = band.min_row..band.max_row;
        for (row, line) in rows.zip(chunk.chunks_mut(self.width)) {
            let mut c = view.pixel_to_point(Pixel(0, row), self.width, self.height);
            for cell in line.iter_mut() {
                *cell = self.palette.color(escape_time(c));
                c.re += view.zoom();
            }
        }
    }
}

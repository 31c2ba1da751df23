//! Errors reported when the engine's inputs fail validation at
//! construction time.  Once a `Viewport` and a `Renderer` exist, every
//! operation on them is total; there is nothing left to go wrong.

/// The ways the caller can hand the engine a degenerate configuration.
#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    /// The zoom factor was zero, negative, or not a finite number.
    #[fail(display = "zoom must be a positive, finite number, not {}", _0)]
    InvalidZoom(f64),

    /// One of the viewport center coordinates was not a finite number.
    #[fail(display = "viewport center must be finite, not ({}, {})", _0, _1)]
    InvalidCenter(f64, f64),

    /// The requested pixel grid had a zero width or height.
    #[fail(display = "pixel grid must be non-empty, not {}x{}", _0, _1)]
    EmptyGrid(usize, usize),
}

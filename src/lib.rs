#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot explorer engine
//!
//! The Mandelbrot set is drawn by taking every pixel of an image,
//! mapping it to a point `c` on the complex plane, and iterating
//! `z ← z² + c` until `z` provably runs off to infinity.  The number
//! of iterations that takes (the escape time) is looked up in a
//! precomputed palette to color the pixel; points that never escape
//! within the iteration cap are drawn near-black.
//!
//! This crate is the engine behind an interactive pan-and-zoom
//! viewer: a `Viewport` describes which slice of the plane the image
//! shows, and a `Renderer` fills a caller-owned pixel grid by
//! splitting it into disjoint row bands and evaluating each band on
//! its own thread.  Recomputing the whole frame on every keystroke is
//! what the parallelism pays for.  The window and input handling live
//! in the `mandelview` binary and hold no fractal math of their own.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate num;
extern crate num_cpus;

pub mod error;
pub mod escape;
pub mod palette;
pub mod render;
pub mod viewport;

pub use error::Error;
pub use escape::{escape_time, MAX_ITERATIONS};
pub use palette::{Color, Palette};
pub use render::{partition_rows, Renderer, RowBand};
pub use viewport::{Pixel, Viewport};

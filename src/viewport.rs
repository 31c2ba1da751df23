//! The viewport: which slice of the complex plane the pixel grid
//! shows, and the affine map from pixel coordinates onto it.

use error::Error;
use num::Complex;

/// The x, y position of a cell in the pixel grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The sub-region of the complex plane currently mapped onto the
/// pixel grid.  `zoom` is the width of one pixel in plane units, so a
/// *smaller* zoom means deeper magnification, and `center` is the
/// plane point the middle of the grid lands on.
///
/// A `Viewport` can only be obtained through [`Viewport::new`], which
/// rejects degenerate parameters, so every render can treat the
/// mapping as total.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    zoom: f64,
    center: Complex<f64>,
}

impl Viewport {
    /// Constructor.  Fails if `zoom` is not a positive finite number
    /// or either center coordinate is non-finite.
    pub fn new(zoom: f64, center: Complex<f64>) -> Result<Viewport, Error> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(Error::InvalidZoom(zoom));
        }
        if !center.re.is_finite() || !center.im.is_finite() {
            return Err(Error::InvalidCenter(center.re, center.im));
        }
        Ok(Viewport { zoom, center })
    }

    /// The width of one pixel in plane units.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The plane point at the middle of the grid.
    pub fn center(&self) -> Complex<f64> {
        self.center
    }

    /// Given the position of a pixel on a grid of the given
    /// dimensions, return the complex number that pixel samples:
    ///
    /// ```text
    /// re = (px - width / 2) * zoom + center.re
    /// im = (py - height / 2) * zoom + center.im
    /// ```
    ///
    /// The grid midpoint maps *exactly* onto `center`; no rounding is
    /// involved there because the subtraction yields zero.
    pub fn pixel_to_point(&self, pixel: Pixel, width: usize, height: usize) -> Complex<f64> {
        Complex::new(
            (pixel.0 as f64 - width as f64 / 2.0) * self.zoom + self.center.re,
            (pixel.1 as f64 - height as f64 / 2.0) * self.zoom + self.center.im,
        )
    }

    /// A copy of this viewport with the zoom multiplied by `factor`,
    /// keeping the same center.  Factors below one magnify.  Fails
    /// rather than produce a degenerate viewport, e.g. when repeated
    /// magnification finally underflows the zoom to zero.
    pub fn zoomed(&self, factor: f64) -> Result<Viewport, Error> {
        Viewport::new(self.zoom * factor, self.center)
    }

    /// A copy of this viewport with the center shifted by a pixel
    /// delta, scaled by the zoom so a pan moves the image by the same
    /// number of screen pixels at any magnification.
    pub fn panned(&self, dx: f64, dy: f64) -> Viewport {
        Viewport {
            zoom: self.zoom,
            center: self.center + Complex::new(dx * self.zoom, dy * self.zoom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_fails_on_bad_zoom() {
        let center = Complex::new(0.0, 0.0);
        assert!(Viewport::new(0.0, center).is_err());
        assert!(Viewport::new(-0.004, center).is_err());
        assert!(Viewport::new(::std::f64::INFINITY, center).is_err());
        assert!(Viewport::new(::std::f64::NAN, center).is_err());
    }

    #[test]
    fn viewport_fails_on_bad_center() {
        assert!(Viewport::new(0.004, Complex::new(::std::f64::NAN, 0.0)).is_err());
        assert!(Viewport::new(0.004, Complex::new(0.0, ::std::f64::INFINITY)).is_err());
    }

    #[test]
    fn viewport_passes_on_good_parameters() {
        assert!(Viewport::new(0.004, Complex::new(-0.7, 0.0)).is_ok());
    }

    #[test]
    fn center_pixel_maps_exactly_to_center() {
        let view = Viewport::new(0.004, Complex::new(-0.7, 0.25)).unwrap();
        let point = view.pixel_to_point(Pixel(480, 270), 960, 540);
        assert_eq!(point, Complex::new(-0.7, 0.25));
    }

    #[test]
    fn pixel_to_point_on_a_unit_grid() {
        let view = Viewport::new(1.0, Complex::new(0.0, 0.0)).unwrap();
        assert_eq!(
            view.pixel_to_point(Pixel(0, 0), 4, 4),
            Complex::new(-2.0, -2.0)
        );
        assert_eq!(
            view.pixel_to_point(Pixel(4, 4), 4, 4),
            Complex::new(2.0, 2.0)
        );
        assert_eq!(
            view.pixel_to_point(Pixel(3, 1), 4, 4),
            Complex::new(1.0, -1.0)
        );
    }

    #[test]
    fn adjacent_pixels_are_one_zoom_apart() {
        let view = Viewport::new(0.5, Complex::new(-0.7, 0.1)).unwrap();
        let a = view.pixel_to_point(Pixel(10, 7), 64, 64);
        let b = view.pixel_to_point(Pixel(11, 7), 64, 64);
        assert_eq!(b.re - a.re, 0.5);
        assert_eq!(b.im, a.im);
    }

    #[test]
    fn zooming_scales_and_panning_shifts() {
        let view = Viewport::new(0.004, Complex::new(-0.7, 0.0)).unwrap();
        let closer = view.zoomed(0.9).unwrap();
        assert_eq!(closer.zoom(), 0.004 * 0.9);
        assert_eq!(closer.center(), view.center());

        let moved = view.panned(40.0, -40.0);
        assert_eq!(moved.zoom(), view.zoom());
        assert_eq!(moved.center(), Complex::new(-0.7 + 40.0 * 0.004, -40.0 * 0.004));
    }

    #[test]
    fn zooming_to_nothing_is_rejected() {
        let view = Viewport::new(::std::f64::MIN_POSITIVE, Complex::new(0.0, 0.0)).unwrap();
        assert!(view.zoomed(0.0).is_err());
    }
}

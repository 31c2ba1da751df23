//! The escape-time recurrence at the heart of the renderer.

use num::Complex;

/// How many iterations of `z ← z² + c` we run before presuming a
/// point is inside the set.  Also fixes the palette size, since every
/// possible escape time needs a color.
pub const MAX_ITERATIONS: usize = 1000;

/// Returns the number of iterations of `z ← z² + c`, starting from
/// `z = c`, completed before `|z|` leaves the radius-2 disk, which
/// proves the orbit diverges and `c` is outside the Mandelbrot set.
/// Points still inside the disk after [`MAX_ITERATIONS`] steps get
/// `MAX_ITERATIONS`; that is a presumption of membership, not a proof.
///
/// The components are tracked separately so each step costs three
/// multiplications, and the squares computed for the bailout test are
/// reused for the update.
pub fn escape_time(c: Complex<f64>) -> usize {
    let mut z_re = c.re;
    let mut z_im = c.im;
    for count in 0..MAX_ITERATIONS {
        let r2 = z_re * z_re;
        let i2 = z_im * z_im;
        if r2 + i2 > 4.0 {
            return count;
        }
        z_im = 2.0 * z_re * z_im + c.im;
        z_re = r2 - i2 + c.re;
    }
    MAX_ITERATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0)), MAX_ITERATIONS);
    }

    #[test]
    fn leftmost_set_point_never_escapes() {
        // c = -2 sits exactly on the set's boundary; its orbit is
        // -2, 2, 2, 2, ... and |z|² never exceeds the bailout.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0)), MAX_ITERATIONS);
    }

    #[test]
    fn far_exterior_point_escapes_immediately() {
        assert!(escape_time(Complex::new(2.0, 2.0)) <= 5);
    }

    #[test]
    fn escape_time_is_bounded() {
        for &(re, im) in &[(0.3, 0.5), (-0.75, 0.1), (0.25, 0.0), (-1.0, 0.3)] {
            let n = escape_time(Complex::new(re, im));
            assert!(n <= MAX_ITERATIONS);
        }
    }
}

// Newton-Raphson basin generator for z^n - 1.
//
// For each pixel iterate the root-finding step and record which root
// it converges to and how long that takes; the root index picks the
// colour band, the iteration count shades it.

use ndarray::{Array, ShapeBuilder};
use num::complex::Complex64;
use rand::Rng;

use crate::colormap::Colormap;
use crate::figure::Figure;
use crate::mandelbrot::point;

const MAX_ITER: u32 = 40;
const TOLERANCE: f64 = 1e-6;

pub fn generate<R: Rng>(rng: &mut R) -> Figure {
    let colormap = Colormap::pick(rng);
    let degree: i32 = rng.gen_range(3..=6);
    let rotation = Complex64::from_polar(1.0, rng.gen_range(0.0..std::f64::consts::TAU));
    let scale = rng.gen_range(2.0..4.0);
    log::debug!("newton degree={} scale={:.2} colormap={:?}", degree, scale, colormap);

    let roots: Vec<Complex64> = (0..degree)
        .map(|k| Complex64::from_polar(1.0, std::f64::consts::TAU * f64::from(k) / f64::from(degree)))
        .collect();

    let centre = Complex64::new(0.0, 0.0);
    let (width, height) = Figure::axes_dim();
    let field = Array::from_shape_fn((width, height).f(), |(i, j)| {
        let z0 = rotation * point(centre, scale, width, height, i, j);
        basin_value(z0, degree, &roots)
    });

    let mut figure = Figure::new();
    figure.draw_field(&field, colormap);
    figure
}

/// Value in 0..=1 encoding the root converged to and the convergence
/// speed; 0 for points that never converge (e.g. the origin).
fn basin_value(mut z: Complex64, degree: i32, roots: &[Complex64]) -> f64 {
    for iter in 0..MAX_ITER {
        for (k, root) in roots.iter().enumerate() {
            if (z - *root).norm_sqr() < TOLERANCE {
                let shade = 1.0 - f64::from(iter) / f64::from(MAX_ITER);
                return ((k as f64 + 0.3 + 0.65 * shade) / roots.len() as f64).clamp(0.0, 1.0);
            }
        }
        let derivative = z.powi(degree - 1) * f64::from(degree);
        if derivative.norm_sqr() == 0.0 {
            break;
        }
        z -= (z.powi(degree) - Complex64::new(1.0, 0.0)) / derivative;
    }
    0.0
}

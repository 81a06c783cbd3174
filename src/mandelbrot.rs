//! Escape-time Mandelbrot generator with smooth colouring. Each call
//! draws a random window from a list of regions known to show
//! structure at the rendered resolution.

use ndarray::{Array, ShapeBuilder};
use num::complex::Complex64;
use rand::Rng;

use crate::colormap::Colormap;
use crate::figure::Figure;

// (centre_x, centre_y, vertical span)
const WINDOWS: &[(f64, f64, f64)] = &[
    (-0.75, 0.0, 2.8),
    (-0.7453, 0.1127, 0.12),
    (-0.1011, 0.9563, 0.3),
    (0.2825, -0.01, 0.12),
    (-1.25066, 0.02012, 0.06),
    (-0.745428, 0.113009, 0.012),
];

pub fn generate<R: Rng>(rng: &mut R) -> Figure {
    let colormap = Colormap::pick(rng);
    let (cx, cy, span) = WINDOWS[rng.gen_range(0..WINDOWS.len())];
    let scale = span * rng.gen_range(0.6..1.4);
    let centre = Complex64::new(
        cx + scale * rng.gen_range(-0.05..0.05),
        cy + scale * rng.gen_range(-0.05..0.05),
    );
    let max_iter = rng.gen_range(150..400);
    log::debug!(
        "mandelbrot centre={} scale={:.4e} max_iter={} colormap={:?}",
        centre,
        scale,
        max_iter,
        colormap
    );

    let (width, height) = Figure::axes_dim();
    let field = Array::from_shape_fn((width, height).f(), |(i, j)| {
        let c = point(centre, scale, width, height, i, j);
        smooth_count(Complex64::new(0.0, 0.0), c, max_iter)
    });

    let mut figure = Figure::new();
    figure.draw_field(&field, colormap);
    figure
}

/// Complex-plane point for pixel (i, j); `scale` is the vertical span
/// of the view, the horizontal span follows the aspect ratio.
pub(crate) fn point(
    centre: Complex64,
    scale: f64,
    width: usize,
    height: usize,
    i: usize,
    j: usize,
) -> Complex64 {
    let half_h = scale * 0.5;
    let half_w = half_h * (width as f64 / height as f64);
    Complex64::new(
        centre.re - half_w + (i as f64 + 0.5) / width as f64 * 2.0 * half_w,
        centre.im - half_h + (j as f64 + 0.5) / height as f64 * 2.0 * half_h,
    )
}

/// Normalised smooth escape count in 0..=1 for z -> z^2 + c starting
/// at z0. Points that never escape map to 0.
pub(crate) fn smooth_count(z0: Complex64, c: Complex64, max_iter: u32) -> f64 {
    let mut z = z0;
    let mut iter = 0;
    while z.norm_sqr() <= 4.0 && iter < max_iter {
        z = z * z + c;
        iter += 1;
    }
    if iter >= max_iter {
        return 0.0;
    }
    let nu = (z.norm().max(1e-9).ln().ln() / std::f64::consts::LN_2).max(0.0);
    ((iter as f64 + 1.0 - nu) / max_iter as f64).clamp(0.0, 1.0)
}

//! Julia set generator. The constant is drawn near the boundary of
//! the Mandelbrot set so most renders carry visible filament
//! structure rather than a filled disc or empty dust.

use ndarray::{Array, ShapeBuilder};
use num::complex::Complex64;
use rand::Rng;

use crate::colormap::Colormap;
use crate::figure::Figure;
use crate::mandelbrot::{point, smooth_count};

pub fn generate<R: Rng>(rng: &mut R) -> Figure {
    let colormap = Colormap::pick(rng);
    let theta = rng.gen_range(0.0..std::f64::consts::TAU);
    let radius = rng.gen_range(0.74..0.80);
    let c = Complex64::from_polar(radius, theta);
    let scale = rng.gen_range(2.4..3.2);
    let max_iter = rng.gen_range(150..350);
    log::debug!("julia c={} scale={:.2} max_iter={} colormap={:?}", c, scale, max_iter, colormap);

    let centre = Complex64::new(0.0, 0.0);
    let (width, height) = Figure::axes_dim();
    let field = Array::from_shape_fn((width, height).f(), |(i, j)| {
        let z0 = point(centre, scale, width, height, i, j);
        smooth_count(z0, c, max_iter)
    });

    let mut figure = Figure::new();
    figure.draw_field(&field, colormap);
    figure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_figure_has_canvas_dimensions() {
        let mut rng = StdRng::seed_from_u64(3);
        let fig = generate(&mut rng);
        assert_eq!(fig.image().dimensions(), (figure::WIDTH, figure::HEIGHT));
    }

    #[test]
    fn generated_figure_is_not_blank() {
        let mut rng = StdRng::seed_from_u64(3);
        let fig = generate(&mut rng);
        let touched = fig.image().pixels().any(|pixel| *pixel != figure::BACKGROUND);
        assert!(touched);
    }

    #[test]
    fn same_seed_reproduces_the_same_figure() {
        let first = generate(&mut StdRng::seed_from_u64(11));
        let second = generate(&mut StdRng::seed_from_u64(11));
        assert_eq!(first.image().as_raw(), second.image().as_raw());
    }

    #[test]
    fn different_seeds_diverge() {
        let first = generate(&mut StdRng::seed_from_u64(11));
        let second = generate(&mut StdRng::seed_from_u64(12));
        assert_ne!(first.image().as_raw(), second.image().as_raw());
    }
}

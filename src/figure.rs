// A figure is a fixed-size canvas with a solid grey background and an
// inner axes rectangle that generators paint into. Sized to match the
// original figures: 6.4in x 4.8in at 100 dpi.

use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};
use ndarray::{Array, Ix2};

use crate::colormap::Colormap;

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;
pub const BACKGROUND: Rgb<u8> = Rgb([128, 128, 128]);

// Inset of the axes rectangle; everything outside stays background.
const MARGIN_X: u32 = 64;
const MARGIN_Y: u32 = 48;

pub struct Figure {
    canvas: RgbImage,
}

impl Figure {
    pub fn new() -> Figure {
        Figure {
            canvas: RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND),
        }
    }

    /// Dimensions of the axes rectangle scalar fields are rendered into.
    pub fn axes_dim() -> (usize, usize) {
        ((WIDTH - 2 * MARGIN_X) as usize, (HEIGHT - 2 * MARGIN_Y) as usize)
    }

    /// Centre of the axes rectangle in canvas pixels.
    pub fn axes_centre() -> (i32, i32) {
        ((WIDTH / 2) as i32, (HEIGHT / 2) as i32)
    }

    /// Paint a scalar field into the axes rectangle through a colormap.
    /// The field is indexed (x, y) with y pointing up and must match
    /// `axes_dim`; values are clamped to 0..=1 by the colormap.
    pub fn draw_field(&mut self, field: &Array<f64, Ix2>, colormap: Colormap) {
        let (width, height) = field.dim();
        for x in 0..width {
            for y in 0..height {
                let val = *field.get((x, y)).unwrap_or(&0.0);
                self.canvas.put_pixel(
                    MARGIN_X + x as u32,
                    MARGIN_Y + (height - 1 - y) as u32,
                    colormap.map(val),
                );
            }
        }
    }

    pub fn canvas_mut(&mut self) -> &mut RgbImage {
        &mut self.canvas
    }

    pub fn image(&self) -> &RgbImage {
        &self.canvas
    }

    pub fn save(&self, path: &Path) -> ImageResult<()> {
        self.canvas.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ShapeBuilder;

    #[test]
    fn canvas_has_figure_dimensions() {
        let figure = Figure::new();
        assert_eq!(figure.image().dimensions(), (WIDTH, HEIGHT));
    }

    #[test]
    fn fresh_canvas_is_background_grey() {
        let figure = Figure::new();
        assert_eq!(*figure.image().get_pixel(0, 0), BACKGROUND);
        assert_eq!(*figure.image().get_pixel(WIDTH - 1, HEIGHT - 1), BACKGROUND);
        assert_eq!(*figure.image().get_pixel(WIDTH / 2, HEIGHT / 2), BACKGROUND);
    }

    #[test]
    fn fields_land_inside_the_axes_rectangle() {
        let (width, height) = Figure::axes_dim();
        let field = Array::from_shape_fn((width, height).f(), |_| 1.0);
        let mut figure = Figure::new();
        figure.draw_field(&field, Colormap::Rainbow);
        // Margins untouched, axes area painted.
        assert_eq!(*figure.image().get_pixel(0, 0), BACKGROUND);
        assert_eq!(*figure.image().get_pixel(MARGIN_X - 1, HEIGHT / 2), BACKGROUND);
        assert_ne!(*figure.image().get_pixel(MARGIN_X, MARGIN_Y), BACKGROUND);
        assert_ne!(*figure.image().get_pixel(WIDTH / 2, HEIGHT / 2), BACKGROUND);
    }

    #[test]
    fn field_orientation_is_y_up() {
        let (width, height) = Figure::axes_dim();
        // Value 1.0 only in the bottom row of the field.
        let field = Array::from_shape_fn((width, height).f(), |(_, j)| {
            if j == 0 {
                1.0
            } else {
                0.0
            }
        });
        let mut figure = Figure::new();
        figure.draw_field(&field, Colormap::Greys);
        // Bottom of the field ends up at the bottom of the axes area.
        let bottom = *figure.image().get_pixel(MARGIN_X, MARGIN_Y + height as u32 - 1);
        let top = *figure.image().get_pixel(MARGIN_X, MARGIN_Y);
        assert_eq!(bottom, Rgb([255, 255, 255]));
        assert_eq!(top, Rgb([0, 0, 0]));
    }
}

// Hikosaka-style stimulus generator: a stack of point-symmetric star
// polygons with shrinking radii, each layer with its own vertex
// count, phase and colour. The symmetry centre carries a small dot.

use geo::Coordinate;
use imageproc::drawing::{
    draw_antialiased_line_segment_mut, draw_filled_circle_mut, draw_polygon_mut,
};
use imageproc::pixelops;
use imageproc::point::Point;
use rand::Rng;

use crate::colormap::Colormap;
use crate::figure::Figure;

const LAYERS: usize = 4;

pub fn generate<R: Rng>(rng: &mut R) -> Figure {
    let mut figure = Figure::new();
    let colormap = Colormap::pick(rng);
    let (centre_x, centre_y) = Figure::axes_centre();
    let centre = Coordinate {
        x: f64::from(centre_x),
        y: f64::from(centre_y),
    };
    let (_, axes_height) = Figure::axes_dim();
    let base_radius = axes_height as f64 * 0.48;
    log::debug!("hikosaka colormap={:?}", colormap);

    for layer in 0..LAYERS {
        let radius = base_radius * (1.0 - 0.21 * layer as f64) * rng.gen_range(0.85..1.0);
        let spikes = rng.gen_range(3..=8);
        let dip = rng.gen_range(0.35..0.75);
        let phase = rng.gen_range(0.0..std::f64::consts::TAU);
        let fill = colormap.map(rng.gen_range(0.0..1.0));
        let edge = colormap.map(rng.gen_range(0.0..1.0));

        let points = pixels(&star(centre, radius, spikes, dip, phase));
        if points.len() < 3 {
            continue;
        }
        draw_polygon_mut(figure.canvas_mut(), &points, fill);
        for v in 0..points.len() {
            let a = points[v];
            let b = points[(v + 1) % points.len()];
            draw_antialiased_line_segment_mut(
                figure.canvas_mut(),
                (a.x, a.y),
                (b.x, b.y),
                edge,
                pixelops::interpolate,
            );
        }
    }

    let dot = colormap.map(rng.gen_range(0.0..1.0));
    draw_filled_circle_mut(figure.canvas_mut(), (centre_x, centre_y), 4, dot);
    figure
}

// Point-symmetric star outline: 2 * spikes vertices alternating
// between the outer radius and a dipped inner radius.
fn star(centre: Coordinate<f64>, radius: f64, spikes: u32, dip: f64, phase: f64) -> Vec<Coordinate<f64>> {
    let count = spikes * 2;
    (0..count)
        .map(|v| {
            let angle = phase + std::f64::consts::TAU * f64::from(v) / f64::from(count);
            let r = if v % 2 == 0 { radius } else { radius * dip };
            Coordinate {
                x: centre.x + r * angle.cos(),
                y: centre.y + r * angle.sin(),
            }
        })
        .collect()
}

// Canvas pixels for an outline, dropping rounding duplicates so the
// polygon path stays open for imageproc.
fn pixels(outline: &[Coordinate<f64>]) -> Vec<Point<i32>> {
    let mut points: Vec<Point<i32>> = Vec::new();
    for coordinate in outline {
        let point = Point::new(coordinate.x.round() as i32, coordinate.y.round() as i32);
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{self, BACKGROUND};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn star_is_point_symmetric_in_vertex_count() {
        let centre = Coordinate { x: 0.0, y: 0.0 };
        let outline = star(centre, 10.0, 5, 0.5, 0.0);
        assert_eq!(outline.len(), 10);
        // Outer vertices sit on the outer radius.
        let r = (outline[0].x.powi(2) + outline[0].y.powi(2)).sqrt();
        assert!((r - 10.0).abs() < 1e-9);
    }

    #[test]
    fn pixels_drop_consecutive_duplicates() {
        let outline = vec![
            Coordinate { x: 0.1, y: 0.1 },
            Coordinate { x: 0.2, y: 0.2 },
            Coordinate { x: 5.0, y: 5.0 },
            Coordinate { x: 0.0, y: 0.0 },
        ];
        let points = pixels(&outline);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[1], Point::new(5, 5));
    }

    #[test]
    fn generated_figure_is_not_blank() {
        let mut rng = StdRng::seed_from_u64(9);
        let fig = generate(&mut rng);
        assert_eq!(fig.image().dimensions(), (figure::WIDTH, figure::HEIGHT));
        let touched = fig
            .image()
            .pixels()
            .any(|pixel| *pixel != BACKGROUND);
        assert!(touched);
    }

    #[test]
    fn the_symmetry_centre_is_painted() {
        let mut rng = StdRng::seed_from_u64(9);
        let fig = generate(&mut rng);
        let (cx, cy) = Figure::axes_centre();
        assert_ne!(*fig.image().get_pixel(cx as u32, cy as u32), BACKGROUND);
    }
}

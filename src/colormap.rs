// Colormaps used to paint fractal fields. The grey pair is kept for
// completeness but never picked at random, grey stimuli would vanish
// into the grey figure background.

use image::Rgb;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    Rainbow,
    Ocean,
    Ember,
    Forest,
    Violet,
    Twilight,
    Greys,
    GreysReversed,
}

const PALETTE: [Colormap; 6] = [
    Colormap::Rainbow,
    Colormap::Ocean,
    Colormap::Ember,
    Colormap::Forest,
    Colormap::Violet,
    Colormap::Twilight,
];

impl Colormap {
    /// Every colormap, including the greys that are excluded from
    /// random selection.
    pub fn all() -> [Colormap; 8] {
        [
            Colormap::Rainbow,
            Colormap::Ocean,
            Colormap::Ember,
            Colormap::Forest,
            Colormap::Violet,
            Colormap::Twilight,
            Colormap::Greys,
            Colormap::GreysReversed,
        ]
    }

    /// The colormaps a generator may draw from.
    pub fn palette() -> &'static [Colormap] {
        &PALETTE
    }

    pub fn pick<R: Rng>(rng: &mut R) -> Colormap {
        PALETTE[rng.gen_range(0..PALETTE.len())]
    }

    /// Map a value in 0..=1 to a colour.
    pub fn map(&self, t: f64) -> Rgb<u8> {
        let t = t.clamp(0.0, 1.0);
        match self {
            Colormap::Rainbow => {
                let (r, g, b) = hsv_to_rgb(360.0 * t, 0.9, (0.4 + 0.6 * t).min(0.9));
                Rgb([r, g, b])
            }
            Colormap::Ocean => ramp(&[[2, 12, 36], [14, 94, 148], [126, 222, 235]], t),
            Colormap::Ember => ramp(&[[20, 4, 8], [178, 34, 16], [252, 210, 96]], t),
            Colormap::Forest => ramp(&[[6, 24, 14], [34, 120, 56], [198, 236, 156]], t),
            Colormap::Violet => ramp(&[[16, 6, 38], [112, 48, 160], [236, 190, 244]], t),
            Colormap::Twilight => ramp(&[[24, 22, 68], [188, 80, 120], [250, 230, 180]], t),
            Colormap::Greys => ramp(&[[0, 0, 0], [255, 255, 255]], t),
            Colormap::GreysReversed => ramp(&[[255, 255, 255], [0, 0, 0]], t),
        }
    }
}

// Piecewise-linear interpolation between evenly spaced colour stops.
fn ramp(stops: &[[u8; 3]], t: f64) -> Rgb<u8> {
    let segments = stops.len() - 1;
    let scaled = t * segments as f64;
    let low = (scaled.floor() as usize).min(segments - 1);
    let frac = scaled - low as f64;
    let a = stops[low];
    let b = stops[low + 1];
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * frac).round() as u8;
    Rgb([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])])
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let c = v * s;
    let h_prime = (h / 60.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let (r1, g1, b1) = if (0.0..1.0).contains(&h_prime) {
        (c, x, 0.0)
    } else if (1.0..2.0).contains(&h_prime) {
        (x, c, 0.0)
    } else if (2.0..3.0).contains(&h_prime) {
        (0.0, c, x)
    } else if (3.0..4.0).contains(&h_prime) {
        (0.0, x, c)
    } else if (4.0..5.0).contains(&h_prime) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let m = v - c;
    let (r, g, b) = (r1 + m, g1 + m, b1 + m);
    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

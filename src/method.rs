use rand::Rng;

use crate::figure::Figure;
use crate::{hikosaka, julia, mandelbrot, newton};

/// The four generator methods a batch draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Mandelbrot,
    Julia,
    Newton,
    Hikosaka,
}

impl Method {
    /// Select a method for a drawn index. The checks form a priority
    /// chain, not independent tests: 12 is claimed by Newton before
    /// the multiple-of-3 check runs, and 6 by Julia before the even
    /// check runs. Reordering changes the method of every multiple
    /// of 6 or 12.
    pub fn from_index(index: u32) -> Method {
        if index % 4 == 0 {
            Method::Newton
        } else if index % 3 == 0 {
            Method::Julia
        } else if index % 2 == 0 {
            Method::Mandelbrot
        } else {
            Method::Hikosaka
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Mandelbrot => "Mandelbrot",
            Method::Julia => "Julia",
            Method::Newton => "Newton",
            Method::Hikosaka => "Hikosaka",
        }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> Figure {
        match self {
            Method::Mandelbrot => mandelbrot::generate(rng),
            Method::Julia => julia::generate(rng),
            Method::Newton => newton::generate(rng),
            Method::Hikosaka => hikosaka::generate(rng),
        }
    }
}

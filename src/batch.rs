// The batch loop: shuffle a 1..=N index sequence, pop one index per
// figure to pick the generator method, render, and save into the
// target directory. Saving over an existing file asks the injected
// confirmation capability so the loop itself stays testable.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::method::Method;

/// Asked before replacing a file that already exists in the target
/// directory.
pub trait Confirm {
    fn ask(&mut self, filename: &str, date_str: &str) -> bool;
}

/// Blocking terminal prompt; a case-insensitive "y" proceeds.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn ask(&mut self, _filename: &str, date_str: &str) -> bool {
        print!("Fractals already saved in {} folder. Replace? y/N ", date_str);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        answer.trim().eq_ignore_ascii_case("y")
    }
}

// Familiar filenames are lettered, so a familiar batch can hold at
// most one figure per letter.
const MAX_FAMILIAR: usize = 26;

/// Filename for the figure at `position` within a batch. Familiar
/// batches use letters (`generate_fractals` caps them at 26), novel
/// batches numbers.
pub fn filename(position: usize, novel_fractals: bool) -> String {
    if novel_fractals {
        format!("_fractal_{}.png", position + 1)
    } else {
        debug_assert!(position < MAX_FAMILIAR);
        format!("_fractal_{}.png", (b'A' + position as u8) as char)
    }
}

pub fn generate_fractals<R: Rng>(
    num_fractals: usize,
    target_path: &Path,
    date_str: &str,
    novel_fractals: bool,
    confirm: &mut dyn Confirm,
    rng: &mut R,
) -> Result<(), Box<dyn Error>> {
    if !novel_fractals && num_fractals > MAX_FAMILIAR {
        return Err(format!(
            "At most {} familiar fractals fit the lettered filenames.",
            MAX_FAMILIAR
        )
        .into());
    }

    let mut list_indices: Vec<u32> = (1..=num_fractals as u32).collect();
    list_indices.shuffle(rng);
    println!("Method Order: {:?}", list_indices);

    for f_index in 0..num_fractals {
        let random_generator = list_indices.remove(0);
        let method = Method::from_index(random_generator);
        println!("Fractal {} - {} Method", f_index + 1, method.name());
        let figure = method.generate(rng);

        let name = filename(f_index, novel_fractals);
        let replace = if !target_path.exists() {
            // A brand new directory cannot hold collisions.
            fs::create_dir_all(target_path)?;
            true
        } else if target_path.join(&name).exists() {
            confirm.ask(&name, date_str)
        } else {
            true
        };

        if replace {
            figure.save(&target_path.join(&name))?;
        } else {
            println!("Fractals in {} folder not overriden.", target_path.display());
        }
    }
    Ok(())
}

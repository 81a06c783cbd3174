mod batch;
mod colormap;
mod figure;
mod hikosaka;
mod julia;
mod mandelbrot;
mod method;
mod newton;

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use clap::Parser;

use batch::StdinConfirm;

/// Generate a daily batch of random fractal images.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Date (YYYYmmdd) folder to save fractal figures
    #[arg(short = 'd', long)]
    date: Option<String>,

    /// Number of fractals you wish to generate
    #[arg(short = 'n', long = "num_fractals")]
    num_fractals: Option<usize>,

    /// Generate this many novel fractals
    #[arg(long = "novel_fractals", alias = "novel_n")]
    novel_fractals: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let num_fractals = match args.num_fractals {
        Some(n) => n,
        None => prompt_for_count()?,
    };

    let fractal_root = Path::new("_fractals");
    if !fractal_root.exists() {
        fs::create_dir(fractal_root)?;
    }

    let date = match args.date {
        Some(date) => {
            println!("Arg specified date: {}", date);
            date
        }
        None => Local::now().format("%Y%m%d").to_string(),
    };
    let target_path = fractal_root.join(&date);

    let mut rng = rand::thread_rng();
    let mut confirm = StdinConfirm;

    batch::generate_fractals(num_fractals, &target_path, &date, false, &mut confirm, &mut rng)?;

    if let Some(novel_fractals) = args.novel_fractals {
        if novel_fractals > 0 {
            let novel_path = target_path.join("novel");
            println!("Generating {} novel fractals.", novel_fractals);
            println!("  Path: {}", novel_path.display());
            batch::generate_fractals(
                novel_fractals,
                &novel_path,
                &date,
                true,
                &mut confirm,
                &mut rng,
            )?;
        }
    }
    Ok(())
}

fn prompt_for_count() -> Result<usize, Box<dyn Error>> {
    print!("How many fractals? ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    parse_count(&line)
}

fn parse_count(input: &str) -> Result<usize, Box<dyn Error>> {
    input
        .trim()
        .parse()
        .map_err(|_| "Number of fractals needs to be an integer.".into())
}

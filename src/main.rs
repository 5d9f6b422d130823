#[macro_use] extern crate log;
extern crate simplelog;
extern crate rand;
extern crate rand_chacha;
extern crate serde_json;
extern crate percolation;

use rand::{RngCore, SeedableRng};
use rand::rngs::OsRng;
use rand_chacha::ChaCha8Rng;
use simplelog::*;
use std::env;
use std::io::stderr;
use std::process;

use percolation::{Error, Settings};

const USAGE: &str = "usage: percolation <filename> [T]";

fn parse_trials(arg: Option<&String>) -> Option<usize> {
    match arg {
        None => Some(1),
        Some(t) => match t.parse::<usize>() {
            Ok(t) if t > 0 => Some(t),
            _ => None,
        },
    }
}

fn run(filename: &str, trials: usize, settings: &Settings) -> Result<percolation::Summary, Error> {
    let input = percolation::read_input(settings.input_path(filename))?;
    let seed = settings.seed.unwrap_or_else(|| OsRng.next_u64());
    info!("grid {}x{}, {} prescribed opens, {} trials, seed {}",
        input.n, input.n, input.opens.len(), trials, seed);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let stats = percolation::run_trials(input.n, trials, &input.opens, &mut rng)?;
    let summary = stats.summary();
    info!("{}", serde_json::to_string(&summary)?);
    Ok(summary)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }
    let trials = match parse_trials(args.get(2)) {
        Some(t) => t,
        None => {
            eprintln!("T must be a positive integer, got '{}'\n{}", args[2], USAGE);
            process::exit(2);
        },
    };

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        },
    };
    let _ = CombinedLogger::init(
        vec![
            WriteLogger::new(
                settings.log_level,
                Config {time: None, level: None, target: None, location: None, time_format: None},
                stderr()),
        ]
    );

    match run(&args[1], trials, &settings) {
        Ok(summary) => println!("{}", summary),
        Err(Error::MissingInput { .. }) => {
            println!("The file '{}' could not be found.", args[1]);
            process::exit(1);
        },
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        },
    }
}

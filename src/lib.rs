#[macro_use] extern crate log;
extern crate rand;
extern crate serde;
extern crate serde_json;

mod data;
mod disjoint_set;
mod error;
mod input;
mod percolation;
mod settings;
mod stats;
mod trial;

pub use data::{Direction, Point};
pub use disjoint_set::{DisjointSet, Site};
pub use error::Error;
pub use input::{Input, parse_input, read_input};
pub use percolation::Grid;
pub use settings::{Settings, SETTINGS_ENV};
pub use stats::{PercolationStats, Summary};
pub use trial::{Phase, Trial, run_trials};

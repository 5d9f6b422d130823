use std::fs;
use std::path::Path;

use crate::data::Point;
use crate::error::Error;

/// A parsed open-sequence file: grid size and the sites to pre-open, 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub n: usize,
    pub opens: Vec<Point>,
}

fn parse_nums(text: &str) -> Result<Vec<usize>, Error> {
    text.split_whitespace()
        .map(|tok| tok.parse::<usize>()
            .map_err(|_| Error::Parse(format!("'{}' is not a non-negative integer", tok))))
        .collect()
}

/// Parses `N` followed by whitespace-separated 1-based `row col` pairs.
pub fn parse_input(text: &str) -> Result<Input, Error> {
    let nums = parse_nums(text)?;
    let (&n, rest) = match nums.split_first() {
        Some(split) => split,
        None => return Err(Error::Parse("empty input, expected grid size".to_string())),
    };
    if n == 0 {
        return Err(Error::InvalidGridSize(n));
    }
    if rest.len() % 2 != 0 {
        return Err(Error::Parse(format!("dangling value {} without a column", rest[rest.len() - 1])));
    }

    let mut opens = Vec::with_capacity(rest.len() / 2);
    for pair in rest.chunks(2) {
        let (row, col) = (pair[0], pair[1]);
        if row < 1 || row > n || col < 1 || col > n {
            return Err(Error::OutOfRange { row, col, n });
        }
        opens.push(Point::new(row - 1, col - 1));
    }
    Ok(Input { n, opens })
}

pub fn read_input<P: AsRef<Path>>(path: P) -> Result<Input, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|_| Error::MissingInput { path: path.to_path_buf() })?;
    parse_input(&text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Point {
        Point { row, col }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    pub fn adjacent_directions() -> Vec<Direction> {
        vec![Direction::North, Direction::East,
        Direction::South, Direction::West]
    }

    // None when the step would leave an n x n grid
    pub fn step(&self, pos: Point, n: usize) -> Option<Point> {
        match self {
            Direction::North if pos.row > 0 => Some(Point::new(pos.row - 1, pos.col)),
            Direction::South if pos.row + 1 < n => Some(Point::new(pos.row + 1, pos.col)),
            Direction::West if pos.col > 0 => Some(Point::new(pos.row, pos.col - 1)),
            Direction::East if pos.col + 1 < n => Some(Point::new(pos.row, pos.col + 1)),
            _ => None,
        }
    }
}

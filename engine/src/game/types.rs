#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Toroidal playfield. Head displacement is always one cell, so the wrap
/// helpers only need to handle stepping off either edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max { 0 } else { value + 1 }
    }

    pub fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 { max - 1 } else { value - 1 }
    }

    /// The adjacent cell in the given direction, wrapped around the edges.
    pub fn neighbor(&self, point: Point, direction: Direction) -> Point {
        match direction {
            Direction::Up => Point::new(point.x, Self::wrapping_dec(point.y, self.height)),
            Direction::Down => Point::new(point.x, Self::wrapping_inc(point.y, self.height)),
            Direction::Left => Point::new(Self::wrapping_dec(point.x, self.width), point.y),
            Direction::Right => Point::new(Self::wrapping_inc(point.x, self.width), point.y),
        }
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self::new(20, 20)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockPhase {
    Stopped,
    Running,
    Paused,
}

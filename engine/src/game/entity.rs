use std::collections::{HashSet, VecDeque};

use super::types::{Direction, FieldSize, Point};

/// Snake body, head-first. `body_set` shadows `body` for O(1) occupancy
/// checks; the two are kept in sync by `push_head`/`pop_tail`.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// A snake of `length` segments with its head at `head`, trailing away
    /// opposite to `direction`.
    pub fn new(head: Point, length: usize, direction: Direction, field: &FieldSize) -> Self {
        let mut body = VecDeque::with_capacity(length);
        let mut body_set = HashSet::with_capacity(length);
        let behind = direction.opposite();

        let mut segment = head;
        for _ in 0..length {
            body.push_back(segment);
            body_set.insert(segment);
            segment = field.neighbor(segment, behind);
        }

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    pub fn pop_tail(&mut self) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_trails_behind_head() {
        let field = FieldSize::default();
        let snake = Snake::new(Point::new(10, 10), 3, Direction::Right, &field);
        let segments: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)]
        );
        assert_eq!(snake.head(), Point::new(10, 10));
    }

    #[test]
    fn test_new_snake_wraps_its_tail() {
        let field = FieldSize::default();
        let snake = Snake::new(Point::new(1, 5), 3, Direction::Right, &field);
        let segments: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Point::new(1, 5), Point::new(0, 5), Point::new(19, 5)]
        );
    }

    #[test]
    fn test_occupies_tracks_push_and_pop() {
        let field = FieldSize::default();
        let mut snake = Snake::new(Point::new(10, 10), 3, Direction::Right, &field);

        snake.push_head(Point::new(11, 10));
        assert!(snake.occupies(&Point::new(11, 10)));
        assert!(snake.occupies(&Point::new(8, 10)));

        snake.pop_tail();
        assert!(!snake.occupies(&Point::new(8, 10)));
        assert_eq!(snake.len(), 3);
    }
}

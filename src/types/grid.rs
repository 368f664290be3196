use super::Position;

/// A dense `width` x `height` grid stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// `None` when `pos` lies outside the grid.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Returns `false` when `pos` lies outside the grid.
    pub fn set(&mut self, pos: Position, value: T) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        (0..self.cells.len()).map(move |i| Position::new((i % width) as i32, (i / width) as i32))
    }

    /// Positions of the cells satisfying `pred`, in row-major order.
    pub fn positions_where<'a, F: Fn(&T) -> bool + 'a>(&'a self, pred: F) -> impl Iterator<Item = Position> + 'a {
        self.positions().filter(move |&p| self.get(p).map(&pred).unwrap_or(false))
    }

    pub fn count<F: Fn(&T) -> bool>(&self, pred: F) -> usize {
        self.cells.iter().filter(|v| pred(v)).count()
    }
}

impl Grid<bool> {
    /// Out-of-bounds cells read as `false`.
    #[inline]
    pub fn is_set(&self, pos: Position) -> bool {
        self.get(pos).copied().unwrap_or(false)
    }

    pub fn count_set(&self) -> usize {
        self.count(|&v| v)
    }

    pub fn set_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions_where(|&v| v)
    }
}

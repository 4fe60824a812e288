//! Board vertex representation.

use std::fmt;

/// A vertex on the board, identified by its index in `[0, size)`.
///
/// Rectangular boards map `(x, y)` coordinates in row-major order, so on a
/// 9x9 Go board vertex 10 is `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Vertex(u32);

impl Vertex {
    /// Creates a vertex from its flat index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Vertex(index)
    }

    /// Creates a vertex from column and row on a board `width` vertices wide.
    ///
    /// Returns None if `x` is off the board or the index overflows.
    #[inline]
    pub const fn from_xy(x: u32, y: u32, width: u32) -> Option<Self> {
        if x >= width {
            return None;
        }
        match y.checked_mul(width) {
            Some(row) => match row.checked_add(x) {
                Some(index) => Some(Vertex(index)),
                None => None,
            },
            None => None,
        }
    }

    /// Returns the flat index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the column on a board `width` vertices wide.
    ///
    /// # Panics
    ///
    /// Panics if `width` is 0.
    #[inline]
    pub const fn x(self, width: u32) -> u32 {
        self.0 % width
    }

    /// Returns the row on a board `width` vertices wide.
    ///
    /// # Panics
    ///
    /// Panics if `width` is 0.
    #[inline]
    pub const fn y(self, width: u32) -> u32 {
        self.0 / width
    }
}

impl From<u32> for Vertex {
    fn from(index: u32) -> Self {
        Vertex(index)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xy_row_major() {
        let v = Vertex::from_xy(1, 1, 9).unwrap();
        assert_eq!(v.index(), 10);
        assert_eq!(v.x(9), 1);
        assert_eq!(v.y(9), 1);
    }

    #[test]
    fn from_xy_off_board() {
        assert_eq!(Vertex::from_xy(9, 0, 9), None);
        assert_eq!(Vertex::from_xy(0, u32::MAX, 2), None);
    }

    #[test]
    fn corners_of_go_board() {
        assert_eq!(Vertex::from_xy(0, 0, 19), Some(Vertex::new(0)));
        assert_eq!(Vertex::from_xy(18, 18, 19), Some(Vertex::new(360)));
    }

    #[test]
    #[should_panic]
    fn x_panics_on_zero_width() {
        Vertex::new(3).x(std::hint::black_box(0));
    }

    #[test]
    #[should_panic]
    fn y_panics_on_zero_width() {
        Vertex::new(3).y(std::hint::black_box(0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Vertex::new(42)), "v42");
    }
}

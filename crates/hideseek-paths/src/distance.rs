use std::fmt;

use hideseek_core::Cell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Result of a distance query: a number of moves, or no path at all.
///
/// `Unreachable` orders after every `Steps`, so it behaves as an infinite
/// distance in comparisons and `min`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    Steps(u32),
    Unreachable,
}

impl Distance {
    /// Number of moves, or `None` when unreachable.
    #[inline]
    pub fn steps(self) -> Option<u32> {
        match self {
            Distance::Steps(n) => Some(n),
            Distance::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Steps(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Steps(n) => write!(f, "{n}"),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_sorts_last() {
        assert!(Distance::Steps(u32::MAX) < Distance::Unreachable);
        assert!(Distance::Steps(3) < Distance::Steps(4));
        let d = [Distance::Unreachable, Distance::Steps(9), Distance::Steps(2)];
        assert_eq!(d.iter().min(), Some(&Distance::Steps(2)));
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(1, 6);
        let b = Cell::new(4, 2);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }
}

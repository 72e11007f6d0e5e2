//! Moves recorded in the DP table.

/// The predecessor move that produced the score of a DP cell.
#[derive(Clone, Copy, Eq, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Diagonal (Up and Left) for a match or substitution.
    Diagonal,
    /// Up for a residue of the first sequence against a gap.
    Up,
    /// Left for a residue of the second sequence against a gap.
    Left,
    /// No predecessor: the origin of a global table, or a cell floored at zero
    /// in a local table.
    Stop,
}

impl Direction {
    /// Picks the best of the three moves into a cell.
    ///
    /// Ties go to the earliest of diagonal, up, left.
    #[must_use]
    pub const fn best(diag: i32, up: i32, left: i32) -> (i32, Self) {
        if diag >= up && diag >= left {
            (diag, Self::Diagonal)
        } else if up >= left {
            (up, Self::Up)
        } else {
            (left, Self::Left)
        }
    }

    /// Like `best`, but with a zero floor that is considered first.
    ///
    /// When no move scores above zero, the cell is zero and traceback stops
    /// there.
    #[must_use]
    pub const fn best_local(diag: i32, up: i32, left: i32) -> (i32, Self) {
        if diag <= 0 && up <= 0 && left <= 0 {
            (0, Self::Stop)
        } else {
            Self::best(diag, up, left)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn ties_prefer_diagonal_then_up() {
        assert_eq!(Direction::best(1, 1, 1), (1, Direction::Diagonal));
        assert_eq!(Direction::best(0, 1, 1), (1, Direction::Up));
        assert_eq!(Direction::best(0, 1, 2), (2, Direction::Left));
    }

    #[test]
    fn zero_floor_wins_ties() {
        assert_eq!(Direction::best_local(0, -1, -1), (0, Direction::Stop));
        assert_eq!(Direction::best_local(-3, -1, -2), (0, Direction::Stop));
        assert_eq!(Direction::best_local(1, 1, 0), (1, Direction::Diagonal));
        assert_eq!(Direction::best_local(-1, 2, 2), (2, Direction::Up));
    }
}

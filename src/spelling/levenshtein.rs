//! Levenshtein distance calculation for spelling correction.

use std::cmp::min;
use std::fmt;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    DistanceMatrix::compute(s1, s2).distance()
}

/// The full dynamic-programming table behind a Levenshtein distance.
///
/// Row `i` corresponds to the first `i` characters of the vertical string and
/// column `j` to the first `j` characters of the horizontal one, so the cell
/// at `(i, j)` holds the distance between those two prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    vertical: Vec<char>,
    horizontal: Vec<char>,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Fill the table for `vertical` (down the left) against `horizontal` (across the top).
    #[allow(clippy::needless_range_loop)]
    pub fn compute(vertical: &str, horizontal: &str) -> Self {
        let vertical: Vec<char> = vertical.chars().collect();
        let horizontal: Vec<char> = horizontal.chars().collect();
        let rows = vertical.len() + 1;
        let cols = horizontal.len() + 1;

        let mut cells = vec![0; rows * cols];

        // Initialize first row and column
        for j in 0..cols {
            cells[j] = j;
        }
        for i in 0..rows {
            cells[i * cols] = i;
        }

        for i in 1..rows {
            for j in 1..cols {
                let diagonal = cells[(i - 1) * cols + j - 1];
                cells[i * cols + j] = if vertical[i - 1] == horizontal[j - 1] {
                    diagonal
                } else {
                    1 + min(
                        diagonal, // substitution
                        min(
                            cells[(i - 1) * cols + j], // deletion
                            cells[i * cols + j - 1],   // insertion
                        ),
                    )
                };
            }
        }

        DistanceMatrix {
            vertical,
            horizontal,
            cells,
        }
    }

    /// Number of rows, `len(vertical) + 1`.
    pub fn rows(&self) -> usize {
        self.vertical.len() + 1
    }

    /// Number of columns, `len(horizontal) + 1`.
    pub fn cols(&self) -> usize {
        self.horizontal.len() + 1
    }

    /// Value of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the table.
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows() && col < self.cols());
        self.cells[row * self.cols() + col]
    }

    /// The edit distance, i.e. the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    fn write_rule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(4 * (self.cols() + 1)))
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   |   |")?;
        for ch in &self.horizontal {
            write!(f, "{ch:>3}|")?;
        }
        self.write_rule(f)?;

        for i in 0..self.rows() {
            let label = if i == 0 { ' ' } else { self.vertical[i - 1] };
            write!(f, "{label:>3}|")?;
            for j in 0..self.cols() {
                write!(f, "{:>3}|", self.get(i, j))?;
            }
            self.write_rule(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("", "kitten"), 6);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition
    }

    #[test]
    fn test_symmetry_and_identity() {
        let words = ["", "a", "cat", "cart", "kitten", "sitting", "flaw", "lawn"];
        for a in words {
            assert_eq!(levenshtein_distance(a, a), 0);
            for b in words {
                assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let words = ["", "cut", "cat", "cot", "bat", "cart", "chart", "tart"];
        for a in words {
            for b in words {
                for c in words {
                    assert!(
                        levenshtein_distance(a, c)
                            <= levenshtein_distance(a, b) + levenshtein_distance(b, c),
                        "triangle inequality violated for {a:?}, {b:?}, {c:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_matrix_base_row_and_column() {
        let matrix = DistanceMatrix::compute("flaw", "lawn");
        assert_eq!(matrix.rows(), 5);
        assert_eq!(matrix.cols(), 5);
        for i in 0..matrix.rows() {
            assert_eq!(matrix.get(i, 0), i);
        }
        for j in 0..matrix.cols() {
            assert_eq!(matrix.get(0, j), j);
        }
        assert_eq!(matrix.distance(), 2);
    }

    #[test]
    fn test_matrix_recurrence_holds() {
        let a: Vec<char> = "sunday".chars().collect();
        let b: Vec<char> = "saturday".chars().collect();
        let matrix = DistanceMatrix::compute("sunday", "saturday");

        for i in 1..matrix.rows() {
            for j in 1..matrix.cols() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let expected = (matrix.get(i - 1, j - 1) + cost)
                    .min(matrix.get(i - 1, j) + 1)
                    .min(matrix.get(i, j - 1) + 1);
                assert_eq!(matrix.get(i, j), expected);
            }
        }
        assert_eq!(matrix.distance(), 3);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = DistanceMatrix::compute("", "");
        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 1);
        assert_eq!(matrix.distance(), 0);
    }

    #[test]
    fn test_render_table() {
        let rendered = DistanceMatrix::compute("ab", "a").to_string();
        let rule = "-".repeat(12);
        let expected = format!(
            "   |   |  a|\n{rule}\n   |  0|  1|\n{rule}\n  a|  1|  0|\n{rule}\n  b|  2|  1|\n{rule}\n"
        );
        assert_eq!(rendered, expected);
    }
}

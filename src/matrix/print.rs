//! Text rendering for row-major matrices.

use std::io::{self, Write};

/// Write a matrix to any sink, one row per line.
///
/// Every element is followed by a single space (including the last one
/// in a row), each row ends with a newline, and one extra blank line
/// follows the final row. Values render via `Display`, so `1.0` prints
/// as `1`.
///
/// Accepts any rectangular shape; the matrix is not mutated.
///
/// # Panics
///
/// Panics if the slice size doesn't match rows × cols.
///
/// # Example
///
/// ```
/// use transpose::write_matrix;
///
/// let m = vec![1.0, 2.0, 3.0, 4.0];
/// let mut out = Vec::new();
///
/// write_matrix(&mut out, &m, 2, 2).unwrap();
///
/// assert_eq!(out, b"1 2 \n3 4 \n\n");
/// ```
pub fn write_matrix<W: Write>(out: &mut W, m: &[f64], rows: usize, cols: usize) -> io::Result<()> {
    assert_eq!(
        m.len(),
        rows * cols,
        "M: expected {}x{}={} elements",
        rows,
        cols,
        rows * cols
    );

    for i in 0..rows {
        for j in 0..cols {
            write!(out, "{} ", m[i * cols + j])?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Print a matrix to stdout, one row per line.
///
/// Same format as [`write_matrix`]. A write failure on stdout aborts
/// the process, like the `println!` family would.
pub fn print_matrix(m: &[f64], rows: usize, cols: usize) {
    let stdout = io::stdout();
    write_matrix(&mut stdout.lock(), m, rows, cols).expect("failed writing to stdout");
}

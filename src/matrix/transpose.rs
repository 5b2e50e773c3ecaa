/// Transpose a square matrix in place: m = m^T
///
/// Walks the upper triangle (diagonal included) and swaps each element
/// with its mirror below the diagonal. Starting the inner loop at `row`
/// means no pair is swapped twice, so the lower triangle is never
/// revisited. Exactly n(n+1)/2 swaps, no extra allocation.
///
/// `n = 0` and `n = 1` matrices are left untouched.
///
/// # Arguments
///
/// * `m` - Square matrix (n × n), row-major, mutated in place
/// * `n` - Number of rows (and columns)
///
/// # Panics
///
/// Panics if the slice size doesn't match n.
///
/// # Example
///
/// ```
/// use transpose::transpose_in_place;
///
/// let mut m = vec![1.0, 2.0, 3.0,
///                  4.0, 5.0, 6.0,
///                  7.0, 8.0, 9.0];
///
/// transpose_in_place(&mut m, 3);
///
/// assert_eq!(m, vec![1.0, 4.0, 7.0,
///                    2.0, 5.0, 8.0,
///                    3.0, 6.0, 9.0]);
/// ```
pub fn transpose_in_place(m: &mut [f64], n: usize) {
    assert_eq!(m.len(), n * n, "M: expected {}x{}={} elements", n, n, n * n);

    for row in 0..n {
        for col in row..n {
            m.swap(row * n + col, col * n + row);
        }
    }
}

/// Transpose a matrix out of place: dst = src^T
///
/// Works for any rectangular shape: a rows × cols source becomes a
/// cols × rows destination. The in-place version above only handles
/// square matrices; this one is the general fallback and doubles as an
/// independent oracle in the tests.
///
/// # Arguments
///
/// * `src` - Source matrix (rows × cols), row-major
/// * `dst` - Destination matrix (cols × rows), row-major
/// * `rows` - Number of rows in src
/// * `cols` - Number of columns in src
///
/// # Panics
///
/// Panics if either slice size doesn't match rows × cols.
///
/// # Example
///
/// ```
/// use transpose::transpose;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3 matrix
///                4.0, 5.0, 6.0];
/// let mut dst = vec![0.0; 6];      // will be 3×2
///
/// transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1.0, 4.0,   // 3×2 matrix
///                      2.0, 5.0,
///                      3.0, 6.0]);
/// ```
pub fn transpose(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    assert_eq!(
        src.len(),
        rows * cols,
        "src: expected {}x{}={} elements",
        rows,
        cols,
        rows * cols
    );
    assert_eq!(
        dst.len(),
        rows * cols,
        "dst: expected {}x{}={} elements",
        cols,
        rows,
        rows * cols
    );

    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}

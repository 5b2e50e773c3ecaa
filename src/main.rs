//! Demo: transpose a 3×3 matrix in place and show it before and after.

use transpose::{print_matrix, transpose_in_place};

fn main() {
    let mut m = vec![
        1.0, 2.0, 3.0, //
        4.0, 5.0, 6.0, //
        7.0, 8.0, 9.0,
    ];

    print_matrix(&m, 3, 3);
    transpose_in_place(&mut m, 3);
    print_matrix(&m, 3, 3);
}

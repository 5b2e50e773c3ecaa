//! Matrix storage conventions and the operations built on them.
//!
//! Everything takes flat row-major slices with explicit dimensions:
//! element (i, j) of a rows × cols matrix lives at `i * cols + j`.

pub mod print;
pub mod transpose;

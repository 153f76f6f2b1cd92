//! The bwt_algorithms module forms the sorting subsystem of bwzip.
//!
//! The Burrows-Wheeler Transform orders every rotation (circular suffix) of a block. Done in that
//! order, the last column of the sorted rotations tends to hold long runs of the same byte, which
//! the later stages compress well.
//!
//! circular_suffix_array sorts the rotations with a three-way radix quicksort. bwt_sort turns
//! the sorted rotations into the transform, and reverses it.
//!
pub mod bwt_sort;
pub mod circular_suffix_array;

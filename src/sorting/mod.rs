//! Sorting and searching over slices.
//!
//! ├ [`quicksort::quicksort`]        : three-way partition quicksort
//! ├ [`search::binary_search`]       : index of a value in a sorted slice
//! └ [`search::find_top_two_max`]    : largest and second-largest values

pub mod quicksort;
pub mod search;

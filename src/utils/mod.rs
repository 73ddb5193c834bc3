mod maths_utils;
mod perf;

pub(crate) use maths_utils::{min_max, padded_range};

pub use identical::{Equal, Identical};
pub use rle_vec::{RleVec, RleVecBuilder};

mod identical;
#[allow(clippy::module_inception)]
mod rle_vec;

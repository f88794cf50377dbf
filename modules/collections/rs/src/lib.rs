pub mod rle_vec;

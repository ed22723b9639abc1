pub mod poly;

mod ops;

pub mod data;
pub mod income;

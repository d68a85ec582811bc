pub mod preprocess;
pub mod quiz;
pub mod sample;

pub mod export;
pub mod quiz;

pub mod export;
pub mod quiz;
pub mod tags;
pub mod words;

pub mod sorting;
pub mod stats;

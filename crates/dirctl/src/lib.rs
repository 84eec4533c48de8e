pub mod clean;
pub mod duplicates;
pub mod legacy;

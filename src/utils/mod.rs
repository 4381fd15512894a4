pub mod float;
pub mod unique;

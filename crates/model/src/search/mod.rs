pub mod definition;
pub mod field;

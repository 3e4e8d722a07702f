pub mod field_type;
pub mod temporal;
pub mod value;

pub mod constants;
pub mod macros;
pub mod types;

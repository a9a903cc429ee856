pub mod memory;
pub mod project;

pub mod option_fields;
pub mod project;

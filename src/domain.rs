pub mod entities;
pub mod pagination;
pub mod query;
pub mod use_cases;

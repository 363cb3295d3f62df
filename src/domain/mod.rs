pub mod error;
pub mod expansions;
pub mod models;

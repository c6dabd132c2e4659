//! Command handler implementations

pub mod groups;
pub mod output;
pub mod query;

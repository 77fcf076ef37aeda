pub mod cli;
pub mod display;
pub mod error;
pub mod github;
pub mod search;
pub mod types;

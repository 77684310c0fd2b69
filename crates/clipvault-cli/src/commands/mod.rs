pub mod add;
pub mod common;
pub mod completions;
pub mod config;
pub mod copy;
pub mod delete;
pub mod export;
pub mod list;
pub mod shell;
pub mod tags;

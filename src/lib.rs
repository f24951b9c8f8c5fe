pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod locator;
pub mod ui;
pub mod writer;

pub use error::{BumpError, Error, Result};

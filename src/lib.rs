pub mod aggregate;
pub mod config;
pub mod error;
pub mod http;
pub mod hue;
mod id;
pub mod pipeline;
pub mod purpleair;
pub mod quality;

pub use error::{Error, Result};

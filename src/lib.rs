pub mod config;
pub mod error;
pub mod flows;
pub mod kiosk;
pub mod llm;
pub mod operation;
pub mod server;

pub use error::{Error, Result};

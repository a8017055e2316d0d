pub mod cli;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;

pub use client::ClickUpClient;
pub use config::Settings;
pub use dispatch::{Dispatcher, Outcome};
pub use error::{AgentError, Result};

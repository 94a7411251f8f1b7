pub mod aggregate;
pub mod api;
pub mod api_config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod normalize;
pub mod overview;
pub mod settings;
pub mod state;

pub use error::{MonitorError, Result};

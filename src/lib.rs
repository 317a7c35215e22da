pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod variants;

pub use config::CliConfig;
pub use core::client::Client;
pub use domain::ports::{Factory, ProductA, ProductB};
pub use utils::error::{DemoError, Result};
pub use variants::{Factory1, Factory2};

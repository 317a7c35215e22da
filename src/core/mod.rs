pub mod client;

pub use crate::domain::ports::{Factory, ProductA, ProductB};
pub use crate::utils::error::Result;

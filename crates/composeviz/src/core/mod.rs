//! Core abstractions shared by the loader, graph builder and renderers

mod database;
mod error;
pub mod logging;
mod renderer;
mod types;

pub use database::*;
pub use error::*;
pub use logging::*;
pub use renderer::*;
pub use types::*;

//! Service graph construction and grouping

mod database;
mod grouping;

pub use database::*;
pub use grouping::*;

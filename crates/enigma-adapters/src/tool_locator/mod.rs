//! Tool locator adapters.

mod fixed;
mod path;

pub use fixed::StaticToolLocator;
pub use path::PathToolLocator;

pub mod host;
pub use host::*;

pub mod domain;
pub use domain::*;

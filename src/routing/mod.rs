//! Route table, URL formatting and share-link construction.

mod environment;
mod href;
mod routes;
mod share;

pub use environment::*;
pub use href::*;
pub use routes::*;
pub use share::*;

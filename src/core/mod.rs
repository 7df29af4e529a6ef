pub mod error;

pub use error::{RouteError, RouteResult};

pub mod handlers;
pub mod models;
pub mod openapi;

pub use handlers::{SharedService, app};

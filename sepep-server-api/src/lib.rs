mod app;
pub mod http;
mod json;

pub use app::ServiceError;

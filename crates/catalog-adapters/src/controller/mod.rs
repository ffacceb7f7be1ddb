//! Driving adapters: transport-agnostic request handling.
//!
//! The controller turns use-case outcomes into `{status, body}` pairs any
//! transport can render. The router maps `METHOD /path` onto controller
//! operations so a transport only has to hand over raw requests.

mod product;
mod response;
mod route;

pub use product::{ProductController, ProductInput};
pub use response::{ControllerResponse, ResponseBody};
pub use route::{Route, RouteError, Router};

// Transports name statuses and methods with the same vocabulary.
pub use http::{Method, StatusCode};

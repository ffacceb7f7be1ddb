//! Method + path routing onto the product controller.
//!
//! | Path             | GET      | POST   | PUT    | DELETE |
//! |------------------|----------|--------|--------|--------|
//! | `/products`      | list     | create | -      | -      |
//! | `/products/{id}` | get      | -      | update | remove |
//!
//! An optional `/api` prefix, a trailing slash, and a query string are
//! ignored.

use http::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use super::{ControllerResponse, ProductController, ProductInput};

/// A resolved controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Get(String),
    Update(String),
    Delete(String),
}

/// Why a request never reached the controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl RouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl Route {
    /// Resolve `method` and `path` to an operation.
    pub fn resolve(method: &Method, path: &str) -> Result<Self, RouteError> {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.first() == Some(&"api") {
            segments.remove(0);
        }

        match segments.as_slice() {
            ["products"] => match *method {
                Method::GET => Ok(Self::List),
                Method::POST => Ok(Self::Create),
                _ => Err(RouteError::MethodNotAllowed),
            },
            ["products", id] => {
                let id = (*id).to_owned();
                match *method {
                    Method::GET => Ok(Self::Get(id)),
                    Method::PUT => Ok(Self::Update(id)),
                    Method::DELETE => Ok(Self::Delete(id)),
                    _ => Err(RouteError::MethodNotAllowed),
                }
            }
            _ => Err(RouteError::NotFound),
        }
    }

    /// Whether this operation reads a request body.
    pub fn takes_body(&self) -> bool {
        matches!(self, Self::Create | Self::Update(_))
    }
}

/// Dispatches raw requests to a [`ProductController`].
#[derive(Clone)]
pub struct Router {
    controller: ProductController,
}

impl Router {
    pub fn new(controller: ProductController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &ProductController {
        &self.controller
    }

    /// Handle one request. Always produces a response; routing failures
    /// become 404/405/400 envelopes.
    #[instrument(skip(self, body))]
    pub fn handle(
        &self,
        method: &Method,
        path: &str,
        body: Option<&str>,
    ) -> ControllerResponse<Value> {
        match self.dispatch(method, path, body) {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "Request not routed");
                let message = match &e {
                    RouteError::InvalidBody(_) => "Invalid request body".to_owned(),
                    other => other.to_string(),
                };
                ControllerResponse::error(e.status(), message)
            }
        }
    }

    fn dispatch(
        &self,
        method: &Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<ControllerResponse<Value>, RouteError> {
        let route = Route::resolve(method, path)?;
        let input = if route.takes_body() {
            parse_body(body)?
        } else {
            ProductInput::default()
        };

        let response = match route {
            Route::List => self.controller.list().into_json(),
            Route::Create => self.controller.create(input).into_json(),
            Route::Get(id) => self.controller.get_by_id(&id).into_json(),
            Route::Update(id) => self.controller.update(&id, input).into_json(),
            Route::Delete(id) => self.controller.remove(&id).into_json(),
        };
        Ok(response)
    }
}

/// A missing or blank body reads as `{}`.
fn parse_body(body: Option<&str>) -> Result<ProductInput, RouteError> {
    match body.map(str::trim) {
        None | Some("") => Ok(ProductInput::default()),
        Some(raw) => {
            serde_json::from_str(raw).map_err(|e| RouteError::InvalidBody(e.to_string()))
        }
    }
}

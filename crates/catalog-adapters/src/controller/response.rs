//! Response envelope shared by every controller operation.

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// `{success, data?, message?, error?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What a controller operation hands back to its transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerResponse<T> {
    pub status: StatusCode,
    pub body: ResponseBody<T>,
}

impl<T> ControllerResponse<T> {
    /// 200 with `data`.
    pub fn ok(data: T) -> Self {
        Self::with_data(StatusCode::OK, data)
    }

    /// 201 with `data`.
    pub fn created(data: T) -> Self {
        Self::with_data(StatusCode::CREATED, data)
    }

    fn with_data(status: StatusCode, data: T) -> Self {
        Self {
            status,
            body: ResponseBody {
                success: true,
                data: Some(data),
                message: None,
                error: None,
            },
        }
    }

    /// Success without data, e.g. a deletion confirmation.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody {
                success: true,
                data: None,
                message: Some(message.into()),
                error: None,
            },
        }
    }

    /// `{success: false, error}`.
    pub fn error(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody {
                success: false,
                data: None,
                message: None,
                error: Some(error.into()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.body.success
    }

    /// Transform the payload, keeping status and envelope.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ControllerResponse<U> {
        ControllerResponse {
            status: self.status,
            body: ResponseBody {
                success: self.body.success,
                data: self.body.data.map(f),
                message: self.body.message,
                error: self.body.error,
            },
        }
    }
}

impl<T: Serialize> ControllerResponse<T> {
    /// Erase the payload type so heterogeneous responses can share a channel.
    pub fn into_json(self) -> ControllerResponse<serde_json::Value> {
        let status = self.status;
        let ResponseBody {
            success,
            data,
            message,
            error,
        } = self.body;

        let data = match data.map(serde_json::to_value).transpose() {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response payload");
                return ControllerResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error encoding response",
                );
            }
        };

        ControllerResponse {
            status,
            body: ResponseBody {
                success,
                data,
                message,
                error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_has_no_data() {
        let response: ControllerResponse<()> =
            ControllerResponse::error(StatusCode::NOT_FOUND, "Product not found");
        let json = serde_json::to_value(&response.body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": "Product not found"})
        );
        assert!(!response.is_success());
    }

    #[test]
    fn into_json_keeps_status_and_message() {
        let response: ControllerResponse<()> =
            ControllerResponse::message(StatusCode::OK, "Product deleted successfully");
        let json = response.into_json();

        assert_eq!(json.status, StatusCode::OK);
        assert_eq!(json.body.message.as_deref(), Some("Product deleted successfully"));
        assert!(json.body.data.is_none());
    }

    #[test]
    fn map_transforms_payload() {
        let response = ControllerResponse::created(vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body.data, Some(3));
    }
}

use serde::Serialize;
use utoipa::ToSchema;

/// `{ status: "success", message, data }` returned by create endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse<T> {
    #[schema(example = "success")]
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data,
        }
    }
}

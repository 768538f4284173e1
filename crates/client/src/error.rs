use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Backend rejected the request ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    AuthError(String),
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        ClientError::ValidationError(format!("invalid fields: {}", fields.join(", ")))
    }
}

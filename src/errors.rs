// ============================================================================
// ERRORES DEL FORMULARIO
// ============================================================================
// Validación local (nunca llega a la red) y errores remotos de la API.
// Ambos se muestran en el toast.
// ============================================================================

use thiserror::Error;

/// Mensaje cuando el servidor no da detalles
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please select at least one image")]
    MissingImages,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request build error: {0}")]
    Request(String),
}

impl ApiError {
    /// Texto para el usuario: mensaje del servidor o el genérico
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(e: wasm_bindgen::JsValue) -> Self {
        ApiError::Request(format!("{:?}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_to_user() {
        let err = ApiError::Http {
            status: 400,
            message: Some("Price must be positive".into()),
        };
        assert_eq!(err.user_message(), "Price must be positive");
    }

    #[test]
    fn other_failures_fall_back_to_generic_message() {
        let errors = [
            ApiError::Http { status: 500, message: None },
            ApiError::Network("offline".into()),
            ApiError::Parse("eof".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn validation_messages() {
        assert_eq!(ValidationError::MissingFields.to_string(), "Please fill in all fields");
        assert_eq!(
            ValidationError::MissingImages.to_string(),
            "Please select at least one image"
        );
    }
}

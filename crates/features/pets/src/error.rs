use std::borrow::Cow;

/// Errors of the pets slice.
#[pethub_derive::pethub_error]
pub enum PetsError {
    /// No pet with the requested id.
    #[error("Pet not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Repository contents violate an invariant (e.g. duplicate ids).
    #[error("Pet validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The storage behind a repository failed.
    #[error("Pet repository error{}: {source}", format_context(.context))]
    Repository {
        source: Box<dyn std::error::Error + Send + Sync>,
        context: Option<Cow<'static, str>>,
    },
    #[error("Internal pets error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
mod response {
    use super::PetsError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use pethub_kernel::server::ErrorBody;

    impl IntoResponse for PetsError {
        fn into_response(self) -> Response {
            match &self {
                PetsError::NotFound { .. } => {
                    ErrorBody::new("not_found", self.to_string()).into_response_with(StatusCode::NOT_FOUND)
                }
                PetsError::Validation { .. } => ErrorBody::new("validation", self.to_string())
                    .into_response_with(StatusCode::BAD_REQUEST),
                PetsError::Repository { .. } | PetsError::Internal { .. } => {
                    tracing::error!(error = %self, "Pets request failed");
                    ErrorBody::new("internal", "Internal server error")
                        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
                }
            }
        }
    }
}

//! Domain error to HTTP response mapping

use actix_web::HttpResponse;

use blog_core::errors::DomainError;
use blog_shared::types::response::{error_codes, ErrorResponse};

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Unauthenticated outcomes and every token-verification failure share one
/// response body so a caller cannot tell unknown user, wrong password,
/// tampering, and expiry apart beyond "re-authenticate".
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Unauthenticated | DomainError::Token(_) => HttpResponse::Unauthorized()
            .json(ErrorResponse::new(
                error_codes::UNAUTHENTICATED,
                "Authentication failed",
            )),
        DomainError::Unavailable { message } => {
            log::warn!("upstream unavailable: {message}");
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                error_codes::UNAVAILABLE,
                "Authentication is temporarily unavailable. Please try again later",
            ))
        }
        DomainError::Internal { message } => {
            log::error!("internal error: {message}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use blog_core::errors::TokenError;

    #[test]
    fn test_unauthenticated_maps_to_401() {
        let response = handle_domain_error(DomainError::Unauthenticated);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_errors_map_to_401() {
        for err in [
            TokenError::Expired,
            TokenError::Malformed,
            TokenError::InvalidSignature,
        ] {
            let response = handle_domain_error(DomainError::Token(err));
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let response = handle_domain_error(DomainError::Unavailable {
            message: "connection refused".to_string(),
        });
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = handle_domain_error(DomainError::Internal {
            message: "signing fault".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

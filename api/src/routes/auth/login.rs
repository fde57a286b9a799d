use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;

use blog_core::lookup::UserLookup;
use blog_shared::types::response::{error_codes, ErrorResponse};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Verifies the supplied credential pair against the user service and
/// returns a signed access token on success.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid request data
/// - 401 Unauthorized: Unknown user or wrong password (indistinguishable)
/// - 503 Service Unavailable: User service unreachable
/// - 500 Internal Server Error: Token generation failure
pub async fn login<L>(
    state: web::Data<AppState<L>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    L: UserLookup + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::VALIDATION_ERROR,
            "Invalid request data",
        ));
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(LoginResponse { token }),
        Err(error) => handle_domain_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_username = LoginRequest {
            username: String::new(),
            password: "secret".to_string(),
        };
        assert!(empty_username.validate().is_err());

        let empty_password = LoginRequest {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }
}

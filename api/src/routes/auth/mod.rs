//! Authentication routes

pub mod login;

use std::sync::Arc;

use blog_core::lookup::UserLookup;
use blog_core::services::auth::AuthService;

/// Shared state for authentication routes
pub struct AppState<L: UserLookup> {
    pub auth_service: Arc<AuthService<L>>,
}

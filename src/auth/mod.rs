pub mod password;
pub mod session;

use lazy_static::lazy_static;
use serde::Deserialize;
use validator::Validate;

// Re-export necessary items
pub use password::{hash_password, verify_password, VerifyError};
pub use session::SessionContext;

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Form body for a login attempt.
///
/// Deliberately lax: constraints on existing accounts belong to registration,
/// not login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Form body for creating a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    /// Between 3 and 32 characters, alphanumeric plus underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// At least 6 characters.
    #[validate(length(min = 6))]
    pub password: String,
}

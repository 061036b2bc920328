use bcrypt::{hash, verify};

use crate::error::AppError;

/// Why a password failed verification.
///
/// The two cases are deliberately distinct: a mismatch is the user's problem,
/// a malformed stored string means the account needs a credential reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    WrongPassword,
    InvalidAuthenticationString,
}

/// Derive the opaque authentication string stored for a new account.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let authentication_string = hash(password, 12)?; // bcrypt default cost is 12
    Ok(authentication_string)
}

/// Check `password` against a stored authentication string.
///
/// bcrypt reports a malformed hash as an error rather than a mismatch, which
/// is exactly the distinction we want to surface.
pub fn verify_password(password: &str, authentication_string: &str) -> Result<(), VerifyError> {
    match verify(password, authentication_string) {
        Ok(true) => Ok(()),
        Ok(false) => Err(VerifyError::WrongPassword),
        Err(_) => Err(VerifyError::InvalidAuthenticationString),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing_and_verification() {
        let password = "test_password123";
        let authentication_string = hash_password(password).unwrap();

        assert_eq!(verify_password(password, &authentication_string), Ok(()));
        assert_eq!(
            verify_password("wrong_password", &authentication_string),
            Err(VerifyError::WrongPassword)
        );
    }

    #[test]
    fn test_verify_with_malformed_authentication_string() {
        assert_eq!(
            verify_password("test_password123", "not-a-bcrypt-hash"),
            Err(VerifyError::InvalidAuthenticationString)
        );
    }
}

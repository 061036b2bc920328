//!
//! # User Access Layer
//!
//! Registration and login. Both operations return typed outcomes for the
//! failures a caller is expected to handle; only infrastructure faults come
//! back as `Err`.

use std::sync::Arc;

use crate::auth::{hash_password, verify_password, SessionContext, VerifyError};
use crate::error::AppError;
use crate::models::User;
use crate::store::{CreateUserOutcome, Store};

/// Outcome of a registration attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum Registration {
    Registered(User),
    DuplicateUsername,
}

/// Outcome of a login attempt.
///
/// `WrongUsername` and `WrongPassword` are distinguished here for diagnostics,
/// but callers MUST present them to the end user as one identical message so
/// usernames cannot be enumerated. `InvalidAuthenticationString` means the
/// stored credential is unusable and the account needs a password reset.
#[derive(Debug, PartialEq, Eq)]
pub enum Login {
    LoggedIn(User),
    WrongUsername,
    WrongPassword,
    InvalidAuthenticationString,
}

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create an account with a freshly derived authentication string.
    ///
    /// A username collision is reported by the store as a typed outcome and
    /// mapped here; any other store failure propagates.
    pub async fn register(&self, username: &str, password: &str) -> Result<Registration, AppError> {
        let authentication_string = hash_password(password)?;
        match self
            .store
            .create_user(username, &authentication_string)
            .await?
        {
            CreateUserOutcome::Created(user) => Ok(Registration::Registered(user)),
            CreateUserOutcome::UniqueViolation => Ok(Registration::DuplicateUsername),
        }
    }

    /// Verify credentials and, on success, bind the user id to the session.
    pub async fn login(
        &self,
        session: &SessionContext,
        username: &str,
        password: &str,
    ) -> Result<Login, AppError> {
        let user = match self.store.find_user_by_username(username).await? {
            Some(user) => user,
            None => return Ok(Login::WrongUsername),
        };

        match verify_password(password, &user.authentication_string) {
            Ok(()) => {}
            Err(VerifyError::WrongPassword) => return Ok(Login::WrongPassword),
            Err(VerifyError::InvalidAuthenticationString) => {
                log::warn!(
                    "user {} has an unusable authentication string",
                    user.username
                );
                return Ok(Login::InvalidAuthenticationString);
            }
        }

        session.persist_user(user.id)?;
        Ok(Login::LoggedIn(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use actix_session::SessionExt;
    use actix_web::test;
    use pretty_assertions::assert_eq;

    fn service() -> (UserService, Arc<dyn Store>) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        (UserService::new(store.clone()), store)
    }

    fn test_session() -> SessionContext {
        let req = test::TestRequest::default().to_http_request();
        SessionContext::new(req.get_session())
    }

    #[actix_rt::test]
    async fn duplicate_username_is_a_typed_outcome() {
        let (users, store) = service();

        let first = users.register("alice", "pw1").await.unwrap();
        assert!(matches!(first, Registration::Registered(_)));

        let second = users.register("alice", "pw2").await.unwrap();
        assert_eq!(second, Registration::DuplicateUsername);

        // The original record is untouched: the first password still works.
        let stored = store.find_user_by_username("alice").await.unwrap().unwrap();
        assert!(verify_password("pw1", &stored.authentication_string).is_ok());
        assert!(verify_password("pw2", &stored.authentication_string).is_err());
    }

    #[actix_rt::test]
    async fn login_distinguishes_failure_kinds() {
        let (users, _store) = service();
        let session = test_session();

        users.register("alice", "pw1").await.unwrap();

        let unknown = users.login(&session, "bob", "pw1").await.unwrap();
        assert_eq!(unknown, Login::WrongUsername);

        let mismatch = users.login(&session, "alice", "pw2").await.unwrap();
        assert_eq!(mismatch, Login::WrongPassword);

        // Neither failure binds the session.
        assert_eq!(session.user_id().unwrap(), None);
    }

    #[actix_rt::test]
    async fn successful_login_binds_the_session() {
        let (users, _store) = service();
        let session = test_session();

        let registered = users.register("alice", "pw1").await.unwrap();
        let Registration::Registered(alice) = registered else {
            panic!("expected registered user");
        };

        let login = users.login(&session, "alice", "pw1").await.unwrap();
        assert!(matches!(login, Login::LoggedIn(ref user) if user.id == alice.id));
        assert_eq!(session.user_id().unwrap(), Some(alice.id));
    }

    #[actix_rt::test]
    async fn malformed_authentication_string_is_reported() {
        let (users, store) = service();
        let session = test_session();

        // Seed an account whose stored credential is not a bcrypt hash, as
        // happens after a hashing-scheme migration gone wrong.
        store.create_user("mallory", "plainly-not-a-hash").await.unwrap();

        let outcome = users.login(&session, "mallory", "whatever").await.unwrap();
        assert_eq!(outcome, Login::InvalidAuthenticationString);
        assert_eq!(session.user_id().unwrap(), None);
    }
}

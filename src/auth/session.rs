//! Session helpers so handlers and services deal with domain operations, not
//! raw cookie state.
//!
//! The session carries exactly two things: the authenticated user id and a
//! one-shot error message shown on the next page render. Both are scoped to
//! the signed session cookie, so "the current user" is always per-request
//! state passed explicitly, never ambient.

use actix_session::{Session, SessionExt};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::error::AppError;
use crate::models::User;
use crate::store::Store;

const USER_ID_KEY: &str = "user_id";
const FLASH_KEY: &str = "last_error";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind the authenticated user's id to the session cookie.
    pub fn persist_user(&self, user_id: i32) -> Result<(), AppError> {
        self.0.insert(USER_ID_KEY, user_id)?;
        Ok(())
    }

    /// The user id previously bound to this session, if any.
    pub fn user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.0.get::<i32>(USER_ID_KEY)?)
    }

    /// Resolve the current user from the store.
    ///
    /// The session only holds an id; the record itself is re-fetched so a
    /// stale cookie for a vanished account reads as "not logged in".
    pub async fn current_user(&self, store: &dyn Store) -> Result<Option<User>, AppError> {
        match self.user_id()? {
            Some(id) => store.find_user_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Store a message to be shown once on the next page render.
    pub fn set_flash(&self, message: &str) -> Result<(), AppError> {
        self.0.insert(FLASH_KEY, message)?;
        Ok(())
    }

    /// Fetch and clear the one-shot message.
    pub fn take_flash(&self) -> Result<Option<String>, AppError> {
        let message = self.0.get::<String>(FLASH_KEY)?;
        if message.is_some() {
            self.0.remove(FLASH_KEY);
        }
        Ok(message)
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

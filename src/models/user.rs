use sqlx::FromRow;

/// A registered account.
///
/// `authentication_string` is the opaque value produced by password hashing at
/// registration time. It is only ever compared during login and never leaves
/// the process.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub authentication_string: String,
}

//! Registration and login pages.
//!
//! Domain outcomes never render directly: failures become a one-shot session
//! message plus a redirect back to the form, successes redirect onward. The
//! wrong-username and wrong-password outcomes share one message on purpose so
//! responses do not reveal which usernames exist.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    auth::{LoginForm, RegisterForm, SessionContext},
    error::AppError,
    pages,
    routes::{html, redirect},
    services::{Login, Registration},
    AppState,
};

#[get("/register")]
pub async fn register_page(session: SessionContext) -> Result<HttpResponse, AppError> {
    let flash = session.take_flash()?;
    Ok(html(pages::register(flash.as_deref())))
}

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<RegisterForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;

    match state.users.register(&form.username, &form.password).await? {
        Registration::Registered(user) => {
            log::info!("registered user {}", user.username);
            Ok(redirect("/login"))
        }
        Registration::DuplicateUsername => {
            session.set_flash("Username is taken")?;
            Ok(redirect("/register"))
        }
    }
}

#[get("/login")]
pub async fn login_page(session: SessionContext) -> Result<HttpResponse, AppError> {
    let flash = session.take_flash()?;
    Ok(html(pages::login(flash.as_deref())))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;

    match state
        .users
        .login(&session, &form.username, &form.password)
        .await?
    {
        Login::LoggedIn(user) => {
            log::info!("user {} logged in", user.username);
            Ok(redirect("/todo-list"))
        }
        // One message for both, so login responses cannot be used to probe
        // which usernames are registered.
        Login::WrongUsername | Login::WrongPassword => {
            session.set_flash("Wrong username or password")?;
            Ok(redirect("/login"))
        }
        Login::InvalidAuthenticationString => {
            session.set_flash("Please reset your password")?;
            Ok(redirect("/login"))
        }
    }
}

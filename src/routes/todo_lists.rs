//! Todo list pages and item operations.
//!
//! Every handler here runs the same gate first: resolve the current user
//! from the session, redirect to `/login` with a one-shot message when there
//! is none. Ownership of the addressed list is then re-derived from the
//! store; a list that does not exist and a list owned by someone else both
//! answer 404.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::{
    auth::SessionContext,
    error::AppError,
    models::User,
    pages,
    routes::{html, redirect},
    store::Store,
    AppState,
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateListForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddItemForm {
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct SetItemForm {
    pub value: bool,
}

/// Result of the login gate: either the resolved user or the response to
/// send instead.
enum Gate {
    User(User),
    Redirect(HttpResponse),
}

async fn require_user(session: &SessionContext, store: &dyn Store) -> Result<Gate, AppError> {
    match session.current_user(store).await? {
        Some(user) => Ok(Gate::User(user)),
        None => {
            session.set_flash("you need to be logged in to access this resource")?;
            Ok(Gate::Redirect(redirect("/login")))
        }
    }
}

#[get("/todo-list")]
pub async fn todo_lists(
    state: web::Data<AppState>,
    session: SessionContext,
) -> Result<HttpResponse, AppError> {
    let user = match require_user(&session, state.store.as_ref()).await? {
        Gate::User(user) => user,
        Gate::Redirect(resp) => return Ok(resp),
    };

    let lists = state.todo_lists.lists_for_user(user.id).await?;
    Ok(html(pages::todo_lists(&lists)))
}

#[post("/todo-list")]
pub async fn create_list(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<CreateListForm>,
) -> Result<HttpResponse, AppError> {
    let user = match require_user(&session, state.store.as_ref()).await? {
        Gate::User(user) => user,
        Gate::Redirect(resp) => return Ok(resp),
    };
    form.validate()?;

    let list = state.todo_lists.create_list(user.id, &form.title).await?;
    Ok(redirect(&format!("/todo-list/{}", list.id)))
}

#[get("/todo-list/{list_id}")]
pub async fn todo_list(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let user = match require_user(&session, state.store.as_ref()).await? {
        Gate::User(user) => user,
        Gate::Redirect(resp) => return Ok(resp),
    };
    let list_id = path.into_inner();

    match state.todo_lists.owned_list(list_id, user.id).await? {
        Some(list) => Ok(html(pages::todo_list(&list))),
        None => Err(AppError::NotFound(
            "the requested resource does not exist".into(),
        )),
    }
}

#[post("/todo-list/{list_id}")]
pub async fn add_item(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<i32>,
    form: web::Form<AddItemForm>,
) -> Result<HttpResponse, AppError> {
    let user = match require_user(&session, state.store.as_ref()).await? {
        Gate::User(user) => user,
        Gate::Redirect(resp) => return Ok(resp),
    };
    form.validate()?;
    let list_id = path.into_inner();

    // Ownership check first; add_item itself trusts it. Not transactional
    // with the insert below, an accepted race with concurrent deletion.
    if state.todo_lists.owned_list(list_id, user.id).await?.is_none() {
        return Err(AppError::NotFound(
            "the requested resource does not exist".into(),
        ));
    }

    state.todo_lists.add_item(list_id, &form.description).await?;
    Ok(redirect(&format!("/todo-list/{}", list_id)))
}

#[post("/todo-list/{list_id}/{todo_id}")]
pub async fn set_item_done(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<(i32, i32)>,
    form: web::Form<SetItemForm>,
) -> Result<HttpResponse, AppError> {
    let user = match require_user(&session, state.store.as_ref()).await? {
        Gate::User(user) => user,
        Gate::Redirect(resp) => return Ok(resp),
    };
    let (list_id, todo_id) = path.into_inner();

    if state.todo_lists.owned_list(list_id, user.id).await?.is_none() {
        return Err(AppError::NotFound(
            "the requested resource does not exist".into(),
        ));
    }

    // False means no such item under that list; never silent success.
    if !state
        .todo_lists
        .set_item_done(list_id, todo_id, form.value)
        .await?
    {
        return Err(AppError::NotFound(
            "the requested resource does not exist".into(),
        ));
    }

    Ok(HttpResponse::Ok().body("ok"))
}

pub mod auth;
pub mod health;
pub mod todo_lists;

use actix_web::{http::header, web, HttpResponse};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(auth::register_page)
        .service(auth::register)
        .service(auth::login_page)
        .service(auth::login)
        .service(todo_lists::todo_lists)
        .service(todo_lists::create_list)
        .service(todo_lists::todo_list)
        .service(todo_lists::add_item)
        .service(todo_lists::set_item_done);
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body)
}

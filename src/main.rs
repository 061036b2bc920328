use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use dinglist::config::Config;
use dinglist::routes;
use dinglist::store::{PgStore, Store};
use dinglist::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
    let state = web::Data::new(AppState::new(store));

    let session_key = match config.session_key.as_deref() {
        Some(secret) => Key::derive_from(secret.as_bytes()),
        None => {
            log::warn!("SESSION_KEY not set, using a volatile key; sessions will not survive a restart");
            Key::generate()
        }
    };

    log::info!("Now listening on {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_name("sesskey".to_owned())
                    // Served over plain HTTP; a fronting proxy terminates TLS.
                    .cookie_secure(false)
                    .build(),
            )
            .configure(routes::config)
    })
    .bind((config.server_host.clone(), config.server_port))?
    .run()
    .await
}

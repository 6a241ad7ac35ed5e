use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};

use std::net::SocketAddr;
use tower_cookies::CookieManagerLayer;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod error;
mod state;

mod models {
    pub mod note;
    pub mod session;
    pub mod todo;
    pub mod user;
}

mod repositories {
    pub mod note;
    pub mod user;
}

mod services {
    pub mod auth;
    pub mod session;
}

mod handlers {
    pub mod auth;
    pub mod hello;
    pub mod notes;
    pub mod todos;
}

mod middleware_layer {
    pub mod auth;
}

mod validation {
    pub mod auth;
    pub mod notes;
}

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded successfully");

    let state = AppState::new(&config).await?;
    tracing::info!("✅ AppState initialized");

    db::init_schema(&state.db).await?;
    tracing::info!("✅ Database schema ready");

    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/check-auth", get(handlers::auth::check_auth))
        .with_state(state.clone());

    let note_routes = Router::new()
        .route(
            "/notes",
            get(handlers::notes::list_notes).post(handlers::notes::create_note),
        )
        .route("/notes/{id}", put(handlers::notes::update_note))
        .route("/notes/{id}", delete(handlers::notes::delete_note))
        .route_layer(from_fn(middleware_layer::auth::require_auth))
        .with_state(state.clone());

    let todo_routes = Router::new()
        .route(
            "/todos",
            get(handlers::todos::list_todos).post(handlers::todos::create_todo),
        )
        .route("/todos/{id}", put(handlers::todos::update_todo))
        .route("/todos/{id}", delete(handlers::todos::delete_todo))
        .with_state(state.clone());

    let app = Router::new()
        .route("/hello", get(handlers::hello::hello))
        .merge(auth_routes)
        .merge(note_routes)
        .merge(todo_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default())
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(CookieManagerLayer::new())
        .fallback_service(ServeDir::new("static"));

    let addr = SocketAddr::from(([127, 0, 0, 1], state.config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

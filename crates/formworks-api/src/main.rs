//! FormWorks API Backend
//!
//! Rust/Axum HTTP layer over the FormWorks form builder services.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formworks_core::application::{AccountService, FormService, ProjectService, UserService};
use formworks_core::infrastructure::persistence::{
    InMemoryAccountRepository, InMemoryFormRepository, InMemoryProjectRepository,
    InMemoryUserRepository, TracingEventPublisher,
};
use formworks_core::infrastructure::security::Sha256PasswordHasher;
use formworks_core::ports::inbound::{
    AccountUseCases, FormUseCases, ProjectUseCases, UserUseCases,
};

mod auth;
mod config;
mod error;
mod handlers;
mod models;

use handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub forms: Arc<dyn FormUseCases>,
    pub projects: Arc<dyn ProjectUseCases>,
    pub accounts: Arc<dyn AccountUseCases>,
    pub users: Arc<dyn UserUseCases>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    fn new(jwt_secret: String) -> Self {
        let event_publisher = Arc::new(TracingEventPublisher);
        // The account store is shared: signup provisions accounts that the
        // account endpoints must be able to read back.
        let account_repo = Arc::new(InMemoryAccountRepository::new());

        Self {
            forms: Arc::new(FormService::new(
                Arc::new(InMemoryFormRepository::new()),
                event_publisher.clone(),
            )),
            projects: Arc::new(ProjectService::new(
                Arc::new(InMemoryProjectRepository::new()),
                event_publisher.clone(),
            )),
            accounts: Arc::new(AccountService::new(
                account_repo.clone(),
                event_publisher.clone(),
            )),
            users: Arc::new(UserService::new(
                Arc::new(InMemoryUserRepository::new()),
                account_repo,
                Arc::new(Sha256PasswordHasher::new()),
                event_publisher,
            )),
            jwt_secret: jwt_secret.into(),
        }
    }
}

fn app(state: AppState) -> Router {
    let protected = Router::new()
        // Forms
        .route("/api/v1/forms", post(create_form))
        .route("/api/v1/forms/:id", get(get_form).post(update_form))
        // Projects
        .route("/api/v1/projects", post(create_project))
        .route("/api/v1/projects/:id", get(get_project).post(update_project))
        // Accounts
        .route("/api/v1/accounts", post(create_account))
        .route("/api/v1/accounts/:id", get(get_account).post(update_account))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        // Health check
        .route("/health", get(health))
        // Auth
        .route("/api/v1/signup", post(signup))
        .route("/api/v1/login", post(login))
        .merge(protected)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config::Config { addr, jwt_secret } = config::Config::from_env();
    let state = AppState::new(jwt_secret);

    tracing::info!("FormWorks API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app(state)).await.unwrap();
}

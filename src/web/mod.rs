//! Web server module.

mod error;
mod handlers;

pub use error::*;

use crate::config::ServerConfig;
use crate::livestatus::{Comment, Contact, Downtime, Host, Service, Client};

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub client: Client,
}

/// Web server for livestatus-api.
pub struct Server {
    state: AppState,
}

impl Server {
    /// Create a new server querying the socket named in `config`.
    pub fn new(config: ServerConfig) -> Self {
        let client = Client::new(&config.socket_path, config.timeout);
        Self {
            state: AppState { config, client },
        }
    }

    /// Build the router with all routes.
    fn routes(&self) -> Router {
        let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

        Router::new()
            .route("/comments", get(handlers::list::<Comment>))
            .route("/comments/{id}", get(handlers::get_one::<Comment>))
            .route("/contacts", get(handlers::list::<Contact>))
            .route("/contacts/{name}", get(handlers::get_one::<Contact>))
            .route("/downtimes", get(handlers::list::<Downtime>))
            .route("/downtimes/{id}", get(handlers::get_one::<Downtime>))
            .route("/hosts", get(handlers::list::<Host>))
            .route("/hosts/{host_name}", get(handlers::get_one::<Host>))
            .route("/hosts/{host_name}/services", get(handlers::list_host_services))
            .route(
                "/hosts/{host_name}/services/{description}",
                get(handlers::get_one::<Service>),
            )
            .route("/services", get(handlers::list::<Service>))
            .route("/services/{id}", get(handlers::get_service_by_id))
            .fallback(handlers::unknown_route)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Serve until Ctrl-C or SIGTERM.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let router = self.routes();

        let listener = tokio::net::TcpListener::bind(&self.state.config.listen_address).await?;
        tracing::info!("Web server listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Web server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

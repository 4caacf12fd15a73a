use std::{env, net::SocketAddr};

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::{
    services::{company_settings_service::CompanySettingsService, user_service::UserService},
    stores::{company_settings_store::CompanySettingsStore, user_store::UserStore},
};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Construct stores, inject them into services, and assemble the shared
/// handler state. Plain constructor wiring; done once at process start.
pub fn build_state() -> ServerState {
    let users = UserService::new(UserStore::new());
    let settings = CompanySettingsService::new(CompanySettingsStore::new());
    ServerState { users, settings }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    let state = build_state();
    let app: Router = routes::build_router(build_cors(), state);

    let addr = load_bind_addr()?;
    info!(%addr, "starting user data api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

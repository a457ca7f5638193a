use crate::routes::{configure_routes, not_found};
use crate::state::AppState;
use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{web, web::Data, App, HttpServer};
use log::info;
use std::path::PathBuf;

/// Network and storage settings for one server instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

/// Binds and runs the HTTP server until shutdown.
///
/// Each worker shares only the database path; connections are opened per request.
pub async fn start_server(config: ServerConfig) -> std::io::Result<()> {
    info!(
        "event=server_start module=api status=start addr=http://{}:{} db_path={}",
        config.host,
        config.port,
        config.db_path.display()
    );
    let app_state = Data::new(AppState::new(config.db_path));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .configure(configure_routes)
            .default_service(web::route().to(not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("event=server_stop module=api status=ok");
    Ok(())
}

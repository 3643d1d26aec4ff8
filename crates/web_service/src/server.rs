use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use list_store::{MemorySessionStorage, SessionManager};
use log::{error, info};

use crate::config::ServerConfig;
use crate::controllers::{list_controller, todo_controller};
use crate::middleware::session_middleware::SessionMiddleware;

pub struct AppState {
    pub sessions: SessionManager<MemorySessionStorage>,
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(list_controller::config)
        .configure(todo_controller::config);
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    info!("Starting web service...");

    let sessions = SessionManager::new(MemorySessionStorage::new(config.session_ttl));
    let sweep_storage = sessions.storage();
    let app_state = web::Data::new(AppState { sessions });

    // Expired sessions are only detected on access; sweep the rest.
    let sweep_interval = config.session_sweep;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_interval);
        loop {
            interval.tick().await;
            sweep_storage.purge_expired().await;
        }
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .wrap(SessionMiddleware)
            .configure(app_config)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Failed to bind server on {}:{}", config.host, config.port))?
    .run();

    info!(
        "Web service listening on http://{}:{}",
        config.host, config.port
    );

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

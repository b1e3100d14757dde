use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use trailpack::db::establish_connection_pool;
use trailpack::models::config::ServerConfig;
use trailpack::repository::DieselRepository;
use trailpack::routes::configure;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_dir = env::var("TRAILPACK_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let server_config = match ServerConfig::load(&config_dir) {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration from {config_dir}: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{} (default unit {})",
        bind_address.0,
        bind_address.1,
        server_config.default_weight_unit
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}

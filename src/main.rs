use actix_web::{App, HttpServer, middleware, web};

use landing_api::config::Config;
use landing_api::handlers;
use landing_api::models::contact::ContactStore;
use landing_api::models::content::Catalog;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    // Ensure data directory exists
    std::fs::create_dir_all(&config.data_dir)?;

    let catalog = web::Data::new(Catalog::load(config.content_path.as_deref())?);
    let store = web::Data::new(ContactStore::new(&config.data_dir));

    let (host, port) = config.bind_addr();
    log::info!("Server running on http://{host}:{port}");
    log::info!("Contacts stored in {}", store.path().display());
    log::info!("Available endpoints:");
    for endpoint in [
        "GET  /api/slides",
        "GET  /api/slides/{id}",
        "GET  /api/features",
        "GET  /api/pricing",
        "POST /api/contact",
        "GET  /api/contact/{id}",
        "GET  /api/contacts",
        "GET  /api/health",
    ] {
        log::info!("  {endpoint}");
    }

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(catalog.clone())
            .app_data(store.clone())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}

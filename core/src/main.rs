mod cors;

use actix_files::Files;
use actix_web::{
    App, HttpResponse, HttpServer, Responder, get,
    web::{self},
};
use common::env_config::Config;
use serde_json::json;

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "Sales Tracker API running",
        "database": "SQLite"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let origin = config.cors_allowed_origin.clone();
    let cookie_secure = !origin.contains("localhost");

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }
    log::info!("Starting Sales Tracker API in {} mode", config.environment);

    // init db connection, creating the file and schema on first run
    let pool = db::setup(&config.database_url)
        .await
        .expect("Failed to set up database");

    // one signing key shared by every worker
    let session_key = api_auth::session_key(config.session_secret.as_deref());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(logger::middleware()) // 3rd
            .wrap(cors::middleware(&origin)) // 2nd
            .wrap(api_auth::session_middleware(
                cookie_secure,
                session_key.clone(),
            )) // 1st
            .service(index)
            .service(
                web::scope("/api")
                    .configure(api_auth::mount_auth)
                    .service(api_forms::mount_webhook())
                    .service(api_forms::mount_forms())
                    .service(api_entries::mount_entries().wrap(api_auth::auth_middleware())),
            )
            .service(Files::new("/", config_data.static_dir.clone()).index_file("index.html"))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}

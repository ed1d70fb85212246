use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// This struct holds all the necessary configuration parameters
/// required to initialize and run the server.
/// It includes the database location, server host and port, number of
/// worker threads, CORS settings, session cookie secret, logging
/// preferences and the static asset directory.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The SQLite database URL, e.g. `sqlite://salestracker.db`.
    pub database_url: String,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// The secret used to sign session cookies. Must be at least 64 bytes
    /// when set; when unset a random key is generated at startup and all
    /// sessions reset on restart.
    pub session_secret: Option<String>,
    /// Directory served for unmatched routes (the dashboard frontend).
    pub static_dir: String,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// Loads all configuration values from environment variables with
    /// sensible defaults for everything, so a bare `cargo run` starts a
    /// working development server against a local database file.
    ///
    /// # Environment Variables
    ///
    /// - `ENVIRONMENT`: "development" (default) or "production"
    /// - `DATABASE_URL`: SQLite URL (default: "sqlite://salestracker.db")
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `SESSION_SECRET`: Session cookie signing secret, >= 64 bytes (default: unset)
    /// - `STATIC_DIR`: Static asset directory (default: "./public")
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://salestracker.db".to_string()),
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
            session_secret: env::var("SESSION_SECRET").ok(),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()),
        })
    }
}

use actix_web::{middleware, web, App, HttpServer};
use color_eyre::Result;
use eyre::WrapErr;
use log::debug;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::Config;
use crate::db::{self, Pool};
mod dtos;
mod error;
mod handlers;
mod helpers;

use error::Error;

// Declare app state struct:
pub struct AppState {
  pub pool: Pool
}

// Extractor configs shared by run() and the test
// setup. A body or query string that doesn't
// deserialize is always a 400 with the standard
// {"msg"} body, this is also how unrecognized query
// keys get rejected (deny_unknown_fields on the query
// structs).
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|_, _| {
    Error::BadRequest(String::from("Bad Request")).into()
  })
}

pub fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|_, _| {
    Error::BadRequest(String::from("Bad Request")).into()
  })
}

// Function to start the server.
// Has to be async because there should be a .await at
// the end, main.rs carries the actix_web::main
// decorator.
pub async fn run() -> Result<()> {
  let config = Config::from_env()
    .expect("Configuration (environment or .env file) is missing");
  debug!("Current config: {:?}", config);
  let manager = SqliteConnectionManager::file(&config.db_path);
  let pool = Pool::new(manager)
    .expect("Database connection failed");
  db::schema::create_tables(&pool)
    .expect("Could not create the database schema");

  let app_state = web::Data::new(
    AppState {
      pool
    }
  );

  let bind_address = config.bind_address;
  HttpServer::new(move || {
    App::new()
      .app_data(app_state.clone())
      .app_data(json_config())
      .app_data(query_config())
      .wrap(middleware::Logger::default())
      .configure(endpoints_config)
      .default_service(web::route().to(handlers::not_found))
  })
  .bind(bind_address)?
  .run()
  .await
  .context("Start Actix web server")
}

// Route configuration:
pub fn endpoints_config(cfg: &mut web::ServiceConfig) {
  cfg.route("/api", web::get().to(handlers::api_index))
    .route("/api/topics", web::get().to(handlers::topics))
    .route("/api/topics", web::post().to(handlers::post_topic))
    .route("/api/articles", web::get().to(handlers::articles))
    .route("/api/articles", web::post().to(handlers::post_article))
    .route("/api/articles/{article_id}", web::get().to(handlers::article))
    .route("/api/articles/{article_id}", web::patch().to(handlers::patch_article))
    .route("/api/articles/{article_id}/comments", web::get().to(handlers::article_comments))
    .route("/api/articles/{article_id}/comments", web::post().to(handlers::post_comment))
    .route("/api/comments/{comment_id}", web::delete().to(handlers::delete_comment))
    .route("/api/comments/{comment_id}", web::patch().to(handlers::patch_comment))
    .route("/api/users", web::get().to(handlers::users))
    .route("/api/users/{username}", web::get().to(handlers::user));
}

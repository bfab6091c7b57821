mod app;
mod config;
mod db;
mod utils;
use color_eyre::Result;
use std::env;

#[actix_web::main]
async fn main() -> Result<()> {
  dotenv::dotenv().ok();
  // Default log level when RUST_LOG isn't set:
  if env::var("RUST_LOG").is_err() {
    env::set_var("RUST_LOG", "info,actix_web=info");
  }
  env_logger::init();

  app::run().await
}

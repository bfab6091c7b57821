// Adding the context method to errors:
use color_eyre::Result;
use eyre::WrapErr;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
  pub db_path: String,
  pub bind_address: String
}

impl Config {

  pub fn from_env() -> Result<Config> {
    let mut c = config::Config::new();
    // You have to use lowercase here when compared to
    // what's in the .env file.
    c.set_default("db_path", "./news.db")?;
    c.set_default("bind_address", "127.0.0.1:8080")?;

    c.merge(config::Environment::default())?;
    // The error has to be given a context for
    // color_eyre to work here:
    c.try_into()
      .context("Loading configuration from env")
  }

}

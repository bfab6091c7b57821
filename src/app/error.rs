use actix_web::{error::ResponseError, HttpResponse};
use derive_more::Display;
use log::error;
use serde::Serialize;

// The Display output is what clients get to see in
// the JSON body. The internal variants carry the full
// error text for the logs but never show it to random
// internet people.
#[derive(Debug, Display)]
pub enum Error {
  #[display(fmt = "Something Went Wrong!")]
  InternalServerError(String),
  #[display(fmt = "Something Went Wrong!")]
  DatabaseError(String),
  #[display(fmt = "{}", _0)]
  NotFound(String),
  #[display(fmt = "{}", _0)]
  BadRequest(String)
}

// Every error response has the same {"msg": ...} shape.
#[derive(Serialize)]
struct MsgBody {
  msg: String
}

impl ResponseError for Error {
  fn error_response(&self) -> HttpResponse {
    let body = MsgBody {
      msg: self.to_string()
    };
    match self {
      Error::InternalServerError(_) | Error::DatabaseError(_) =>
        HttpResponse::InternalServerError().json(body),
      Error::NotFound(_) => HttpResponse::NotFound().json(body),
      Error::BadRequest(_) => HttpResponse::BadRequest().json(body)
    }
  }
}

// Data layer failures are all unexpected storage
// problems at this point, anything the client could
// have caused wrong was validated before the query.
// Generic so it doesn't care about the exact report
// type color_eyre::Result carries.
pub fn map_db_error<E: std::fmt::Display>(e: E) -> Error {
  error!("Database failure - {}", e);
  Error::DatabaseError(e.to_string())
}

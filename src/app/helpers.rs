use super::error::{map_db_error, Error};
use crate::db;

// Validators shared between handlers. They reject
// with the typed Error directly instead of returning
// booleans so the handlers can chain them with "?".

const DEFAULT_PAGE_LIMIT: i64 = 10;

// Path ids arrive as strings and have to be numeric
// before they get anywhere near a SQL comparison.
// Non-numeric ids are a 400.
pub fn parse_id(raw: &str) -> Result<i64, Error> {
  raw.parse::<i64>()
    .map_err(|_| Error::BadRequest(String::from("Bad Request")))
}

// limit/p pagination contract of the listing
// endpoints. Both must parse as numbers but the
// failure status is a 404, which is what the API has
// always answered for bad listing values. Returns
// (limit, offset).
pub fn parse_page(
  limit: &Option<String>,
  p: &Option<String>
) -> Result<(i64, i64), Error> {
  let limit = match limit {
    Some(raw) => raw.parse::<i64>()
      .map_err(|_| Error::NotFound(String::from("Not Found")))?,
    None => DEFAULT_PAGE_LIMIT
  };
  let offset = match p {
    Some(raw) => {
      let page = raw.parse::<i64>()
        .map_err(|_| Error::NotFound(String::from("Not Found")))?;
      limit * (page - 1)
    },
    None => 0
  };
  Ok((limit, offset))
}

// Parses and checks in one go, the comment endpoints
// under /api/articles/{id} all need this exact combo.
pub fn check_article_exists(pool: &db::Pool, raw_id: &str) -> Result<i64, Error> {
  let article_id = parse_id(raw_id)?;
  if db::article_exists(pool, article_id).map_err(map_db_error)? {
    Ok(article_id)
  } else {
    Err(Error::NotFound(String::from("Article Not Found")))
  }
}

pub fn check_user_exists(pool: &db::Pool, username: &str) -> Result<(), Error> {
  if db::user_exists(pool, username).map_err(map_db_error)? {
    Ok(())
  } else {
    Err(Error::BadRequest(String::from("Bad Request - No Such User")))
  }
}

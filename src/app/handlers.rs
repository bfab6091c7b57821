use actix_web::{web, HttpResponse, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::dtos::*;
use super::error::{map_db_error, Error};
use super::helpers;
use super::AppState;
use crate::db;
use crate::db::entities::NewArticle;
use crate::db::queries::{article_sort_column, Order, OrderBy};

// Module with all the API handler functions.

// Image applied to articles posted without one:
const DEFAULT_ARTICLE_IMG_URL: &str =
  "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

lazy_static! {
  // The endpoint directory served on GET /api is a
  // static JSON document embedded at compile time.
  static ref ENDPOINTS: Value = serde_json::from_str(
    include_str!("../../endpoints.json")
  ).expect("endpoints.json is not valid JSON");
}

/* --- Request body or query objects --- */
// These have to be public.
// deny_unknown_fields makes the Query extractor
// reject unrecognized keys, which comes out as a 400
// through the QueryConfig error handler. The values
// stay strings so bad ones reach our own validation,
// where they're a 404 and not a 400.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticlesQuery {
  pub topic: Option<String>,
  pub sort_by: Option<String>,
  pub order: Option<String>,
  pub limit: Option<String>,
  pub p: Option<String>
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageQuery {
  pub limit: Option<String>,
  pub p: Option<String>
}

#[derive(Deserialize)]
pub struct VotesBody {
  pub inc_votes: Option<i64>
}

#[derive(Deserialize)]
pub struct NewTopicBody {
  pub slug: Option<String>,
  pub description: Option<String>
}

#[derive(Deserialize)]
pub struct NewArticleBody {
  pub author: Option<String>,
  pub title: Option<String>,
  pub body: Option<String>,
  pub topic: Option<String>,
  pub article_img_url: Option<String>
}
/* --- End request body or query objects --- */

pub async fn api_index() -> Result<HttpResponse, Error> {
  Ok(HttpResponse::Ok().json(json!({ "endpoints": &*ENDPOINTS })))
}

// Default response when no route matched the request:
pub async fn not_found() -> Result<HttpResponse, Error> {
  Err(Error::NotFound(String::from("Endpoint Not Found")))
}

/* --- Topics --- */

pub async fn topics(
  app_state: web::Data<AppState>
) -> Result<HttpResponse, Error> {
  let topics = db::all_topics(&app_state.pool)
    .map_err(map_db_error)?;
  Ok(HttpResponse::Ok().json(TopicsEnvelope { topics }))
}

pub async fn post_topic(
  app_state: web::Data<AppState>,
  body: web::Json<NewTopicBody>
) -> Result<HttpResponse, Error> {
  let body = body.into_inner();
  let (slug, description) = match (body.slug, body.description) {
    (Some(slug), Some(description)) => (slug, description),
    _ => return Err(Error::BadRequest(
      String::from("Bad Request - Missing Properties")
    ))
  };
  let topic = db::insert_topic(&app_state.pool, &slug, &description)
    .map_err(map_db_error)?;
  Ok(HttpResponse::Created().json(TopicEnvelope { topic }))
}

/* --- Articles --- */

pub async fn articles(
  app_state: web::Data<AppState>,
  query: web::Query<ArticlesQuery>
) -> Result<HttpResponse, Error> {
  // Everything dynamic about the listing query goes
  // through an allow-list or a numeric parse. The
  // contract has always been a 404 for bad values
  // here, unlike the 400 of the id endpoints.
  let sort_column = match &query.sort_by {
    Some(key) => article_sort_column(key)
      .ok_or_else(|| Error::NotFound(String::from("Not Found")))?,
    None => "articles.created_at"
  };
  let order = match &query.order {
    Some(param) => Order::from_param(param)
      .ok_or_else(|| Error::NotFound(String::from("Not Found")))?,
    None => Order::Desc
  };
  let (limit, offset) = helpers::parse_page(&query.limit, &query.p)?;
  if let Some(topic) = &query.topic {
    if !db::topic_exists(&app_state.pool, topic).map_err(map_db_error)? {
      return Err(Error::NotFound(String::from("Not Found")));
    }
  }

  let topic = query.topic.as_deref();
  let total_count = db::article_count(&app_state.pool, topic)
    .map_err(map_db_error)?;
  let articles = db::articles_page(
    &app_state.pool,
    topic,
    OrderBy::new(order, sort_column),
    limit,
    offset
  ).map_err(map_db_error)?;

  Ok(HttpResponse::Ok().json(ArticlesEnvelope { articles, total_count }))
}

pub async fn article(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>
) -> Result<HttpResponse, Error> {
  let article_id = helpers::parse_id(&path.into_inner().0)?;
  match db::article_by_id(&app_state.pool, article_id).map_err(map_db_error)? {
    Some(article) => Ok(HttpResponse::Ok().json(ArticleEnvelope { article })),
    None => Err(Error::NotFound(String::from("Article Not Found")))
  }
}

pub async fn patch_article(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>,
  body: web::Json<VotesBody>
) -> Result<HttpResponse, Error> {
  let article_id = helpers::parse_id(&path.into_inner().0)?;
  // Absent inc_votes is a no-op read-back:
  let inc_votes = body.inc_votes.unwrap_or(0);
  match db::update_article_votes(&app_state.pool, article_id, inc_votes)
    .map_err(map_db_error)? {
      Some(article) => Ok(HttpResponse::Ok().json(ArticleEnvelope { article })),
      None => Err(Error::NotFound(String::from("Article Not Found")))
  }
}

pub async fn post_article(
  app_state: web::Data<AppState>,
  body: web::Json<NewArticleBody>
) -> Result<HttpResponse, Error> {
  let body = body.into_inner();
  let (author, title, article_body, topic) =
    match (body.author, body.title, body.body, body.topic) {
      (Some(author), Some(title), Some(article_body), Some(topic)) =>
        (author, title, article_body, topic),
      _ => return Err(Error::BadRequest(
        String::from("Bad Request - Missing Properties")
      ))
  };
  if !db::topic_exists(&app_state.pool, &topic).map_err(map_db_error)? {
    return Err(Error::BadRequest(
      String::from("Bad Request - No Such Topic")
    ));
  }
  helpers::check_user_exists(&app_state.pool, &author)?;

  let new_article = NewArticle {
    author,
    title,
    body: article_body,
    topic,
    article_img_url: body.article_img_url
      .unwrap_or_else(|| String::from(DEFAULT_ARTICLE_IMG_URL))
  };
  let article = db::insert_article(&app_state.pool, &new_article)
    .map_err(map_db_error)?;
  Ok(HttpResponse::Created().json(ArticleEnvelope { article }))
}

/* --- Comments --- */

pub async fn article_comments(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>,
  query: web::Query<PageQuery>
) -> Result<HttpResponse, Error> {
  let article_id = helpers::check_article_exists(
    &app_state.pool,
    &path.into_inner().0
  )?;
  let (limit, offset) = helpers::parse_page(&query.limit, &query.p)?;
  let total_count = db::comment_count(&app_state.pool, article_id)
    .map_err(map_db_error)?;
  // An article with no comments is an empty list, not
  // an error.
  let comments = db::comments_for_article(
    &app_state.pool,
    article_id,
    limit,
    offset
  ).map_err(map_db_error)?;
  Ok(HttpResponse::Ok().json(CommentsEnvelope { comments, total_count }))
}

// The body is taken as raw JSON because the contract
// wants a "Missing Properties" 400 when body or
// username is absent or not a string, not a generic
// deserialization failure.
pub async fn post_comment(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>,
  body: web::Json<Value>
) -> Result<HttpResponse, Error> {
  let comment_body = body.get("body").and_then(Value::as_str);
  let username = body.get("username").and_then(Value::as_str);
  let (comment_body, username) = match (comment_body, username) {
    (Some(comment_body), Some(username)) => (comment_body, username),
    _ => return Err(Error::BadRequest(
      String::from("Bad Request - Missing Properties")
    ))
  };
  let article_id = helpers::check_article_exists(
    &app_state.pool,
    &path.into_inner().0
  )?;
  helpers::check_user_exists(&app_state.pool, username)?;

  let comment = db::insert_comment(
    &app_state.pool,
    article_id,
    comment_body,
    username
  ).map_err(map_db_error)?;
  Ok(HttpResponse::Created().json(CommentEnvelope { comment }))
}

pub async fn delete_comment(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>
) -> Result<HttpResponse, Error> {
  let comment_id = helpers::parse_id(&path.into_inner().0)?;
  if db::delete_comment(&app_state.pool, comment_id).map_err(map_db_error)? {
    Ok(HttpResponse::NoContent().finish())
  } else {
    Err(Error::NotFound(String::from("Comment Not Found")))
  }
}

pub async fn patch_comment(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>,
  body: web::Json<VotesBody>
) -> Result<HttpResponse, Error> {
  let comment_id = helpers::parse_id(&path.into_inner().0)?;
  let inc_votes = body.inc_votes.unwrap_or(0);
  match db::update_comment_votes(&app_state.pool, comment_id, inc_votes)
    .map_err(map_db_error)? {
      Some(comment) => Ok(HttpResponse::Ok().json(CommentEnvelope { comment })),
      None => Err(Error::NotFound(String::from("Comment Not Found")))
  }
}

/* --- Users --- */

pub async fn users(
  app_state: web::Data<AppState>
) -> Result<HttpResponse, Error> {
  let users = db::all_users(&app_state.pool)
    .map_err(map_db_error)?;
  Ok(HttpResponse::Ok().json(UsersEnvelope { users }))
}

pub async fn user(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>
) -> Result<HttpResponse, Error> {
  let username = path.into_inner().0;
  match db::user_by_username(&app_state.pool, &username)
    .map_err(map_db_error)? {
      Some(user) => Ok(HttpResponse::Ok().json(UserEnvelope { user })),
      None => Err(Error::NotFound(String::from("User Not Found")))
  }
}

use serde::{Deserialize, Serialize};

// Rows come out of SQLite as simple datatypes and
// these serialize straight into the response JSON,
// so there's no separate DTO layer for the entities
// themselves. Response envelopes live in app::dtos.

#[derive(Debug, Serialize, Deserialize)]
pub struct Topic {
  pub slug: String,
  pub description: String
}

#[derive(Debug, Serialize, Deserialize)]
pub struct User {
  pub username: String,
  pub name: String,
  pub avatar_url: String
}

// Full article, as returned by the detail and
// mutation endpoints. comment_count is aggregated
// in the query, it's not a column.
#[derive(Debug, Serialize, Deserialize)]
pub struct Article {
  pub article_id: i64,
  pub title: String,
  pub topic: String,
  pub author: String,
  pub body: String,
  pub created_at: String,
  pub votes: i64,
  pub article_img_url: String,
  pub comment_count: i64
}

// The listing endpoint never returns the body field.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleSummary {
  pub article_id: i64,
  pub title: String,
  pub topic: String,
  pub author: String,
  pub created_at: String,
  pub votes: i64,
  pub article_img_url: String,
  pub comment_count: i64
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
  pub comment_id: i64,
  pub body: String,
  pub votes: i64,
  pub author: String,
  pub article_id: i64,
  pub created_at: String
}

// Insert payload for articles. The id, timestamp and
// vote count are assigned server side.
#[derive(Debug)]
pub struct NewArticle {
  pub author: String,
  pub title: String,
  pub body: String,
  pub topic: String,
  pub article_img_url: String
}

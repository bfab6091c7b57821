use super::entities::*;
use rusqlite::{Error, Row};

// Mappers rely on the column order of the queries in
// the parent module, they use indexes and not names.

pub fn map_topic(row: &Row) -> Result<Topic, Error> {
  Ok(Topic {
    slug: row.get(0)?,
    description: row.get(1)?
  })
}

pub fn map_user(row: &Row) -> Result<User, Error> {
  Ok(User {
    username: row.get(0)?,
    name: row.get(1)?,
    avatar_url: row.get(2)?
  })
}

pub fn map_article(row: &Row) -> Result<Article, Error> {
  Ok(Article {
    article_id: row.get(0)?,
    title: row.get(1)?,
    topic: row.get(2)?,
    author: row.get(3)?,
    body: row.get(4)?,
    created_at: row.get(5)?,
    votes: row.get(6)?,
    article_img_url: row.get(7)?,
    comment_count: row.get(8)?
  })
}

pub fn map_article_summary(row: &Row) -> Result<ArticleSummary, Error> {
  Ok(ArticleSummary {
    article_id: row.get(0)?,
    title: row.get(1)?,
    topic: row.get(2)?,
    author: row.get(3)?,
    created_at: row.get(4)?,
    votes: row.get(5)?,
    article_img_url: row.get(6)?,
    comment_count: row.get(7)?
  })
}

pub fn map_comment(row: &Row) -> Result<Comment, Error> {
  Ok(Comment {
    comment_id: row.get(0)?,
    body: row.get(1)?,
    votes: row.get(2)?,
    author: row.get(3)?,
    article_id: row.get(4)?,
    created_at: row.get(5)?
  })
}

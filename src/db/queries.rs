// Query building for the listing endpoints. Sort
// columns and order keywords go through allow-lists,
// everything the client sends as a value is bound as
// a prepared statement parameter by the caller. The
// only things ever spliced into the SQL text are
// identifiers from the lists below and integers that
// were already parsed.

use std::fmt;

pub enum Order {
  Asc,
  Desc
}

impl Order {
  // Case insensitive on purpose, "?order=ASC" and
  // "?order=asc" are both accepted.
  pub fn from_param(param: &str) -> Option<Order> {
    match param.to_lowercase().as_str() {
      "asc" => Some(Order::Asc),
      "desc" => Some(Order::Desc),
      _ => None
    }
  }
}

impl fmt::Display for Order {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Order::Asc => write!(f, "ASC"),
      Order::Desc => write!(f, "DESC")
    }
  }
}

pub struct OrderBy {
  pub order: Order,
  pub field: &'static str
}

impl OrderBy {
  pub fn new(order: Order, field: &'static str) -> Self {
    OrderBy {
      order,
      field
    }
  }
}

// Maps the public sort_by keys of the article listing
// to qualified column names. Returning None means the
// key is rejected. comment_count is the aggregate
// alias from the listing query, not a column.
pub fn article_sort_column(name: &str) -> Option<&'static str> {
  match name {
    "article_id" => Some("articles.article_id"),
    "title" => Some("articles.title"),
    "topic" => Some("articles.topic"),
    "author" => Some("articles.author"),
    "created_at" => Some("articles.created_at"),
    "votes" => Some("articles.votes"),
    "article_img_url" => Some("articles.article_img_url"),
    "comment_count" => Some("comment_count"),
    _ => None
  }
}

// Decided to put "q_" in front of some args just
// because "where" is a reserved Rust keyword.
pub fn select_query_builder(
  q_fields: &[&str],
  q_from: &str,
  q_where: Option<&str>,
  group_by: Option<&str>,
  q_order: Option<OrderBy>,
  limit: Option<i64>,
  offset: Option<i64>
) -> String {
  let mut query = format!(
    "SELECT {} FROM {} ",
    q_fields.join(","),
    q_from
  );
  if let Some(wh) = q_where {
    query.push_str(
      &format!("WHERE {} ", wh)
    );
  }
  if let Some(group) = group_by {
    query.push_str(
      &format!("GROUP BY {} ", group)
    );
  }
  if let Some(order) = q_order {
    query.push_str(
      &format!("ORDER BY {} {} ", order.field, order.order)
    );
  }
  if let Some(lim) = limit {
    query.push_str(
      &format!("LIMIT {} ", lim)
    );
    if let Some(off) = offset {
      query.push_str(
        &format!("OFFSET {} ", off)
      );
    }
  }
  query
}

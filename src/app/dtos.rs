use crate::db::entities::*;
use serde::Serialize;

// Response envelopes. The API always wraps its
// payload in an object keyed after the resource, and
// the listing endpoints carry the unpaginated
// population size for pagination metadata.

#[derive(Debug, Serialize)]
pub struct TopicsEnvelope {
  pub topics: Vec<Topic>
}

#[derive(Debug, Serialize)]
pub struct TopicEnvelope {
  pub topic: Topic
}

#[derive(Debug, Serialize)]
pub struct ArticlesEnvelope {
  pub articles: Vec<ArticleSummary>,
  pub total_count: i64
}

#[derive(Debug, Serialize)]
pub struct ArticleEnvelope {
  pub article: Article
}

#[derive(Debug, Serialize)]
pub struct CommentsEnvelope {
  pub comments: Vec<Comment>,
  pub total_count: i64
}

#[derive(Debug, Serialize)]
pub struct CommentEnvelope {
  pub comment: Comment
}

#[derive(Debug, Serialize)]
pub struct UsersEnvelope {
  pub users: Vec<User>
}

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
  pub user: User
}

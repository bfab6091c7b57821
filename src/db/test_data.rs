use super::Pool;
use color_eyre::Result;
use rusqlite::params;

// Small deterministic fixture used by the data layer
// and handler tests. Article 1 carries 100 votes and
// 11 comments, article 2 has no comments at all, and
// "paper" is a topic with no articles.

const TOPICS: [(&str, &str); 3] = [
  ("mitch", "The man, the Mitch, the legend"),
  ("cats", "Not dogs"),
  ("paper", "what books are made of")
];

const USERS: [(&str, &str, &str); 4] = [
  ("butter_bridge", "jonny", "https://avatars.example/butter_bridge.jpg"),
  ("icellusedkars", "sam", "https://avatars.example/icellusedkars.jpg"),
  ("rogersop", "paul", "https://avatars.example/rogersop.jpg"),
  ("lurker", "do_nothing", "https://avatars.example/lurker.jpg")
];

// (id, title, topic, author, body, created_at, votes)
const ARTICLES: [(i64, &str, &str, &str, &str, &str, i64); 5] = [
  (
    1,
    "Living in the shadow of a great man",
    "mitch",
    "butter_bridge",
    "I find this existence challenging",
    "2020-07-09T20:11:00.000Z",
    100
  ),
  (
    2,
    "Sony Vaio; or, The Laptop",
    "mitch",
    "icellusedkars",
    "Call me Mitchell.",
    "2020-10-16T05:03:00.000Z",
    0
  ),
  (
    3,
    "Eight pug gifs that remind me of mitch",
    "mitch",
    "icellusedkars",
    "some gifs",
    "2020-11-03T09:12:00.000Z",
    0
  ),
  (
    4,
    "Student SUES Mitch!",
    "mitch",
    "rogersop",
    "We all love Mitch and his wonderful, unique typing style.",
    "2020-05-06T01:14:00.000Z",
    0
  ),
  (
    5,
    "UNCOVERED: catspiracy to bring down democracy",
    "cats",
    "rogersop",
    "Bastet walks amongst us",
    "2020-08-03T13:14:00.000Z",
    0
  )
];

// (id, body, votes, author, article_id, created_at)
const COMMENTS: [(i64, &str, i64, &str, i64, &str); 13] = [
  (1, "Oh, I've got compassion running out of my nose, pal!", 16, "butter_bridge", 1, "2020-04-06T12:17:00.000Z"),
  (2, "The beautiful thing about treasure is that it exists.", 14, "butter_bridge", 1, "2020-10-31T03:03:00.000Z"),
  (3, "Replacing the quiet elegance of the dark suit", 100, "icellusedkars", 1, "2020-03-01T01:13:00.000Z"),
  (4, "I carry a log - yes. Is it funny to you? It is not to me.", -100, "icellusedkars", 1, "2020-02-23T12:01:00.000Z"),
  (5, "I hate streaming noses", 0, "icellusedkars", 1, "2020-11-03T21:00:00.000Z"),
  (6, "I hate streaming eyes even more", 0, "icellusedkars", 1, "2020-04-11T21:02:00.000Z"),
  (7, "Lobster pot", 0, "icellusedkars", 1, "2020-05-15T20:19:00.000Z"),
  (8, "Delicious crackerbreads", 0, "icellusedkars", 1, "2020-04-14T20:19:00.000Z"),
  (9, "Superficially charming", 0, "icellusedkars", 1, "2020-01-01T03:08:00.000Z"),
  (10, "git push origin master", 0, "icellusedkars", 1, "2020-06-20T07:24:00.000Z"),
  (11, "Ambidextrous marsupial", 0, "icellusedkars", 1, "2020-09-19T23:10:00.000Z"),
  (12, "This morning, I showered for nine minutes.", 16, "butter_bridge", 3, "2020-07-21T00:20:00.000Z"),
  (13, "Fruit pastilles", 0, "icellusedkars", 3, "2020-06-15T10:25:00.000Z")
];

pub fn seed(pool: &Pool) -> Result<()> {
  let conn = pool.clone().get()?;
  for (slug, description) in TOPICS.iter() {
    conn.execute(
      "INSERT INTO topics (slug, description) VALUES (?1, ?2)",
      params![slug, description]
    )?;
  }
  for (username, name, avatar_url) in USERS.iter() {
    conn.execute(
      "INSERT INTO users (username, name, avatar_url) VALUES (?1, ?2, ?3)",
      params![username, name, avatar_url]
    )?;
  }
  for (id, title, topic, author, body, created_at, votes) in ARTICLES.iter() {
    conn.execute(
      "INSERT INTO articles \
      (article_id, title, topic, author, body, created_at, votes, article_img_url) \
      VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
      params![
        id, title, topic, author, body, created_at, votes,
        "https://images.example/default.jpg"
      ]
    )?;
  }
  for (id, body, votes, author, article_id, created_at) in COMMENTS.iter() {
    conn.execute(
      "INSERT INTO comments \
      (comment_id, body, votes, author, article_id, created_at) \
      VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
      params![id, body, votes, author, article_id, created_at]
    )?;
  }
  Ok(())
}

use crate::models::{Post, PostInput};
use crate::services::samples::SAMPLE_POSTS;
use crate::services::slug::{
    ensure_unique_slug, shorten_for_suffix, validate_slug, SlugOwner, MAX_SLUG_LEN,
};
use crate::Database;
use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, ErrorCode, OptionalExtension, TransactionBehavior};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Could not reserve a unique slug for '{0}'")]
    SlugConflict(String),

    #[error("Invalid post: {0}")]
    Invalid(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

/// Durable storage for posts. Implementations keep slugs unique across all
/// posts at every point in time.
pub trait PostStore: Send + Sync {
    /// Every post, newest first.
    fn load_all(&self) -> Result<Vec<Post>, StoreError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Exact, case-sensitive slug lookup.
    fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError>;

    /// Creates a post, or updates `existing_id`. The slug in `input` is the
    /// requested one; the returned post carries the slug actually stored.
    fn save(&self, input: PostInput, existing_id: Option<&str>) -> Result<Post, StoreError>;

    /// Unknown ids are ignored.
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

struct SlugEntry {
    id: String,
    slug: String,
}

impl SlugOwner for SlugEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

pub struct SqlitePostStore {
    db: Database,
    max_attempts: u32,
}

impl SqlitePostStore {
    pub fn new(db: Database, max_attempts: u32) -> Self {
        Self {
            db,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn count(&self) -> Result<i64, StoreError> {
        let conn = self.db.get()?;
        let count = conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Inserts the sample posts if the store is empty. Returns how many were added.
    pub fn seed_samples(&self) -> Result<usize, StoreError> {
        let mut conn = self.db.get()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?;
        if existing > 0 {
            return Ok(0);
        }

        for sample in SAMPLE_POSTS.iter() {
            tx.execute(
                "INSERT INTO posts (id, slug, title, excerpt, content, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
                (
                    uuid::Uuid::new_v4().to_string(),
                    sample.slug,
                    sample.title,
                    sample.excerpt,
                    sample.content,
                    sample.created_at,
                    sample.updated_at,
                ),
            )?;
        }
        tx.commit()?;

        tracing::info!("Seeded {} sample posts", SAMPLE_POSTS.len());
        Ok(SAMPLE_POSTS.len())
    }
}

const POST_COLUMNS: &str = "id, slug, title, excerpt, content, created_at, updated_at";

impl PostStore for SqlitePostStore {
    fn load_all(&self) -> Result<Vec<Post>, StoreError> {
        let conn = self.db.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM posts ORDER BY created_at DESC, rowid DESC",
            POST_COLUMNS
        ))?;
        let posts = stmt
            .query_map([], row_to_post)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let conn = self.db.get()?;
        Ok(post_by_id(&conn, id)?)
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let conn = self.db.get()?;
        let post = conn
            .query_row(
                &format!("SELECT {} FROM posts WHERE slug = ?", POST_COLUMNS),
                [slug],
                row_to_post,
            )
            .optional()?;
        Ok(post)
    }

    fn save(&self, input: PostInput, existing_id: Option<&str>) -> Result<Post, StoreError> {
        if input.title.trim().is_empty() {
            return Err(StoreError::Invalid("title must not be empty".to_string()));
        }
        if !validate_slug(&input.slug) {
            return Err(StoreError::Invalid(format!(
                "'{}' is not a valid slug",
                input.slug
            )));
        }

        let mut conn = self.db.get()?;

        for attempt in 1..=self.max_attempts {
            // IMMEDIATE takes the write lock before the slug scan, so no other
            // writer can claim the resolved slug between read and write.
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let current = match existing_id {
                Some(id) => Some(
                    post_by_id(&tx, id)?.ok_or_else(|| StoreError::NotFound(id.to_string()))?,
                ),
                None => None,
            };

            let slug = resolve_slug(&tx, &input.slug, existing_id)?;
            let now = now_timestamp();

            let post = match current {
                Some(current) => Post {
                    id: current.id,
                    title: input.title.clone(),
                    excerpt: input.excerpt.clone(),
                    content: input.content.clone(),
                    slug,
                    created_at: current.created_at,
                    updated_at: now,
                },
                None => Post {
                    id: uuid::Uuid::new_v4().to_string(),
                    title: input.title.clone(),
                    excerpt: input.excerpt.clone(),
                    content: input.content.clone(),
                    slug,
                    created_at: now.clone(),
                    updated_at: now,
                },
            };

            let written = if existing_id.is_some() {
                tx.execute(
                    "UPDATE posts SET slug = ?, title = ?, excerpt = ?, content = ?, updated_at = ? WHERE id = ?",
                    (
                        &post.slug,
                        &post.title,
                        &post.excerpt,
                        &post.content,
                        &post.updated_at,
                        &post.id,
                    ),
                )
            } else {
                tx.execute(
                    "INSERT INTO posts (id, slug, title, excerpt, content, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
                    (
                        &post.id,
                        &post.slug,
                        &post.title,
                        &post.excerpt,
                        &post.content,
                        &post.created_at,
                        &post.updated_at,
                    ),
                )
            };

            match written {
                Ok(_) => {
                    tx.commit()?;
                    if post.slug != input.slug {
                        tracing::debug!("Slug '{}' taken, stored as '{}'", input.slug, post.slug);
                    }
                    return Ok(post);
                }
                Err(e) if is_unique_violation(&e) => {
                    tracing::warn!(
                        "Slug '{}' rejected by unique index (attempt {}/{})",
                        post.slug,
                        attempt,
                        self.max_attempts
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(StoreError::SlugConflict(input.slug))
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let conn = self.db.get()?;
        let removed = conn.execute("DELETE FROM posts WHERE id = ?", [id])?;
        if removed == 0 {
            tracing::debug!("Delete of unknown post id={}", id);
        }
        Ok(())
    }
}

pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn post_by_id(conn: &Connection, id: &str) -> rusqlite::Result<Option<Post>> {
    conn.query_row(
        &format!("SELECT {} FROM posts WHERE id = ?", POST_COLUMNS),
        [id],
        row_to_post,
    )
    .optional()
}

/// Picks a free slug for `requested`, shortening the base when a numbered
/// variant would exceed `MAX_SLUG_LEN`.
fn resolve_slug(
    conn: &Connection,
    requested: &str,
    exclude_id: Option<&str>,
) -> Result<String, StoreError> {
    let mut base = requested.to_string();
    loop {
        let taken = slug_family(conn, &base)?;
        let slug = ensure_unique_slug(&base, &taken, exclude_id);
        match shorten_for_suffix(&base, &slug) {
            Some(shorter) => base = shorter,
            None if slug.len() <= MAX_SLUG_LEN => return Ok(slug),
            None => return Err(StoreError::SlugConflict(requested.to_string())),
        }
    }
}

/// The base slug and every slug that could be one of its numbered variants.
fn slug_family(conn: &Connection, base: &str) -> rusqlite::Result<Vec<SlugEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, slug FROM posts WHERE slug = ?1 OR substr(slug, 1, length(?1) + 1) = ?1 || '-'",
    )?;
    let entries = stmt
        .query_map([base], |row| {
            Ok(SlugEntry {
                id: row.get(0)?,
                slug: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

fn row_to_post(row: &rusqlite::Row) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        excerpt: row.get(3)?,
        content: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

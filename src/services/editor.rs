use crate::models::{Post, PostDraft, PostInput};
use crate::services::slug::{
    ensure_unique_slug, fallback_slug, generate_slug, shorten_for_suffix, MAX_SLUG_LEN,
};
use crate::services::store::{PostStore, StoreError};
use crate::Config;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use thiserror::Error;

static HTML_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Slug suggestion while a title is typed. Only new posts get one; an
/// existing post keeps its slug unless the user edits it.
pub fn prefill_slug(title: &str, is_new: bool) -> Option<String> {
    if !is_new || title.is_empty() {
        return None;
    }
    Some(generate_slug(title))
}

/// The slug a save would request before uniqueness is applied.
pub fn requested_slug(title: &str, slug: Option<&str>, config: &Config) -> String {
    let user_slug = slug.map(str::trim).filter(|s| !s.is_empty());
    let mut slug = match user_slug {
        Some(s) => generate_slug(s),
        None => generate_slug(title),
    };
    if slug.is_empty() {
        slug = fallback_slug(title, &config.slug.fallback);
    }
    if slug.len() > MAX_SLUG_LEN {
        // generate_slug output is ASCII, so byte truncation is safe
        slug.truncate(MAX_SLUG_LEN);
        slug = slug.trim_end_matches('-').to_string();
    }
    slug
}

/// Plain-text excerpt: tags removed, whitespace collapsed, and `...` added
/// only when the text was cut at `max_chars`.
pub fn derive_excerpt(content: &str, max_chars: usize) -> String {
    let text = HTML_TAGS.replace_all(content, "");
    let text = WHITESPACE_RUNS.replace_all(text.trim(), " ");

    if text.chars().count() <= max_chars {
        text.into_owned()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated.trim_end())
    }
}

/// Validates and normalises editor input into what the store accepts.
pub fn prepare(draft: PostDraft, config: &Config) -> Result<PostInput, EditorError> {
    let title = draft.title.trim().to_string();
    let content = ammonia::clean(draft.content.trim()).trim().to_string();

    if title.is_empty() || content.is_empty() {
        return Err(EditorError::Validation(
            "Please fill in both title and content".to_string(),
        ));
    }

    let excerpt = match draft.excerpt.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() => e.to_string(),
        _ => derive_excerpt(&content, config.content.excerpt_length),
    };

    let slug = requested_slug(&title, draft.slug.as_deref(), config);

    Ok(PostInput {
        title,
        excerpt,
        content,
        slug,
    })
}

/// The slug a save would end up with right now, for display in the editor.
/// The store resolves again when the post is actually written.
pub fn preview_slug<S: PostStore + ?Sized>(
    store: &S,
    title: &str,
    slug: Option<&str>,
    exclude_id: Option<&str>,
    config: &Config,
) -> Result<String, EditorError> {
    let mut base = requested_slug(title, slug, config);
    let posts = store.load_all()?;
    loop {
        let slug = ensure_unique_slug(&base, &posts, exclude_id);
        match shorten_for_suffix(&base, &slug) {
            Some(shorter) => base = shorter,
            None => return Ok(slug),
        }
    }
}

pub fn save_post<S: PostStore + ?Sized>(
    store: &S,
    draft: PostDraft,
    editing_id: Option<&str>,
    config: &Config,
) -> Result<Post, EditorError> {
    let input = prepare(draft, config)?;

    match store.save(input, editing_id) {
        Ok(post) => {
            tracing::info!("Saved post id={} slug={}", post.id, post.slug);
            Ok(post)
        }
        Err(e) => {
            tracing::error!("Error saving post: {}", e);
            Err(e.into())
        }
    }
}

pub fn delete_post<S: PostStore + ?Sized>(store: &S, id: &str) -> Result<(), EditorError> {
    match store.delete(id) {
        Ok(()) => {
            tracing::info!("Deleted post id={}", id);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error deleting post: {}", e);
            Err(e.into())
        }
    }
}

/// Admin view state: the loaded post list plus the post being edited.
/// Writes go to the store first; the list only changes once they succeed.
pub struct AdminSession {
    store: Arc<dyn PostStore>,
    config: Config,
    posts: Vec<Post>,
    editing: Option<Post>,
}

impl AdminSession {
    pub fn open(store: Arc<dyn PostStore>, config: Config) -> Result<Self, EditorError> {
        let posts = store.load_all()?;
        Ok(Self {
            store,
            config,
            posts,
            editing: None,
        })
    }

    pub fn load(&mut self) -> Result<(), EditorError> {
        self.posts = self.store.load_all()?;
        Ok(())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn editing(&self) -> Option<&Post> {
        self.editing.as_ref()
    }

    pub fn begin_new(&mut self) {
        self.editing = None;
    }

    pub fn begin_edit(&mut self, id: &str) -> Result<&Post, EditorError> {
        let post = self
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(&*self.editing.insert(post))
    }

    pub fn cancel(&mut self) {
        self.editing = None;
    }

    pub fn prefill_slug(&self, title: &str) -> Option<String> {
        prefill_slug(title, self.editing.is_none())
    }

    pub fn save(&mut self, draft: PostDraft) -> Result<Post, EditorError> {
        let editing_id = self.editing.as_ref().map(|p| p.id.clone());
        let saved = save_post(
            self.store.as_ref(),
            draft,
            editing_id.as_deref(),
            &self.config,
        )?;

        match editing_id {
            Some(id) => {
                for post in self.posts.iter_mut().filter(|p| p.id == id) {
                    *post = saved.clone();
                }
            }
            None => self.posts.insert(0, saved.clone()),
        }
        self.editing = None;

        Ok(saved)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), EditorError> {
        delete_post(self.store.as_ref(), id)?;
        self.posts.retain(|p| p.id != id);
        if self.editing.as_ref().is_some_and(|p| p.id == id) {
            self.editing = None;
        }
        Ok(())
    }
}

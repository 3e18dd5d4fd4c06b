use serde::{Deserialize, Serialize};

/// A stored post. Field names follow the JSON contract shared with the admin UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub slug: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Post {
    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// The caller-owned part of a post; the store stamps id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub slug: String,
}

/// Raw editor input before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: Some(post.excerpt.clone()),
            content: post.content.clone(),
            slug: Some(post.slug.clone()),
        }
    }
}

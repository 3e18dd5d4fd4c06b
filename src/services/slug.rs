use crate::models::Post;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_SLUG_LEN: usize = 200;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Maps a title to a URL-safe slug. Total: anything without ASCII word
/// characters comes back as an empty string.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let hyphenated = WHITESPACE_RUNS.replace_all(&kept, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Slug for titles the generator reduces to nothing: transliterate to ASCII
/// first, then use `fallback` if even that is empty.
pub fn fallback_slug(title: &str, fallback: &str) -> String {
    let transliterated = generate_slug(&::slug::slugify(title));
    if transliterated.is_empty() {
        fallback.to_string()
    } else {
        transliterated
    }
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Anything that occupies a slug on behalf of an id.
pub trait SlugOwner {
    fn id(&self) -> &str;
    fn slug(&self) -> &str;
}

impl SlugOwner for Post {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Returns `base_slug` if no other owner holds it, otherwise the first free
/// `base_slug-N` for N = 1, 2, ... The owner whose id equals `exclude_id`
/// never counts as a collision, so a post can keep its own slug on re-save.
pub fn ensure_unique_slug<T: SlugOwner>(
    base_slug: &str,
    existing: &[T],
    exclude_id: Option<&str>,
) -> String {
    let is_taken = |candidate: &str| {
        existing
            .iter()
            .any(|owner| owner.slug() == candidate && Some(owner.id()) != exclude_id)
    };

    if !is_taken(base_slug) {
        return base_slug.to_string();
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = format!("{}-{}", base_slug, counter);
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// When a resolved `slug` outgrows `MAX_SLUG_LEN`, returns `base` cut short
/// enough for the same numeric suffix to fit. Resolving again against the
/// shorter base yields a slug within the limit. `None` means `slug` already
/// fits or `base` cannot shrink any further.
pub fn shorten_for_suffix(base: &str, slug: &str) -> Option<String> {
    if slug.len() <= MAX_SLUG_LEN {
        return None;
    }
    let suffix_len = slug.len().saturating_sub(base.len());
    let keep = MAX_SLUG_LEN.saturating_sub(suffix_len).min(base.len());
    let shorter = base.get(..keep)?.trim_end_matches('-');
    if shorter.is_empty() {
        None
    } else {
        Some(shorter.to_string())
    }
}

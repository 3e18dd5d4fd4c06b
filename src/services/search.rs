use crate::models::Post;

/// Case-insensitive substring match on title or excerpt. A blank term matches everything.
pub fn search_posts(posts: Vec<Post>, term: &str) -> Vec<Post> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return posts;
    }

    posts
        .into_iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.excerpt.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Estimated reading time in minutes, never less than one.
pub fn reading_time(content: &str, words_per_minute: usize) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(words_per_minute.max(1)).max(1)
}

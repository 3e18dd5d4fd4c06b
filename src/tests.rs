#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::services::slug::{fallback_slug, generate_slug, validate_slug};

        #[test]
        fn test_generate_slug_basic() {
            assert_eq!(generate_slug("Hello World"), "hello-world");
        }

        #[test]
        fn test_generate_slug_special_characters() {
            assert_eq!(generate_slug("Hello, World!"), "hello-world");
        }

        #[test]
        fn test_generate_slug_multiple_spaces() {
            assert_eq!(generate_slug("   multiple   spaces   "), "multiple-spaces");
        }

        #[test]
        fn test_generate_slug_empty() {
            assert_eq!(generate_slug(""), "");
        }

        #[test]
        fn test_generate_slug_only_punctuation() {
            assert_eq!(generate_slug("!!! ???"), "");
        }

        #[test]
        fn test_generate_slug_numbers() {
            assert_eq!(generate_slug("Article 123"), "article-123");
        }

        #[test]
        fn test_generate_slug_keeps_underscore() {
            assert_eq!(generate_slug("snake_case Title"), "snake_case-title");
        }

        #[test]
        fn test_generate_slug_collapses_hyphens() {
            assert_eq!(generate_slug("a - b -- c"), "a-b-c");
            assert_eq!(generate_slug("-leading and trailing-"), "leading-and-trailing");
        }

        #[test]
        fn test_generate_slug_other_whitespace() {
            assert_eq!(generate_slug("Tab\tand\nnewline"), "tab-and-newline");
        }

        #[test]
        fn test_generate_slug_drops_non_ascii_letters() {
            assert_eq!(generate_slug("Café au lait"), "caf-au-lait");
            assert_eq!(generate_slug("Привет мир"), "");
        }

        #[test]
        fn test_generate_slug_output_shape() {
            let inputs = [
                "Hello, World!",
                "  --Rust &  Systems-- ",
                "C++ vs. C#: a comparison",
                "emoji 🚀 launch",
                "UPPER lower MiXeD",
                "a\u{00a0}b",
                "___",
            ];
            for input in inputs {
                let slug = generate_slug(input);
                assert!(
                    slug.chars().all(|c| c.is_ascii_lowercase()
                        || c.is_ascii_digit()
                        || c == '_'
                        || c == '-'),
                    "unexpected character in {:?}",
                    slug
                );
                assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{:?}", slug);
                assert!(!slug.contains("--"), "{:?}", slug);
            }
        }

        #[test]
        fn test_generate_slug_idempotent() {
            for input in ["Hello, World!", "  spaced   out  ", "already-a-slug", "x_y-z 9"] {
                let once = generate_slug(input);
                assert_eq!(generate_slug(&once), once);
            }
        }

        #[test]
        fn test_generate_slug_random_unicode() {
            use rand::Rng;

            const POOL: &[char] = &[
                'a', 'Z', '7', '_', '-', ' ', '\t', '\n', '!', 'é', 'ß', 'İ', 'K', 'Ж', '中',
                '🚀', '\u{00a0}', '\u{2028}', '\u{3000}',
            ];

            let mut rng = rand::thread_rng();
            for _ in 0..500 {
                let len = rng.gen_range(0..40);
                let input: String = (0..len)
                    .map(|_| {
                        if rng.gen_bool(0.5) {
                            POOL[rng.gen_range(0..POOL.len())]
                        } else {
                            rng.gen::<char>()
                        }
                    })
                    .collect();

                let slug = generate_slug(&input);
                assert!(
                    slug.chars().all(|c| c.is_ascii_lowercase()
                        || c.is_ascii_digit()
                        || c == '_'
                        || c == '-'),
                    "{:?} -> {:?}",
                    input,
                    slug
                );
                assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{:?}", input);
                assert!(!slug.contains("--"), "{:?}", input);
                assert_eq!(generate_slug(&slug), slug, "{:?}", input);
            }
        }

        #[test]
        fn test_fallback_slug_transliterates() {
            assert_eq!(fallback_slug("Привет мир", "untitled"), "privet-mir");
        }

        #[test]
        fn test_fallback_slug_uses_fallback_word() {
            assert_eq!(fallback_slug("!!!", "untitled"), "untitled");
        }

        #[test]
        fn test_validate_slug_valid() {
            assert!(validate_slug("hello-world"));
            assert!(validate_slug("my-blog-post-2024"));
            assert!(validate_slug("snake_case"));
            assert!(validate_slug("a"));
            assert!(validate_slug("123"));
        }

        #[test]
        fn test_validate_slug_invalid() {
            assert!(!validate_slug(""));
            assert!(!validate_slug("Hello-World"));
            assert!(!validate_slug("hello world"));
            assert!(!validate_slug("hello!world"));
            assert!(!validate_slug("-hello"));
            assert!(!validate_slug("hello-"));
            assert!(!validate_slug("hello--world"));
        }

        #[test]
        fn test_validate_slug_length() {
            assert!(validate_slug(&"a".repeat(200)));
            assert!(!validate_slug(&"a".repeat(201)));
        }
    }

    mod resolver_tests {
        use crate::models::Post;
        use crate::services::slug::{ensure_unique_slug, shorten_for_suffix, MAX_SLUG_LEN};

        fn post(id: &str, slug: &str) -> Post {
            Post {
                id: id.to_string(),
                title: slug.to_string(),
                excerpt: String::new(),
                content: String::new(),
                slug: slug.to_string(),
                created_at: "2024-01-01T00:00:00.000Z".to_string(),
                updated_at: "2024-01-01T00:00:00.000Z".to_string(),
            }
        }

        #[test]
        fn test_unused_slug_is_returned_unchanged() {
            let posts = vec![post("1", "foo")];
            assert_eq!(ensure_unique_slug("bar", &posts, None), "bar");
        }

        #[test]
        fn test_shorten_for_suffix_makes_room() {
            let base = "a".repeat(198);
            let shorter = shorten_for_suffix(&base, &format!("{}-10", base)).unwrap();
            assert_eq!(shorter, "a".repeat(197));
            assert!(shorter.len() + "-10".len() <= MAX_SLUG_LEN);
        }

        #[test]
        fn test_shorten_for_suffix_leaves_fitting_slug() {
            let base = "a".repeat(198);
            assert_eq!(shorten_for_suffix(&base, &format!("{}-1", base)), None);
            assert_eq!(shorten_for_suffix("foo", "foo-1"), None);
        }

        #[test]
        fn test_shorten_for_suffix_trims_trailing_hyphen() {
            let base = format!("{}-b", "a".repeat(196));
            assert_eq!(
                shorten_for_suffix(&base, &format!("{}-10", base)),
                Some("a".repeat(196))
            );
        }

        #[test]
        fn test_empty_collection() {
            let posts: Vec<Post> = Vec::new();
            assert_eq!(ensure_unique_slug("bar", &posts, None), "bar");
        }

        #[test]
        fn test_skips_taken_suffixes() {
            let posts = vec![post("1", "foo"), post("2", "foo-1")];
            assert_eq!(ensure_unique_slug("foo", &posts, None), "foo-2");
        }

        #[test]
        fn test_fills_first_gap() {
            let posts = vec![post("1", "foo"), post("2", "foo-2")];
            assert_eq!(ensure_unique_slug("foo", &posts, None), "foo-1");
        }

        #[test]
        fn test_self_exclusion_keeps_own_slug() {
            let posts = vec![post("1", "foo"), post("2", "foo-1")];
            assert_eq!(ensure_unique_slug("foo", &posts, Some("1")), "foo");
        }

        #[test]
        fn test_self_exclusion_applies_to_suffixed_candidates() {
            let posts = vec![post("1", "foo"), post("2", "foo-1")];
            assert_eq!(ensure_unique_slug("foo", &posts, Some("2")), "foo-1");
        }

        #[test]
        fn test_unknown_exclude_id_changes_nothing() {
            let posts = vec![post("1", "foo")];
            assert_eq!(ensure_unique_slug("foo", &posts, Some("99")), "foo-1");
        }

        #[test]
        fn test_never_returns_a_slug_held_by_another_post() {
            let posts: Vec<Post> = (0..20)
                .map(|i| {
                    let slug = if i == 0 {
                        "busy".to_string()
                    } else {
                        format!("busy-{}", i)
                    };
                    post(&i.to_string(), &slug)
                })
                .collect();

            for exclude in [None, Some("0"), Some("7"), Some("19")] {
                let slug = ensure_unique_slug("busy", &posts, exclude);
                assert!(
                    !posts
                        .iter()
                        .any(|p| p.slug == slug && Some(p.id.as_str()) != exclude),
                    "{} collides (exclude {:?})",
                    slug,
                    exclude
                );
            }
            assert_eq!(ensure_unique_slug("busy", &posts, None), "busy-20");
        }

        #[test]
        fn test_does_not_modify_input() {
            let posts = vec![post("1", "foo"), post("2", "foo-1")];
            let before = posts.clone();
            let _ = ensure_unique_slug("foo", &posts, None);
            assert_eq!(posts, before);
        }
    }

    mod search_tests {
        use crate::models::Post;
        use crate::services::search::{reading_time, search_posts};

        fn post(title: &str, excerpt: &str) -> Post {
            Post {
                id: title.to_string(),
                title: title.to_string(),
                excerpt: excerpt.to_string(),
                content: String::new(),
                slug: title.to_lowercase().replace(' ', "-"),
                created_at: "2024-01-01T00:00:00.000Z".to_string(),
                updated_at: "2024-01-01T00:00:00.000Z".to_string(),
            }
        }

        fn sample() -> Vec<Post> {
            vec![
                post("Welcome to BlogCraft", "Modern blogging"),
                post("The Future of Web Development", "Trends and technologies"),
                post("Building Responsive Layouts", "Layouts for all devices"),
            ]
        }

        #[test]
        fn test_search_matches_title_case_insensitive() {
            let results = search_posts(sample(), "FUTURE");
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].title, "The Future of Web Development");
        }

        #[test]
        fn test_search_matches_excerpt() {
            let results = search_posts(sample(), "devices");
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].title, "Building Responsive Layouts");
        }

        #[test]
        fn test_search_blank_term_returns_all() {
            assert_eq!(search_posts(sample(), "").len(), 3);
            assert_eq!(search_posts(sample(), "   ").len(), 3);
        }

        #[test]
        fn test_search_no_match() {
            assert!(search_posts(sample(), "kubernetes").is_empty());
        }

        #[test]
        fn test_reading_time_minimum_one_minute() {
            assert_eq!(reading_time("", 200), 1);
            assert_eq!(reading_time("Hello world", 200), 1);
        }

        #[test]
        fn test_reading_time_rounds_up() {
            assert_eq!(reading_time(&"word ".repeat(200), 200), 1);
            assert_eq!(reading_time(&"word ".repeat(201), 200), 2);
            assert_eq!(reading_time(&"word ".repeat(400), 200), 2);
        }
    }

    mod editor_tests {
        use crate::models::PostDraft;
        use crate::services::editor::{
            derive_excerpt, prefill_slug, prepare, requested_slug, EditorError,
        };
        use crate::services::slug::validate_slug;
        use crate::Config;

        fn config() -> Config {
            Config::new_site("Test")
        }

        fn draft(title: &str, content: &str) -> PostDraft {
            PostDraft {
                title: title.to_string(),
                content: content.to_string(),
                ..Default::default()
            }
        }

        #[test]
        fn test_prefill_slug_for_new_post() {
            assert_eq!(
                prefill_slug("Hello, World!", true),
                Some("hello-world".to_string())
            );
        }

        #[test]
        fn test_prefill_slug_skipped_for_existing_post() {
            assert_eq!(prefill_slug("Hello, World!", false), None);
        }

        #[test]
        fn test_prefill_slug_skipped_for_empty_title() {
            assert_eq!(prefill_slug("", true), None);
        }

        #[test]
        fn test_derive_excerpt_short_content() {
            assert_eq!(
                derive_excerpt("<p>Hello <strong>world</strong></p>", 150),
                "Hello world"
            );
        }

        #[test]
        fn test_derive_excerpt_keeps_words_split_by_inline_tags() {
            assert_eq!(
                derive_excerpt("<p>Hel<b>lo</b> world</p>", 150),
                "Hello world"
            );
        }

        #[test]
        fn test_derive_excerpt_collapses_whitespace_between_blocks() {
            assert_eq!(
                derive_excerpt("<h1>Title</h1>\n\n<p>First   line</p>", 150),
                "Title First line"
            );
        }

        #[test]
        fn test_derive_excerpt_truncates() {
            let content = format!("<p>{}</p>", "abcde ".repeat(50));
            let excerpt = derive_excerpt(&content, 20);
            assert!(excerpt.ends_with("..."));
            assert!(!excerpt.contains('<'));
            assert_eq!(excerpt, "abcde abcde abcde ab...");
        }

        #[test]
        fn test_requested_slug_keeps_valid_slug() {
            let long = "a".repeat(200);
            assert_eq!(requested_slug("Other", Some(long.as_str()), &config()), long);
            assert_eq!(
                requested_slug("Other", Some("hello-world-10"), &config()),
                "hello-world-10"
            );
        }

        #[test]
        fn test_prepare_rejects_blank_title() {
            let result = prepare(draft("   ", "<p>Body</p>"), &config());
            assert!(matches!(result, Err(EditorError::Validation(_))));
        }

        #[test]
        fn test_prepare_rejects_blank_content() {
            let result = prepare(draft("Title", "  "), &config());
            assert!(matches!(result, Err(EditorError::Validation(_))));
        }

        #[test]
        fn test_prepare_rejects_content_that_sanitizes_to_nothing() {
            let result = prepare(draft("Title", "<script>alert(1)</script>"), &config());
            assert!(matches!(result, Err(EditorError::Validation(_))));
        }

        #[test]
        fn test_prepare_sanitizes_content() {
            let input = prepare(
                draft("Title", "<p>Safe</p><script>alert(1)</script>"),
                &config(),
            )
            .unwrap();
            assert_eq!(input.content, "<p>Safe</p>");
        }

        #[test]
        fn test_prepare_trims_and_generates_slug() {
            let input = prepare(draft("  Hello, World!  ", "<p>Body text</p>"), &config()).unwrap();
            assert_eq!(input.title, "Hello, World!");
            assert_eq!(input.slug, "hello-world");
            assert_eq!(input.excerpt, "Body text");
        }

        #[test]
        fn test_prepare_keeps_given_excerpt() {
            let mut d = draft("Title", "<p>Body</p>");
            d.excerpt = Some("  Handwritten summary ".to_string());
            let input = prepare(d, &config()).unwrap();
            assert_eq!(input.excerpt, "Handwritten summary");
        }

        #[test]
        fn test_prepare_normalizes_user_slug() {
            let mut d = draft("Title", "<p>Body</p>");
            d.slug = Some(" My Custom Slug ".to_string());
            let input = prepare(d, &config()).unwrap();
            assert_eq!(input.slug, "my-custom-slug");
        }

        #[test]
        fn test_prepare_blank_user_slug_uses_title() {
            let mut d = draft("From The Title", "<p>Body</p>");
            d.slug = Some("   ".to_string());
            let input = prepare(d, &config()).unwrap();
            assert_eq!(input.slug, "from-the-title");
        }

        #[test]
        fn test_requested_slug_transliterates_non_latin_title() {
            assert_eq!(requested_slug("Привет мир", None, &config()), "privet-mir");
        }

        #[test]
        fn test_requested_slug_falls_back_for_punctuation() {
            assert_eq!(requested_slug("?!", None, &config()), "untitled");
        }

        #[test]
        fn test_requested_slug_truncates_long_titles() {
            let title = "word ".repeat(100);
            let slug = requested_slug(&title, None, &config());
            assert!(slug.len() <= 200);
            assert!(validate_slug(&slug));
        }
    }

    mod config_tests {
        use crate::Config;

        const MINIMAL: &str = r#"
[site]
title = "Test Blog"

[database]
path = "./data/test.db"
"#;

        #[test]
        fn test_parse_minimal_applies_defaults() {
            let config = Config::parse(MINIMAL).unwrap();
            assert_eq!(config.site.title, "Test Blog");
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.database.pool_size, 10);
            assert_eq!(config.content.excerpt_length, 150);
            assert_eq!(config.content.words_per_minute, 200);
            assert!(config.content.seed_samples);
            assert_eq!(config.slug.max_attempts, 5);
            assert_eq!(config.slug.fallback, "untitled");
        }

        #[test]
        fn test_rejects_zero_excerpt_length() {
            let toml = format!("{}\n[content]\nexcerpt_length = 0\n", MINIMAL);
            assert!(Config::parse(&toml).is_err());
        }

        #[test]
        fn test_rejects_invalid_fallback_slug() {
            let toml = format!("{}\n[slug]\nfallback = \"Not A Slug\"\n", MINIMAL);
            assert!(Config::parse(&toml).is_err());
        }

        #[test]
        fn test_rejects_zero_max_attempts() {
            let toml = format!("{}\n[slug]\nmax_attempts = 0\n", MINIMAL);
            assert!(Config::parse(&toml).is_err());
        }

        #[test]
        fn test_new_site_config_round_trips_through_toml() {
            let config = Config::new_site("My Blog");
            let written = toml::to_string_pretty(&config).unwrap();
            let parsed = Config::parse(&written).unwrap();
            assert_eq!(parsed.site.title, "My Blog");
            assert_eq!(parsed.database.path, config.database.path);
        }
    }
}

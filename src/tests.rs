#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::models::EntryId;
        use crate::services::slug::{entry_slug, validate_slug};

        fn slug(title: &str) -> String {
            entry_slug(Some(title), &EntryId::new("1"))
        }

        #[test]
        fn test_slug_basic() {
            assert_eq!(slug("Hello World"), "hello-world");
        }

        #[test]
        fn test_slug_punctuation_to_dashes() {
            assert_eq!(slug("a.b c,d;e/f\\g_h"), "a-b-c-d-e-f-g-h");
        }

        #[test]
        fn test_slug_strips_unknown_punctuation() {
            assert_eq!(slug("Hello, World!"), "hello-world");
        }

        #[test]
        fn test_slug_collapses_dash_runs() {
            assert_eq!(slug("Hello -- World"), "hello-world");
            assert_eq!(slug("Hello,,  ,World"), "hello-world");
        }

        #[test]
        fn test_slug_trims_leading_trailing_dashes() {
            assert_eq!(slug("  Hello World  "), "hello-world");
            assert_eq!(slug("...Hello World..."), "hello-world");
        }

        #[test]
        fn test_slug_latin1_accents() {
            assert_eq!(slug("é é é"), "e-e-e");
            assert_eq!(slug("Café au lait"), "cafe-au-lait");
            assert_eq!(slug("Ångström"), "angstrom");
            assert_eq!(slug("señor"), "senor");
        }

        #[test]
        fn test_slug_latin1_expansions() {
            assert_eq!(slug("Ærø"), "aero");
            assert_eq!(slug("straße"), "strasse");
        }

        #[test]
        fn test_slug_superscripts_and_multiply() {
            assert_eq!(slug("E=mc²"), "emc2");
            assert_eq!(slug("x³"), "x3");
            assert_eq!(slug("3×4"), "3x4");
        }

        #[test]
        fn test_slug_division_sign_removed() {
            // The division sign has no mapping and drops out entirely.
            assert_eq!(slug("10÷2"), "102");
        }

        #[test]
        fn test_slug_missing_title_falls_back_to_id() {
            assert_eq!(entry_slug(None, &EntryId::new("42")), "42");
            assert_eq!(entry_slug(Some(""), &EntryId::new("42")), "42");
        }

        #[test]
        fn test_slug_unmappable_title_falls_back_to_id() {
            // All-Chinese and all-symbol titles strip to nothing.
            assert_eq!(entry_slug(Some("你好世界"), &EntryId::new("7")), "7");
            assert_eq!(entry_slug(Some("—"), &EntryId::new("7")), "7");
        }

        #[test]
        fn test_slug_idempotent() {
            for title in ["Hello, World!", "é é é", "a.b c,d", "straße  ²"] {
                let once = slug(title);
                assert_eq!(slug(&once), once);
            }
        }

        #[test]
        fn test_validate_slug() {
            assert!(validate_slug("hello-world"));
            assert!(validate_slug("post-2024"));
            assert!(!validate_slug(""));
            assert!(!validate_slug("Hello-World"));
            assert!(!validate_slug("hello_world"));
        }
    }

    mod classify_tests {
        use crate::services::permalink::{
            classify, is_day_permalink, is_entry_permalink, is_month_permalink, PathKind,
        };

        #[test]
        fn test_day_shape() {
            assert!(is_day_permalink("/2011/09/03"));
            assert!(!is_day_permalink("/2011/09"));
            assert!(!is_day_permalink("/2011/9/3"));
            assert!(!is_day_permalink("/2011/09/03.html"));
            assert!(!is_day_permalink("2011/09/03"));
        }

        #[test]
        fn test_month_shape() {
            assert!(is_month_permalink("/2011/09"));
            assert!(!is_month_permalink("/2011/09/03"));
            assert!(!is_month_permalink("/2011/9"));
            assert!(!is_month_permalink("/2011"));
        }

        #[test]
        fn test_entry_shape() {
            assert!(is_entry_permalink("/my-post-title"));
            assert!(is_entry_permalink("/hello_2"));
            assert!(is_entry_permalink("/"));
            assert!(!is_entry_permalink("/a/b"));
            assert!(!is_entry_permalink("/my post"));
        }

        #[test]
        fn test_classify_priority() {
            // Most specific shape wins.
            assert_eq!(classify("/2011/09/03"), PathKind::Day);
            assert_eq!(classify("/2011/09"), PathKind::Month);
            assert_eq!(classify("/my-post"), PathKind::Entry);
            // All digits but no slashes: a valid entry slug.
            assert_eq!(classify("/20110903"), PathKind::Entry);
        }

        #[test]
        fn test_classify_unknown() {
            assert_eq!(classify("/2011/09/03/extra"), PathKind::Unknown);
            assert_eq!(classify("/with.dot"), PathKind::Unknown);
            assert_eq!(classify(""), PathKind::Unknown);
        }
    }

    mod entry_tests {
        use crate::models::{Entry, EntryId};
        use chrono::{TimeZone, Utc};

        #[test]
        fn test_entry_id_display() {
            assert_eq!(EntryId::new("1234567890").to_string(), "1234567890");
            assert_eq!(EntryId::from(42i64).as_str(), "42");
        }

        #[test]
        fn test_title_text_empty_is_none() {
            let at = Utc.with_ymd_and_hms(2011, 9, 3, 12, 0, 0).unwrap();
            let untitled = Entry::new("1", Some(""), at);
            assert_eq!(untitled.title_text(), None);
            let titled = Entry::new("2", Some("Hello"), at);
            assert_eq!(titled.title_text(), Some("Hello"));
        }

        #[test]
        fn test_disable_responses() {
            let at = Utc.with_ymd_and_hms(2011, 9, 3, 12, 0, 0).unwrap();
            let mut entry = Entry::new("1", Some("Hello"), at);
            assert!(entry.comments_enabled);
            assert!(entry.trackbacks_enabled);
            entry.disable_responses();
            assert!(!entry.comments_enabled);
            assert!(!entry.trackbacks_enabled);
        }
    }

    mod archive_tests {
        use crate::models::YearArchive;

        #[test]
        fn test_record_and_lookup() {
            let mut year = YearArchive::new(2011);
            year.record(9, 3);
            year.record(9, 1);
            year.record(2, 14);

            let september = year.month(9).unwrap();
            assert_eq!(september.day(3).unwrap().day, 3);
            assert_eq!(september.day(1).unwrap().day, 1);
            assert!(september.day(2).is_none());
            assert!(year.month(10).is_none());
        }

        #[test]
        fn test_record_keeps_nodes_sorted() {
            let mut year = YearArchive::new(2011);
            year.record(9, 3);
            year.record(2, 14);
            year.record(9, 1);

            let months: Vec<u32> = year.months().iter().map(|m| m.month).collect();
            assert_eq!(months, vec![2, 9]);
            let days: Vec<u32> = year.month(9).unwrap().days().iter().map(|d| d.day).collect();
            assert_eq!(days, vec![1, 3]);
        }
    }

    mod config_tests {
        use crate::{Config, GenerationMode};
        use std::io::Write;
        use std::path::Path;

        #[test]
        fn test_config_load_missing_file() {
            let result = Config::load(Path::new("/nonexistent/path.toml"));
            assert!(result.is_err());
        }

        #[test]
        fn test_config_load_valid_toml() {
            let config_path = std::env::temp_dir().join("test_waypost_config.toml");

            let config_content = r#"
[blog]
name = "journal"
url = "http://localhost:3000/blog"

[permalink]
generation = "serialized"
"#;

            let mut file = std::fs::File::create(&config_path).unwrap();
            file.write_all(config_content.as_bytes()).unwrap();

            let config = Config::load(&config_path).unwrap();
            assert_eq!(config.blog.name, "journal");
            assert_eq!(config.blog.url, "http://localhost:3000/blog");
            assert_eq!(config.permalink.generation, GenerationMode::Serialized);

            std::fs::remove_file(&config_path).ok();
        }

        #[test]
        fn test_config_defaults() {
            let config: Config = toml::from_str(
                r#"
[blog]
url = "http://localhost:3000/blog"
"#,
            )
            .unwrap();
            assert_eq!(config.blog.name, "main");
            assert_eq!(config.permalink.generation, GenerationMode::OnDemand);
        }
    }
}

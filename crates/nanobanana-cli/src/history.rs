//! Generated image history, newest first

use anyhow::Result;
use chrono::{DateTime, Local};
use nanobanana::GeneratedImage;

use crate::store::LocalStore;

pub const HISTORY_KEY: &str = "nano-banana-history";
pub const MAX_HISTORY_ITEMS: usize = 50;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

pub fn get_history(store: &LocalStore) -> Vec<GeneratedImage> {
    store.get(HISTORY_KEY)
}

/// Prepend a new entry, keeping at most [`MAX_HISTORY_ITEMS`]
pub fn save_to_history(
    store: &LocalStore,
    base64: String,
    prompt: String,
    resolution: String,
    now_ms: i64,
) -> Result<GeneratedImage> {
    let image = GeneratedImage::new(base64, prompt, resolution, now_ms);

    let mut history = get_history(store);
    history.insert(0, image.clone());
    history.truncate(MAX_HISTORY_ITEMS);
    store.set(HISTORY_KEY, &history)?;

    Ok(image)
}

/// Returns whether an entry was removed
pub fn delete_from_history(store: &LocalStore, id: &str) -> Result<bool> {
    let mut history = get_history(store);
    let before = history.len();
    history.retain(|img| img.id != id);

    if history.len() == before {
        return Ok(false);
    }
    store.set(HISTORY_KEY, &history)?;
    Ok(true)
}

pub fn clear_history(store: &LocalStore) -> Result<()> {
    store.remove(HISTORY_KEY)
}

/// Resolve a full id or a unique id prefix to the stored id
pub fn find_entry_id(history: &[GeneratedImage], id_or_prefix: &str) -> Option<String> {
    if let Some(exact) = history.iter().find(|img| img.id == id_or_prefix) {
        return Some(exact.id.clone());
    }

    let mut matches = history.iter().filter(|img| img.id.starts_with(id_or_prefix));
    match (matches.next(), matches.next()) {
        (Some(only), None) if !id_or_prefix.is_empty() => Some(only.id.clone()),
        _ => None,
    }
}

fn plural(n: i64, unit: &str) -> String {
    format!("{} {}{} ago", n, unit, if n == 1 { "" } else { "s" })
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);

    if diff < MINUTE_MS {
        "just now".to_string()
    } else if diff < HOUR_MS {
        plural(diff / MINUTE_MS, "minute")
    } else if diff < DAY_MS {
        plural(diff / HOUR_MS, "hour")
    } else if diff < 7 * DAY_MS {
        plural(diff / DAY_MS, "day")
    } else {
        match DateTime::from_timestamp_millis(timestamp_ms) {
            Some(at) => at.with_timezone(&Local).format("%Y-%m-%d").to_string(),
            None => "unknown date".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        (dir, store)
    }

    fn save(store: &LocalStore, prompt: &str, at: i64) -> GeneratedImage {
        save_to_history(
            store,
            "aGVsbG8=".to_string(),
            prompt.to_string(),
            "1376x768".to_string(),
            at,
        )
        .unwrap()
    }

    #[test]
    fn test_save_prepends() {
        let (_dir, store) = store();
        save(&store, "first", 1);
        let second = save(&store, "second", 2);

        let history = get_history(&store);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], second);
        assert_eq!(history[1].prompt, "first");
    }

    #[test]
    fn test_history_is_capped() {
        let (_dir, store) = store();
        for i in 0..(MAX_HISTORY_ITEMS as i64 + 5) {
            save(&store, &format!("prompt {}", i), i);
        }

        let history = get_history(&store);
        assert_eq!(history.len(), MAX_HISTORY_ITEMS);
        assert_eq!(history[0].prompt, "prompt 54");
        assert_eq!(history.last().unwrap().prompt, "prompt 5");
    }

    #[test]
    fn test_delete_and_clear() {
        let (_dir, store) = store();
        let a = save(&store, "a", 1);
        save(&store, "b", 2);

        assert!(delete_from_history(&store, &a.id).unwrap());
        assert!(!delete_from_history(&store, &a.id).unwrap());
        assert_eq!(get_history(&store).len(), 1);

        clear_history(&store).unwrap();
        assert!(get_history(&store).is_empty());
    }

    #[test]
    fn test_reads_web_client_format() {
        let (dir, store) = store();
        std::fs::write(
            dir.path().join(format!("{}.json", HISTORY_KEY)),
            r#"[{"id":"abc","base64":"x","prompt":"p","resolution":"1024x1024","createdAt":1700000000000}]"#,
        )
        .unwrap();

        let history = get_history(&store);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].created_at, 1_700_000_000_000);
    }

    #[test]
    fn test_find_entry_id() {
        let entries = vec![
            GeneratedImage {
                id: "abc123".to_string(),
                base64: String::new(),
                prompt: String::new(),
                resolution: String::new(),
                created_at: 0,
            },
            GeneratedImage {
                id: "abd456".to_string(),
                base64: String::new(),
                prompt: String::new(),
                resolution: String::new(),
                created_at: 0,
            },
        ];

        assert_eq!(find_entry_id(&entries, "abc123").as_deref(), Some("abc123"));
        assert_eq!(find_entry_id(&entries, "abd").as_deref(), Some("abd456"));
        assert_eq!(find_entry_id(&entries, "ab"), None);
        assert_eq!(find_entry_id(&entries, "zzz"), None);
        assert_eq!(find_entry_id(&entries, ""), None);
    }

    #[test]
    fn test_format_relative_time() {
        let now = 1_700_000_000_000;
        assert_eq!(format_relative_time(now, now), "just now");
        assert_eq!(format_relative_time(now - 59 * SECOND_MS, now), "just now");
        assert_eq!(format_relative_time(now - MINUTE_MS, now), "1 minute ago");
        assert_eq!(format_relative_time(now - 5 * MINUTE_MS, now), "5 minutes ago");
        assert_eq!(format_relative_time(now - HOUR_MS, now), "1 hour ago");
        assert_eq!(format_relative_time(now - 23 * HOUR_MS, now), "23 hours ago");
        assert_eq!(format_relative_time(now - DAY_MS, now), "1 day ago");
        assert_eq!(format_relative_time(now - 6 * DAY_MS, now), "6 days ago");
    }

    #[test]
    fn test_old_entries_show_date() {
        let now = 1_700_000_000_000;
        let formatted = format_relative_time(now - 30 * DAY_MS, now);
        assert!(!formatted.ends_with("ago"));
        assert_eq!(formatted.len(), "2023-10-15".len());
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let (dir, store) = store();
        std::fs::write(
            dir.path().join(format!("{}.json", HISTORY_KEY)),
            r#"[{"id":"x","base64":"","prompt":"p","resolution":"1x1","createdAt":-9223372036854775808}]"#,
        )
        .unwrap();

        let entry = &get_history(&store)[0];
        let now = 1_700_000_000_000;
        assert_eq!(format_relative_time(entry.created_at, now), "unknown date");
        assert_eq!(format_relative_time(i64::MAX, now), "just now");
    }
}

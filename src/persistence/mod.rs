//! Settings and highscores codec
//!
//! Reads are total: absent, empty or malformed values come back as
//! `None` (settings) or an empty list (highscores). Writes overwrite.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::consts::{HIGHSCORES_KEY, SETTINGS_KEY};
use crate::highscores::HighscoreRecord;
use crate::platform::storage::KeyValueStore;
use crate::settings::Settings;

/// Parse JSON, falling back to `default` on empty or malformed text
pub fn parse_or_default<T: DeserializeOwned>(text: &str, default: T) -> T {
    if text.trim().is_empty() {
        return default;
    }
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Discarding malformed stored value: {}", e);
            default
        }
    }
}

/// Encode and store; `false` if encoding failed and nothing was written
fn write_json<T: Serialize + ?Sized>(store: &mut impl KeyValueStore, key: &str, value: &T) -> bool {
    match serde_json::to_string(value) {
        Ok(json) => {
            store.set(key, &json);
            true
        }
        Err(e) => {
            log::warn!("Could not encode {}: {}", key, e);
            false
        }
    }
}

/// Overwrite the stored settings record.
///
/// A record that `load_settings` would reject is not written; returns
/// whether the write happened.
pub fn save_settings(store: &mut impl KeyValueStore, settings: &Settings) -> bool {
    if !settings.is_well_formed() {
        log::warn!("Refusing to save settings with an empty name");
        return false;
    }
    let written = write_json(store, SETTINGS_KEY, settings);
    if written {
        log::info!("Settings saved for {}", settings.name);
    }
    written
}

/// Stored settings, or `None` if absent or not settings-shaped
pub fn load_settings(store: &impl KeyValueStore) -> Option<Settings> {
    let raw = store.get(SETTINGS_KEY)?;
    let settings = parse_or_default::<Option<Settings>>(&raw, None)?;
    if !settings.is_well_formed() {
        log::warn!("Discarding stored settings with an empty name");
        return None;
    }
    log::debug!("Loaded settings for {}", settings.name);
    Some(settings)
}

/// Stored highscores, empty if absent or malformed
pub fn get_highscores(store: &impl KeyValueStore) -> Vec<HighscoreRecord> {
    let scores = store
        .get(HIGHSCORES_KEY)
        .map(|raw| parse_or_default(&raw, Vec::new()))
        .unwrap_or_default();
    log::debug!("Loaded {} highscores", scores.len());
    scores
}

/// Replace the stored highscores list
pub fn set_highscores(store: &mut impl KeyValueStore, scores: &[HighscoreRecord]) {
    if write_json(store, HIGHSCORES_KEY, scores) {
        log::debug!("Highscores saved ({} entries)", scores.len());
    }
}

/// Append one record to the stored list
pub fn append_highscore(store: &mut impl KeyValueStore, record: HighscoreRecord) -> Vec<HighscoreRecord> {
    let mut scores = get_highscores(store);
    scores.push(record);
    set_highscores(store, &scores);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;
    use crate::settings::{Avatar, Difficulty, Theme};
    use proptest::prelude::*;

    fn sample_settings() -> Settings {
        Settings::new("TestPlayer", Avatar::Knight, Difficulty::Normal, Theme::Dark)
    }

    fn sample_scores() -> Vec<HighscoreRecord> {
        vec![
            HighscoreRecord::new("Player1", 100, "2024-01-01"),
            HighscoreRecord::new("Player2", 85, "2024-01-02"),
        ]
    }

    #[test]
    fn test_save_settings_writes_json_under_key() {
        let mut store = MemoryStore::new();
        save_settings(&mut store, &sample_settings());
        assert_eq!(
            store.get(SETTINGS_KEY).as_deref(),
            Some(r#"{"name":"TestPlayer","avatar":"knight","difficulty":"normal","theme":"dark"}"#)
        );
    }

    #[test]
    fn test_save_settings_overwrites() {
        let mut store = MemoryStore::new();
        save_settings(&mut store, &sample_settings());
        let newer = Settings::new("Other", Avatar::Wizard, Difficulty::Easy, Theme::Light);
        save_settings(&mut store, &newer);
        assert_eq!(load_settings(&store), Some(newer));
    }

    #[test]
    fn test_save_settings_refuses_blank_name() {
        let mut store = MemoryStore::new();
        assert!(save_settings(&mut store, &sample_settings()));

        let blank = Settings::new(" ", Avatar::Wizard, Difficulty::Hard, Theme::Dark);
        assert!(!save_settings(&mut store, &blank));
        // Previous record untouched
        assert_eq!(load_settings(&store), Some(sample_settings()));

        let mut empty = MemoryStore::new();
        assert!(!save_settings(&mut empty, &blank));
        assert_eq!(empty.get(SETTINGS_KEY), None);
    }

    #[test]
    fn test_load_settings_valid() {
        let json = r#"{"name":"TestPlayer","avatar":"wizard","difficulty":"hard","theme":"light"}"#;
        let store = MemoryStore::with_entry(SETTINGS_KEY, json);
        assert_eq!(
            load_settings(&store),
            Some(Settings::new("TestPlayer", Avatar::Wizard, Difficulty::Hard, Theme::Light))
        );
    }

    #[test]
    fn test_load_settings_absent() {
        assert_eq!(load_settings(&MemoryStore::new()), None);
    }

    #[test]
    fn test_load_settings_invalid_json() {
        let store = MemoryStore::with_entry(SETTINGS_KEY, "invalid json");
        assert_eq!(load_settings(&store), None);
    }

    #[test]
    fn test_load_settings_empty_string() {
        let store = MemoryStore::with_entry(SETTINGS_KEY, "");
        assert_eq!(load_settings(&store), None);
    }

    #[test]
    fn test_load_settings_wrong_shape() {
        for raw in [
            "{}",
            "null",
            "[1,2,3]",
            r#"{"name":"","avatar":"wizard","difficulty":"hard","theme":"light"}"#,
            r#"{"name":"A","avatar":"wizard","difficulty":"extreme","theme":"light"}"#,
        ] {
            let store = MemoryStore::with_entry(SETTINGS_KEY, raw);
            assert_eq!(load_settings(&store), None, "accepted {raw}");
        }
    }

    #[test]
    fn test_get_highscores_valid() {
        let json = serde_json::to_string(&sample_scores()).unwrap();
        let store = MemoryStore::with_entry(HIGHSCORES_KEY, &json);
        assert_eq!(get_highscores(&store), sample_scores());
    }

    #[test]
    fn test_get_highscores_missing_or_malformed() {
        assert!(get_highscores(&MemoryStore::new()).is_empty());
        for raw in ["", "invalid json", "{}", r#"[{"name":"x"}]"#] {
            let store = MemoryStore::with_entry(HIGHSCORES_KEY, raw);
            assert!(get_highscores(&store).is_empty(), "accepted {raw}");
        }
    }

    #[test]
    fn test_set_highscores_empty() {
        let mut store = MemoryStore::with_entry(HIGHSCORES_KEY, "garbage");
        set_highscores(&mut store, &[]);
        assert_eq!(store.get(HIGHSCORES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_highscores_single() {
        let mut store = MemoryStore::new();
        let one = vec![HighscoreRecord::new("Player1", 100, "2024-01-01")];
        set_highscores(&mut store, &one);
        assert_eq!(
            store.get(HIGHSCORES_KEY).as_deref(),
            Some(r#"[{"name":"Player1","score":100,"date":"2024-01-01"}]"#)
        );
    }

    #[test]
    fn test_append_highscore_recovers_from_garbage() {
        let mut store = MemoryStore::with_entry(HIGHSCORES_KEY, "invalid json");
        let record = HighscoreRecord::new("Avi", 1, "2024-01-01");
        let scores = append_highscore(&mut store, record.clone());
        assert_eq!(scores, vec![record.clone()]);
        assert_eq!(get_highscores(&store), vec![record]);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = MemoryStore::new();
        save_settings(&mut store, &sample_settings());
        assert!(get_highscores(&store).is_empty());
        set_highscores(&mut store, &sample_scores());
        assert_eq!(load_settings(&store), Some(sample_settings()));
    }

    #[test]
    fn test_write_json_reports_encode_failure() {
        use std::collections::HashMap;

        let mut store = MemoryStore::new();
        assert!(write_json(&mut store, "k", &vec![1, 2]));
        assert_eq!(store.get("k").as_deref(), Some("[1,2]"));

        // JSON object keys must be strings
        let unencodable: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        assert!(!write_json(&mut store, "k", &unencodable));
        assert_eq!(store.get("k").as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default::<u32>("7", 0), 7);
        assert_eq!(parse_or_default::<u32>("  ", 3), 3);
        assert_eq!(parse_or_default::<u32>("seven", 3), 3);
    }

    fn settings_strategy() -> impl Strategy<Value = Settings> {
        (
            "[A-Za-z][A-Za-z0-9 _-]{0,15}",
            prop::sample::select(Avatar::ALL.to_vec()),
            prop::sample::select(Difficulty::ALL.to_vec()),
            prop::sample::select(Theme::ALL.to_vec()),
        )
            .prop_map(|(name, avatar, difficulty, theme)| {
                Settings::new(name, avatar, difficulty, theme)
            })
    }

    fn highscores_strategy() -> impl Strategy<Value = Vec<HighscoreRecord>> {
        prop::collection::vec(
            (".{0,12}", any::<u32>(), "[0-9]{4}-[0-9]{2}-[0-9]{2}")
                .prop_map(|(name, score, date)| HighscoreRecord::new(name, score, date)),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn prop_settings_round_trip(settings in settings_strategy()) {
            let mut store = MemoryStore::new();
            save_settings(&mut store, &settings);
            prop_assert_eq!(load_settings(&store), Some(settings));
        }

        #[test]
        fn prop_highscores_round_trip(scores in highscores_strategy()) {
            let mut store = MemoryStore::with_entry(HIGHSCORES_KEY, "stale");
            set_highscores(&mut store, &scores);
            prop_assert_eq!(get_highscores(&store), scores);
        }

        #[test]
        fn prop_reads_never_panic(raw in ".{0,40}") {
            let mut store = MemoryStore::new();
            store.set(SETTINGS_KEY, &raw);
            store.set(HIGHSCORES_KEY, &raw);
            let _ = load_settings(&store);
            let _ = get_highscores(&store);
        }
    }
}

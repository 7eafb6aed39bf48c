use std::collections::HashMap;
use std::path::PathBuf;

use poise::serenity_prelude::GuildId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::GuildSchedule;

/// Errors from persisting the store
#[derive(Debug)]
pub enum StoreError {
    Serialize(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Serialize(e) => write!(f, "Failed to serialize schedules: {}", e),
            StoreError::Io(e) => write!(f, "Failed to write schedule file: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// On-disk layout: all guild schedules under a single `guilds` object
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    #[serde(default)]
    guilds: HashMap<GuildId, GuildSchedule>,
}

/// All guild schedules plus the file they persist to.
///
/// The whole map is rewritten on every save, so the file is only ever
/// replaced atomically: a torn write would corrupt every guild's state,
/// not just one.
pub struct GuildStore {
    path: PathBuf,
    state: StoredState,
}

impl GuildStore {
    /// Load the store from disk. A missing or unreadable file yields an
    /// empty store: schedules are operational convenience state, and losing
    /// them degrades service rather than corrupting it.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<StoredState>(&json) {
                Ok(state) => state,
                Err(e) => {
                    warn!(
                        "Failed to parse {}, starting with an empty store: {}",
                        path.display(),
                        e
                    );
                    StoredState::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoredState::default(),
            Err(e) => {
                warn!(
                    "Failed to read {}, starting with an empty store: {}",
                    path.display(),
                    e
                );
                StoredState::default()
            }
        };
        Self { path, state }
    }

    /// Write all schedules to disk: serialize, write a temp file next to
    /// the target, then rename over it so readers only ever observe a
    /// complete file.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.state).map_err(StoreError::Serialize)?;

        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(StoreError::Io)?;
        if let Ok(file) = std::fs::File::open(&tmp) {
            let _ = file.sync_all();
        }
        std::fs::rename(&tmp, &self.path).map_err(StoreError::Io)?;

        debug!(
            "Saved {} guild schedules to {}",
            self.state.guilds.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Schedule for a guild, created with defaults on first access
    pub fn get_or_create(&mut self, guild_id: GuildId) -> &mut GuildSchedule {
        self.state.guilds.entry(guild_id).or_default()
    }

    /// Schedule for a guild, if one exists
    pub fn get(&self, guild_id: GuildId) -> Option<&GuildSchedule> {
        self.state.guilds.get(&guild_id)
    }

    /// Mutable schedule for a guild, if one exists
    pub fn get_mut(&mut self, guild_id: GuildId) -> Option<&mut GuildSchedule> {
        self.state.guilds.get_mut(&guild_id)
    }

    /// Ids of every guild with a schedule, in no particular order
    pub fn guild_ids(&self) -> Vec<GuildId> {
        self.state.guilds.keys().copied().collect()
    }

    /// Number of guilds with a schedule
    pub fn len(&self) -> usize {
        self.state.guilds.len()
    }

    /// Whether any guild has a schedule
    pub fn is_empty(&self) -> bool {
        self.state.guilds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OneShot;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("qotd_data.json")
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = GuildStore::load(store_path(&dir));
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, "{ not json").unwrap();
        let store = GuildStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_or_create_inserts_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = GuildStore::load(store_path(&dir));
        let schedule = store.get_or_create(GuildId::new(1));
        assert!(schedule.channel_id.is_none());
        assert!(schedule.time_hhmm.is_none());
        assert!(!schedule.enabled);
        assert_eq!(schedule.current_index, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        use poise::serenity_prelude::ChannelId;

        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut store = GuildStore::load(&path);
        let schedule = store.get_or_create(GuildId::new(42));
        schedule.channel_id = Some(ChannelId::new(7));
        schedule.time_hhmm = Some("21:00".to_string());
        schedule.enabled = true;
        schedule.current_index = 3;
        schedule.order = Some(vec![2, 0, 1]);
        schedule.last_post_date = Some("2026-08-04".to_string());
        schedule.one_shot_schedules = vec![OneShot {
            run_at: "2026-08-05T10:30:00+05:30".to_string(),
            q_idx: Some(5),
        }];
        let expected = schedule.clone();
        store.get_or_create(GuildId::new(43));
        store.save().unwrap();

        let reloaded = GuildStore::load(&path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get(GuildId::new(42)), Some(&expected));
        assert_eq!(
            reloaded.get(GuildId::new(43)),
            Some(&crate::models::GuildSchedule::default())
        );
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let mut store = GuildStore::load(&path);
        store.get_or_create(GuildId::new(1));
        store.save().unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}

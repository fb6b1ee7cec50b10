// Team store: user-registered teams and their badges, kept in a JSON file

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::StoreError;

/// Queries shorter than this match nothing
const MIN_QUERY_CHARS: usize = 2;
const ID_SUFFIX_LEN: usize = 5;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub badge: Option<String>,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug)]
pub struct TeamStore {
    path: PathBuf,
    teams: Vec<TeamRecord>,
}

fn base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// `team_<base36 millis>_<5 random base36 chars>`
fn generate_id(millis: i64) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("team_{}_{}", base36(millis.max(0) as u64), suffix)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl TeamStore {
    /// An empty store that will be written to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            teams: Vec::new(),
        }
    }

    /// Read the store; a missing file is an empty store
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            debug!("No team store at {}", path.display());
            return Ok(Self::new(path));
        }
        let content = fs::read_to_string(&path)?;
        let teams: Vec<TeamRecord> = serde_json::from_str(&content)?;
        debug!("Loaded {} teams from {}", teams.len(), path.display());
        Ok(Self { path, teams })
    }

    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.teams)?)?;
        debug!("Saved {} teams to {}", self.teams.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn add(&mut self, name: &str, badge: Option<&str>) -> Result<&TeamRecord, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Invalid("Team name is empty".to_string()));
        }
        let created_at = chrono::Utc::now().timestamp_millis();
        let record = TeamRecord {
            id: generate_id(created_at),
            name: name.to_string(),
            badge: non_empty(badge),
            created_at,
        };
        info!("Added team {} ({})", record.name, record.id);
        self.teams.push(record);
        Ok(&self.teams[self.teams.len() - 1])
    }

    /// Change the name and/or badge of a team. Returns None for an unknown id.
    pub fn update(
        &mut self,
        id: &str,
        name: Option<&str>,
        badge: Option<&str>,
    ) -> Option<&TeamRecord> {
        let team = self.teams.iter_mut().find(|t| t.id == id)?;
        if let Some(name) = non_empty(name) {
            team.name = name;
        }
        if let Some(badge) = non_empty(badge) {
            team.badge = Some(badge);
        }
        Some(team)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.teams.len();
        self.teams.retain(|t| t.id != id);
        self.teams.len() != before
    }

    /// Case-insensitive substring match on names
    pub fn search(&self, query: &str) -> Vec<&TeamRecord> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }
        let query = query.to_lowercase();
        self.teams
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&TeamRecord> {
        let name = name.trim().to_lowercase();
        self.teams.iter().find(|t| t.name.to_lowercase() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_with(names: &[&str]) -> TeamStore {
        let mut store = TeamStore::new("teams.json");
        for name in names {
            store.add(name, None).unwrap();
        }
        store
    }

    #[test]
    fn test_base36() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
        assert_eq!(base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_generated_id_shape() {
        let id = generate_id(36);
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts[0], "team");
        assert_eq!(parts[1], "10");
        assert_eq!(parts[2].len(), 5);
        assert!(parts[2].bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let mut store = TeamStore::new("teams.json");
        let team = store.add("  Vasco  ", Some(" ")).unwrap();
        assert_eq!(team.name, "Vasco");
        assert_eq!(team.badge, None);
        assert!(team.id.starts_with("team_"));
        assert!(store.add("   ", None).is_err());
    }

    #[test]
    fn test_update_and_remove() {
        let mut store = store_with(&["Bahia"]);
        let id = store.teams()[0].id.clone();

        let updated = store.update(&id, None, Some("bahia.png")).unwrap();
        assert_eq!(updated.name, "Bahia");
        assert_eq!(updated.badge.as_deref(), Some("bahia.png"));
        assert!(store.update("team_missing", Some("X"), None).is_none());

        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.teams().is_empty());
    }

    #[test]
    fn test_search() {
        let store = store_with(&["Atlético Mineiro", "Athletico Paranaense", "Cruzeiro"]);
        assert!(store.search("a").is_empty());
        assert_eq!(store.search("ATL").len(), 1);
        assert_eq!(store.search("at").len(), 2);
        assert_eq!(store.search("zeiro")[0].name, "Cruzeiro");
    }

    #[test]
    fn test_find_by_name() {
        let store = store_with(&["Fortaleza"]);
        assert!(store.find_by_name("fortaleza").is_some());
        assert!(store.find_by_name("Forta").is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("teams.json");

        let mut store = TeamStore::new(&path);
        store.add("Sport", Some("sport.png")).unwrap();
        store.save().unwrap();

        let loaded = TeamStore::load(&path).unwrap();
        assert_eq!(loaded.teams(), store.teams());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"createdAt\""));
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempdir().unwrap();
        let store = TeamStore::load(dir.path().join("none.json")).unwrap();
        assert!(store.teams().is_empty());
    }
}

// Card document: the saved editor state that a card is rendered from

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::card::{format_date, today, Match, Odds, RenderOptions, Team, MAX_MATCHES};
use crate::images::{footer_banner_path, load_picture, preset_background_path, Picture};
use crate::render::resolved::DEFAULT_TITLE;
use crate::teams::TeamStore;
use crate::theme::{ThemeRegistry, DEFAULT_THEME};

/// Error type for the JSON stores (card documents and teams)
#[derive(Debug)]
pub enum StoreError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::JsonError(e) => write!(f, "JSON error: {}", e),
            StoreError::Invalid(s) => write!(f, "Invalid: {}", s),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::IoError(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::JsonError(e)
    }
}

/// Background choice when no image should be drawn
pub const BG_NONE: &str = "none";
/// Background choice for the theme's bundled artwork
pub const BG_PRESET: &str = "preset";
/// An upload from the web editor; the picture itself was never saved
pub const BG_CUSTOM: &str = "custom";

/// One game as the editor stores it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameEntry {
    pub team_a: String,
    pub team_b: String,
    #[serde(alias = "badgeUrlA")]
    pub badge_a: Option<String>,
    #[serde(alias = "badgeUrlB")]
    pub badge_b: Option<String>,
    pub time: String,
    pub league: String,
    pub odd_home: String,
    pub odd_draw: String,
    pub odd_away: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDocument {
    pub games: Vec<GameEntry>,
    /// Theme key
    pub background: String,
    /// "none", "preset", a theme key naming its preset artwork, or a path
    /// to an image file
    #[serde(alias = "bgImageKey")]
    pub bg_image: String,
    pub title: String,
    /// DD/MM/YYYY
    pub date: String,
}

impl Default for CardDocument {
    fn default() -> Self {
        Self {
            games: Vec::new(),
            background: DEFAULT_THEME.to_string(),
            bg_image: BG_NONE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            date: today(),
        }
    }
}

impl CardDocument {
    /// Read a document; a missing file gives the default document
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!("No document at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let document: Self = serde_json::from_str(&content)?;
        debug!(
            "Loaded {} with {} games",
            path.display(),
            document.games.len()
        );
        Ok(document)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Saved {}", path.display());
        Ok(())
    }

    /// Append a game; a card holds at most four
    pub fn add_game(&mut self, game: GameEntry) -> Result<(), StoreError> {
        if self.games.len() >= MAX_MATCHES {
            return Err(StoreError::Invalid(format!(
                "A card holds at most {} games",
                MAX_MATCHES
            )));
        }
        self.games.push(game);
        Ok(())
    }

    pub fn remove_game(&mut self, index: usize) -> Option<GameEntry> {
        if index < self.games.len() {
            Some(self.games.remove(index))
        } else {
            None
        }
    }

    /// Set the date from an ISO `YYYY-MM-DD` string
    pub fn set_date_iso(&mut self, iso: &str) -> Result<(), StoreError> {
        let date = NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d")
            .map_err(|e| StoreError::Invalid(format!("Bad date {:?}: {}", iso, e)))?;
        self.date = format_date(date);
        Ok(())
    }

    /// `odds-DD-MM-YYYY.jpg`
    pub fn export_file_name(&self) -> String {
        format!("odds-{}.jpg", self.date.replace('/', "-"))
    }

    /// Build the renderer inputs, loading badges and background artwork.
    ///
    /// A game without a badge path borrows the badge of the stored team
    /// with the same name. Unreadable images are skipped.
    pub fn to_render_input(
        &self,
        assets_dir: &Path,
        teams: Option<&TeamStore>,
    ) -> (Vec<Match>, RenderOptions) {
        let matches = self
            .games
            .iter()
            .map(|game| {
                let home = Team::new(game.team_a.clone())
                    .with_logo(badge_for(&game.team_a, game.badge_a.as_deref(), teams));
                let away = Team::new(game.team_b.clone())
                    .with_logo(badge_for(&game.team_b, game.badge_b.as_deref(), teams));
                Match::new(home, away)
                    .with_league(game.league.clone())
                    .with_kickoff(game.time.clone())
                    .with_odds(Odds::new(
                        game.odd_home.clone(),
                        game.odd_draw.clone(),
                        game.odd_away.clone(),
                    ))
            })
            .collect();

        let background = match self.bg_image.trim() {
            "" | BG_NONE => None,
            BG_PRESET => load_picture(&preset_background_path(assets_dir, &self.background)),
            BG_CUSTOM => {
                warn!("Custom background was not saved with the document, using the theme");
                None
            }
            key if ThemeRegistry::builtin().get(key).is_some() => {
                load_picture(&preset_background_path(assets_dir, key))
            }
            path => load_picture(Path::new(path)),
        };

        let footer_path = footer_banner_path(assets_dir);
        let footer = if footer_path.exists() {
            load_picture(&footer_path)
        } else {
            None
        };

        let options = RenderOptions {
            theme: Some(self.background.clone()),
            title: Some(self.title.clone()),
            date: Some(self.date.clone()),
            background,
            footer,
        };
        (matches, options)
    }
}

fn badge_for(name: &str, badge: Option<&str>, teams: Option<&TeamStore>) -> Option<Picture> {
    let path = match badge.map(str::trim).filter(|b| !b.is_empty()) {
        Some(path) => path.to_string(),
        None => teams?.find_by_name(name)?.badge.clone()?,
    };
    load_picture(Path::new(&path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn game(a: &str, b: &str) -> GameEntry {
        GameEntry {
            team_a: a.to_string(),
            team_b: b.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_document() {
        let document = CardDocument::default();
        assert_eq!(document.background, "brasileirao");
        assert_eq!(document.bg_image, "none");
        assert_eq!(document.title, "JOGOS DO DIA");
        assert!(document.games.is_empty());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let document = CardDocument::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(document.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("card.json");

        let mut document = CardDocument::default();
        document.date = "01/02/2025".to_string();
        document.add_game(game("Flamengo", "Palmeiras")).unwrap();
        document.save(&path).unwrap();

        assert_eq!(CardDocument::load(&path).unwrap(), document);
    }

    #[test]
    fn test_camel_case_keys_and_defaults() {
        let json = r#"{"games":[{"teamA":"Grêmio","oddHome":"2.10","badgeUrlA":"a.png"}],"bgImageKey":"preset"}"#;
        let document: CardDocument = serde_json::from_str(json).unwrap();

        assert_eq!(document.games[0].team_a, "Grêmio");
        assert_eq!(document.games[0].odd_home, "2.10");
        assert_eq!(document.games[0].badge_a.as_deref(), Some("a.png"));
        assert_eq!(document.games[0].team_b, "");
        assert_eq!(document.bg_image, "preset");
        assert_eq!(document.background, "brasileirao");

        let written = serde_json::to_string(&document).unwrap();
        assert!(written.contains("\"teamA\""));
        assert!(written.contains("\"bgImage\""));
    }

    #[test]
    fn test_add_game_limit() {
        let mut document = CardDocument::default();
        for _ in 0..MAX_MATCHES {
            document.add_game(game("A", "B")).unwrap();
        }
        assert!(matches!(
            document.add_game(game("C", "D")),
            Err(StoreError::Invalid(_))
        ));
        assert_eq!(document.games.len(), 4);
    }

    #[test]
    fn test_remove_game() {
        let mut document = CardDocument::default();
        document.add_game(game("A", "B")).unwrap();
        document.add_game(game("C", "D")).unwrap();

        assert_eq!(document.remove_game(0).map(|g| g.team_a), Some("A".to_string()));
        assert_eq!(document.remove_game(5), None);
        assert_eq!(document.games.len(), 1);
    }

    #[test]
    fn test_set_date_iso() {
        let mut document = CardDocument::default();
        document.set_date_iso("2025-06-09").unwrap();
        assert_eq!(document.date, "09/06/2025");
        assert_eq!(document.export_file_name(), "odds-09-06-2025.jpg");
        assert!(document.set_date_iso("09/06/2025").is_err());
    }

    #[test]
    fn test_to_render_input() {
        let dir = tempdir().unwrap();
        let badge = dir.path().join("badge.png");
        RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]))
            .save(&badge)
            .unwrap();

        let mut document = CardDocument::default();
        document.background = "champions".to_string();
        document.bg_image = BG_PRESET.to_string();
        document
            .add_game(GameEntry {
                badge_a: Some(badge.display().to_string()),
                time: "16:00".to_string(),
                league: "Série A".to_string(),
                odd_draw: "3.20".to_string(),
                ..game("Santos", "Bahia")
            })
            .unwrap();

        let (matches, options) = document.to_render_input(dir.path(), None);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].home.name, "Santos");
        assert_eq!(matches[0].home.logo.as_ref().map(|p| p.width()), Some(8));
        assert!(matches[0].away.logo.is_none());
        assert_eq!(matches[0].kickoff, "16:00");
        assert_eq!(matches[0].odds.draw, "3.20");
        assert_eq!(options.theme.as_deref(), Some("champions"));
        // No preset artwork or footer banner in the temp assets dir
        assert!(options.background.is_none());
        assert!(options.footer.is_none());
    }

    #[test]
    fn test_theme_key_background_loads_preset() {
        let dir = tempdir().unwrap();
        let presets = dir.path().join("campeonatos");
        fs::create_dir_all(&presets).unwrap();
        RgbaImage::from_pixel(4, 8, Rgba([0, 0, 255, 255]))
            .save(presets.join("ucl.png"))
            .unwrap();

        let json = r#"{"background":"ucl","bgImageKey":"ucl"}"#;
        let document: CardDocument = serde_json::from_str(json).unwrap();
        let (_, options) = document.to_render_input(dir.path(), None);
        assert_eq!(options.background.map(|p| (p.width(), p.height())), Some((4, 8)));
    }

    #[test]
    fn test_custom_background_is_dropped() {
        let dir = tempdir().unwrap();
        let json = r#"{"background":"premier","bgImageKey":"custom"}"#;
        let document: CardDocument = serde_json::from_str(json).unwrap();
        let (_, options) = document.to_render_input(dir.path(), None);
        assert!(options.background.is_none());
        assert_eq!(options.theme.as_deref(), Some("premier"));
    }
}

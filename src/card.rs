// What goes on a card: the matches and the options around them

use crate::images::Picture;

/// Most matches one card has room for
pub const MAX_MATCHES: usize = 4;

/// One side of a match
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub name: String,
    pub logo: Option<Picture>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: None,
        }
    }

    pub fn with_logo(self, logo: Option<Picture>) -> Self {
        Self { logo, ..self }
    }
}

/// Three-way odds, kept as typed by the user. Empty means "not set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Odds {
    pub home: String,
    pub draw: String,
    pub away: String,
}

impl Odds {
    pub fn new(home: impl Into<String>, draw: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            draw: draw.into(),
            away: away.into(),
        }
    }
}

/// One betting card row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Match {
    pub home: Team,
    pub away: Team,
    pub league: String,
    pub kickoff: String,
    pub odds: Odds,
}

impl Match {
    pub fn new(home: Team, away: Team) -> Self {
        Self {
            home,
            away,
            ..Default::default()
        }
    }

    pub fn with_league(self, league: impl Into<String>) -> Self {
        Self {
            league: league.into(),
            ..self
        }
    }

    pub fn with_kickoff(self, kickoff: impl Into<String>) -> Self {
        Self {
            kickoff: kickoff.into(),
            ..self
        }
    }

    pub fn with_odds(self, odds: Odds) -> Self {
        Self { odds, ..self }
    }
}

/// Per-render configuration. Every field is optional; see
/// `render::resolved::resolve_options` for the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Theme key; unknown or missing keys use the default theme
    pub theme: Option<String>,
    /// Newline separated, with optional *NNpx* size markers
    pub title: Option<String>,
    /// Shown as-is; defaults to today as DD/MM/YYYY
    pub date: Option<String>,
    /// Cover-fit background; without it the theme gradient is painted
    pub background: Option<Picture>,
    /// Banner under the games; without it there is no footer band
    pub footer: Option<Picture>,
}

/// Format a date as DD/MM/YYYY
pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Today in the local timezone, as DD/MM/YYYY
pub fn today() -> String {
    format_date(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2024");
    }

    #[test]
    fn test_today_shape() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[2..3], "/");
        assert_eq!(&today[5..6], "/");
    }

    #[test]
    fn test_match_builders() {
        let game = Match::new(Team::new("Flamengo"), Team::new("Palmeiras"))
            .with_league("Brasileirão")
            .with_kickoff("16:00")
            .with_odds(Odds::new("2.10", "3.20", "3.45"));
        assert_eq!(game.home.name, "Flamengo");
        assert_eq!(game.odds.draw, "3.20");
        assert!(game.away.logo.is_none());
    }
}

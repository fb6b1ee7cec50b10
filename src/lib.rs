// oddscard - vertical betting-odds cards for social media

pub mod card;
pub mod document;
pub mod images;
pub mod parser;
pub mod render;
pub mod teams;
pub mod theme;

pub use card::{Match, Odds, RenderOptions, Team, MAX_MATCHES};
pub use document::{CardDocument, GameEntry, StoreError};
pub use images::Picture;
pub use render::{render, FontConfig, RasterSurface, RecordingSurface, RenderError, Surface};
pub use teams::{TeamRecord, TeamStore};
pub use theme::{Theme, ThemeRegistry};

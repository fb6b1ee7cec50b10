// Options with every default filled in, ready for the painters

use tracing::{debug, warn};

use crate::card::{today, Match, RenderOptions, MAX_MATCHES};
use crate::images::Picture;
use crate::parser::{parse_segments, title_lines, TitleSegment};
use crate::theme::{Theme, ThemeRegistry};

pub const DEFAULT_TITLE: &str = "JOGOS DO DIA";

/// One title line, already split into sized segments
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLine {
    pub segments: Vec<TitleSegment>,
}

impl TitleLine {
    pub fn size(&self) -> u32 {
        crate::parser::line_size(&self.segments)
    }
}

/// A fully resolved render request
#[derive(Debug, Clone)]
pub struct ResolvedOptions<'a> {
    pub theme: &'a Theme,
    pub title: Vec<TitleLine>,
    pub date: String,
    pub background: Option<&'a Picture>,
    pub footer: Option<&'a Picture>,
}

/// Fill in the documented defaults once, at the top of a render call
pub fn resolve_options<'a>(
    options: &'a RenderOptions,
    registry: &'a ThemeRegistry,
) -> ResolvedOptions<'a> {
    let theme = registry.lookup(options.theme.as_deref());
    if let Some(key) = options.theme.as_deref() {
        if key != theme.key {
            debug!("Unknown theme {:?}, using {}", key, theme.key);
        }
    }

    // Whitespace-only titles count as missing
    let title = match options.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title,
        _ => DEFAULT_TITLE,
    };

    let date = options
        .date
        .as_ref()
        .filter(|d| !d.trim().is_empty())
        .cloned()
        .unwrap_or_else(today);

    ResolvedOptions {
        theme,
        title: resolve_title(title),
        date,
        background: options.background.as_ref(),
        footer: options.footer.as_ref().filter(|f| f.aspect_ratio().is_some()),
    }
}

pub fn resolve_title(title: &str) -> Vec<TitleLine> {
    title_lines(title)
        .into_iter()
        .map(|line| TitleLine {
            segments: parse_segments(line),
        })
        .collect()
}

/// The matches that fit on one card
pub fn visible_matches(matches: &[Match]) -> &[Match] {
    if matches.len() > MAX_MATCHES {
        warn!(
            "{} matches given, only the first {} fit on a card",
            matches.len(),
            MAX_MATCHES
        );
        &matches[..MAX_MATCHES]
    } else {
        matches
    }
}

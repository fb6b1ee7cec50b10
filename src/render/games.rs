// Game cards: one rounded panel per match with logos, names and odds

use super::layout::{layout_cards, LayoutPlan};
use super::surface::Surface;
use super::types::{
    FontSpec, FontWeight, GradientStop, Paint, PathSegment, Point, Rect, RenderColor,
    RenderDimensions, Shape, TextStyle,
};
use crate::card::{Match, Odds};
use crate::images::Picture;
use crate::theme::Theme;

pub const ELLIPSIS: &str = "…";
/// Shown in an odds column that has no value
pub const ODDS_PLACEHOLDER: &str = "-";
pub const ODDS_LABELS: [&str; 3] = ["CASA", "EMPATE", "FORA"];
pub const HOME_PLACEHOLDER: &str = "Time A";
pub const AWAY_PLACEHOLDER: &str = "Time B";
const VERSUS: &str = "vs ";

const CARD_RADIUS: f32 = 20.0;
const CARD_FILL_ALPHA: f32 = 0.45;
const CARD_BORDER_ALPHA: f32 = 0.08;
const CARD_BORDER_WIDTH: f32 = 1.5;
const ACCENT_EDGE_WIDTH: f32 = 3.0;

// Content block, offsets from its top:
//   0   league / kickoff
//   70  home name
//   128 away name
//   173 separator
//   208 odds labels
//   273 odds values
const CONTENT_HEIGHT: f32 = 273.0;
const LOGO_CENTER_OFFSET: f32 = 64.0;
const NAMES_OFFSET: f32 = 70.0;
const SECOND_NAME_OFFSET: f32 = 58.0;
const ODDS_OFFSET: f32 = 203.0;
const SEPARATOR_ABOVE_ODDS: f32 = 30.0;
const ODDS_LABEL_OFFSET: f32 = 5.0;
const ODDS_VALUE_OFFSET: f32 = 70.0;

const LOGO_MAX_SIZE: f32 = 140.0;
const LOGO_HEIGHT_RATIO: f32 = 0.38;
const LOGO_INSET: f32 = 90.0;
const NAME_SLACK: f32 = 20.0;
const SEPARATOR_INSET: f32 = 30.0;

fn info_font() -> FontSpec {
    FontSpec::body(FontWeight::SemiBold, 22.0)
}

fn name_font() -> FontSpec {
    FontSpec::display(FontWeight::ExtraBold, 50.0)
}

fn versus_font() -> FontSpec {
    FontSpec::body(FontWeight::SemiBold, 36.0)
}

fn odds_label_font() -> FontSpec {
    FontSpec::body(FontWeight::SemiBold, 20.0)
}

fn odds_value_font() -> FontSpec {
    FontSpec::display(FontWeight::ExtraBold, 64.0)
}

/// Positions inside one card, derived from its rect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    pub content_top: f32,
    pub logo_size: f32,
    pub logo_center_y: f32,
    pub home_logo_x: f32,
    pub away_logo_x: f32,
    pub names_y: f32,
    pub odds_y: f32,
    /// Widest a team name may be before it is truncated
    pub max_name_width: f32,
}

pub fn card_metrics(card: &Rect) -> CardMetrics {
    let content_top = card.y + (card.height - CONTENT_HEIGHT) / 2.0;
    let logo_size = LOGO_MAX_SIZE.min(card.height * LOGO_HEIGHT_RATIO);
    CardMetrics {
        content_top,
        logo_size,
        logo_center_y: content_top + LOGO_CENTER_OFFSET,
        home_logo_x: card.x + LOGO_INSET + logo_size / 2.0,
        away_logo_x: card.right() - LOGO_INSET - logo_size / 2.0,
        names_y: content_top + NAMES_OFFSET,
        odds_y: content_top + ODDS_OFFSET,
        max_name_width: card.width - logo_size * 2.0 - LOGO_INSET * 2.0 - NAME_SLACK,
    }
}

/// Lay out and paint every match inside the games band
pub fn draw_games<S: Surface>(
    surface: &mut S,
    dimensions: &RenderDimensions,
    plan: &LayoutPlan,
    matches: &[Match],
    theme: &Theme,
) {
    let cards = layout_cards(dimensions, plan, matches.len());
    for (game, card) in matches.iter().zip(cards) {
        draw_game_card(surface, &card, game, theme);
    }
}

pub fn draw_game_card<S: Surface>(surface: &mut S, card: &Rect, game: &Match, theme: &Theme) {
    draw_card_panel(surface, card, theme);

    let metrics = card_metrics(card);

    draw_logo(
        surface,
        Point::new(metrics.home_logo_x, metrics.logo_center_y),
        metrics.logo_size,
        game.home.logo.as_ref(),
    );
    draw_logo(
        surface,
        Point::new(metrics.away_logo_x, metrics.logo_center_y),
        metrics.logo_size,
        game.away.logo.as_ref(),
    );

    let center_x = card.center_x();

    if let Some(info) = info_line(&game.league, &game.kickoff) {
        let style = TextStyle::new(info_font(), theme.accent.fade(0.85)).centered();
        surface.fill_text(&info, Point::new(center_x, metrics.content_top), &style);
    }

    draw_names(surface, center_x, &metrics, game, theme);
    draw_odds(surface, card, metrics.odds_y, &game.odds, theme);
}

fn draw_card_panel<S: Surface>(surface: &mut S, card: &Rect, theme: &Theme) {
    let panel = Shape::RoundedRect {
        rect: *card,
        radius: CARD_RADIUS,
    };
    surface.fill(&panel, &Paint::Solid(RenderColor::black().with_alpha(CARD_FILL_ALPHA)));
    surface.stroke(
        &panel,
        &Paint::Solid(RenderColor::white().with_alpha(CARD_BORDER_ALPHA)),
        CARD_BORDER_WIDTH,
    );

    // Accent edge along the top, fading out towards the corners
    let edge = Paint::LinearGradient {
        start: Point::new(card.x, card.y),
        end: Point::new(card.right(), card.y),
        stops: vec![
            GradientStop::new(0.0, RenderColor::transparent()),
            GradientStop::new(0.3, theme.accent),
            GradientStop::new(0.7, theme.accent),
            GradientStop::new(1.0, RenderColor::transparent()),
        ],
    };
    surface.stroke(
        &Shape::line(
            Point::new(card.x + CARD_RADIUS, card.y),
            Point::new(card.right() - CARD_RADIUS, card.y),
        ),
        &edge,
        ACCENT_EDGE_WIDTH,
    );

    let inner_glow = Paint::RadialGradient {
        center: Point::new(card.center_x(), card.y),
        radius: card.height,
        stops: vec![
            GradientStop::new(0.0, theme.glow),
            GradientStop::new(1.0, RenderColor::transparent()),
        ],
    };
    surface.fill(&panel, &inner_glow);
}

/// League (uppercased) and kickoff joined by " - ", or None when both are blank
pub fn info_line(league: &str, kickoff: &str) -> Option<String> {
    let mut parts = Vec::new();
    if !league.trim().is_empty() {
        parts.push(league.to_uppercase());
    }
    if !kickoff.trim().is_empty() {
        parts.push(kickoff.to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" - "))
    }
}

fn display_name<'a>(name: &'a str, placeholder: &'a str) -> &'a str {
    if name.trim().is_empty() {
        placeholder
    } else {
        name
    }
}

/// Home team on the first line; "vs " and the away team on the second,
/// centered together even though they use different fonts
fn draw_names<S: Surface>(
    surface: &mut S,
    center_x: f32,
    metrics: &CardMetrics,
    game: &Match,
    theme: &Theme,
) {
    let home = display_name(&game.home.name, HOME_PLACEHOLDER);
    let home = truncate_text(surface, home, &name_font(), metrics.max_name_width);
    let style = TextStyle::new(name_font(), RenderColor::white()).centered();
    surface.fill_text(&home, Point::new(center_x, metrics.names_y), &style);

    let second_y = metrics.names_y + SECOND_NAME_OFFSET;
    let versus_width = surface.measure_text(VERSUS, &versus_font());
    let away = display_name(&game.away.name, AWAY_PLACEHOLDER);
    let away = truncate_text(
        surface,
        away,
        &name_font(),
        metrics.max_name_width - versus_width,
    );
    let away_width = surface.measure_text(&away, &name_font());
    let start_x = center_x - (versus_width + away_width) / 2.0;

    let versus_style = TextStyle::new(versus_font(), theme.accent.fade(0.7));
    surface.fill_text(VERSUS, Point::new(start_x, second_y), &versus_style);

    let away_style = TextStyle::new(name_font(), RenderColor::white().with_alpha(0.9));
    surface.fill_text(&away, Point::new(start_x + versus_width, second_y), &away_style);
}

/// Shorten `text` from the end until it plus an ellipsis fits `max_width`.
/// Text that already fits comes back unchanged; otherwise the result always
/// ends with the ellipsis, which is all that is left when nothing else fits.
pub fn truncate_text<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    font: &FontSpec,
    max_width: f32,
) -> String {
    if surface.measure_text(text, font) <= max_width {
        return text.to_string();
    }

    let mut end = text.len();
    loop {
        let candidate = format!("{}{}", &text[..end], ELLIPSIS);
        if end == 0 || surface.measure_text(&candidate, font) <= max_width {
            return candidate;
        }
        end = text[..end]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
    }
}

/// What an odds column shows for a value
pub fn odds_text(value: &str) -> &str {
    if value.trim().is_empty() {
        ODDS_PLACEHOLDER
    } else {
        value
    }
}

fn draw_odds<S: Surface>(surface: &mut S, card: &Rect, odds_y: f32, odds: &Odds, theme: &Theme) {
    let separator_y = odds_y - SEPARATOR_ABOVE_ODDS;
    let left = card.x + SEPARATOR_INSET;
    let right = card.right() - SEPARATOR_INSET;
    let faint = RenderColor::white().with_alpha(0.08);
    let separator = Paint::LinearGradient {
        start: Point::new(left, separator_y),
        end: Point::new(right, separator_y),
        stops: vec![
            GradientStop::new(0.0, RenderColor::transparent()),
            GradientStop::new(0.2, faint),
            GradientStop::new(0.8, faint),
            GradientStop::new(1.0, RenderColor::transparent()),
        ],
    };
    surface.stroke(
        &Shape::line(Point::new(left, separator_y), Point::new(right, separator_y)),
        &separator,
        1.0,
    );

    let values = [&odds.home, &odds.draw, &odds.away];
    let column_width = card.width / 3.0;

    for (i, (label, value)) in ODDS_LABELS.iter().zip(values).enumerate() {
        let center_x = card.x + column_width * i as f32 + column_width / 2.0;

        let label_style =
            TextStyle::new(odds_label_font(), RenderColor::white().with_alpha(0.4)).centered();
        surface.fill_text(
            label,
            Point::new(center_x, odds_y + ODDS_LABEL_OFFSET),
            &label_style,
        );

        let value_style = TextStyle::new(odds_value_font(), theme.accent)
            .centered()
            .with_glow(theme.accent, 18.0);
        surface.fill_text(
            odds_text(value),
            Point::new(center_x, odds_y + ODDS_VALUE_OFFSET),
            &value_style,
        );
    }
}

/// A square logo centered on `center`, or a faint shield when there is none
fn draw_logo<S: Surface>(surface: &mut S, center: Point, size: f32, logo: Option<&Picture>) {
    match logo {
        Some(picture) => {
            let rect = Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size);
            surface.draw_image(picture, rect, 0.0);
        }
        None => {
            let paint = Paint::Solid(RenderColor::white().with_alpha(0.12));
            surface.fill(&shield(center, size * 0.45), &paint);
        }
    }
}

/// Shield outline `size` tall: flat top, straight shoulders, curved point
pub fn shield(center: Point, size: f32) -> Shape {
    let half_width = size * 0.4;
    let top = center.y - size / 2.0;
    let bottom = center.y + size / 2.0;
    let shoulder = center.y;
    let curve_y = center.y + size * 0.35;
    Shape::Path(vec![
        PathSegment::MoveTo(Point::new(center.x - half_width, top)),
        PathSegment::LineTo(Point::new(center.x + half_width, top)),
        PathSegment::LineTo(Point::new(center.x + half_width, shoulder)),
        PathSegment::QuadTo(
            Point::new(center.x + half_width, curve_y),
            Point::new(center.x, bottom),
        ),
        PathSegment::QuadTo(
            Point::new(center.x - half_width, curve_y),
            Point::new(center.x - half_width, shoulder),
        ),
        PathSegment::Close,
    ])
}

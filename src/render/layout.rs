// Auto-layout: splits the canvas into header, games and footer bands with
// equal gaps, then stacks the game cards inside the games band.

use super::resolved::TitleLine;
use super::types::{Rect, RenderDimensions};

pub const TOP_MARGIN: f32 = 60.0;
pub const BOTTOM_MARGIN: f32 = 60.0;
/// Gap between header/games and games/footer
pub const SECTION_GAP: f32 = 30.0;
/// Extra space under every title line
pub const TITLE_LINE_SPACING: f32 = 15.0;
pub const FOOTER_PADDING_X: f32 = 140.0;

pub const CARD_MARGIN_X: f32 = 60.0;
pub const CARD_GAP: f32 = 25.0;
pub const CARD_MAX_HEIGHT: f32 = 420.0;

/// Where each section of the canvas goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPlan {
    pub header_top: f32,
    pub header_height: f32,
    pub games_top: f32,
    pub games_bottom: f32,
    pub footer_top: f32,
    pub footer_height: f32,
    pub footer_width: f32,
    pub footer_padding: f32,
}

impl LayoutPlan {
    pub fn games_height(&self) -> f32 {
        self.games_bottom - self.games_top
    }

    pub fn footer_rect(&self) -> Rect {
        Rect::new(
            self.footer_padding,
            self.footer_top,
            self.footer_width,
            self.footer_height,
        )
    }
}

/// Height the title takes: each line is as tall as its biggest segment, plus
/// line spacing. The header painter advances by exactly the same amount.
pub fn header_height(title: &[TitleLine]) -> f32 {
    title
        .iter()
        .map(|line| line.size() as f32 + TITLE_LINE_SPACING)
        .sum()
}

/// Lay out the three bands.
///
/// `footer_aspect` is the banner's height over width. The games band takes
/// whatever the header, footer and gaps leave, and is floored at zero when
/// they leave nothing.
pub fn compute_layout(
    dimensions: &RenderDimensions,
    title: &[TitleLine],
    footer_aspect: Option<f32>,
) -> LayoutPlan {
    let header_height = header_height(title);

    let footer_width = dimensions.width - FOOTER_PADDING_X * 2.0;
    let footer_height = footer_aspect.map_or(0.0, |aspect| footer_width * aspect);

    let usable_height = dimensions.height - TOP_MARGIN - BOTTOM_MARGIN;
    let games_height =
        (usable_height - header_height - footer_height - SECTION_GAP * 2.0).max(0.0);

    let header_top = TOP_MARGIN;
    let games_top = header_top + header_height + SECTION_GAP;
    let games_bottom = games_top + games_height;
    let footer_top = games_bottom + SECTION_GAP;

    LayoutPlan {
        header_top,
        header_height,
        games_top,
        games_bottom,
        footer_top,
        footer_height,
        footer_width,
        footer_padding: FOOTER_PADDING_X,
    }
}

/// Stack `count` cards in the games band: equal heights capped at
/// CARD_MAX_HEIGHT, fixed gaps, the whole block centered vertically.
pub fn layout_cards(dimensions: &RenderDimensions, plan: &LayoutPlan, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let available = plan.games_height();
    let total_gap = (count - 1) as f32 * CARD_GAP;
    let card_height = ((available - total_gap) / count as f32)
        .min(CARD_MAX_HEIGHT)
        .max(0.0);
    let block_height = count as f32 * card_height + total_gap;
    let top = plan.games_top + (available - block_height) / 2.0;
    let card_width = dimensions.width - CARD_MARGIN_X * 2.0;

    (0..count)
        .map(|i| {
            Rect::new(
                CARD_MARGIN_X,
                top + i as f32 * (card_height + CARD_GAP),
                card_width,
                card_height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::resolved::resolve_title;

    fn usable() -> f32 {
        RenderDimensions::default().height - TOP_MARGIN - BOTTOM_MARGIN
    }

    #[test]
    fn test_header_height() {
        assert_eq!(header_height(&resolve_title("JOGOS DO DIA")), 87.0);
        assert_eq!(
            header_height(&resolve_title("*25px*Jogos em *64px*DESTAQUE\n*30px*rodada")),
            64.0 + 15.0 + 30.0 + 15.0
        );
        assert_eq!(header_height(&[]), 0.0);
    }

    #[test]
    fn test_bands_add_up_without_footer() {
        let dims = RenderDimensions::default();
        let plan = compute_layout(&dims, &resolve_title("JOGOS DO DIA"), None);
        assert_eq!(plan.header_top, 60.0);
        assert_eq!(plan.games_top, 60.0 + 87.0 + 30.0);
        assert_eq!(plan.footer_height, 0.0);
        assert_eq!(
            plan.header_height + plan.games_height() + plan.footer_height + 2.0 * SECTION_GAP,
            usable()
        );
    }

    #[test]
    fn test_bands_add_up_with_footer() {
        let dims = RenderDimensions::default();
        let plan = compute_layout(&dims, &resolve_title("A\nB"), Some(0.25));
        assert_eq!(plan.footer_width, 800.0);
        assert_eq!(plan.footer_height, 200.0);
        assert_eq!(plan.footer_top, plan.games_bottom + SECTION_GAP);
        assert_eq!(
            plan.header_height + plan.games_height() + plan.footer_height + 2.0 * SECTION_GAP,
            usable()
        );
        assert_eq!(plan.footer_rect(), Rect::new(140.0, plan.footer_top, 800.0, 200.0));
    }

    #[test]
    fn test_overfull_layout_clamps_games_band() {
        let dims = RenderDimensions::default();
        let plan = compute_layout(&dims, &resolve_title("*900px*HUGE\n*900px*TITLE"), None);
        assert_eq!(plan.games_height(), 0.0);
        let cards = layout_cards(&dims, &plan, 3);
        assert!(cards.iter().all(|card| card.height == 0.0));
    }

    #[test]
    fn test_cards_are_capped_and_centered() {
        let dims = RenderDimensions::default();
        let plan = compute_layout(&dims, &resolve_title("JOGOS DO DIA"), None);
        let cards = layout_cards(&dims, &plan, 1);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].height, CARD_MAX_HEIGHT);
        assert_eq!(cards[0].width, 960.0);
        assert_eq!(cards[0].x, 60.0);
        let above = cards[0].y - plan.games_top;
        let below = plan.games_bottom - cards[0].bottom();
        assert!((above - below).abs() < 1e-3);
    }

    #[test]
    fn test_card_counts_fit_band() {
        let dims = RenderDimensions::default();
        for footer in [None, Some(0.3), Some(0.9)] {
            let plan = compute_layout(&dims, &resolve_title("L1\n*40px*L2"), footer);
            for count in 0..=4 {
                let cards = layout_cards(&dims, &plan, count);
                assert_eq!(cards.len(), count);
                let used: f32 = cards.iter().map(|c| c.height).sum::<f32>()
                    + count.saturating_sub(1) as f32 * CARD_GAP;
                assert!(used <= plan.games_height() + 1e-3);
                for pair in cards.windows(2) {
                    assert!((pair[1].y - pair[0].bottom() - CARD_GAP).abs() < 1e-3);
                }
                assert!(cards.iter().all(|c| c.height <= CARD_MAX_HEIGHT));
            }
        }
    }

    #[test]
    fn test_four_cards_share_a_tight_band() {
        let dims = RenderDimensions::default();
        let plan = compute_layout(&dims, &resolve_title("JOGOS DO DIA"), Some(0.5));
        let cards = layout_cards(&dims, &plan, 4);
        let expected = (plan.games_height() - 3.0 * CARD_GAP) / 4.0;
        assert!((cards[0].height - expected.min(CARD_MAX_HEIGHT)).abs() < 1e-3);
        assert!((cards[0].y - plan.games_top).abs() < 1e-3);
    }
}

// Render module - layout, painters and the surfaces they draw on

pub mod background;
pub mod decor;
pub mod empty;
pub mod footer;
pub mod games;
pub mod header;
pub mod layout;
pub mod raster;
pub mod recording;
pub mod resolved;
pub mod surface;
pub mod types;

// Re-export commonly used types
pub use layout::{compute_layout, layout_cards, LayoutPlan};
pub use raster::{FontConfig, RasterSurface, RenderError};
pub use recording::{DrawOp, RecordingSurface};
pub use resolved::{resolve_options, ResolvedOptions};
pub use surface::Surface;

use tracing::debug;

use crate::card::{Match, RenderOptions};
use crate::theme::ThemeRegistry;
use types::RenderDimensions;

/// Paint one complete card onto `surface`.
///
/// Always runs clear, background, decorations, layout, header, then either
/// the game cards or the empty state, then the footer. Nothing is kept
/// between calls and the inputs are only read.
pub fn render<S: Surface>(surface: &mut S, matches: &[Match], options: &RenderOptions) {
    render_with_registry(surface, matches, options, ThemeRegistry::builtin())
}

pub fn render_with_registry<S: Surface>(
    surface: &mut S,
    matches: &[Match],
    options: &RenderOptions,
    registry: &ThemeRegistry,
) {
    let dimensions = RenderDimensions::default();
    let resolved = resolve_options(options, registry);
    let matches = resolved::visible_matches(matches);

    surface.clear();
    background::draw_background(surface, &dimensions, resolved.theme, resolved.background);
    decor::draw_decorations(surface, &dimensions, resolved.theme);

    let plan = compute_layout(
        &dimensions,
        &resolved.title,
        resolved.footer.and_then(|footer| footer.aspect_ratio()),
    );
    debug!(
        "Layout: header {:.1}px, games {:.1}px, footer {:.1}px, {} matches",
        plan.header_height,
        plan.games_height(),
        plan.footer_height,
        matches.len()
    );

    header::draw_header(surface, &dimensions, &resolved.title, resolved.theme, plan.header_top);

    if matches.is_empty() {
        empty::draw_empty_state(surface, &dimensions);
    } else {
        games::draw_games(surface, &dimensions, &plan, matches, resolved.theme);
    }

    footer::draw_footer(surface, &plan, resolved.footer);
}

// Title: one or more centered lines, each possibly mixing font sizes

use super::layout::TITLE_LINE_SPACING;
use super::resolved::TitleLine;
use super::surface::Surface;
use super::types::{FontSpec, FontWeight, Point, RenderColor, RenderDimensions, TextStyle};
use crate::theme::Theme;

const TITLE_GLOW_BLUR: f32 = 30.0;

fn title_font(size: u32) -> FontSpec {
    FontSpec::display(FontWeight::Black, size as f32)
}

/// Draw the title starting at `top`. Every segment is measured at its own
/// size, the line is centered as a whole and segments follow each other
/// left to right on the line's vertical middle.
pub fn draw_header<S: Surface>(
    surface: &mut S,
    dimensions: &RenderDimensions,
    title: &[TitleLine],
    theme: &Theme,
    top: f32,
) {
    let mut line_top = top;

    for line in title {
        let line_size = line.size() as f32;
        let middle = line_top + line_size / 2.0;

        let widths: Vec<f32> = line
            .segments
            .iter()
            .map(|segment| surface.measure_text(&segment.text, &title_font(segment.size)))
            .collect();
        let total_width: f32 = widths.iter().sum();

        let mut x = dimensions.width / 2.0 - total_width / 2.0;
        for (segment, width) in line.segments.iter().zip(widths) {
            let style = TextStyle::new(title_font(segment.size), RenderColor::white())
                .with_glow(theme.accent, TITLE_GLOW_BLUR);
            surface.fill_text(&segment.text, Point::new(x, middle), &style);
            x += width;
        }

        line_top += line_size + TITLE_LINE_SPACING;
    }
}

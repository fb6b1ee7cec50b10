// Purely decorative layer: faint grid, corner brackets and diagonal lines

use super::surface::Surface;
use super::types::{Paint, Point, RenderColor, RenderDimensions, Shape};
use crate::theme::Theme;

const GRID_CELL: f32 = 60.0;
const GRID_ALPHA: f32 = 0.015;

const BRACKET_INSET: f32 = 40.0;
const BRACKET_ARM: f32 = 60.0;
const BRACKET_ALPHA: f32 = 0.15;
const BRACKET_WIDTH: f32 = 2.0;

const DIAGONAL_SPACING: f32 = 120.0;
const DIAGONAL_ALPHA: f32 = 0.03;

pub fn draw_decorations<S: Surface>(surface: &mut S, dimensions: &RenderDimensions, theme: &Theme) {
    let (w, h) = (dimensions.width, dimensions.height);

    let grid = Paint::Solid(RenderColor::white().with_alpha(GRID_ALPHA));
    let mut x = 0.0;
    while x < w {
        surface.stroke(&Shape::line(Point::new(x, 0.0), Point::new(x, h)), &grid, 1.0);
        x += GRID_CELL;
    }
    let mut y = 0.0;
    while y < h {
        surface.stroke(&Shape::line(Point::new(0.0, y), Point::new(w, y)), &grid, 1.0);
        y += GRID_CELL;
    }

    let bracket = Paint::Solid(theme.accent.fade(BRACKET_ALPHA));
    for shape in corner_brackets(dimensions) {
        surface.stroke(&shape, &bracket, BRACKET_WIDTH);
    }

    // Same accent stroke as the brackets, much fainter
    let diagonal = Paint::Solid(theme.accent.fade(DIAGONAL_ALPHA));
    let mut i = -h;
    while i < w + h {
        surface.stroke(
            &Shape::line(Point::new(i, 0.0), Point::new(i + h, h)),
            &diagonal,
            1.0,
        );
        i += DIAGONAL_SPACING;
    }
}

/// The four L shapes, each drawn from the end of its vertical arm, through
/// the corner, to the end of its horizontal arm
fn corner_brackets(dimensions: &RenderDimensions) -> [Shape; 4] {
    let (w, h) = (dimensions.width, dimensions.height);
    let near = BRACKET_INSET;
    let reach = BRACKET_INSET + BRACKET_ARM;
    let l = |corner: Point, vertical_end: f32, horizontal_end: f32| {
        Shape::polyline(&[
            Point::new(corner.x, vertical_end),
            corner,
            Point::new(horizontal_end, corner.y),
        ])
    };
    [
        l(Point::new(near, near), reach, reach),
        l(Point::new(w - near, near), reach, w - reach),
        l(Point::new(near, h - near), h - reach, reach),
        l(Point::new(w - near, h - near), h - reach, w - reach),
    ]
}

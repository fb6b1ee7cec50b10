// Optional banner under the games

use super::layout::LayoutPlan;
use super::surface::Surface;
use crate::images::Picture;

const FOOTER_RADIUS: f32 = 12.0;

pub fn draw_footer<S: Surface>(surface: &mut S, plan: &LayoutPlan, banner: Option<&Picture>) {
    let Some(banner) = banner else {
        return;
    };
    if plan.footer_height <= 0.0 {
        return;
    }
    surface.draw_image(banner, plan.footer_rect(), FOOTER_RADIUS);
}

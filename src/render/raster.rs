// Pixel renderer: tiny-skia for shapes and images, ab_glyph for text

use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, LinearGradient, PathBuilder, Pattern, Pixmap, PixmapPaint,
    RadialGradient, SpreadMode, Stroke, Transform,
};
use tracing::{debug, trace};

use super::surface::Surface;
use super::types::{
    FontFace, FontSpec, FontWeight, GradientStop, Paint, PathSegment, Point, Rect, RenderColor,
    RenderDimensions, Shape, TextAlign, TextStyle,
};
use crate::images::Picture;

/// Error type for raster rendering and export
#[derive(Debug)]
pub enum RenderError {
    IoError(std::io::Error),
    ImageError(String),
    FontError(String),
    EncodeError(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::IoError(e) => write!(f, "IO error: {}", e),
            RenderError::ImageError(s) => write!(f, "Image error: {}", s),
            RenderError::FontError(s) => write!(f, "Font error: {}", s),
            RenderError::EncodeError(s) => write!(f, "Encode error: {}", s),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::IoError(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::ImageError(e.to_string())
    }
}

/// Which fonts the raster surface looks for
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Families tried in order for titles, names and odds
    pub display_families: Vec<String>,
    /// Families tried in order for labels
    pub body_families: Vec<String>,
    /// Extra directories scanned for font files
    pub font_dirs: Vec<PathBuf>,
    pub load_system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            display_families: vec!["Outfit".to_string(), "Inter".to_string()],
            body_families: vec!["Inter".to_string()],
            font_dirs: Vec::new(),
            load_system_fonts: true,
        }
    }
}

const WEIGHTS: [FontWeight; 5] = [
    FontWeight::Normal,
    FontWeight::Medium,
    FontWeight::SemiBold,
    FontWeight::ExtraBold,
    FontWeight::Black,
];

/// Common sans families, tried in order when the configured ones are missing
const SANS_FALLBACKS: [&str; 6] = [
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "Roboto",
];

/// A sans family that is actually installed, or else any upright family
fn fallback_family(db: &fontdb::Database) -> Option<String> {
    let installed = |wanted: &str| {
        db.faces().find_map(|face| {
            face.families
                .iter()
                .find(|(family, _)| family.eq_ignore_ascii_case(wanted))
                .map(|(family, _)| family.clone())
        })
    };
    SANS_FALLBACKS.iter().find_map(|&wanted| installed(wanted)).or_else(|| {
        db.faces()
            .filter(|face| face.style == fontdb::Style::Normal)
            .find_map(|face| face.families.first().map(|(family, _)| family.clone()))
    })
}

/// Every face/weight combination the painters can ask for, resolved once
struct FontBook {
    fonts: HashMap<(FontFace, FontWeight), Arc<FontVec>>,
}

impl FontBook {
    fn load(config: &FontConfig) -> Result<Self, RenderError> {
        let mut db = fontdb::Database::new();
        if config.load_system_fonts {
            db.load_system_fonts();
        }
        for dir in &config.font_dirs {
            db.load_fonts_dir(dir);
        }
        debug!("Font database has {} faces", db.len());

        // fontdb maps sans-serif to Arial unless told otherwise
        if let Some(family) = fallback_family(&db) {
            debug!("Using {} as sans-serif", family);
            db.set_sans_serif_family(family);
        }

        let mut loaded: HashMap<fontdb::ID, Arc<FontVec>> = HashMap::new();
        let mut fonts = HashMap::new();

        for (face, families) in [
            (FontFace::Display, &config.display_families),
            (FontFace::Body, &config.body_families),
        ] {
            let mut query_families: Vec<fontdb::Family> = families
                .iter()
                .map(|name| fontdb::Family::Name(name.as_str()))
                .collect();
            query_families.push(fontdb::Family::SansSerif);

            for weight in WEIGHTS {
                let query = fontdb::Query {
                    families: &query_families,
                    weight: fontdb::Weight(weight.numeric()),
                    stretch: fontdb::Stretch::Normal,
                    style: fontdb::Style::Normal,
                };
                let id = db.query(&query).ok_or_else(|| {
                    RenderError::FontError(format!(
                        "No font found for {:?} at weight {}",
                        face,
                        weight.numeric()
                    ))
                })?;

                let font = match loaded.get(&id) {
                    Some(font) => font.clone(),
                    None => {
                        let font = db
                            .with_face_data(id, |data, index| {
                                FontVec::try_from_vec_and_index(data.to_vec(), index)
                            })
                            .ok_or_else(|| {
                                RenderError::FontError("Font data unavailable".to_string())
                            })?
                            .map_err(|e| RenderError::FontError(e.to_string()))?;
                        let font = Arc::new(font);
                        loaded.insert(id, font.clone());
                        font
                    }
                };
                fonts.insert((face, weight), font);
            }
        }

        Ok(Self { fonts })
    }

    fn get(&self, spec: &FontSpec) -> Arc<FontVec> {
        // Every combination is inserted by load()
        self.fonts[&(spec.face, spec.weight)].clone()
    }
}

/// Glyphs of one run positioned on a baseline starting at `x`
fn layout_glyphs(font: &FontVec, text: &str, size: f32, x: f32, baseline: f32) -> Vec<Glyph> {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let mut caret = x;
    let mut previous = None;
    let mut glyphs = Vec::new();

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }
    glyphs
}

fn advance_width(font: &FontVec, text: &str, size: f32) -> f32 {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut width = 0.0;
    let mut previous = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        previous = Some(id);
    }
    width
}

/// Glyphs taller or wider than this are skipped instead of rasterized
const MAX_GLYPH_EXTENT: f32 = 4096.0;

/// Anti-aliased text coverage over a small region of the canvas
struct Coverage {
    left: i32,
    top: i32,
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl Coverage {
    /// Coverage of `glyphs`, clipped to the canvas grown by `margin` on
    /// every side. None when nothing lands inside it.
    fn rasterize(
        font: &FontVec,
        glyphs: Vec<Glyph>,
        margin: i32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Option<Self> {
        let outlined: Vec<_> = glyphs
            .into_iter()
            .filter_map(|glyph| font.outline_glyph(glyph))
            .filter(|glyph| {
                let b = glyph.px_bounds();
                let fits = b.width() <= MAX_GLYPH_EXTENT && b.height() <= MAX_GLYPH_EXTENT;
                if !fits {
                    debug!("Skipping {:.0}x{:.0} glyph", b.width(), b.height());
                }
                fits
            })
            .collect();

        let mut bounds: Option<(f32, f32, f32, f32)> = None;
        for glyph in &outlined {
            let b = glyph.px_bounds();
            bounds = Some(match bounds {
                None => (b.min.x, b.min.y, b.max.x, b.max.y),
                Some((x0, y0, x1, y1)) => {
                    (x0.min(b.min.x), y0.min(b.min.y), x1.max(b.max.x), y1.max(b.max.y))
                }
            });
        }
        let (x0, y0, x1, y1) = bounds?;

        // Clip in f32 so far-away glyphs never reach integer math
        let m = margin as f32;
        let left = (x0.floor() - m).max(-m);
        let top = (y0.floor() - m).max(-m);
        let right = (x1.ceil() + m).min(canvas_width as f32 + m);
        let bottom = (y1.ceil() + m).min(canvas_height as f32 + m);
        if right <= left || bottom <= top {
            return None;
        }
        let width = (right - left) as usize;
        let height = (bottom - top) as usize;
        let (left, top) = (left as i32, top as i32);
        let mut values = vec![0.0f32; width * height];

        for glyph in &outlined {
            let b = glyph.px_bounds();
            if b.max.x < left as f32 || b.min.x > right || b.max.y < top as f32 || b.min.y > bottom
            {
                continue;
            }
            let origin_x = b.min.x as i32 - left;
            let origin_y = b.min.y as i32 - top;
            glyph.draw(|gx, gy, c| {
                let px = origin_x + gx as i32;
                let py = origin_y + gy as i32;
                if px >= 0 && py >= 0 && (px as usize) < width && (py as usize) < height {
                    let idx = py as usize * width + px as usize;
                    values[idx] = (values[idx] + c).min(1.0);
                }
            });
        }

        Some(Self {
            left,
            top,
            width,
            height,
            values,
        })
    }

    /// Three box blur passes, which is close enough to a gaussian
    fn blurred(&self, radius: usize) -> Self {
        let mut values = self.values.clone();
        if radius > 0 {
            for _ in 0..3 {
                values = box_blur(&values, self.width, self.height, radius, true);
                values = box_blur(&values, self.width, self.height, radius, false);
            }
        }
        Self {
            values,
            ..*self
        }
    }

    fn to_pixmap(&self, color: RenderColor) -> Option<Pixmap> {
        let mut pixmap = Pixmap::new(self.width as u32, self.height as u32)?;
        let [r, g, b, a] = color.to_rgba8();
        for (dst, coverage) in pixmap.pixels_mut().iter_mut().zip(&self.values) {
            let alpha = (a as f32 * coverage).round() as u8;
            *dst = ColorU8::from_rgba(r, g, b, alpha).premultiply();
        }
        Some(pixmap)
    }
}

fn box_blur(values: &[f32], width: usize, height: usize, radius: usize, horizontal: bool) -> Vec<f32> {
    let mut out = vec![0.0f32; values.len()];
    let window = (radius * 2 + 1) as f32;
    let (lines, length) = if horizontal { (height, width) } else { (width, height) };
    let index = |line: usize, pos: usize| {
        if horizontal {
            line * width + pos
        } else {
            pos * width + line
        }
    };

    // Prefix sums keep each pass linear in the region size
    let mut prefix = vec![0.0f32; length + 1];
    for line in 0..lines {
        for pos in 0..length {
            prefix[pos + 1] = prefix[pos] + values[index(line, pos)];
        }
        for pos in 0..length {
            let start = pos.saturating_sub(radius);
            let end = (pos + radius).min(length - 1);
            out[index(line, pos)] = (prefix[end + 1] - prefix[start]) / window;
        }
    }
    out
}

// Bezier control offsets follow the canvas quadratic-corner rounded rect
fn rounded_rect_path(rect: &Rect, radius: f32) -> Option<tiny_skia::Path> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}

fn to_path(shape: &Shape) -> Option<tiny_skia::Path> {
    match shape {
        Shape::Rect(rect) => {
            tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
                .map(PathBuilder::from_rect)
        }
        Shape::RoundedRect { rect, radius } => rounded_rect_path(rect, *radius),
        Shape::Circle { center, radius } => PathBuilder::from_circle(center.x, center.y, *radius),
        Shape::Path(segments) => {
            let mut pb = PathBuilder::new();
            for segment in segments {
                match *segment {
                    PathSegment::MoveTo(p) => pb.move_to(p.x, p.y),
                    PathSegment::LineTo(p) => pb.line_to(p.x, p.y),
                    PathSegment::QuadTo(c, p) => pb.quad_to(c.x, c.y, p.x, p.y),
                    PathSegment::Close => pb.close(),
                }
            }
            pb.finish()
        }
    }
}

fn color_to_skia(color: &RenderColor) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn point_to_skia(p: &Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(p.x, p.y)
}

fn stops_to_skia(stops: &[GradientStop]) -> Vec<tiny_skia::GradientStop> {
    stops
        .iter()
        .map(|stop| tiny_skia::GradientStop::new(stop.offset, color_to_skia(&stop.color)))
        .collect()
}

fn to_skia_paint(paint: &Paint) -> Option<tiny_skia::Paint<'static>> {
    let shader = match paint {
        Paint::Solid(color) => tiny_skia::Shader::SolidColor(color_to_skia(color)),
        Paint::LinearGradient { start, end, stops } => LinearGradient::new(
            point_to_skia(start),
            point_to_skia(end),
            stops_to_skia(stops),
            SpreadMode::Pad,
            Transform::identity(),
        )?,
        Paint::RadialGradient {
            center,
            radius,
            stops,
        } => RadialGradient::new(
            point_to_skia(center),
            point_to_skia(center),
            *radius,
            stops_to_skia(stops),
            SpreadMode::Pad,
            Transform::identity(),
        )?,
    };
    let mut skia_paint = tiny_skia::Paint::default();
    skia_paint.shader = shader;
    skia_paint.anti_alias = true;
    Some(skia_paint)
}

fn picture_to_pixmap(picture: &Picture) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(picture.width(), picture.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(picture.pixels().pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// A Surface backed by a 1080x1920 pixmap
pub struct RasterSurface {
    pixmap: Pixmap,
    fonts: FontBook,
}

impl RasterSurface {
    pub fn new(config: &FontConfig) -> Result<Self, RenderError> {
        let dimensions = RenderDimensions::default();
        let pixmap = Pixmap::new(dimensions.width as u32, dimensions.height as u32)
            .ok_or_else(|| RenderError::ImageError("Failed to allocate canvas".to_string()))?;
        let fonts = FontBook::load(config)?;
        Ok(Self { pixmap, fonts })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA bytes, row by row
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::EncodeError(e.to_string()))
    }

    /// The canvas as straight (not premultiplied) RGBA
    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    /// Write the canvas to `path`; the extension picks PNG or JPEG
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => {
                let rgb = DynamicImage::ImageRgba8(self.to_rgba_image()).to_rgb8();
                let mut writer = BufWriter::new(File::create(path)?);
                JpegEncoder::new_with_quality(&mut writer, 100).encode_image(&rgb)?;
            }
            Some("png") => {
                self.to_rgba_image().save_with_format(path, ImageFormat::Png)?;
            }
            _ => {
                return Err(RenderError::EncodeError(format!(
                    "Unsupported output format: {}",
                    path.display()
                )))
            }
        }
        debug!("Saved {}", path.display());
        Ok(())
    }

    fn composite(&mut self, coverage: &Coverage, color: RenderColor) {
        if let Some(layer) = coverage.to_pixmap(color) {
            self.pixmap.draw_pixmap(
                coverage.left,
                coverage.top,
                layer.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill(&mut self, shape: &Shape, paint: &Paint) {
        let (Some(path), Some(paint)) = (to_path(shape), to_skia_paint(paint)) else {
            trace!("Skipping degenerate fill");
            return;
        };
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke(&mut self, shape: &Shape, paint: &Paint, width: f32) {
        let (Some(path), Some(paint)) = (to_path(shape), to_skia_paint(paint)) else {
            trace!("Skipping degenerate stroke");
            return;
        };
        let stroke = Stroke {
            width,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn draw_image(&mut self, picture: &Picture, rect: Rect, corner_radius: f32) {
        let Some(source) = picture_to_pixmap(picture) else {
            return;
        };
        let shape = if corner_radius > 0.0 {
            Shape::RoundedRect {
                rect,
                radius: corner_radius,
            }
        } else {
            Shape::Rect(rect)
        };
        let Some(path) = to_path(&shape) else {
            return;
        };

        let transform = Transform::from_row(
            rect.width / picture.width() as f32,
            0.0,
            0.0,
            rect.height / picture.height() as f32,
            rect.x,
            rect.y,
        );
        let mut paint = tiny_skia::Paint::default();
        paint.shader = Pattern::new(
            source.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Bilinear,
            1.0,
            transform,
        );
        paint.anti_alias = true;
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> f32 {
        advance_width(&self.fonts.get(font), text, font.size)
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        let font = self.fonts.get(&style.font);
        let size = style.font.size;
        let width = advance_width(&font, text, size);
        let x = match style.align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - width / 2.0,
        };

        // Anchor is the middle of the em box
        let scaled = font.as_scaled(PxScale::from(size));
        let baseline = anchor.y + (scaled.ascent() + scaled.descent()) / 2.0;

        let blur_radius = style.glow.map_or(0, |glow| (glow.blur / 2.0).round() as usize);
        let margin = (blur_radius * 3 + 1) as i32;
        let glyphs = layout_glyphs(&font, text, size, x, baseline);
        let Some(coverage) = Coverage::rasterize(
            &font,
            glyphs,
            margin,
            self.pixmap.width(),
            self.pixmap.height(),
        ) else {
            return;
        };

        if let Some(glow) = style.glow {
            self.composite(&coverage.blurred(blur_radius), glow.color);
        }
        self.composite(&coverage, style.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
    }

    fn fixture_config() -> FontConfig {
        FontConfig {
            font_dirs: vec![fixture_dir()],
            load_system_fonts: false,
            ..FontConfig::default()
        }
    }

    fn fixture_font() -> FontVec {
        let bytes = std::fs::read(fixture_dir().join("DejaVuSans.ttf")).unwrap();
        FontVec::try_from_vec(bytes).unwrap()
    }

    #[test]
    fn test_fallback_family_finds_installed_sans() {
        let mut db = fontdb::Database::new();
        db.load_fonts_dir(fixture_dir());
        assert_eq!(fallback_family(&db).as_deref(), Some("DejaVu Sans"));
        assert_eq!(fallback_family(&fontdb::Database::new()), None);
    }

    #[test]
    fn test_missing_preferred_families_fall_back_to_sans() {
        // Neither Outfit nor Inter is among the fixtures
        let surface = RasterSurface::new(&fixture_config()).unwrap();
        let font = FontSpec::display(FontWeight::Black, 72.0);
        assert!(surface.measure_text("JOGOS", &font) > 0.0);
    }

    #[test]
    fn test_no_fonts_is_an_error() {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        assert!(matches!(
            RasterSurface::new(&config),
            Err(RenderError::FontError(_))
        ));
    }

    #[test]
    fn test_coverage_is_clipped_to_canvas() {
        let font = fixture_font();
        let glyphs = layout_glyphs(&font, "W", 3000.0, -500.0, 2500.0);
        let coverage = Coverage::rasterize(&font, glyphs, 10, 1080, 1920).unwrap();
        assert!(coverage.left >= -10 && coverage.top >= -10);
        assert!(coverage.width <= 1100 && coverage.height <= 1940);
    }

    #[test]
    fn test_oversized_and_offscreen_glyphs_are_skipped() {
        let font = fixture_font();
        let huge = layout_glyphs(&font, "W", 30000.0, 0.0, 15000.0);
        assert!(Coverage::rasterize(&font, huge, 10, 1080, 1920).is_none());

        let far = layout_glyphs(&font, "W", 64.0, 0.0, 4.0e9);
        assert!(Coverage::rasterize(&font, far, 10, 1080, 1920).is_none());
    }

    #[test]
    fn test_rounded_rect_rejects_empty() {
        assert!(rounded_rect_path(&Rect::new(0.0, 0.0, 0.0, 10.0), 4.0).is_none());
        assert!(rounded_rect_path(&Rect::new(0.0, 0.0, 10.0, 10.0), 40.0).is_some());
    }

    #[test]
    fn test_to_path_shapes() {
        assert!(to_path(&Shape::Rect(Rect::new(1.0, 1.0, 5.0, 5.0))).is_some());
        assert!(to_path(&Shape::Circle {
            center: Point::new(5.0, 5.0),
            radius: 2.0
        })
        .is_some());
        assert!(to_path(&Shape::line(Point::new(0.0, 0.0), Point::new(3.0, 4.0))).is_some());
    }

    #[test]
    fn test_box_blur_spreads_and_conserves() {
        let mut values = vec![0.0f32; 9];
        values[4] = 1.0;
        let blurred = box_blur(&values, 9, 1, 1, true);
        assert_eq!(&blurred[3..6], &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
        let total: f32 = blurred.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_color_conversion() {
        let color = color_to_skia(&RenderColor::rgb8(255, 128, 0));
        assert_eq!(color.red(), 1.0);
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_picture_to_pixmap_premultiplies() {
        let picture = Picture::new(RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 0])));
        let pixmap = picture_to_pixmap(&picture).unwrap();
        let pixel = pixmap.pixels()[0];
        assert_eq!((pixel.red(), pixel.alpha()), (0, 0));
    }
}

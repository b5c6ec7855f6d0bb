use cosmic_text::{
    fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight,
};
use types::Color;

use crate::Canvas;

/// Bold sans-serif font files probed in order at painter construction.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\segoeuib.ttf",
];

/// Ink bounding box of a piece of shaped text, relative to the layout
/// origin handed to [`TextPainter::draw`].
#[derive(Debug, Clone, Copy)]
pub struct InkBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl InkBox {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }
}

/// Shapes and rasterizes text onto a [`Canvas`].
///
/// Construction probes [`FONT_CANDIDATES`]; if none of them exists the
/// painter falls back to whatever the operating system enumerates and a
/// generic bold sans-serif family. On a host with no fonts at all, text
/// simply produces no ink.
pub struct TextPainter {
    font_system: FontSystem,
    cache: SwashCache,
    family: Option<String>,
}

impl TextPainter {
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        let family = load_candidate(&mut db);
        if family.is_none() {
            log::warn!("no bundled font candidate found, falling back to system fonts");
            db.load_system_fonts();
        }
        let font_system = FontSystem::new_with_locale_and_db("en-US".to_string(), db);
        Self { font_system, cache: SwashCache::new(), family }
    }

    /// Measure the exact ink extents of `text` at `px` pixels, relative
    /// to the layout origin. `None` when the text produces no ink (empty
    /// string, whitespace, or no usable font).
    pub fn measure(&mut self, text: &str, px: f32) -> Option<InkBox> {
        if text.is_empty() {
            return None;
        }
        let buffer = self.shape(text, px);
        let mut bounds: Option<InkBox> = None;
        let white = cosmic_text::Color::rgba(255, 255, 255, 255);
        buffer.draw(&mut self.font_system, &mut self.cache, white, |x, y, w, h, c| {
            if c.a() == 0 || w == 0 || h == 0 {
                return;
            }
            extend(&mut bounds, x, y, x + w as i32 - 1, y + h as i32 - 1);
        });
        bounds
    }

    /// Rasterize `text` at `px` pixels with its layout origin at
    /// (origin_x, origin_y), tinted with `color` and source-over blended
    /// onto the canvas.
    pub fn draw(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        px: f32,
        origin_x: i32,
        origin_y: i32,
        color: Color,
    ) {
        if text.is_empty() {
            return;
        }
        let buffer = self.shape(text, px);
        let tint = cosmic_text::Color::rgba(color.r, color.g, color.b, color.a);
        buffer.draw(&mut self.font_system, &mut self.cache, tint, |x, y, w, h, c| {
            if c.a() == 0 {
                return;
            }
            let src = Color::rgba(c.r(), c.g(), c.b(), c.a());
            for dy in 0..h as i32 {
                for dx in 0..w as i32 {
                    canvas.blend(origin_x + x + dx, origin_y + y + dy, src);
                }
            }
        });
    }

    fn shape(&mut self, text: &str, px: f32) -> Buffer {
        let family = self.family.clone();
        let attrs = match &family {
            Some(name) => Attrs::new().weight(Weight::BOLD).family(Family::Name(name)),
            None => Attrs::new().weight(Weight::BOLD).family(Family::SansSerif),
        };
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(px, px * 1.2));
        // generous layout box so single-line labels never wrap
        buffer.set_size(&mut self.font_system, Some(8192.0), Some(8192.0));
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

impl Default for TextPainter {
    fn default() -> Self {
        Self::new()
    }
}

fn extend(bounds: &mut Option<InkBox>, x0: i32, y0: i32, x1: i32, y1: i32) {
    match bounds {
        None => {
            *bounds = Some(InkBox { min_x: x0, min_y: y0, max_x: x1, max_y: y1 });
        }
        Some(b) => {
            b.min_x = b.min_x.min(x0);
            b.min_y = b.min_y.min(y0);
            b.max_x = b.max_x.max(x1);
            b.max_y = b.max_y.max(y1);
        }
    }
}

fn load_candidate(db: &mut fontdb::Database) -> Option<String> {
    for candidate in FONT_CANDIDATES {
        let path = std::path::Path::new(candidate);
        if !path.exists() || db.load_font_file(path).is_err() {
            continue;
        }
        let family = db.faces().find_map(|face| match &face.source {
            fontdb::Source::File(p) if p.as_path() == path => {
                face.families.first().map(|(name, _)| name.clone())
            }
            _ => None,
        });
        if let Some(name) = family {
            log::debug!("text font: {} ({})", name, path.display());
            return Some(name);
        }
    }
    None
}

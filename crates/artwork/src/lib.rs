//! The badge rendering recipe: one linear pipeline of drawing calls that
//! turns a [`Theme`] into the finished 1024x1024 master canvas.

use rand::rngs::StdRng;
use rand::SeedableRng;
use raster::{Canvas, TextPainter};
use types::{Color, Theme};

/// Master render resolution. ICO variants are downsampled from this.
pub const MASTER_SIZE: u32 = 1024;

/// Fixed default grain seed, so plain re-runs are byte-identical.
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Palm fronds fan out at these angles from the crown.
const FROND_ANGLES_DEG: [f32; 6] = [-70.0, -45.0, -20.0, 15.0, 40.0, 65.0];
const FROND_RX: f32 = 180.0;
const FROND_RY: f32 = 110.0;
const CROWN_Y_FRAC: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub label: String,
    pub subtitle: String,
    pub seed: u64,
}

impl RenderOptions {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            label: "NL".to_string(),
            subtitle: "NocLauncher".to_string(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Render the full badge artwork. Identical options produce identical
/// pixels.
pub fn render(opts: &RenderOptions) -> Canvas {
    let t = &opts.theme;
    let mut canvas = Canvas::new(MASTER_SIZE, MASTER_SIZE, t.sky_top);

    log::debug!("painting sky and glow");
    canvas.fill_vertical_gradient(t.sky_top, t.sky_bottom);
    paint_glow(&mut canvas, t);
    paint_scan_lines(&mut canvas, t);

    log::debug!("painting silhouettes");
    paint_skyline(&mut canvas, t);
    paint_palms(&mut canvas, t);

    log::debug!("painting badge");
    paint_badge(&mut canvas, t);
    let mut painter = TextPainter::new();
    paint_monogram(&mut canvas, &mut painter, t, &opts.label);
    paint_accent(&mut canvas, &mut painter, t, &opts.subtitle);

    log::debug!("finishing: grain seed {:#x}", opts.seed);
    let mut rng = StdRng::seed_from_u64(opts.seed);
    canvas.grain(&mut rng, t.grain.samples, t.grain.amplitude);
    if let Some(v) = t.vignette {
        canvas.vignette(v.start, v.strength);
    }
    canvas
}

fn paint_glow(canvas: &mut Canvas, t: &Theme) {
    let cx = canvas.width() as i32 / 2;
    let cy = (canvas.height() as f32 * t.glow_center_y_frac) as i32;
    let g = t.glow;
    let mut radius = g.radius_max as i32;
    while radius > g.radius_min as i32 {
        let fade = g.radius_max as i32 - radius;
        let alpha = (g.alpha_max as i32 - fade).max(0) as u8;
        let mut color = g.color.with_alpha(alpha);
        if let Some(period) = g.band_period {
            color.g = color.g.saturating_add((radius % period as i32) as u8);
        }
        canvas.fill_ellipse(cx, cy, radius, radius, color);
        radius -= g.step as i32;
    }
}

fn paint_scan_lines(canvas: &mut Canvas, t: &Theme) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let cy = (h * t.glow_center_y_frac) as i32;
    let s = t.scan_lines;
    let x0 = (w * s.x0_frac) as i32;
    let x1 = (w * s.x1_frac) as i32;
    for i in 0..s.count as i32 {
        let y = cy + s.y_offset + i * s.y_step;
        canvas.fill_rect(x0, y, x1, y + s.height as i32, s.color);
    }
}

fn paint_skyline(canvas: &mut Canvas, t: &Theme) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let mut pts: Vec<(i32, i32)> = t
        .skyline
        .iter()
        .map(|p| (p.x as i32, (h as f32 * p.y_frac) as i32))
        .collect();
    pts.push((w, h));
    pts.push((0, h));
    canvas.fill_polygon(&pts, t.skyline_fill);
}

fn paint_palms(canvas: &mut Canvas, t: &Theme) {
    let crown_y = (canvas.height() as f32 * CROWN_Y_FRAC) as i32;
    let p = &t.palms;
    for &x in &p.xs {
        let x = x as i32;
        canvas.thick_line(
            x,
            crown_y,
            x + p.trunk_lean,
            p.trunk_base_y as i32,
            p.trunk_width,
            p.trunk_color,
        );
        for deg in FROND_ANGLES_DEG {
            let rad = deg.to_radians();
            let ex = x + (rad.cos() * FROND_RX) as i32;
            let ey = crown_y + (rad.sin() * FROND_RY) as i32;
            canvas.thick_line(x, crown_y, ex, ey, p.frond_width, p.frond_color);
        }
    }
}

fn badge_rect(canvas: &Canvas, t: &Theme) -> (i32, i32, i32, i32) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let pad = t.badge.pad as i32;
    let top = (h as f32 * t.badge.top_frac) as i32;
    (pad, top, w - pad, h - pad)
}

fn paint_badge(canvas: &mut Canvas, t: &Theme) {
    let b = t.badge;
    let (x0, y0, x1, y1) = badge_rect(canvas, t);

    // drop shadow: offset silhouette on a scratch layer, blurred, then
    // composited before the panel itself goes down
    let mut shadow = Canvas::transparent(canvas.width(), canvas.height());
    shadow.fill_rounded_rect(
        x0 + b.shadow_dx,
        y0 + b.shadow_dy,
        x1 + b.shadow_dx,
        y1 + b.shadow_dy,
        b.radius,
        Color::rgba(0, 0, 0, b.shadow_alpha),
    );
    let shadow = shadow.blurred(b.shadow_blur);
    canvas.composite(&shadow);

    canvas.fill_rounded_rect(x0, y0, x1, y1, b.radius, b.fill);
    canvas.stroke_rounded_rect(x0, y0, x1, y1, b.radius, b.outline_width, b.outline);
}

fn paint_monogram(canvas: &mut Canvas, painter: &mut TextPainter, t: &Theme, label: &str) {
    let m = &t.monogram;
    let Some(ink) = painter.measure(label, m.px) else {
        log::warn!("monogram {label:?} produced no ink, skipping");
        return;
    };
    let anchor_x = (canvas.width() as i32 - ink.width()) / 2 - ink.min_x;
    let anchor_y =
        (canvas.height() as f32 * m.center_y_frac) as i32 - ink.height() / 2 - ink.min_y;
    for layer in &m.layers {
        painter.draw(
            canvas,
            label,
            m.px,
            anchor_x + layer.dx,
            anchor_y + layer.dy,
            layer.color,
        );
    }
}

fn paint_accent(canvas: &mut Canvas, painter: &mut TextPainter, t: &Theme, subtitle: &str) {
    let a = t.accent;
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let (x0, y0) = ((w * a.x0_frac) as i32, (h * a.y0_frac) as i32);
    let (x1, y1) = ((w * a.x1_frac) as i32, (h * a.y1_frac) as i32);
    canvas.fill_rounded_rect(x0, y0, x1, y1, a.radius, a.fill);

    let Some(ink) = painter.measure(subtitle, a.subtitle_px) else {
        return;
    };
    let anchor_x = (w as i32 - ink.width()) / 2 - ink.min_x;
    let anchor_y = (y0 + y1) / 2 - ink.height() / 2 - ink.min_y;
    painter.draw(canvas, subtitle, a.subtitle_px, anchor_x, anchor_y, a.subtitle_color);
}

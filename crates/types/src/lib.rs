use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// One upper vertex of the skyline silhouette. `x` is an absolute master
/// pixel column, `y_frac` a fraction of the master height.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct SkyPoint {
    pub x: u32,
    pub y_frac: f32,
}

/// Concentric-disc glow behind the skyline. Discs run from `radius_max`
/// down to `radius_min` stepping `step`; disc alpha fades linearly from
/// `alpha_max` as radius shrinks. `band_period` shifts the green channel
/// by `radius % period` for a banded look.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Glow {
    pub color: Color,
    pub radius_max: u32,
    pub radius_min: u32,
    pub step: u32,
    pub alpha_max: u8,
    pub band_period: Option<u8>,
}

/// Horizontal scan bars below the glow center.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ScanLines {
    pub count: u32,
    pub y_offset: i32,
    pub y_step: i32,
    pub x0_frac: f32,
    pub x1_frac: f32,
    pub height: u32,
    pub color: Color,
}

/// Palm-tree silhouettes: a leaning trunk per `xs` entry plus a fixed fan
/// of fronds.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Palms {
    pub xs: Vec<u32>,
    pub trunk_lean: i32,
    pub trunk_base_y: u32,
    pub trunk_width: u32,
    pub trunk_color: Color,
    pub frond_width: u32,
    pub frond_color: Color,
}

/// The rounded emblem panel and its drop shadow.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Badge {
    pub pad: u32,
    pub top_frac: f32,
    pub radius: u32,
    pub fill: Color,
    pub outline: Color,
    pub outline_width: u32,
    pub shadow_dx: i32,
    pub shadow_dy: i32,
    pub shadow_blur: f32,
    pub shadow_alpha: u8,
}

/// One monogram text layer, offset from the centered anchor.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct TextLayer {
    pub dx: i32,
    pub dy: i32,
    pub color: Color,
}

/// The large layered initials inside the badge.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Monogram {
    pub px: f32,
    pub center_y_frac: f32,
    pub layers: Vec<TextLayer>,
}

/// The rounded bar near the bottom of the badge and its subtitle text.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct AccentBar {
    pub x0_frac: f32,
    pub x1_frac: f32,
    pub y0_frac: f32,
    pub y1_frac: f32,
    pub radius: u32,
    pub fill: Color,
    pub subtitle_px: f32,
    pub subtitle_color: Color,
}

/// Per-pixel brightness perturbation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Grain {
    pub samples: u32,
    pub amplitude: i16,
}

/// Radial darkening toward the image edges. `start` is the normalized
/// radius where darkening begins, `strength` the fraction removed at the
/// far corner.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Vignette {
    pub start: f32,
    pub strength: f32,
}

/// Everything that distinguishes one rendition of the badge artwork.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub sky_top: Color,
    pub sky_bottom: Color,
    pub glow_center_y_frac: f32,
    pub glow: Glow,
    pub scan_lines: ScanLines,
    pub skyline: Vec<SkyPoint>,
    pub skyline_fill: Color,
    pub palms: Palms,
    pub badge: Badge,
    pub monogram: Monogram,
    pub accent: AccentBar,
    pub grain: Grain,
    pub vignette: Option<Vignette>,
}

#[derive(Debug, Error)]
#[error("unknown theme `{0}` (known themes: sunset, neon)")]
pub struct UnknownTheme(pub String);

impl Theme {
    /// Preset lookup by name.
    pub fn from_name(name: &str) -> Result<Theme, UnknownTheme> {
        match name {
            "sunset" => Ok(Theme::sunset()),
            "neon" => Ok(Theme::neon()),
            other => Err(UnknownTheme(other.to_string())),
        }
    }

    /// Pink dusk rendition.
    pub fn sunset() -> Theme {
        Theme {
            sky_top: Color::rgb(28, 20, 45),
            sky_bottom: Color::rgb(140, 36, 71),
            glow_center_y_frac: 0.42,
            glow: Glow {
                color: Color::rgb(255, 120, 140),
                radius_max: 340,
                radius_min: 40,
                step: 8,
                alpha_max: 190,
                band_period: Some(80),
            },
            scan_lines: ScanLines {
                count: 9,
                y_offset: 30,
                y_step: 24,
                x0_frac: 0.2,
                x1_frac: 0.8,
                height: 10,
                color: Color::rgba(255, 120, 170, 150),
            },
            skyline: sky(&[
                (0, 0.72),
                (60, 0.66),
                (120, 0.69),
                (170, 0.62),
                (240, 0.68),
                (310, 0.6),
                (380, 0.67),
                (460, 0.58),
                (540, 0.66),
                (620, 0.59),
                (700, 0.67),
                (790, 0.61),
                (860, 0.7),
                (930, 0.64),
                (1024, 0.69),
            ]),
            skyline_fill: Color::rgba(18, 16, 24, 235),
            palms: Palms {
                xs: vec![170, 820],
                trunk_lean: -8,
                trunk_base_y: 920,
                trunk_width: 16,
                trunk_color: Color::rgb(26, 22, 30),
                frond_width: 10,
                frond_color: Color::rgba(26, 22, 30, 240),
            },
            badge: Badge {
                pad: 90,
                top_frac: 0.64,
                radius: 70,
                fill: Color::rgba(28, 22, 34, 240),
                outline: Color::rgba(255, 140, 200, 220),
                outline_width: 10,
                shadow_dx: 8,
                shadow_dy: 14,
                shadow_blur: 8.0,
                shadow_alpha: 170,
            },
            monogram: Monogram {
                px: 240.0,
                center_y_frac: 0.69,
                layers: vec![
                    TextLayer { dx: -8, dy: 8, color: Color::rgba(20, 10, 25, 230) },
                    TextLayer { dx: 0, dy: 0, color: Color::rgb(255, 180, 230) },
                    TextLayer { dx: 0, dy: 6, color: Color::rgb(255, 90, 170) },
                ],
            },
            accent: AccentBar {
                x0_frac: 0.26,
                x1_frac: 0.74,
                y0_frac: 0.86,
                y1_frac: 0.92,
                radius: 20,
                fill: Color::rgba(255, 95, 160, 220),
                subtitle_px: 56.0,
                subtitle_color: Color::rgb(35, 20, 40),
            },
            grain: Grain { samples: 18000, amplitude: 12 },
            vignette: None,
        }
    }

    /// Green dusk rendition.
    pub fn neon() -> Theme {
        Theme {
            sky_top: Color::rgb(8, 32, 22),
            sky_bottom: Color::rgb(20, 180, 70),
            glow_center_y_frac: 0.42,
            glow: Glow {
                color: Color::rgb(80, 255, 170),
                radius_max: 360,
                radius_min: 30,
                step: 7,
                alpha_max: 190,
                band_period: None,
            },
            scan_lines: ScanLines {
                count: 11,
                y_offset: 22,
                y_step: 22,
                x0_frac: 0.18,
                x1_frac: 0.82,
                height: 8,
                color: Color::rgba(110, 255, 190, 140),
            },
            skyline: sky(&[
                (0, 0.72),
                (70, 0.64),
                (130, 0.69),
                (200, 0.59),
                (270, 0.67),
                (340, 0.57),
                (410, 0.66),
                (500, 0.56),
                (585, 0.64),
                (670, 0.58),
                (760, 0.68),
                (835, 0.61),
                (910, 0.7),
                (1024, 0.66),
            ]),
            skyline_fill: Color::rgba(10, 18, 14, 240),
            palms: Palms {
                xs: vec![170, 840],
                trunk_lean: -6,
                trunk_base_y: 930,
                trunk_width: 16,
                trunk_color: Color::rgb(12, 22, 16),
                frond_width: 10,
                frond_color: Color::rgba(14, 26, 18, 245),
            },
            badge: Badge {
                pad: 84,
                top_frac: 0.64,
                radius: 74,
                fill: Color::rgba(10, 34, 22, 238),
                outline: Color::rgba(130, 255, 200, 240),
                outline_width: 10,
                shadow_dx: 10,
                shadow_dy: 14,
                shadow_blur: 10.0,
                shadow_alpha: 170,
            },
            monogram: Monogram {
                px: 246.0,
                center_y_frac: 0.69,
                layers: vec![
                    TextLayer { dx: -9, dy: 9, color: Color::rgba(6, 22, 14, 230) },
                    TextLayer { dx: 0, dy: 0, color: Color::rgb(180, 255, 220) },
                    TextLayer { dx: 0, dy: 7, color: Color::rgb(30, 220, 140) },
                ],
            },
            accent: AccentBar {
                x0_frac: 0.23,
                x1_frac: 0.77,
                y0_frac: 0.86,
                y1_frac: 0.92,
                radius: 22,
                fill: Color::rgba(70, 255, 170, 225),
                subtitle_px: 54.0,
                subtitle_color: Color::rgb(8, 30, 18),
            },
            grain: Grain { samples: 22000, amplitude: 14 },
            vignette: Some(Vignette { start: 0.35, strength: 0.14 }),
        }
    }
}

fn sky(points: &[(u32, f32)]) -> Vec<SkyPoint> {
    points.iter().map(|&(x, y_frac)| SkyPoint { x, y_frac }).collect()
}

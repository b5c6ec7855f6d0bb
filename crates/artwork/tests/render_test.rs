use artwork::{render, RenderOptions, MASTER_SIZE};
use types::Theme;

#[test]
fn test_render_master_dimensions() {
    let canvas = render(&RenderOptions::new(Theme::sunset()));
    assert_eq!(canvas.width(), MASTER_SIZE);
    assert_eq!(canvas.height(), MASTER_SIZE);
}

#[test]
fn test_sunset_render_is_fully_opaque() {
    let img = render(&RenderOptions::new(Theme::sunset())).into_image();
    assert!(img.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn test_same_seed_is_byte_identical() {
    let opts = RenderOptions::new(Theme::neon());
    let a = render(&opts).into_image();
    let b = render(&opts).into_image();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn test_different_seeds_differ() {
    let opts = RenderOptions::new(Theme::sunset());
    let mut other = opts.clone();
    other.seed = opts.seed + 1;
    let a = render(&opts).into_image();
    let b = render(&other).into_image();
    assert_ne!(a.as_raw(), b.as_raw());
}

#[test]
fn test_scene_layout_without_grain() {
    // grain disabled so individual pixels are predictable
    let mut theme = Theme::sunset();
    theme.grain.samples = 0;
    let canvas = render(&RenderOptions::new(theme.clone()));

    // top edge is the untouched gradient start
    assert_eq!(canvas.get(2, 0), Some(theme.sky_top));

    // just above the bottom edge, left of the badge pad, the skyline
    // silhouette dominates: much darker than the gradient behind it
    let p = canvas.get(40, 1000).unwrap();
    assert!(p.r < 60 && p.g < 60 && p.b < 60);
}

#[test]
fn test_themes_render_differently() {
    let mut sunset = Theme::sunset();
    let mut neon = Theme::neon();
    sunset.grain.samples = 0;
    neon.grain.samples = 0;
    let a = render(&RenderOptions::new(sunset)).into_image();
    let b = render(&RenderOptions::new(neon)).into_image();
    assert_ne!(a.as_raw(), b.as_raw());
}

//! Export of rendered artwork: the PNG master and the multi-resolution
//! Windows ICO bundle.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::RgbaImage;
use std::fs::File;
use std::path::Path;

/// The size variants packed into the ICO, largest first.
pub const ICO_SIZES: [u32; 7] = [256, 128, 64, 48, 32, 24, 16];

/// Write the master image as a PNG, creating parent directories.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

/// Write a multi-resolution ICO containing every [`ICO_SIZES`] variant,
/// each resampled from the master with a Lanczos3 filter.
pub fn write_ico(img: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut dir = ico::IconDir::new(ico::ResourceType::Icon);
    for &size in ICO_SIZES.iter() {
        let resized = image::imageops::resize(img, size, size, FilterType::Lanczos3);
        let entry = ico::IconImage::from_rgba_data(size, size, resized.into_raw());
        dir.add_entry(
            ico::IconDirEntry::encode(&entry)
                .with_context(|| format!("encoding {size}px icon entry"))?,
        );
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    dir.write(file)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} ({} sizes)", path.display(), ICO_SIZES.len());
    Ok(())
}

/// Pixel dimensions of an image file on disk.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    let dims = image::image_dimensions(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(dims)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
    }
    Ok(())
}

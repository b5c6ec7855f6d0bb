use image::{Rgba, RgbaImage};
use std::collections::BTreeSet;
use std::fs::File;

fn test_master(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for (x, y, p) in img.enumerate_pixels_mut() {
        *p = Rgba([(x % 256) as u8, (y % 256) as u8, 80, 255]);
    }
    img
}

#[test]
fn test_write_png_dimensions_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");
    let master = test_master(1024);
    io::write_png(&master, &path).unwrap();
    assert!(path.exists());
    assert_eq!(io::image_dimensions(&path).unwrap(), (1024, 1024));
}

#[test]
fn test_write_ico_contains_declared_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.ico");
    io::write_ico(&test_master(300), &path).unwrap();

    let read = ico::IconDir::read(File::open(&path).unwrap()).unwrap();
    assert_eq!(read.entries().len(), io::ICO_SIZES.len());
    let found: BTreeSet<(u32, u32)> =
        read.entries().iter().map(|e| (e.width(), e.height())).collect();
    let expected: BTreeSet<(u32, u32)> =
        io::ICO_SIZES.iter().map(|&s| (s, s)).collect();
    assert_eq!(found, expected);
}

#[test]
fn test_writers_create_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("nested/assets/icon.png");
    let ico_path = dir.path().join("other/assets/icon.ico");
    let master = test_master(64);
    io::write_png(&master, &png).unwrap();
    io::write_ico(&master, &ico_path).unwrap();
    assert!(png.exists());
    assert!(ico_path.exists());
}

#[test]
fn test_write_png_missing_dir_context() {
    // a path whose parent is an existing *file* cannot be created
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();
    let path = blocker.join("icon.png");
    let err = io::write_png(&test_master(16), &path).unwrap_err();
    assert!(err.to_string().contains("creating"));
}

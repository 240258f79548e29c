use image::{ColorType, GrayImage, Luma, Rgb, RgbImage};
use image_manipulator::*;
use std::path::Path;
use tempfile::tempdir;

fn create_test_pattern(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x / 16 + y / 16) % 2 == 0 {
            Rgb([0, 0, 255])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

fn config_for(input: &Path, output: &Path) -> Config {
    Config {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        ..Config::default()
    }
}

#[test]
fn test_end_to_end_png() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sample.png");
    create_test_pattern(256, 256).save(&input).unwrap();

    let report = pipeline::run(config_for(&input, dir.path())).unwrap();
    assert_eq!(report.name, "sample");
    assert_eq!(report.format, ImageFormatKind::Png);
    assert_eq!(report.source_size, (256, 256));
    assert!(report.all_saved());

    let gray = image::open(dir.path().join("sample_grayscale.png")).unwrap();
    assert_eq!(gray.color(), ColorType::L8);
    assert_eq!((gray.width(), gray.height()), (256, 256));
    let gray = gray.to_luma8();
    assert_eq!(gray.get_pixel(0, 0), &Luma([29]));
    assert_eq!(gray.get_pixel(16, 0), &Luma([255]));

    let thumb = image::open(dir.path().join("sample_thumbnail.png")).unwrap();
    assert_eq!(thumb.color(), ColorType::L8);
    assert_eq!((thumb.width(), thumb.height()), (128, 128));
    assert_eq!(report.thumbnail.path, dir.path().join("sample_thumbnail.png"));
}

#[test]
fn test_thumbnail_follows_source_aspect() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("wide.bmp");
    create_test_pattern(512, 256).save(&input).unwrap();

    let report = pipeline::run(config_for(&input, dir.path())).unwrap();
    assert_eq!((report.grayscale.width, report.grayscale.height), (512, 256));
    assert_eq!((report.thumbnail.width, report.thumbnail.height), (256, 128));

    let thumb = image::open(dir.path().join("wide_thumbnail.bmp")).unwrap();
    assert_eq!((thumb.width(), thumb.height()), (256, 128));
}

#[test]
fn test_explicit_thumbnail_size_from_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("photo.jpg");
    create_test_pattern(300, 120).save(&input).unwrap();

    let mut config = config_for(&input, dir.path());
    config.thumbnail.width = Some(50);
    config.thumbnail.height = Some(50);

    let report = pipeline::run(config).unwrap();
    assert_eq!(report.format, ImageFormatKind::Jpg);

    let thumb = image::open(dir.path().join("photo_thumbnail.jpg")).unwrap();
    assert_eq!((thumb.width(), thumb.height()), (50, 50));
}

#[test]
fn test_invalid_extension_fails_without_reading() {
    let dir = tempdir().unwrap();
    // Valid PNG content under an unsupported name
    let input = dir.path().join("sample.gif");
    GrayImage::new(8, 8).save_with_format(&input, image::ImageFormat::Png).unwrap();

    let err = pipeline::run(config_for(&input, dir.path())).unwrap_err();
    assert!(matches!(err, ManipulatorError::InvalidFileType(ref ext) if ext == "gif"));
    assert!(!dir.path().join("sample_grayscale.gif").exists());
}

#[test]
fn test_corrupt_input_propagates_decode_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"definitely not a png").unwrap();

    let err = pipeline::run(config_for(&input, dir.path())).unwrap_err();
    assert!(matches!(err, ManipulatorError::Decode { .. }));
}

#[test]
fn test_unwritable_output_is_logged_by_default() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sample.png");
    create_test_pattern(64, 64).save(&input).unwrap();
    let missing = dir.path().join("no/such/dir");

    let report = pipeline::run(config_for(&input, &missing)).unwrap();
    assert!(!report.grayscale.saved);
    assert!(!report.thumbnail.saved);
    assert!(!report.all_saved());
}

#[test]
fn test_unwritable_output_fails_with_fail_policy() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sample.png");
    create_test_pattern(64, 64).save(&input).unwrap();

    let mut config = config_for(&input, &dir.path().join("no/such/dir"));
    config.save.on_error = SaveErrorPolicy::Fail;

    let err = pipeline::run(config).unwrap_err();
    assert!(matches!(err, ManipulatorError::Encode { .. }));
}

#[test]
fn test_single_thumbnail_dimension_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sample.png");
    create_test_pattern(64, 64).save(&input).unwrap();

    let mut config = config_for(&input, dir.path());
    config.thumbnail.height = Some(32);

    assert!(Pipeline::new(config).is_err());
    assert!(!dir.path().join("sample_grayscale.png").exists());
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("cfg.png");
    create_test_pattern(128, 64).save(&input).unwrap();
    let out_dir = dir.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();

    let mut config = config_for(&input, &out_dir);
    config.thumbnail.filter = ResizeFilter::Nearest;
    let config_path = dir.path().join("manipulator.toml");
    config.save_to_file(&config_path, ConfigFormat::Toml).unwrap();

    let loaded = image_manipulator::config::load_config_or_default(Some(config_path.as_path())).unwrap();
    let report = Pipeline::new(loaded).unwrap().run().unwrap();
    assert_eq!(report.thumbnail.path, out_dir.join("cfg_thumbnail.png"));
    assert_eq!((report.thumbnail.width, report.thumbnail.height), (256, 128));
    assert!(out_dir.join("cfg_grayscale.png").exists());
}

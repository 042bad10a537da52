// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Size};
use iced_crop::config::{self, Config, CropConfig, GeneralConfig};
use iced_crop::crop::{self, CropController, FrameLimits, PointerInput};
use iced_crop::i18n::fluent::I18n;
use iced_crop::media::export::decode_jpeg_data_uri;
use iced_crop::media::{decode_image, load_source, SourceImage};
use image_rs::{GenericImageView, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tempfile::tempdir;

/// 400×200 PNG: red left half, blue right half.
fn two_tone_png() -> Vec<u8> {
    let image = RgbaImage::from_fn(400, 200, |x, _| {
        if x < 200 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

fn controller_without_inset(aspect: f32) -> CropController {
    let config = Config {
        crop: CropConfig {
            frame_inset: Some(0.0),
            ..CropConfig::default()
        },
        ..Config::default()
    };
    CropController::new(config.crop.resolve(), aspect)
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("crop-dialog-cancel"), "Annuler");
}

#[test]
fn partial_crop_section_keeps_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[crop]\njpeg_quality = 75\nmax_scale = 3.0\n").expect("write");

    let settings = config::load_from_path(&path)
        .expect("valid toml")
        .crop
        .resolve();
    assert_eq!(settings.jpeg_quality, 75);
    assert_eq!(settings.scale_limits.max(), 3.0);
    assert_eq!(settings.scale_limits.min(), config::DEFAULT_MIN_SCALE);
    assert_eq!(settings.export_upscale, config::DEFAULT_EXPORT_UPSCALE);
}

#[test]
fn pan_then_commit_exports_the_visible_half() {
    let image = decode_image(&two_tone_png(), false).expect("decodes");
    let mut controller = controller_without_inset(1.0);
    let _ = controller.set_container(Size::new(300.0, 300.0));
    controller.set_image(image.size());

    // Frame 300×300, image covers 400×200 at scale 1.65 → 660×330 on screen.
    // Dragging far left pushes the right (blue) half under the frame.
    for input in [
        PointerInput::Press {
            position: Point::new(150.0, 150.0),
            contacts: 1,
        },
        PointerInput::Move {
            position: Point::new(-600.0, 150.0),
            contacts: 1,
        },
        PointerInput::Release,
    ] {
        let _ = controller.apply_pointer(input);
    }

    let result = crop::commit(&controller, Some(&image))
        .expect("export succeeds")
        .expect("image loaded");
    assert_eq!((result.width, result.height), (600, 600));

    let jpeg = decode_jpeg_data_uri(&result.data_uri).expect("valid data uri");
    assert_eq!(jpeg, result.jpeg);
    let decoded = image_rs::load_from_memory(&jpeg).expect("valid jpeg");
    assert_eq!(decoded.dimensions(), (600, 600));

    let center = decoded.get_pixel(300, 300);
    assert!(center[2] > 200 && center[0] < 60, "expected blue, got {center:?}");
}

#[tokio::test]
async fn load_source_reads_files_from_disk() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("two_tone.png");
    std::fs::write(&path, two_tone_png()).expect("write png");

    let image: SourceImage = load_source(path.to_string_lossy().into_owned())
        .await
        .expect("loads");
    assert_eq!((image.width(), image.height()), (400, 200));
}

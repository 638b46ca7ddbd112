//! End-to-end flows through the library: JSON in, PNG files out.

use std::fs;

use image::{Rgb, RgbImage};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use swatch::cli::strips::{self, StripsArgs};
use swatch::cli::InputArgs;
use swatch::output::Printer;
use swatch::{
    render_collage, write_png, ColorSequence, Config, StripRenderer, SwatchError, SwatchGenerator,
};

const TWELVE: &str = r##"[
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF",
    "#C0C0C0", "#808080", "#800000", "#808000", "#008000", "#800080"
]"##;

#[test]
fn test_swatches_for_twelve_colours() {
    let dir = tempdir().unwrap();
    let colours = ColorSequence::from_json(TWELVE).unwrap();

    let report = SwatchGenerator::new(8).generate(&colours, dir.path()).unwrap();

    let manifest = fs::read_to_string(dir.path().join("image_filenames.txt")).unwrap();
    let lines: Vec<&str> = manifest.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "01_#FF0000.png");
    assert_eq!(lines[9], "10_#808000.png");
    assert_eq!(lines[11], "12_#800080.png");
    assert_eq!(report.written.len(), 12);

    for name in &report.written {
        assert!(dir.path().join(name).is_file(), "missing {}", name);
    }
}

#[test]
fn test_collage_three_colours_layout() {
    let colours = ColorSequence::from_json(r##"["#FF0000","#00FF00","#0000FF"]"##).unwrap();
    let img = StripRenderer::new(1200).render(&colours).unwrap();

    assert_eq!(img.dimensions(), (1200, 1200));
    // Row 0: red then green, green stretched to the right edge.
    assert_eq!(img.get_pixel(10, 10).0, [255, 0, 0]);
    assert_eq!(img.get_pixel(1199, 599).0, [0, 255, 0]);
    // Row 1: blue across the full width and remaining height.
    assert_eq!(img.get_pixel(0, 600).0, [0, 0, 255]);
    assert_eq!(img.get_pixel(1199, 1199).0, [0, 0, 255]);
    // Shadow darkens the red just left of green: alpha 79 at distance 1 of 75.
    let shadowed = img.get_pixel(599, 300).0;
    assert!(shadowed[0] < 255 && shadowed[0] > 150);
    assert_eq!(&shadowed[1..], &[0, 0]);
}

#[test]
fn test_strips_command_empty_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("images");
    let args = StripsArgs {
        input: InputArgs {
            json: Some("[]".to_string()),
            input: None,
            output: Some(output.clone()),
        },
        overlay: None,
        size: Some(60),
    };

    let err = strips::run(args, &Config::default(), &Printer::plain()).unwrap_err();

    assert!(matches!(err, SwatchError::EmptyInput { .. }));
    assert!(!output.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_strips_command_palette_export_writes_collage() {
    let dir = tempdir().unwrap();
    let export = r##"{"palette":{"baseColors":[{"id":"a","hex":"#ff0000"},{"id":"b","hex":"#0000ff"}],
        "variations":{"a":{"tints":["#ff8080"]}}}}"##;
    let args = StripsArgs {
        input: InputArgs {
            json: Some(export.to_string()),
            input: None,
            output: Some(dir.path().to_path_buf()),
        },
        overlay: None,
        size: Some(60),
    };

    let path = strips::run(args, &Config::default(), &Printer::plain()).unwrap();

    // Three colours: red and pink on top, blue across the bottom.
    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (60, 60));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(img.get_pixel(59, 0).0, [255, 128, 128]);
    assert_eq!(img.get_pixel(59, 59).0, [0, 0, 255]);
}

#[test]
fn test_collage_with_overlay_written_to_disk() {
    let dir = tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    RgbImage::from_pixel(300, 200, Rgb([20, 30, 40])).save(&logo).unwrap();
    let colours = ColorSequence::from_json(r#"["navy", "gold", "teal", "tomato"]"#).unwrap();

    let collage = render_collage(&colours, 400, Some(&logo)).unwrap();
    assert!(collage.overlay_error.is_none());

    let out = dir.path().join("color_strips.png");
    write_png(&collage.image, &out).unwrap();

    let back = image::open(&out).unwrap().to_rgb8();
    assert_eq!(back.dimensions(), (300 * 400 / 200 + 400, 400));
    assert_eq!(back.get_pixel(300, 200).0, [20, 30, 40]);
}

#[test]
fn test_collage_bad_overlay_matches_plain_render() {
    let dir = tempdir().unwrap();
    let colours = ColorSequence::from_json(TWELVE).unwrap();

    let collage = render_collage(&colours, 300, Some(&dir.path().join("nope.jpg"))).unwrap();
    let plain = StripRenderer::new(300).render(&colours).unwrap();

    assert!(matches!(
        collage.overlay_error,
        Some(SwatchError::OverlayLoad { .. })
    ));
    assert_eq!(collage.image.dimensions(), plain.dimensions());
    assert_eq!(collage.image.as_raw(), plain.as_raw());
}

use std::path::PathBuf;

use super::*;

fn out_dir() -> PathBuf {
    let dir = PathBuf::from("target").join("unit_png");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn writes_straight_alpha_png() {
    let path = out_dir().join("pixel.png");
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 1, 2, 3, 255],
        premultiplied: true,
    };
    write_png(&frame, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [128, 64, 0, 128]);
    assert_eq!(decoded.get_pixel(1, 0).0, [1, 2, 3, 255]);
}

#[test]
fn existing_output_is_overwritten() {
    let path = out_dir().join("overwrite.png");
    std::fs::write(&path, b"stale").unwrap();

    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 255],
        premultiplied: true,
    };
    write_png(&frame, &path).unwrap();
    assert!(image::open(&path).is_ok());
}

#[test]
fn missing_directory_is_a_save_error() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 255],
        premultiplied: true,
    };
    let err = write_png(&frame, Path::new("target/unit_png/no/such/dir/out.png")).unwrap_err();
    assert!(matches!(err, DailyJokeError::Save(_)));
}

#[test]
fn short_buffer_is_rejected() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 4],
        premultiplied: true,
    };
    let err = write_png(&frame, &out_dir().join("short.png")).unwrap_err();
    assert!(matches!(err, DailyJokeError::Save(_)));
}

use super::*;
use crate::foundation::core::Fps;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("whisperwire_png_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn solid(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
        premultiplied: true,
    }
}

#[test]
fn sequence_sink_names_files_by_index() {
    let dir = scratch_dir("seq");
    let mut sink = PngSequenceSink::new(&dir).with_prefix("show");
    sink.begin(SinkConfig {
        width: 4,
        height: 2,
        fps: Fps::default(),
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &solid(4, 2, [0, 255, 0, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(7), &solid(4, 2, [0, 255, 0, 255]))
        .unwrap();
    assert!(
        sink.push_frame(FrameIndex(7), &solid(4, 2, [0, 0, 0, 255]))
            .is_err()
    );
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    assert!(dir.join("show_00000.png").exists());
    assert!(dir.join("show_00007.png").exists());

    let img = image::open(dir.join("show_00007.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 2));
    assert_eq!(img.get_pixel(1, 1).0, [0, 255, 0, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn push_before_begin_fails() {
    let mut sink = PngSequenceSink::new(scratch_dir("unstarted"));
    assert!(sink.push_frame(FrameIndex(0), &solid(1, 1, [0; 4])).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn write_png_unpremultiplies() {
    let dir = scratch_dir("single");
    let path = dir.join("nested").join("one.png");
    write_png(&path, &solid(1, 1, [64, 0, 0, 128])).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [128, 0, 0, 128]);
    let _ = std::fs::remove_dir_all(&dir);
}

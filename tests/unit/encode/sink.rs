use super::*;

fn frame(w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: vec![0; (w * h * 4) as usize],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_collects_frames() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame(2, 2)).is_err());

    let cfg = SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
    };
    sink.begin(cfg.clone()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(2, 2)).unwrap();
    sink.push_frame(FrameIndex(1), &frame(2, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(&cfg));
    assert_eq!(sink.frames().len(), 2);
    assert!(sink.is_ended());
}

#[test]
fn frame_order_rejects_repeats() {
    let mut order = FrameOrder::default();
    order.accept(FrameIndex(3)).unwrap();
    assert!(order.accept(FrameIndex(3)).is_err());
    order.accept(FrameIndex(4)).unwrap();
    order.reset();
    order.accept(FrameIndex(0)).unwrap();
}

#[test]
fn frame_size_is_checked() {
    let cfg = SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
    };
    check_frame_size(&cfg, &frame(2, 2)).unwrap();
    assert!(check_frame_size(&cfg, &frame(4, 2)).is_err());
    let mut short = frame(2, 2);
    short.data.pop();
    assert!(check_frame_size(&cfg, &short).is_err());
}

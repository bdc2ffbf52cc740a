use super::*;
use crate::config::EngineConfig;
use crate::encode::sink::{InMemorySink, SinkConfig};
use crate::export::job::ExportOptions;
use crate::foundation::core::Fps;

fn res() -> Resolution {
    Resolution::new(4, 2).unwrap()
}

fn scratch_root(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("motioncraft-multi-{tag}-{}", std::process::id()))
}

fn started_sink() -> InMemorySink {
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig {
        resolution: res(),
        fps: Fps::integer(30).unwrap(),
        bg_rgba: [0, 0, 0, 255],
    })
    .unwrap();
    sink
}

#[test]
fn partition_covers_all_frames_in_order() {
    let chunks = partition(30, 4);
    assert_eq!(chunks, vec![0..7, 7..14, 14..21, 21..30]);

    let chunks = partition(10, 3);
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.last().unwrap(), &(6..10));
    let covered: Vec<usize> = chunks.into_iter().flatten().collect();
    assert_eq!(covered, (0..10).collect::<Vec<_>>());
}

#[test]
fn partition_never_exceeds_frame_count() {
    assert_eq!(partition(3, 8), vec![0..1, 1..2, 2..3]);
    assert_eq!(partition(5, 1), vec![0..5]);
    assert!(partition(0, 4).is_empty());
}

#[test]
fn frame_images_round_trip_premultiplied_pixels() {
    let root = scratch_root("roundtrip");
    let dir = TempDirGuard::create(&root, 4).unwrap();
    let frame = FrameRGBA::filled(res(), [128, 64, 0, 255]);
    write_frame(&dir.frame_path(0), &frame).unwrap();

    let back = read_frame(&dir.frame_path(0), res()).unwrap();
    assert_eq!(back, frame);

    let wrong = Resolution::new(2, 2).unwrap();
    assert!(matches!(
        read_frame(&dir.frame_path(0), wrong),
        Err(MotionError::ExportIo(_))
    ));
    drop(dir);
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn missing_frame_aborts_by_default() {
    let root = scratch_root("abort");
    let dir = TempDirGuard::create(&root, 4).unwrap();
    let frame = FrameRGBA::filled(res(), [0, 0, 255, 255]);
    write_frame(&dir.frame_path(0), &frame).unwrap();
    write_frame(&dir.frame_path(2), &frame).unwrap();

    let scene = Scene::new(0, 3, 1, Default::default()).unwrap();
    let job = ExportJob::new(
        [&scene],
        res(),
        Fps::integer(30).unwrap(),
        "out.mp4",
        ExportOptions::default(),
    );
    let mut sink = started_sink();
    let mut stats = ExportStats::default();
    let mut pos = 0;

    let err = consume_scene(&job, &mut sink, &dir, 3, &mut pos, &mut stats).unwrap_err();
    assert!(matches!(err, MotionError::ExportIo(_)));
    assert_eq!(stats.frames_written, 1);
    drop(dir);
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn missing_frame_is_skipped_when_configured() {
    let root = scratch_root("skip");
    let dir = TempDirGuard::create(&root, 4).unwrap();
    let frame = FrameRGBA::filled(res(), [0, 0, 255, 255]);
    write_frame(&dir.frame_path(0), &frame).unwrap();
    write_frame(&dir.frame_path(2), &frame).unwrap();

    let scene = Scene::new(0, 3, 1, Default::default()).unwrap();
    let options = ExportOptions {
        config: EngineConfig {
            missing_frame_policy: MissingFramePolicy::Skip,
            ..EngineConfig::default()
        },
        ..ExportOptions::default()
    };
    let job = ExportJob::new([&scene], res(), Fps::integer(30).unwrap(), "out.mp4", options);
    let mut sink = started_sink();
    let mut stats = ExportStats::default();
    let mut pos = 0;

    consume_scene(&job, &mut sink, &dir, 3, &mut pos, &mut stats).unwrap();
    assert_eq!(stats.frames_written, 2);
    assert_eq!(stats.frames_skipped, 1);
    let indices: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(indices, vec![0, 1]);
    drop(dir);
    let _ = std::fs::remove_dir_all(root);
}

use super::*;
use crate::drawable::Rect;

fn res() -> Resolution {
    Resolution::new(8, 8).unwrap()
}

#[test]
fn construction_is_validated() {
    assert!(Scene::new(0, 10, 0, Pause::default()).is_err());
    assert!(Scene::new(10, 0, 1, Pause::default()).is_err());
    assert!(Scene::new(0, 10, 1, Pause { before: -1, after: 0 }).is_err());
    assert!(Scene::new(5, 5, 1, Pause::default()).is_ok());
}

#[test]
fn frames_cover_range_plus_pauses() {
    let scene = Scene::new(0, 60, 1, Pause { before: 30, after: 30 }).unwrap();
    let frames: Vec<i64> = scene.frames().collect();
    assert_eq!(frames.len(), 120);
    assert_eq!(frames[0], 0);
    assert_eq!(*frames.last().unwrap(), 119);
    assert!(frames.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(scene.playback_frame(0), -30);

    // Restartable.
    assert_eq!(scene.frames().count(), 120);
    assert_eq!(scene.frame_count(), 120);
}

#[test]
fn frames_respect_step() {
    let scene = Scene::new(3, 10, 3, Pause::default()).unwrap();
    assert_eq!(scene.frames().collect::<Vec<_>>(), vec![3, 6, 9]);
    assert_eq!(Scene::new(4, 4, 1, Pause::default()).unwrap().frame_count(), 0);
}

#[test]
fn pause_before_holds_first_keyframe() {
    let mut scene = Scene::new(0, 10, 1, Pause { before: 5, after: 0 }).unwrap();
    let mut rect = Rect::new([0, 0], [2, 2], [255, 0, 0, 255]);
    rect.loc.keyframe([0, 0], 0).keyframe([6, 0], 6);
    scene.add(rect);

    for f in 0..=5 {
        let out = scene.render(res(), f).unwrap();
        assert_eq!(out.pixel(0, 0), Some([255, 0, 0, 255]), "frame {f}");
    }
    let moved = scene.render(res(), 11).unwrap();
    assert_eq!(moved.pixel(6, 0), Some([255, 0, 0, 255]));
    assert_eq!(moved.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn output_is_opaque_over_background() {
    let mut scene = Scene::new(0, 1, 1, Pause::default()).unwrap();
    scene.background = ColorProperty::from_rgba8([10, 20, 30, 255]);
    scene.add(Rect::new([0, 0], [1, 1], [255, 255, 255, 128]));
    let out = scene.render(res(), 0).unwrap();
    assert!(out.data.chunks_exact(4).all(|px| px[3] == 255));
    assert_eq!(out.pixel(4, 4), Some([10, 20, 30, 255]));
    let px = out.pixel(0, 0).unwrap();
    assert!(px[0] > 100 && px[0] < 160);
}

#[test]
fn blur_sample_order_and_weights() {
    let samples = blur_samples(MotionBlurConfig { samples: 2, step: 3 });
    let offsets: Vec<i64> = samples.iter().map(|s| s.0).collect();
    assert_eq!(offsets, vec![-6, 6, -3, 3, 0]);
    let weights: Vec<f32> = samples.iter().map(|s| s.1).collect();
    assert_eq!(weights, vec![1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0]);

    assert_eq!(blur_samples(MotionBlurConfig { samples: 0, step: 1 }), vec![(0, 1.0)]);
}

#[test]
fn motion_blur_leaves_static_content_unchanged_and_smears_moving_content() {
    let cfg = EngineConfig {
        motion_blur: MotionBlurConfig { samples: 2, step: 1 },
        ..EngineConfig::default()
    };
    let mut scene = Scene::with_config(0, 20, 1, Pause::default(), &cfg)
        .unwrap()
        .with_motion_blur(true);
    scene.add(Rect::new([0, 0], [2, 2], [255, 255, 255, 255]));
    let still = scene.render(res(), 10).unwrap();
    assert_eq!(still.pixel(0, 0), Some([255, 255, 255, 255]));

    let mut moving = Rect::new([0, 4], [1, 1], [255, 255, 255, 255]);
    moving.loc.keyframe([0, 4], 0).keyframe([7, 4], 7);
    scene.add(moving);
    let out = scene.render(res(), 3).unwrap();
    assert_eq!(out.pixel(3, 4), Some([255, 255, 255, 255]));
    let trail = out.pixel(2, 4).unwrap()[0];
    assert!(trail > 0 && trail < 255);
    assert!(out.pixel(5, 4).unwrap()[0] > 0);
    assert_eq!(out.pixel(6, 4), Some([0, 0, 0, 255]));
}

use super::*;
use std::sync::Mutex;

/// Draws text as a solid block 2px per character wide and `size` tall; video frames as a 2x2 block.
#[derive(Default)]
struct BlockSource {
    seen: Mutex<Vec<String>>,
}

impl RasterSource for BlockSource {
    fn rasterize(&self, request: &RasterRequest<'_>) -> MotionResult<Option<RasterImage>> {
        match request {
            RasterRequest::Text {
                text,
                font,
                size,
                color,
            } => {
                self.seen.lock().unwrap().push(format!("{font}:{text}"));
                let w = (text.len() * 2) as u32;
                let h = *size as u32;
                let data = color.repeat((w * h) as usize);
                RasterImage::from_rgba8(w, h, data).map(Some)
            }
            RasterRequest::VideoFrame { frame } => {
                self.seen.lock().unwrap().push(format!("video:{frame}"));
                if *frame >= 3 {
                    return Ok(None);
                }
                RasterImage::from_rgba8(2, 2, [255, 255, 255, 255].repeat(4)).map(Some)
            }
        }
    }
}

fn res() -> Resolution {
    Resolution::new(20, 20).unwrap()
}

#[test]
fn raster_image_rejects_bad_length() {
    assert!(RasterImage::from_rgba8(2, 2, vec![0; 15]).is_err());
}

#[test]
fn text_is_centered_and_uses_default_font() {
    let source = Arc::new(BlockSource::default());
    let cfg = EngineConfig::default();
    let mut text = Text::new(source.clone(), "abc", [10, 10], [255, 0, 0, 255], &cfg);
    text.size = Property::new(4);

    let out = text.render(res(), 0).unwrap();
    // 6x4 block centered on (10, 10) spans x 7..13, y 8..12.
    assert_eq!(out.pixel(7, 8), Some([255, 0, 0, 255]));
    assert_eq!(out.pixel(12, 11), Some([255, 0, 0, 255]));
    assert_eq!(out.pixel(6, 8), Some([0, 0, 0, 0]));
    assert_eq!(out.pixel(7, 12), Some([0, 0, 0, 0]));
    assert_eq!(source.seen.lock().unwrap()[0], "ubuntu:abc");
}

#[test]
fn image_is_scaled_into_its_rect() {
    let raster = RasterImage::from_rgba8(1, 1, vec![0, 0, 255, 128]).unwrap();
    let img = Image::new(raster, [5, 5], [4, 4]);
    let out = img.render(res(), 0).unwrap();
    assert_eq!(out.pixel(8, 8), Some([0, 0, 128, 128]));
    assert_eq!(out.pixel(9, 9), Some([0, 0, 0, 0]));
}

#[test]
fn video_maps_scene_frames_to_source_frames() {
    let source = Arc::new(BlockSource::default());
    let video = Video::new(source.clone(), [0, 0], [4, 4])
        .with_timing(2.0, 1.0)
        .unwrap();
    assert_eq!(video.source_frame(0), -1);
    assert_eq!(video.source_frame(1), 1);
    assert_eq!(video.source_frame(3), 5);

    assert!(video.render(res(), 0).unwrap().is_fully_transparent());
    assert_eq!(video.render(res(), 1).unwrap().pixel(3, 3), Some([255; 4]));
    assert!(video.render(res(), 3).unwrap().is_fully_transparent());
    assert_eq!(*source.seen.lock().unwrap(), vec!["video:1", "video:5"]);

    assert!(Video::new(source, [0, 0], [1, 1]).with_timing(f64::NAN, 0.0).is_err());
}

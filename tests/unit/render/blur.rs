use super::*;
use crate::foundation::core::Resolution;

#[test]
fn zero_radius_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(blur_rgba8_premul(&src, 1, 2, 0, 1.0).unwrap(), src);

    let frame = FrameRGBA::from_premul_bytes(Resolution::new(1, 2).unwrap(), src).unwrap();
    assert_eq!(gaussian_blur(&frame, 0).unwrap(), frame);
}

#[test]
fn constant_image_stays_constant() {
    let frame = FrameRGBA::filled(Resolution::new(4, 3).unwrap(), [10, 20, 30, 255]);
    assert_eq!(gaussian_blur(&frame, 2).unwrap(), frame);
}

#[test]
fn single_pixel_spreads_to_neighbours() {
    let res = Resolution::new(5, 5).unwrap();
    let mut frame = FrameRGBA::transparent(res);
    let center = ((2 * 5 + 2) * 4) as usize;
    frame.data[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = gaussian_blur(&frame, 1).unwrap();
    let c = out.pixel(2, 2).unwrap();
    let n = out.pixel(2, 1).unwrap();
    assert!(c[3] < 255);
    assert!(n[3] > 0);
    assert!(c[3] > n[3]);
}

#[test]
fn mismatched_buffer_is_rejected() {
    assert!(blur_rgba8_premul(&[0u8; 7], 1, 2, 1, 1.0).is_err());
}

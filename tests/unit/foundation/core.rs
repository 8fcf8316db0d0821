use super::*;

#[test]
fn scene_id_rejects_zero() {
    assert!(SceneId::new(0).is_err());
    assert_eq!(SceneId::new(7).unwrap(), SceneId(7));
}

#[test]
fn pixel_format_maps_supported_sizes() {
    assert_eq!(PixelFormat::from_bytes_per_pixel(1).unwrap(), PixelFormat::Gray);
    assert_eq!(PixelFormat::from_bytes_per_pixel(3).unwrap(), PixelFormat::Rgb);
    assert_eq!(PixelFormat::from_bytes_per_pixel(4).unwrap(), PixelFormat::Rgba);
    assert!(matches!(
        PixelFormat::from_bytes_per_pixel(2),
        Err(RaypassError::UnsupportedPixelFormat { bytes_per_pixel: 2 })
    ));
}

#[test]
fn dimensions_reject_zero_extents() {
    assert!(Dimensions::new(0, 4, 3).is_err());
    assert!(Dimensions::new(4, 0, 3).is_err());
    assert!(Dimensions::new(4, 4, 3).is_ok());
}

#[test]
fn dimensions_reject_unsupported_pixel_size() {
    assert!(matches!(
        Dimensions::new(4, 4, 2),
        Err(RaypassError::UnsupportedPixelFormat { bytes_per_pixel: 2 })
    ));
}

#[test]
fn byte_len_is_width_height_bpp_product() {
    let dims = Dimensions::new(600, 337, 3).unwrap();
    assert_eq!(dims.byte_len(), 600 * 337 * 3);
}

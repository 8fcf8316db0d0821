use super::*;

#[test]
fn new_accepts_matching_length() {
    let dims = Dimensions::new(2, 3, 3).unwrap();
    let bytes = vec![7u8; dims.byte_len()];
    let frame = RawFrame::new(dims, &bytes).unwrap();
    assert_eq!(frame.dims(), dims);
    assert_eq!(frame.bytes().len(), 18);
}

#[test]
fn validate_rejects_length_mismatch() {
    let dims = Dimensions::new(2, 3, 3).unwrap();
    let bytes = vec![0u8; 17];
    let frame = RawFrame { dims, bytes: &bytes };
    assert!(matches!(
        frame.validate(),
        Err(RaypassError::InvalidDimensions(_))
    ));
}

#[test]
fn validate_rejects_engine_reported_garbage() {
    // Engines report raw struct-shaped data; zero extents and odd pixel sizes
    // must be caught here rather than trusted.
    let zero = RawFrame {
        dims: Dimensions {
            width: 0,
            height: 4,
            bytes_per_pixel: 3,
        },
        bytes: &[],
    };
    assert!(zero.validate().is_err());

    let odd_bpp = RawFrame {
        dims: Dimensions {
            width: 2,
            height: 2,
            bytes_per_pixel: 2,
        },
        bytes: &[0u8; 8],
    };
    assert!(matches!(
        odd_bpp.validate(),
        Err(RaypassError::UnsupportedPixelFormat { bytes_per_pixel: 2 })
    ));
}

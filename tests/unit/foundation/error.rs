use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RaypassError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RaypassError::invalid_dimensions("x")
            .to_string()
            .contains("invalid dimensions:")
    );
    assert!(
        RaypassError::UnsupportedPixelFormat { bytes_per_pixel: 2 }
            .to_string()
            .contains("unsupported pixel format:")
    );
    assert!(RaypassError::engine("x").to_string().contains("engine failure:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RaypassError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

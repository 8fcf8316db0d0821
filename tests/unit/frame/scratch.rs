use super::*;

fn dims_4x4() -> Dimensions {
    Dimensions::new(4, 4, 3).unwrap()
}

#[test]
fn store_copies_frame_bytes() {
    let dims = dims_4x4();
    let src = (0..dims.byte_len()).map(|i| i as u8).collect::<Vec<_>>();
    let frame = RawFrame::new(dims, &src).unwrap();

    let mut buf = ScratchBuffer::new(dims).unwrap();
    buf.store(&frame).unwrap();
    assert_eq!(buf.bytes(), &src[..]);
    assert_eq!(buf.dims(), dims);
}

#[test]
fn store_rejects_dimension_mismatch() {
    let mut buf = ScratchBuffer::new(dims_4x4()).unwrap();
    let other = Dimensions::new(2, 2, 3).unwrap();
    let bytes = vec![0u8; other.byte_len()];
    let frame = RawFrame::new(other, &bytes).unwrap();
    assert!(buf.store(&frame).is_err());
}

#[test]
fn store_reuses_allocation_across_frames() {
    let dims = dims_4x4();
    let bytes = vec![1u8; dims.byte_len()];
    let frame = RawFrame::new(dims, &bytes).unwrap();

    let mut buf = ScratchBuffer::new(dims).unwrap();
    buf.store(&frame).unwrap();
    let ptr = buf.bytes().as_ptr();
    for _ in 0..3 {
        buf.store(&frame).unwrap();
    }
    assert_eq!(buf.bytes().as_ptr(), ptr, "reused frames must not reallocate");
}

#[test]
fn into_bytes_moves_storage_out() {
    let dims = dims_4x4();
    let src = vec![9u8; dims.byte_len()];
    let frame = RawFrame::new(dims, &src).unwrap();
    let mut buf = ScratchBuffer::new(dims).unwrap();
    buf.store(&frame).unwrap();
    let bytes = buf.into_bytes();
    assert_eq!(bytes, src);
}

use super::*;
use crate::foundation::core::Dimensions;

fn frame_of(dims: Dimensions, fill: u8, bytes: &mut Vec<u8>) -> RawFrame<'_> {
    bytes.clear();
    bytes.resize(dims.byte_len(), fill);
    RawFrame { dims, bytes }
}

#[test]
fn store_frame_allocates_lazily_and_reuses() {
    let dims = Dimensions::new(4, 4, 3).unwrap();
    let mut scratch: Option<ScratchBuffer> = None;
    let mut bytes = Vec::new();

    let buf = store_frame(&mut scratch, &frame_of(dims, 1, &mut bytes)).unwrap();
    let ptr = buf.bytes().as_ptr();

    let buf = store_frame(&mut scratch, &frame_of(dims, 2, &mut bytes)).unwrap();
    assert_eq!(buf.bytes().as_ptr(), ptr, "same dimensions must reuse storage");
    assert!(buf.bytes().iter().all(|&b| b == 2));
}

#[test]
fn store_frame_reallocates_on_dimension_change() {
    let small = Dimensions::new(2, 2, 3).unwrap();
    let large = Dimensions::new(4, 4, 3).unwrap();
    let mut scratch: Option<ScratchBuffer> = None;
    let mut bytes = Vec::new();

    store_frame(&mut scratch, &frame_of(small, 1, &mut bytes)).unwrap();
    let buf = store_frame(&mut scratch, &frame_of(large, 2, &mut bytes)).unwrap();
    assert_eq!(buf.dims(), large);
    assert_eq!(buf.bytes().len(), large.byte_len());
}

#[test]
fn store_frame_rejects_garbage_and_keeps_last_good_copy() {
    let dims = Dimensions::new(2, 2, 3).unwrap();
    let mut scratch: Option<ScratchBuffer> = None;
    let mut bytes = Vec::new();

    store_frame(&mut scratch, &frame_of(dims, 7, &mut bytes)).unwrap();

    let short = vec![0u8; 5];
    let torn = RawFrame {
        dims,
        bytes: &short,
    };
    assert!(store_frame(&mut scratch, &torn).is_err());
    let buf = scratch.as_ref().unwrap();
    assert!(buf.bytes().iter().all(|&b| b == 7), "good copy must survive");
}

#[test]
fn handle_frame_encodes_from_scratch_view() {
    let dims = Dimensions::new(2, 1, 3).unwrap();
    let mut scratch: Option<ScratchBuffer> = None;
    let bytes = [10u8, 20, 30, 40, 50, 60];
    let frame = RawFrame {
        dims,
        bytes: &bytes,
    };

    let image = handle_frame(&mut scratch, &frame).unwrap();
    assert_eq!(image.as_rgb8().unwrap().get_pixel(1, 0).0, [40, 50, 60]);
    assert!(scratch.is_some(), "buffer stays alive for the next pass");
}

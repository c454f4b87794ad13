//! Tests for axis geometry and the strip offset arithmetic

extern crate std;

use crate::axis::{AxisMode, Region};
use crate::compositor::{SliceCompositor, SliceParams};

#[test]
fn test_axis_sizes() {
    // Across slices the height and samples along the width
    std::assert_eq!(AxisMode::Across.slice_axis_size(640, 480), 480);
    std::assert_eq!(AxisMode::Across.sample_axis_size(640, 480), 640);

    // Down slices the width and samples along the height
    std::assert_eq!(AxisMode::Down.slice_axis_size(640, 480), 640);
    std::assert_eq!(AxisMode::Down.sample_axis_size(640, 480), 480);
}

#[test]
fn test_translation_lies_along_sample_axis() {
    std::assert_eq!(AxisMode::Across.translation(-7), (-7, 0));
    std::assert_eq!(AxisMode::Down.translation(-7), (0, -7));
}

#[test]
fn test_canvas_size() {
    std::assert_eq!(AxisMode::Across.canvas_size(50, 2, 480), (100, 480));
    std::assert_eq!(AxisMode::Down.canvas_size(50, 2, 640), (640, 100));
}

#[test]
fn test_destination_rects_tile_the_canvas() {
    let rect = AxisMode::Across.destination_rect(3, 2, 100, 480);
    std::assert_eq!(rect, Region::new(6, 0, 2, 480));
    std::assert_eq!(rect.end_x(), 8);
    std::assert_eq!(rect.end_y(), 480);

    let rect = AxisMode::Down.destination_rect(3, 2, 640, 100);
    std::assert_eq!(rect, Region::new(0, 6, 640, 2));
}

#[test]
fn test_pattern_offset_worked_example() {
    // 4 px sample axis, thickness 2, centered: the window covers source
    // columns 1..3 for every slot
    let compositor = SliceCompositor::new(AxisMode::Across, SliceParams::new(2, 0.5).unwrap());

    std::assert_eq!(compositor.pattern_offset(4, 0), 1);
    std::assert_eq!(compositor.pattern_offset(4, 1), -1);
    std::assert_eq!(compositor.pattern_offset(4, 2), -3);
}

#[test]
fn test_pattern_offset_window_is_fixed_per_slot() {
    let compositor = SliceCompositor::new(AxisMode::Across, SliceParams::new(3, 0.25).unwrap());

    // The translation decreases by exactly one thickness per slot, so the
    // source coordinate seen at each slot origin stays the same
    let base = compositor.pattern_offset(1000, 0);
    for slot in 0..10usize {
        let offset = compositor.pattern_offset(1000, slot);
        std::assert_eq!(offset + (slot as i64) * 3, base);
    }
}

#[test]
fn test_pattern_offset_floors_toward_negative_infinity() {
    let compositor = SliceCompositor::new(AxisMode::Across, SliceParams::new(1, 0.0).unwrap());

    // 4 * 0.0 - 0.5 = -0.5 floors to -1, not 0
    std::assert_eq!(compositor.pattern_offset(4, 0), -1);
}

#[test]
fn test_pattern_offset_at_end_of_sample_axis() {
    let compositor = SliceCompositor::new(AxisMode::Across, SliceParams::new(2, 1.0).unwrap());

    // 4 * 1.0 - 1 = 3: the window starts on the last column and runs past
    // the frame edge
    std::assert_eq!(compositor.pattern_offset(4, 0), 3);
}

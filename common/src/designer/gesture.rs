use crate::model::field::{FieldKind, MIN_HEIGHT_PX, MIN_WIDTH_PX};
use crate::model::zone::Zone;

/// What is being dragged: a new field from the palette or the occupant of a
/// zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Palette(FieldKind),
    Zone(Zone),
}

/// A resize in progress, started on a field's resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGesture {
    pub zone: Zone,
    start_x: i32,
    start_y: i32,
    start_width: u32,
    start_height: u32,
}

impl ResizeGesture {
    pub fn new(zone: Zone, (x, y): (i32, i32), (width, height): (u32, u32)) -> Self {
        Self {
            zone,
            start_x: x,
            start_y: y,
            start_width: width,
            start_height: height,
        }
    }

    /// Field size for the pointer at `(x, y)`, never below the minimums.
    pub fn size_at(&self, x: i32, y: i32) -> (u32, u32) {
        let grow = |start: u32, delta: i32, min: u32| {
            (i64::from(start) + i64::from(delta)).clamp(i64::from(min), i64::from(u32::MAX)) as u32
        };
        (
            grow(self.start_width, x - self.start_x, MIN_WIDTH_PX),
            grow(self.start_height, y - self.start_y, MIN_HEIGHT_PX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_follows_pointer_delta() {
        let gesture = ResizeGesture::new(Zone::HEADER_LEFT, (100, 100), (120, 40));
        assert_eq!(gesture.size_at(130, 110), (150, 50));
    }

    #[test]
    fn resize_clamps_to_minimum_size() {
        let gesture = ResizeGesture::new(Zone::HEADER_LEFT, (100, 100), (120, 40));
        assert_eq!(gesture.size_at(-500, 0), (MIN_WIDTH_PX, MIN_HEIGHT_PX));
    }
}

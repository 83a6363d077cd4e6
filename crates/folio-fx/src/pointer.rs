//! Pointer coordinates shared between the move handler and the frame tick
//!
//! The move handler is the only writer; every tick reads the latest value.
//! Both run on the same thread, so a `Cell` is enough: a write becomes
//! visible to the next tick and intermediate positions are dropped.

use std::cell::Cell;
use std::rc::Rc;

use crate::math::Vec2;

/// Source of the current pointer position in screen coordinates
pub trait PointerSource {
    fn current(&self) -> Vec2;
}

/// Last-write-wins pointer position, cheap to clone into event handlers
#[derive(Clone, Debug, Default)]
pub struct PointerState {
    position: Rc<Cell<Vec2>>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-move event
    #[inline]
    pub fn set(&self, x: f32, y: f32) {
        self.position.set(Vec2::new(x, y));
    }
}

impl PointerSource for PointerState {
    #[inline]
    fn current(&self) -> Vec2 {
        self.position.get()
    }
}

/// Pointer that never moves
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedPointer(pub Vec2);

impl PointerSource for FixedPointer {
    #[inline]
    fn current(&self) -> Vec2 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_starts_at_origin() {
        assert_eq!(PointerState::new().current(), Vec2::ZERO);
    }

    #[test]
    fn test_pointer_last_write_wins() {
        let pointer = PointerState::new();
        let writer = pointer.clone();

        writer.set(10.0, 20.0);
        writer.set(300.0, 150.0);

        assert_eq!(pointer.current(), Vec2::new(300.0, 150.0));
    }

    #[test]
    fn test_fixed_pointer() {
        let pointer = FixedPointer(Vec2::new(4.0, 2.0));
        assert_eq!(pointer.current(), Vec2::new(4.0, 2.0));
    }
}

use crate::geometry::{Point, Rect};

/// Largest rotation on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 15.0;

/// Rotation of the hero card around its horizontal (`x`) and vertical (`y`)
/// axes, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at `pointer`, with the card laid out at `bounds`.
    /// Both are in viewport coordinates.
    ///
    /// Offsets are normalised by the centre's distance from the viewport
    /// origin, so the card leans towards the pointer and reaches
    /// [`MAX_TILT_DEG`] when the pointer is as far from the centre as the
    /// centre is from the origin.
    pub fn from_pointer(pointer: Point, bounds: Rect) -> Self {
        let center = bounds.center();
        let rotate_x = normalised(pointer.y, center.y) * -MAX_TILT_DEG;
        let rotate_y = normalised(pointer.x, center.x) * MAX_TILT_DEG;
        Self { rotate_x, rotate_y }
    }

    pub fn is_flat(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }
}

fn normalised(value: f64, center: f64) -> f64 {
    if center.abs() <= f64::EPSILON {
        0.0
    } else {
        (value - center) / center
    }
}

/// Pointer-driven tilt of the hero card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeroPointer {
    tilt: Tilt,
}

impl HeroPointer {
    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    /// Recomputes the tilt; returns `true` if it changed.
    pub fn track(&mut self, pointer: Point, bounds: Rect) -> bool {
        let tilt = Tilt::from_pointer(pointer, bounds);
        let changed = tilt != self.tilt;
        self.tilt = tilt;
        changed
    }

    pub fn reset(&mut self) -> bool {
        let changed = !self.tilt.is_flat();
        self.tilt = Tilt::default();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Rect {
        Rect::new(600.0, 100.0, 400.0, 400.0)
    }

    #[test]
    fn test_centre_is_flat() {
        let tilt = Tilt::from_pointer(Point::new(800.0, 300.0), card());
        assert!(tilt.is_flat());
    }

    #[test]
    fn test_tilt_direction_and_extent() {
        // centre (800, 300): pointer at the origin is one full "radius" away
        let tilt = Tilt::from_pointer(Point::new(0.0, 0.0), card());
        assert!((tilt.rotate_x - MAX_TILT_DEG).abs() < 1e-9);
        assert!((tilt.rotate_y + MAX_TILT_DEG).abs() < 1e-9);

        let tilt = Tilt::from_pointer(Point::new(1200.0, 450.0), card());
        assert!((tilt.rotate_y - 7.5).abs() < 1e-9);
        assert!((tilt.rotate_x + 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_centre_does_not_divide() {
        let tilt = Tilt::from_pointer(Point::new(50.0, 50.0), Rect::new(0.0, 0.0, 0.0, 0.0));
        assert!(tilt.is_flat());
    }

    #[test]
    fn test_track_and_reset() {
        let mut hero = HeroPointer::default();
        assert!(hero.track(Point::new(0.0, 0.0), card()));
        assert!(!hero.track(Point::new(0.0, 0.0), card()));
        assert!(hero.reset());
        assert!(!hero.reset());
    }
}

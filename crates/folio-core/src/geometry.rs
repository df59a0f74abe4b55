#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Overlapping region of two rectangles, `None` if they do not touch.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        (right >= left && bottom >= top).then(|| Rect::new(left, top, right - left, bottom - top))
    }

    /// Fraction of `self` that lies inside `viewport`, in `0.0..=1.0`.
    ///
    /// A degenerate (zero-area) rectangle counts as fully visible when it
    /// touches the viewport at all.
    pub fn visible_ratio(&self, viewport: &Rect) -> f64 {
        let Some(overlap) = self.intersection(viewport) else {
            return 0.0;
        };
        let area = self.area();
        if area <= f64::EPSILON {
            return 1.0;
        }
        (overlap.area() / area).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersection(&b).is_none());
        assert_eq!(a.visible_ratio(&b), 0.0);
    }

    #[test]
    fn test_visible_ratio_partial() {
        let section = Rect::new(0.0, 900.0, 1000.0, 1000.0);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let ratio = section.visible_ratio(&viewport);
        assert!((ratio - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_visible_ratio_contained() {
        let section = Rect::new(10.0, 10.0, 50.0, 50.0);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        assert_eq!(section.visible_ratio(&viewport), 1.0);
    }

    #[test]
    fn test_zero_area_region() {
        let line = Rect::new(0.0, 500.0, 100.0, 0.0);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        assert_eq!(line.visible_ratio(&viewport), 1.0);

        let below = Rect::new(0.0, 1500.0, 100.0, 0.0);
        assert_eq!(below.visible_ratio(&viewport), 0.0);
    }

    #[test]
    fn test_negative_size_clamped() {
        let r = Rect::new(0.0, 0.0, -5.0, 10.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.center(), Point::new(0.0, 5.0));
    }
}

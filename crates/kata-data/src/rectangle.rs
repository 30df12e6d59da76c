use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// The area is never stored; [`Rectangle::area`] reads the current fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`, computed from the current field values.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Shorthand for [`Rectangle::new`].
#[must_use]
pub const fn rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        assert!((rectangle(10.0, 20.0).area() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_area_follows_mutation() {
        let mut rect = Rectangle::new(2.0, 3.0);
        rect.width = 5.0;
        assert!((rect.area() - 15.0).abs() < f64::EPSILON);
    }
}

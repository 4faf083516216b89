//! Plain geometric values used alongside the selector builder.

use serde::{Deserialize, Serialize};

/// Anything with a surface area.
pub trait Area {
    fn area(&self) -> f64;
}

/// An axis-aligned rectangle.
///
/// # Examples
///
/// ```rust
/// use selkit::shapes::Rectangle;
/// let r = Rectangle::new(10, 20);
/// assert_eq!(r.width, 10);
/// assert_eq!(r.height, 20);
/// assert_eq!(r.get_area(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Exact integer area. Widened so `u32::MAX * u32::MAX` cannot overflow.
    pub fn get_area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.get_area() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Area for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area() {
        assert_eq!(Rectangle::new(10, 20).get_area(), 200);
        assert_eq!(Rectangle::new(0, 20).get_area(), 0);
        assert_eq!(
            Rectangle::new(u32::MAX, 2).get_area(),
            u64::from(u32::MAX) * 2
        );
    }

    #[test]
    fn test_area_trait_objects() {
        let shapes: Vec<Box<dyn Area>> = vec![
            Box::new(Rectangle::new(3, 4)),
            Box::new(Circle::new(1.0)),
        ];
        let total: f64 = shapes.iter().map(|s| s.area()).sum();
        assert!((total - (12.0 + std::f64::consts::PI)).abs() < 1e-9);
    }
}

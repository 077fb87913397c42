use crate::color::Color;
use crate::geometry::Rect;

/// Shape primitive for the external renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled axis-aligned rectangle.
    Rect(Rect),
    /// Filled triangle, vertices as (x, y) pairs in world coordinates.
    Triangle([(f32, f32); 3]),
}

/// One draw command: shape plus color, in world coordinates.
///
/// The world emits a flat back-to-front list of these each frame; whatever
/// rasterizes them decides about cameras, pixels, and presentation. The
/// renderables themselves are plain data, so the physics types never need a
/// draw interface of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub shape: Shape,
    pub color: Color,
}

impl Renderable {
    pub fn rect(bounds: Rect, color: Color) -> Self {
        Self {
            shape: Shape::Rect(bounds),
            color,
        }
    }

    /// Spike triangle inscribed in `bounds`: base flush with the bottom
    /// edge, apex centered on the top edge.
    pub fn spike(bounds: Rect, color: Color) -> Self {
        Self {
            shape: Shape::Triangle([
                (bounds.x, bounds.y + bounds.h),
                (bounds.x + bounds.w / 2.0, bounds.y),
                (bounds.x + bounds.w, bounds.y + bounds.h),
            ]),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_renderable_wraps_bounds() {
        let bounds = Rect::new(10.0, 20.0, 30.0, 40.0);
        let r = Renderable::rect(bounds, Color::GRAY);
        assert_eq!(r.shape, Shape::Rect(bounds));
        assert_eq!(r.color, Color::GRAY);
    }

    #[test]
    fn spike_triangle_inscribed_in_bounds() {
        let bounds = Rect::new(100.0, 200.0, 40.0, 40.0);
        let r = Renderable::spike(bounds, Color::RED);
        let Shape::Triangle([base_left, apex, base_right]) = r.shape else {
            panic!("spike must be a triangle");
        };
        assert_eq!(base_left, (100.0, 240.0));
        assert_eq!(apex, (120.0, 200.0));
        assert_eq!(base_right, (140.0, 240.0));
    }
}

//! Axis-aligned catch detection
//!
//! Falling items and catch zones are both rectangles in screen space
//! (y grows downward). A catch is a strict overlap: touching edges do not
//! count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square with the given top-left corner and side length
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(side),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Which catch zone took an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatchZone {
    /// The basket itself
    Basket,
    /// The raised stick above the basket
    Reach,
}

/// Catch zones for the current tick, tested in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatchHitboxes {
    pub basket: Rect,
    /// Present only while the reach is extended
    pub reach: Option<Rect>,
}

impl CatchHitboxes {
    /// Zones in test order: basket first, then reach
    pub fn iter(&self) -> impl Iterator<Item = (CatchZone, Rect)> + '_ {
        std::iter::once((CatchZone::Basket, self.basket))
            .chain(self.reach.map(|r| (CatchZone::Reach, r)))
    }

    /// First zone overlapping `bounds`, if any
    pub fn first_hit(&self, bounds: &Rect) -> Option<CatchZone> {
        self.iter()
            .find(|(_, zone)| zone.overlaps(bounds))
            .map(|(kind, _)| kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 11.0, 5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(-5.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_basket_wins_over_reach() {
        let hitboxes = CatchHitboxes {
            basket: Rect::new(100.0, 560.0, 60.0, 44.0),
            reach: Some(Rect::new(124.0, 480.0, 12.0, 124.0)),
        };
        // Overlaps both zones
        let item = Rect::square(Vec2::new(120.0, 550.0), 18.0);
        assert_eq!(hitboxes.first_hit(&item), Some(CatchZone::Basket));

        // Only the stick
        let item = Rect::square(Vec2::new(120.0, 500.0), 18.0);
        assert_eq!(hitboxes.first_hit(&item), Some(CatchZone::Reach));
    }

    #[test]
    fn test_no_reach_zone_when_lowered() {
        let hitboxes = CatchHitboxes {
            basket: Rect::new(100.0, 560.0, 60.0, 44.0),
            reach: None,
        };
        assert_eq!(hitboxes.iter().count(), 1);
        let item = Rect::square(Vec2::new(120.0, 500.0), 18.0);
        assert_eq!(hitboxes.first_hit(&item), None);
    }
}

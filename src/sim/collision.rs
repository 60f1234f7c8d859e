//! Collision detection between the sphere and obstacles
//!
//! Both entities are reduced to axis-aligned boxes. The sphere's box is the
//! square circumscribing it, so corners count as hits.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Axis-aligned bounding box in canvas coordinates (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Box of side `2 * half_extent` centered on `center`
    pub fn centered(center: Vec2, half_extent: f32) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            size: Vec2::splat(half_extent * 2.0),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test. Boxes sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

/// Check whether the player's box overlaps an obstacle
pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    player.aabb().intersects(&obstacle.aabb())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn obstacle_at(x: f32, width: f32, height: f32) -> Obstacle {
        Obstacle {
            id: 1,
            pos: Vec2::new(x, FLOOR_Y - height),
            width,
            height,
            speed: 3.0,
        }
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_shared_edge_is_not_a_collision() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // x1 + w1 == x2
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        // y1 + h1 == y2
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        // Corner contact only
        let diagonal = Aabb::new(10.0, 10.0, 10.0, 10.0);

        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&diagonal));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x but not y
        let b = Aabb::new(5.0, 20.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_player_box_is_centered_square() {
        let player = Player::new();
        let aabb = player.aabb();
        assert_eq!(aabb.min, player.pos - Vec2::splat(PLAYER_RADIUS));
        assert_eq!(aabb.size, Vec2::splat(PLAYER_RADIUS * 2.0));
    }

    #[test]
    fn test_grounded_player_hits_obstacle_in_front() {
        let player = Player::new();
        // Player spans x in [170, 230]
        let obstacle = obstacle_at(220.0, 30.0, 40.0);
        assert!(collides(&player, &obstacle));
    }

    #[test]
    fn test_obstacle_touching_player_edge_is_a_miss() {
        let player = Player::new();
        let right_edge = player.pos.x + PLAYER_RADIUS;
        let obstacle = obstacle_at(right_edge, 30.0, 40.0);
        assert!(!collides(&player, &obstacle));
    }

    #[test]
    fn test_airborne_player_clears_obstacle() {
        let mut player = Player::new();
        // Bottom of the player box sits 10px above a 50px obstacle
        player.pos.y = FLOOR_Y - 50.0 - PLAYER_RADIUS - 10.0;
        let obstacle = obstacle_at(player.pos.x - 10.0, 20.0, 50.0);
        assert!(!collides(&player, &obstacle));
    }
}

//! Character Mover
//!
//! The mover applies displacement and owns the character's position. The
//! locomotion state machine only ever hands it a displacement per tick.
//!
//! [`KinematicBody`] is the built-in mover: an axis-aligned box from the feet
//! up, slid one axis at a time against the solid colliders of a
//! [`StaticWorld`].

use std::rc::Rc;

use glam::Vec3;

use crate::physics::{Aabb, StaticWorld};

/// Overlap tolerance so a body resting against a face is not treated as
/// penetrating it when moving along another axis.
const SKIN: f32 = 1e-4;

/// Applies displacement to a character.
pub trait CharacterMover {
    /// Feet position.
    fn position(&self) -> Vec3;

    /// Move by `displacement`, resolving collisions, and return the new position.
    fn move_by(&mut self, displacement: Vec3) -> Vec3;
}

/// Box-shaped kinematic mover against static geometry.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    /// Feet position
    position: Vec3,
    /// Horizontal half-width of the body box
    radius: f32,
    /// Height of the body box above the feet
    height: f32,
    world: Rc<StaticWorld>,
}

impl KinematicBody {
    /// Default body radius in meters
    pub const DEFAULT_RADIUS: f32 = 0.28;
    /// Default body height in meters
    pub const DEFAULT_HEIGHT: f32 = 1.8;

    pub fn new(world: Rc<StaticWorld>, position: Vec3) -> Self {
        Self::with_size(world, position, Self::DEFAULT_RADIUS, Self::DEFAULT_HEIGHT)
    }

    pub fn with_size(world: Rc<StaticWorld>, position: Vec3, radius: f32, height: f32) -> Self {
        Self {
            position,
            radius,
            height,
            world,
        }
    }

    /// Body box at `position`, shrunk by the skin.
    fn bounds_at(&self, position: Vec3) -> Aabb {
        let r = self.radius - SKIN;
        Aabb {
            min: position + Vec3::new(-r, SKIN, -r),
            max: position + Vec3::new(r, self.height - SKIN, r),
        }
    }

    /// Slide along one axis, stopping at the first solid face.
    fn slide_axis(&mut self, axis: usize, delta: f32) {
        if delta == 0.0 {
            return;
        }

        let mut target = self.position;
        target[axis] += delta;
        let body = self.bounds_at(target);

        // Offsets of the body box faces from the feet position on this axis
        let (low, high) = if axis == 1 {
            (0.0, self.height)
        } else {
            (-self.radius, self.radius)
        };

        for collider in self.world.solids() {
            if !collider.bounds.intersects(&body) {
                continue;
            }
            if delta > 0.0 {
                target[axis] = target[axis].min(collider.bounds.min[axis] - high);
            } else {
                target[axis] = target[axis].max(collider.bounds.max[axis] - low);
            }
        }

        // Never resolve backwards past the starting point
        target[axis] = if delta > 0.0 {
            target[axis].max(self.position[axis])
        } else {
            target[axis].min(self.position[axis])
        };
        self.position = target;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn world(&self) -> &Rc<StaticWorld> {
        &self.world
    }

    /// Teleport without collision.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

impl CharacterMover for KinematicBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn move_by(&mut self, displacement: Vec3) -> Vec3 {
        // Vertical first so walking off a step does not snag on its edge
        self.slide_axis(1, displacement.y);
        self.slide_axis(0, displacement.x);
        self.slide_axis(2, displacement.z);
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Surface;

    fn world() -> Rc<StaticWorld> {
        Rc::new(
            StaticWorld::new()
                .with(
                    Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0)),
                    Surface::GROUND,
                )
                .with(
                    Aabb::new(Vec3::new(-2.0, 0.0, 2.0), Vec3::new(2.0, 3.0, 3.0)),
                    Surface::WALL,
                )
                .with(
                    Aabb::new(Vec3::new(4.0, 0.0, -1.0), Vec3::new(5.0, 2.0, 1.0)),
                    Surface::TRIGGER,
                ),
        )
    }

    #[test]
    fn test_free_move_is_unobstructed() {
        let mut body = KinematicBody::new(world(), Vec3::new(0.0, 1.0, 0.0));
        let pos = body.move_by(Vec3::new(0.5, 0.25, -0.5));
        assert_eq!(pos, Vec3::new(0.5, 1.25, -0.5));
    }

    #[test]
    fn test_floor_stops_fall() {
        let mut body = KinematicBody::new(world(), Vec3::new(0.0, 0.2, 0.0));
        let pos = body.move_by(Vec3::new(0.0, -1.0, 0.0));
        assert!(pos.y.abs() < 1e-3);
    }

    #[test]
    fn test_wall_stops_horizontal_move() {
        let mut body = KinematicBody::new(world(), Vec3::new(0.0, 0.0, 1.0));
        let pos = body.move_by(Vec3::new(0.0, 0.0, 2.0));
        assert!((pos.z - (2.0 - KinematicBody::DEFAULT_RADIUS)).abs() < 1e-3);
    }

    #[test]
    fn test_slides_along_wall() {
        let mut body = KinematicBody::new(world(), Vec3::new(0.0, 0.0, 1.5));
        let pos = body.move_by(Vec3::new(1.0, 0.0, 1.0));
        assert!((pos.x - 1.0).abs() < 1e-5);
        assert!(pos.z < 2.0 - KinematicBody::DEFAULT_RADIUS + 1e-3);
    }

    #[test]
    fn test_can_climb_along_wall_face() {
        let mut body = KinematicBody::new(world(), Vec3::new(0.0, 0.0, 1.0));
        body.move_by(Vec3::new(0.0, 0.0, 2.0));
        let z = body.position().z;
        let pos = body.move_by(Vec3::new(0.0, 0.5, 0.0));
        assert!((pos.y - 0.5).abs() < 1e-5);
        assert_eq!(pos.z, z);
    }

    #[test]
    fn test_triggers_do_not_block() {
        let mut body = KinematicBody::new(world(), Vec3::new(3.0, 0.0, 0.0));
        let pos = body.move_by(Vec3::new(2.0, 0.0, 0.0));
        assert!((pos.x - 5.0).abs() < 1e-5);
    }
}

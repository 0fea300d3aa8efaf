//! Static collision world
//!
//! A flat list of tagged boxes. Implements [`SurfaceProbe`] for the
//! locomotion state machine and is the geometry the [`KinematicBody`] mover
//! resolves against.
//!
//! [`KinematicBody`]: crate::player::KinematicBody

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::{
    Aabb, Collider, Surface, SurfaceHit, aabb_surface_normal, ray_aabb_intersect,
    sphere_aabb_overlap,
};
use super::probe::SurfaceProbe;

/// Immutable-after-build set of colliders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticWorld {
    colliders: Vec<Collider>,
}

impl StaticWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, bounds: Aabb, surface: Surface) -> Self {
        self.add(bounds, surface);
        self
    }

    /// Insert a collider.
    pub fn add(&mut self, bounds: Aabb, surface: Surface) {
        self.colliders.push(Collider::new(bounds, surface));
    }

    /// All colliders, including triggers.
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Solid colliders only.
    pub fn solids(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter().filter(|c| c.surface.is_solid())
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

/// Strict containment; a ray starting on a face is not "inside".
fn strictly_contains(aabb: &Aabb, point: Vec3) -> bool {
    point.cmpgt(aabb.min).all() && point.cmplt(aabb.max).all()
}

impl SurfaceProbe for StaticWorld {
    fn check_ground(&self, center: Vec3, radius: f32) -> bool {
        self.solids()
            .filter(|c| c.surface.walkable)
            .any(|c| sphere_aabb_overlap(center, radius, &c.bounds))
    }

    fn raycast(&self, from: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
        let dir = direction.try_normalize()?;

        self.solids()
            // Colliders enclosing the origin are not reported
            .filter(|c| !strictly_contains(&c.bounds, from))
            .filter_map(|c| {
                let t = ray_aabb_intersect(from, dir, c.bounds.min, c.bounds.max)?;
                (t <= max_distance).then(|| {
                    let point = from + dir * t;
                    SurfaceHit {
                        point,
                        normal: aabb_surface_normal(point, c.bounds.min, c.bounds.max),
                        distance: t,
                        surface: c.surface,
                    }
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Aabb {
        Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0))
    }

    fn wall() -> Aabb {
        Aabb::new(Vec3::new(-2.0, 0.0, 2.0), Vec3::new(2.0, 5.0, 3.0))
    }

    fn world() -> StaticWorld {
        StaticWorld::new()
            .with(floor(), Surface::GROUND)
            .with(wall(), Surface::CLIMBABLE)
    }

    #[test]
    fn test_grounded_sphere_on_floor() {
        let w = world();
        // Character standing at y=0 with the default offset/radius
        assert!(w.check_ground(Vec3::new(0.0, 0.14, 0.0), 0.28));
        assert!(!w.check_ground(Vec3::new(0.0, 1.0, 0.0), 0.28));
    }

    #[test]
    fn test_ground_check_ignores_non_walkable() {
        let w = StaticWorld::new().with(floor(), Surface::WALL);
        assert!(!w.check_ground(Vec3::new(0.0, 0.14, 0.0), 0.28));
    }

    #[test]
    fn test_ground_check_ignores_triggers() {
        let trigger = Surface {
            walkable: true,
            ..Surface::TRIGGER
        };
        let w = StaticWorld::new().with(floor(), trigger);
        assert!(!w.check_ground(Vec3::new(0.0, 0.14, 0.0), 0.28));
    }

    #[test]
    fn test_raycast_nearest_hit() {
        let w = world();
        let hit = w.raycast(Vec3::new(0.0, 1.0, 1.7), Vec3::Z, 0.4).unwrap();
        assert!((hit.distance - 0.3).abs() < 1e-5);
        assert_eq!(hit.normal, -Vec3::Z);
        assert!(hit.surface.climbable);
    }

    #[test]
    fn test_raycast_out_of_range() {
        let w = world();
        assert!(w.raycast(Vec3::new(0.0, 1.0, 1.0), Vec3::Z, 0.4).is_none());
    }

    #[test]
    fn test_raycast_zero_direction() {
        let w = world();
        assert!(w.raycast(Vec3::new(0.0, 1.0, 1.7), Vec3::ZERO, 0.4).is_none());
    }

    #[test]
    fn test_clearance_below() {
        let w = world();
        assert!(w.has_ground_within(Vec3::new(0.0, 1.0, 0.0), 1.5));
        assert!(!w.has_ground_within(Vec3::new(0.0, 3.0, 0.0), 1.5));
    }

    #[test]
    fn test_raycast_ignores_triggers() {
        let w = StaticWorld::new().with(wall(), Surface::TRIGGER);
        assert!(w.raycast(Vec3::new(0.0, 1.0, 1.7), Vec3::Z, 0.4).is_none());
    }

    #[test]
    fn test_world_deserializes_from_json() {
        let json = r#"{"colliders":[{"bounds":{"min":[0,0,0],"max":[1,1,1]},
            "surface":{"walkable":true,"climbable":false,"trigger":false}}]}"#;
        let w: StaticWorld = serde_json::from_str(json).unwrap();
        assert_eq!(w.len(), 1);
        assert!(w.colliders()[0].surface.walkable);
    }
}

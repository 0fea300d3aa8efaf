//! Surface Probe
//!
//! Read-only environment queries used by the locomotion state machine: the
//! grounded sphere check, forward climbable raycasts and the glide clearance
//! ray. Implementations hold no per-query state and must be side-effect free.

use std::rc::Rc;

use glam::Vec3;

use super::collision::SurfaceHit;

/// Environment queries consumed by the locomotion state machine.
///
/// Only `check_ground` and `raycast` must be implemented; the climbable and
/// clearance queries are expressed in terms of `raycast`.
pub trait SurfaceProbe {
    /// Sphere test against walkable, non-trigger geometry.
    fn check_ground(&self, center: Vec3, radius: f32) -> bool;

    /// Nearest non-trigger hit along the ray within `max_distance`.
    ///
    /// `direction` need not be normalized; a zero direction never hits.
    fn raycast(&self, from: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit>;

    /// Forward ray that only reports a hit when the nearest surface is climbable.
    fn probe_climbable(
        &self,
        from: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<SurfaceHit> {
        self.raycast(from, direction, max_distance)
            .filter(|hit| hit.surface.climbable)
    }

    /// Whether anything lies within `max_distance` straight below `from`.
    fn has_ground_within(&self, from: Vec3, max_distance: f32) -> bool {
        self.raycast(from, Vec3::NEG_Y, max_distance).is_some()
    }
}

impl<P: SurfaceProbe + ?Sized> SurfaceProbe for Rc<P> {
    fn check_ground(&self, center: Vec3, radius: f32) -> bool {
        (**self).check_ground(center, radius)
    }

    fn raycast(&self, from: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
        (**self).raycast(from, direction, max_distance)
    }

    fn probe_climbable(
        &self,
        from: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<SurfaceHit> {
        (**self).probe_climbable(from, direction, max_distance)
    }

    fn has_ground_within(&self, from: Vec3, max_distance: f32) -> bool {
        (**self).has_ground_within(from, max_distance)
    }
}

impl<P: SurfaceProbe + ?Sized> SurfaceProbe for &P {
    fn check_ground(&self, center: Vec3, radius: f32) -> bool {
        (**self).check_ground(center, radius)
    }

    fn raycast(&self, from: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
        (**self).raycast(from, direction, max_distance)
    }

    fn probe_climbable(
        &self,
        from: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<SurfaceHit> {
        (**self).probe_climbable(from, direction, max_distance)
    }

    fn has_ground_within(&self, from: Vec3, max_distance: f32) -> bool {
        (**self).has_ground_within(from, max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::Surface;

    /// Ray always hits a surface 1m ahead with the given tags.
    struct FixedHit(Surface);

    impl SurfaceProbe for FixedHit {
        fn check_ground(&self, _center: Vec3, _radius: f32) -> bool {
            false
        }

        fn raycast(&self, from: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
            if max_distance < 1.0 || direction == Vec3::ZERO {
                return None;
            }
            let dir = direction.normalize();
            Some(SurfaceHit {
                point: from + dir,
                normal: -dir,
                distance: 1.0,
                surface: self.0,
            })
        }
    }

    #[test]
    fn test_probe_climbable_filters_surface() {
        let wall = FixedHit(Surface::WALL);
        let climbable = FixedHit(Surface::CLIMBABLE);
        assert!(wall.probe_climbable(Vec3::ZERO, Vec3::Z, 2.0).is_none());
        assert!(climbable.probe_climbable(Vec3::ZERO, Vec3::Z, 2.0).is_some());
    }

    #[test]
    fn test_has_ground_within_uses_distance() {
        let probe = FixedHit(Surface::GROUND);
        assert!(probe.has_ground_within(Vec3::ZERO, 1.5));
        assert!(!probe.has_ground_within(Vec3::ZERO, 0.5));
    }

    #[test]
    fn test_rc_forwards() {
        let probe = Rc::new(FixedHit(Surface::CLIMBABLE));
        assert!(probe.probe_climbable(Vec3::ZERO, Vec3::X, 2.0).is_some());
    }
}

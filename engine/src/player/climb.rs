//! Wall climbing probes
//!
//! Grab detection and release checks for climbable walls. These only query
//! the probe and report what they found; the state machine applies the
//! resulting transition.

use glam::Vec3;

use super::state::ClimbContact;
use crate::config::LocomotionConfig;
use crate::physics::SurfaceProbe;

/// Outcome of re-checking an active climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbRelease {
    /// Wall still present; keep climbing
    Hold,
    /// The climbable surface is gone (top of the wall or out of range)
    LostWall,
    /// Climbing down and a floor is right below
    ReachedBottom,
}

/// Origin of the horizontal grab ray, lifted off the floor so it does not
/// graze the ground.
#[inline]
fn grab_origin(config: &LocomotionConfig, position: Vec3) -> Vec3 {
    position + Vec3::Y * config.wall_probe_height
}

/// Look for a climbable wall along the movement direction.
///
/// A zero direction (no movement) never grabs.
pub fn try_grab<P: SurfaceProbe + ?Sized>(
    probe: &P,
    config: &LocomotionConfig,
    position: Vec3,
    direction: Vec3,
) -> Option<ClimbContact> {
    let grab_direction = direction.try_normalize()?;
    let hit = probe.probe_climbable(
        grab_origin(config, position),
        grab_direction,
        config.wall_grab_distance,
    )?;
    Some(ClimbContact {
        grab_direction,
        wall_normal: hit.normal,
    })
}

/// Re-cast along the original grab direction and check for the bottom of
/// the wall.
///
/// `heading` is the direction the player is currently steering toward; a
/// heading opposing the grab direction means they are climbing down.
pub fn check_release<P: SurfaceProbe + ?Sized>(
    probe: &P,
    config: &LocomotionConfig,
    position: Vec3,
    contact: &ClimbContact,
    heading: Vec3,
) -> ClimbRelease {
    let still_attached = probe
        .probe_climbable(
            grab_origin(config, position),
            contact.grab_direction,
            config.wall_grab_distance,
        )
        .is_some();
    if !still_attached {
        return ClimbRelease::LostWall;
    }

    if heading.dot(contact.grab_direction) < 0.0
        && probe
            .raycast(position, Vec3::NEG_Y, config.wall_drop_distance)
            .is_some()
    {
        return ClimbRelease::ReachedBottom;
    }

    ClimbRelease::Hold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Aabb, StaticWorld, Surface};

    fn world() -> StaticWorld {
        StaticWorld::new()
            .with(
                Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0)),
                Surface::GROUND,
            )
            .with(
                Aabb::new(Vec3::new(-2.0, 0.0, 1.0), Vec3::new(2.0, 3.0, 2.0)),
                Surface::CLIMBABLE,
            )
            .with(
                Aabb::new(Vec3::new(5.0, 0.0, -2.0), Vec3::new(6.0, 3.0, 2.0)),
                Surface::WALL,
            )
    }

    #[test]
    fn test_grab_climbable_wall_ahead() {
        let config = LocomotionConfig::default();
        let contact = try_grab(&world(), &config, Vec3::new(0.0, 0.0, 0.7), Vec3::Z * 5.0).unwrap();
        assert_eq!(contact.grab_direction, Vec3::Z);
        assert_eq!(contact.wall_normal, Vec3::NEG_Z);
    }

    #[test]
    fn test_no_grab_without_movement() {
        let config = LocomotionConfig::default();
        assert!(try_grab(&world(), &config, Vec3::new(0.0, 0.0, 0.7), Vec3::ZERO).is_none());
    }

    #[test]
    fn test_no_grab_on_plain_wall() {
        let config = LocomotionConfig::default();
        assert!(try_grab(&world(), &config, Vec3::new(4.7, 0.0, 0.0), Vec3::X).is_none());
    }

    #[test]
    fn test_release_when_wall_runs_out() {
        let config = LocomotionConfig::default();
        let contact = ClimbContact {
            grab_direction: Vec3::Z,
            wall_normal: Vec3::NEG_Z,
        };
        let w = world();
        assert_eq!(
            check_release(&w, &config, Vec3::new(0.0, 1.0, 0.7), &contact, Vec3::Z),
            ClimbRelease::Hold
        );
        // Above the top of the wall
        assert_eq!(
            check_release(&w, &config, Vec3::new(0.0, 3.5, 0.7), &contact, Vec3::Z),
            ClimbRelease::LostWall
        );
    }

    #[test]
    fn test_release_at_bottom_only_when_heading_down() {
        let config = LocomotionConfig::default();
        let contact = ClimbContact {
            grab_direction: Vec3::Z,
            wall_normal: Vec3::NEG_Z,
        };
        let w = world();
        let near_floor = Vec3::new(0.0, 0.05, 0.7);
        assert_eq!(
            check_release(&w, &config, near_floor, &contact, Vec3::NEG_Z),
            ClimbRelease::ReachedBottom
        );
        assert_eq!(
            check_release(&w, &config, near_floor, &contact, Vec3::Z),
            ClimbRelease::Hold
        );
    }
}

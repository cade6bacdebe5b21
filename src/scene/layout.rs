use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::options::SceneOptions;

/// Placement of the orbiting planets inside their group.
///
/// Planet `i` sits on the orbit circle at angle `(i + 1)·π/2`, so with four
/// planets the first one faces the camera (+Z) when the group yaw is zero.
/// The group itself is tilted about X and lowered by `height`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetLayout {
    /// Planet positions in group-local space.
    pub local_positions: Vec<Vec3>,
    /// Planet sphere radius.
    pub planet_radius: f32,
    /// Group tilt about X, in radians.
    pub tilt: f32,
    /// Vertical offset of the group.
    pub height: f32,
}

impl PlanetLayout {
    /// Lay out `count` planets using the scene options.
    #[must_use]
    pub fn new(count: usize, options: &SceneOptions) -> Self {
        let local_positions = (0..count)
            .map(|i| {
                let angle = (i + 1) as f32 * FRAC_PI_2;
                Vec3::new(
                    angle.cos() * options.orbit_radius,
                    0.0,
                    angle.sin() * options.orbit_radius,
                )
            })
            .collect();
        Self {
            local_positions,
            planet_radius: options.planet_radius,
            tilt: options.group_tilt,
            height: options.group_height,
        }
    }

    /// Number of planets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.local_positions.len()
    }

    /// Whether the layout has no planets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.local_positions.is_empty()
    }

    /// Group orientation for a given yaw (X tilt applied after Y yaw).
    #[must_use]
    pub fn group_rotation(&self, yaw: f32) -> Quat {
        Quat::from_rotation_x(self.tilt) * Quat::from_rotation_y(yaw)
    }

    /// World-space center of planet `index` for the given group yaw.
    #[must_use]
    pub fn world_position(&self, index: usize, yaw: f32) -> Option<Vec3> {
        let local = self.local_positions.get(index)?;
        Some(
            self.group_rotation(yaw) * *local
                + Vec3::new(0.0, self.height, 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn flat_options() -> SceneOptions {
        SceneOptions {
            group_tilt: 0.0,
            group_height: 0.0,
            ..SceneOptions::default()
        }
    }

    #[test]
    fn planets_sit_on_the_orbit_circle() {
        let layout = PlanetLayout::new(4, &SceneOptions::default());
        assert_eq!(layout.len(), 4);
        for p in &layout.local_positions {
            assert!((p.length() - 4.5).abs() < 1e-4);
            assert_eq!(p.y, 0.0);
        }
        // First planet faces the camera
        assert!((layout.local_positions[0] - Vec3::new(0.0, 0.0, 4.5))
            .length()
            < 1e-4);
    }

    #[test]
    fn quarter_turn_moves_planets_onto_neighbours() {
        let layout = PlanetLayout::new(4, &flat_options());
        for i in 0..4 {
            let turned = layout.world_position(i, -FRAC_PI_2).unwrap();
            let matches_some = (0..4).any(|j| {
                (layout.world_position(j, 0.0).unwrap() - turned).length()
                    < 1e-3
            });
            assert!(matches_some, "planet {i} left the orbit slots");
        }
    }

    #[test]
    fn opposite_turns_cancel() {
        let layout = PlanetLayout::new(4, &SceneOptions::default());
        let start = layout.world_position(2, 0.3).unwrap();
        let back = layout
            .world_position(2, 0.3 - FRAC_PI_2 + FRAC_PI_2)
            .unwrap();
        assert!((start - back).length() < 1e-4);
    }

    #[test]
    fn group_height_offsets_every_planet() {
        let layout = PlanetLayout::new(
            1,
            &SceneOptions {
                group_tilt: 0.0,
                ..SceneOptions::default()
            },
        );
        let p = layout.world_position(0, 0.0).unwrap();
        assert!((p.y + 0.8).abs() < 1e-5);
    }

    #[test]
    fn out_of_range_index_is_none() {
        let layout = PlanetLayout::new(0, &SceneOptions::default());
        assert!(layout.is_empty());
        assert!(layout.world_position(0, 0.0).is_none());
    }
}

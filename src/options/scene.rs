use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Planet layout and frame behavior.
pub struct SceneOptions {
    /// Radius of each planet sphere.
    #[schemars(skip)]
    pub planet_radius: f32,
    /// Distance of each planet from the group origin.
    #[schemars(title = "Orbit Radius", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub orbit_radius: f32,
    /// Tilt of the planet group about the X axis, in radians.
    #[schemars(title = "Group Tilt", range(min = -0.5, max = 0.5), extend("step" = 0.01))]
    pub group_tilt: f32,
    /// Vertical offset of the planet group.
    #[schemars(skip)]
    pub group_height: f32,
    /// Self-rotation added to every planet each rendered frame, in radians.
    #[schemars(title = "Planet Spin", range(min = 0.0, max = 0.01), extend("step" = 0.0001))]
    pub spin_per_frame: f32,
    /// Frame clear color (linear RGB).
    #[schemars(skip)]
    pub clear_color: [f32; 3],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            planet_radius: 1.3,
            orbit_radius: 4.5,
            group_tilt: 0.1,
            group_height: -0.8,
            spin_per_frame: 0.0001,
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

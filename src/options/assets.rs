use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Texture and environment map locations, one texture per planet.
pub struct AssetOptions {
    /// Equirectangular HDR environment map.
    pub environment_hdri: String,
    /// Starfield backdrop texture.
    pub starfield_texture: String,
    /// Planet surface textures, in orbit order.
    pub planet_textures: Vec<String>,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            environment_hdri: "https://dl.polyhaven.org/file/ph-assets/HDRIs/hdr/2k/moonlit_golf_2k.hdr".into(),
            starfield_texture: "./stars.jpg".into(),
            planet_textures: vec![
                "./earth/map.jpg".into(),
                "./csilla/color.png".into(),
                "./volcanic/color.png".into(),
                "./venus/map.jpg".into(),
            ],
        }
    }
}

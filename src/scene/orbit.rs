use super::layout::PlanetLayout;
use super::SceneSurface;
use crate::options::Options;

/// In-memory scene: caption strip, planet group yaw and per-planet spin.
///
/// Used by the native viewer, where the caption strip is reflected in the
/// window title, and by tests as a deterministic surface.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitScene {
    captions: Vec<String>,
    caption_offset: f32,
    caption_step: f32,
    group_yaw: f32,
    layout: PlanetLayout,
    planet_spin: Vec<f32>,
    spin_per_frame: f32,
    frames: u64,
}

impl OrbitScene {
    /// Build the scene described by `options`: one planet per configured
    /// texture and one caption per configured heading.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let layout = PlanetLayout::new(
            options.assets.planet_textures.len(),
            &options.scene,
        );
        Self {
            captions: options.captions.headings.clone(),
            caption_offset: 0.0,
            caption_step: options.carousel.caption_step_percent,
            group_yaw: 0.0,
            planet_spin: vec![0.0; layout.len()],
            layout,
            spin_per_frame: options.scene.spin_per_frame,
            frames: 0,
        }
    }

    /// Default scene with the given captions.
    #[must_use]
    pub fn with_captions(captions: Vec<String>) -> Self {
        let mut options = Options::default();
        options.captions.headings = captions;
        Self::from_options(&options)
    }

    /// Caption text, in order.
    #[must_use]
    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    /// Index of the caption currently closest to the viewport, given the
    /// shared offset. `None` when there are no captions.
    #[must_use]
    pub fn visible_index(&self) -> Option<usize> {
        if self.captions.is_empty() || self.caption_step <= 0.0 {
            return None;
        }
        let raw = (-self.caption_offset / self.caption_step).round();
        let max = (self.captions.len() - 1) as f32;
        Some(raw.clamp(0.0, max) as usize)
    }

    /// Text of the caption currently in view.
    #[must_use]
    pub fn visible_caption(&self) -> Option<&str> {
        self.visible_index()
            .and_then(|i| self.captions.get(i))
            .map(String::as_str)
    }

    /// Planet placement.
    #[must_use]
    pub fn layout(&self) -> &PlanetLayout {
        &self.layout
    }

    /// Accumulated self-rotation of each planet, in radians.
    #[must_use]
    pub fn planet_spin(&self) -> &[f32] {
        &self.planet_spin
    }

    /// Number of frames advanced so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl SceneSurface for OrbitScene {
    fn caption_count(&self) -> usize {
        self.captions.len()
    }

    fn caption_offset(&self) -> f32 {
        self.caption_offset
    }

    fn set_caption_offset(&mut self, percent: f32) {
        self.caption_offset = percent;
    }

    fn group_yaw(&self) -> f32 {
        self.group_yaw
    }

    fn set_group_yaw(&mut self, radians: f32) {
        self.group_yaw = radians;
    }

    fn advance_frame(&mut self) {
        for spin in &mut self.planet_spin {
            *spin += self.spin_per_frame;
        }
        self.frames += 1;
    }
}

//! Window surface lifecycle for the native viewer.

use std::fmt;

/// GPU setup failure, tagged with the step that failed.
#[derive(Debug)]
pub struct GpuSetupError {
    step: &'static str,
    detail: String,
}

impl GpuSetupError {
    pub(crate) fn at(step: &'static str, detail: impl fmt::Display) -> Self {
        Self {
            step,
            detail: detail.to_string(),
        }
    }

    /// Setup step that failed (`surface`, `adapter`, `device`, `config`).
    #[must_use]
    pub fn step(&self) -> &'static str {
        self.step
    }
}

impl fmt::Display for GpuSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} setup failed: {}", self.step, self.detail)
    }
}

impl std::error::Error for GpuSetupError {}

/// Device, queue and configured surface for one window.
///
/// The carousel only clears the frame, so low-power adapters are preferred
/// and no optional features are requested.
pub struct RenderContext {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
}

impl RenderContext {
    /// Set up a surface for `window` at `(width, height)`.
    ///
    /// # Errors
    ///
    /// Returns [`GpuSetupError`] naming the step that failed.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        (width, height): (u32, u32),
    ) -> Result<Self, GpuSetupError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(|e| GpuSetupError::at("surface", e))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::LowPower,
                ..Default::default()
            })
            .await
            .map_err(|e| GpuSetupError::at("adapter", e))?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Orrery Device"),
                ..Default::default()
            })
            .await
            .map_err(|e| GpuSetupError::at("device", e))?;

        let mut config = surface
            .get_default_config(&adapter, width.max(1), height.max(1))
            .ok_or_else(|| {
                GpuSetupError::at("config", "surface unsupported by adapter")
            })?;
        config.present_mode = wgpu::PresentMode::AutoVsync;
        surface.configure(&device, &config);
        log::info!(
            "surface ready: {}x{} {:?}",
            config.width,
            config.height,
            config.format
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Reconfigure the surface for the new window size. Ignores zero-sized
    /// dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface at its current size, after it was lost or
    /// became outdated.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquire the next swapchain texture, clear it to `color` (linear RGB)
    /// and present it.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the surface is lost, outdated,
    /// or timed out.
    pub fn clear_frame(
        &self,
        color: [f32; 3],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Clear Encoder"),
                });
        {
            let _pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Background Clear"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(color[0]),
                                    g: f64::from(color[1]),
                                    b: f64::from(color[2]),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
        }
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

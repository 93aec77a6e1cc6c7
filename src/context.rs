//! GPU context: the device and queue every model upload and draw goes through.
//!
//! The host application normally owns the window and surface and passes the
//! adapter in via [`Context::from_adapter`]. [`Context::headless`] creates a
//! context without any surface for offline rendering and tests.

use anyhow::anyhow;

#[derive(Clone, Debug)]
pub struct Context {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl Context {
    pub async fn from_adapter(adapter: &wgpu::Adapter) -> anyhow::Result<Self> {
        log::info!("device and queue for {:?}", adapter.get_info().name);
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("model-ngin device"),
                // Mobile GPUs only guarantee the WebGL2/GLES3 feature level.
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                ..Default::default()
            })
            .await?;
        Ok(Self { device, queue })
    }

    pub async fn headless() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::new_without_display_handle());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("No suitable GPU adapter: {e}"))?;
        Self::from_adapter(&adapter).await
    }
}

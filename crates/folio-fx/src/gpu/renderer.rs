use crate::error::FolioError;
use crate::math::Size;
use crate::starfield::{ParticleCloud, StarFrame, StarRenderer};

use super::init::*;
use super::uniforms::PointUniforms;

/// GPU renderer for one starfield canvas
pub struct GpuStarRenderer {
    canvas: web_sys::HtmlCanvasElement,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    #[allow(dead_code)]
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    instance_buffer: Option<wgpu::Buffer>,
    instance_count: u32,
}

impl GpuStarRenderer {
    /// Create a renderer drawing into `canvas`
    pub async fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, FolioError> {
        let width = canvas.width();
        let height = canvas.height();
        let (instance, surface) = Self::create_surface(canvas.clone())?;

        let (device, queue, adapter) = create_device(&instance, &surface).await?;
        let surface_config = configure_surface(&surface, &adapter, &device, width, height)?;
        let (uniform_buffer, bind_group_layout, bind_group) = create_uniform_resources(&device);
        let pipeline = create_point_pipeline(&device, &bind_group_layout, surface_config.format);

        Ok(Self {
            canvas,
            device,
            queue,
            surface,
            surface_config,
            pipeline,
            bind_group_layout,
            bind_group,
            uniform_buffer,
            instance_buffer: None,
            instance_count: 0,
        })
    }

    /// Create the wgpu instance and surface from canvas
    #[cfg(target_arch = "wasm32")]
    fn create_surface(
        canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>), FolioError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| FolioError::Gpu(format!("failed to create surface: {}", e)))?;

        Ok((instance, surface))
    }

    /// Create the wgpu instance and surface from canvas (non-WASM stub)
    #[cfg(not(target_arch = "wasm32"))]
    fn create_surface(
        _canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>), FolioError> {
        Err(FolioError::Gpu(
            "GpuStarRenderer only supports WASM targets".to_string(),
        ))
    }

    /// Get surface texture with error handling
    fn get_surface_texture(&mut self) -> Result<wgpu::SurfaceTexture, FolioError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                Err(FolioError::Surface("surface reconfigured, skip frame".to_string()))
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                Err(FolioError::Gpu("out of GPU memory".to_string()))
            }
            Err(wgpu::SurfaceError::Timeout) => {
                Err(FolioError::Surface("GPU timeout, skip frame".to_string()))
            }
        }
    }
}

impl StarRenderer for GpuStarRenderer {
    fn upload_particles(&mut self, cloud: &ParticleCloud) {
        if let Some(old) = self.instance_buffer.take() {
            old.destroy();
        }
        self.instance_count = cloud.len() as u32;
        if !cloud.is_empty() {
            let data = cloud.to_vertex_data();
            self.instance_buffer = Some(create_instance_buffer(&self.device, &data));
        }
    }

    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        let css = Size::new(width, height);
        if css.is_empty() {
            return;
        }
        let (buffer_width, buffer_height) = css.to_physical(pixel_ratio);

        self.canvas.set_width(buffer_width);
        self.canvas.set_height(buffer_height);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        self.surface_config.width = buffer_width;
        self.surface_config.height = buffer_height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    fn render(&mut self, frame: &StarFrame) -> Result<(), FolioError> {
        let uniforms = PointUniforms::from_frame(
            frame,
            self.surface_config.width,
            self.surface_config.height,
        );
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        let output = self.get_surface_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Starfield Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Starfield Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(instances) = &self.instance_buffer {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.bind_group, &[]);
                pass.set_vertex_buffer(0, instances.slice(..));
                pass.draw(0..6, 0..self.instance_count);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn dispose(&mut self) {
        if let Some(buffer) = self.instance_buffer.take() {
            buffer.destroy();
        }
        self.instance_count = 0;
        self.uniform_buffer.destroy();
    }
}

use crate::core::constants::*;
use crate::core::orbit::{camera_eye, OrbitMotion};
use crate::core::scroll::scroll_fraction;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use web_sys as web;

pub mod helpers;
pub mod mesh;
pub mod texture;

use mesh::Vertex;

pub static GLOBE_WGSL: &str = include_str!("../../shaders/globe.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    light_dir: [f32; 4],
    light_params: [f32; 4],
}

/// Surface description for one mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive: [f32; 3],
    /// 0 uses `color`, 1 samples the bound texture.
    pub texture_mix: f32,
    pub lit: bool,
}

impl Material {
    /// Flat deep-ocean look used until (or instead of) the earth texture.
    pub fn ocean_fallback() -> Self {
        Self {
            color: OCEAN_COLOR,
            opacity: 1.0,
            emissive: OCEAN_EMISSIVE,
            texture_mix: 0.0,
            lit: true,
        }
    }

    pub fn textured_earth() -> Self {
        Self {
            color: [1.0; 3],
            opacity: 1.0,
            emissive: [0.0; 3],
            texture_mix: 1.0,
            lit: true,
        }
    }

    pub fn wireframe() -> Self {
        Self {
            color: WIREFRAME_COLOR,
            opacity: WIREFRAME_OPACITY,
            emissive: [0.0; 3],
            texture_mix: 0.0,
            lit: false,
        }
    }

    pub fn clouds() -> Self {
        Self {
            color: [1.0; 3],
            opacity: CLOUD_OPACITY,
            emissive: [0.0; 3],
            texture_mix: 0.0,
            lit: true,
        }
    }

    pub fn stars() -> Self {
        Self {
            color: [1.0; 3],
            opacity: SPACE_STAR_OPACITY,
            emissive: [0.0; 3],
            texture_mix: 0.0,
            lit: false,
        }
    }
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    draw_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    material: Material,
    yaw: f32,
}

struct MeshSource<'a> {
    label: &'a str,
    vertices: &'a [Vertex],
    indices: Option<&'a [u32]>,
    material: Material,
}

/// WebGPU scene: textured globe with wireframe and cloud shells, a point
/// starfield and a scroll-driven camera.
pub struct GlobeRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    _placeholder_tex: wgpu::Texture,
    earth_texture: Option<wgpu::Texture>,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    solid_pipeline: wgpu::RenderPipeline,
    blend_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,

    globe: GpuMesh,
    wireframe: GpuMesh,
    clouds: GpuMesh,
    stars: GpuMesh,

    motion: OrbitMotion,
    cam_eye: Vec3,
    width: u32,
    height: u32,
}

impl GlobeRenderer {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("globe_device"),
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // transparent canvas over the page background
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        let bind_group_layout = helpers::create_mesh_bind_group_layout(&device);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("surface_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let (placeholder_tex, placeholder_view) = texture::placeholder_texture(&device, &queue);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(GLOBE_WGSL.into()),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("globe_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = |label, topology, depth_write| {
            helpers::make_mesh_pipeline(
                &device,
                &pipeline_layout,
                &shader,
                format,
                helpers::MeshPipelineDesc {
                    label,
                    topology,
                    depth_write,
                },
            )
        };
        let solid_pipeline = pipeline("globe_solid", wgpu::PrimitiveTopology::TriangleList, true);
        let blend_pipeline = pipeline("globe_blend", wgpu::PrimitiveTopology::TriangleList, false);
        let line_pipeline = pipeline("globe_lines", wgpu::PrimitiveTopology::LineList, false);
        let point_pipeline = pipeline("globe_points", wgpu::PrimitiveTopology::PointList, false);

        let earth = mesh::sphere(GLOBE_RADIUS, GLOBE_SEGMENTS, GLOBE_SEGMENTS);
        let wire_shell = mesh::sphere(WIREFRAME_RADIUS, LAYER_SEGMENTS, LAYER_SEGMENTS);
        let wire_indices = mesh::sphere_wire_indices(LAYER_SEGMENTS, LAYER_SEGMENTS);
        let cloud_shell = mesh::sphere(CLOUD_RADIUS, LAYER_SEGMENTS, LAYER_SEGMENTS);
        let mut rng = rand::thread_rng();
        let star_vertices = mesh::star_points(SPACE_STAR_COUNT, SPACE_STAR_SPREAD, &mut rng);

        let make = |src: MeshSource<'_>| {
            create_mesh(&device, &bind_group_layout, &sampler, &placeholder_view, src)
        };
        let globe = make(MeshSource {
            label: "earth",
            vertices: &earth.vertices,
            indices: Some(&earth.indices),
            material: Material::ocean_fallback(),
        });
        let wireframe = make(MeshSource {
            label: "wireframe",
            vertices: &wire_shell.vertices,
            indices: Some(&wire_indices),
            material: Material::wireframe(),
        });
        let clouds = make(MeshSource {
            label: "clouds",
            vertices: &cloud_shell.vertices,
            indices: Some(&cloud_shell.indices),
            material: Material::clouds(),
        });
        let stars = make(MeshSource {
            label: "space_stars",
            vertices: &star_vertices,
            indices: None,
            material: Material::stars(),
        });

        log::info!(
            "[globe] scene ready {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            bind_group_layout,
            sampler,
            _placeholder_tex: placeholder_tex,
            earth_texture: None,
            _depth_tex: depth_tex,
            depth_view,
            solid_pipeline,
            blend_pipeline,
            line_pipeline,
            point_pipeline,
            globe,
            wireframe,
            clouds,
            stars,
            motion: OrbitMotion::default(),
            cam_eye: camera_eye(0.0),
            width: width.max(1),
            height: height.max(1),
        })
    }

    pub fn has_texture(&self) -> bool {
        self.earth_texture.is_some()
    }

    /// Swap the fallback ocean material for the decoded earth texture.
    pub fn apply_texture(&mut self, bitmap: &web::ImageBitmap) -> anyhow::Result<()> {
        let (tex, view) = texture::upload_bitmap(&self.device, &self.queue, bitmap)?;
        self.globe.bind_group = helpers::create_mesh_bind_group(
            &self.device,
            &self.bind_group_layout,
            "earth_bg",
            &self.globe.uniform_buffer,
            &view,
            &self.sampler,
        );
        self.globe.material = Material::textured_earth();
        self.earth_texture = Some(tex);
        Ok(())
    }

    /// Step rotation and move the camera for the current scroll position.
    pub fn advance(&mut self, scroll_y: f64, scroll_height: f64, viewport_height: f64) {
        let angles = self.motion.advance();
        self.globe.yaw = angles.globe;
        self.wireframe.yaw = angles.globe;
        self.clouds.yaw = angles.clouds;
        self.stars.yaw = angles.stars;
        let f = scroll_fraction(scroll_y, scroll_height, viewport_height);
        self.cam_eye = camera_eye(f as f32);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&self.device, width, height);
        self._depth_tex = depth_tex;
        self.depth_view = depth_view;
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn view_proj(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_DEG.to_radians(),
            aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        let view = Mat4::look_at_rh(self.cam_eye, Vec3::ZERO, Vec3::Y);
        proj * view
    }

    fn write_uniforms(&self, mesh: &GpuMesh, view_proj: Mat4) {
        let m = mesh.material;
        let sun = Vec3::from_array(SUN_POSITION).normalize();
        let u = MeshUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: Mat4::from_rotation_y(mesh.yaw).to_cols_array_2d(),
            color: [m.color[0], m.color[1], m.color[2], m.opacity],
            emissive: [m.emissive[0], m.emissive[1], m.emissive[2], m.texture_mix],
            light_dir: [sun.x, sun.y, sun.z, if m.lit { 1.0 } else { 0.0 }],
            light_params: [AMBIENT_INTENSITY, SUN_INTENSITY, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&mesh.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let view_proj = self.view_proj();
        for mesh in [&self.stars, &self.globe, &self.wireframe, &self.clouds] {
            self.write_uniforms(mesh, view_proj);
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("globe_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("globe_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // opaque first, translucent shells last
            draw_mesh(&mut rpass, &self.point_pipeline, &self.stars);
            draw_mesh(&mut rpass, &self.solid_pipeline, &self.globe);
            draw_mesh(&mut rpass, &self.line_pipeline, &self.wireframe);
            draw_mesh(&mut rpass, &self.blend_pipeline, &self.clouds);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_mesh(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    texture_view: &wgpu::TextureView,
    src: MeshSource<'_>,
) -> GpuMesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(src.label),
        contents: bytemuck::cast_slice(src.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = src.indices.map(|indices| {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(src.label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        })
    });
    let draw_count = src
        .indices
        .map(|i| i.len())
        .unwrap_or(src.vertices.len()) as u32;
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(src.label),
        size: std::mem::size_of::<MeshUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = helpers::create_mesh_bind_group(
        device,
        layout,
        src.label,
        &uniform_buffer,
        texture_view,
        sampler,
    );
    GpuMesh {
        vertex_buffer,
        index_buffer,
        draw_count,
        uniform_buffer,
        bind_group,
        material: src.material,
        yaw: 0.0,
    }
}

fn draw_mesh(rpass: &mut wgpu::RenderPass<'_>, pipeline: &wgpu::RenderPipeline, mesh: &GpuMesh) {
    rpass.set_pipeline(pipeline);
    rpass.set_bind_group(0, &mesh.bind_group, &[]);
    rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    match &mesh.index_buffer {
        Some(ib) => {
            rpass.set_index_buffer(ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.draw_count, 0, 0..1);
        }
        None => rpass.draw(0..mesh.draw_count, 0..1),
    }
}

//! Instanced spiral sprite pass.
//!
//! One pipeline, one 4-corner vertex buffer shared by every point, and one
//! 16-byte uniform buffer rewritten each frame. A frame is a single
//! `draw(0..4, 0..instance_count)`.

use wgpu::util::DeviceExt;

use crate::error::PhylloError;
use crate::gpu::pipeline_helpers::{
    corner_buffer_layout, uniform_buffer as uniform_entry,
    PREMULTIPLIED_OVER,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, SPIRAL_SHADER};
use crate::spiral::{FrameUniforms, SPRITE_CORNERS};

/// Vertices per sprite quad (triangle strip).
pub const VERTICES_PER_SPRITE: u32 = SPRITE_CORNERS.len() as u32;

/// GPU resources for the spiral pass.
pub struct SpiralRenderer {
    pipeline: wgpu::RenderPipeline,
    sprite_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl SpiralRenderer {
    /// Build the pipeline and allocate the sprite and uniform buffers.
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError::Shader`] if the spiral shader fails to compose.
    pub fn new(
        context: &RenderContext,
        shader_composer: &mut ShaderComposer,
        initial: &FrameUniforms,
    ) -> Result<Self, PhylloError> {
        let device = &context.device;

        let sprite_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sprite Corner Buffer"),
                contents: bytemuck::cast_slice(&SPRITE_CORNERS),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Frame Uniform Buffer"),
                contents: bytemuck::bytes_of(initial),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Spiral Layout"),
                entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX)],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Spiral Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline = Self::create_pipeline(
            context,
            shader_composer,
            &bind_group_layout,
        )?;

        Ok(Self {
            pipeline,
            sprite_buffer,
            uniform_buffer,
            bind_group,
        })
    }

    fn create_pipeline(
        context: &RenderContext,
        shader_composer: &mut ShaderComposer,
        bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Result<wgpu::RenderPipeline, PhylloError> {
        let shader = shader_composer.compose(
            &context.device,
            "Spiral Shader",
            SPIRAL_SHADER,
        )?;

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Spiral Pipeline Layout"),
                bind_group_layouts: &[bind_group_layout],
                push_constant_ranges: &[],
            },
        );

        Ok(context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Spiral Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[corner_buffer_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(PREMULTIPLIED_OVER),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleStrip,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            }))
    }

    /// Upload this frame's uniform record.
    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Clear `target` and draw `instance_count` sprites into it.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clear: wgpu::Color,
        instance_count: u32,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Spiral Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.sprite_buffer.slice(..));
        pass.draw(0..VERTICES_PER_SPRITE, 0..instance_count);
    }
}

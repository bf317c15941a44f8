//! Shared wgpu boilerplate for the sprite pipeline.

/// Uniform buffer binding visible to the given stages.
pub fn uniform_buffer(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

/// Premultiplied-alpha "over" blending for color; destination alpha is
/// left untouched.
pub const PREMULTIPLIED_OVER: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::Zero,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Vertex buffer attributes for a single `vec2<f32>` at location 0.
pub const CORNER_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x2];

/// Per-vertex layout of a buffer of `[f32; 2]` corners.
pub fn corner_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<[f32; 2]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &CORNER_ATTRIBUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_layout_is_two_packed_floats() {
        let layout = corner_buffer_layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
    }

    #[test]
    fn uniform_entry_is_a_plain_uniform_buffer() {
        let entry = uniform_buffer(0, wgpu::ShaderStages::VERTEX);
        assert_eq!(entry.binding, 0);
        assert_eq!(entry.visibility, wgpu::ShaderStages::VERTEX);
        assert!(matches!(
            entry.ty,
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            }
        ));
    }

    #[test]
    fn blend_keeps_destination_alpha() {
        assert_eq!(PREMULTIPLIED_OVER.alpha.src_factor, wgpu::BlendFactor::Zero);
        assert_eq!(PREMULTIPLIED_OVER.alpha.dst_factor, wgpu::BlendFactor::One);
        assert_eq!(
            PREMULTIPLIED_OVER.color,
            wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING.color
        );
    }
}

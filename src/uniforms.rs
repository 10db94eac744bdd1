use bytemuck::{Pod, Zeroable};

use crate::navigation::FrameBasis;

/// Per-frame shader input: camera position, screen-plane basis and zoom,
/// padded to a 16-byte multiple.
#[repr(C)]
#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub position: [f32; 4],
    pub right: [f32; 4],
    pub up: [f32; 4],
    pub zoom: f32,
    pub padding: [f32; 3],
}

impl FrameUniforms {
    pub const FLOAT_COUNT: usize = 13;

    /// The meaningful floats, in upload order.
    pub fn as_floats(&self) -> &[f32] {
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(self));
        &floats[..Self::FLOAT_COUNT]
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&FrameBasis> for FrameUniforms {
    fn from(frame: &FrameBasis) -> Self {
        Self {
            position: frame.position.to_f32_array(),
            right: frame.right.to_f32_array(),
            up: frame.up.to_f32_array(),
            zoom: frame.zoom as f32,
            padding: [0.0; 3],
        }
    }
}

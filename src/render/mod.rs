pub mod recording;

pub use recording::{DrawStats, RecordingBackend};

use crate::loader::texture::TextureId;
use crate::types::{Primitive, Vertex};

/// The rendering collaborator the scene graph draws through.
///
/// Implementations translate these calls into immediate-mode or
/// vertex-array submissions. Two draw shapes are offered: one primitive
/// at a time from resolved vertices, or a batched call over parallel
/// flat buffers (stride 3) sharing a single topology.
pub trait RenderBackend {
    /// Smooth (per-vertex) vs flat shading for subsequent draws.
    fn set_smooth_shading(&mut self, smooth: bool);

    /// Push ambient/diffuse/specular colors and the specular exponent.
    fn set_material(&mut self, ka: [f32; 4], kd: [f32; 4], ks: [f32; 4], shininess: f32);

    fn bind_texture(&mut self, id: TextureId);

    fn unbind_texture(&mut self);

    /// Draw one primitive from its resolved vertices.
    fn draw_primitive(&mut self, primitive: Primitive, vertices: &[Vertex]);

    /// Draw a whole batch from parallel position/normal/[texcoord]
    /// buffers, 3 floats per vertex, all primitives sharing `primitive`.
    fn draw_arrays(
        &mut self,
        primitive: Primitive,
        positions: &[f32],
        normals: &[f32],
        texcoords: Option<&[f32]>,
    );
}

use crate::loader::texture::TextureId;
use crate::render::RenderBackend;
use crate::types::{Primitive, Vertex};

/// Counters accumulated by the recording backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub batched_draws: usize,
    pub face_draws: usize,
    pub vertices_submitted: usize,
    pub material_changes: usize,
    pub texture_binds: usize,
    pub texture_unbinds: usize,
}

/// A backend that records every call instead of rendering.
///
/// Serves as the test double for draw-dispatch assertions and powers the
/// CLI dry run.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    stats: DrawStats,
    smooth: bool,
    bound_texture: Option<TextureId>,
}

impl RecordingBackend {
    pub fn stats(&self) -> DrawStats {
        self.stats
    }

    pub fn smooth_shading(&self) -> bool {
        self.smooth
    }

    pub fn bound_texture(&self) -> Option<TextureId> {
        self.bound_texture
    }
}

impl RenderBackend for RecordingBackend {
    fn set_smooth_shading(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    fn set_material(&mut self, _ka: [f32; 4], _kd: [f32; 4], _ks: [f32; 4], _shininess: f32) {
        self.stats.material_changes += 1;
    }

    fn bind_texture(&mut self, id: TextureId) {
        self.bound_texture = Some(id);
        self.stats.texture_binds += 1;
    }

    fn unbind_texture(&mut self) {
        self.bound_texture = None;
        self.stats.texture_unbinds += 1;
    }

    fn draw_primitive(&mut self, _primitive: Primitive, vertices: &[Vertex]) {
        self.stats.face_draws += 1;
        self.stats.vertices_submitted += vertices.len();
    }

    fn draw_arrays(
        &mut self,
        _primitive: Primitive,
        positions: &[f32],
        _normals: &[f32],
        _texcoords: Option<&[f32]>,
    ) {
        self.stats.batched_draws += 1;
        self.stats.vertices_submitted += positions.len() / 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn records_primitive_draws() {
        let mut backend = RecordingBackend::default();
        let vertices = [Vertex::new(Vec3::ZERO), Vertex::new(Vec3::X)];
        backend.draw_primitive(Primitive::Line, &vertices);

        assert_eq!(backend.stats().face_draws, 1);
        assert_eq!(backend.stats().vertices_submitted, 2);
    }

    #[test]
    fn records_batched_draws() {
        let mut backend = RecordingBackend::default();
        backend.draw_arrays(Primitive::Triangle, &[0.0; 18], &[0.0; 18], None);

        assert_eq!(backend.stats().batched_draws, 1);
        assert_eq!(backend.stats().vertices_submitted, 6);
    }

    #[test]
    fn tracks_texture_binding() {
        let mut backend = RecordingBackend::default();
        backend.bind_texture(TextureId(7));
        assert_eq!(backend.bound_texture(), Some(TextureId(7)));

        backend.unbind_texture();
        assert_eq!(backend.bound_texture(), None);
        assert_eq!(backend.stats().texture_binds, 1);
        assert_eq!(backend.stats().texture_unbinds, 1);
    }
}

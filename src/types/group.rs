use tracing::debug;

use crate::render::RenderBackend;
use crate::types::{Face, Material};

/// Build the group id a (material name, shading flag) pair maps to.
pub fn group_id(material_name: &str, shading: u32) -> String {
    format!("{material_name}_{shading}")
}

/// A render group: faces sharing one material and one shading flag, the
/// unit of batched drawing.
///
/// Faces are mirrored into parallel flat buffers (3 floats per vertex) as
/// they are appended, so a consistent group can be submitted as a single
/// vertex-array draw. Groups with mixed primitive topologies fall back to
/// one draw call per face.
#[derive(Debug, Clone)]
pub struct Group {
    id: String,
    material: Material,
    shading: u32,
    faces: Vec<Face>,
    positions: Vec<f32>,
    normals: Vec<f32>,
    texcoords: Vec<f32>,
    /// Memoized on first draw, reset by `push_face`.
    consistency: Option<bool>,
}

impl Group {
    pub fn new(material: Material, shading: u32) -> Self {
        let id = group_id(material.name(), shading);
        Self {
            id,
            material,
            shading,
            faces: Vec::new(),
            positions: Vec::new(),
            normals: Vec::new(),
            texcoords: Vec::new(),
            consistency: None,
        }
    }

    /// The group faces land in when no `usemtl`/`s` directive is active.
    pub fn default_group(shading: u32) -> Self {
        let mut group = Group::new(Material::default(), shading);
        group.id = group_id("default", shading);
        group
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn shading(&self) -> u32 {
        self.shading
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn texcoords(&self) -> &[f32] {
        &self.texcoords
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.material.set_d(alpha);
    }

    /// Append a face, mirroring its vertex data into the flat buffers and
    /// invalidating the memoized consistency flag.
    pub fn push_face(&mut self, face: Face) {
        for vertex in face.vertices() {
            let p = vertex.position();
            self.positions.extend_from_slice(&[p.x, p.y, p.z]);

            let n = vertex.normal().unwrap_or_default();
            self.normals.extend_from_slice(&[n.x, n.y, n.z]);

            if let Some(t) = vertex.texcoord() {
                self.texcoords.extend_from_slice(&[t.x, t.y, t.z]);
            }
        }
        self.faces.push(face);
        self.consistency = None;
    }

    /// Whether every face shares the same primitive topology. Memoized;
    /// recomputed after any `push_face`.
    pub fn is_consistent(&mut self) -> bool {
        if let Some(cached) = self.consistency {
            return cached;
        }
        let consistent = self
            .faces
            .windows(2)
            .all(|pair| pair[0].primitive() == pair[1].primitive());
        if !consistent {
            debug!(group = %self.id, "Group has mixed primitive types");
        }
        self.consistency = Some(consistent);
        consistent
    }

    /// Push this group's material state to the backend.
    pub fn apply_material(&self, backend: &mut dyn RenderBackend) {
        backend.set_smooth_shading(self.shading != 0);

        // Exported ambient colors are usually black; reuse the diffuse
        // color for the ambient term.
        backend.set_material(
            self.material.kd(),
            self.material.kd(),
            self.material.ks(),
            self.material.ns(),
        );

        if let Some(id) = self.material.texture() {
            backend.bind_texture(id);
        }
    }

    /// Draw the group: one batched vertex-array call when the topology is
    /// uniform, otherwise one call per face.
    pub fn draw(&mut self, backend: &mut dyn RenderBackend) {
        if self.faces.is_empty() {
            return;
        }

        let consistent = self.is_consistent();
        self.apply_material(backend);

        if consistent {
            let primitive = self.faces[0].primitive();
            let texcoords = (!self.texcoords.is_empty()).then_some(self.texcoords.as_slice());
            backend.draw_arrays(primitive, &self.positions, &self.normals, texcoords);
        } else {
            for face in &self.faces {
                backend.draw_primitive(face.primitive(), face.vertices());
            }
        }

        if self.material.texture().is_some() {
            backend.unbind_texture();
        }
    }
}

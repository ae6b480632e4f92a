use glam::Vec3;

use crate::error::{ModelError, Result};
use crate::types::Vertex;

/// Primitive topology of a face, keyed by vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Line,
    Triangle,
    Quad,
}

impl Primitive {
    /// Number of vertices a face of this topology holds.
    pub fn vertex_count(&self) -> usize {
        match self {
            Primitive::Line => 2,
            Primitive::Triangle => 3,
            Primitive::Quad => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Line => "line",
            Primitive::Triangle => "triangle",
            Primitive::Quad => "quad",
        }
    }
}

impl TryFrom<usize> for Primitive {
    type Error = ModelError;

    fn try_from(arity: usize) -> Result<Self> {
        match arity {
            2 => Ok(Primitive::Line),
            3 => Ok(Primitive::Triangle),
            4 => Ok(Primitive::Quad),
            n => Err(ModelError::Parse(format!("Unknown face arity {n}"))),
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered run of 2/3/4 vertices forming one line, triangle, or quad.
///
/// When the face receives its final vertex and that vertex carries no
/// normal, a flat normal is computed from the first three vertices and
/// broadcast to every vertex. A completed face is therefore uniformly
/// normal-bearing.
#[derive(Debug, Clone)]
pub struct Face {
    primitive: Primitive,
    vertices: Vec<Vertex>,
}

impl Face {
    pub fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            vertices: Vec::with_capacity(primitive.vertex_count()),
        }
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_complete(&self) -> bool {
        self.vertices.len() == self.primitive.vertex_count()
    }

    /// Append a vertex. Completing the face with a normal-less vertex
    /// triggers the flat-normal broadcast.
    pub fn push_vertex(&mut self, vertex: Vertex) {
        let had_normal = vertex.has_normal();
        self.vertices.push(vertex);

        if self.is_complete() && !had_normal {
            let normal = self.flat_normal();
            for v in &mut self.vertices {
                v.set_normal(normal);
            }
        }
    }

    /// Flat normal from the first three vertices: `(v0 - v1) x (v0 - v2)`,
    /// normalized. Degenerate (collinear) triples yield the zero vector
    /// rather than NaN. For lines the second edge falls back to v1.
    fn flat_normal(&self) -> Vec3 {
        let p0 = self.vertices[0].position();
        let p1 = self.vertices[1].position();
        let p2 = self
            .vertices
            .get(2)
            .map_or(p1, |v| v.position());

        let a = p0 - p1;
        let b = p0 - p2;
        a.cross(b).normalize_or_zero()
    }
}

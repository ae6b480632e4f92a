use glam::Vec3;

/// A single renderable vertex: position plus optional normal and texture
/// coordinate.
///
/// `size` records how many index fields the originating face record carried
/// (2, 3, or 4); it is informational only and does not constrain behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    position: Vec3,
    normal: Option<Vec3>,
    texcoord: Option<Vec3>,
    size: u32,
}

impl Vertex {
    /// Position-only vertex.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            normal: None,
            texcoord: None,
            size: 3,
        }
    }

    /// Position + normal.
    pub fn with_normal(position: Vec3, normal: Vec3, size: u32) -> Self {
        Self {
            position,
            normal: Some(normal),
            texcoord: None,
            size,
        }
    }

    /// Position + texture coordinate.
    pub fn with_texcoord(position: Vec3, texcoord: Vec3, size: u32) -> Self {
        Self {
            position,
            normal: None,
            texcoord: Some(texcoord),
            size,
        }
    }

    /// Fully specified vertex.
    pub fn full(position: Vec3, normal: Vec3, texcoord: Vec3, size: u32) -> Self {
        Self {
            position,
            normal: Some(normal),
            texcoord: Some(texcoord),
            size,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Option<Vec3> {
        self.normal
    }

    pub fn texcoord(&self) -> Option<Vec3> {
        self.texcoord
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn has_normal(&self) -> bool {
        self.normal.is_some()
    }

    pub fn has_texcoord(&self) -> bool {
        self.texcoord.is_some()
    }

    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = Some(normal);
    }

    pub fn set_texcoord(&mut self, texcoord: Vec3) {
        self.texcoord = Some(texcoord);
    }
}

use std::path::{Path, PathBuf};

use glam::Vec3;

use crate::error::Result;
use crate::render::RenderBackend;
use crate::types::{Material, Object};

/// Initial placement of a model in a scene: position, orientation,
/// opacity, and scale. Carried as data only; applying it is the
/// renderer's business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub phi: f32,
    pub theta: f32,
    pub alpha: f32,
    pub scale: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            phi: 0.0,
            theta: 0.0,
            alpha: 1.0,
            scale: 1.0,
        }
    }
}

/// The scene graph root: the objects and materials loaded from one
/// OBJ/MTL file pair.
///
/// Built once by the loader; afterwards the graph is read-only apart from
/// the `set_alpha` cascade and per-group draw-time memoization.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) obj_file: PathBuf,
    pub(crate) mtl_file: PathBuf,
    pub(crate) materials: Vec<Material>,
    pub(crate) objects: Vec<Object>,
    pub(crate) vertex_count: usize,
    pub(crate) normal_count: usize,
    pub(crate) texcoord_count: usize,
    pub(crate) placement: Placement,
}

impl Model {
    /// Load a model headlessly: textures are decoded from disk and handed
    /// sequential ids rather than real GPU handles.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        use crate::loader::texture::{CountingRegistry, FsImageLoader};
        use crate::loader::ObjLoader;

        let mut registry = CountingRegistry::default();
        ObjLoader::new(&FsImageLoader, &mut registry).load(path.as_ref())
    }

    pub fn obj_file(&self) -> &Path {
        &self.obj_file
    }

    pub fn mtl_file(&self) -> &Path {
        &self.mtl_file
    }

    /// Model name: the OBJ file stem.
    pub fn name(&self) -> &str {
        self.obj_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Object] {
        &mut self.objects
    }

    /// Look a material up by exact name; first match wins. Unknown names
    /// yield an all-default material rather than an error.
    pub fn material_by_name(&self, name: &str) -> Material {
        self.materials
            .iter()
            .find(|m| m.name() == name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn normal_count(&self) -> usize {
        self.normal_count
    }

    pub fn texcoord_count(&self) -> usize {
        self.texcoord_count
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn group_count(&self) -> usize {
        self.objects.iter().map(|o| o.group_count()).sum()
    }

    pub fn face_count(&self) -> usize {
        self.objects.iter().map(|o| o.face_count()).sum()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Cascade an alpha value down to every group's material.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.placement.alpha = alpha;
        for object in &mut self.objects {
            object.set_alpha(alpha);
        }
    }

    pub fn draw(&mut self, backend: &mut dyn RenderBackend) {
        for object in &mut self.objects {
            object.draw(backend);
        }
    }
}

pub mod mtl;
pub mod obj;
pub mod texture;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::types::{Model, Placement};
use texture::{ImageLoader, TextureRegistry};

/// Loader knobs beyond the file pair itself.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Use this MTL file instead of the one the OBJ names (or implies).
    pub mtl_override: Option<PathBuf>,
    /// Skip texture decoding and registration entirely.
    pub skip_textures: bool,
}

/// Assembles a `Model` from an OBJ/MTL file pair: scan, material table,
/// then the populate pass.
pub struct ObjLoader<'a> {
    images: &'a dyn ImageLoader,
    registry: &'a mut dyn TextureRegistry,
    options: LoadOptions,
}

impl<'a> ObjLoader<'a> {
    pub fn new(images: &'a dyn ImageLoader, registry: &'a mut dyn TextureRegistry) -> Self {
        Self {
            images,
            registry,
            options: LoadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the full load. Unreadable or structurally empty OBJ files are
    /// fatal; a missing material library degrades to an empty table.
    pub fn load(&mut self, path: &Path) -> Result<Model> {
        let stats = obj::scan(path)?;

        let mtl_file = self
            .options
            .mtl_override
            .clone()
            .or_else(|| stats.mtl_file.clone())
            .unwrap_or_else(|| path.with_extension("mtl"));

        let materials = match mtl::load_materials(
            &mtl_file,
            self.images,
            self.registry,
            !self.options.skip_textures,
        ) {
            Ok(materials) => materials,
            Err(e) => {
                warn!(mtl = %mtl_file.display(), "No materials associated with model: {e}");
                Vec::new()
            }
        };

        let objects = obj::populate(path, &stats, &materials)?;

        info!(
            model = %path.display(),
            objects = objects.len(),
            materials = materials.len(),
            vertices = stats.vertices,
            faces = stats.faces,
            "Loaded model"
        );

        Ok(Model {
            obj_file: path.to_path_buf(),
            mtl_file,
            materials,
            objects,
            vertex_count: stats.vertices,
            normal_count: stats.normals,
            texcoord_count: stats.texcoords,
            placement: Placement::default(),
        })
    }
}

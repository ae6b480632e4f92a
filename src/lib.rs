pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod types;

pub use error::{ModelError, Result};
pub use loader::texture::{
    CountingRegistry, FsImageLoader, ImageLoader, TextureId, TextureImage, TextureRegistry,
};
pub use loader::{LoadOptions, ObjLoader};
pub use render::{DrawStats, RecordingBackend, RenderBackend};
pub use types::{Face, Group, Material, Model, Object, Placement, Primitive, Vertex};

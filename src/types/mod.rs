pub mod face;
pub mod group;
pub mod material;
pub mod model;
pub mod object;
pub mod vertex;

pub use face::{Face, Primitive};
pub use group::Group;
pub use material::Material;
pub use model::{Model, Placement};
pub use object::Object;
pub use vertex::Vertex;

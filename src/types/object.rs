use crate::render::RenderBackend;
use crate::types::group::{group_id, Group};
use crate::types::Material;

/// A named collection of render groups, keyed uniquely by group id.
#[derive(Debug, Clone, Default)]
pub struct Object {
    name: String,
    groups: Vec<Group>,
}

impl Object {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn group_index(&self, id: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.id() == id)
    }

    pub fn has_group(&self, material_name: &str, shading: u32) -> bool {
        self.group_index(&group_id(material_name, shading)).is_some()
    }

    pub fn group_mut(&mut self, index: usize) -> Option<&mut Group> {
        self.groups.get_mut(index)
    }

    /// Find the group for (material, shading), creating it if absent.
    /// Returns the group's index; no two groups ever share an id.
    pub fn get_or_insert(&mut self, material: &Material, shading: u32) -> usize {
        let id = group_id(material.name(), shading);
        if let Some(index) = self.group_index(&id) {
            return index;
        }
        self.groups.push(Group::new(material.clone(), shading));
        self.groups.len() - 1
    }

    /// Insert a pre-built group unless one with the same id exists.
    /// Returns the index of the group now holding that id.
    pub fn insert_group(&mut self, group: Group) -> usize {
        if let Some(index) = self.group_index(group.id()) {
            return index;
        }
        self.groups.push(group);
        self.groups.len() - 1
    }

    /// Drop groups that ended a load pass without any faces.
    pub fn purge_empty_groups(&mut self) {
        self.groups.retain(|g| g.face_count() > 0);
    }

    pub fn face_count(&self) -> usize {
        self.groups.iter().map(|g| g.face_count()).sum()
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        for group in &mut self.groups {
            group.set_alpha(alpha);
        }
    }

    pub fn draw(&mut self, backend: &mut dyn RenderBackend) {
        for group in &mut self.groups {
            group.draw(backend);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Face, Primitive, Vertex};
    use glam::Vec3;

    fn triangle() -> Face {
        let mut face = Face::new(Primitive::Triangle);
        face.push_vertex(Vertex::new(Vec3::ZERO));
        face.push_vertex(Vertex::new(Vec3::X));
        face.push_vertex(Vertex::new(Vec3::Y));
        face
    }

    #[test]
    fn get_or_insert_is_idempotent() {
        let mut object = Object::named("cube");
        let steel = Material::named("steel");

        let a = object.get_or_insert(&steel, 1);
        let b = object.get_or_insert(&steel, 1);
        assert_eq!(a, b);
        assert_eq!(object.group_count(), 1);
    }

    #[test]
    fn distinct_pairs_never_collide() {
        let mut object = Object::named("cube");
        let steel = Material::named("steel");
        let wood = Material::named("wood");

        let a = object.get_or_insert(&steel, 0);
        let b = object.get_or_insert(&steel, 1);
        let c = object.get_or_insert(&wood, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(object.group_count(), 3);
    }

    #[test]
    fn insert_group_rejects_duplicate_id() {
        let mut object = Object::named("cube");
        let first = object.insert_group(Group::default_group(0));
        let second = object.insert_group(Group::default_group(0));
        assert_eq!(first, second);
        assert_eq!(object.group_count(), 1);
    }

    #[test]
    fn purge_drops_only_empty_groups() {
        let mut object = Object::named("cube");
        let index = object.get_or_insert(&Material::named("steel"), 0);
        object
            .group_mut(index)
            .unwrap()
            .push_face(triangle());
        object.get_or_insert(&Material::named("unused"), 0);

        assert_eq!(object.group_count(), 2);
        object.purge_empty_groups();
        assert_eq!(object.group_count(), 1);
        assert_eq!(object.groups()[0].id(), "steel_0");
    }

    #[test]
    fn has_group_checks_both_keys() {
        let mut object = Object::named("cube");
        object.get_or_insert(&Material::named("steel"), 2);
        assert!(object.has_group("steel", 2));
        assert!(!object.has_group("steel", 0));
        assert!(!object.has_group("wood", 2));
    }
}

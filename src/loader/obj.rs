use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use glam::Vec3;
use tracing::{debug, warn};

use crate::error::{ModelError, Result};
use crate::types::group::Group;
use crate::types::{Face, Material, Object, Primitive, Vertex};

/// Counts gathered by the first pass over an OBJ file, plus the material
/// library it names.
#[derive(Debug, Clone, Default)]
pub struct ObjStats {
    pub vertices: usize,
    pub normals: usize,
    pub texcoords: usize,
    pub faces: usize,
    pub objects: usize,
    pub mtl_file: Option<PathBuf>,
}

impl ObjStats {
    pub fn has_normals(&self) -> bool {
        self.normals > 0
    }

    pub fn has_texcoords(&self) -> bool {
        self.texcoords > 0
    }
}

/// Index layout of one face record, fixed for the whole file by which
/// attribute kinds exist anywhere in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceLayout {
    /// `f v v v`
    Position,
    /// `f v/t v/t v/t`
    PositionTexcoord,
    /// `f v//n v//n v//n`
    PositionNormal,
    /// `f v/t/n v/t/n v/t/n`
    Full,
}

impl FaceLayout {
    /// Pure function of the file-wide attribute presence pair.
    pub fn select(has_normals: bool, has_texcoords: bool) -> Self {
        match (has_normals, has_texcoords) {
            (false, false) => FaceLayout::Position,
            (false, true) => FaceLayout::PositionTexcoord,
            (true, false) => FaceLayout::PositionNormal,
            (true, true) => FaceLayout::Full,
        }
    }
}

/// Pass 1: stream the OBJ file and count vertices, normals, texture
/// coordinates, faces, and objects; pick up the `mtllib` path, resolved
/// relative to the OBJ file's directory.
///
/// A file with zero vertices or zero faces cannot produce a usable model
/// and is rejected here.
pub fn scan(path: &Path) -> Result<ObjStats> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut stats = ObjStats::default();

    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(tag) = fields.next() else {
            continue;
        };

        match tag {
            "o" => stats.objects += 1,
            "vn" => stats.normals += 1,
            "vt" => stats.texcoords += 1,
            "v" => stats.vertices += 1,
            "f" => stats.faces += 1,
            "mtllib" => {
                if let Some(name) = fields.next() {
                    stats.mtl_file = Some(resolve_sibling(path, name));
                }
            }
            _ => {}
        }
    }

    debug!(
        vertices = stats.vertices,
        normals = stats.normals,
        texcoords = stats.texcoords,
        faces = stats.faces,
        objects = stats.objects,
        "Scanned OBJ file"
    );

    if stats.vertices == 0 || stats.faces == 0 {
        return Err(ModelError::Parse(format!(
            "{} has {} vertices and {} faces; nothing to build",
            path.display(),
            stats.vertices,
            stats.faces
        )));
    }

    if stats.objects == 0 {
        debug!(path = %path.display(), "No objects defined; using a default object");
    }

    Ok(stats)
}

/// Resolve `name` next to `base` when `base` carries a directory.
fn resolve_sibling(base: &Path, name: &str) -> PathBuf {
    match base.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

/// Parser state threaded through the pass-2 dispatch loop: the object
/// and group faces currently land in, and the material/shading pair the
/// most recent directives selected.
struct ParserState {
    object: Object,
    group: Option<usize>,
    material: Material,
    shading: u32,
    /// Set once a `usemtl` or `s` directive has selected a group; until
    /// then faces land in the `default_{shading}` group.
    directive_seen: bool,
}

impl ParserState {
    fn new(default_object: bool) -> Self {
        let object = if default_object {
            Object::named("Object001")
        } else {
            Object::default()
        };
        Self {
            object,
            group: None,
            material: Material::default(),
            shading: 0,
            directive_seen: false,
        }
    }

    /// Select (or create) the group for the current material/shading pair.
    fn select_group(&mut self) {
        let index = self.object.get_or_insert(&self.material, self.shading);
        self.group = Some(index);
        self.directive_seen = true;
    }

    /// Index of the group the next face belongs to, creating the default
    /// group when no directive has selected one.
    fn ensure_group(&mut self) -> usize {
        if let Some(index) = self.group {
            return index;
        }
        let index = if self.directive_seen {
            self.object.get_or_insert(&self.material, self.shading)
        } else {
            self.object.insert_group(Group::default_group(self.shading))
        };
        self.group = Some(index);
        index
    }

    /// Commit the current object to `objects` (if it is named) and start a
    /// fresh one. Group selection does not survive an object switch.
    fn start_object(&mut self, name: &str, objects: &mut Vec<Object>) {
        let finished = std::mem::replace(&mut self.object, Object::named(name));
        commit_object(finished, objects);
        self.group = None;
    }
}

fn commit_object(mut object: Object, objects: &mut Vec<Object>) {
    if !object.name().is_empty() {
        object.purge_empty_groups();
        objects.push(object);
    }
}

/// Pass 2: re-stream the OBJ file and build the object/group/face graph,
/// resolving 1-based face indices through the attribute arrays.
pub fn populate(path: &Path, stats: &ObjStats, materials: &[Material]) -> Result<Vec<Object>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let layout = FaceLayout::select(stats.has_normals(), stats.has_texcoords());

    // OBJ indices are 1-based; a zero sentinel keeps the arrays addressable
    // by file index directly.
    let mut positions: Vec<Vec3> = Vec::with_capacity(stats.vertices + 1);
    let mut normals: Vec<Vec3> = Vec::with_capacity(stats.normals + 1);
    let mut texcoords: Vec<Vec3> = Vec::with_capacity(stats.texcoords + 1);
    positions.push(Vec3::ZERO);
    normals.push(Vec3::ZERO);
    texcoords.push(Vec3::ZERO);

    let mut objects = Vec::new();
    let mut state = ParserState::new(stats.objects == 0);

    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(tag) = fields.next() else {
            continue;
        };
        if tag.starts_with('#') {
            continue;
        }

        match tag {
            "v" => match parse_vec3(&mut fields) {
                Some(v) => positions.push(v),
                None => warn!(%line, "Malformed vertex line"),
            },
            "vn" => match parse_vec3(&mut fields) {
                Some(v) => normals.push(v),
                None => warn!(%line, "Malformed normal line"),
            },
            "vt" => {
                // u v [w]; missing components default to zero.
                let u = next_float(&mut fields).unwrap_or(0.0);
                let v = next_float(&mut fields).unwrap_or(0.0);
                let w = next_float(&mut fields).unwrap_or(0.0);
                texcoords.push(Vec3::new(u, v, w));
            }
            "o" => {
                let name: Vec<&str> = fields.collect();
                state.start_object(&name.join(" "), &mut objects);
            }
            "f" => {
                let records: Vec<&str> = fields.collect();
                let Ok(primitive) = Primitive::try_from(records.len()) else {
                    warn!(
                        arity = records.len(),
                        %line,
                        "Unknown face type, not attempting to process"
                    );
                    continue;
                };

                match build_face(primitive, &records, layout, &positions, &normals, &texcoords) {
                    Some(face) => {
                        let index = state.ensure_group();
                        if let Some(group) = state.object.group_mut(index) {
                            group.push_face(face);
                        }
                    }
                    None => warn!(%line, "Face references indices out of range"),
                }
            }
            "s" => {
                let value = fields.next().unwrap_or("off");
                state.shading = if value == "off" {
                    0
                } else {
                    value.parse().unwrap_or(0)
                };
                state.select_group();
            }
            "usemtl" => {
                let name: Vec<&str> = fields.collect();
                state.material = lookup_material(materials, &name.join(" "));
                state.select_group();
            }
            _ => {}
        }
    }

    // Finalize the last in-progress object.
    let last = std::mem::take(&mut state.object);
    commit_object(last, &mut objects);

    debug!(
        objects = objects.len(),
        positions = positions.len() - 1,
        normals = normals.len() - 1,
        texcoords = texcoords.len() - 1,
        "Populated model"
    );

    Ok(objects)
}

/// Exact-name lookup; first match wins. Unknown names degrade to an
/// all-default material.
fn lookup_material(materials: &[Material], name: &str) -> Material {
    materials
        .iter()
        .find(|m| m.name() == name)
        .cloned()
        .unwrap_or_default()
}

/// Parse one face's records into a complete Face. Any out-of-range or
/// malformed record rejects the whole face.
fn build_face(
    primitive: Primitive,
    records: &[&str],
    layout: FaceLayout,
    positions: &[Vec3],
    normals: &[Vec3],
    texcoords: &[Vec3],
) -> Option<Face> {
    let size = primitive.vertex_count() as u32;
    let mut face = Face::new(primitive);
    for record in records {
        let vertex = resolve_record(record, layout, positions, normals, texcoords, size)?;
        face.push_vertex(vertex);
    }
    Some(face)
}

/// Resolve one `v[/t][/n]` record against the attribute arrays.
fn resolve_record(
    record: &str,
    layout: FaceLayout,
    positions: &[Vec3],
    normals: &[Vec3],
    texcoords: &[Vec3],
    size: u32,
) -> Option<Vertex> {
    let mut parts = record.split('/');

    match layout {
        FaceLayout::Position => {
            let p = fetch(positions, parts.next()?)?;
            Some(Vertex::new(p))
        }
        FaceLayout::PositionTexcoord => {
            let p = fetch(positions, parts.next()?)?;
            let t = fetch(texcoords, parts.next()?)?;
            Some(Vertex::with_texcoord(p, t, size))
        }
        FaceLayout::PositionNormal => {
            let p = fetch(positions, parts.next()?)?;
            parts.next()?; // empty slot between the slashes
            let n = fetch(normals, parts.next()?)?;
            Some(Vertex::with_normal(p, n, size))
        }
        FaceLayout::Full => {
            let p = fetch(positions, parts.next()?)?;
            let t = fetch(texcoords, parts.next()?)?;
            let n = fetch(normals, parts.next()?)?;
            Some(Vertex::full(p, n, t, size))
        }
    }
}

/// Parse a 1-based index field and fetch the value it addresses.
fn fetch(array: &[Vec3], field: &str) -> Option<Vec3> {
    let index: usize = field.parse().ok()?;
    if index == 0 {
        return None;
    }
    array.get(index).copied()
}

fn parse_vec3(fields: &mut std::str::SplitWhitespace<'_>) -> Option<Vec3> {
    let x = next_float(fields)?;
    let y = next_float(fields)?;
    let z = next_float(fields)?;
    Some(Vec3::new(x, y, z))
}

fn next_float(fields: &mut std::str::SplitWhitespace<'_>) -> Option<f32> {
    fields.next().and_then(|s| s.parse().ok())
}

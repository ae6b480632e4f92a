use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::loader::texture::{ImageLoader, TextureId, TextureRegistry};
use crate::types::Material;

/// Which of the three texture slots a `map_*` directive targets.
#[derive(Debug, Clone, Copy)]
enum MapSlot {
    Diffuse,
    Ambient,
    Specular,
}

/// Load the material table from an MTL file.
///
/// Unreadable files are an error (the model loader degrades that to an
/// empty table); unparseable lines and missing texture images degrade
/// in place with a warning.
pub fn load_materials(
    path: &Path,
    images: &dyn ImageLoader,
    registry: &mut dyn TextureRegistry,
    load_textures: bool,
) -> Result<Vec<Material>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut materials = Vec::new();
    let mut current = Material::default();

    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(tag) = fields.next() else {
            continue;
        };
        let rest: Vec<&str> = fields.collect();

        match tag {
            "newmtl" => {
                let prev = std::mem::replace(&mut current, Material::named(rest.join(" ")));
                if !prev.name().is_empty() {
                    materials.push(prev);
                }
            }
            "Ns" => {
                if let Some(v) = parse_float(&rest) {
                    current.set_ns(v);
                }
            }
            "Ni" => {
                if let Some(v) = parse_float(&rest) {
                    current.set_ni(v);
                }
            }
            "d" => {
                if let Some(v) = parse_float(&rest) {
                    current.set_d(v);
                }
            }
            "illum" => {
                if let Some(v) = rest.first().and_then(|s| s.parse::<i32>().ok()) {
                    current.set_illum(v);
                }
            }
            "Ka" => {
                if let Some(rgb) = parse_rgb(&rest) {
                    current.set_ka(rgb);
                } else {
                    warn!(%line, "Malformed Ka line");
                }
            }
            "Kd" => {
                if let Some(rgb) = parse_rgb(&rest) {
                    current.set_kd(rgb);
                } else {
                    warn!(%line, "Malformed Kd line");
                }
            }
            "Ks" => {
                if let Some(rgb) = parse_rgb(&rest) {
                    current.set_ks(rgb);
                } else {
                    warn!(%line, "Malformed Ks line");
                }
            }
            "map_Kd" => {
                apply_map(&mut current, MapSlot::Diffuse, &rest, dir, images, registry, load_textures);
            }
            "map_Ka" => {
                apply_map(&mut current, MapSlot::Ambient, &rest, dir, images, registry, load_textures);
            }
            "map_Ks" => {
                apply_map(&mut current, MapSlot::Specular, &rest, dir, images, registry, load_textures);
            }
            _ => {}
        }
    }

    if !current.name().is_empty() {
        materials.push(current);
    }

    debug!(count = materials.len(), path = %path.display(), "Loaded materials");
    Ok(materials)
}

/// Resolve a texture map: decode the image, register it for an opaque
/// handle, and store handle plus source path on the material. Failures
/// leave the material untextured.
fn apply_map(
    material: &mut Material,
    slot: MapSlot,
    fields: &[&str],
    dir: &Path,
    images: &dyn ImageLoader,
    registry: &mut dyn TextureRegistry,
    load_textures: bool,
) {
    let Some(name) = fields.first() else {
        warn!(material = material.name(), "Texture map directive without a path");
        return;
    };
    let path = dir.join(name);

    let id: Option<TextureId> = if load_textures {
        match images.load(&path) {
            Ok(image) => {
                let id = registry.register(&image);
                debug!(
                    texture = %path.display(),
                    id = id.0,
                    material = material.name(),
                    "Bound texture"
                );
                Some(id)
            }
            Err(e) => {
                warn!(texture = %path.display(), "Failed to load texture: {e}");
                None
            }
        }
    } else {
        None
    };

    match slot {
        MapSlot::Diffuse => material.set_diffuse_texture(path, id),
        MapSlot::Ambient => material.set_ambient_texture(path, id),
        MapSlot::Specular => material.set_specular_texture(path, id),
    }
}

fn parse_float(fields: &[&str]) -> Option<f32> {
    fields.first().and_then(|s| s.parse().ok())
}

fn parse_rgb(fields: &[&str]) -> Option<[f32; 3]> {
    let r = fields.first()?.parse().ok()?;
    let g = fields.get(1)?.parse().ok()?;
    let b = fields.get(2)?.parse().ok()?;
    Some([r, g, b])
}

use std::path::{Path, PathBuf};

use crate::loader::texture::TextureId;

/// One MTL material record: shading parameters plus optional texture maps.
///
/// Colors are stored RGBA; the alpha slot of `ka`/`kd`/`ks` mirrors the
/// dissolve value `d`.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    /// Specular exponent (shininess).
    ns: f32,
    /// Index of refraction.
    ni: f32,
    /// Dissolve (transparency/alpha).
    d: f32,
    /// Illumination model, 0-10.
    illum: i32,
    ka: [f32; 4],
    kd: [f32; 4],
    ks: [f32; 4],
    diffuse_map: Option<PathBuf>,
    ambient_map: Option<PathBuf>,
    specular_map: Option<PathBuf>,
    /// GPU handle of the most recently set texture map. A single slot is
    /// shared by the diffuse/ambient/specular setters, so the last `map_*`
    /// directive in a record wins.
    texture: Option<TextureId>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            ns: 0.0,
            ni: 0.0,
            d: 0.0,
            illum: 0,
            ka: [0.0; 4],
            kd: [0.0; 4],
            ks: [0.0; 4],
            diffuse_map: None,
            ambient_map: None,
            specular_map: None,
            texture: None,
        }
    }
}

impl Material {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn ns(&self) -> f32 {
        self.ns
    }

    pub fn set_ns(&mut self, ns: f32) {
        self.ns = ns;
    }

    pub fn ni(&self) -> f32 {
        self.ni
    }

    pub fn set_ni(&mut self, ni: f32) {
        self.ni = ni;
    }

    pub fn d(&self) -> f32 {
        self.d
    }

    /// Set the dissolve value. Rewrites the alpha channel of the ambient,
    /// diffuse, and specular colors in lockstep.
    pub fn set_d(&mut self, d: f32) {
        self.d = d;
        self.ka[3] = d;
        self.kd[3] = d;
        self.ks[3] = d;
    }

    pub fn illum(&self) -> i32 {
        self.illum
    }

    pub fn set_illum(&mut self, illum: i32) {
        self.illum = illum;
    }

    pub fn ka(&self) -> [f32; 4] {
        self.ka
    }

    pub fn set_ka(&mut self, rgb: [f32; 3]) {
        self.ka[..3].copy_from_slice(&rgb);
    }

    pub fn kd(&self) -> [f32; 4] {
        self.kd
    }

    pub fn set_kd(&mut self, rgb: [f32; 3]) {
        self.kd[..3].copy_from_slice(&rgb);
    }

    pub fn ks(&self) -> [f32; 4] {
        self.ks
    }

    pub fn set_ks(&mut self, rgb: [f32; 3]) {
        self.ks[..3].copy_from_slice(&rgb);
    }

    pub fn diffuse_map(&self) -> Option<&Path> {
        self.diffuse_map.as_deref()
    }

    pub fn ambient_map(&self) -> Option<&Path> {
        self.ambient_map.as_deref()
    }

    pub fn specular_map(&self) -> Option<&Path> {
        self.specular_map.as_deref()
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn set_diffuse_texture(&mut self, path: impl Into<PathBuf>, id: Option<TextureId>) {
        self.diffuse_map = Some(path.into());
        self.texture = id;
    }

    pub fn set_ambient_texture(&mut self, path: impl Into<PathBuf>, id: Option<TextureId>) {
        self.ambient_map = Some(path.into());
        self.texture = id;
    }

    pub fn set_specular_texture(&mut self, path: impl Into<PathBuf>, id: Option<TextureId>) {
        self.specular_map = Some(path.into());
        self.texture = id;
    }
}

//! End-to-end loader tests.
//!
//! These tests write synthetic OBJ/MTL/PNG fixtures to a tempdir, run the
//! full load, and check the assembled scene graph and draw dispatch.

use std::fs;
use std::path::Path;

use approx::assert_relative_eq;
use obj_scene::{
    CountingRegistry, FsImageLoader, LoadOptions, Model, ObjLoader, Primitive, RecordingBackend,
};

/// Write a textured two-object OBJ + MTL + PNG fixture to `dir`.
fn write_textured_scene(dir: &Path) {
    let obj = "\
mtllib scene.mtl
o floor
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
usemtl brick
s 1
f 1/1 2/2 3/3 4/4
o wedge
v 0 0 1
usemtl flat
f 1/1 2/2 5/1
f 2/2 3/3 5/1
";
    fs::write(dir.join("scene.obj"), obj).unwrap();

    let mtl = "\
newmtl brick
Ns 10.0
Ka 0.2 0.2 0.2
Kd 0.8 0.4 0.3
Ks 0.1 0.1 0.1
d 1.0
illum 2
map_Kd brick.png
newmtl flat
Kd 0.5 0.5 0.5
d 0.5
";
    fs::write(dir.join("scene.mtl"), mtl).unwrap();

    let img = image::RgbaImage::from_fn(8, 8, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgba([180, 90, 70, 255])
        } else {
            image::Rgba([90, 45, 35, 255])
        }
    });
    img.save(dir.join("brick.png")).unwrap();
}

fn load(dir: &Path, name: &str) -> Model {
    let mut registry = CountingRegistry::default();
    ObjLoader::new(&FsImageLoader, &mut registry)
        .load(&dir.join(name))
        .unwrap()
}

#[test]
fn minimal_triangle_scene() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("tri.obj"),
        "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
    )
    .unwrap();

    let model = load(tmp.path(), "tri.obj");

    assert_eq!(model.object_count(), 1);
    assert_eq!(model.vertex_count(), 3);
    assert_eq!(model.face_count(), 1);

    let object = &model.objects()[0];
    assert_eq!(object.group_count(), 1);
    let group = &object.groups()[0];
    assert_eq!(group.id(), "default_0");

    let face = &group.faces()[0];
    assert_eq!(face.primitive(), Primitive::Triangle);
    for vertex in face.vertices() {
        let n = vertex.normal().expect("auto-computed normal");
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 0.0);
        assert_relative_eq!(n.z, 1.0);
    }
}

#[test]
fn textured_scene_assembles_and_draws() {
    let tmp = tempfile::tempdir().unwrap();
    write_textured_scene(tmp.path());

    let mut model = load(tmp.path(), "scene.obj");

    assert_eq!(model.object_count(), 2);
    assert_eq!(model.materials().len(), 2);
    assert_eq!(model.vertex_count(), 5);
    assert_eq!(model.texcoord_count(), 4);
    assert_eq!(model.face_count(), 3);

    let floor = &model.objects()[0];
    assert_eq!(floor.name(), "floor");
    assert_eq!(floor.groups()[0].id(), "brick_1");
    assert!(floor.groups()[0].material().texture().is_some());

    let wedge = &model.objects()[1];
    assert_eq!(wedge.name(), "wedge");
    // usemtl after the object switch; shading carries over from "s 1".
    assert_eq!(wedge.groups()[0].id(), "flat_1");
    assert_eq!(wedge.groups()[0].face_count(), 2);

    // One quad group + one all-triangle group: both consistent, so two
    // batched draws and one texture bind/unbind pair.
    let mut backend = RecordingBackend::default();
    model.draw(&mut backend);
    let stats = backend.stats();
    assert_eq!(stats.batched_draws, 2);
    assert_eq!(stats.face_draws, 0);
    assert_eq!(stats.vertices_submitted, 4 + 6);
    assert_eq!(stats.texture_binds, 1);
    assert_eq!(stats.texture_unbinds, 1);
}

#[test]
fn dissolve_cascades_from_mtl_and_set_alpha() {
    let tmp = tempfile::tempdir().unwrap();
    write_textured_scene(tmp.path());

    let mut model = load(tmp.path(), "scene.obj");

    let flat = model.material_by_name("flat");
    assert_eq!(flat.d(), 0.5);
    assert_eq!(flat.ka()[3], 0.5);
    assert_eq!(flat.kd()[3], 0.5);
    assert_eq!(flat.ks()[3], 0.5);

    model.set_alpha(0.25);
    for object in model.objects() {
        for group in object.groups() {
            assert_eq!(group.material().d(), 0.25);
            assert_eq!(group.material().kd()[3], 0.25);
        }
    }
}

#[test]
fn missing_mtl_degrades_to_untextured_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("bare.obj"),
        "mtllib gone.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl steel\nf 1 2 3\n",
    )
    .unwrap();

    let model = load(tmp.path(), "bare.obj");

    assert!(model.materials().is_empty());
    // "usemtl steel" found nothing, so the group carries the default
    // material under the "_0" id.
    let group = &model.objects()[0].groups()[0];
    assert_eq!(group.id(), "_0");
    assert!(group.material().texture().is_none());
}

#[test]
fn mixed_topology_group_falls_back_to_per_face_draws() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("mixed.obj"),
        "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
         f 1 2 3\nf 1 2 3 4\nf 2 3 4\n",
    )
    .unwrap();

    let mut model = load(tmp.path(), "mixed.obj");

    let mut backend = RecordingBackend::default();
    model.draw(&mut backend);
    let stats = backend.stats();
    assert_eq!(stats.batched_draws, 0);
    assert_eq!(stats.face_draws, 3);
    assert_eq!(stats.vertices_submitted, 3 + 4 + 3);
}

#[test]
fn flat_buffers_match_face_vertex_totals() {
    let tmp = tempfile::tempdir().unwrap();
    write_textured_scene(tmp.path());

    let model = load(tmp.path(), "scene.obj");

    for object in model.objects() {
        for group in object.groups() {
            let total: usize = group.faces().iter().map(|f| f.vertex_count()).sum();
            assert_eq!(group.positions().len(), 3 * total);
            assert_eq!(group.normals().len(), 3 * total);
            // Every face record in the fixture carries a texcoord.
            assert_eq!(group.texcoords().len(), 3 * total);
        }
    }
}

#[test]
fn face_count_matches_valid_face_lines() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("arity.obj"),
        "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nv 0 0 1\n\
         f 1 2\nf 1 2 3\nf 1 2 3 4\nf 1 2 3 4 5\n",
    )
    .unwrap();

    let model = load(tmp.path(), "arity.obj");

    // The 5-vertex line is rejected; the line, triangle, and quad stay.
    assert_eq!(model.face_count(), 3);
}

#[test]
fn skip_textures_option_leaves_materials_unbound() {
    let tmp = tempfile::tempdir().unwrap();
    write_textured_scene(tmp.path());

    let mut registry = CountingRegistry::default();
    let model = ObjLoader::new(&FsImageLoader, &mut registry)
        .with_options(LoadOptions {
            mtl_override: None,
            skip_textures: true,
        })
        .load(&tmp.path().join("scene.obj"))
        .unwrap();

    assert_eq!(registry.count(), 0);
    assert!(model.material_by_name("brick").texture().is_none());
    // The source path is still recorded for later binding.
    assert!(model.material_by_name("brick").diffuse_map().is_some());
}

#[test]
fn model_load_convenience_path() {
    let tmp = tempfile::tempdir().unwrap();
    write_textured_scene(tmp.path());

    let model = Model::load(tmp.path().join("scene.obj")).unwrap();
    assert_eq!(model.name(), "scene");
    assert_eq!(model.object_count(), 2);
    assert!(model.material_by_name("brick").texture().is_some());
}

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use obj_scene::config::CliArgs;
use obj_scene::{CountingRegistry, FsImageLoader, ObjLoader, RecordingBackend};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("obj_scene=debug")
    } else {
        EnvFilter::new("obj_scene=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut registry = CountingRegistry::default();
    let mut loader = ObjLoader::new(&FsImageLoader, &mut registry).with_options((&args).into());

    let mut model = match loader.load(&args.input) {
        Ok(model) => model,
        Err(e) => {
            error!(%e, "Load failed");
            return Err(e).with_context(|| format!("failed to load {}", args.input.display()));
        }
    };

    if let Some(alpha) = args.alpha {
        model.set_alpha(alpha);
    }

    println!(
        "{}: {} objects, {} groups, {} faces ({} vertices, {} normals, {} texcoords, {} materials)",
        model.name(),
        model.object_count(),
        model.group_count(),
        model.face_count(),
        model.vertex_count(),
        model.normal_count(),
        model.texcoord_count(),
        model.materials().len(),
    );

    if args.dry_run {
        let mut backend = RecordingBackend::default();
        model.draw(&mut backend);
        let stats = backend.stats();
        println!(
            "dry run: {} batched draws, {} per-face draws, {} vertices submitted, {} texture binds",
            stats.batched_draws, stats.face_draws, stats.vertices_submitted, stats.texture_binds,
        );
    }

    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use crate::loader::LoadOptions;

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "obj-scene",
    about = "Wavefront OBJ/MTL scene loader and renderer frontend",
    version
)]
pub struct CliArgs {
    /// Input OBJ file
    pub input: PathBuf,

    /// Material library to use instead of the one the OBJ names
    #[arg(long)]
    pub mtl: Option<PathBuf>,

    /// Skip texture decoding and registration
    #[arg(long)]
    pub no_textures: bool,

    /// Cascade this alpha value through every material after loading
    #[arg(long)]
    pub alpha: Option<f32>,

    /// Replay a draw into the recording backend and print call stats
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl From<&CliArgs> for LoadOptions {
    fn from(args: &CliArgs) -> Self {
        LoadOptions {
            mtl_override: args.mtl.clone(),
            skip_textures: args.no_textures,
        }
    }
}

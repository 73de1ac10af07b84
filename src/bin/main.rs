//! ALICE-SpaceHash CLI
//!
//! Command-line front end for grid generation and hash inspection.

#![allow(clippy::needless_pass_by_value, clippy::uninlined_format_args)]

#[cfg(feature = "cli")]
use alice_spacehash::io::{load_config, save_config, save_samples_json};
#[cfg(feature = "cli")]
use alice_spacehash::prelude::*;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "alice-spacehash")]
#[command(version = alice_spacehash::VERSION)]
#[command(about = "ALICE-SpaceHash: instance grids with spatial hashes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate a grid and print a summary (or dump it as JSON)
    Generate {
        /// JSON config file (flags below override its values)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Samples per side
        #[arg(short, long)]
        resolution: Option<u32>,
        /// plane, sphere, octo_sphere or torus
        #[arg(long)]
        shape: Option<Shape>,
        /// Hash seed
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i32>,
        /// Uniform domain scale (lattice cells per world unit)
        #[arg(long)]
        domain_scale: Option<f32>,
        /// Write positions, normals and hashes as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Use a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Hash a sequence of ints with the scalar hash
    Hash {
        /// Hash seed
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        seed: i32,
        /// Values to eat, in order
        #[arg(allow_hyphen_values = true)]
        values: Vec<i32>,
    },

    /// Print the hashes of a flat centred lattice
    Lattice {
        /// Samples per side
        #[arg(short, long, default_value = "8")]
        resolution: u32,
        /// Hash seed
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        seed: i32,
    },

    /// Write a default config file
    InitConfig {
        /// Output file
        #[arg(short, long, default_value = "spacehash.json")]
        output: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            resolution,
            shape,
            seed,
            domain_scale,
            output,
            sequential,
        } => cmd_generate(config, resolution, shape, seed, domain_scale, output, sequential),
        Commands::Hash { seed, values } => cmd_hash(seed, values),
        Commands::Lattice { resolution, seed } => cmd_lattice(resolution, seed),
        Commands::InitConfig { output } => cmd_init_config(output),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn cmd_generate(
    config_path: Option<PathBuf>,
    resolution: Option<u32>,
    shape: Option<Shape>,
    seed: Option<i32>,
    domain_scale: Option<f32>,
    output: Option<PathBuf>,
    sequential: bool,
) {
    let mut config = match config_path {
        Some(path) => match load_config(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Load error: {}", e);
                std::process::exit(1);
            }
        },
        None => GridConfig::default(),
    };

    if let Some(r) = resolution {
        config.resolution = r;
    }
    if let Some(s) = shape {
        config.shape = s;
    }
    if let Some(s) = seed {
        config.seed = s;
    }
    if let Some(scale) = domain_scale {
        config.domain.scale = Vec3::splat(scale);
    }

    let start = std::time::Instant::now();
    let result = if sequential {
        generate_sequential(&config)
    } else {
        generate(&config)
    };
    let samples = match result {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!(
        "Generated {} {} samples ({}x{}) in {:.2?}",
        samples.len(),
        config.shape,
        config.resolution,
        config.resolution,
        elapsed
    );

    let world = Affine3A::from_mat4(config.world_transform);
    let bounds = draw_bounds(&world, config.instance.displacement);
    println!("Bounds: {:?} .. {:?}", bounds.min, bounds.max);
    println!("Config vector: {:?}", config.instance.config_vector(config.resolution));

    for i in 0..samples.len().min(4) {
        if let Some((p, n, h)) = samples.get(i) {
            println!("  [{}] pos {:?} normal {:?} hash 0x{:08X}", i, p, n, h);
        }
    }

    if let Some(path) = output {
        match save_samples_json(&samples, &path) {
            Ok(()) => println!("Wrote {}", path.display()),
            Err(e) => {
                eprintln!("Write error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_hash(seed: i32, values: Vec<i32>) {
    let h = alice_spacehash::hash::hash_ints(seed, &values);
    println!("0x{:08X} ({})", h, h);
}

#[cfg(feature = "cli")]
fn cmd_lattice(resolution: u32, seed: i32) {
    let hashes = match lattice_hashes(resolution, seed) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for row in hashes.chunks(resolution as usize) {
        let line: Vec<String> = row.iter().map(|h| format!("{:08X}", h)).collect();
        println!("{}", line.join(" "));
    }
}

#[cfg(feature = "cli")]
fn cmd_init_config(output: PathBuf) {
    match save_config(&GridConfig::default(), &output) {
        Ok(()) => println!("Wrote default config to {}", output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! matweld - merge duplicate BSDF materials on mesh objects.
//!
//! Loads a RON scene file, runs the "Merge BSDF Materials" action against
//! one named object, and writes the mutated scene back:
//! - slots whose materials are visually equivalent are merged into one
//! - remaining slots are sorted by material name
//! - adjacent duplicate slots are removed

use clap::{Parser, Subcommand};
use matweld_scene::{merge_bsdf_materials, MergeError, MergeOutcome, Scene, SceneError};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod demo;

/// Merge duplicate BSDF materials on mesh objects
#[derive(Debug, Parser)]
#[command(name = "matweld", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the merge action against one object in a scene file
    Merge {
        /// Scene file (RON)
        scene: PathBuf,
        /// Name of the target object
        object: String,
        /// Write the result here instead of back to the scene file
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Write a sample scene with duplicate materials
    Demo {
        /// Destination path for the generated scene file
        path: PathBuf,
    },
}

/// Error surfaced to the user
#[derive(Debug, thiserror::Error)]
enum AppError {
    /// Scene file problem
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// The merge action failed
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// No object with the given name in the scene
    #[error("No object named `{0}` in the scene")]
    NoSuchObject(String),
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("matweld=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Merge {
            scene,
            object,
            output,
            dry_run,
        } => merge(scene, &object, output, dry_run),
        Command::Demo { path } => {
            let scene = demo::demo_scene();
            scene.save(&path)?;
            tracing::info!("Wrote demo scene to {}", path.display());
            Ok(())
        }
    }
}

fn merge(
    scene_path: PathBuf,
    object_name: &str,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), AppError> {
    let mut scene = Scene::load(&scene_path)?;
    tracing::info!(
        scene = %scene.name,
        objects = scene.objects().count(),
        materials = scene.materials().len(),
        "loaded scene"
    );

    let object_id = scene
        .object_by_name(object_name)
        .map(|o| o.id)
        .ok_or_else(|| AppError::NoSuchObject(object_name.to_string()))?;
    scene.active_object = Some(object_id);

    match merge_bsdf_materials(&mut scene, object_id)? {
        MergeOutcome::Merged {
            slots_before,
            slots_after,
        } => {
            tracing::info!(
                object = object_name,
                slots_before,
                slots_after,
                "merge complete"
            );
        }
        MergeOutcome::NotApplicable => {
            tracing::warn!(object = object_name, "object is not a mesh, nothing done");
            return Ok(());
        }
    }

    if dry_run {
        tracing::info!("dry run, scene not written");
        return Ok(());
    }

    let target = output.unwrap_or(scene_path);
    scene.save(&target)?;
    tracing::info!("Wrote scene to {}", target.display());
    Ok(())
}

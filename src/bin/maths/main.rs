use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use maths::math::{Matrix3, Matrix4, Vector3, Vector4};
use tracing_subscriber::EnvFilter;

/// Builds transform matrices and prints them column by column.
#[derive(Parser)]
#[command(name = "maths", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Also print the result of transforming this point (`x,y,z,w`)
    #[arg(long, global = true, allow_hyphen_values = true)]
    apply: Option<Vector4>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Translation by `x,y,z`
    Translation {
        #[arg(allow_hyphen_values = true)]
        offset: Vector3,
    },

    /// Non-uniform scale by `x,y,z`
    Scale {
        #[arg(allow_hyphen_values = true)]
        factors: Vector3,
    },

    /// Rotation of ANGLE degrees about an axis
    Rotation {
        #[arg(allow_negative_numbers = true)]
        angle: f32,

        #[arg(allow_hyphen_values = true)]
        axis: Vector3,
    },

    /// View matrix for a camera at EYE looking at CENTER
    #[command(name = "look-at")]
    LookAt {
        #[arg(allow_hyphen_values = true)]
        eye: Vector3,

        #[arg(allow_hyphen_values = true)]
        center: Vector3,

        #[arg(long, default_value = "0,1,0", allow_hyphen_values = true)]
        up: Vector3,
    },

    /// Perspective projection with a vertical FOV in degrees
    Perspective {
        fov: f32,
        aspect_ratio: f32,
        #[arg(allow_negative_numbers = true)]
        near: f32,
        #[arg(allow_negative_numbers = true)]
        far: f32,
    },

    /// Inverse of the 3x3 matrix with the given columns
    Inverse {
        #[arg(allow_hyphen_values = true)]
        x: Vector3,

        #[arg(allow_hyphen_values = true)]
        y: Vector3,

        #[arg(allow_hyphen_values = true)]
        z: Vector3,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "maths=debug" } else { "maths=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = io::stdout().lock();

    let matrix = match cli.command {
        Command::Translation { offset } => Matrix4::translation(offset),
        Command::Scale { factors } => Matrix4::scale(factors),
        Command::Rotation { angle, axis } => {
            tracing::debug!(angle, %axis, "Building rotation");
            Matrix4::rotation(angle, axis)
        }
        Command::LookAt { eye, center, up } => {
            tracing::debug!(%eye, %center, %up, "Building view matrix");
            Matrix4::look_at(eye, center, up)
        }
        Command::Perspective {
            fov,
            aspect_ratio,
            near,
            far,
        } => {
            if near == far {
                tracing::warn!(near, far, "Near and far planes coincide");
            }
            Matrix4::perspective(fov, aspect_ratio, near, far)
        }
        Command::Inverse { x, y, z } => {
            let m = Matrix3::from_columns(x, y, z);
            let det = m.determinant();
            tracing::debug!(det, "Inverting");
            if det == 0.0 {
                tracing::warn!("Matrix is singular");
            }
            let inverse = m.inversed();
            write!(out, "{inverse}").context("Could not write matrix")?;
            if let Some(point) = cli.apply {
                writeln!(out, "{}", inverse * point.narrowed())
                    .context("Could not write transformed point")?;
            }
            return Ok(());
        }
    };

    write!(out, "{matrix}").context("Could not write matrix")?;
    if let Some(point) = cli.apply {
        writeln!(out, "{}", matrix * point).context("Could not write transformed point")?;
    }
    Ok(())
}

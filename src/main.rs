use anyhow::{Context, Result};
use boxkit::{
    default_config_path, generate_gcode, init_logging, render_summary, DimensionOverrides,
    JobConfig,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Parametric hinged box generator for laser cutters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the laser cutting program for a job
    Generate {
        #[command(flatten)]
        job: JobArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print panel sizes, positions, and joinery counts
    Summary {
        #[command(flatten)]
        job: JobArgs,
    },
    /// Write a default job configuration
    Init {
        /// Target file (.toml or .json); defaults to the user config directory
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Job configuration file (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override box width, in the job's units (e.g. "80" or "3 1/2")
    #[arg(long)]
    width: Option<String>,

    /// Override box depth
    #[arg(long)]
    depth: Option<String>,

    /// Override box height
    #[arg(long)]
    height: Option<String>,

    /// Override material thickness
    #[arg(long)]
    thickness: Option<String>,
}

impl JobArgs {
    fn load(&self) -> Result<JobConfig> {
        let mut job = JobConfig::load_or_default(self.config.as_deref())
            .context("Failed to load job configuration")?;
        let overrides = DimensionOverrides {
            width: self.width.clone(),
            depth: self.depth.clone(),
            height: self.height.clone(),
            thickness: self.thickness.clone(),
        };
        overrides.apply(&mut job)?;
        Ok(job)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    match cli.command {
        Command::Generate { job, output } => {
            let gcode = generate_gcode(&job.load()?)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, gcode)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "wrote G-code");
                }
                None => print!("{}", gcode),
            }
        }
        Command::Summary { job } => {
            print!("{}", render_summary(&job.load()?)?);
        }
        Command::Init { path } => {
            let path = path
                .or_else(default_config_path)
                .context("No config directory available; pass a file path")?;
            JobConfig::default()
                .save_to_file(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote default job configuration");
        }
    }

    Ok(())
}

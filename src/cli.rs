// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::{CaptureConfig, LightingPreset, StartPose};

#[derive(Parser, Debug, Clone)]
#[command(name = "turntable-capture")]
#[command(about = "Turntable reference capture for inspection datasets", long_about = None)]
pub struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory for the rendered frames
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File name prefix of every frame
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Number of frames over one revolution
    #[arg(short = 'n', long)]
    pub frames: Option<u32>,

    /// Start from the subject's current rotation instead of zero
    #[arg(long = "keep-pose", default_value = "false")]
    pub keep_pose: bool,

    /// Skip the backdrop plane
    #[arg(long = "no-backdrop", default_value = "false")]
    pub no_backdrop: bool,

    /// Use the compact high-energy ring light
    #[arg(long = "compact-ring", default_value = "false")]
    pub compact_ring: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config", default_value = "false")]
    pub print_config: bool,

    /// Name of the subject mesh in the preview scene
    #[arg(long, default_value = "Drill")]
    pub subject: String,

    /// Subject bounding box in metres (X Y Z)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = [0.01, 0.01, 0.1])]
    pub dimensions: Vec<f32>,
}

impl Cli {
    /// Fold the flags over a base configuration
    pub fn apply(&self, mut config: CaptureConfig) -> CaptureConfig {
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.file_prefix = prefix.clone();
        }
        if let Some(frames) = self.frames {
            config.frame_count = frames;
        }
        if self.keep_pose {
            config.start_pose = StartPose::Current;
        }
        if self.no_backdrop {
            config.backdrop = None;
        }
        if self.compact_ring {
            config.lighting = LightingPreset::compact_ring();
        }
        config
    }
}

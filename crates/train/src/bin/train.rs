use std::path::PathBuf;
use std::process::ExitCode;

use charlm_core::Device;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use train::TrainConfig;

#[derive(Parser)]
#[command(name = "train", about = "Train a mini GPT on character level text.")]
struct Cli {
    /// Path to the training data
    #[arg(long, alias = "data_path", default_value = "data/tiny.txt")]
    data_path: PathBuf,
    /// Where to save checkpoints
    #[arg(long, alias = "output_dir", default_value = "output")]
    output_dir: PathBuf,
    /// Batch size per step
    #[arg(long, alias = "batch_size", default_value_t = 32)]
    batch_size: usize,
    /// Tokens per training sequence
    #[arg(long, alias = "seq_length", default_value_t = 128)]
    seq_length: usize,
    /// Learning rate
    #[arg(long, default_value_t = 1e-3)]
    lr: f64,
    /// Total training steps
    #[arg(long, alias = "max_steps", default_value_t = 1000)]
    max_steps: u64,
    /// Device to use
    #[arg(long, value_enum, default_value_t = DeviceArg::Cuda)]
    device: DeviceArg,
    /// Seed for batch sampling (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DeviceArg {
    Cpu,
    Cuda,
}

impl From<DeviceArg> for Device {
    fn from(arg: DeviceArg) -> Self {
        match arg {
            DeviceArg::Cpu => Device::Cpu,
            DeviceArg::Cuda => Device::Cuda,
        }
    }
}

impl From<Cli> for TrainConfig {
    fn from(cli: Cli) -> Self {
        Self {
            data_path: cli.data_path,
            output_dir: cli.output_dir,
            batch_size: cli.batch_size,
            seq_length: cli.seq_length,
            lr: cli.lr,
            max_steps: cli.max_steps,
            device: cli.device.into(),
            seed: cli.seed,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = TrainConfig::from(Cli::parse());
    match train::run(&config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("run failed: {e}");
            ExitCode::FAILURE
        }
    }
}

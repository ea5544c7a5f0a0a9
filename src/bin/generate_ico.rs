use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pockett_docs::assets::AssetPaths;
use pockett_docs::assets::ico::{ICO_SIZES, generate_ico};
use pockett_docs::telemetry;

/// Convert frontend/public/folder-icon.svg into frontend/public/favicon.ico.
#[derive(Debug, Parser)]
#[command(name = "generate-ico", version)]
struct Cli {
    /// Project root containing frontend/public
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init();

    let paths = AssetPaths::for_project(&cli.root);

    match generate_ico(&paths, &ICO_SIZES) {
        Ok(report) => {
            let sizes: Vec<String> = report.sizes.iter().map(u32::to_string).collect();
            println!("ICO file: {} ({} bytes)", report.ico.path.display(), report.ico.bytes);
            println!("Sizes: {}", sizes.join(", "));
            if !report.failed.is_empty() {
                tracing::warn!("Skipped sizes: {:?}", report.failed);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("❌ Failed to create ICO file: {}", err);
            ExitCode::FAILURE
        }
    }
}

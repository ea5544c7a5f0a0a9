use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pockett_docs::assets::AssetPaths;
use pockett_docs::assets::logo::{LogoSettings, generate_logo};
use pockett_docs::telemetry;

/// Convert frontend/public/folder-icon.svg into 120x120 PNG and JPG logos
/// for the OAuth consent screen.
#[derive(Debug, Parser)]
#[command(name = "generate-logo", version)]
struct Cli {
    /// Project root containing frontend/public
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init();

    let paths = AssetPaths::for_project(&cli.root);

    match generate_logo(&paths, LogoSettings::default()) {
        Ok(report) => {
            println!("✅ Logo generation completed successfully!");
            println!("Generated files:");
            for file in [&report.png, &report.jpg] {
                println!("  - {} ({:.3} MB)", file.file_name(), file.megabytes());
            }
            println!("Output directory: {}", paths.output_dir.display());
            if !report.within_budget() {
                tracing::warn!("⚠️  Some files exceed the upload size limit");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("⚠️  Logo generation failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

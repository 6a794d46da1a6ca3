use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use songtable_core::{RomImage, ScanReport};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "songtable")]
#[command(about = "Locates the m4a song table pointer in GBA ROMs")]
struct Args {
    /// ROM files to scan
    #[arg(required = true)]
    roms: Vec<PathBuf>,

    /// Emit one JSON object per ROM instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("songtable_core=info".parse()?)
                .add_directive("songtable_cli=info".parse()?),
        )
        .init();

    let args = Args::parse();

    for path in &args.roms {
        // Input errors are per-file; keep scanning the rest of the batch.
        let image = match RomImage::load(path) {
            Ok(image) => image,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let report = ScanReport::scan(&image);

        if args.json {
            println!("{}", report.to_json()?);
        } else {
            print_report(&report);
        }
    }

    Ok(())
}

fn print_report(report: &ScanReport) {
    if let Some(header) = &report.header {
        info!(
            "{}: \"{}\" ({}/{})",
            report.rom, header.title, header.code, header.maker
        );
    }

    match report.pointer_offset {
        Some(offset) => {
            let table = report
                .song_table
                .as_deref()
                .map(|addr| format!(", song table at {}", addr))
                .unwrap_or_default();
            println!(
                "{}: pointer to song table at {}{}",
                report.rom,
                format!("0x{:X}", offset).green(),
                table
            );
        }
        None => {
            println!("{}: {}", report.rom, "song table not found".red());
        }
    }
}

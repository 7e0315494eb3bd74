use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use zine_impose::{LayoutMode, LayoutStatistics, ZineOptions};

#[derive(Parser)]
#[command(name = "zine", about = "Photo sheet and mini zine PDF generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out up to 12 photos on a single portrait sheet
    Sheet {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Lay out up to 8 photos as a fold-and-cut mini zine
    Mini {
        #[command(flatten)]
        common: CommonArgs,

        /// Text for the back page
        #[arg(long, conflicts_with = "back_text_file")]
        back_text: Option<String>,

        /// Read the back page text from a file
        #[arg(long)]
        back_text_file: Option<PathBuf>,

        /// Don't outline the panels
        #[arg(long)]
        no_borders: bool,

        /// Add fold and cut guides
        #[arg(long)]
        fold_guides: bool,

        /// Caption for the front cover
        #[arg(long)]
        cover_caption: Option<String>,

        /// Caption for the back cover
        #[arg(long)]
        back_caption: Option<String>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Input photos (JPEG or PNG), in reading order
    #[arg(short, long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output PDF file [default: photo-sheet.pdf / mini-zine.pdf]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load options from a JSON file; flags given here take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,
}

async fn base_options(common: &CommonArgs, mode: LayoutMode) -> Result<ZineOptions> {
    let mut options = match &common.config {
        Some(path) => ZineOptions::load(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => ZineOptions::default(),
    };
    options.mode = mode;
    Ok(options)
}

fn print_statistics(stats: &LayoutStatistics) {
    println!("Layout Statistics:");
    println!("  Images supplied: {}", stats.images_supplied);
    println!("  Images placed: {}", stats.images_placed);
    if stats.images_ignored > 0 {
        println!("  Images ignored (over capacity): {}", stats.images_ignored);
    }
    if stats.images_unsupported > 0 {
        println!("  Images skipped (unsupported format): {}", stats.images_unsupported);
    }
    println!("  Blank panels: {}", stats.blank_panels);
    println!("  Output pages: {}", stats.output_pages);
}

async fn run(common: CommonArgs, options: ZineOptions) -> Result<()> {
    options.validate()?;
    debug!("Options: {:?}", options);

    if let Some(path) = &common.save_config {
        options.save(path).await?;
        println!("Saved options → {}", path.display());
    }

    let images = zine_impose::load_images(&common.input).await?;

    let stats = zine_impose::calculate_statistics(&images, &options)?;
    print_statistics(&stats);

    if common.stats_only {
        return Ok(());
    }

    let output = zine_impose::generate(&images, &options).await?;
    let path = common
        .output
        .unwrap_or_else(|| PathBuf::from(&output.filename));
    zine_impose::save_output(&output, &path).await?;
    println!("Generated {} page(s) → {}", output.page_count, path.display());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sheet { common } => {
            let options = base_options(&common, LayoutMode::SingleSheet).await?;
            run(common, options).await?;
        }

        Commands::Mini {
            common,
            back_text,
            back_text_file,
            no_borders,
            fold_guides,
            cover_caption,
            back_caption,
        } => {
            let mut options = base_options(&common, LayoutMode::MiniZine).await?;

            let back_text = match back_text_file {
                Some(path) => Some(
                    tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("reading {}", path.display()))?,
                ),
                None => back_text,
            };
            if let Some(text) = back_text {
                options.include_back_text = true;
                options.back_text = text;
            }
            if no_borders {
                options.panel_borders = false;
            }
            if fold_guides {
                options.fold_guides = true;
            }
            if let Some(caption) = cover_caption {
                options.cover_caption = caption;
            }
            if let Some(caption) = back_caption {
                options.back_caption = caption;
            }

            run(common, options).await?;
        }
    }

    Ok(())
}

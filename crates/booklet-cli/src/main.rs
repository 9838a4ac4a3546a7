use anyhow::{Result, bail};
use booklet_impose::{ImpositionOptions, LayoutMethod, LayoutRegistry, PaperTarget};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "booklet", about = "Booklet imposition CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose PDF pages onto printer sheets
    Impose {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Layout (defaults to side-fold, or the config's layout)
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        /// Output paper size (defaults to a4, or the config's paper)
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Flip every output page horizontally
        #[arg(long)]
        mirror: bool,

        /// Right-to-left reading order
        #[arg(long)]
        rtl: bool,

        /// Add crop marks around every page
        #[arg(long)]
        crop_marks: bool,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,

        /// Load options from a JSON file; flags override it
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List layouts and whether they suit the input document
    Layouts {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Original,
    SideFold,
    Calendar,
    CutStack,
    #[value(name = "side-fold-4up")]
    SideFold4Up,
    #[value(name = "side-fold-4up-single")]
    SideFold4UpSingle,
    #[value(name = "folded-8up")]
    Folded8Up,
    #[value(name = "square-6up")]
    Square6Up,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl From<LayoutArg> for LayoutMethod {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Original => Self::Original,
            LayoutArg::SideFold => Self::SideFold,
            LayoutArg::Calendar => Self::Calendar,
            LayoutArg::CutStack => Self::CutStack,
            LayoutArg::SideFold4Up => Self::SideFold4Up,
            LayoutArg::SideFold4UpSingle => Self::SideFold4UpSingle,
            LayoutArg::Folded8Up => Self::Folded8Up,
            LayoutArg::Square6Up => Self::Square6Up,
        }
    }
}

impl From<PaperArg> for PaperTarget {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::a3(),
            PaperArg::A4 => Self::a4(),
            PaperArg::A5 => Self::a5(),
            PaperArg::Letter => Self::letter(),
            PaperArg::Legal => Self::legal(),
            PaperArg::Tabloid => Self::tabloid(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Impose {
            input,
            output,
            layout,
            paper,
            mirror,
            rtl,
            crop_marks,
            stats_only,
            config,
        } => {
            let mut options = match config {
                Some(path) => ImpositionOptions::load(&path).await?,
                None => ImpositionOptions::default(),
            };
            options.input_files = vec![input.clone()];
            if let Some(layout) = layout {
                options.layout = layout.into();
            }
            if let Some(paper) = paper {
                options.paper = paper.into();
            }
            options.conversion.mirror |= mirror;
            options.conversion.right_to_left |= rtl;
            options.conversion.show_crop_marks |= crop_marks;
            options.validate()?;

            let document = booklet_impose::load_pdf(&input).await?;
            let shape = booklet_impose::DocumentShapeProbe::shape(&document)?;

            // Calculate and show statistics
            let stats = booklet_impose::calculate_statistics(options.layout, &shape)?;
            println!("Imposition Statistics ({}):", options.layout.display_name());
            println!("  Source pages: {}", stats.source_pages);
            println!("  Output sheets: {}", stats.output_sheets);
            println!("  Output pages: {}", stats.output_pages);
            println!("  Blank slots: {}", stats.blank_slots);
            if stats.copies_per_sheet > 1 {
                println!("  Copies per sheet: {}", stats.copies_per_sheet);
            }

            if stats_only {
                return Ok(());
            }

            let Some(output) = output else {
                bail!("--output is required unless --stats-only is given");
            };

            // Perform imposition
            let imposed = booklet_impose::impose(&document, &options).await?;
            booklet_impose::save_pdf(imposed, &output).await?;
            println!("Imposed → {}", output.display());
        }

        Commands::Layouts { input } => {
            let document = booklet_impose::load_pdf(&input).await?;
            let shape = booklet_impose::DocumentShapeProbe::shape(&document)?;
            let orientation = shape.orientation();

            println!(
                "{}: {} {} pages ({:.0} x {:.0} mm)",
                input.display(),
                shape.page_count,
                orientation,
                booklet_impose::constants::pt_to_mm(shape.page_width),
                booklet_impose::constants::pt_to_mm(shape.page_height)
            );
            for entry in LayoutRegistry::standard().entries(orientation) {
                println!(
                    "  [{}] {:<22} {}",
                    if entry.enabled { "x" } else { " " },
                    entry.id,
                    entry.display_name
                );
            }
        }
    }

    Ok(())
}

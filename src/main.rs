use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod chart_png;
mod confirm;
mod legend;
mod models;
mod palette;
mod render;

use confirm::UserLevel;
use models::ChartInput;
use palette::Phases;

#[derive(Parser)]
#[command(name = "ojchart")]
#[command(about = "Render user profile statistics charts for the judge", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the profile pie chart and its legend
    Render {
        /// Statistics JSON file ({"labels": [...], "datasets": [{"data": [...]}]})
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for piechart.png and the legend markup
        #[arg(short, long, default_value = "out")]
        output: PathBuf,

        /// Fixed base phase for the rainbow palette (default: random)
        #[arg(long)]
        phase: Option<f64>,
    },

    /// Change a user's permission level (asks for confirmation)
    ChangeLevel {
        /// Username to change
        #[arg(short, long)]
        username: String,

        /// Target level
        #[arg(short, long, value_enum)]
        level: UserLevel,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            input,
            output,
            phase,
        } => {
            info!("Rendering profile statistics chart...");
            let data = ChartInput::load(&input)?;
            let phases = match phase {
                Some(p) => Phases::new(p),
                None => Phases::random(),
            };

            let rendered = render::render_pie_chart(&data, &output, &phases)?;

            println!("\n{}", "Render complete".green().bold());
            println!("  chart:  {}", rendered.chart_png.display());
            println!("  legend: {}", rendered.legend_html.display());
            if let Some(note) = &rendered.statistics_html {
                println!("  note:   {} ({})", note.display(), render::NO_STATISTICS_MESSAGE);
            }

            Ok(())
        }

        Commands::ChangeLevel {
            username,
            level,
            yes,
        } => {
            let accepted = yes || confirm::prompt_change_user_level(&username, level)?;

            if accepted {
                // The level change itself is the server's job; this tool only gates it.
                println!(
                    "{} {} is now {}",
                    "Confirmed:".green().bold(),
                    username,
                    level
                );
            } else {
                println!("{} level change cancelled", "Cancelled:".yellow().bold());
            }

            Ok(())
        }
    }
}

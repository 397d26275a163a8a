use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use termion::color::{Bg, Reset, Rgb};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flossverter::prelude::*;

#[derive(Parser)]
#[command(name = "flossverter")]
#[command(about = "Find the closest floss colors from one palette in another")]
struct Cli {
    /// CSV of the palette queries are looked up in (columns: number, rgb)
    #[arg(long, env = "FLOSSVERTER_BASE_CATALOGUE", global = true)]
    base_catalogue: Option<PathBuf>,

    /// CSV of the palette matches are drawn from (columns: number, rgb)
    #[arg(long, env = "FLOSSVERTER_CANDIDATE_CATALOGUE", global = true)]
    candidate_catalogue: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the candidate palette by similarity to a color
    Similar {
        /// Identifier in the base palette, or a hex code with --hex
        query: String,

        /// Treat the query as a hex code instead of an identifier
        #[arg(long)]
        hex: bool,

        /// Metric to rank by
        #[arg(short, long, default_value = Metric::DEFAULT.name())]
        metric: String,

        /// Number of matches to show
        #[arg(short, default_value_t = 5)]
        n: usize,

        /// Don't print color swatches
        #[arg(long)]
        no_swatch: bool,
    },
    /// List the available metrics
    Metrics,
    /// Show a color in every supported color space
    Convert {
        /// Hex code, with or without a leading #
        hex: String,
    },
    /// Score a pair of colors with every metric
    Compare {
        /// The base color
        base: String,
        /// The color compared against it
        other: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flossverter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Similar {
            query,
            hex,
            metric,
            n,
            no_swatch,
        } => {
            let store = load_store(
                cli.base_catalogue.as_deref(),
                cli.candidate_catalogue.as_deref(),
            )?;
            let query = if hex {
                ColorQuery::Hex(query)
            } else {
                ColorQuery::Identifier(query)
            };
            run_similar(&store, &query, &metric, n, !no_swatch)
        }
        Commands::Metrics => {
            for metric in Metric::ALL.iter() {
                if *metric == Metric::DEFAULT {
                    println!("{} (default)", metric);
                } else {
                    println!("{}", metric);
                }
            }
            Ok(())
        }
        Commands::Convert { hex } => run_convert(&hex),
        Commands::Compare { base, other } => run_compare(&base, &other),
    }
}

fn load_store(base: Option<&Path>, candidates: Option<&Path>) -> anyhow::Result<CatalogueStore> {
    let (base, candidates) = match (base, candidates) {
        (Some(base), Some(candidates)) => (base, candidates),
        _ => bail!(
            "both --base-catalogue and --candidate-catalogue are needed (or \
             FLOSSVERTER_BASE_CATALOGUE and FLOSSVERTER_CANDIDATE_CATALOGUE)"
        ),
    };
    let base = Catalogue::from_path(base)
        .with_context(|| format!("Failed to load base catalogue {}", base.display()))?;
    let candidates = Catalogue::from_path(candidates).with_context(|| {
        format!("Failed to load candidate catalogue {}", candidates.display())
    })?;
    Ok(CatalogueStore::new(base, candidates))
}

/// A few spaces with the color as background, for terminals with true color.
fn swatch(color: &RGBColor) -> String {
    format!("{}      {}", Bg(Rgb(color.r, color.g, color.b)), Bg(Reset))
}

fn run_similar(
    store: &CatalogueStore,
    query: &ColorQuery,
    metric: &str,
    n: usize,
    show_swatch: bool,
) -> anyhow::Result<()> {
    let base = store.resolve(query)?;
    tracing::info!(?query, %metric, n, base = %base, "Ranking candidates");
    let ranked = store.find_similar(query, metric, n)?;
    tracing::debug!(results = ranked.len(), "Ranking done");

    if show_swatch {
        println!("{} {}", swatch(&base), base);
    } else {
        println!("{}", base);
    }
    for (rank, similar) in ranked.iter().enumerate() {
        let line = format!(
            "{:>3}. {:<10} {}  delta E {:.3}",
            rank + 1,
            similar.identifier,
            similar.hex(),
            similar.score.sqrt()
        );
        if show_swatch {
            println!("{} {}", swatch(&similar.color), line);
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}

fn run_convert(hex: &str) -> anyhow::Result<()> {
    let color = RGBColor::from_hex_code(hex).with_context(|| format!("Invalid color {:?}", hex))?;
    let [r, g, b] = color.primaries();
    let xyz = color.to_xyz();
    let lab = color.to_lab();
    let lch = color.to_lch();
    println!("hex  {}", color);
    println!("RGB  {} {} {}", r, g, b);
    println!("XYZ  {:.6} {:.6} {:.6}", xyz.x, xyz.y, xyz.z);
    println!("Lab  {:.4} {:.4} {:.4}", lab.l, lab.a, lab.b);
    println!("LCh  {:.4} {:.4} {:.4}", lch.l, lch.c, lch.h);
    Ok(())
}

fn run_compare(base: &str, other: &str) -> anyhow::Result<()> {
    let base_color =
        RGBColor::from_hex_code(base).with_context(|| format!("Invalid color {:?}", base))?;
    let other_color =
        RGBColor::from_hex_code(other).with_context(|| format!("Invalid color {:?}", other))?;
    println!("{} vs {}", base_color, other_color);
    for metric in Metric::ALL.iter() {
        let score = metric.score(&base_color, &other_color);
        println!("{:<28}{:>14.6}{:>14.6}", metric.name(), score, score.sqrt());
    }
    Ok(())
}

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[cfg(feature = "progress-bar")]
use indicatif::ProgressBar;

use lsp_heuristics::generate::{find_optimal_radius, GeometricGraph, PRESETS};
use lsp_heuristics::io::{load_edge_list, write_edge_list, write_point_edge_list};
use lsp_heuristics::logging::{self, LogOptions};
use lsp_heuristics::report::{evaluate, render_table, Report};
use lsp_heuristics::{Algorithm, Builder, Result};

#[derive(Parser)]
#[command(name = "lsp")]
#[command(about = "Estimate the longest simple path of sparse undirected graphs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    log: LogOptions,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the LSP of an edge-list file
    Run {
        /// Edge list (`u v` or `u x1 y1 v x2 y2` per line)
        graph: PathBuf,

        /// Algorithms to run; all applicable ones when omitted
        #[arg(short, long, value_enum)]
        algorithm: Vec<Algorithm>,

        #[command(flatten)]
        search: SearchArgs,

        /// Include the reconstructed paths in JSON output
        #[arg(long)]
        show_path: bool,
    },

    /// Write a random geometric graph
    Generate {
        /// Number of vertices
        #[arg(short = 'n', long)]
        vertices: usize,

        /// Connection radius; searched for when omitted
        #[arg(short, long)]
        radius: Option<f64>,

        /// Lower bound on the share of vertices in the largest component
        #[arg(long, default_value = "0.9")]
        min_fraction: f64,

        /// Upper bound on the share of vertices in the largest component
        #[arg(long, default_value = "0.95")]
        max_fraction: f64,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Write `u v` lines instead of coordinate-bearing lines
        #[arg(long)]
        plain: bool,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate the benchmark graphs and compare every algorithm on them
    Bench {
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of trials (default: ceil(sqrt(component size)))
    #[arg(long)]
    trials: Option<usize>,

    /// Run independent trials on all cores
    #[arg(long)]
    parallel: bool,

    /// Print reports as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn builder(&self) -> Builder {
        let mut builder = Builder::default().set_parallel(self.parallel);
        if let Some(seed) = self.seed {
            builder = builder.set_seed(seed);
        }
        if let Some(trials) = self.trials {
            builder = builder.set_trials(trials);
        }
        builder
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(&cli.log)?;

    match cli.command {
        Commands::Run {
            graph,
            algorithm,
            search,
            show_path,
        } => {
            let now = Instant::now();
            let loaded = load_edge_list(&graph)?;
            info!(
                "loaded {}: {} vertices, {} edges",
                graph.display(),
                loaded.len(),
                loaded.edge_count()
            );

            let algorithms = if algorithm.is_empty() {
                Algorithm::ALL.to_vec()
            } else {
                algorithm
            };
            let mut reports = evaluate(&loaded, None, &algorithms, &search.builder())?;
            if !show_path {
                reports.iter_mut().for_each(|report| report.path = None);
            }
            print_reports(&reports, search.json)?;
            info!("done in {:.2}s", now.elapsed().as_secs_f32());
        }

        Commands::Generate {
            vertices,
            radius,
            min_fraction,
            max_fraction,
            output,
            plain,
            seed,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            let mut rng = SmallRng::seed_from_u64(seed);
            let radius = match radius {
                Some(radius) => radius,
                None => find_optimal_radius(vertices, min_fraction, max_fraction, &mut rng)?,
            };
            let generated = GeometricGraph::generate(vertices, radius, &mut rng)?;
            info!(
                "n={} r={:.4} seed={} largest component={}",
                vertices,
                radius,
                seed,
                generated.graph.largest_component().len()
            );

            let file = File::create(&output)?;
            if plain {
                write_edge_list(&generated.graph, file)?;
            } else {
                write_point_edge_list(&generated.graph, file)?;
            }
            info!("wrote {}", output.display());
        }

        Commands::Bench { search } => {
            let builder = search.builder();
            let mut rng = SmallRng::seed_from_u64(builder.get_seed());
            let mut reports = Vec::new();

            #[cfg(feature = "progress-bar")]
            let bar = ProgressBar::new(PRESETS.len() as u64);

            for preset in PRESETS {
                let radius = find_optimal_radius(
                    preset.vertices,
                    preset.min_fraction,
                    preset.max_fraction,
                    &mut rng,
                )?;
                let generated = GeometricGraph::generate(preset.vertices, radius, &mut rng)?;
                info!("bench: n={} r={:.4}", preset.vertices, radius);
                reports.extend(evaluate(
                    &generated.graph,
                    Some(radius),
                    &Algorithm::ALL,
                    &builder,
                )?);

                #[cfg(feature = "progress-bar")]
                bar.inc(1);
            }

            #[cfg(feature = "progress-bar")]
            bar.finish();

            reports.iter_mut().for_each(|report| report.path = None);
            print_reports(&reports, search.json)?;
        }
    }

    Ok(())
}

fn print_reports(reports: &[Report], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        println!("{}", render_table(reports));
    }
    Ok(())
}

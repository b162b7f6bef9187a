use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use showcase_gal::booking::{self, BookingRequest};
use showcase_gal::gallery::{CategorySelection, Gallery};
use showcase_gal::{catalog, config, output, render};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shared flags for commands that order the catalog.
#[derive(clap::Args, Clone)]
struct SeedArgs {
    /// Seed the shuffle for a reproducible order (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl SeedArgs {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Parser)]
#[command(name = "showcase-gal")]
#[command(about = "Gallery carousel engine for showcase sites")]
#[command(long_about = "\
Gallery carousel engine for showcase sites

A catalog is either a TOML/JSON file or a directory of category folders:

  catalog.toml                     gallery/
    categories = [\"nmax\", ...]     ├── 010-nmax/
    [[images]]                     │   ├── 001-matte-black.jpg
    source = \"/img/nmax-1.jpg\"     │   └── 002-pearl-white.jpg
    alt = \"NMAX matte black\"       └── 020-vario/
    category = \"nmax\"                  └── 001-red.png

Images are shown in a category-balanced random order: each category is
shuffled on its own, then categories take turns.

Set RUST_LOG=debug to trace filter fallbacks and catalog loading.
Run 'showcase-gal gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a catalog and list its categories
    Check {
        /// Catalog file (.toml/.json) or directory
        catalog: PathBuf,
    },
    /// Print the balanced-shuffle display order
    Shuffle {
        /// Catalog file (.toml/.json) or directory
        catalog: PathBuf,
        #[command(flatten)]
        seed: SeedArgs,
        /// Print the order as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render an HTML snapshot of the gallery
    Render {
        /// Catalog file (.toml/.json) or directory
        catalog: PathBuf,
        #[command(flatten)]
        seed: SeedArgs,
        /// Category tab to select
        #[arg(long)]
        category: Option<String>,
        /// Page title
        #[arg(long, default_value = "Gallery")]
        title: String,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the messaging-app link for a booking request
    Book {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        /// Item type (tattoo style, motorbike model, ...)
        #[arg(long)]
        item: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Check { catalog } => {
            let catalog = catalog::load_catalog(&catalog)?;
            output::print_check_output(&catalog);
        }
        Command::Shuffle {
            catalog,
            seed,
            json,
        } => {
            let catalog = catalog::load_catalog(&catalog)?;
            let ordered = catalog.shuffled(&mut seed.rng());
            if json {
                println!("{}", serde_json::to_string_pretty(&ordered)?);
            } else {
                output::print_shuffle_output(&ordered);
            }
        }
        Command::Render {
            catalog,
            seed,
            category,
            title,
            output,
        } => {
            let site_config = config::load_config(&cli.config)?;
            let catalog = catalog::load_catalog(&catalog)?;
            let mut gallery =
                Gallery::with_catalog(&catalog.categories, catalog.shuffled(&mut seed.rng()));
            if let Some(category) = category
                && let CategorySelection::FellBack { requested } =
                    gallery.select_category(&category)
            {
                eprintln!("No images in category '{requested}'; showing all");
            }
            let html = render::render_page(&title, &gallery, &site_config.gallery).into_string();
            match output {
                Some(path) => std::fs::write(&path, html)?,
                None => println!("{html}"),
            }
        }
        Command::Book {
            name,
            phone,
            date,
            time,
            item,
            notes,
        } => {
            let site_config = config::load_config(&cli.config)?;
            let request = BookingRequest {
                name,
                phone,
                date,
                time,
                item_type: item,
                notes,
            };
            println!("{}", booking::booking_link(&request, &site_config.booking)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings and errors).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

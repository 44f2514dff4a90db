use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

use structkit::designer::{self, catalog, project, Projection, TemplateCategory, ViewMode};
use structkit::report::{load_source, render_bill, ReportFormat};
use structkit::{init_logging, Config, SavedDesign, BUILD_DATE, VERSION};

/// Garage and kitchen layout planner with materials take-off
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (.toml or .json); defaults to the platform config directory
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in templates
    Templates {
        /// Only templates for this planner
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// List catalog entries
    Catalog,
    /// Print the bill of materials for a template or saved design
    Takeoff(TakeoffArgs),
    /// Project a template or saved design into a view, as JSON
    Project(ProjectArgs),
    /// Save a template or design as a design file
    Export(ExportArgs),
    /// Print version and build information
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Garage,
    Kitchen,
}

impl From<KindArg> for TemplateCategory {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Garage => TemplateCategory::Garage,
            KindArg::Kitchen => TemplateCategory::Kitchen,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Plan,
    Front,
    Side,
    #[value(name = "3d")]
    ThreeD,
}

impl From<ViewArg> for ViewMode {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Plan => ViewMode::Plan,
            ViewArg::Front => ViewMode::Front,
            ViewArg::Side => ViewMode::Side,
            ViewArg::ThreeD => ViewMode::ThreeD,
        }
    }
}

#[derive(Args, Debug)]
struct TakeoffArgs {
    /// Template id or design file
    source: String,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    /// Template id or design file
    source: String,

    #[arg(long, value_enum, default_value = "plan")]
    view: ViewArg,

    /// Canvas width in pixels (defaults to the settings value)
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height in pixels (defaults to the settings value)
    #[arg(long)]
    height: Option<f64>,

    /// Plan zoom on top of the fitted scale
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Template id or design file
    source: String,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    out: PathBuf,

    /// Design name (defaults to the template or design name)
    #[arg(short, long)]
    name: Option<String>,
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path.clone(),
        None => match Config::default_path() {
            Ok(path) => path,
            Err(e) => {
                debug!("No default settings path: {}", e);
                return Ok(Config::default());
            }
        },
    };
    Config::load_or_default(&path).with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    init_logging(level)?;

    let settings = load_settings(cli.config.as_ref())?;

    match cli.command {
        Command::Templates { kind } => {
            let category = kind.map(TemplateCategory::from);
            for template in designer::builtin_templates()
                .iter()
                .filter(|t| category.is_none_or(|c| t.category == c))
            {
                println!("{:<20} {:<8} {}", template.id, template.category.as_str(), template.description);
            }
        }
        Command::Catalog => {
            for item in catalog::catalog() {
                let price = item.unit_price.map(|p| format!("{:.2}", p)).unwrap_or_default();
                println!(
                    "{:<16} {:<28} {:>5} x {:>5} x {:>5} {:>9}",
                    item.id, item.name, item.width, item.depth, item.height, price
                );
            }
        }
        Command::Takeoff(args) => {
            let (name, config) = load_source(&args.source)?;
            let bill = structkit::calculate(&config, &settings.takeoff.price_book());
            info!(design = %name, lines = bill.len(), "Take-off complete");
            print!("{}", render_bill(&bill, &config, args.format, &settings.takeoff.currency)?);
        }
        Command::Project(args) => {
            let (_, config) = load_source(&args.source)?;
            let mut view = settings.planner.view_config();
            if let Some(width) = args.width {
                view.canvas_width = width;
            }
            if let Some(height) = args.height {
                view.canvas_height = height;
            }
            view.zoom = args.zoom;
            let json = match project(&config, &view, args.view.into()) {
                Projection::Flat(list) => serde_json::to_string_pretty(&list)?,
                Projection::Scene(scene) => serde_json::to_string_pretty(&scene)?,
            };
            println!("{}", json);
        }
        Command::Export(args) => {
            let (name, config) = load_source(&args.source)?;
            let design = SavedDesign::new(args.name.unwrap_or(name), config);
            designer::serialization::save_to_file(&design, &args.out)
                .with_context(|| format!("Failed to write {}", args.out.display()))?;
            println!("{} -> {}", design.id, args.out.display());
        }
        Command::Version => {
            println!("structkit {} (built {})", VERSION, BUILD_DATE);
        }
    }

    Ok(())
}

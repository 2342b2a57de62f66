use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tcd_app::{
    AppError, AppResult, Session, load_batch, load_reference_catalog, render_artery_list,
    render_index_notes, render_references, render_report_table, render_vm_chart,
};
use tcd_indices::{DEFAULT_VM_ACI_REF_CM_S, Measurement};
use tracing::info;

const CHART_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "tcd-cli")]
#[command(about = "TCD indices - transcranial Doppler hemodynamic index calculator", long_about = None)]
struct Cli {
    /// Reference catalog file (YAML or JSON) replacing the built-in table
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log filter, e.g. info or tcd_app=debug
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute indices for a single measurement
    Compute {
        /// Artery id or alias (see `arteries`)
        #[arg(short, long)]
        artery: String,
        /// Peak systolic velocity in cm/s
        #[arg(long)]
        vps: f64,
        /// End diastolic velocity in cm/s
        #[arg(long)]
        vfd: f64,
        /// Reference ICA mean velocity in cm/s (MCA arteries only)
        #[arg(long, default_value_t = DEFAULT_VM_ACI_REF_CM_S)]
        vm_aci: f64,
    },
    /// Compute a report from a YAML measurement file
    Batch {
        /// Path to the measurement YAML file
        measurements_path: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also print the Vm comparison chart
        #[arg(long)]
        chart: bool,
    },
    /// List arteries in the reference catalog
    Arteries {
        /// Substring filter on id, name, group or alias
        query: Option<String>,
    },
    /// Show reference values and normal index ranges
    References {
        /// Write the active catalog to this file (YAML or JSON) as a starting point
        #[arg(long)]
        dump: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level.as_str())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compute {
            artery,
            vps,
            vfd,
            vm_aci,
        } => cmd_compute(cli.catalog.as_deref(), &artery, vps, vfd, vm_aci),
        Commands::Batch {
            measurements_path,
            format,
            output,
            chart,
        } => cmd_batch(
            cli.catalog.as_deref(),
            &measurements_path,
            format,
            output.as_deref(),
            chart,
        ),
        Commands::Arteries { query } => {
            cmd_arteries(cli.catalog.as_deref(), query.as_deref().unwrap_or(""))
        }
        Commands::References { dump } => cmd_references(cli.catalog.as_deref(), dump.as_deref()),
    }
}

fn cmd_compute(
    catalog_path: Option<&Path>,
    artery: &str,
    vps: f64,
    vfd: f64,
    vm_aci: f64,
) -> AppResult<()> {
    let mut session = Session::new(load_reference_catalog(catalog_path)?);
    let measurement = Measurement::new(artery, vps, vfd).with_vm_aci_ref(vm_aci);
    session.submit(&measurement)?;

    print_report(&session);
    Ok(())
}

fn print_report(session: &Session) {
    print!("{}", render_report_table(session.report()));
    let notes = render_index_notes(session.report());
    if !notes.is_empty() {
        println!("\nNotes:");
        print!("{}", notes);
    }
}

fn cmd_batch(
    catalog_path: Option<&Path>,
    measurements_path: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    chart: bool,
) -> AppResult<()> {
    let batch = load_batch(measurements_path)?;
    let mut session = Session::new(load_reference_catalog(catalog_path)?);
    let count = match session.submit_batch(&batch) {
        Ok(count) => count,
        Err(err) => {
            // entries before the rejected one are still in the report
            if !session.report().is_empty() {
                println!("Partial report ({} rows stored):", session.report().len());
                print_report(&session);
            }
            return Err(err);
        }
    };
    info!("Computed {} measurements from {}", count, measurements_path.display());

    match (format, output) {
        (OutputFormat::Csv, Some(path)) => {
            session.export_csv(path)?;
            println!("✓ Exported {} rows to {}", session.report().len(), path.display());
        }
        (OutputFormat::Json, Some(path)) => {
            session.export_json(path)?;
            println!("✓ Exported {} rows to {}", session.report().len(), path.display());
        }
        (OutputFormat::Table, Some(path)) => {
            std::fs::write(path, render_report_table(session.report()))?;
            println!("✓ Wrote report table to {}", path.display());
        }
        (OutputFormat::Csv, None) => print!("{}", tcd_report::to_csv(session.report())),
        (OutputFormat::Json, None) => {
            let json = serde_json::to_string_pretty(&session.export())
                .map_err(|e| AppError::Report(format!("Failed to serialize report: {}", e)))?;
            println!("{}", json);
        }
        (OutputFormat::Table, None) => print_report(&session),
    }

    if chart {
        println!();
        print!("{}", render_vm_chart(session.report(), CHART_WIDTH));
    }

    Ok(())
}

fn cmd_arteries(catalog_path: Option<&Path>, query: &str) -> AppResult<()> {
    let catalog = load_reference_catalog(catalog_path)?;
    println!("Arteries in catalog:");
    print!("{}", render_artery_list(&catalog, query));
    Ok(())
}

fn cmd_references(catalog_path: Option<&Path>, dump: Option<&Path>) -> AppResult<()> {
    let catalog = load_reference_catalog(catalog_path)?;
    if let Some(path) = dump {
        tcd_reference::save_catalog(path, &catalog)?;
        println!("✓ Wrote {} arteries to {}", catalog.len(), path.display());
        return Ok(());
    }
    print!("{}", render_references(&catalog));
    Ok(())
}

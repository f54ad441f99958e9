mod logging;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;

use comp_core::charts::{department_totals, sensitivity_curve, waterfall_bridge};
use comp_core::model::{ScenarioPatch, ScenarioState};
use comp_core::store::{Action, Store};
use comp_data::{RosterLoader, export_filename_today, render_results_csv};
use comp_gateway::HttpCalculationGateway;

/// Run a compensation scenario against the calculation service.
///
/// Loads a roster CSV, runs one simulation, prints the summary, and can
/// export the joined results and probe the sensitivity curve.
#[derive(Parser, Debug)]
#[command(name = "comp-sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the roster CSV file
    #[arg(short, long)]
    roster: PathBuf,

    /// Base URL of the calculation service
    #[arg(short, long, default_value = "http://localhost:8000")]
    api_url: String,

    /// Revenue delta in percent, signed (e.g. -5 for a 5% decline)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    revenue_delta: Decimal,

    /// Adjustment factor in percent (how much of the delta passes through)
    #[arg(long, default_value = "100")]
    adjustment_factor: Decimal,

    /// Write the results CSV here; a directory gets the dated default name
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Probe the sensitivity curve after the main run
    #[arg(long, default_value_t = false)]
    sensitivity: bool,

    /// Calculation request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Also append log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let employees = RosterLoader::load_from_file(&args.roster)
        .with_context(|| format!("Failed to load roster: {}", args.roster.display()))?;
    println!(
        "Loaded {} employees from {}",
        employees.len(),
        args.roster.display()
    );

    let mut store = Store::new();
    store.load_roster(employees);
    // Percent is a display-layer unit; the store and the wire use fractions.
    store.dispatch(Action::SetScenario(ScenarioPatch {
        revenue_delta: Some(args.revenue_delta / Decimal::ONE_HUNDRED),
        adjustment_factor: Some(args.adjustment_factor / Decimal::ONE_HUNDRED),
    }));

    let gateway =
        HttpCalculationGateway::with_timeout(&args.api_url, Duration::from_secs(args.timeout_secs))
            .context("Failed to build calculation gateway")?;

    info!(api_url = %args.api_url, delta = %args.revenue_delta, "running scenario");
    store
        .run_scenario(&gateway)
        .await
        .context("Scenario run failed")?;

    print_summary(store.state());

    if let Some(target) = args.export.as_deref() {
        export_results(store.state(), target)?;
    }

    if args.sensitivity {
        run_sensitivity_sweep(&gateway, store.state()).await;
    }

    Ok(())
}

fn print_summary(state: &ScenarioState) {
    let Some(summary) = state.summary() else {
        println!("No results returned.");
        return;
    };

    println!();
    println!("Total payroll:      {}", summary.total_payroll);
    println!(
        "Avg base increase:  {}%",
        summary.avg_base_increase * Decimal::ONE_HUNDRED
    );
    println!("Employees:          {}", summary.total_employees);
    println!("MRT breaches:       {}", summary.mrt_breaches);
    println!("Flags raised:       {}", summary.total_flags);

    let departments = department_totals(Some(summary));
    if !departments.is_empty() {
        println!();
        println!("{:<24} {:>14} {:>14} {:>14}", "Department", "Base", "Bonus", "Total");
        for row in departments {
            println!(
                "{:<24} {:>14} {:>14} {:>14}",
                row.department, row.base, row.bonus, row.total
            );
        }
    }

    println!();
    println!("Payroll bridge:");
    for step in waterfall_bridge(state.results(), Some(summary)) {
        println!("  {:<18} {:>14}", step.label, step.amount);
    }
}

fn export_results(state: &ScenarioState, target: &Path) -> Result<()> {
    let Some(results) = state.results() else {
        println!("Nothing to export: no results.");
        return Ok(());
    };

    let path = if target.is_dir() {
        target.join(export_filename_today())
    } else {
        target.to_path_buf()
    };

    let csv_text = render_results_csv(&state.employees, results)
        .context("Failed to render results CSV")?;
    std::fs::write(&path, csv_text)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;

    println!("Exported results to {}", path.display());
    Ok(())
}

async fn run_sensitivity_sweep(gateway: &HttpCalculationGateway, state: &ScenarioState) {
    println!();
    println!("Sensitivity sweep:");

    let points = sensitivity_curve(gateway, &state.employees, &state.scenario).await;
    if points.is_empty() {
        println!("  (no probes succeeded)");
        return;
    }

    for point in points {
        let delta_percent = point.revenue_delta * Decimal::ONE_HUNDRED;
        match point.comp_ratio {
            Some(ratio) => println!(
                "  {:>5}%  payroll {:>14}  comp ratio {:.4}",
                delta_percent, point.total_payroll, ratio
            ),
            None => println!(
                "  {:>5}%  payroll {:>14}",
                delta_percent, point.total_payroll
            ),
        }
    }
}

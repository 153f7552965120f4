//! SPAMS CLI — evaluate the surface displacement model for one parcel.
//!
//! Loads a calibrated parameter table and one or more KNMI daily meteo
//! files, evaluates the model over the requested date range, and prints the
//! daily time series together with the annualized irreversible rate and the
//! f-value fit diagnostic.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{Duration, NaiveDate};
use clap::Parser;
use rand::seq::IndexedRandom;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use spams::io::knmi::read_knmi_files;
use spams::io::parameters::{read_parameter_table, ParcelRecord};
use spams::metrics::{f_value, irreversible_rate};
use spams::model::run::evaluate_series;
use spams::uncertainty::format_with_uncertainty;

#[derive(Parser, Debug)]
#[command(name = "spams")]
#[command(about = "SPAMS surface displacement model", long_about = None)]
struct Args {
    /// Path to the SPAMS parameter table (CSV)
    #[arg(short = 'x', long, default_value = "data/nl_krimpenerwaard_spamsx.csv")]
    spams_filepath: PathBuf,

    /// KNMI meteo file(s); multiple station files are concatenated
    #[arg(short, long, default_value = "data/etmgeg_344.txt", num_args = 1..)]
    meteo_filepath: Vec<PathBuf>,

    /// Start date of the simulated time series (YYYYMMDD)
    #[arg(short = 's', long, default_value = "20230101")]
    start_date: String,

    /// End date of the simulated time series (YYYYMMDD)
    #[arg(short = 'e', long, default_value = "20231231")]
    end_date: String,

    /// Parcel to evaluate; a random parcel is drawn when omitted
    #[arg(short, long)]
    pnt_id: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let start = parse_date(&args.start_date).context("invalid --start-date")?;
    let end = parse_date(&args.end_date).context("invalid --end-date")?;
    if end < start {
        return Err(anyhow!("end date {end} precedes start date {start}"));
    }

    let table = read_parameter_table(&args.spams_filepath)
        .with_context(|| format!("loading {}", args.spams_filepath.display()))?;
    info!(parcels = table.len(), "loaded parameter table");

    let record = select_parcel(&table, args.pnt_id.as_deref())?;
    let params = record.parameters()?;
    info!(
        pnt_id = %record.pnt_id,
        x_p = params.x_p,
        x_e = params.x_e,
        x_i = params.x_i,
        tau = params.tau,
        "selected parcel"
    );

    let meteo = read_knmi_files(&args.meteo_filepath).context("loading meteo files")?;
    debug!(days = meteo.len(), "loaded meteo record");

    // The first simulated day needs a full trailing window.
    let from = start - Duration::days(params.tau as i64 - 1);
    let subset = meteo.subset(from, end)?;
    let output = evaluate_series(&params, &subset)?;
    let dates = subset.simulation_dates(params.tau);

    println!("ID #{}", record.pnt_id);
    println!("    Date    | Precip |  Evapo | Reversible | Irreversible |  Height");
    println!("------------|--------|--------|------------|--------------|--------");
    let precip = &subset.precip()[params.tau - 1..];
    let evapo = &subset.evapo()[params.tau - 1..];
    for t in 0..output.len() {
        println!(
            " {} | {:>6.1} | {:>6.1} | {:>10.2} | {:>12.2} | {:>7.2}",
            dates[t],
            precip[t],
            evapo[t],
            output.reversible[t],
            output.irreversible[t],
            output.height[t],
        );
    }
    println!();

    match irreversible_rate(&output.irreversible, params.x_i, record.var_x_i) {
        Ok(rate) => println!(
            "Irreversible rate: {} mm/year",
            format_with_uncertainty(rate.value, rate.std_dev)
        ),
        Err(e) => println!("Irreversible rate: undefined ({e})"),
    }
    match f_value(record.rss, record.dof) {
        Ok(f) => println!("F-value: {f:.3}"),
        Err(e) => println!("F-value: undefined ({e})"),
    }

    Ok(())
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y%m%d")
        .map_err(|e| anyhow!("{text:?} is not a YYYYMMDD date: {e}"))
}

fn select_parcel<'a>(table: &'a [ParcelRecord], pnt_id: Option<&str>) -> Result<&'a ParcelRecord> {
    match pnt_id {
        Some(id) => table
            .iter()
            .find(|r| r.pnt_id == id)
            .ok_or_else(|| anyhow!("parcel {id:?} not found in the parameter table")),
        None => table
            .choose(&mut rand::rng())
            .ok_or_else(|| anyhow!("parameter table contains no parcels")),
    }
}

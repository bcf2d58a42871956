use anyhow::{bail, Context, Result};
use dashboard_service::{config::SourceFormat, load_snapshot, observability};
use energy_client::{
    aggregate_daily, aggregate_day_detail, aggregate_overall, domain::ChartSeries, DateCatalog,
};
use std::{env, path::PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: dashboard_report <readings_file> [YYYY-MM-DD]");
    }
    let path = PathBuf::from(&args[1]);
    let format = SourceFormat::from_path(&path)
        .with_context(|| format!("cannot infer format of '{}'", path.display()))?;

    let snapshot = load_snapshot(&path, format, true).await?;
    let readings = snapshot.readings();

    let mut catalog = DateCatalog::from_readings(readings)?;
    if let Some(date) = args.get(2) {
        catalog = catalog
            .select(date)
            .with_context(|| format!("no readings for {date}"))?;
    }

    let daily = aggregate_daily(readings)?;
    let overall = aggregate_overall(readings)?;
    let day = match &catalog.selected {
        Some(date) => {
            let detail = aggregate_day_detail(readings, date)?;
            Some(serde_json::json!({
                "date": date,
                "percentages": detail.percentages,
                "hourly": ChartSeries::from(detail.hourly.as_slice()),
            }))
        }
        None => None,
    };

    let report = serde_json::json!({
        "dates": catalog,
        "weekly": ChartSeries::from(daily.as_slice()),
        "overall": overall,
        "day": day,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

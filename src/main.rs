use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use heat_study::study::percentile::UNUSUAL_HEAT;
use heat_study::utils::{init_logging, log_stage};
use heat_study::{
    Comparison, StudyConfig, attach_population, join_heat, load_heat, load_population,
    load_suicides, monthly_state_means, render_svg, summer_vs_winter, top_vs_bottom,
};

/// Pixel size of rendered charts
const CHART_SIZE: (u32, u32) = (800, 600);

#[derive(serde::Serialize)]
struct Report<'a> {
    summer_v_winter: &'a Comparison,
    top_v_bottom: &'a Comparison,
}

fn main() -> Result<()> {
    init_logging();

    let (config, json) = parse_args()?;
    for path in [
        &config.suicides_path,
        &config.population_path,
        &config.heat_path,
    ] {
        if !path.exists() {
            bail!("Input file not found: {}", path.display());
        }
    }

    // Load
    let start = Instant::now();
    let suicides = load_suicides(&config.suicides_path)
        .with_context(|| format!("loading {}", config.suicides_path.display()))?;
    let population = load_population(&config.population_path)
        .with_context(|| format!("loading {}", config.population_path.display()))?;
    let heat = load_heat(&config.heat_path)
        .with_context(|| format!("loading {}", config.heat_path.display()))?;
    log_stage(
        "load",
        suicides.len() + population.len() + heat.len(),
        start.elapsed(),
    );

    // Merge
    let start = Instant::now();
    let suicides = attach_population(&suicides, &population);
    let enriched = join_heat(&suicides, &heat);
    log_stage("merge", enriched.len(), start.elapsed());

    // Aggregate
    let start = Instant::now();
    let by_month = monthly_state_means(&enriched);
    log_stage("aggregate", by_month.len(), start.elapsed());

    // Compare
    let seasonal = summer_vs_winter(&by_month, config.target);
    let tails = top_vs_bottom(
        config.percentile,
        &enriched,
        config.covariate,
        config.target,
        UNUSUAL_HEAT,
    )?;

    if json {
        let report = Report {
            summer_v_winter: &seasonal,
            top_v_bottom: &tails,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{seasonal}");
        println!();
        println!("{tails}");
    }

    if let Some(dir) = &config.charts_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        render_svg(&seasonal.chart, &dir.join("summer_v_winter.svg"), CHART_SIZE)?;
        render_svg(&tails.chart, &dir.join("top_v_bottom.svg"), CHART_SIZE)?;
        info!("charts written to {}", dir.display());
    }

    Ok(())
}

fn parse_args() -> Result<(StudyConfig, bool)> {
    let mut positional: Vec<PathBuf> = Vec::new();
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    if !(3..=4).contains(&positional.len()) {
        bail!("Usage: heat-study [--json] <suicides.txt> <population.txt> <heat.txt> [charts-dir]");
    }

    let mut config = StudyConfig::new(&positional[0], &positional[1], &positional[2]);
    if let Some(dir) = positional.get(3) {
        config = config.with_charts_dir(dir);
    }
    Ok((config, json))
}

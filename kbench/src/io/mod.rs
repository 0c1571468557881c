use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use svg::Document;

use crate::EPOCH;
use crate::chart::{column_chart, line_chart};
use crate::io::output::BenchOutput;

pub mod cli;
pub mod output;

pub const RESULTS_FILE: &str = "bench_results.json";

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!("json written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Writes the results and four charts (a line and a column chart per solver) into `folder`.
pub fn write_report(output: &BenchOutput, folder: &Path) -> Result<()> {
    fs::create_dir_all(folder)
        .with_context(|| format!("could not create output folder: {}", folder.display()))?;

    write_json(output, &folder.join(RESULTS_FILE))?;

    let options = output.config.chart_options;
    let charts = [
        (
            "exact",
            output.exact.elapsed_ms(),
            "Dynamic Programming",
            harder_suffix(output.exact.harder_for_greedy),
            options.theme.exact_color,
        ),
        (
            "greedy",
            output.greedy.elapsed_ms(),
            "Greedy Algorithm",
            harder_suffix(output.greedy.harder_for_greedy),
            options.theme.greedy_color,
        ),
    ];

    for (stem, times, name, suffix, color) in charts {
        let line = line_chart(&times, &format!("{name} Performance{suffix}"), color, options);
        write_svg(&line, &folder.join(format!("{stem}_line.svg")))?;

        let columns = column_chart(&times, &format!("{name}{suffix}"), color, options);
        write_svg(&columns, &folder.join(format!("{stem}_columns.svg")))?;
    }
    Ok(())
}

fn harder_suffix(harder_for_greedy: bool) -> &'static str {
    match harder_for_greedy {
        true => " (Harder Cases)",
        false => "",
    }
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] epoch: {}", jiff::Timestamp::now());
    Ok(())
}

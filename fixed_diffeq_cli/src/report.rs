use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use colored::Colorize;
use fixed_diffeq::{Method, PairedTrajectory, Trajectory};

use crate::error::CliError;

/// Formats in scientific notation outside `[1e-2, 1e4]`, otherwise with up
/// to four decimals.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !(1e-2..=1e4).contains(&value.abs()) {
        format!("{:.4e}", value)
    } else {
        format!("{:.4}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn row(cells: &[String]) -> String {
    let mut line = format!("{:<15}", cells[0]);
    for cell in &cells[1..] {
        line.push_str(&format!("{:>14}", cell));
    }
    line
}

pub fn scalar_rows(results: &[(Method, Trajectory)]) -> Vec<String> {
    let mut rows = vec![row(&[
        "method".into(),
        "samples".into(),
        "last t".into(),
        "last y".into(),
    ])];
    for (method, trajectory) in results {
        let (t, y) = trajectory.last().unwrap_or((f64::NAN, f64::NAN));
        rows.push(row(&[
            method.name().into(),
            trajectory.len().to_string(),
            format_value(t),
            format_value(y),
        ]));
    }
    rows
}

pub fn paired_rows(results: &[(Method, PairedTrajectory)]) -> Vec<String> {
    let mut rows = vec![row(&[
        "method".into(),
        "samples".into(),
        "last t".into(),
        "last y".into(),
        "last v".into(),
    ])];
    for (method, trajectory) in results {
        let (t, y, v) = trajectory
            .last()
            .unwrap_or((f64::NAN, f64::NAN, f64::NAN));
        rows.push(row(&[
            method.name().into(),
            trajectory.len().to_string(),
            format_value(t),
            format_value(y),
            format_value(v),
        ]));
    }
    rows
}

/// Prints a title and the table, header highlighted.
pub fn print_table(title: &str, rows: &[String]) {
    println!("{}", title.bright_blue().bold());
    if let Some((header, body)) = rows.split_first() {
        println!("{}", header.bold());
        for line in body {
            println!("{line}");
        }
    }
}

fn csv_path(dir: &Path, stem: &str, method: Method) -> PathBuf {
    dir.join(format!("{stem}_{}.csv", method.key()))
}

/// A trajectory that can be written as one CSV file.
pub trait CsvExport {
    fn samples_len(&self) -> usize;
    fn export<W: Write>(&self, writer: W) -> Result<(), csv::Error>;
}

impl CsvExport for Trajectory {
    fn samples_len(&self) -> usize {
        self.len()
    }

    fn export<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        self.write_csv(writer)
    }
}

impl CsvExport for PairedTrajectory {
    fn samples_len(&self) -> usize {
        self.len()
    }

    fn export<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        self.write_csv(writer)
    }
}

/// Writes `<stem>_<method>.csv` per result into `dir`, creating it if needed.
pub fn write_csv_files<T: CsvExport>(
    dir: &Path,
    stem: &str,
    results: &[(Method, T)],
) -> Result<Vec<PathBuf>, CliError> {
    fs::create_dir_all(dir)?;
    let mut paths = Vec::with_capacity(results.len());
    for (method, trajectory) in results {
        let path = csv_path(dir, stem, *method);
        trajectory.export(BufWriter::new(File::create(&path)?))?;
        log::info!(
            "wrote {} samples to {}",
            trajectory.samples_len(),
            path.display()
        );
        paths.push(path);
    }
    Ok(paths)
}

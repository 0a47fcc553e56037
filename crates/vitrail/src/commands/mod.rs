//! CLI subcommands.

pub mod attributes;
pub mod components;
pub mod resolve;
pub mod schema;

use std::path::Path;
use std::process;

use clap::ValueEnum;
use serde::Serialize;

use vitrail_plomb::Project;
use vitrail_rosace::AttributeDescriptor;

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Aligned text rows
    #[default]
    Text,
    /// JSON array
    Json,
}

/// Load the project document or exit.
fn load_project(path: &Path) -> Project {
    let project = match Project::from_path(path) {
        Ok(project) => project,
        Err(error) => {
            eprintln!("Failed to load {}: {}", path.display(), error);
            process::exit(1);
        }
    };
    for issue in project.issues() {
        eprintln!("\x1b[33mWarning:\x1b[0m {}", issue);
    }
    project
}

#[derive(Serialize)]
struct AttributeRow {
    name: String,
    kind: &'static str,
    public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<[u32; 2]>,
}

fn attribute_row(project: &Project, descriptor: &AttributeDescriptor) -> AttributeRow {
    let location = descriptor.location;
    AttributeRow {
        name: descriptor.name.to_string(),
        kind: descriptor.kind.as_str(),
        public: descriptor.public,
        file: location.and_then(|at| project.files().path(at.file).map(str::to_string)),
        span: location.map(|at| [at.span.start, at.span.end]),
    }
}

fn print_rows(rows: &[AttributeRow], format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(rows) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("Failed to serialize results: {error}");
                process::exit(1);
            }
        },
        OutputFormat::Text => {
            let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
            for row in rows {
                let place = match (&row.file, row.span) {
                    (Some(file), Some([start, end])) => format!("{file}:{start}..{end}"),
                    _ => String::from("-"),
                };
                println!("{:width$}  {:8}  {}", row.name, row.kind, place);
            }
        }
    }
}

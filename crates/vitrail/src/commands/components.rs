//! Components command - list the components a component can use locally

use clap::Args;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process;

use vitrail_rosace::{ComponentDetails, ProjectScope};

use super::{attribute_row, load_project, print_rows, OutputFormat};
use crate::config::{load_config, providers_from_config};

#[derive(Args)]
pub struct ComponentsArgs {
    /// Component name; omit to list every component in the project
    pub component: Option<String>,

    /// Project document path
    #[arg(short, long, default_value = "vitrail.project.json")]
    pub project: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: ComponentsArgs) {
    let config = load_config(None);
    let project = load_project(&args.project);

    let Some(name) = &args.component else {
        let names: Vec<&str> = project
            .component_names()
            .iter()
            .map(|name| name.as_str())
            .collect();
        match args.format {
            OutputFormat::Json => match serde_json::to_string_pretty(&names) {
                Ok(json) => println!("{json}"),
                Err(error) => {
                    eprintln!("Failed to serialize results: {error}");
                    process::exit(1);
                }
            },
            OutputFormat::Text => {
                for name in names {
                    println!("{name}");
                }
            }
        }
        return;
    };

    let Some(def) = project.definition(name) else {
        eprintln!("No component named {:?} in {}", name, args.project.display());
        process::exit(1);
    };

    let details = ComponentDetails::with_providers(providers_from_config(&config));
    let scope = ProjectScope::new(project.definitions(), project.directives());

    let mut rows = Vec::new();
    let _: ControlFlow<()> = details.local_components(Some(&def), &scope, |component| {
        rows.push(attribute_row(&project, component));
        ControlFlow::Continue(())
    });
    print_rows(&rows, args.format);
}

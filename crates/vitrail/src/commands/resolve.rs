//! Resolve command - resolve one template attribute to its declaration

use clap::Args;
use std::path::PathBuf;
use std::process;

use vitrail_rosace::{ComponentDetails, ProjectScope};

use super::{attribute_row, load_project, print_rows, OutputFormat};
use crate::config::{load_config, providers_from_config};

#[derive(Args)]
pub struct ResolveArgs {
    /// Component name
    pub component: String,

    /// Attribute as written in the template, prefixes and modifiers included
    pub attribute: String,

    /// Project document path
    #[arg(short, long, default_value = "vitrail.project.json")]
    pub project: PathBuf,

    /// Hide computed, methods, data, and `_`/`$`-prefixed names
    #[arg(long)]
    pub public: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: ResolveArgs) {
    let config = load_config(None);
    let project = load_project(&args.project);

    let Some(def) = project.definition(&args.component) else {
        eprintln!(
            "No component named {:?} in {}",
            args.component,
            args.project.display()
        );
        process::exit(1);
    };

    let details = ComponentDetails::with_providers(providers_from_config(&config));
    let scope = ProjectScope::new(project.definitions(), project.directives());
    let only_public = args.public || config.query.only_public;

    match details.resolve_attribute(&def, &scope, &args.attribute, only_public) {
        Some(found) => print_rows(&[attribute_row(&project, &found)], args.format),
        None => {
            eprintln!("{} does not resolve on {}", args.attribute, args.component);
            process::exit(1);
        }
    }
}

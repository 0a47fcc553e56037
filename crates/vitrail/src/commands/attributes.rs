//! Attributes command - list every attribute a component's template can use

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::process;

use vitrail_rosace::{ComponentDetails, ProjectScope};

use super::{attribute_row, load_project, print_rows, OutputFormat};
use crate::config::{load_config, providers_from_config};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum NameContext {
    /// Markup spelling, kebab-case
    #[default]
    Markup,
    /// Script spelling, as declared plus camelCase variants
    Script,
}

#[derive(Args)]
pub struct AttributesArgs {
    /// Component name; omit to list app-level attributes only
    pub component: Option<String>,

    /// Project document path
    #[arg(short, long, default_value = "vitrail.project.json")]
    pub project: PathBuf,

    /// Which spelling set to render
    #[arg(long, value_enum, default_value = "markup")]
    pub context: NameContext,

    /// Hide computed, methods, data, and `_`/`$`-prefixed names
    #[arg(long)]
    pub public: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: AttributesArgs) {
    let config = load_config(None);
    let project = load_project(&args.project);

    let def = match &args.component {
        Some(name) => match project.definition(name) {
            Some(def) => Some(def),
            None => {
                eprintln!("No component named {:?} in {}", name, args.project.display());
                process::exit(1);
            }
        },
        None => None,
    };

    let details = ComponentDetails::with_providers(providers_from_config(&config));
    let scope = ProjectScope::new(project.definitions(), project.directives());
    let only_public = args.public || config.query.only_public;
    let xml_context = matches!(args.context, NameContext::Markup);

    let found = details.attributes(def.as_ref(), &scope, only_public, xml_context);
    let rows: Vec<_> = found
        .iter()
        .map(|descriptor| attribute_row(&project, descriptor))
        .collect();
    print_rows(&rows, args.format);
}

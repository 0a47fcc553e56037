//! Schema command - print or install the configuration JSON Schema

use clap::Args;

use crate::config;

#[derive(Args)]
pub struct SchemaArgs {
    /// Also write the schema to node_modules/.vitrail/ for editor pickup
    #[arg(long)]
    pub write: bool,
}

pub fn run(args: SchemaArgs) {
    println!("{}", config::VITRAIL_CONFIG_SCHEMA);
    if args.write {
        config::write_schema(None);
    }
}

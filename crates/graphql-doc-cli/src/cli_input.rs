use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "graphql-doc", version)]
/// Generates example requests, responses and a type catalog for the operations of a GraphQL schema
pub struct Args {
    /// The TOML configuration file. Defaults apply if it does not exist
    #[arg(short, long, default_value = "graphql-doc.toml")]
    pub config: PathBuf,
    /// The directory schema files are searched in and the host model path is relative to
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
    /// Write the documentation page to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// A tracing filter such as `graphql_doc=debug`. Falls back to `RUST_LOG`
    #[arg(long)]
    pub log_filter: Option<String>,
}

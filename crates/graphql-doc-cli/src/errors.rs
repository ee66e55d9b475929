use graphql_doc_config::ConfigError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// wraps an error loading the configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// returned if the schema location pattern is not a valid glob
    #[error("invalid schema location pattern '{0}'\nCaused by: {1}")]
    SchemaPattern(String, ignore::Error),
    /// returned if the project directory cannot be walked
    #[error("could not search for schema files\nCaused by: {0}")]
    WalkSchemas(ignore::Error),
    /// returned if no file under the root matches the schema location pattern
    #[error("no schema file in '{}' matches '{1}'", .0.display())]
    NoSchemaFiles(PathBuf, String),
    /// returned if a schema file cannot be read
    #[error("could not read the schema file '{}'\nCaused by: {1}", .0.display())]
    ReadSchema(PathBuf, io::Error),
    /// returned if the host model file cannot be read
    #[error("could not read the host model '{}'\nCaused by: {1}", .0.display())]
    ReadHostModel(PathBuf, io::Error),
    /// returned if the host model is not valid
    #[error("could not parse the host model '{}'\nCaused by: {1}", .0.display())]
    ParseHostModel(PathBuf, serde_json::Error),
    /// wraps an error building the documentation
    #[error(transparent)]
    Synthesis(#[from] graphql_doc::Error),
    /// returned if the documentation page cannot be serialized
    #[error("could not serialize the documentation page\nCaused by: {0}")]
    SerializePage(serde_json::Error),
    /// returned if the documentation page cannot be written
    #[error("could not write the documentation page to '{}'\nCaused by: {1}", .0.display())]
    WriteOutput(PathBuf, io::Error),
}

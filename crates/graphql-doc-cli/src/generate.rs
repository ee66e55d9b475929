use crate::{discover, errors::CliError};
use graphql_doc::{Catalog, HostModel, SchemaIndex};
use graphql_doc_config::DocConfig;
use std::{fs, path::Path};

/// What the documentation page is rendered from: the page settings next to the catalog.
#[derive(Debug, serde::Serialize)]
pub struct DocumentationPage<'a> {
    pub endpoint: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub app_version: &'a str,
    pub logo_url: &'a str,
    pub site_url: &'a str,
    pub support_link: Option<&'a str>,
    pub twitter_link: Option<&'a str>,
    pub linkedin_link: Option<&'a str>,
    pub instagram_link: Option<&'a str>,
    #[serde(flatten)]
    pub catalog: &'a Catalog,
}

impl<'a> DocumentationPage<'a> {
    pub fn new(config: &'a DocConfig, catalog: &'a Catalog) -> Self {
        DocumentationPage {
            endpoint: &config.endpoint,
            title: &config.title,
            description: &config.description,
            app_version: &config.app_version,
            logo_url: &config.logo_url,
            site_url: &config.site_url,
            support_link: config.support_link.as_deref(),
            twitter_link: config.twitter_link.as_deref(),
            linkedin_link: config.linkedin_link.as_deref(),
            instagram_link: config.instagram_link.as_deref(),
            catalog,
        }
    }
}

/// Builds the documentation of the project under `root` and returns the page as
/// pretty-printed JSON.
pub fn generate(config: &DocConfig, root: &Path) -> Result<String, CliError> {
    let files = discover::schema_files(root, &config.schema_location_pattern)?;
    let mut sources = Vec::with_capacity(files.len());

    for path in files {
        let sdl = fs::read_to_string(&path).map_err(|error| CliError::ReadSchema(path.clone(), error))?;
        sources.push((path.display().to_string(), sdl));
    }

    let schema = SchemaIndex::from_sources(sources.iter().map(|(origin, sdl)| (origin.as_str(), sdl.as_str())))?;

    let model_path = root.join(&config.host_model);
    let model = fs::read_to_string(&model_path).map_err(|error| CliError::ReadHostModel(model_path.clone(), error))?;
    let model: HostModel =
        serde_json::from_str(&model).map_err(|error| CliError::ParseHostModel(model_path.clone(), error))?;

    let catalog = graphql_doc::build_catalog(&schema, &model)?;

    tracing::info!(
        groups = catalog.groups.len(),
        types = catalog.object_types.len(),
        "generated documentation"
    );

    serde_json::to_string_pretty(&DocumentationPage::new(config, &catalog)).map_err(CliError::SerializePage)
}

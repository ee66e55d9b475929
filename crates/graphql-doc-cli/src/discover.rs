use crate::errors::CliError;
use ignore::{overrides::OverrideBuilder, WalkBuilder};
use std::path::{Path, PathBuf};

/// Every file under `root` matching `pattern`, sorted by path.
pub fn schema_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, CliError> {
    let invalid = |error| CliError::SchemaPattern(pattern.to_owned(), error);

    let mut overrides = OverrideBuilder::new(root);
    overrides.add(pattern).map_err(invalid)?;
    let overrides = overrides.build().map_err(invalid)?;

    let walker = WalkBuilder::new(root)
        .standard_filters(true)
        .hidden(false)
        .overrides(overrides)
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let entry = entry.map_err(CliError::WalkSchemas)?;

        if entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            files.push(entry.into_path());
        }
    }

    files.sort();

    if files.is_empty() {
        return Err(CliError::NoSchemaFiles(root.to_path_buf(), pattern.to_owned()));
    }

    tracing::debug!(count = files.len(), pattern, "discovered schema files");

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn matches_nested_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("schema/users")).unwrap();
        fs::write(root.join("schema/users/user.graphqls"), "").unwrap();
        fs::write(root.join("schema/base.graphqls"), "").unwrap();
        fs::write(root.join("schema/notes.md"), "").unwrap();
        fs::write(root.join("root.graphqls"), "").unwrap();

        let files = schema_files(root, "**/*.graphqls").unwrap();
        let relative = files
            .iter()
            .map(|file| file.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect::<Vec<_>>();

        assert_eq!(relative, ["root.graphqls", "schema/base.graphqls", "schema/users/user.graphqls"]);
    }

    #[test]
    fn no_match_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("schema.graphql"), "").unwrap();

        assert!(matches!(
            schema_files(dir.path(), "**/*.graphqls"),
            Err(CliError::NoSchemaFiles(_, pattern)) if pattern == "**/*.graphqls"
        ));
    }
}

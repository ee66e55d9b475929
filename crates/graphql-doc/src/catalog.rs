use crate::{
    assemble, reconcile, Error, HostModel, HostTypes, OperationDecl, OperationKind, OperationRecord, SchemaIndex,
    SynthesisContext, TypeFields,
};
use indexmap::IndexMap;
use std::collections::HashMap;

/// The operations documented for one host group.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct OperationGroup {
    pub description: String,
    pub key: String,
    pub operations: Vec<OperationRecord>,
}

/// Everything the presentation layer renders.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Catalog {
    /// Keyed by [`group_key`].
    pub groups: IndexMap<String, OperationGroup>,
    /// Field summaries by host type name.
    pub object_types: IndexMap<String, TypeFields>,
    /// Backing schema type name by host type name.
    pub schema_names: IndexMap<String, String>,
}

/// The lookup key of a group: its declared key with spaces replaced by underscores.
pub fn group_key(key: &str) -> String {
    key.replace(' ', "_")
}

pub struct CatalogBuilder<'a> {
    schema: &'a SchemaIndex,
    model: &'a HostModel,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(schema: &'a SchemaIndex, model: &'a HostModel) -> Self {
        CatalogBuilder { schema, model }
    }

    /// Runs synthesis for every reconciled accessor, query groups first, then mutation
    /// and subscription groups. Fails on the first fatal error.
    pub fn build(self) -> Result<Catalog, Error> {
        let host = HostTypes::new(self.model)?;
        let mut context = SynthesisContext::new(self.schema, &host);
        let mut groups: IndexMap<String, OperationGroup> = IndexMap::new();

        for kind in OperationKind::ALL {
            let declared = self
                .schema
                .find_operations(kind)
                .iter()
                .map(|operation| (operation.name.as_str(), operation))
                .collect::<HashMap<&str, &OperationDecl>>();

            for group in self.model.groups.iter().filter(|group| group.kind == kind) {
                let mut operations = Vec::new();

                for accessor in &group.accessors {
                    let operation = reconcile(|name| declared.contains_key(name), &accessor.name)
                        .and_then(|name| declared.get(name.as_str()).copied());

                    let Some(operation) = operation else {
                        tracing::debug!(
                            host_type = %group.type_name,
                            accessor = %accessor.name,
                            "accessor does not implement a declared {kind} operation"
                        );
                        continue;
                    };

                    operations.push(assemble(&mut context, kind, &group.type_name, operation, accessor)?);
                }

                tracing::info!(
                    %kind,
                    host_type = %group.type_name,
                    key = %group.key,
                    operations = operations.len(),
                    "documented operation group"
                );

                let entry = groups.entry(group_key(&group.key)).or_insert_with(|| OperationGroup {
                    description: group.description.clone(),
                    key: group.key.clone(),
                    operations: Vec::new(),
                });

                entry.operations.extend(operations);
            }
        }

        let (object_types, schema_names) = context.into_parts();

        Ok(Catalog {
            groups,
            object_types,
            schema_names,
        })
    }
}

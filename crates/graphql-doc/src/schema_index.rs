use crate::Error;
use graphql_parser::schema::{self as ast, Definition, TypeDefinition, TypeExtension};
use indexmap::IndexMap;
use std::{collections::HashMap, fmt};

/// The three root operation categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription];

    /// The keyword opening an operation of this kind in an executable document.
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// The root type name used when no `schema { ... }` definition overrides it.
    pub fn default_root_type(self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema type reference with its list and non-null wrappers stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaTypeRef {
    pub name: String,
    /// Any wrapping level was non-null.
    pub non_null: bool,
    /// Any wrapping level was a list.
    pub list: bool,
}

impl SchemaTypeRef {
    fn from_ast(ty: &ast::Type<'_, String>) -> Self {
        let mut type_ref = SchemaTypeRef {
            name: String::new(),
            non_null: false,
            list: false,
        };
        unwrap_type(ty, &mut type_ref);
        type_ref
    }
}

fn unwrap_type(ty: &ast::Type<'_, String>, type_ref: &mut SchemaTypeRef) {
    match ty {
        ast::Type::NamedType(name) => type_ref.name.clone_from(name),
        ast::Type::ListType(inner) => {
            type_ref.list = true;
            unwrap_type(inner, type_ref);
        }
        ast::Type::NonNullType(inner) => {
            type_ref.non_null = true;
            unwrap_type(inner, type_ref);
        }
    }
}

/// A field of an object, interface or input type. Input fields never carry arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub ty: SchemaTypeRef,
    pub arguments: IndexMap<String, SchemaTypeRef>,
}

impl FieldDecl {
    fn from_field(field: &ast::Field<'_, String>) -> Self {
        FieldDecl {
            name: field.name.clone(),
            ty: SchemaTypeRef::from_ast(&field.field_type),
            arguments: field
                .arguments
                .iter()
                .map(|argument| (argument.name.clone(), SchemaTypeRef::from_ast(&argument.value_type)))
                .collect(),
        }
    }

    fn from_input_value(value: &ast::InputValue<'_, String>) -> Self {
        FieldDecl {
            name: value.name.clone(),
            ty: SchemaTypeRef::from_ast(&value.value_type),
            arguments: IndexMap::new(),
        }
    }
}

/// A root-level operation: one field of the query, mutation or subscription root type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDecl {
    pub name: String,
    pub return_type: SchemaTypeRef,
    pub arguments: IndexMap<String, SchemaTypeRef>,
}

impl OperationDecl {
    pub fn argument(&self, name: &str) -> Option<&SchemaTypeRef> {
        self.arguments.get(name)
    }
}

impl From<&FieldDecl> for OperationDecl {
    fn from(field: &FieldDecl) -> Self {
        OperationDecl {
            name: field.name.clone(),
            return_type: field.ty.clone(),
            arguments: field.arguments.clone(),
        }
    }
}

/// Random access to the type definitions and root operations of one or more merged
/// schema sources.
#[derive(Debug, Default)]
pub struct SchemaIndex {
    types: IndexMap<String, Vec<FieldDecl>>,
    operations: HashMap<OperationKind, Vec<OperationDecl>>,
}

impl SchemaIndex {
    pub fn parse(sdl: &str) -> Result<Self, Error> {
        Self::from_sources([("schema", sdl)])
    }

    /// Parses and merges the given `(origin, sdl)` pairs in order. Type extensions are
    /// merged into the type they extend, wherever either one is declared.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self, Error> {
        let mut index = SchemaIndex::default();
        let mut root_types = OperationKind::ALL.map(|kind| (kind, kind.default_root_type().to_owned()));

        for (origin, sdl) in sources {
            let document = graphql_parser::parse_schema::<String>(sdl).map_err(|error| Error::SchemaParse {
                origin: origin.to_owned(),
                message: error.to_string(),
            })?;

            for definition in &document.definitions {
                match definition {
                    Definition::SchemaDefinition(schema) => {
                        let overrides = [&schema.query, &schema.mutation, &schema.subscription];

                        for ((_, root_type), root_override) in root_types.iter_mut().zip(overrides) {
                            if let Some(name) = root_override {
                                root_type.clone_from(name);
                            }
                        }
                    }
                    Definition::TypeDefinition(TypeDefinition::Object(object)) => {
                        index.extend_type(&object.name, object.fields.iter().map(FieldDecl::from_field));
                    }
                    Definition::TypeDefinition(TypeDefinition::Interface(interface)) => {
                        index.extend_type(&interface.name, interface.fields.iter().map(FieldDecl::from_field));
                    }
                    Definition::TypeDefinition(TypeDefinition::InputObject(input)) => {
                        index.extend_type(&input.name, input.fields.iter().map(FieldDecl::from_input_value));
                    }
                    Definition::TypeExtension(TypeExtension::Object(object)) => {
                        index.extend_type(&object.name, object.fields.iter().map(FieldDecl::from_field));
                    }
                    Definition::TypeExtension(TypeExtension::Interface(interface)) => {
                        index.extend_type(&interface.name, interface.fields.iter().map(FieldDecl::from_field));
                    }
                    Definition::TypeExtension(TypeExtension::InputObject(input)) => {
                        index.extend_type(&input.name, input.fields.iter().map(FieldDecl::from_input_value));
                    }
                    _ => {}
                }
            }
        }

        for (kind, root_type) in root_types {
            let operations = index
                .describe_type(&root_type)
                .iter()
                .map(OperationDecl::from)
                .collect::<Vec<_>>();

            tracing::debug!(%kind, %root_type, operations = operations.len(), "indexed root operations");
            index.operations.insert(kind, operations);
        }

        Ok(index)
    }

    fn extend_type(&mut self, name: &str, fields: impl Iterator<Item = FieldDecl>) {
        self.types.entry(name.to_owned()).or_default().extend(fields);
    }

    /// The operations declared under the root type of `kind`, in declaration order.
    pub fn find_operations(&self, kind: OperationKind) -> &[OperationDecl] {
        self.operations.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// The fields of an object, interface or input type. Unknown names, and types
    /// without fields such as enums and scalars, yield an empty list.
    pub fn describe_type(&self, name: &str) -> &[FieldDecl] {
        self.types.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

use crate::{example, Error, HostTypeRef, HostTypes, OperationDecl, SchemaIndex};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

const TYPENAME: &str = "__typename";

/// Documentation of one field of a synthesized type.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FieldSummary {
    pub name: String,
    /// The schema type of the field, wrappers stripped.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Scalar or enum, as opposed to a nested object.
    pub primitive: bool,
    pub list: bool,
    pub required: bool,
    pub description: String,
    pub example: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TypeFields {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldSummary>,
}

/// Where a host type was reached from. Decides which schema type backs it.
#[derive(Clone, Copy, Debug)]
pub enum Origin<'o> {
    /// The type an operation returns.
    Return,
    /// The type of the named operation parameter. A name the operation does not
    /// declare is taken as a schema type name.
    Parameter(&'o str),
    /// A type reached through a field of the given schema type.
    Nested(&'o str),
}

/// The memo of one synthesis run. Every host type name is resolved at most once; each
/// map keeps the first value written for a name.
///
/// A type that is reached again while its own resolution is still running is not
/// expanded a second time. The field referencing it selects `__typename` instead,
/// which keeps cyclic type graphs finite and still yields a valid request.
pub struct SynthesisContext<'a> {
    schema: &'a SchemaIndex,
    host: &'a HostTypes<'a>,
    object_types: IndexMap<String, TypeFields>,
    schema_names: IndexMap<String, String>,
    examples: HashMap<String, Value>,
    selections: HashMap<String, String>,
    argument_objects: HashMap<String, String>,
    in_progress: HashSet<String>,
}

impl<'a> SynthesisContext<'a> {
    pub fn new(schema: &'a SchemaIndex, host: &'a HostTypes<'a>) -> Self {
        SynthesisContext {
            schema,
            host,
            object_types: IndexMap::new(),
            schema_names: IndexMap::new(),
            examples: HashMap::new(),
            selections: HashMap::new(),
            argument_objects: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    pub fn host(&self) -> &'a HostTypes<'a> {
        self.host
    }

    /// Resolves the object host type `host_type` unless it already was. Returns `None`
    /// while the type is still being resolved further up the stack.
    pub fn synthesize(
        &mut self,
        operation: &OperationDecl,
        host_type: &str,
        origin: Origin<'_>,
    ) -> Result<Option<&TypeFields>, Error> {
        if self.in_progress.contains(host_type) {
            return Ok(None);
        }

        if !self.object_types.contains_key(host_type) {
            self.resolve(operation, host_type, origin)?;
        }

        Ok(self.object_types.get(host_type))
    }

    /// The example value of a resolved type, without any response envelope.
    pub fn example(&self, host_type: &str) -> Option<&Value> {
        self.examples.get(host_type)
    }

    /// The selection set body requesting every field of a resolved type.
    pub fn selection(&self, host_type: &str) -> Option<&str> {
        self.selections.get(host_type).map(String::as_str)
    }

    /// The object literal passing a resolved type as an argument, braces included.
    pub fn argument_object(&self, host_type: &str) -> Option<&str> {
        self.argument_objects.get(host_type).map(String::as_str)
    }

    pub fn schema_name(&self, host_type: &str) -> Option<&str> {
        self.schema_names.get(host_type).map(String::as_str)
    }

    /// The field summaries and schema type names of every resolved host type.
    pub fn into_parts(self) -> (IndexMap<String, TypeFields>, IndexMap<String, String>) {
        (self.object_types, self.schema_names)
    }

    fn resolve(&mut self, operation: &OperationDecl, host_type: &str, origin: Origin<'_>) -> Result<(), Error> {
        let (schema, host) = (self.schema, self.host);
        let definition = host.get(host_type)?;

        // Field resolution below depends on this mapping.
        let schema_type = self.register_schema_name(operation, host_type, origin);
        self.in_progress.insert(host_type.to_owned());

        let mut fields = Vec::new();
        let mut object = Map::new();
        let mut selection = Vec::new();
        let mut arguments = Vec::new();

        for schema_field in schema.describe_type(&schema_type) {
            let host_field = host
                .field(host_type, &schema_field.name)?
                .ok_or_else(|| Error::SchemaDrift {
                    host_type: host_type.to_owned(),
                    schema_type: schema_type.clone(),
                    field: schema_field.name.clone(),
                })?;

            let name = host_field.name.as_str();
            let (element, depth) = unwrap_lists(&host_field.ty, host_type, name)?;
            let kind = host.kind(element)?;

            let (mut value, mut argument) = if kind.is_primitive_like() {
                let override_example = host_field.doc.example();
                selection.push(name.to_owned());

                (
                    example::response(kind, override_example),
                    example::request(kind, override_example),
                )
            } else {
                let nested = element.simple_name();
                self.synthesize(operation, nested, Origin::Nested(&schema_field.ty.name))?;

                match (self.examples.get(nested), self.selections.get(nested), self.argument_objects.get(nested)) {
                    (Some(value), Some(nested_selection), Some(argument)) => {
                        selection.push(format!("{name} {{\n{nested_selection}\n}}"));
                        (value.clone(), argument.clone())
                    }
                    _ => {
                        tracing::debug!(host_type, field = name, nested, "cyclic reference, selecting the type name only");
                        selection.push(format!("{name} {{\n{TYPENAME}\n}}"));
                        (typename_example(&schema_field.ty.name), "{}".to_owned())
                    }
                }
            };

            for _ in 0..depth {
                value = Value::Array(vec![value]);
                argument = format!("[{argument}]");
            }

            object.insert(name.to_owned(), value);
            arguments.push(format!("{name}: {argument}"));

            fields.push(FieldSummary {
                name: name.to_owned(),
                schema_type: schema_field.ty.name.clone(),
                primitive: kind.is_primitive_like(),
                list: depth > 0,
                required: host_field.doc.required,
                description: host_field.doc.description.clone().unwrap_or_default(),
                example: host_field.doc.example.clone().unwrap_or_default(),
            });
        }

        // An opaque type still needs a non-empty selection.
        if selection.is_empty() {
            selection.push(TYPENAME.to_owned());
            object.insert(TYPENAME.to_owned(), Value::String(schema_type.clone()));
        }

        let argument_object = if arguments.is_empty() {
            "{}".to_owned()
        } else {
            format!("{{ {} }}", arguments.join(", "))
        };

        tracing::debug!(host_type, %schema_type, fields = fields.len(), "resolved host type");

        self.in_progress.remove(host_type);
        self.examples
            .entry(host_type.to_owned())
            .or_insert(Value::Object(object));
        self.selections
            .entry(host_type.to_owned())
            .or_insert_with(|| selection.join("\n"));
        self.argument_objects
            .entry(host_type.to_owned())
            .or_insert(argument_object);
        self.object_types
            .entry(host_type.to_owned())
            .or_insert_with(|| TypeFields {
                name: host_type.to_owned(),
                description: definition.description.clone(),
                fields,
            });

        Ok(())
    }

    fn register_schema_name(&mut self, operation: &OperationDecl, host_type: &str, origin: Origin<'_>) -> String {
        let schema_type = match origin {
            Origin::Return => operation.return_type.name.clone(),
            Origin::Parameter(name) => operation
                .argument(name)
                .map_or_else(|| name.to_owned(), |argument| argument.name.clone()),
            Origin::Nested(schema_type) => schema_type.to_owned(),
        };

        self.schema_names
            .entry(host_type.to_owned())
            .or_insert(schema_type)
            .clone()
    }
}

/// Strips every list level off `ty`, returning the element type and the list depth.
pub(crate) fn unwrap_lists<'t>(ty: &'t HostTypeRef, owner: &str, member: &str) -> Result<(&'t HostTypeRef, usize), Error> {
    let mut element = ty;
    let mut depth = 0;

    while element.is_list() {
        element = HostTypes::element_type(element, owner, member)?;
        depth += 1;
    }

    Ok((element, depth))
}

fn typename_example(schema_type: &str) -> Value {
    let mut object = Map::new();
    object.insert(TYPENAME.to_owned(), Value::String(schema_type.to_owned()));
    Value::Object(object)
}

use crate::OperationKind;

/// Every variant is fatal to the synthesis pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// returned if a schema source is not valid SDL
    #[error("could not parse the schema source `{origin}`: {message}")]
    SchemaParse { origin: String, message: String },
    /// returned if the schema declares a field the backing host type does not have
    #[error("schema type `{schema_type}` declares the field `{field}`, but host type `{host_type}` has no such field")]
    SchemaDrift {
        host_type: String,
        schema_type: String,
        field: String,
    },
    /// returned if a list-like host member does not carry exactly one element type
    #[error("`{member}` of host type `{host_type}` is a list without a single element type")]
    MalformedListType { host_type: String, member: String },
    /// returned if a synthesized request is rejected by the GraphQL grammar, or does not
    /// print back to itself
    #[error("the synthesized {group} request could not be parsed: {message}\n{text}")]
    SynthesisGrammar {
        group: OperationKind,
        text: String,
        message: String,
    },
    /// returned if a host member refers to a type the host model does not declare
    #[error("host type `{0}` is not declared in the host model")]
    UnknownHostType(String),
    /// returned if the host model declares the same type name twice
    #[error("host type `{0}` is declared more than once in the host model")]
    DuplicateHostType(String),
    /// returned if a host type reference cannot be parsed
    #[error("`{0}` is not a valid host type reference")]
    InvalidTypeRef(String),
    /// returned if an operation is emitted without an example response
    #[error("no example response was recorded for the operation `{0}`")]
    MissingExample(String),
}

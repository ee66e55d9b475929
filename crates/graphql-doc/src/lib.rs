//! # GraphQL Doc
//!
//! Builds browsable documentation for the operations of a GraphQL schema. For every
//! operation a host type declares, the engine walks the schema type graph next to the
//! host type graph and synthesizes:
//!
//! - an example request document, validated by parsing it and printed in canonical form
//! - an example response, always rooted at `{"data": {...}}`
//! - a catalog of the field metadata of every type reached along the way
//!
//! Every distinct host type is resolved exactly once per run, which keeps the walk
//! finite on cyclic type graphs.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod access;
mod assembler;
mod catalog;
mod descriptor;
mod error;
mod example;
mod host;
mod reconcile;
mod schema_index;
mod synthesis;

pub use access::AccessRule;
pub use assembler::{assemble, OperationRecord, ParameterSummary};
pub use catalog::{group_key, Catalog, CatalogBuilder, OperationGroup};
pub use descriptor::{HostTypes, TypeKind};
pub use error::Error;
pub use host::{
    HostAccessor, HostField, HostGroup, HostKind, HostModel, HostParameter, HostTypeDef, HostTypeRef, MemberDoc,
    Primitive,
};
pub use reconcile::reconcile;
pub use schema_index::{FieldDecl, OperationDecl, OperationKind, SchemaIndex, SchemaTypeRef};
pub use synthesis::{FieldSummary, Origin, SynthesisContext, TypeFields};

/// Runs the whole synthesis pass once: every operation of `model` that matches an
/// operation declared in `schema` ends up in the returned catalog.
pub fn build_catalog(schema: &SchemaIndex, model: &HostModel) -> Result<Catalog, Error> {
    CatalogBuilder::new(schema, model).build()
}

use crate::{Error, HostField, HostKind, HostModel, HostTypeDef, HostTypeRef, Primitive};
use std::collections::{hash_map::Entry, HashMap, HashSet};

/// The capability tag of a host type reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind<'a> {
    Scalar(Primitive),
    Enum(&'a [String]),
    List,
    Object,
}

impl TypeKind<'_> {
    /// Scalars and enums get an example value instead of being walked.
    pub fn is_primitive_like(&self) -> bool {
        matches!(self, TypeKind::Scalar(_) | TypeKind::Enum(_))
    }
}

/// Name-indexed view over the types of a [`HostModel`].
#[derive(Debug)]
pub struct HostTypes<'a> {
    types: HashMap<&'a str, &'a HostTypeDef>,
}

impl<'a> HostTypes<'a> {
    pub fn new(model: &'a HostModel) -> Result<Self, Error> {
        let mut types = HashMap::with_capacity(model.types.len());

        for definition in &model.types {
            match types.entry(definition.name.as_str()) {
                Entry::Vacant(entry) => {
                    entry.insert(definition);
                }
                Entry::Occupied(_) => return Err(Error::DuplicateHostType(definition.name.clone())),
            }
        }

        Ok(HostTypes { types })
    }

    pub fn get(&self, name: &str) -> Result<&'a HostTypeDef, Error> {
        self.types
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownHostType(name.to_owned()))
    }

    pub fn kind(&self, ty: &HostTypeRef) -> Result<TypeKind<'a>, Error> {
        let kind = match ty {
            HostTypeRef::Primitive { kind, .. } => TypeKind::Scalar(*kind),
            HostTypeRef::List { .. } => TypeKind::List,
            HostTypeRef::Named(name) => match &self.get(name)?.kind {
                HostKind::Enum { variants } => TypeKind::Enum(variants),
                HostKind::Object { .. } => TypeKind::Object,
            },
        };

        Ok(kind)
    }

    pub fn is_primitive_like(&self, ty: &HostTypeRef) -> Result<bool, Error> {
        Ok(self.kind(ty)?.is_primitive_like())
    }

    /// The declared fields of `name` followed by those of each ancestor, nearest
    /// ancestor first, every level in declaration order.
    pub fn fields(&self, name: &str) -> Result<Vec<&'a HostField>, Error> {
        let mut fields = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(name);

        while let Some(name) = current {
            if !visited.insert(name) {
                break;
            }

            let definition = self.get(name)?;

            if let HostKind::Object { fields: declared } = &definition.kind {
                fields.extend(declared);
            }

            current = definition.parent.as_deref();
        }

        Ok(fields)
    }

    /// Finds a field by exact name across the type and its ancestors.
    pub fn field(&self, type_name: &str, field_name: &str) -> Result<Option<&'a HostField>, Error> {
        Ok(self
            .fields(type_name)?
            .into_iter()
            .find(|field| field.name == field_name))
    }

    /// The element type of a list-like member. `owner` and `member` only name the
    /// offending member in the error.
    pub fn element_type<'t>(ty: &'t HostTypeRef, owner: &str, member: &str) -> Result<&'t HostTypeRef, Error> {
        ty.element_type().ok_or_else(|| Error::MalformedListType {
            host_type: owner.to_owned(),
            member: member.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model() -> HostModel {
        serde_json::from_value(json!({
            "types": [
                { "name": "Entity", "kind": "object", "fields": [
                    { "name": "id", "type": "String" },
                    { "name": "createdAt", "type": "Instant" }
                ] },
                { "name": "Person", "kind": "object", "parent": "Entity", "fields": [
                    { "name": "name", "type": "String" }
                ] },
                { "name": "User", "kind": "object", "parent": "Person", "fields": [
                    { "name": "role", "type": "Role" },
                    { "name": "friends", "type": "Vec<User>" }
                ] },
                { "name": "Role", "kind": "enum", "variants": ["ADMIN", "USER"] },
                { "name": "Loop", "kind": "object", "parent": "Loop", "fields": [] }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn inherited_fields_follow_own_fields() {
        let model = model();
        let types = HostTypes::new(&model).unwrap();

        let names = types
            .fields("User")
            .unwrap()
            .into_iter()
            .map(|field| field.name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(names, ["role", "friends", "name", "id", "createdAt"]);
        assert_eq!(types.field("User", "id").unwrap().map(|field| field.name.as_str()), Some("id"));
        assert!(types.field("User", "missing").unwrap().is_none());
        assert!(types.fields("Loop").unwrap().is_empty());
    }

    #[test]
    fn kinds() {
        let model = model();
        let types = HostTypes::new(&model).unwrap();

        assert!(types.is_primitive_like(&"Role".parse().unwrap()).unwrap());
        assert!(types.is_primitive_like(&"u64".parse().unwrap()).unwrap());
        assert!(!types.is_primitive_like(&"User".parse().unwrap()).unwrap());
        assert_eq!(types.kind(&"Vec<User>".parse().unwrap()).unwrap(), TypeKind::List);
        assert!(matches!(
            types.kind(&"Role".parse().unwrap()).unwrap(),
            TypeKind::Enum(variants) if variants[0] == "ADMIN"
        ));
        assert!(matches!(
            types.kind(&"Address".parse().unwrap()),
            Err(Error::UnknownHostType(name)) if name == "Address"
        ));
    }

    #[test]
    fn duplicate_type_names_are_rejected() {
        let model: HostModel = serde_json::from_value(json!({
            "types": [
                { "name": "User", "kind": "object", "fields": [{ "name": "id", "type": "String" }] },
                { "name": "Role", "kind": "enum", "variants": ["ADMIN"] },
                { "name": "User", "kind": "enum", "variants": ["GUEST"] }
            ]
        }))
        .unwrap();

        let error = HostTypes::new(&model).unwrap_err();

        assert!(matches!(error, Error::DuplicateHostType(ref name) if name == "User"));
        assert_eq!(error.to_string(), "host type `User` is declared more than once in the host model");
    }

    #[test]
    fn malformed_list_names_the_member() {
        let ty = "Vec".parse().unwrap();
        let error = HostTypes::element_type(&ty, "User", "friends").unwrap_err();

        assert_eq!(error.to_string(), "`friends` of host type `User` is a list without a single element type");
    }
}

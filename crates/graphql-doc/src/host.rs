//! The host side of the documentation: the types backing schema types, and the
//! accessors implementing schema operations. A host model is plain data, usually
//! deserialized from JSON, standing in for whatever metadata the host language offers.

mod type_ref;

pub use type_ref::{HostTypeRef, Primitive};

use crate::OperationKind;

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostModel {
    #[serde(default)]
    pub types: Vec<HostTypeDef>,
    #[serde(default)]
    pub groups: Vec<HostGroup>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct HostTypeDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Fields of the parent type, and of its parents, are inherited.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(flatten)]
    pub kind: HostKind,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HostKind {
    Object {
        #[serde(default)]
        fields: Vec<HostField>,
    },
    Enum {
        variants: Vec<String>,
    },
}

/// Optional documentation attached to a field or parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct MemberDoc {
    /// Replaces the generated example value.
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl MemberDoc {
    /// The example override, if a non-empty one was given.
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref().filter(|example| !example.is_empty())
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct HostField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: HostTypeRef,
    #[serde(flatten)]
    pub doc: MemberDoc,
}

/// A host type declaring operations of one root category.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct HostGroup {
    pub type_name: String,
    pub kind: OperationKind,
    /// Groups are looked up by this key, see [`crate::group_key`].
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub accessors: Vec<HostAccessor>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct HostAccessor {
    pub name: String,
    /// A free-form label for the operation, shown next to its description.
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub description: String,
    pub returns: HostTypeRef,
    #[serde(default)]
    pub parameters: Vec<HostParameter>,
    /// An access-control expression such as `hasRole('ADMIN')`.
    #[serde(default)]
    pub access: Option<String>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct HostParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: HostTypeRef,
    #[serde(flatten)]
    pub doc: MemberDoc,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_model() {
        let model: HostModel = serde_json::from_value(json!({
            "types": [
                {
                    "name": "User",
                    "kind": "object",
                    "parent": "Entity",
                    "description": "A registered user",
                    "fields": [
                        { "name": "role", "type": "Role", "example": "ADMIN", "required": true },
                        { "name": "tags", "type": "Vec<String>" }
                    ]
                },
                { "name": "Role", "kind": "enum", "variants": ["USER", "ADMIN"] }
            ],
            "groups": [
                {
                    "type_name": "UserQueries",
                    "kind": "query",
                    "key": "User Queries",
                    "accessors": [
                        {
                            "name": "getUser",
                            "description": "Finds a user",
                            "returns": "User",
                            "parameters": [{ "name": "id", "type": "String", "example": "42" }],
                            "access": "isAuthenticated()"
                        }
                    ]
                }
            ]
        }))
        .unwrap();

        let user = &model.types[0];
        assert_eq!(user.parent.as_deref(), Some("Entity"));

        let HostKind::Object { fields } = &user.kind else {
            unreachable!("User is an object type");
        };

        assert_eq!(fields[0].doc.example(), Some("ADMIN"));
        assert!(fields[0].doc.required);
        assert!(!fields[1].doc.required);
        assert_eq!(fields[1].ty, "Vec<String>".parse().unwrap());

        assert!(matches!(&model.types[1].kind, HostKind::Enum { variants } if variants[0] == "USER"));

        let group = &model.groups[0];
        assert_eq!(group.kind, OperationKind::Query);
        assert_eq!(group.accessors[0].parameters[0].doc.example(), Some("42"));
        assert_eq!(group.accessors[0].access.as_deref(), Some("isAuthenticated()"));
    }

    #[test]
    fn empty_example_is_no_example() {
        let doc = MemberDoc {
            example: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(doc.example(), None);
    }
}

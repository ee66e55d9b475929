use crate::Error;
use std::{fmt, str::FromStr};

const LIST_CONTAINERS: &[&str] = &[
    "Vec",
    "VecDeque",
    "List",
    "ArrayList",
    "LinkedList",
    "Set",
    "HashSet",
    "BTreeSet",
    "IndexSet",
    "Collection",
    "Iterable",
];

const OPTIONAL_WRAPPERS: &[&str] = &["Option", "Optional"];

/// Leaf kinds that are given a scalar example instead of being walked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Boolean,
    Integer,
    Float,
    String,
    Id,
    Temporal,
}

impl Primitive {
    fn from_name(name: &str) -> Option<Self> {
        let primitive = match name {
            "bool" | "boolean" | "Boolean" => Primitive::Boolean,
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64" | "u128" | "usize" | "byte"
            | "Byte" | "short" | "Short" | "int" | "Int" | "Integer" | "long" | "Long" | "BigInteger" => {
                Primitive::Integer
            }
            "f32" | "f64" | "float" | "Float" | "double" | "Double" | "Decimal" | "BigDecimal" => Primitive::Float,
            "str" | "String" | "char" | "Character" => Primitive::String,
            "ID" | "Id" | "Uuid" | "UUID" => Primitive::Id,
            "Date" | "DateTime" | "Time" | "Instant" | "Timestamp" | "LocalDate" | "LocalTime" | "LocalDateTime"
            | "OffsetDateTime" | "ZonedDateTime" | "NaiveDate" | "NaiveTime" | "NaiveDateTime" => Primitive::Temporal,
            _ => return None,
        };

        Some(primitive)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Primitive::Integer | Primitive::Float)
    }
}

/// How a field, parameter or return value refers to a host type.
///
/// References are written the way generic types are, e.g. `String`, `User` or
/// `Vec<User>`. Qualified paths keep their last segment only, and `Option<T>` is
/// the same as `T`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum HostTypeRef {
    Primitive { name: String, kind: Primitive },
    /// A type declared in the host model: an object or an enum.
    Named(String),
    /// A list-like container. Anything but exactly one parameter is malformed, which
    /// surfaces once the element type is needed.
    List { container: String, parameters: Vec<HostTypeRef> },
}

impl HostTypeRef {
    pub fn simple_name(&self) -> &str {
        match self {
            HostTypeRef::Primitive { name, .. } => name,
            HostTypeRef::Named(name) => name,
            HostTypeRef::List { container, .. } => container,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, HostTypeRef::List { .. })
    }

    /// The single element type of a list-like reference.
    pub fn element_type(&self) -> Option<&HostTypeRef> {
        match self {
            HostTypeRef::List { parameters, .. } if parameters.len() == 1 => parameters.first(),
            _ => None,
        }
    }
}

impl fmt::Display for HostTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostTypeRef::Primitive { name, .. } | HostTypeRef::Named(name) => f.write_str(name),
            HostTypeRef::List { container, parameters } => {
                write!(f, "{container}<")?;

                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{parameter}")?;
                }

                f.write_str(">")
            }
        }
    }
}

impl FromStr for HostTypeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_ref(s) {
            Some((type_ref, rest)) if rest.trim().is_empty() => Ok(type_ref),
            _ => Err(Error::InvalidTypeRef(s.to_owned())),
        }
    }
}

impl TryFrom<String> for HostTypeRef {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_ref(input: &str) -> Option<(HostTypeRef, &str)> {
    let input = input.trim_start();
    let end = input
        .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '.' | ':')))
        .unwrap_or(input.len());

    let (path, mut rest) = input.split_at(end);
    let name = path.rsplit(['.', ':']).next().unwrap_or(path);

    if name.is_empty() {
        return None;
    }

    let mut parameters = Vec::new();

    if let Some(after) = rest.trim_start().strip_prefix('<') {
        rest = after;

        loop {
            if let Some(after) = rest.trim_start().strip_prefix('>') {
                rest = after;
                break;
            }

            let (parameter, after) = parse_ref(rest)?;
            parameters.push(parameter);

            let after = after.trim_start();

            if let Some(after) = after.strip_prefix(',') {
                rest = after;
            } else if let Some(after) = after.strip_prefix('>') {
                rest = after;
                break;
            } else {
                return None;
            }
        }
    }

    let type_ref = if LIST_CONTAINERS.contains(&name) {
        HostTypeRef::List {
            container: name.to_owned(),
            parameters,
        }
    } else if OPTIONAL_WRAPPERS.contains(&name) {
        match <[HostTypeRef; 1]>::try_from(parameters) {
            Ok([inner]) => inner,
            Err(_) => return None,
        }
    } else if !parameters.is_empty() {
        return None;
    } else if let Some(kind) = Primitive::from_name(name) {
        HostTypeRef::Primitive {
            name: name.to_owned(),
            kind,
        }
    } else {
        HostTypeRef::Named(name.to_owned())
    };

    Some((type_ref, rest))
}

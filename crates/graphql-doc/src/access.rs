const ROLE_PREFIX: &str = "ROLE_";

/// The access-control shapes that get a restriction note in the documentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessRule {
    Anonymous,
    Authenticated,
    Roles(Vec<String>),
}

impl AccessRule {
    /// Recognizes `isAnonymous()`, `isAuthenticated()`, `hasRole('R')` and
    /// `hasAnyRole('R1', 'R2')`. Any other expression has no note.
    pub fn parse(expression: &str) -> Option<Self> {
        let call = Call::parse(expression)?;

        match (call.name, call.arguments.as_slice()) {
            ("isAnonymous", []) => Some(AccessRule::Anonymous),
            ("isAuthenticated", []) => Some(AccessRule::Authenticated),
            ("hasRole", [_]) | ("hasAnyRole", [_, ..]) => Some(AccessRule::Roles(
                call.arguments
                    .iter()
                    .map(|role| role.strip_prefix(ROLE_PREFIX).unwrap_or(role).to_owned())
                    .collect(),
            )),
            _ => None,
        }
    }

    pub fn note(&self) -> String {
        match self {
            AccessRule::Anonymous => "Only anonymous users can access this resource".to_owned(),
            AccessRule::Authenticated => roles_note("Any Role"),
            AccessRule::Roles(roles) => roles_note(&roles.join(", ")),
        }
    }
}

fn roles_note(roles: &str) -> String {
    format!("Only for authenticated users with roles : {roles}")
}

/// `name(arg, ...)` where every argument is a quoted string literal.
struct Call<'a> {
    name: &'a str,
    arguments: Vec<&'a str>,
}

impl<'a> Call<'a> {
    fn parse(expression: &'a str) -> Option<Self> {
        let expression = expression.trim();
        let open = expression.find('(')?;
        let name = expression[..open].trim();

        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return None;
        }

        let inner = expression[open + 1..].strip_suffix(')')?.trim();
        let mut arguments = Vec::new();

        if !inner.is_empty() {
            for argument in inner.split(',') {
                arguments.push(string_literal(argument.trim())?);
            }
        }

        Some(Call { name, arguments })
    }
}

fn string_literal(token: &str) -> Option<&str> {
    ['\'', '"']
        .into_iter()
        .find_map(|quote| token.strip_prefix(quote)?.strip_suffix(quote))
        .filter(|literal| !literal.contains(['\'', '"']))
}

const GETTER_PREFIX: &str = "get";

/// Maps an accessor name to the declared operation it implements, tolerating the
/// getter naming convention in both directions: `getOrders` implements `orders`, and
/// `orders` implements `getOrders`. Returns `None` for accessors unrelated to the schema.
pub fn reconcile(is_declared: impl Fn(&str) -> bool, accessor: &str) -> Option<String> {
    if is_declared(accessor) {
        return Some(accessor.to_owned());
    }

    if let Some(stripped) = accessor.strip_prefix(GETTER_PREFIX) {
        let candidate = with_first_char(stripped, char::to_lowercase)?;
        return is_declared(&candidate).then_some(candidate);
    }

    let capitalized = with_first_char(accessor, char::to_uppercase)?;
    let candidate = format!("{GETTER_PREFIX}{capitalized}");

    is_declared(&candidate).then_some(candidate)
}

fn with_first_char<I>(name: &str, convert: impl Fn(char) -> I) -> Option<String>
where
    I: Iterator<Item = char>,
{
    let mut chars = name.chars();
    let first = chars.next()?;

    Some(convert(first).chain(chars).collect())
}

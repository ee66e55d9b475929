use crate::{
    example,
    synthesis::{unwrap_lists, Origin, SynthesisContext},
    AccessRule, Error, HostAccessor, HostParameter, OperationDecl, OperationKind,
};
use serde_json::{Map, Value};

/// The documentation of one operation, as handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationRecord {
    pub description: String,
    /// The free-form operation label of the accessor.
    pub operation: String,
    /// The operation name declared in the schema.
    pub name: String,
    /// The host accessor implementing the operation.
    pub method_name: String,
    /// The host type returned, list wrappers stripped.
    pub output_name: String,
    pub parameters: Vec<ParameterSummary>,
    pub example_request: String,
    pub example_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParameterSummary {
    pub name: String,
    /// The schema type of the argument, or the host type name if the schema does not
    /// declare the argument.
    #[serde(rename = "type")]
    pub schema_type: String,
    pub example: String,
    pub description: String,
    pub required: bool,
}

/// Builds the record of `accessor`, an accessor of the host type `owner` implementing
/// `operation`. Return and parameter types are synthesized into `context` first, unless
/// an earlier operation already did so.
pub fn assemble(
    context: &mut SynthesisContext<'_>,
    kind: OperationKind,
    owner: &str,
    operation: &OperationDecl,
    accessor: &HostAccessor,
) -> Result<OperationRecord, Error> {
    let host = context.host();

    let (returns, depth) = unwrap_lists(&accessor.returns, owner, &accessor.name)?;
    let return_kind = host.kind(returns)?;

    let (mut response, selection) = if return_kind.is_primitive_like() {
        (example::response(return_kind, None), None)
    } else {
        let name = returns.simple_name();
        context.synthesize(operation, name, Origin::Return)?;

        let missing = || Error::MissingExample(operation.name.clone());
        let response = context.example(name).cloned().ok_or_else(missing)?;
        let selection = context.selection(name).ok_or_else(missing)?;

        (response, Some(selection.to_owned()))
    };

    for _ in 0..depth {
        response = Value::Array(vec![response]);
    }

    let mut arguments = Vec::with_capacity(accessor.parameters.len());
    let mut parameters = Vec::with_capacity(accessor.parameters.len());

    for parameter in &accessor.parameters {
        arguments.push(format!(
            "{}: {}",
            parameter.name,
            argument_literal(context, owner, operation, parameter)?
        ));

        let (element, _) = unwrap_lists(&parameter.ty, owner, &parameter.name)?;

        parameters.push(ParameterSummary {
            name: parameter.name.clone(),
            schema_type: operation
                .argument(&parameter.name)
                .map_or_else(|| element.simple_name().to_owned(), |argument| argument.name.clone()),
            example: parameter.doc.example.clone().unwrap_or_default(),
            description: parameter.doc.description.clone().unwrap_or_default(),
            required: parameter.doc.required,
        });
    }

    let example_request = print_request(kind, &operation.name, &arguments, selection.as_deref())?;

    let mut data = Map::new();
    data.insert(operation.name.clone(), response);

    let mut envelope = Map::new();
    envelope.insert("data".to_owned(), Value::Object(data));

    tracing::debug!(operation = %operation.name, accessor = %accessor.name, "assembled operation");

    Ok(OperationRecord {
        description: accessor.description.clone(),
        operation: accessor.operation.clone(),
        name: operation.name.clone(),
        method_name: accessor.name.clone(),
        output_name: returns.simple_name().to_owned(),
        parameters,
        example_request,
        example_response: format!("{:#}", Value::Object(envelope)),
        access_note: accessor
            .access
            .as_deref()
            .and_then(AccessRule::parse)
            .map(|rule| rule.note()),
    })
}

fn argument_literal(
    context: &mut SynthesisContext<'_>,
    owner: &str,
    operation: &OperationDecl,
    parameter: &HostParameter,
) -> Result<String, Error> {
    let (element, depth) = unwrap_lists(&parameter.ty, owner, &parameter.name)?;
    let kind = context.host().kind(element)?;

    let mut literal = if kind.is_primitive_like() {
        example::request(kind, parameter.doc.example())
    } else {
        let name = element.simple_name();
        context.synthesize(operation, name, Origin::Parameter(&parameter.name))?;

        context
            .argument_object(name)
            .ok_or_else(|| Error::MissingExample(operation.name.clone()))?
            .to_owned()
    };

    for _ in 0..depth {
        literal = format!("[{literal}]");
    }

    Ok(literal)
}

/// Composes the request loosely, then parses and prints it so the stored text is in
/// canonical form. The printed text must parse back to itself: the printer mangles some
/// string values (characters outside the basic plane, indented block strings), and such a
/// request is rejected rather than stored.
fn print_request(kind: OperationKind, name: &str, arguments: &[String], selection: Option<&str>) -> Result<String, Error> {
    let arguments = if arguments.is_empty() {
        String::new()
    } else {
        format!("({})", arguments.join(", "))
    };

    let selection = selection
        .map(|selection| format!(" {{\n{selection}\n}}"))
        .unwrap_or_default();

    let text = format!("{kind} {{\n{name}{arguments}{selection}\n}}\n");

    let document = graphql_parser::parse_query::<String>(&text).map_err(|error| Error::SynthesisGrammar {
        group: kind,
        text: text.clone(),
        message: error.to_string(),
    })?;

    let printed = document.to_string();
    let reprinted = graphql_parser::parse_query::<String>(&printed).map(|document| document.to_string());

    match reprinted {
        Ok(reprinted) if reprinted == printed => Ok(printed),
        Ok(_) => Err(Error::SynthesisGrammar {
            group: kind,
            text: printed,
            message: "the printed request does not read back unchanged".to_owned(),
        }),
        Err(error) => Err(Error::SynthesisGrammar {
            group: kind,
            text: printed,
            message: error.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_arguments_or_selection() {
        let printed = print_request(OperationKind::Query, "version", &[], None).unwrap();
        assert_eq!(printed, "query {\n  version\n}\n");
    }

    #[test]
    fn request_with_arguments_and_selection() {
        let printed = print_request(
            OperationKind::Mutation,
            "rename",
            &[r#"id: """#.to_owned(), "names: [\"\"]".to_owned()],
            Some("id\nowner {\nname\n}"),
        )
        .unwrap();

        insta::assert_snapshot!(printed, @r#"
        mutation {
          rename(id: "", names: [""]) {
            id
            owner {
              name
            }
          }
        }
        "#);
    }

    #[test]
    fn printed_request_is_stable() {
        let printed = print_request(OperationKind::Subscription, "ticks", &["every: 1".to_owned()], None).unwrap();
        let reprinted = graphql_parser::parse_query::<String>(&printed).unwrap().to_string();
        assert_eq!(printed, reprinted);
    }

    #[test]
    fn grammar_errors_carry_the_text() {
        let error = print_request(OperationKind::Query, "user", &["id: 1)".to_owned()], None).unwrap_err();

        assert!(matches!(
            error,
            Error::SynthesisGrammar { group: OperationKind::Query, ref text, .. } if text == "query {\nuser(id: 1))\n}\n"
        ));
    }

    fn string_argument(value: &str) -> Vec<String> {
        let literal = example::request(crate::TypeKind::Scalar(crate::Primitive::String), Some(value));
        vec![format!("text: {literal}")]
    }

    #[test]
    fn strings_that_print_lossily_are_rejected() {
        for value in ["emoji 😀", "  indented\n  block"] {
            let error = print_request(OperationKind::Query, "echo", &string_argument(value), None).unwrap_err();

            assert!(
                matches!(error, Error::SynthesisGrammar { group: OperationKind::Query, ref text, .. } if text.contains("echo(text: ")),
                "{value:?}: {error}"
            );
        }
    }

    #[test]
    fn strings_that_print_faithfully_are_kept() {
        for value in ["line one\nline two", "tab\there", "quote \" and backslash \\", "accents éà"] {
            let printed = print_request(OperationKind::Query, "echo", &string_argument(value), None).unwrap();
            assert!(printed.starts_with("query {\n  echo(text: "), "{printed}");
        }
    }
}

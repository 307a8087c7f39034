use crate::ast;
use crate::schema::SchemaView;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::value::print_value;

/// Checks whether the literal `value` is acceptable input for
/// `type_annotation`, returning one message per problem found.
///
/// An empty result means the value is valid. Variables are always accepted
/// here; whether a variable fits its position is checked separately from
/// the variable's declared type. Types unknown to `schema` also produce no
/// messages.
pub fn is_valid_literal_value(
    schema: &dyn SchemaView,
    type_annotation: &TypeAnnotation,
    value: &ast::operation::Value,
) -> Vec<String> {
    use ast::operation::Value;

    match value {
        Value::Variable(_) => return vec![],
        Value::Null if type_annotation.nullable() => return vec![],
        Value::Null => return vec![
            format!("Expected \"{type_annotation}\", found null."),
        ],
        _ => (),
    }

    match type_annotation {
        TypeAnnotation::List(list_annot) => {
            let item_type = list_annot.inner_type_annotation();
            if let Value::List(items) = value {
                items.iter()
                    .enumerate()
                    .flat_map(|(i, item)| {
                        is_valid_literal_value(schema, item_type, item)
                            .into_iter()
                            .map(move |err| format!("In element #{i}: {err}"))
                    })
                    .collect()
            } else {
                // Input coercion treats a lone item as a list of one.
                is_valid_literal_value(schema, item_type, value)
            }
        },

        TypeAnnotation::Named(named_annot) => {
            let Some(graphql_type) = named_annot.graphql_type(schema) else {
                return vec![];
            };

            if let GraphQLType::InputObject(input_obj) = graphql_type {
                let Value::Object(provided_fields) = value else {
                    return vec![format!(
                        "Expected \"{}\", found not an object.",
                        input_obj.name(),
                    )];
                };

                let mut errors = vec![];
                for provided_name in provided_fields.keys() {
                    if input_obj.field(provided_name).is_none() {
                        errors.push(format!("In field \"{provided_name}\": Unknown field."));
                    }
                }
                for (field_name, field_def) in input_obj.fields() {
                    let field_errors = match provided_fields.get(field_name) {
                        Some(field_value) => is_valid_literal_value(
                            schema,
                            field_def.type_annotation(),
                            field_value,
                        ),
                        None if field_def.type_annotation().nullable()
                            || field_def.default_value().is_some() => vec![],
                        None => vec![format!(
                            "Expected \"{}\", found null.",
                            field_def.type_annotation(),
                        )],
                    };
                    errors.extend(field_errors.into_iter().map(
                        |err| format!("In field \"{field_name}\": {err}"),
                    ));
                }
                return errors;
            }

            if is_valid_leaf_literal(graphql_type, value) {
                vec![]
            } else {
                vec![format!(
                    "Expected type \"{}\", found {}.",
                    graphql_type.name(),
                    print_value(value),
                )]
            }
        },
    }
}

fn is_valid_leaf_literal(
    graphql_type: &GraphQLType,
    value: &ast::operation::Value,
) -> bool {
    use ast::operation::Value;
    match (graphql_type, value) {
        (GraphQLType::Bool, Value::Boolean(_))
            => true,
        (GraphQLType::Enum(enum_type), Value::Enum(name))
            => enum_type.value(name).is_some(),
        (GraphQLType::Float, Value::Float(_) | Value::Int(_))
            => true,
        (GraphQLType::ID, Value::Int(_) | Value::String(_))
            => true,
        (GraphQLType::Int, Value::Int(n))
            => n.as_i64().is_some_and(|i| i32::try_from(i).is_ok()),
        (GraphQLType::Scalar(_), _)
            => true,
        (GraphQLType::String, Value::String(_))
            => true,
        // Output-only types are reported by the rules that check where a
        // type may be used.
        (GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_), _)
            => true,
        _ => false,
    }
}

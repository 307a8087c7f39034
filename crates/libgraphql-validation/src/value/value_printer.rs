use crate::ast;

/// Renders a literal value back into GraphQL syntax.
///
/// Object fields are printed in the order the AST stores them (sorted by
/// name), so two literals that differ only in field order print the same.
pub fn print_value(value: &ast::operation::Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &ast::operation::Value) {
    use ast::operation::Value;
    match value {
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Enum(name) => out.push_str(name),
        Value::Float(f) => out.push_str(&f.to_string()),
        Value::Int(n) => match n.as_i64() {
            Some(i) => out.push_str(&i.to_string()),
            None => out.push('0'),
        },
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        },
        Value::Null => out.push_str("null"),
        Value::Object(fields) => {
            out.push('{');
            for (i, (name, field_value)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(name);
                out.push_str(": ");
                write_value(out, field_value);
            }
            out.push('}');
        },
        Value::String(s) => write_string(out, s),
        Value::Variable(name) => {
            out.push('$');
            out.push_str(name);
        },
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
}

use tracing::warn;

use super::ast::{Segment, Template};
use crate::types::{Params, Value};

/// Substitute `params` into a parsed template.
///
/// Placeholder paths resolve their first segment against `params` and the
/// rest through nested objects. Unresolved placeholders render as the empty
/// string. When `escape` is set, values are HTML-escaped unless the
/// placeholder was written `{{- path}}`.
pub fn render(template: &Template, params: &Params, escape: bool) -> String {
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(s) => output.push_str(s),
            Segment::Placeholder { path, raw } => match lookup(params, path) {
                Some(value) => {
                    let text = value.to_string();
                    if escape && !raw {
                        output.push_str(&escape_html(&text));
                    } else {
                        output.push_str(&text);
                    }
                }
                None => warn!(placeholder = %path, "missing interpolation parameter"),
            },
        }
    }
    output
}

fn lookup<'p>(params: &'p Params, path: &str) -> Option<&'p Value> {
    match path.split_once('.') {
        // A flat parameter whose name contains a dot wins over a nested path.
        _ if params.contains_key(path) => params.get(path),
        Some((head, rest)) => params.get(head)?.get_path(rest),
        None => None,
    }
}

/// Escape the characters that are significant in HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '/' => escaped.push_str("&#x2F;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::interpolation::parse_template;

    #[test]
    fn nested_path_resolves_through_objects() {
        let mut user = BTreeMap::new();
        user.insert("name".to_string(), Value::from("Ada"));
        let mut params = Params::new();
        params.insert("user".to_string(), Value::Map(user));

        let t = parse_template("Hi {{user.name}}").unwrap();
        assert_eq!(render(&t, &params, true), "Hi Ada");
    }

    #[test]
    fn dotted_flat_parameter_takes_precedence() {
        let mut params = Params::new();
        params.insert("user.name".to_string(), Value::from("flat"));
        let t = parse_template("{{user.name}}").unwrap();
        assert_eq!(render(&t, &params, true), "flat");
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;&#x2F;a&gt;"
        );
    }
}

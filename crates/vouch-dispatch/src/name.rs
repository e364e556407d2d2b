//! Camel-case method-name tokenizer.
//!
//! Call names split at every uppercase-letter boundary. Two modes exist:
//! fine-grained fragments for method-prefix matching, and `Or`-delimited
//! composition for extracting type names that are themselves multi-word
//! (`nullOrStringInt` must yield `stringInt`, not `string` + `int`).

/// Split a name at uppercase boundaries, preserving each fragment's
/// original case: `arrayXGetString` → `["array", "X", "Get", "String"]`.
pub fn fragments(name: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;

    for (i, c) in name.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push(&name[start..i]);
            start = i;
        }
    }
    if !name.is_empty() {
        out.push(&name[start..]);
    }

    out
}

/// Lowercase the first character of a fragment.
pub fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Fine-grained tokens: every fragment with its first letter lowercased.
pub fn parts(name: &str) -> Vec<String> {
    fragments(name).into_iter().map(lcfirst).collect()
}

/// Delimiter-aware composition: fragments accumulate until the delimiter
/// fragment, each accumulated run yielded as one lower-camel token.
///
/// `composed_parts("nullOrStringInt", "Or")` → `["null", "stringInt"]`.
/// Empty runs (a leading or doubled delimiter) yield empty tokens, which
/// callers reject.
pub fn composed_parts(name: &str, delimiter: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut acc = String::new();

    for frag in fragments(name) {
        if frag == delimiter {
            out.push(lcfirst(&acc));
            acc.clear();
        } else {
            acc.push_str(frag);
        }
    }
    out.push(lcfirst(&acc));

    out
}

/// Re-join a fragment slice into a call name: the first fragment is
/// lowercased, the rest keep their case.
pub fn join_fragments(frags: &[&str]) -> String {
    let mut out = String::new();
    for (i, frag) in frags.iter().enumerate() {
        if i == 0 {
            out.push_str(&lcfirst(frag));
        } else {
            out.push_str(frag);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_split_at_uppercase() {
        assert_eq!(
            fragments("arrayXGetErrorIfNotNullOrInt"),
            vec!["array", "X", "Get", "Error", "If", "Not", "Null", "Or", "Int"]
        );
        assert_eq!(fragments("get"), vec!["get"]);
        assert_eq!(fragments("Get"), vec!["Get"]);
        assert!(fragments("").is_empty());
    }

    #[test]
    fn parts_lowercase_each_fragment() {
        assert_eq!(
            parts("arrayXGetString"),
            vec!["array", "x", "get", "string"]
        );
    }

    #[test]
    fn composed_parts_group_on_the_delimiter() {
        assert_eq!(composed_parts("nullOrInt", "Or"), vec!["null", "int"]);
        assert_eq!(
            composed_parts("nullOrStringInt", "Or"),
            vec!["null", "stringInt"]
        );
        assert_eq!(composed_parts("notIntOrNull", "Or"), vec!["notInt", "null"]);
        assert_eq!(composed_parts("stringInt", "Or"), vec!["stringInt"]);
    }

    #[test]
    fn composed_parts_keep_empty_runs() {
        assert_eq!(composed_parts("nullOr", "Or"), vec!["null", ""]);
        assert_eq!(composed_parts("", "Or"), vec![""]);
    }

    #[test]
    fn join_fragments_restores_a_call_name() {
        let frags = fragments("arrayXGetString");
        assert_eq!(join_fragments(&frags[2..]), "getString");
        assert_eq!(join_fragments(&frags), "arrayXGetString");
    }
}

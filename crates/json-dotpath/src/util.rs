//! Rendering of parsed path steps.

use crate::types::PathStep;

/// Renders steps in canonical dotted form.
///
/// Keys are joined with `.` and consecutive indices share one group, so
/// `[a, b, 1, 0, c]` becomes `a.b[1,0].c`. The output parses back to the
/// same steps unless a key is empty, contains `.` or `[`, or is whitespace
/// only.
pub fn format_path(steps: &[PathStep]) -> String {
    let mut out = String::new();
    let mut in_group = false;
    for step in steps {
        match step {
            PathStep::Key(key) => {
                if in_group {
                    out.push(']');
                    in_group = false;
                }
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            PathStep::Index(index) => {
                out.push(if in_group { ',' } else { '[' });
                in_group = true;
                out.push_str(&index.to_string());
            }
        }
    }
    if in_group {
        out.push(']');
    }
    out
}

/// Renders steps as an RFC 6901 JSON Pointer.
pub fn to_json_pointer(steps: &[PathStep]) -> String {
    let mut out = String::new();
    for step in steps {
        out.push('/');
        match step {
            PathStep::Key(key) => out.push_str(&escape_component(key)),
            PathStep::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}

fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(items: &[PathStep]) -> Vec<PathStep> {
        items.to_vec()
    }

    #[test]
    fn format_merges_consecutive_indices() {
        let path = steps(&[
            "a".into(),
            "b".into(),
            PathStep::Index(1),
            PathStep::Index(0),
            "c".into(),
        ]);
        assert_eq!(format_path(&path), "a.b[1,0].c");
    }

    #[test]
    fn format_edge_shapes() {
        assert_eq!(format_path(&[]), "");
        assert_eq!(format_path(&[PathStep::Index(3)]), "[3]");
        assert_eq!(
            format_path(&[PathStep::Index(0), "x".into(), PathStep::Index(2)]),
            "[0].x[2]"
        );
    }

    #[test]
    fn pointer_escapes_keys() {
        let path = steps(&["a/b".into(), "~k".into(), PathStep::Index(0)]);
        assert_eq!(to_json_pointer(&path), "/a~1b/~0k/0");
        assert_eq!(to_json_pointer(&[]), "");
    }
}

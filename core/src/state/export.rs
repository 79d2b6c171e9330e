//! State tree export utilities
//!
//! Read-only views of a tree for display: an indented text dump, a JSON
//! snapshot for external renderers, and the list of modified leaves.

use serde_json::{Value, json};

use super::path::{PathSegment, StatePath};
use super::property::{GlProperty, ScalarProperty};

/// Options for [`format_tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Annotate modified leaves with their default value
    pub show_defaults: bool,
    /// Print only modified leaves and the groups containing them
    pub changed_only: bool,
    /// Label nodes with display names instead of identifier names
    pub display_names: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            show_defaults: true,
            changed_only: false,
            display_names: false,
        }
    }
}

/// Format a tree as indented text
///
/// Output format:
/// ```text
/// GlStateEs2
///     TransformationState
///         DepthRange
///             DepthRangeNear = 0.0
///             DepthRangeFar = 0.5 (default 1.0)
///     TextureState
///         Textures#0
///             TextureMinFilter = GL_NEAREST
/// ```
pub fn format_tree(root: &GlProperty, options: &ExportOptions) -> String {
    let mut output = String::new();
    let label = label_for(root, None, options);
    format_node(root, &label, 0, options, &mut output);
    output
}

fn label_for(node: &GlProperty, segment: Option<&PathSegment>, options: &ExportOptions) -> String {
    let name = if options.display_names {
        node.state_type().display_name()
    } else {
        node.state_type().name()
    };
    match segment {
        Some(PathSegment::Index(i)) => format!("{}[{}]", name, i),
        Some(PathSegment::Handle(h)) => format!("{}#{}", name, h),
        Some(PathSegment::Field(_)) | None => name.to_string(),
    }
}

fn format_node(
    node: &GlProperty,
    label: &str,
    indent: usize,
    options: &ExportOptions,
    output: &mut String,
) {
    let indent_str = "    ".repeat(indent);

    if let GlProperty::Scalar(leaf) = node {
        if options.changed_only && leaf.is_default() {
            return;
        }
        output.push_str(&format!("{}{} = {}", indent_str, label, leaf.display_value()));
        if options.show_defaults && !leaf.is_default() {
            output.push_str(&format!(" (default {})", leaf.display_default()));
        }
        output.push('\n');
        return;
    }

    // List and sparse elements are labelled by their container
    let mut children = String::new();
    for (segment, child) in node.children() {
        let child_label = match segment {
            PathSegment::Field(_) => label_for(child, None, options),
            PathSegment::Index(_) | PathSegment::Handle(_) => {
                label_for(node, Some(&segment), options)
            }
        };
        format_node(child, &child_label, indent + 1, options, &mut children);
    }

    if options.changed_only && children.is_empty() {
        return;
    }
    output.push_str(&format!("{}{}\n", indent_str, label));
    output.push_str(&children);
}

/// Snapshot of a tree as JSON for an external renderer
///
/// Every node carries `name`, `display_name` and `kind`. Leaves add their
/// formatted `value` and `default`, composites a `children` array, lists an
/// `items` array and sparse arrays an `entries` array of `{handle, node}`.
pub fn to_json(node: &GlProperty) -> Value {
    let state_type = node.state_type();
    let mut object = json!({
        "name": state_type.name(),
        "display_name": state_type.display_name(),
        "kind": node.kind(),
    });

    let extra = match node {
        GlProperty::Scalar(leaf) => json!({
            "type": leaf.value_type().type_name(),
            "value": leaf.display_value(),
            "default": leaf.display_default(),
            "modified": !leaf.is_default(),
        }),
        GlProperty::Composite(p) => json!({
            "children": p.children().iter().map(to_json).collect::<Vec<_>>(),
        }),
        GlProperty::List(p) => json!({
            "items": p.iter().map(to_json).collect::<Vec<_>>(),
        }),
        GlProperty::SparseArray(p) => json!({
            "entries": p
                .iter()
                .map(|(handle, entry)| json!({ "handle": handle, "node": to_json(entry) }))
                .collect::<Vec<_>>(),
        }),
    };

    if let (Value::Object(target), Value::Object(fields)) = (&mut object, extra) {
        target.extend(fields);
    }
    object
}

/// Every leaf whose value differs from its default, in tree order
pub fn changed_values(root: &GlProperty) -> Vec<(StatePath, &ScalarProperty)> {
    let mut changed = Vec::new();
    walk_leaves(root, &mut StatePath::new(), &mut changed);
    changed
}

// `GlProperty::walk` hands out references scoped to the visitor call, so
// collecting borrowed leaves needs its own traversal.
fn walk_leaves<'a>(
    node: &'a GlProperty,
    path: &mut StatePath,
    changed: &mut Vec<(StatePath, &'a ScalarProperty)>,
) {
    if let GlProperty::Scalar(leaf) = node {
        if !leaf.is_default() {
            changed.push((path.clone(), leaf));
        }
        return;
    }
    for (segment, child) in node.children() {
        path.push(segment);
        walk_leaves(child, path, changed);
        path.pop();
    }
}

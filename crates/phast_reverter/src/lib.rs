//! phast_reverter: syntax tree to short approximate text.
//!
//! Turns a parsed node back into a compact, single-line rendering such as
//! `\Foo::BAR` or `[1,'a'=>x]`, for diagnostics and hover text. It is not a
//! pretty printer: whitespace, comments and parentheses are not preserved,
//! and kinds without a renderer come out as a fixed placeholder.
//!
//! Rendering is total. Every node and every scalar produces a string.

pub mod options;
pub mod registry;
mod renderers;
pub mod scalar;

use std::fmt;

use phast_ast::{Node, Value};
use tracing::{debug, trace};

pub use options::{ReverterOptions, DEFAULT_PLACEHOLDER};
pub use registry::{builtin_renderer, RegistryBuilder, RegistryError, RenderFn, RendererRegistry};
pub use scalar::ScalarFormatter;

/// Renders values through a renderer registry.
///
/// Holds no per-call state, so one reverter can be shared across threads.
#[derive(Debug, Clone)]
pub struct Reverter<'r> {
    registry: &'r RendererRegistry,
    options: ReverterOptions,
}

impl Reverter<'static> {
    /// A reverter over the shared standard registry with default options.
    pub fn global() -> Self {
        Self::new(RendererRegistry::global())
    }
}

impl<'r> Reverter<'r> {
    pub fn new(registry: &'r RendererRegistry) -> Self {
        Self {
            registry,
            options: ReverterOptions::default(),
        }
    }

    pub fn with_options(registry: &'r RendererRegistry, options: ReverterOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r RendererRegistry {
        self.registry
    }

    /// Text used for anything that cannot be rendered.
    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.options.placeholder
    }

    /// Render any value: nodes through their renderer, everything else as a literal.
    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Node(node) => self.render_node(node),
            Value::List(slots) => self.render_slot_list(slots),
            scalar => ScalarFormatter::format(scalar).unwrap_or_else(|| self.placeholder().to_string()),
        }
    }

    /// Render a node. Kinds without a renderer give the placeholder.
    pub fn render_node(&self, node: &Node) -> String {
        match self.registry.get(node.kind) {
            Some(render) => render(self, node),
            None => {
                trace!(kind = %node.kind, "no renderer registered, using placeholder");
                self.placeholder().to_string()
            }
        }
    }

    /// Render the child `field` of `node`, or the placeholder if it is absent.
    pub fn render_child(&self, node: &Node, field: &str) -> String {
        match node.child(field) {
            Some(value) => self.render(value),
            None => {
                debug!(kind = %node.kind, field, "missing child, using placeholder");
                self.placeholder().to_string()
            }
        }
    }

    /// Render the child `field` of `node`, which must itself be a node.
    /// Absent fields and scalars give the placeholder.
    pub fn render_child_node(&self, node: &Node, field: &str) -> String {
        match node.child_node(field) {
            Some(child) => self.render_node(child),
            None => {
                debug!(kind = %node.kind, field, "child is not a node, using placeholder");
                self.placeholder().to_string()
            }
        }
    }

    /// A bare slot list: `[a,b]`, empty slots shown as `null`.
    fn render_slot_list(&self, slots: &[Option<Node>]) -> String {
        let parts: Vec<String> = slots
            .iter()
            .map(|slot| match slot {
                Some(node) => self.render_node(node),
                None => ScalarFormatter::null().to_string(),
            })
            .collect();
        format!("[{}]", parts.join(","))
    }
}

/// Render a value with the standard registry.
pub fn to_short_string(value: &Value) -> String {
    Reverter::global().render(value)
}

/// Render a node with the standard registry.
pub fn node_to_short_string(node: &Node) -> String {
    Reverter::global().render_node(node)
}

/// Displays a node or value in its short form, for use inside `format!`.
///
/// ```ignore
/// let message = format!("unexpected {}", ShortString::node(&node));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShortString<'a> {
    target: Target<'a>,
}

#[derive(Debug, Clone, Copy)]
enum Target<'a> {
    Node(&'a Node),
    Value(&'a Value),
}

impl<'a> ShortString<'a> {
    pub fn node(node: &'a Node) -> Self {
        Self { target: Target::Node(node) }
    }

    pub fn value(value: &'a Value) -> Self {
        Self { target: Target::Value(value) }
    }
}

impl fmt::Display for ShortString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.target {
            Target::Node(node) => node_to_short_string(node),
            Target::Value(value) => to_short_string(value),
        };
        f.write_str(&text)
    }
}

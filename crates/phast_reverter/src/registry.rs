//! The kind → renderer table.
//!
//! A registry is assembled once through [`RegistryBuilder`], checked, and then
//! only ever read. The standard table lives in a lazily built global so every
//! caller shares one instance.

use std::fmt;

use once_cell::sync::Lazy;
use phast_ast::{Kind, Node};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::renderers;
use crate::Reverter;

/// Renders one node of the kind it is registered for.
pub type RenderFn = fn(&Reverter<'_>, &Node) -> String;

/// A malformed renderer table. Only raised while a registry is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a renderer for {0} is already registered")]
    Duplicate(Kind),
    #[error("no renderer registered for required kind {0}")]
    Missing(Kind),
}

/// Collects renderers before they are frozen into a [`RendererRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    renderers: FxHashMap<Kind, RenderFn>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the renderer for `kind`. Each kind may be registered once.
    pub fn register(mut self, kind: Kind, render: RenderFn) -> Result<Self, RegistryError> {
        if self.renderers.contains_key(&kind) {
            return Err(RegistryError::Duplicate(kind));
        }
        self.renderers.insert(kind, render);
        Ok(self)
    }

    /// Freeze the table, checking that every kind in `required` has a renderer.
    pub fn build(self, required: &[Kind]) -> Result<RendererRegistry, RegistryError> {
        if let Some(&missing) = required.iter().find(|kind| !self.renderers.contains_key(*kind)) {
            return Err(RegistryError::Missing(missing));
        }
        debug!(kinds = self.renderers.len(), "renderer registry built");
        Ok(RendererRegistry {
            renderers: self.renderers,
        })
    }
}

static GLOBAL: Lazy<RendererRegistry> = Lazy::new(|| {
    // The standard table is fixed at compile time and covered by tests.
    RendererRegistry::standard().expect("standard renderer table is well-formed")
});

/// Immutable kind → renderer table.
pub struct RendererRegistry {
    renderers: FxHashMap<Kind, RenderFn>,
}

impl RendererRegistry {
    /// Kinds the standard table must cover.
    pub const STANDARD_KINDS: &'static [Kind] = &[Kind::Name, Kind::Const, Kind::ClassConst, Kind::Array];

    /// Build the standard table from [`builtin_renderer`].
    pub fn standard() -> Result<Self, RegistryError> {
        Kind::ALL
            .iter()
            .filter_map(|&kind| builtin_renderer(kind).map(|render| (kind, render)))
            .try_fold(RegistryBuilder::new(), |builder, (kind, render)| builder.register(kind, render))?
            .build(Self::STANDARD_KINDS)
    }

    /// The shared standard table, built on first use.
    pub fn global() -> &'static RendererRegistry {
        &GLOBAL
    }

    #[inline]
    pub fn get(&self, kind: Kind) -> Option<RenderFn> {
        self.renderers.get(&kind).copied()
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.renderers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.renderers.keys().copied()
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<Kind> = self.kinds().collect();
        kinds.sort();
        f.debug_struct("RendererRegistry").field("kinds", &kinds).finish()
    }
}

/// The built-in renderer for a kind, if it has one.
pub fn builtin_renderer(kind: Kind) -> Option<RenderFn> {
    match kind {
        Kind::Name => Some(renderers::render_name as RenderFn),
        Kind::Const => Some(renderers::render_const as RenderFn),
        Kind::ClassConst => Some(renderers::render_class_const as RenderFn),
        Kind::Array => Some(renderers::render_array as RenderFn),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_nothing(_: &Reverter<'_>, _: &Node) -> String {
        String::new()
    }

    #[test]
    fn test_standard_registry_covers_standard_kinds() {
        let registry = RendererRegistry::standard().unwrap();
        assert_eq!(registry.len(), RendererRegistry::STANDARD_KINDS.len());
        for &kind in RendererRegistry::STANDARD_KINDS {
            assert!(registry.contains(kind), "{kind} missing");
        }
    }

    #[test]
    fn test_standard_registry_has_nothing_else() {
        let registry = RendererRegistry::global();
        for &kind in Kind::ALL {
            let expected = RendererRegistry::STANDARD_KINDS.contains(&kind);
            assert_eq!(registry.contains(kind), expected, "{kind}");
        }
        assert!(!registry.contains(Kind::Unknown));
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let err = RegistryBuilder::new()
            .register(Kind::Name, render_nothing)
            .and_then(|b| b.register(Kind::Name, render_nothing))
            .err();
        assert_eq!(err, Some(RegistryError::Duplicate(Kind::Name)));
    }

    #[test]
    fn test_missing_registration_is_rejected() {
        let err = RegistryBuilder::new()
            .register(Kind::Name, render_nothing)
            .and_then(|b| b.build(&[Kind::Name, Kind::Array]))
            .err();
        assert_eq!(err, Some(RegistryError::Missing(Kind::Array)));
    }

    #[test]
    fn test_error_messages_name_the_kind() {
        assert_eq!(
            RegistryError::Duplicate(Kind::Const).to_string(),
            "a renderer for AST_CONST is already registered"
        );
        assert_eq!(
            RegistryError::Missing(Kind::Array).to_string(),
            "no renderer registered for required kind AST_ARRAY"
        );
    }

    #[test]
    fn test_debug_lists_sorted_kinds() {
        let registry = RendererRegistry::global();
        assert_eq!(
            format!("{registry:?}"),
            "RendererRegistry { kinds: [Name, Array, Const, ClassConst] }"
        );
    }
}

//! # Schema Registry
//!
//! Holds one [`SchemaDefinition`] per [`Operation`]. The built-in registry is
//! constructed once, on first use, and shared read-only by every caller.
//!
//! ## Thread Safety
//!
//! `SchemaRegistry` is `Send + Sync` and never mutated after construction,
//! so concurrent validation calls need no coordination.

use once_cell::sync::Lazy;

use agency_core::{Operation, SchemaDefinitionError};

use crate::definition::SchemaDefinition;
use crate::schemas;

static BUILT_IN: Lazy<SchemaRegistry> = Lazy::new(|| match SchemaRegistry::build() {
    Ok(registry) => registry,
    // A malformed built-in schema is a build defect, not a runtime condition.
    Err(e) => panic!("built-in schema definition is malformed: {e}"),
});

/// The built-in registry covering every operation.
pub fn global() -> &'static SchemaRegistry {
    &BUILT_IN
}

/// Schema Definitions indexed by operation.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    /// One definition per operation, in [`Operation::all()`] order.
    definitions: Vec<SchemaDefinition>,
}

impl SchemaRegistry {
    /// Construct and check the definition for every operation.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaDefinitionError`] encountered.
    pub fn build() -> Result<Self, SchemaDefinitionError> {
        let definitions = Operation::all()
            .iter()
            .map(|op| schemas::definition(*op))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(operations = definitions.len(), "schema registry built");
        Ok(Self { definitions })
    }

    /// Definition for `operation`.
    pub fn get(&self, operation: Operation) -> &SchemaDefinition {
        &self.definitions[operation.index()]
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Always `false` for a built registry.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Top-level field names declared for `operation`, in declaration order.
    pub fn field_names(&self, operation: Operation) -> Vec<&str> {
        self.get(operation)
            .root()
            .fields()
            .iter()
            .map(|f| f.name())
            .collect()
    }

    /// Iterate over every definition in [`Operation::all()`] order.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaDefinition> {
        self.definitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_core::OPERATION_COUNT;

    #[test]
    fn test_registry_covers_every_operation() {
        let registry = SchemaRegistry::build().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(registry.len(), OPERATION_COUNT);
        for op in Operation::all() {
            assert_eq!(registry.get(*op).operation(), *op);
        }
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(global(), global()));
        assert!(!global().is_empty());
    }

    #[test]
    fn test_field_names_in_declaration_order() {
        assert_eq!(
            global().field_names(Operation::Login),
            vec!["email", "password", "rememberMe"]
        );
        assert_eq!(
            global().field_names(Operation::UpdateSettings),
            vec!["site", "company", "social", "seo", "features"]
        );
    }

    #[test]
    fn test_iter_order_matches_operations() {
        let ops: Vec<Operation> = global().iter().map(|d| d.operation()).collect();
        assert_eq!(ops, Operation::all());
    }
}

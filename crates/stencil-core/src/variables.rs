use crate::document::VarSpec;
use crate::error::{Result, StencilError};

/// One declared placeholder plus its resolution state for the current
/// usage session.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub label: String,
    pub default: Option<String>,
    value: Option<String>,
}

impl Variable {
    /// A variable counts as resolved only once it holds a non-empty value
    pub fn is_resolved(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Resolved value if set, else the declared default, else empty
    pub fn effective_value(&self) -> &str {
        if self.is_resolved() {
            self.value.as_deref().unwrap_or_default()
        } else {
            self.default.as_deref().unwrap_or_default()
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Ordered placeholder declarations for one snippet instance. Declaration
/// order in the document is the resolution order, so this is an explicit
/// list rather than a map.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    vars: Vec<Variable>,
}

impl VariableStore {
    pub fn from_specs(specs: &[VarSpec]) -> Self {
        let vars = specs
            .iter()
            .map(|spec| Variable {
                name: spec.name.clone(),
                label: spec.label.clone(),
                default: spec.default.clone(),
                value: None,
            })
            .collect();

        Self { vars }
    }

    /// First declared variable still missing a non-empty value, if any
    pub fn next_unresolved(&self) -> Option<&Variable> {
        self.vars.iter().find(|var| !var.is_resolved())
    }

    /// Record a value for a declared variable. Assigning to an undeclared
    /// name is a caller bug and reported as a hard error, unlike the
    /// permissive read path.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let var = self
            .vars
            .iter_mut()
            .find(|var| var.name == name)
            .ok_or_else(|| StencilError::UnknownVariable(name.to_string()))?;
        var.value = Some(value.into());
        Ok(())
    }

    /// Effective value by name; undeclared names read as empty so template
    /// references can never fail
    pub fn effective_value(&self, name: &str) -> String {
        self.get(name)
            .map(|var| var.effective_value().to_string())
            .unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.iter().find(|var| var.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Clear every assignment to start a fresh resolution session
    pub fn reset(&mut self) {
        for var in &mut self.vars {
            var.value = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> VariableStore {
        VariableStore::from_specs(&[
            VarSpec {
                name: "first".to_string(),
                label: "First".to_string(),
                default: None,
            },
            VarSpec {
                name: "second".to_string(),
                label: "Second".to_string(),
                default: Some("fallback".to_string()),
            },
        ])
    }

    #[test]
    fn next_unresolved_follows_declaration_order() {
        let mut store = store();
        assert_eq!(store.next_unresolved().unwrap().name, "first");

        store.set_value("first", "one").unwrap();
        assert_eq!(store.next_unresolved().unwrap().name, "second");

        store.set_value("second", "two").unwrap();
        assert!(store.next_unresolved().is_none());
    }

    #[test]
    fn empty_value_does_not_resolve() {
        let mut store = store();
        store.set_value("first", "").unwrap();
        assert_eq!(store.next_unresolved().unwrap().name, "first");
    }

    #[test]
    fn defaults_do_not_satisfy_resolution() {
        let mut store = store();
        store.set_value("first", "one").unwrap();
        // "second" has a default but no value, so it is still pending
        assert_eq!(store.next_unresolved().unwrap().name, "second");
    }

    #[test]
    fn effective_value_prefers_assignment_over_default() {
        let mut store = store();
        assert_eq!(store.effective_value("second"), "fallback");

        store.set_value("second", "explicit").unwrap();
        assert_eq!(store.effective_value("second"), "explicit");
    }

    #[test]
    fn effective_value_empty_without_default() {
        let store = store();
        assert_eq!(store.effective_value("first"), "");
    }

    #[test]
    fn undeclared_name_reads_as_empty() {
        let store = store();
        assert_eq!(store.effective_value("missing"), "");
    }

    #[test]
    fn assigning_undeclared_name_is_an_error() {
        let mut store = store();
        let err = store.set_value("missing", "value").unwrap_err();
        assert!(matches!(err, StencilError::UnknownVariable(name) if name == "missing"));
    }

    #[test]
    fn reset_clears_assignments() {
        let mut store = store();
        store.set_value("first", "one").unwrap();
        store.set_value("second", "two").unwrap();
        assert!(store.next_unresolved().is_none());

        store.reset();
        assert_eq!(store.next_unresolved().unwrap().name, "first");
        assert_eq!(store.effective_value("second"), "fallback");
    }
}

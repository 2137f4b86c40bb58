use std::str::FromStr;

use crate::api::Flag;
use crate::model::Kind;
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The ordered collection of flag declarations.
///
/// Declaration order is preserved; it drives the order of the usage message.
/// Declarations are checked as they are made, so a registry never holds an empty, unreachable, or duplicate name.
///
/// ### Example
/// ```
/// # use flagkind_builder as flagkind;
/// use flagkind::{Kind, Registry};
///
/// let mut registry = Registry::default();
/// registry.declare_typed("width", Kind::Float, "Describes something", true).unwrap();
/// registry.declare_switch("test", "Sets the dry run", false).unwrap();
///
/// assert_eq!(registry.find("width").unwrap().kind(), Kind::Float);
/// assert!(registry.find("test").unwrap().is_switch());
/// assert!(registry.find("height").is_none());
/// assert!(registry.declare_switch("width", "", false).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    flags: Vec<Flag>,
}

impl Registry {
    /// Append a flag declaration.
    pub fn declare(&mut self, flag: Flag) -> Result<(), ConfigError> {
        let name = flag.name();

        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        if name.starts_with('-') || name.ends_with('-') {
            return Err(ConfigError::UnreachableName(name.to_string()));
        }

        if self.find(name).is_some() {
            return Err(ConfigError::DuplicateFlag(name.to_string()));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Declared {flag:?}.");
        }

        self.flags.push(flag);
        Ok(())
    }

    /// Append a typed flag declaration.
    pub fn declare_typed(
        &mut self,
        name: impl Into<String>,
        kind: Kind,
        description: impl Into<String>,
        required: bool,
    ) -> Result<(), ConfigError> {
        self.declare(
            Flag::typed(name, kind)
                .description(description)
                .with_required(required),
        )
    }

    /// Append a typed flag declaration, with the kind given by its label (ex: `"Float"`).
    pub fn declare_labelled(
        &mut self,
        name: impl Into<String>,
        label: &str,
        description: impl Into<String>,
        required: bool,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        let kind = Kind::from_str(label).map_err(|error| ConfigError::UnsupportedKind {
            name: name.clone(),
            label: error.0,
        })?;
        self.declare_typed(name, kind, description, required)
    }

    /// Append a switch flag declaration.
    pub fn declare_switch(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Result<(), ConfigError> {
        self.declare(
            Flag::switch(name)
                .description(description)
                .with_required(required),
        )
    }

    /// Find the first declaration with `name`.
    pub fn find(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.name() == name)
    }

    /// Iterate the declarations in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.flags.iter()
    }

    /// The number of declarations.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn declare_order() {
        // Setup
        let mut registry = Registry::default();

        // Execute
        registry
            .declare_typed("width", Kind::Float, "abc", true)
            .unwrap();
        registry.declare_switch("test", "", false).unwrap();
        registry
            .declare_typed("height", Kind::String, "", false)
            .unwrap();

        // Verify
        let names: Vec<&str> = registry.iter().map(Flag::name).collect();
        assert_eq!(names, vec!["width", "test", "height"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());

        let width = registry.find("width").unwrap();
        assert_eq!(width.kind(), Kind::Float);
        assert!(width.is_required());
        assert!(!width.is_switch());
        assert_eq!(width.get_description(), Some("abc"));

        let test = registry.find("test").unwrap();
        assert!(test.is_switch());
        assert!(!test.is_required());
        assert_eq!(test.get_description(), None);
    }

    #[test]
    fn find_missing() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.find("width"), None);
        assert_eq!(registry.find(""), None);
    }

    #[rstest]
    #[case(Flag::typed("width", Kind::Integer))]
    #[case(Flag::switch("width"))]
    fn declare_duplicate(#[case] duplicate: Flag) {
        // Setup
        let mut registry = Registry::default();
        registry
            .declare_typed("width", Kind::Float, "", false)
            .unwrap();

        // Execute
        let error = registry.declare(duplicate).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::DuplicateFlag(name) => {
            assert_eq!(name, "width");
        });
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find("width").unwrap().kind(), Kind::Float);
    }

    #[test]
    fn declare_empty() {
        let mut registry = Registry::default();
        let error = registry.declare_switch("", "", false).unwrap_err();
        assert_matches!(error, ConfigError::EmptyName);
        assert!(registry.is_empty());
    }

    #[rstest]
    #[case("-")]
    #[case("--width")]
    #[case("width-")]
    #[case("-width-")]
    fn declare_unreachable(#[case] name: &str) {
        let mut registry = Registry::default();
        let error = registry
            .declare_typed(name, Kind::String, "", false)
            .unwrap_err();
        assert_matches!(error, ConfigError::UnreachableName(n) => {
            assert_eq!(n, name);
        });
        assert!(registry.is_empty());
    }

    #[rstest]
    #[case("dry-run")]
    #[case("a-b-c")]
    fn declare_inner_dashes(#[case] name: &str) {
        let mut registry = Registry::default();
        registry.declare_switch(name, "", false).unwrap();
        assert!(registry.find(name).is_some());
    }

    #[rstest]
    #[case("Int", Kind::Integer)]
    #[case("Float", Kind::Float)]
    #[case("Char", Kind::Character)]
    fn declare_labelled(#[case] label: &str, #[case] expected: Kind) {
        let mut registry = Registry::default();
        registry
            .declare_labelled("value", label, "", false)
            .unwrap();
        assert_eq!(registry.find("value").unwrap().kind(), expected);
    }

    #[test]
    fn declare_labelled_unsupported() {
        let mut registry = Registry::default();
        let error = registry
            .declare_labelled("value", "Double", "", false)
            .unwrap_err();
        assert_matches!(error, ConfigError::UnsupportedKind { name, label } => {
            assert_eq!(name, "value");
            assert_eq!(label, "Double");
        });
        assert!(registry.is_empty());
    }
}

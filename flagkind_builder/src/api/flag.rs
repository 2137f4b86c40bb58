use crate::model::Kind;

/// A flag declaration.
///
/// Flags come in two classes:
/// * *typed* flags consume the following Cli token, converting it into their [`Kind`].
/// * *switch* flags consume no value; when present they capture `true`.
///
/// ### Example
/// ```
/// # use flagkind_builder as flagkind;
/// use flagkind::{Flag, Kind};
///
/// let width = Flag::typed("width", Kind::Float)
///     .description("The width of the box.")
///     .required();
/// let dry_run = Flag::switch("dry-run").description("Don't actually do anything.");
///
/// assert!(width.is_required());
/// assert!(dry_run.is_switch());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: String,
    kind: Kind,
    required: bool,
    switch: bool,
    description: Option<String>,
}

impl Flag {
    /// Create a typed flag, which takes a single value of `kind`.
    pub fn typed(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            switch: false,
            description: None,
        }
    }

    /// Create a switch flag, which takes no value.
    pub fn switch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            // Never used for conversion.
            kind: Kind::Boolean,
            required: false,
            switch: true,
            description: None,
        }
    }

    /// Document the flag in the usage message.
    /// An empty description is not shown.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Mark the flag as required: parsing fails when it is not present on the Cli.
    pub fn required(self) -> Self {
        self.with_required(true)
    }

    pub(crate) fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// The name of the flag, as matched on the Cli (without dashes).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of value this flag converts to.
    /// Always [`Kind::Boolean`] for a switch.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether the flag must be present on the Cli.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the flag is a switch.
    pub fn is_switch(&self) -> bool {
        self.switch
    }

    /// The usage description, if any.
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

use thiserror::Error;

use crate::api::Registry;
use crate::model::{Kind, ParsedFlags, Value};
use crate::parser::convert::convert;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the configuration of the command line parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A flag was declared with an empty name.
    #[error("Config error: flag names cannot be empty.")]
    EmptyName,

    /// A flag was declared with a name that can never be matched on the Cli.
    #[error("Config error: flag '{0}' cannot start or end with '-'.")]
    UnreachableName(String),

    /// A flag name was declared more than once.
    #[error("Config error: cannot duplicate the flag '{0}'.")]
    DuplicateFlag(String),

    /// A flag was declared with a kind label that does not name a [`Kind`].
    #[error("Config error: flag '{name}' has unsupported kind '{label}'.")]
    UnsupportedKind {
        /// The flag name.
        name: String,
        /// The unrecognized label.
        label: String,
    },
}

/// An error in the Cli input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A typed flag was the final token, without a value.
    #[error("Argument {name} requires a value of type {kind}.")]
    MissingValue {
        /// The flag name.
        name: String,
        /// The kind of value expected.
        kind: Kind,
    },

    /// A typed flag's value could not be converted into its kind.
    #[error("The value \"{token}\" of argument {name} could not be parsed as {kind}.")]
    InvalidConversion {
        /// The flag name.
        name: String,
        /// The offending value token.
        token: String,
        /// The kind of value expected.
        kind: Kind,
    },

    /// A required flag was not present.
    #[error("Required argument {name} was not provided.")]
    MissingRequired {
        /// The flag name.
        name: String,
    },
}

impl ParseError {
    /// The name of the offending flag.
    pub fn name(&self) -> &str {
        match self {
            ParseError::MissingValue { name, .. }
            | ParseError::InvalidConversion { name, .. }
            | ParseError::MissingRequired { name } => name,
        }
    }
}

pub(crate) struct Parser {
    registry: Registry,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl Parser {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Registry::default())
    }

    pub(crate) fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn consume(&self, tokens: &[&str]) -> Result<ParsedFlags, ParseError> {
        let mut parsed = ParsedFlags::default();
        let mut token_iter = tokens.iter();

        // 1. Scan the tokens, capturing the flags they name.
        while let Some(token) = token_iter.next() {
            let candidate = token.trim_matches('-');
            let flag = match self.registry.find(candidate) {
                Some(flag) => flag,
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Skipping unknown token '{token}'.");
                    }

                    continue;
                }
            };

            if flag.is_switch() {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched switch '{}'.", flag.name());
                }

                parsed.insert(flag.name(), Value::Boolean(true));
                continue;
            }

            // 2. Typed flags take the next token, whatever it looks like.
            let value_token = token_iter.next().ok_or_else(|| ParseError::MissingValue {
                name: flag.name().to_string(),
                kind: flag.kind(),
            })?;
            let value =
                convert(flag.kind(), value_token).map_err(|error| ParseError::InvalidConversion {
                    name: flag.name().to_string(),
                    token: error.token,
                    kind: error.kind,
                })?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched '{}' with value {value:?}.", flag.name());
            }

            parsed.insert(flag.name(), value);
        }

        // 3. Only once all tokens are scanned, check the required flags.
        for flag in self.registry.iter() {
            if flag.is_required() && !parsed.contains(flag.name()) {
                return Err(ParseError::MissingRequired {
                    name: flag.name().to_string(),
                });
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsed {} flag(s).", parsed.len());
        }

        Ok(parsed)
    }
}

use crate::api::{Flag, Registry};
use crate::model::Kind;
use crate::parser::{ConfigError, ConsoleInterface, GeneralParser, UserInterface};

/// The base command line parser.
///
/// ### Example
/// ```
/// # use flagkind_builder as flagkind;
/// use flagkind::{CommandLineParser, Kind};
///
/// let parser = CommandLineParser::new("program")
///     .typed("width", Kind::Float, "Describes something something something", true)
///     .switch("test", "Sets the dry run", false)
///     .typed("height", Kind::String, "", false)
///     .build();
///
/// let parsed = parser.parse_tokens(&["--width", "3.5", "--test"]).unwrap();
/// assert_eq!(parsed.float("width"), Some(3.5));
/// assert_eq!(parsed.boolean("test"), Some(true));
/// assert!(!parsed.contains("height"));
/// ```
pub struct CommandLineParser {
    program: String,
    registry: Registry,
    deferred_error: Option<ConfigError>,
}

impl CommandLineParser {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use flagkind_builder as flagkind;
    /// use flagkind::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            registry: Registry::default(),
            deferred_error: None,
        }
    }

    /// Add a flag to the command line parser.
    ///
    /// The order of flags corresponds to their order in the usage message.
    /// The order does not affect the command parser semantics.
    ///
    /// ### Example
    /// ```
    /// # use flagkind_builder as flagkind;
    /// use flagkind::{CommandLineParser, Flag, Kind};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(Flag::typed("count", Kind::Integer).required())
    ///     .add(Flag::switch("verbose").description("Print more."))
    ///     .build();
    ///
    /// let parsed = parser.parse_tokens(vec!["-verbose", "-count", "12"].as_slice()).unwrap();
    ///
    /// assert_eq!(parsed.integer("count"), Some(12));
    /// assert_eq!(parsed.boolean("verbose"), Some(true));
    /// ```
    pub fn add(mut self, flag: Flag) -> Self {
        let result = self.registry.declare(flag);
        self.defer(result)
    }

    /// Add a typed flag, which converts its value into the `kind`.
    /// An empty `description` is not shown in the usage message.
    pub fn typed(
        self,
        name: impl Into<String>,
        kind: Kind,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.add(
            Flag::typed(name, kind)
                .description(description)
                .with_required(required),
        )
    }

    /// Add a typed flag, with the kind given by its label (ex: `"Float"`).
    ///
    /// ### Example
    /// ```
    /// # use flagkind_builder as flagkind;
    /// use flagkind::{CommandLineParser, ConfigError};
    ///
    /// let error = CommandLineParser::new("program")
    ///     .typed_labelled("width", "Double", "", false)
    ///     .build_parser()
    ///     .unwrap_err();
    ///
    /// assert_eq!(
    ///     error,
    ///     ConfigError::UnsupportedKind {
    ///         name: "width".to_string(),
    ///         label: "Double".to_string(),
    ///     }
    /// );
    /// ```
    pub fn typed_labelled(
        mut self,
        name: impl Into<String>,
        label: &str,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        let result = self
            .registry
            .declare_labelled(name, label, description, required);
        self.defer(result)
    }

    /// Add a switch flag, which captures `true` when present.
    /// An empty `description` is not shown in the usage message.
    pub fn switch(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.add(
            Flag::switch(name)
                .description(description)
                .with_required(required),
        )
    }

    /// Find the flag declared with `name`.
    pub fn find(&self, name: &str) -> Option<&Flag> {
        self.registry.find(name)
    }

    // Only the first configuration error is kept.
    fn defer(mut self, result: Result<(), ConfigError>) -> Self {
        if let Err(error) = result {
            if self.deferred_error.is_none() {
                self.deferred_error.replace(error);
            }
        }

        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser, ConfigError> {
        if let Some(error) = self.deferred_error {
            return Err(error);
        }

        Ok(GeneralParser::new(
            self.program,
            self.registry,
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated flag name).
    pub fn build_parser(self) -> Result<GeneralParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated flag name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a command line parser which displays nothing, for use in testing.
    ///
    /// ### Example
    /// ```
    /// # use flagkind_builder as flagkind;
    /// use flagkind::{CommandLineParser, Kind};
    ///
    /// // Function under test.
    /// // We want to make sure the flags are declared correctly.
    /// pub fn setup(parser: CommandLineParser) -> CommandLineParser {
    ///     parser.typed("count", Kind::Integer, "", true)
    /// }
    ///
    /// let parser = setup(CommandLineParser::new("test-dummy")).build_silent().unwrap();
    /// assert_eq!(parser.parse_tokens(vec!["--count", "2"].as_slice()).unwrap().integer("count"), Some(2));
    /// assert_eq!(parser.parse_tokens(vec![].as_slice()).unwrap_err(), 1);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn build_silent(self) -> Result<GeneralParser, ConfigError> {
        self.build_with_interface(Box::new(crate::parser::SilentInterface::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::channel_interface;
    use crate::parser::ParseError;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn empty_build() {
        // Setup
        let clp = CommandLineParser::new("program");

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        assert_eq!(parser.program(), "program");
        assert!(parser.registry().is_empty());
        assert!(parser.parse_tokens(&[]).unwrap().is_empty());
    }

    #[rstest]
    #[case(vec!["--width", "3.5", "--test"], Some(3.5), Some(true), None)]
    #[case(vec!["--width", "3.5", "--height", "tall"], Some(3.5), None, Some("tall"))]
    #[case(vec!["-height", "tall", "-width", "0"], Some(0.0), None, Some("tall"))]
    #[case(vec!["--bogus", "--width", "1", "extra"], Some(1.0), None, None)]
    fn build(
        #[case] tokens: Vec<&str>,
        #[case] expected_width: Option<f64>,
        #[case] expected_test: Option<bool>,
        #[case] expected_height: Option<&str>,
    ) {
        // Setup
        let clp = CommandLineParser::new("program")
            .typed("width", Kind::Float, "abc def", true)
            .switch("test", "", false)
            .add(Flag::typed("height", Kind::String));

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        // We testing that build sets up the right parser.
        // So the verification involves invoking the parser with the various permutations.
        let parsed = parser.try_parse_tokens(tokens.as_slice()).unwrap();
        assert_eq!(parsed.float("width"), expected_width);
        assert_eq!(parsed.boolean("test"), expected_test);
        assert_eq!(parsed.string("height"), expected_height);
    }

    #[test]
    fn find() {
        let clp = CommandLineParser::new("program")
            .typed_labelled("count", "Int", "", false)
            .switch("test", "", false);

        assert_eq!(clp.find("count").unwrap().kind(), Kind::Integer);
        assert!(clp.find("test").unwrap().is_switch());
        assert_eq!(clp.find("--test"), None);
    }

    #[rstest]
    #[case(
        CommandLineParser::new("program").switch("a", "", false).switch("a", "", false),
        ConfigError::DuplicateFlag("a".to_string())
    )]
    #[case(
        CommandLineParser::new("program").typed("a", Kind::Integer, "", false).switch("a", "", false),
        ConfigError::DuplicateFlag("a".to_string())
    )]
    #[case(
        CommandLineParser::new("program").switch("", "", false),
        ConfigError::EmptyName
    )]
    #[case(
        CommandLineParser::new("program").switch("--a", "", false),
        ConfigError::UnreachableName("--a".to_string())
    )]
    #[case(
        CommandLineParser::new("program").typed_labelled("a", "Long", "", false),
        ConfigError::UnsupportedKind { name: "a".to_string(), label: "Long".to_string() }
    )]
    // Only the first error is reported.
    #[case(
        CommandLineParser::new("program").switch("", "", false).switch("a", "", false).switch("a", "", false),
        ConfigError::EmptyName
    )]
    fn build_config_error(#[case] clp: CommandLineParser, #[case] expected: ConfigError) {
        let error = clp.build_parser().err().unwrap();
        assert_eq!(error, expected);
    }

    #[test]
    fn config_error_message() {
        let error = CommandLineParser::new("program")
            .switch("a", "", false)
            .add(Flag::switch("a"))
            .build_parser()
            .err()
            .unwrap();

        assert_eq!(error.to_string(), "Config error: cannot duplicate the flag 'a'.");
    }

    #[test]
    fn build_usage() {
        // Setup
        let clp = CommandLineParser::new("program")
            .typed("width", Kind::Float, "Describes something something something", true)
            .switch("test", "", false)
            .typed("height", Kind::String, "", false);
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();

        // Verify
        // We testing that build sets up the right parser.
        // So the verification involves invoking the parser with a failure and spot-checking the output.
        let error_code = parser.parse_tokens(&["--test"]).unwrap_err();
        assert_eq!(error_code, 1);
        assert_eq!(
            parser.try_parse_tokens(&["--test"]).unwrap_err(),
            ParseError::MissingRequired {
                name: "width".to_string()
            }
        );
        drop(parser);

        let (message, error) = receiver.consume();
        assert_eq!(
            error,
            Some("Required argument width was not provided.".to_string())
        );
        let message = message.unwrap();
        assert_contains!(message, "Usage:\nprogram \\\n");
        assert_contains!(
            message,
            "  --width <value: Float> (Describes something something something) \\\n"
        );
        assert_contains!(message, "  --test \\\n");
        assert!(message.ends_with("  --height <value: String>"));
    }

    #[test]
    fn build_success_silent() {
        // Setup
        let clp = CommandLineParser::new("program").typed("width", Kind::Float, "", true);
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();
        let parsed = parser.parse_tokens(&["--width", "2.5"]).unwrap();
        drop(parser);

        // Verify
        assert_eq!(parsed.float("width"), Some(2.5));
        let message = receiver.consume().0;
        assert_eq!(message, None);
    }
}

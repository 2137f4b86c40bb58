use std::env;

use crate::api::Registry;
use crate::model::ParsedFlags;
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

/// The configured command line parser.
/// Built via `CommandLineParser::build` or `CommandLineParser::build_parser`.
pub struct GeneralParser {
    program: String,
    parser: Parser,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for GeneralParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.program)
            .field("registry", self.parser.registry())
            .finish()
    }
}

impl GeneralParser {
    pub(crate) fn new(
        program: impl Into<String>,
        registry: Registry,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        let program = program.into();
        let printer = Printer::new(program.clone(), &registry);

        Self {
            program,
            parser: Parser::new(registry),
            printer,
            user_interface,
        }
    }

    /// The program name shown in the usage message.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The flag declarations of this parser.
    pub fn registry(&self) -> &Registry {
        self.parser.registry()
    }

    /// Render the usage message.
    ///
    /// ### Example
    /// ```
    /// # use flagkind_builder as flagkind;
    /// use flagkind::{CommandLineParser, Kind};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .typed("width", Kind::Float, "The width.", true)
    ///     .switch("test", "", false)
    ///     .build();
    ///
    /// assert_eq!(
    ///     parser.usage(),
    ///     "Usage:\nprogram \\\n  --width <value: Float> (The width.) \\\n  --test\n"
    /// );
    /// ```
    pub fn usage(&self) -> String {
        let mut usage = self.printer.render().join("\n");
        usage.push('\n');
        usage
    }

    /// Run the command line parser against the input tokens, without any output.
    ///
    /// Each token that names a declared flag (after stripping any leading/trailing `-`) is captured:
    /// * A switch captures `true`.
    /// * A typed flag converts the following token into its kind.
    ///
    /// Tokens that do not name a declared flag are ignored.
    /// Once all tokens are scanned, every required flag must have been captured.
    ///
    /// ### Example
    /// ```
    /// # use flagkind_builder as flagkind;
    /// use flagkind::{CommandLineParser, Kind, ParseError};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .typed("width", Kind::Float, "", true)
    ///     .build();
    ///
    /// let parsed = parser.try_parse_tokens(&["--width", "3.5"]).unwrap();
    /// assert_eq!(parsed.float("width"), Some(3.5));
    ///
    /// let error = parser.try_parse_tokens(&["--width", "abc"]).unwrap_err();
    /// assert_eq!(error.name(), "width");
    /// ```
    pub fn try_parse_tokens(&self, tokens: &[&str]) -> Result<ParsedFlags, ParseError> {
        self.parser.consume(tokens)
    }

    /// Run the command line parser against the input tokens.
    ///
    /// Parses as per [`GeneralParser::try_parse_tokens`].
    /// If an error is encountered, the diagnostic and the usage message are displayed, and returns with `Err(1)`.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<ParsedFlags, i32> {
        match self.try_parse_tokens(tokens) {
            Ok(parsed) => Ok(parsed),
            Err(parse_error) => {
                self.user_interface.print_error(parse_error);
                self.user_interface.print("".to_string());
                self.printer.print_usage(&*self.user_interface);
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`] (excluding the program).
    ///
    /// Parses as per [`GeneralParser::parse_tokens`].
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(&self) -> ParsedFlags {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(parsed) => parsed,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

use crate::parser::base::ParseError;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

/// Writes everything (including diagnostics) to standard output.
#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        println!("{error}");
    }
}

/// Discards everything.
#[cfg(any(test, feature = "unit_test"))]
#[derive(Default)]
pub(crate) struct SilentInterface {}

#[cfg(any(test, feature = "unit_test"))]
impl UserInterface for SilentInterface {
    fn print(&self, _message: String) {
        // Do nothing.
    }

    fn print_error(&self, _error: ParseError) {
        // Do nothing.
    }
}

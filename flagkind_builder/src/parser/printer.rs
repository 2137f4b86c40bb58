use crate::api::{Flag, Registry};
use crate::model::Kind;
use crate::parser::interface::UserInterface;

const USAGE_HEADER: &str = "Usage:";
const INDENT: &str = "  ";
const CONTINUATION: &str = " \\";

pub(crate) struct FlagParameter {
    name: String,
    // `None` for a switch.
    kind: Option<Kind>,
    description: Option<String>,
}

impl From<&Flag> for FlagParameter {
    fn from(value: &Flag) -> Self {
        FlagParameter {
            name: value.name().to_string(),
            kind: if value.is_switch() {
                None
            } else {
                Some(value.kind())
            },
            description: value.get_description().map(str::to_string),
        }
    }
}

impl FlagParameter {
    fn grammar(&self) -> String {
        match &self.kind {
            Some(kind) => format!("--{n} <value: {kind}>", n = self.name),
            None => format!("--{n}", n = self.name),
        }
    }
}

pub(crate) struct Printer {
    program: String,
    flags: Vec<FlagParameter>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program", &Registry::default())
    }

    pub(crate) fn new(program: impl Into<String>, registry: &Registry) -> Self {
        Self {
            program: program.into(),
            flags: registry.iter().map(FlagParameter::from).collect(),
        }
    }

    /// Render the usage message, one line per flag in declaration order.
    /// Each line is the flag grammar, then ` (description)` if any, then the ` \` continuation (except on the last line).
    pub(crate) fn render(&self) -> Vec<String> {
        let mut lines = vec![USAGE_HEADER.to_string()];

        if self.flags.is_empty() {
            lines.push(self.program.clone());
            return lines;
        }

        lines.push(format!("{p}{CONTINUATION}", p = self.program));

        for (i, flag) in self.flags.iter().enumerate() {
            let mut line = format!("{INDENT}{g}", g = flag.grammar());

            if let Some(description) = &flag.description {
                line.push_str(format!(" ({description})").as_str());
            }

            if i + 1 < self.flags.len() {
                line.push_str(CONTINUATION);
            }

            lines.push(line);
        }

        lines
    }

    pub(crate) fn print_usage(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.render() {
            user_interface.print(line);
        }
    }
}

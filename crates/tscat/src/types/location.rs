use serde::Serialize;

/// A `<location>` reference from a message to the code that uses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Source file, relative to the `.ts` file.
    pub filename: Option<String>,

    /// Line number within `filename`. Qt also writes relative offsets such as
    /// `+3`; those are kept verbatim.
    pub line: Option<String>,
}

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// Translation state of a catalog entry.
///
/// Only [`Status::Finished`] entries are ever served. Unfinished entries fall
/// back to their source text and vanished entries are kept for tooling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// A translation that may be shown to users.
    #[default]
    Finished,

    /// A message whose translation has not been completed.
    Unfinished,

    /// A superseded message whose source no longer exists in the program.
    Vanished,
}

impl Status {
    /// Parse the `type` attribute of a `<translation>` element.
    ///
    /// Qt 4 wrote `obsolete` for what later versions call `vanished`. Returns
    /// `None` for values Qt does not define.
    pub fn from_type_attribute(value: &str) -> Option<Status> {
        match value {
            "" => Some(Status::Finished),
            "unfinished" => Some(Status::Unfinished),
            "vanished" | "obsolete" => Some(Status::Vanished),
            _ => None,
        }
    }

    /// The `type` attribute written for this status, if any.
    pub fn type_attribute(self) -> Option<&'static str> {
        match self {
            Status::Finished => None,
            Status::Unfinished => Some("unfinished"),
            Status::Vanished => Some("vanished"),
        }
    }

    pub fn is_finished(self) -> bool {
        self == Status::Finished
    }

    pub fn is_vanished(self) -> bool {
        self == Status::Vanished
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Status::Finished => "finished",
            Status::Unfinished => "unfinished",
            Status::Vanished => "vanished",
        };
        f.write_str(name)
    }
}

use derive_more::Display;

use crate::ValidationError;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient message for the user. `Display` gives the text to show.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Notification {
    #[display("Please fill the form!")]
    ValidationFailed,
    #[display("We could not find the images you requested =(")]
    NoResults,
    #[display("Something went wrong, please reload website!")]
    FetchFailed,
    #[display("We found {total_hits} images=)")]
    Found { total_hits: u32 },
    #[display(
        "These are all our images for this category=) Try to search something else!"
    )]
    AllLoaded,
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Self::ValidationFailed | Self::NoResults | Self::FetchFailed => {
                Severity::Error
            }
            Self::Found { .. } | Self::AllLoaded => Severity::Success,
        }
    }
}

impl From<ValidationError> for Notification {
    fn from(_: ValidationError) -> Self {
        Self::ValidationFailed
    }
}

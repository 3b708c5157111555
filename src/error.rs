use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Everything that can go wrong while showing a toast.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// The formatter failed while writing the script. Field contents are never
/// rejected, so this only surfaces on an internal formatting error.
#[derive(Debug, Error)]
#[error("Failed to render toast script")]
pub struct RenderError(#[from] core::fmt::Error);

/// The interpreter could not be launched or reported failure.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Returned when a name does not match any variant of an option set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

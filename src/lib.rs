//! Windows toast notifications, shown by handing toast XML to PowerShell.
//!
//! ```no_run
//! use wintoast::{Audio, Notification};
//!
//! Notification::new()
//!     .title("Build")
//!     .message("Done")
//!     .audio(Audio::Default)
//!     .send()?;
//! # Ok::<(), wintoast::Error>(())
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::str_to_string)]
#![warn(clippy::unused_trait_names)]

pub mod dispatch;
pub mod error;
pub mod render;
pub mod toast;

pub use dispatch::{Interpreter, PowerShell};
pub use error::{DispatchError, Error, ParseEnumError, RenderError};
pub use toast::{Action, ActivationType, Audio, Duration, Notification, Scenario};

use std::borrow::Cow;
use std::process::{Command, Stdio};

use crate::error::DispatchError;

/// Runs a rendered toast script to completion.
pub trait Interpreter {
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the interpreter cannot be launched or
    /// exits unsuccessfully.
    fn run(&self, script: &str) -> Result<(), DispatchError>;
}

/// Windows PowerShell, started without a console window.
pub struct PowerShell {
    program: Cow<'static, str>,
}

impl PowerShell {
    pub const PROGRAM: &'static str = "PowerShell";

    /// Use another executable, e.g. `pwsh`.
    #[must_use]
    pub fn with_program(program: impl Into<Cow<'static, str>>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for PowerShell {
    fn default() -> Self {
        Self::with_program(Self::PROGRAM)
    }
}

impl Interpreter for PowerShell {
    fn run(&self, script: &str) -> Result<(), DispatchError> {
        let mut command = Command::new(&*self.program);
        command
            .arg("-Command")
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        hide_window(&mut command);

        log::info!("Showing toast through {}", self.program);

        let status = command.status().map_err(|source| DispatchError::Spawn {
            program: self.program.to_string(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(DispatchError::Failed {
                program: self.program.to_string(),
                status,
            })
        }
    }
}

#[cfg(windows)]
fn hide_window(command: &mut Command) {
    use std::os::windows::process::CommandExt as _;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    command.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_window(_command: &mut Command) {}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;
    use crate::render;
    use crate::toast::{Action, Notification};

    #[derive(Default)]
    struct Recorder {
        scripts: RefCell<Vec<String>>,
    }

    impl Interpreter for Recorder {
        fn run(&self, script: &str) -> Result<(), DispatchError> {
            self.scripts.borrow_mut().push(script.to_owned());
            Ok(())
        }
    }

    struct Unlaunchable;

    impl Interpreter for Unlaunchable {
        fn run(&self, _script: &str) -> Result<(), DispatchError> {
            Err(DispatchError::Spawn {
                program: "nope".to_owned(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
        }
    }

    #[test]
    fn send_runs_defaulted_script_once() {
        let recorder = Recorder::default();
        let n = Notification::new()
            .title("Build")
            .action(Action::new("Open", "open"));

        let mut expected = n.clone();
        expected.apply_defaults();
        let expected = render::script(&expected).expect("render");

        n.send_with(&recorder).expect("send");

        assert_eq!(*recorder.scripts.borrow(), [expected]);
    }

    #[test]
    fn dispatch_error_is_surfaced() {
        let err = Notification::new()
            .send_with(&Unlaunchable)
            .expect_err("dispatch must fail");

        assert!(matches!(err, Error::Dispatch(DispatchError::Spawn { .. })));
    }

    #[test]
    fn missing_interpreter_is_a_spawn_error() {
        let shell = PowerShell::with_program("wintoast-no-such-interpreter");
        let err = shell.run("exit 0").expect_err("spawn must fail");

        assert!(matches!(err, DispatchError::Spawn { ref program, .. } if program == "wintoast-no-such-interpreter"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_failure() {
        let err = PowerShell::with_program("false")
            .run("exit 1")
            .expect_err("false exits non-zero");

        assert!(matches!(err, DispatchError::Failed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        PowerShell::with_program("true")
            .run("exit 0")
            .expect("true exits zero");
    }

    #[test]
    fn defaults_to_powershell() {
        assert_eq!(PowerShell::default().program(), "PowerShell");
    }
}

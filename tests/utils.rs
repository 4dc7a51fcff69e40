use cra_setup::error::{Error, Result};
use cra_setup::process::{CommandRunner, CommandSpec, CommandStatus, PackageManager};
use std::cell::RefCell;
use std::fs;
use std::io;

/// Placeholder the fake generator leaves in `src/App.js`.
pub const GENERATED_APP: &str = "// generated by the project generator\n";

/// Stands in for the generator and the package manager.
///
/// Commands naming a package manager are installs; anything else is the
/// generator, which creates `<cwd>/<name>/src/App.js` when it succeeds. A
/// generator call without a working directory creates nothing.
#[derive(Default)]
pub struct FakeCommands {
    generator_code: i32,
    install_code: i32,
    install_unspawnable: bool,
    calls: RefCell<Vec<CommandSpec>>,
}

impl FakeCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator_code(mut self, code: i32) -> Self {
        self.generator_code = code;
        self
    }

    pub fn with_install_code(mut self, code: i32) -> Self {
        self.install_code = code;
        self
    }

    /// Makes the package manager behave as if it were not installed.
    pub fn with_unspawnable_install(mut self) -> Self {
        self.install_unspawnable = true;
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    fn is_install(spec: &CommandSpec) -> bool {
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm]
            .iter()
            .any(|manager| manager.program() == spec.program)
    }
}

impl CommandRunner for FakeCommands {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus> {
        self.calls.borrow_mut().push(spec.clone());

        if Self::is_install(spec) {
            if self.install_unspawnable {
                return Err(Error::CommandSpawnFailed {
                    program: spec.program.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "not found"),
                });
            }
            return Ok(CommandStatus::from_code(self.install_code));
        }

        if self.generator_code == 0 {
            if let Some(cwd) = &spec.cwd {
                let src = cwd.join(&spec.args[0]).join("src");
                fs::create_dir_all(&src)?;
                fs::write(src.join("App.js"), GENERATED_APP)?;
            }
        }
        Ok(CommandStatus::from_code(self.generator_code))
    }
}

use clap::ValueEnum;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Error, Result};

/// An external program invocation. No shell is involved.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` inherits the current one.
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: None }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir<P: AsRef<Path>>(mut self, cwd: P) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        if let Some(cwd) = &self.cwd {
            write!(f, " (in {})", cwd.display())?;
        }
        Ok(())
    }
}

/// How an external command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for CommandStatus {
    fn from(status: ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

impl Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs external commands to completion.
pub trait CommandRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandStatus>;
}

/// Spawns real processes, inheriting stdio so the user sees their output.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus> {
        log::info!("Running {spec}");

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(cwd) = &spec.cwd {
            command.current_dir(cwd);
        }

        let mut child = command.spawn().map_err(|source| Error::CommandSpawnFailed {
            program: spec.program.clone(),
            source,
        })?;

        let status = CommandStatus::from(child.wait()?);
        log::debug!("{} finished with {status}", spec.program);
        Ok(status)
    }
}

/// Logs commands instead of running them.
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus> {
        println!("[DRY RUN] Would run: {spec}");
        Ok(CommandStatus::from_code(0))
    }
}

/// Package manager used to add the selected libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Arguments preceding the package names.
    pub fn add_args(self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install", "--save"],
            PackageManager::Yarn | PackageManager::Pnpm => &["add"],
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// `<generator> <name>`, run from the directory the project is created in.
pub fn generator_command<P: AsRef<Path>>(
    generator: &str,
    base_dir: P,
    project_name: &str,
) -> CommandSpec {
    CommandSpec::new(generator).arg(project_name).current_dir(base_dir)
}

/// One package-manager invocation adding every package, run inside the project.
pub fn install_command<P: AsRef<Path>>(
    manager: PackageManager,
    target_dir: P,
    packages: &[String],
) -> CommandSpec {
    CommandSpec::new(manager.program())
        .args(manager.add_args().iter().copied())
        .args(packages.iter().cloned())
        .current_dir(target_dir)
}

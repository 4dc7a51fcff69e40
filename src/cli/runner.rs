use crate::{
    cli::Args,
    config::Answers,
    constants::STDIN_INDICATOR,
    context::ProjectContext,
    error::{Error, Result},
    ioutils::read_from,
    process::{
        generator_command, install_command, CommandRunner, DryRunRunner, PackageManager,
        SystemRunner,
    },
    prompt::{collect_answers, ConfirmationPrompter, DialoguerPrompter},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    template::{write_templates, TemplateSet},
};
use std::cell::Cell;
use std::fmt::Display;
use std::path::PathBuf;

/// Pipeline stages, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Generating,
    Failed,
    Configuring,
    Installing,
    Writing,
    Done,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Idle => "idle",
            Stage::Generating => "generating",
            Stage::Failed => "failed",
            Stage::Configuring => "configuring",
            Stage::Installing => "installing",
            Stage::Writing => "writing",
            Stage::Done => "done",
        };
        write!(f, "{s}")
    }
}

/// Everything that shapes a run besides the project name.
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    pub generator: String,
    pub package_manager: PackageManager,
    /// Answers known before prompting.
    pub preset: Option<Answers>,
    pub non_interactive: bool,
    pub dry_run: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            generator: crate::constants::DEFAULT_GENERATOR.to_string(),
            package_manager: PackageManager::default(),
            preset: None,
            non_interactive: false,
            dry_run: false,
        }
    }
}

/// What a completed run did.
#[derive(Debug)]
pub struct RunSummary {
    pub context: ProjectContext,
    pub answers: Answers,
    /// Packages handed to the package manager; empty when nothing was selected.
    pub packages: Vec<String>,
    /// Set when installation failed. Installation failures are not fatal.
    pub install_error: Option<Error>,
    pub written: Vec<PathBuf>,
}

/// Runs generation, configuration, installation and template writing in order.
pub struct Runner<'a> {
    base_dir: PathBuf,
    options: RunnerOptions,
    prompter: &'a dyn ConfirmationPrompter,
    commands: &'a dyn CommandRunner,
    renderer: &'a dyn TemplateRenderer,
    templates: TemplateSet,
    stage: Cell<Stage>,
}

impl<'a> Runner<'a> {
    pub fn new(
        base_dir: PathBuf,
        options: RunnerOptions,
        prompter: &'a dyn ConfirmationPrompter,
        commands: &'a dyn CommandRunner,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self {
            base_dir,
            options,
            prompter,
            commands,
            renderer,
            templates: TemplateSet::bundled(),
            stage: Cell::new(Stage::Idle),
        }
    }

    /// Replaces the bundled template set.
    pub fn with_templates(mut self, templates: TemplateSet) -> Self {
        self.templates = templates;
        self
    }

    /// Executes the complete pipeline for `project_name`.
    pub fn run(&self, project_name: Option<&str>) -> Result<RunSummary> {
        self.enter(Stage::Idle);

        let Some(project_name) = project_name.map(str::trim).filter(|name| !name.is_empty())
        else {
            return self.fail(Error::MissingArgument);
        };
        let ctx = ProjectContext::new(project_name, &self.base_dir);

        self.enter(Stage::Generating);
        if let Err(e) = self.generate(&ctx) {
            return self.fail(e);
        }

        self.enter(Stage::Configuring);
        let answers = match collect_answers(
            self.prompter,
            self.options.preset.clone(),
            self.options.non_interactive,
        ) {
            Ok(answers) => answers,
            Err(e) => return self.fail(e),
        };

        self.enter(Stage::Installing);
        let packages = answers.packages();
        let install_error = self.install(&ctx, &packages).err();

        self.enter(Stage::Writing);
        let written = match self.write(&ctx, &answers) {
            Ok(written) => written,
            Err(e) => return self.fail(e),
        };

        self.enter(Stage::Done);
        Ok(RunSummary { context: ctx, answers, packages, install_error, written })
    }

    /// Stage the last run reached; `Failed` if it stopped on an error.
    pub fn stage(&self) -> Stage {
        self.stage.get()
    }

    fn enter(&self, stage: Stage) {
        log::debug!("Entering stage: {stage}");
        self.stage.set(stage);
    }

    fn fail<T>(&self, err: Error) -> Result<T> {
        log::debug!("Stopping after stage {}: {err}", self.stage());
        self.enter(Stage::Failed);
        Err(err)
    }

    /// Runs the generator. Anything but a zero exit status is a failure.
    fn generate(&self, ctx: &ProjectContext) -> Result<()> {
        let command =
            generator_command(&self.options.generator, &self.base_dir, ctx.project_name());
        let status = self.commands.run(&command)?;
        if !status.success() {
            return Err(Error::GenerationFailed { status });
        }
        println!("Project '{}' created in {}.", ctx.project_name(), ctx.target_dir().display());
        Ok(())
    }

    /// Installs the selected packages with a single package-manager call.
    ///
    /// Failures are logged and handed back for the summary only.
    fn install(&self, ctx: &ProjectContext, packages: &[String]) -> Result<()> {
        if packages.is_empty() {
            log::info!("No additional packages selected");
            return Ok(());
        }

        let command = install_command(self.options.package_manager, ctx.target_dir(), packages);
        let result = self.commands.run(&command).and_then(|status| {
            if status.success() {
                Ok(())
            } else {
                Err(Error::InstallFailed { status })
            }
        });

        match &result {
            Ok(()) => println!("Installed {}.", packages.join(" ")),
            Err(e) => log::warn!("{e}; continuing with template files"),
        }
        result
    }

    /// Writes every template; failures surface only after all writes finished.
    fn write(&self, ctx: &ProjectContext, answers: &Answers) -> Result<Vec<PathBuf>> {
        let report = write_templates(
            &self.templates,
            self.renderer,
            ctx,
            answers,
            self.options.dry_run,
        )?;
        let written = report.into_result()?;
        println!("Updated {} files in {}.", written.len(), ctx.source_dir().display());
        Ok(written)
    }
}

/// Reads preset answers from a JSON string, or from stdin for `-`.
fn load_answers(source: &str) -> Result<Answers> {
    let buf = if source == STDIN_INDICATOR {
        read_from(std::io::stdin())?
    } else {
        source.to_string()
    };
    Answers::from_json(&buf)
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let preset = args.answers.as_deref().map(load_answers).transpose()?;
    let options = RunnerOptions {
        generator: args.generator,
        package_manager: args.package_manager,
        preset,
        non_interactive: args.non_interactive,
        dry_run: args.dry_run,
    };

    let base_dir = std::env::current_dir()?;
    let prompter = DialoguerPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let commands: Box<dyn CommandRunner> =
        if options.dry_run { Box::new(DryRunRunner) } else { Box::new(SystemRunner) };

    let runner = Runner::new(base_dir, options, &prompter, commands.as_ref(), &renderer);
    let summary = runner.run(args.project_name.as_deref())?;

    println!(
        "Project {} is ready in {}.",
        summary.context.project_name(),
        summary.context.target_dir().display()
    );
    Ok(())
}

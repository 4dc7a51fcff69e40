use cra_setup::cli::{Runner, RunnerOptions, Stage};
use cra_setup::config::{Answers, Feature};
use cra_setup::context::ProjectContext;
use cra_setup::error::{Error, Result};
use cra_setup::process::{DryRunRunner, PackageManager};
use cra_setup::prompt::{ConfirmationConfig, ConfirmationPrompter, PresetPrompter};
use cra_setup::renderer::{MiniJinjaRenderer, TemplateRenderer};
use cra_setup::template::{writer::template_context, TemplateSet};
use std::fs;
use std::io;
use std::path::PathBuf;
use test_log::test;

mod utils;
use utils::{FakeCommands, GENERATED_APP};

fn preset(json: &str) -> RunnerOptions {
    RunnerOptions { preset: Some(Answers::from_json(json).unwrap()), ..Default::default() }
}

#[test]
fn missing_name_spawns_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new();
    let prompter = PresetPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let runner = Runner::new(
        dir.path().to_path_buf(),
        RunnerOptions::default(),
        &prompter,
        &commands,
        &renderer,
    );

    assert!(matches!(runner.run(None), Err(Error::MissingArgument)));
    assert!(matches!(runner.run(Some("   ")), Err(Error::MissingArgument)));
    assert!(commands.calls().is_empty());
    assert!(prompter.asked().is_empty());
    assert_eq!(runner.stage(), Stage::Failed);
}

#[test]
fn generator_receives_only_the_name() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new();
    let prompter = PresetPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let runner = Runner::new(
        dir.path().to_path_buf(),
        RunnerOptions::default(),
        &prompter,
        &commands,
        &renderer,
    );

    runner.run(Some("my-app")).unwrap();

    let calls = commands.calls();
    assert_eq!(calls[0].program, "create-react-app");
    assert_eq!(calls[0].args, vec!["my-app".to_string()]);
    assert_eq!(calls[0].cwd, Some(dir.path().to_path_buf()));
    assert!(dir.path().join("my-app/src/index.js").exists());
    assert_eq!(runner.stage(), Stage::Done);
}

#[test]
fn generation_failure_stops_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new().with_generator_code(1);
    let prompter = PresetPrompter::new().with_fallback(true);
    let renderer = MiniJinjaRenderer::new();
    let runner = Runner::new(
        dir.path().to_path_buf(),
        RunnerOptions::default(),
        &prompter,
        &commands,
        &renderer,
    );

    let err = runner.run(Some("demo")).unwrap_err();
    assert!(matches!(err, Error::GenerationFailed { status } if status.code == Some(1)));
    assert_eq!(commands.calls().len(), 1);
    assert!(prompter.asked().is_empty());
    assert!(!dir.path().join("demo").exists());
    assert_eq!(runner.stage(), Stage::Failed);
}

#[test]
fn demo_scenario_installs_redux_and_router_only() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new();
    let prompter = PresetPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let options = preset(
        r#"{"useRedux":"y","useThunk":"n","useTypescript":"n","useReactRouter":"y"}"#,
    );
    let runner =
        Runner::new(dir.path().to_path_buf(), options, &prompter, &commands, &renderer);

    let summary = runner.run(Some("demo")).unwrap();

    assert_eq!(
        summary.packages,
        vec!["redux", "react-redux", "react-router", "react-router-dom"]
    );
    assert!(summary.install_error.is_none());
    assert!(prompter.asked().is_empty());

    let calls = commands.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].program, "npm");
    assert_eq!(
        calls[1].args,
        vec!["install", "--save", "redux", "react-redux", "react-router", "react-router-dom"]
    );
    assert_eq!(calls[1].cwd, Some(dir.path().join("demo")));

    let ctx = ProjectContext::new("demo", dir.path());
    let context = template_context(&ctx, &summary.answers).unwrap();
    for (file, source) in TemplateSet::bundled().iter() {
        let path = dir.path().join("demo").join("src").join(file);
        let expected = renderer.render(source, &context, Some(file)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), expected, "{file}");
    }

    let app = fs::read_to_string(dir.path().join("demo/src/App.js")).unwrap();
    assert_ne!(app, GENERATED_APP);
    assert!(app.contains("react-router-dom"));
    assert_eq!(summary.written.len(), 3);
}

#[test]
fn answers_not_affirmative_exclude_their_packages() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new();
    let prompter = PresetPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let options = preset(
        r#"{"useRedux":"n","useThunk":"no","useTypescript":"N","useReactRouter":false}"#,
    );
    let runner =
        Runner::new(dir.path().to_path_buf(), options, &prompter, &commands, &renderer);

    let summary = runner.run(Some("demo")).unwrap();

    assert!(summary.packages.is_empty());
    assert_eq!(commands.calls().len(), 1, "no install without packages");
}

#[test]
fn interactive_answers_drive_installation() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new();
    let prompter = PresetPrompter::new()
        .with_response(Feature::TypeScript.prompt(), true)
        .with_response(Feature::Thunk.prompt(), true);
    let renderer = MiniJinjaRenderer::new();
    let options =
        RunnerOptions { package_manager: PackageManager::Yarn, ..Default::default() };
    let runner =
        Runner::new(dir.path().to_path_buf(), options, &prompter, &commands, &renderer);

    let summary = runner.run(Some("typed")).unwrap();

    let prompts: Vec<String> = Feature::ALL.iter().map(|f| f.prompt().to_string()).collect();
    assert_eq!(prompter.asked(), prompts);

    let mut expected = vec!["add".to_string(), "redux-thunk".to_string()];
    expected.extend(Feature::TypeScript.packages().iter().map(|p| p.to_string()));
    let calls = commands.calls();
    assert_eq!(calls[1].program, "yarn");
    assert_eq!(calls[1].args, expected);
    assert_eq!(summary.packages, vec!["redux-thunk", "typescript"]);
}

#[test]
fn install_failure_still_writes_templates() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new().with_install_code(1);
    let prompter = PresetPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let runner = Runner::new(
        dir.path().to_path_buf(),
        preset(r#"{"useRedux":"y"}"#),
        &prompter,
        &commands,
        &renderer,
    );

    let summary = runner.run(Some("demo")).unwrap();

    assert!(matches!(summary.install_error, Some(Error::InstallFailed { .. })));
    for (file, _) in TemplateSet::bundled().iter() {
        assert!(dir.path().join("demo/src").join(file).exists(), "{file}");
    }
}

#[test]
fn failed_template_write_does_not_stop_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new();
    let prompter = PresetPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let templates = TemplateSet::new([
        ("App.js", "// {{ project_name }}\n"),
        ("components/Header.js", "// header\n"),
        ("index.js", "// index\n"),
    ]);
    let runner = Runner::new(
        dir.path().to_path_buf(),
        RunnerOptions::default(),
        &prompter,
        &commands,
        &renderer,
    )
    .with_templates(templates);

    let err = runner.run(Some("demo")).unwrap_err();

    match err {
        Error::TemplateWriteFailed(failures) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].file, "components/Header.js");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(runner.stage(), Stage::Failed);
    let src: PathBuf = dir.path().join("demo").join("src");
    assert_eq!(fs::read_to_string(src.join("App.js")).unwrap(), "// demo\n");
    assert_eq!(fs::read_to_string(src.join("index.js")).unwrap(), "// index\n");
}

#[test]
fn dry_run_leaves_the_filesystem_alone() {
    let dir = tempfile::tempdir().unwrap();
    let prompter = PresetPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let options = RunnerOptions {
        dry_run: true,
        ..preset(r#"{"useRedux":"y","useThunk":"y","useTypescript":"y","useReactRouter":"y"}"#)
    };
    let runner =
        Runner::new(dir.path().to_path_buf(), options, &prompter, &DryRunRunner, &renderer);

    let summary = runner.run(Some("demo")).unwrap();

    assert_eq!(summary.packages.len(), 6);
    assert!(!dir.path().join("demo").exists());
    assert_eq!(runner.stage(), Stage::Done);
}

#[test]
fn unspawnable_package_manager_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new().with_unspawnable_install();
    let prompter = PresetPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let runner = Runner::new(
        dir.path().to_path_buf(),
        preset(r#"{"useTypescript":"y"}"#),
        &prompter,
        &commands,
        &renderer,
    );

    let summary = runner.run(Some("demo")).unwrap();

    assert!(matches!(
        summary.install_error,
        Some(Error::CommandSpawnFailed { ref program, .. }) if program == "npm"
    ));
    assert_eq!(summary.written.len(), 3);
    for (file, _) in TemplateSet::bundled().iter() {
        assert!(dir.path().join("demo/src").join(file).exists(), "{file}");
    }
    assert_eq!(runner.stage(), Stage::Done);
}

/// Prompter whose terminal went away.
struct ClosedTerminal;

impl ConfirmationPrompter for ClosedTerminal {
    fn prompt_confirmation(&self, _config: &ConfirmationConfig) -> Result<bool> {
        Err(Error::IoError(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")))
    }
}

#[test]
fn prompt_error_ends_in_failed_stage() {
    let dir = tempfile::tempdir().unwrap();
    let commands = FakeCommands::new();
    let renderer = MiniJinjaRenderer::new();
    let runner = Runner::new(
        dir.path().to_path_buf(),
        RunnerOptions::default(),
        &ClosedTerminal,
        &commands,
        &renderer,
    );

    assert!(matches!(runner.run(Some("demo")), Err(Error::IoError(_))));
    assert_eq!(runner.stage(), Stage::Failed);
    assert_eq!(commands.calls().len(), 1, "only the generator ran");
}

#[cfg(unix)]
#[test]
fn real_generator_runs_in_the_base_directory() {
    use cra_setup::process::SystemRunner;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let tools = tempfile::tempdir().unwrap();
    let generator = tools.path().join("fake-generator");
    fs::write(&generator, "#!/bin/sh\nmkdir -p \"$1/src\"\n").unwrap();
    fs::set_permissions(&generator, fs::Permissions::from_mode(0o755)).unwrap();

    let prompter = PresetPrompter::new();
    let renderer = MiniJinjaRenderer::new();
    let options = RunnerOptions {
        generator: generator.display().to_string(),
        non_interactive: true,
        ..Default::default()
    };
    let runner =
        Runner::new(dir.path().to_path_buf(), options, &prompter, &SystemRunner, &renderer);

    let summary = runner.run(Some("real-app")).unwrap();

    assert!(summary.packages.is_empty());
    for (file, _) in TemplateSet::bundled().iter() {
        assert!(dir.path().join("real-app/src").join(file).exists(), "{file}");
    }
}

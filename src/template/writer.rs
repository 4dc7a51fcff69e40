use super::TemplateSet;
use crate::{
    config::Answers,
    context::ProjectContext,
    error::{Error, Result, TemplateWriteFailure},
    ioutils::overwrite_file,
    renderer::TemplateRenderer,
};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

/// Variables visible to every template.
#[derive(Serialize)]
struct TemplateContext<'a> {
    project_name: &'a str,
    #[serde(flatten)]
    features: serde_json::Map<String, serde_json::Value>,
}

pub fn template_context(ctx: &ProjectContext, answers: &Answers) -> Result<serde_json::Value> {
    let context =
        TemplateContext { project_name: ctx.project_name(), features: answers.to_json() };
    Ok(serde_json::to_value(context)?)
}

/// Outcome of the template step once every write has finished.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Files written (or, in dry-run mode, that would have been written).
    pub written: Vec<PathBuf>,
    pub failures: Vec<TemplateWriteFailure>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turns collected failures into a single error.
    pub fn into_result(self) -> Result<Vec<PathBuf>> {
        if self.failures.is_empty() {
            Ok(self.written)
        } else {
            Err(Error::TemplateWriteFailed(self.failures))
        }
    }
}

/// Renders and writes every template to `<target>/src/<file>` in parallel.
///
/// A failing file is logged and recorded; it never stops the other writes.
pub fn write_templates(
    templates: &TemplateSet,
    renderer: &dyn TemplateRenderer,
    ctx: &ProjectContext,
    answers: &Answers,
    dry_run: bool,
) -> Result<WriteReport> {
    let context = template_context(ctx, answers)?;
    let source_dir = ctx.source_dir();
    let entries: Vec<(&str, &str)> = templates.iter().collect();

    let results: Vec<std::result::Result<PathBuf, TemplateWriteFailure>> = entries
        .par_iter()
        .map(|&(file, source)| {
            let dest = source_dir.join(file);
            let outcome = renderer
                .render(source, &context, Some(file))
                .and_then(|content| {
                    if dry_run {
                        println!("[DRY RUN] Would write '{}'", dest.display());
                        Ok(())
                    } else {
                        overwrite_file(&content, &dest)
                    }
                });

            match outcome {
                Ok(()) => {
                    log::debug!("Wrote '{}'", dest.display());
                    Ok(dest)
                }
                Err(e) => {
                    log::error!("Failed to write '{}': {e}", dest.display());
                    Err(TemplateWriteFailure { file: file.to_string(), reason: e.to_string() })
                }
            }
        })
        .collect();

    let mut report = WriteReport::default();
    for result in results {
        match result {
            Ok(path) => report.written.push(path),
            Err(failure) => report.failures.push(failure),
        }
    }
    Ok(report)
}

//! `enigma doctor`: Report which development tools are installed.

use tracing::instrument;

use enigma_adapters::PathToolLocator;
use enigma_core::{application::EnvironmentService, domain::EnvironmentReport};

use crate::{
    cli::{DoctorArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: DoctorArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let include_optional = args.optional || config.doctor.include_optional;

    let spinner = output.spinner("Checking development tools...");
    let result = EnvironmentService::new(Box::new(PathToolLocator::new())).check(include_optional);
    spinner.finish_and_clear();
    let report = result?;

    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|source| CliError::Serialization { source })?;
        println!("{json}");
    } else if !output.is_quiet() {
        render(&report, &output)?;
    }

    if report.is_ready() {
        return Ok(());
    }

    let missing: Vec<_> = report.missing_required().collect();
    Err(CliError::ToolsMissing {
        tools: missing.iter().map(|t| t.program.to_owned()).collect(),
        hints: missing
            .iter()
            .filter_map(|t| t.install_hint.clone())
            .collect(),
    })
}

fn render(report: &EnvironmentReport, output: &OutputManager) -> CliResult<()> {
    let profile = &report.profile;
    output.header(&format!("Environment: {} ({})", profile.os, profile.arch))?;
    match profile.package_manager {
        Some(pm) => output.info(&format!("Package manager: {pm}"))?,
        None => output.warning("No supported package manager found")?,
    }
    output.print("")?;

    for tool in &report.tools {
        match (&tool.found, &tool.install_hint) {
            (Some(path), _) => {
                output.success(&format!("{:<16} {}", tool.program, path.display()))?
            }
            (None, hint) => {
                let hint = hint.as_deref().unwrap_or("");
                let line = format!("{:<16} missing ({}); {hint}", tool.program, tool.purpose);
                if tool.required {
                    output.error(&line)?;
                } else {
                    output.warning(&line)?;
                }
            }
        }
    }

    output.print("")?;
    output.print(&format!(
        "{}/{} tools found",
        report.found_count(),
        report.tools.len()
    ))?;
    Ok(())
}

use querygen::config::{write_config, QuerygenConfig};
use querygen::materializer::DEFAULT_OUTPUT_DIR;
use querygen::output::{emit_success, OutputMode};
use querygen::ui::{self, ArtifactProgress, Icons};
use querygen::{Category, Language, Project, QuerySource};
use serde_json::json;
use std::path::Path;
use std::time::Instant;

pub fn run_generate(project: &Project, output_mode: OutputMode, quiet: bool) -> anyhow::Result<()> {
    let human = output_mode.is_human() && !quiet;
    if human {
        ui::header("Materializing query packs");
        ui::info("Output", &project.root().display().to_string());
        ui::info(
            "Catalog",
            &format!(
                "{} languages x {} categories",
                project.languages.len(),
                project.categories.len()
            ),
        );
    }

    let start = Instant::now();
    let mut progress = if human {
        ArtifactProgress::new(project.artifact_count())
    } else {
        ArtifactProgress::hidden()
    };

    let report = match project.materialize(&mut progress) {
        Ok(report) => report,
        Err(e) => {
            progress.abandon();
            return Err(e.into());
        }
    };

    if human {
        progress.finish_with_summary(start.elapsed(), report.languages, report.artifacts.len());
        ui::section("Coverage");
        println!("{}", ui::coverage_table(&report));
        ui::summary_row("Overrides:", &report.count(QuerySource::Override).to_string());
        ui::summary_row("Placeholders:", &report.count(QuerySource::Placeholder).to_string());
        ui::summary_row("Digest:", &ui::dim(&report.digest));
        println!();
        ui::success(&format!(
            "Done generating queries for {} languages.",
            report.languages
        ));
    }

    emit_success(output_mode, "generate", &report)
}

pub fn run_list(project: &Project, output_mode: OutputMode) -> anyhow::Result<()> {
    let resolver = project.resolver();
    if output_mode.is_human() {
        ui::section(&format!("{} Resolution", Icons::STATS));
        println!(
            "{}",
            ui::resolution_table(&resolver, &project.languages, &project.categories)
        );
        ui::legend();
        return Ok(());
    }

    let resolved: Vec<_> = project
        .languages
        .iter()
        .flat_map(|language| resolver.resolve_language(language))
        .map(|r| {
            json!({
                "language": r.language,
                "category": r.category,
                "source": r.source,
            })
        })
        .collect();
    emit_success(output_mode, "list", resolved)
}

pub fn run_show(
    project: &Project,
    output_mode: OutputMode,
    language: &str,
    category: &str,
) -> anyhow::Result<()> {
    let language = Language::new(language);
    let category = Category::new(category);
    if !project.languages.contains(&language) || !project.categories.contains(&category) {
        tracing::warn!("{}/{} is outside the catalog; no artifact is written for it", language, category);
    }

    let resolved = project.resolver().resolve(&language, &category);
    if output_mode.is_human() {
        println!("{}", resolved.expression);
        return Ok(());
    }
    emit_success(output_mode, "show", &resolved)
}

pub fn run_init(path: &Path, force: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let config = QuerygenConfig {
        output: Some(DEFAULT_OUTPUT_DIR.to_string()),
        ..QuerygenConfig::default()
    };
    write_config(path, &config, force)?;

    if output_mode.is_human() {
        ui::success(&format!("Wrote {}", path.display()));
        ui::info("Use it with", &format!("querygen --config {}", path.display()));
        return Ok(());
    }
    emit_success(output_mode, "init", json!({ "path": path }))
}

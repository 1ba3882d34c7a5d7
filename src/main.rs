use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug, info};
use std::path::{Path, PathBuf};
use version_updater::{
    arguments::{Arguments, GitMode, SupportedTypes},
    git::GitTracker,
    incrementer::{self, BatchSummary},
    projects::{
        ProjectKind, ProjectRef, cargo_toml::CargoToml, csproj::Csproj, package_json::PackageJson,
    },
};

/// A discovered project together with its current version and the writer for
/// its manifest kind.
struct Selection {
    project: ProjectRef,
    version: String,
    apply: fn(&Path, &str) -> Result<()>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let path: &Path = args.path.as_ref();

    let mut selections: Vec<Selection> = vec![];
    match args.supported_types {
        SupportedTypes::All => {
            collect_projects::<CargoToml>(path, &mut selections)?;
            collect_projects::<PackageJson>(path, &mut selections)?;
            collect_projects::<Csproj>(path, &mut selections)?;
        }
        SupportedTypes::Cargo => collect_projects::<CargoToml>(path, &mut selections)?,
        SupportedTypes::PackageJson => collect_projects::<PackageJson>(path, &mut selections)?,
        SupportedTypes::Csproj => collect_projects::<Csproj>(path, &mut selections)?,
    }

    let summary = incrementer::update_batch(
        selections
            .iter()
            .map(|selection| (selection.project.name.as_str(), selection.version.as_str())),
    );

    // Write back each successful result; results line up with selections by
    // input order.
    let mut updated_files: Vec<PathBuf> = vec![];
    if !args.dry_run {
        for (selection, result) in selections.iter().zip(&summary.results) {
            if let Some(new_version) = &result.updated {
                (selection.apply)(&selection.project.manifest, new_version)?;
                updated_files.push(selection.project.manifest.clone());
            }
        }
    }

    info!("{}", summary.headline());
    for line in &summary.lines {
        info!("{}", line);
    }
    if args.dry_run {
        info!("Dry run - no files were written");
    }

    if args.git_mode != GitMode::None && !args.dry_run {
        let git = GitTracker::open(path)?;
        git.execute_git_mode(args.git_mode, &commit_message(&summary), &updated_files)?;
    }

    Ok(())
}

fn collect_projects<P: ProjectKind>(path: &Path, selections: &mut Vec<Selection>) -> Result<()> {
    for project in P::discover(path)? {
        // A manifest without a version property still enters the batch; an
        // empty version is not incrementable and counts as a skipped project.
        let version = match P::read_version(&project.manifest) {
            Ok(version) => version,
            Err(error) => {
                debug!("No usable version in '{}': {}", project.manifest.display(), error);
                String::new()
            }
        };
        selections.push(Selection {
            project,
            version,
            apply: |manifest, new_version| P::write_version(manifest, new_version),
        });
    }
    Ok(())
}

fn commit_message(summary: &BatchSummary) -> String {
    format!(
        "chore: bump project versions ({})\n\n{}",
        summary.headline(),
        summary.lines.join("\n")
    )
}

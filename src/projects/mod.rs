use anyhow::Result;
use log::{debug, info};
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod cargo_toml;
pub mod csproj;
pub mod package_json;

#[derive(Debug, Error)]
enum ProjectError {
    #[error("No version property found in: {0}")]
    NoVersionProperty(String),
}

/// A project discovered on disk: a display name plus the manifest that holds
/// its version property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub name: String,
    pub manifest: PathBuf,
}

pub trait ProjectKind {
    fn discover(path: impl AsRef<Path>) -> Result<Vec<ProjectRef>> {
        debug!("Scanning for project manifests");
        let mut projects: Vec<ProjectRef> = vec![];
        let filename_regex = Self::filename_match_regex()?;

        for item in walkdir::WalkDir::new(path.as_ref()) {
            let item = item?;
            let path = item.path();
            if filename_regex.is_match(path.to_string_lossy().as_ref()) {
                projects.push(ProjectRef {
                    name: Self::project_name(path),
                    manifest: path.to_path_buf(),
                });
            }
        }

        debug!("Found projects: {:?}", projects);
        Ok(projects)
    }

    fn read_version(manifest: impl AsRef<Path>) -> Result<String> {
        let manifest = manifest.as_ref();
        let contents = std::fs::read_to_string(manifest)?;
        let version_regex = Self::version_match_regex()?;

        if let Some(captures) = version_regex.captures(contents.as_str()) {
            if let Some(version) = captures.get(2) {
                let version = version.as_str();
                debug!("Found version '{}' in '{}'", version, manifest.display());
                return Ok(version.to_string());
            }
        }

        Err(ProjectError::NoVersionProperty(manifest.to_string_lossy().to_string()).into())
    }

    /// Rewrites the first version property match with `new_version`. The rest
    /// of the file is left untouched.
    fn write_version(manifest: impl AsRef<Path>, new_version: &str) -> Result<()> {
        let manifest = manifest.as_ref();
        info!("Updating '{}' to version {}", manifest.display(), new_version);
        let contents = std::fs::read_to_string(manifest)?;
        let version_regex = Self::version_match_regex()?;
        let new_contents = version_regex
            .replace(contents.as_str(), Self::version_replacement(new_version))
            .to_string();
        std::fs::write(manifest, new_contents)?;
        Ok(())
    }

    /// Display name used in change reports. Defaults to the directory the
    /// manifest lives in, since Cargo.toml/package.json filenames carry no
    /// project identity of their own.
    fn project_name(manifest: &Path) -> String {
        manifest
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| manifest.to_string_lossy().to_string())
    }

    fn filename_match_regex() -> Result<Regex>;
    fn version_match_regex() -> Result<Regex>;
    fn version_replacement(new_version: &str) -> String;
}

use crate::projects::ProjectKind;
use regex::Regex;
use std::path::Path;

pub struct Csproj;

impl ProjectKind for Csproj {
    fn filename_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r#"(?i)[/\\][^/\\]+\.csproj$"#)?)
    }

    fn version_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r#"(?m)^(\s*<Version>)([^<]*)</Version>"#)?)
    }

    fn version_replacement(new_version: &str) -> String {
        format!("${{1}}{new_version}</Version>")
    }

    // Unlike Cargo.toml/package.json, the csproj filename is the project name.
    fn project_name(manifest: &Path) -> String {
        manifest
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| manifest.to_string_lossy().to_string())
    }
}

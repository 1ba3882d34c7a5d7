use crate::projects::ProjectKind;
use regex::Regex;

pub struct PackageJson;

impl ProjectKind for PackageJson {
    fn filename_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r#"(?i)[/\\]package\.json$"#)?)
    }

    fn version_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r##"(?m)^(\s*"version"\s*:\s*")([^"]*)""##)?)
    }

    fn version_replacement(new_version: &str) -> String {
        format!("${{1}}{new_version}\"")
    }
}

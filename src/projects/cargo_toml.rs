use crate::projects::ProjectKind;
use regex::Regex;

pub struct CargoToml;
impl ProjectKind for CargoToml {
    fn filename_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r#"(?i)[/\\]Cargo\.toml$"#)?)
    }

    fn version_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r##"(?m)^(version\s*=\s*")([^"]*)""##)?)
    }

    fn version_replacement(new_version: &str) -> String {
        format!("${{1}}{new_version}\"")
    }
}

use log::debug;
use regex::Regex;

/// Increments the trailing run of ASCII digits in a version string.
///
/// The longest digit suffix is parsed as a `u32`, incremented, and written
/// back in place of the original suffix. Returns `None` when the string has
/// no digit suffix, when the suffix doesn't fit in a `u32`, or when the
/// incremented value would overflow. Leading zeros in the suffix are not
/// preserved: `"v1.00"` becomes `"v1.1"`.
pub fn increment(version: &str) -> Option<String> {
    let suffix = Regex::new(r"[0-9]+$").ok()?.find(version)?;
    let value: u32 = suffix.as_str().parse().ok()?;
    let next = value.checked_add(1)?;
    Some(format!("{}{}", &version[..suffix.start()], next))
}

/// Per-project outcome of a batch update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    pub name: String,
    pub original: String,
    pub updated: Option<String>,
}

impl UpdateResult {
    pub fn succeeded(&self) -> bool {
        self.updated.is_some()
    }
}

/// Aggregated outcome of one batch run: counts, human-readable change lines,
/// and the ordered per-project results the caller applies write-backs from.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub lines: Vec<String>,
    pub results: Vec<UpdateResult>,
}

impl BatchSummary {
    pub fn headline(&self) -> String {
        format!("{}/{} projects updated", self.succeeded, self.total)
    }
}

/// Runs [`increment`] over an ordered sequence of `(name, version)` pairs.
///
/// Projects whose version cannot be incremented are skipped: they count
/// toward `total` but produce no change line. Result order matches input
/// order. No write-backs happen here; the caller persists each successful
/// entry.
pub fn update_batch<'a>(projects: impl IntoIterator<Item = (&'a str, &'a str)>) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for (name, version) in projects {
        summary.total += 1;
        let updated = increment(version);

        match &updated {
            Some(new_version) => {
                summary.succeeded += 1;
                summary.lines.push(format!("{name}: {version} → {new_version}"));
            }
            None => debug!("Skipping '{}': no incrementable suffix in '{}'", name, version),
        }

        summary.results.push(UpdateResult {
            name: name.to_string(),
            original: version.to_string(),
            updated,
        });
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_dotted_version() {
        assert_eq!(increment("1.0.5"), Some("1.0.6".to_string()));
    }

    #[test]
    fn test_increment_hyphenated_version() {
        assert_eq!(increment("release-42"), Some("release-43".to_string()));
    }

    #[test]
    fn test_increment_bare_number() {
        assert_eq!(increment("9"), Some("10".to_string()));
    }

    #[test]
    fn test_increment_drops_leading_zeros() {
        assert_eq!(increment("v1.00"), Some("v1.1".to_string()));
        assert_eq!(increment("v1.09"), Some("v1.10".to_string()));
    }

    #[test]
    fn test_increment_no_digit_suffix() {
        assert_eq!(increment("no-digits"), None);
        assert_eq!(increment("1.2.3-beta"), None);
    }

    #[test]
    fn test_increment_empty_string() {
        assert_eq!(increment(""), None);
    }

    #[test]
    fn test_increment_suffix_too_long() {
        assert_eq!(increment("x9999999999999999999"), None);
    }

    #[test]
    fn test_increment_at_integer_range_limit() {
        assert_eq!(increment("4294967294"), Some("4294967295".to_string()));
        assert_eq!(increment("4294967295"), None);
    }

    #[test]
    fn test_increment_preserves_prefix() {
        let input = "build.2024.07";
        let output = increment(input).unwrap();
        assert!(output.starts_with("build.2024."));
        assert_eq!(output, "build.2024.8");
    }

    #[test]
    fn test_increment_twice_is_monotonic() {
        for input in ["0", "1.2.3", "v9", "alpha-199"] {
            let once = increment(input).unwrap();
            let twice = increment(&once).unwrap();
            let first: u32 = Regex::new(r"[0-9]+$").unwrap().find(&once).unwrap().as_str().parse().unwrap();
            let second: u32 = Regex::new(r"[0-9]+$").unwrap().find(&twice).unwrap().as_str().parse().unwrap();
            assert!(second > first);
        }
    }

    #[test]
    fn test_update_batch_mixed_outcomes() {
        let summary = update_batch([("A", "1.2.3"), ("B", "nodigits"), ("C", "9")]);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.lines, vec!["A: 1.2.3 → 1.2.4", "C: 9 → 10"]);
    }

    #[test]
    fn test_update_batch_results_match_input_order() {
        let summary = update_batch([("A", "1.2.3"), ("B", "nodigits"), ("C", "9")]);

        assert_eq!(summary.results.len(), 3);
        assert_eq!(summary.results[0].updated, Some("1.2.4".to_string()));
        assert_eq!(summary.results[1].updated, None);
        assert_eq!(summary.results[2].updated, Some("10".to_string()));

        let counted = summary.results.iter().filter(|result| result.succeeded()).count();
        assert_eq!(counted, summary.succeeded);
    }

    #[test]
    fn test_update_batch_empty_input() {
        let projects: [(&str, &str); 0] = [];
        let summary = update_batch(projects);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.succeeded, 0);
        assert!(summary.lines.is_empty());
        assert!(summary.results.is_empty());
    }

    #[test]
    fn test_update_batch_headline() {
        let summary = update_batch([("A", "1.0.0"), ("B", "none")]);
        assert_eq!(summary.headline(), "1/2 projects updated");
    }
}

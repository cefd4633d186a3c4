//! Override match rules.
//!
//! A rule is classified once, at registration time, from the shape of the
//! source name (`OverrideSet::insert`), never by runtime inspection.

use overscope_api::Candidate;
use serde::{Deserialize, Serialize};

/// A single override predicate mapping a requested resource name to a
/// target (namespace, path).
///
/// Rules are immutable once constructed and matching is a pure function of
/// the candidate name. This layer does not validate identifiers; empty or
/// odd-looking paths are stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverrideRule {
    /// Redirects exactly one resource name.
    File {
        source: String,
        target_namespace: String,
        target_path: String,
    },

    /// Redirects every resource name under a literal prefix.
    ///
    /// The prefix conventionally ends with `/` so `foo/` cannot match
    /// `foobar`. An empty prefix matches every name; callers that want that
    /// must ask for it explicitly.
    Directory {
        source_prefix: String,
        target_namespace: String,
        target_prefix: String,
    },
}

impl OverrideRule {
    /// Match `name` against this rule, producing the redirected candidate.
    ///
    /// File rules require literal equality - no partial matches. Directory
    /// rules strip `source_prefix` and splice the remainder onto
    /// `target_prefix`.
    pub fn resolve(&self, name: &str) -> Option<Candidate> {
        match self {
            OverrideRule::File {
                source,
                target_namespace,
                target_path,
            } => {
                if name == source.as_str() {
                    Some(Candidate::new(target_namespace.clone(), target_path.clone()))
                } else {
                    None
                }
            }
            OverrideRule::Directory {
                source_prefix,
                target_namespace,
                target_prefix,
            } => name.strip_prefix(source_prefix.as_str()).map(|remainder| {
                Candidate::new(
                    target_namespace.clone(),
                    format!("{target_prefix}{remainder}"),
                )
            }),
        }
    }

    /// Rule kind as a string (for statistics and filtering)
    pub fn kind(&self) -> &'static str {
        match self {
            OverrideRule::File { .. } => "file",
            OverrideRule::Directory { .. } => "directory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_rule() -> OverrideRule {
        OverrideRule::File {
            source: "foo.pt".to_string(),
            target_namespace: "package".to_string(),
            target_path: "bar.pt".to_string(),
        }
    }

    fn directory_rule() -> OverrideRule {
        OverrideRule::Directory {
            source_prefix: "foo/".to_string(),
            target_namespace: "package".to_string(),
            target_prefix: "bar/".to_string(),
        }
    }

    #[test]
    fn test_file_rule_match() {
        let result = file_rule().resolve("foo.pt");
        assert_eq!(
            result,
            Some(Candidate::new("package".to_string(), "bar.pt".to_string()))
        );
    }

    #[test]
    fn test_file_rule_no_match() {
        assert_eq!(file_rule().resolve("notfound.pt"), None);
        // No partial matches either
        assert_eq!(file_rule().resolve("foo.pt.bak"), None);
    }

    #[test]
    fn test_directory_rule_match() {
        let result = directory_rule().resolve("foo/something.pt");
        assert_eq!(
            result,
            Some(Candidate::new(
                "package".to_string(),
                "bar/something.pt".to_string()
            ))
        );
    }

    #[test]
    fn test_directory_rule_no_match() {
        assert_eq!(directory_rule().resolve("baz/notfound.pt"), None);
        // Trailing separator keeps "foo/" from matching "foobar"
        assert_eq!(directory_rule().resolve("foobar"), None);
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        let rule = OverrideRule::Directory {
            source_prefix: String::new(),
            target_namespace: "package".to_string(),
            target_prefix: "shadow/".to_string(),
        };
        assert_eq!(
            rule.resolve("anything.txt"),
            Some(Candidate::new(
                "package".to_string(),
                "shadow/anything.txt".to_string()
            ))
        );
    }
}

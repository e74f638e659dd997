//! Directory pruning: hidden directories and the ignore list.

use tokenaudit_core::constants::HIDDEN_PREFIX;
use tokenaudit_core::AuditRules;

/// Decides whether a directory is descended into.
///
/// A directory is skipped when its base name starts with `.` or contains any
/// ignore fragment as a substring, so `env` also prunes `environment` and
/// `out` also prunes `layout`.
#[derive(Debug, Clone, Copy)]
pub struct PathFilter<'r> {
    ignore_dirs: &'r [String],
}

impl<'r> PathFilter<'r> {
    pub fn new(rules: &'r AuditRules) -> Self {
        Self {
            ignore_dirs: &rules.ignore_dirs,
        }
    }

    /// True when a directory with this base name must not be descended into.
    pub fn should_skip(&self, dir_name: &str) -> bool {
        dir_name.starts_with(HIDDEN_PREFIX)
            || self
                .ignore_dirs
                .iter()
                .any(|fragment| dir_name.contains(fragment.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> PathFilter<'static> {
        PathFilter::new(AuditRules::shared())
    }

    #[test]
    fn skips_exact_ignore_names() {
        let f = filter();
        for name in ["node_modules", "dist", "build", "__pycache__", "governance"] {
            assert!(f.should_skip(name), "{name} should be skipped");
        }
    }

    #[test]
    fn skips_by_substring() {
        let f = filter();
        assert!(f.should_skip("environment"));
        assert!(f.should_skip("layout"));
        assert!(f.should_skip("my-build-tools"));
        assert!(f.should_skip("starlight-governance-kit-v1.0.0"));
    }

    #[test]
    fn skips_hidden_directories() {
        let f = filter();
        assert!(f.should_skip(".cache"));
        assert!(f.should_skip(".storybook"));
    }

    #[test]
    fn descends_into_ordinary_directories() {
        let f = filter();
        for name in ["src", "styles", "components", "app", "static"] {
            assert!(!f.should_skip(name), "{name} should be scanned");
        }
    }

    #[test]
    fn extra_ignores_apply() {
        let rules = AuditRules::carbon().with_extra_ignores(["legacy"]);
        let f = PathFilter::new(&rules);
        assert!(f.should_skip("legacy-styles"));
    }
}

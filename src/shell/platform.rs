//! Platform and environment detection.

/// Environment variables set by common CI services.
pub const CI_VARS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used by `main()` to force non-interactive mode, so a restore run in CI
/// never blocks on the selection checklist.
pub fn is_ci() -> bool {
    is_ci_with(|name| std::env::var_os(name).is_some())
}

/// CI detection over an arbitrary variable lookup.
pub fn is_ci_with(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|name| is_set(name))
}

/// Whether this build targets macOS, the only platform with `.app` bundles.
pub fn is_macos() -> bool {
    cfg!(target_os = "macos")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_ci_variable_means_ci() {
        assert!(is_ci_with(|name| name == "GITHUB_ACTIONS"));
        assert!(is_ci_with(|name| name == "JENKINS_URL"));
    }

    #[test]
    fn no_ci_variables_means_not_ci() {
        assert!(!is_ci_with(|_| false));
        assert!(!is_ci_with(|name| name == "HOME"));
    }

    #[test]
    fn is_macos_matches_target() {
        assert_eq!(is_macos(), std::env::consts::OS == "macos");
    }
}

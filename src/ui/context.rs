//! Whether the report on stdout gets ANSI styling.

use asset_audit::presentation::ColorWhen;

/// Environment variables that mark a CI runner even when `CI` is unset.
const CI_MARKERS: &[&str] = &["GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_URL"];

/// Decide on color for stdout.
///
/// An explicit `--color always|never` wins. In auto mode color needs a
/// terminal, and is switched off by `NO_COLOR`, `TERM=dumb` or a CI runner.
pub fn color_enabled(
    cli_color: Option<ColorWhen>,
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> bool {
    match cli_color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => {
            if !is_tty || get_env("NO_COLOR").is_some() {
                return false;
            }
            let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
            let ci = get_env("CI").is_some_and(|v| v != "false" && v != "0")
                || CI_MARKERS.iter().any(|k| get_env(k).is_some());
            !dumb && !ci
        }
    }
}

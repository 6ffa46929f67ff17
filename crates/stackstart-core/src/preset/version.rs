//! Version comparison for CLI and preset compatibility

use semver::Version;

/// Compare CLI version against the version a preset was written for
/// Returns a warning message if the CLI is older than the preset expects
pub fn check_compatibility(cli_version: &str, preset_version: &str) -> Option<String> {
    // Unparsable versions can't be compared, skip the warning
    let cli_ver = parse_version(cli_version)?;
    let preset_ver = parse_version(preset_version)?;

    if cli_ver < preset_ver {
        Some(format!(
            "This preset was written for stackstart {} or newer, you are running {}. \
             Some options may not be recognized.",
            preset_version, cli_version
        ))
    } else {
        None
    }
}

/// Parse version string, tolerating a leading 'v'
fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}

use semver::Version;
use thiserror::Error;

pub const APP_NAME: &str = "Freight Quote Desk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

#[derive(Error, Debug, PartialEq)]
pub enum VersionError {
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

fn parse_version_str(input: &str) -> Result<Version, VersionError> {
    let trimmed = input.trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|err| VersionError::InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, VersionError> {
    if let Some(tag) = GIT_TAG {
        return parse_version_str(tag);
    }

    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    match current_version() {
        Ok(version) => format!("v{version}"),
        Err(_) => GIT_TAG.unwrap_or(APP_VERSION).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_may_carry_a_v_prefix() {
        assert_eq!(parse_version_str("v1.2.3"), Ok(Version::new(1, 2, 3)));
        assert_eq!(parse_version_str("0.3.0"), Ok(Version::new(0, 3, 0)));
        assert!(parse_version_str("release-7").is_err());
    }

    #[test]
    fn package_version_parses() {
        assert!(parse_version_str(APP_VERSION).is_ok());
        assert!(version_label().len() > 1);
    }
}

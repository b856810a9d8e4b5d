//! Program naming convention.
//!
//! The build names each program binary `<app>-<version>-<name><suffix>`,
//! where the suffix comes from the build profile (`-debug`, `-optimized`, or
//! nothing for release builds). A *short name* is the `<name>` part.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default application name prefix.
pub const DEFAULT_APP_NAME: &str = "ns3";

/// Default application version component.
pub const DEFAULT_APP_VERSION: &str = "dev";

/// Build profile, which determines the binary name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    /// Debug build (`-debug` suffix).
    #[default]
    Debug,
    /// Optimized build (`-optimized` suffix).
    Optimized,
    /// Release build (no suffix).
    Release,
}

impl BuildProfile {
    /// Suffix appended to program names for this profile.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Debug => "-debug",
            Self::Optimized => "-optimized",
            Self::Release => "",
        }
    }

    /// Lowercase profile name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Optimized => "optimized",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Naming configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("Unknown build profile `{0}` (expected debug, optimized or release)")]
    UnknownProfile(String),

    #[error("Application name cannot be empty")]
    EmptyAppName,

    #[error("Application version cannot be empty")]
    EmptyVersion,
}

impl FromStr for BuildProfile {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "optimized" => Ok(Self::Optimized),
            "release" => Ok(Self::Release),
            _ => Err(NamingError::UnknownProfile(s.to_string())),
        }
    }
}

/// How program binaries are named in the build tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetNaming {
    app_name: String,
    version: String,
    profile: BuildProfile,
}

impl Default for TargetNaming {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            version: DEFAULT_APP_VERSION.to_string(),
            profile: BuildProfile::Debug,
        }
    }
}

impl TargetNaming {
    /// Create a naming convention, rejecting empty components.
    pub fn new(
        app_name: impl Into<String>,
        version: impl Into<String>,
        profile: BuildProfile,
    ) -> Result<Self, NamingError> {
        let app_name = app_name.into();
        let version = version.into();
        if app_name.trim().is_empty() {
            return Err(NamingError::EmptyAppName);
        }
        if version.trim().is_empty() {
            return Err(NamingError::EmptyVersion);
        }
        Ok(Self {
            app_name,
            version,
            profile,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub const fn profile(&self) -> BuildProfile {
        self.profile
    }

    fn prefix(&self) -> String {
        format!("{}-{}-", self.app_name, self.version)
    }

    /// File name of the program binary for a short name.
    pub fn decorate(&self, short_name: &str) -> String {
        format!("{}{short_name}{}", self.prefix(), self.profile.suffix())
    }

    /// Short name of a program binary, if `file_name` follows the convention.
    pub fn undecorate<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let rest = file_name.strip_prefix(self.prefix().as_str())?;
        let short = rest.strip_suffix(self.profile.suffix())?;
        (!short.is_empty()).then_some(short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_convention_matches_debug_builds() {
        let naming = TargetNaming::default();
        assert_eq!(naming.decorate("ndncc-simple"), "ns3-dev-ndncc-simple-debug");
        assert_eq!(
            naming.undecorate("ns3-dev-ndncc-simple-debug"),
            Some("ndncc-simple")
        );
    }

    #[test]
    fn undecorate_rejects_foreign_names() {
        let naming = TargetNaming::default();
        assert_eq!(naming.undecorate("libns3-dev-core-debug.so"), None);
        assert_eq!(naming.undecorate("ns3-dev-thing-optimized"), None);
        assert_eq!(naming.undecorate("ns3-dev--debug"), None);
    }

    #[test]
    fn release_profile_has_no_suffix() {
        let naming = TargetNaming::new("ns3", "3.17", BuildProfile::Release).unwrap();
        assert_eq!(naming.decorate("wifi"), "ns3-3.17-wifi");
        assert_eq!(naming.undecorate("ns3-3.17-wifi"), Some("wifi"));
    }

    #[test]
    fn profile_parses_case_insensitively() {
        assert_eq!("Optimized".parse::<BuildProfile>(), Ok(BuildProfile::Optimized));
        assert_eq!(" release ".parse::<BuildProfile>(), Ok(BuildProfile::Release));
        assert_eq!(
            "fast".parse::<BuildProfile>(),
            Err(NamingError::UnknownProfile("fast".to_string()))
        );
    }

    #[test]
    fn empty_components_are_rejected() {
        assert_eq!(
            TargetNaming::new(" ", "dev", BuildProfile::Debug),
            Err(NamingError::EmptyAppName)
        );
        assert_eq!(
            TargetNaming::new("ns3", "", BuildProfile::Debug),
            Err(NamingError::EmptyVersion)
        );
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Texture pass settings loaded from environment variables.

use archtex_core::{Error as CoreError, Tolerance};
use archtex_geometry::UnwrapOptions;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do when one object cannot be textured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log a warning and continue with the next object
    #[default]
    Skip,
    /// Stop the pass and return the error
    Abort,
}

impl FromStr for ErrorPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(ErrorPolicy::Skip),
            "abort" => Ok(ErrorPolicy::Abort),
            _ => Err(CoreError::InvalidValue {
                name: "ARCHTEX_ON_ERROR",
                value: s.to_string(),
            }),
        }
    }
}

/// Texture pass settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessingSettings {
    /// Per-axis tolerance for matching face overrides.
    pub tolerance: Tolerance,
    /// Recompute face bounds after a rotation override.
    pub recompute_bounds_after_rotation: bool,
    /// Policy for objects that fail to texture.
    pub error_policy: ErrorPolicy,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::DEFAULT,
            recompute_bounds_after_rotation: false,
            error_policy: ErrorPolicy::Skip,
        }
    }
}

impl ProcessingSettings {
    /// Load settings from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tolerance = lookup("ARCHTEX_TOLERANCE")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite() && *t >= 0.0)
            .map_or(defaults.tolerance, Tolerance);

        let recompute_bounds_after_rotation = lookup("ARCHTEX_RECOMPUTE_BOUNDS")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.recompute_bounds_after_rotation);

        let error_policy = match lookup("ARCHTEX_ON_ERROR") {
            Some(value) => value.parse().unwrap_or_else(|e: CoreError| {
                tracing::warn!(error = %e, "Using default error policy");
                defaults.error_policy
            }),
            None => defaults.error_policy,
        };

        Self {
            tolerance,
            recompute_bounds_after_rotation,
            error_policy,
        }
    }

    pub fn unwrap_options(&self) -> UnwrapOptions {
        UnwrapOptions {
            recompute_bounds_after_rotation: self.recompute_bounds_after_rotation,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("skip".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Skip);
        assert_eq!(" Abort ".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Abort);

        let err = "retry".parse::<ErrorPolicy>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { name: "ARCHTEX_ON_ERROR", .. }));
    }

    #[test]
    fn defaults_when_unset() {
        let settings = ProcessingSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, ProcessingSettings::default());
        assert_eq!(settings.tolerance, Tolerance::DEFAULT);
        assert!(!settings.unwrap_options().recompute_bounds_after_rotation);
    }

    #[test]
    fn reads_every_variable() {
        let settings = ProcessingSettings::from_lookup(lookup(&[
            ("ARCHTEX_TOLERANCE", "0.5"),
            ("ARCHTEX_RECOMPUTE_BOUNDS", "true"),
            ("ARCHTEX_ON_ERROR", "abort"),
        ]));
        assert_eq!(settings.tolerance, Tolerance(0.5));
        assert!(settings.unwrap_options().recompute_bounds_after_rotation);
        assert_eq!(settings.error_policy, ErrorPolicy::Abort);
    }

    #[test]
    fn invalid_values_fall_back() {
        let settings = ProcessingSettings::from_lookup(lookup(&[
            ("ARCHTEX_TOLERANCE", "-1"),
            ("ARCHTEX_RECOMPUTE_BOUNDS", "maybe"),
            ("ARCHTEX_ON_ERROR", "retry"),
        ]));
        assert_eq!(settings, ProcessingSettings::default());
    }

    #[test]
    fn policy_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ErrorPolicy::Abort).unwrap(), "\"abort\"");
    }
}

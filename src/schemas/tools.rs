//! # Tool Catalogue
//!
//! The closed set of PHP quality tools the installer knows about. Each variant is the
//! lookup key that `installers::installer_for` dispatches on, so adding a tool means adding
//! a variant here and the compiler points at every place that has to learn about it.
//!
//! ## Slugs
//!
//! The slug is the stable identifier used on the command line (`--tool phpcs`), in answers
//! files, and as the tool's subdirectory under the tools root.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CORE ENUMS
// ============================================================================

/// A tool the user can choose to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// PHP CS Fixer, the formatter.
    #[serde(rename = "phpcsfixer")]
    PhpCsFixer,
    /// PHPStan, the static analyzer.
    #[serde(rename = "phpstan")]
    PhpStan,
    /// PHP_CodeSniffer, the style checker (ships `phpcbf` as well).
    #[serde(rename = "phpcs")]
    PhpCs,
    /// PHP Mess Detector.
    #[serde(rename = "phpmd")]
    PhpMd,
    /// PHP Copy/Paste Detector, the duplication detector.
    #[serde(rename = "phpcpd")]
    PhpCpd,
    /// Composer Require Checker, the dependency checker.
    #[serde(rename = "composer-require-checker")]
    ComposerRequireChecker,
}

impl Tool {
    /// Every tool, in the order the selection prompt lists them.
    pub const ALL: [Tool; 6] = [
        Tool::PhpCsFixer,
        Tool::PhpStan,
        Tool::PhpCs,
        Tool::PhpMd,
        Tool::PhpCpd,
        Tool::ComposerRequireChecker,
    ];

    /// Stable identifier, also the name of the tool's directory under the tools root.
    pub fn slug(self) -> &'static str {
        match self {
            Tool::PhpCsFixer => "phpcsfixer",
            Tool::PhpStan => "phpstan",
            Tool::PhpCs => "phpcs",
            Tool::PhpMd => "phpmd",
            Tool::PhpCpd => "phpcpd",
            Tool::ComposerRequireChecker => "composer-require-checker",
        }
    }

    /// Human readable name shown in prompts and logs.
    pub fn label(self) -> &'static str {
        match self {
            Tool::PhpCsFixer => "PHP CS Fixer",
            Tool::PhpStan => "PHPStan",
            Tool::PhpCs => "PHP CS",
            Tool::PhpMd => "PHP MD",
            Tool::PhpCpd => "PHP CPD",
            Tool::ComposerRequireChecker => "Composer Require Checker",
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.slug() == wanted)
            .ok_or_else(|| {
                let valid = Tool::ALL.map(Tool::slug).join(", ");
                format!("Invalid tool '{s}'. Must be one of: {valid}")
            })
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Removes repeated tools while keeping the order in which they were first chosen.
pub fn dedup_in_order(tools: impl IntoIterator<Item = Tool>) -> Vec<Tool> {
    let mut unique: Vec<Tool> = Vec::new();
    for tool in tools {
        if !unique.contains(&tool) {
            unique.push(tool);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for tool in Tool::ALL {
            assert_eq!(tool.slug().parse::<Tool>(), Ok(tool));
        }
    }

    #[test]
    fn unknown_slug_lists_valid_choices() {
        let err = "psalm".parse::<Tool>().unwrap_err();
        assert!(err.contains("composer-require-checker"));
        assert!(err.contains("phpcsfixer"));
    }

    #[test]
    fn serde_uses_slugs() {
        let tools: Vec<Tool> = serde_yaml::from_str("[phpcs, composer-require-checker]").unwrap();
        assert_eq!(tools, vec![Tool::PhpCs, Tool::ComposerRequireChecker]);
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let tools = dedup_in_order([Tool::PhpMd, Tool::PhpCs, Tool::PhpMd, Tool::PhpStan, Tool::PhpCs]);
        assert_eq!(tools, vec![Tool::PhpMd, Tool::PhpCs, Tool::PhpStan]);
    }
}

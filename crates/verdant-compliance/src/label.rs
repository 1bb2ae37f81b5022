//! # Compliance Labels
//!
//! A label names a framework and the specific provision or category within
//! it that an emission line falls under. Labels are static data; they are
//! never persisted and never parsed back.

use serde::Serialize;

/// Central Pollution Control Board (India).
pub const CPCB: &str = "CPCB";
/// SEBI Business Responsibility and Sustainability Reporting (India).
pub const BRSR: &str = "BRSR";
/// GST registration with HSN/SAC classification (India).
pub const GSTIN_HSN: &str = "GSTIN-HSN";
/// GHG Protocol Corporate Standard (global).
pub const GHG_PROTOCOL: &str = "GHG Protocol";
/// ISO 14064-1:2018 organizational GHG inventories (global).
pub const ISO_14064_1: &str = "ISO 14064-1";

/// Every framework that appears in the tables.
pub const FRAMEWORKS: &[&str] = &[CPCB, BRSR, GSTIN_HSN, GHG_PROTOCOL, ISO_14064_1];

/// Jurisdiction a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    India,
    Global,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::India => "india",
            Self::Global => "global",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One applicable framework provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ComplianceLabel {
    pub framework: &'static str,
    pub label: &'static str,
    pub region: Region,
}

impl ComplianceLabel {
    /// An India-region label.
    pub const fn india(framework: &'static str, label: &'static str) -> Self {
        Self {
            framework,
            label,
            region: Region::India,
        }
    }

    /// A global-region label.
    pub const fn global(framework: &'static str, label: &'static str) -> Self {
        Self {
            framework,
            label,
            region: Region::Global,
        }
    }
}

impl std::fmt::Display for ComplianceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.framework, self.label)
    }
}

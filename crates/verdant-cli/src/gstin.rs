//! # GSTIN Subcommand
//!
//! - `verdant gstin validate <gstin>` checks the 15-character format.
//! - `verdant gstin check` applies the premium acceptance rule to an invoice.
//! - `verdant gstin extract` picks the invoice party that identifies the business.
//!
//! `check` and `extract` fall back to the profile GSTIN and tier from the
//! config file when they are not given on the command line. `validate` and
//! `check` exit 1 when the GSTIN is rejected.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use verdant_gstin::{
    extract_invoice_gstin, normalize_gstin, validate_invoice_for_premium, Gstin,
    GstinValidationResult,
};

use crate::config::CliConfig;

/// GSTIN subcommand arguments.
#[derive(Args, Debug)]
pub struct GstinArgs {
    #[command(subcommand)]
    pub command: GstinCommand,
}

/// Available GSTIN subcommands.
#[derive(Subcommand, Debug)]
pub enum GstinCommand {
    /// Check a GSTIN's format.
    Validate {
        /// GSTIN to check. Case and whitespace are ignored.
        gstin: String,
    },

    /// Decide whether an invoice is accepted for the business.
    Check {
        /// GSTIN printed on the invoice.
        #[arg(long)]
        invoice: Option<String>,

        /// GSTIN on the business profile. Defaults to `business.gstin`.
        #[arg(long)]
        profile: Option<String>,

        /// Treat the business as premium.
        #[arg(long, conflicts_with = "free")]
        premium: bool,

        /// Treat the business as free tier.
        #[arg(long)]
        free: bool,
    },

    /// Choose the invoice GSTIN that belongs to the business.
    Extract {
        /// Supplier GSTIN from the invoice header.
        #[arg(long)]
        supplier: Option<String>,

        /// Buyer GSTIN from the invoice header.
        #[arg(long)]
        buyer: Option<String>,

        /// GSTIN on the business profile. Defaults to `business.gstin`.
        #[arg(long)]
        profile: Option<String>,
    },
}

/// Format check report for one GSTIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GstinFormatReport {
    pub normalized: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
}

/// Extraction report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GstinExtraction {
    pub gstin: Option<String>,
}

/// Execute the gstin subcommand.
pub fn run_gstin(args: &GstinArgs, config: &CliConfig) -> Result<u8> {
    match &args.command {
        GstinCommand::Validate { gstin } => {
            let report = format_report(gstin);
            crate::print_json(&report)?;
            Ok(if report.valid { 0 } else { 1 })
        }
        GstinCommand::Check {
            invoice,
            profile,
            premium,
            free,
        } => {
            let result = check_invoice(invoice.as_deref(), profile.as_deref(), *premium, *free, config);
            crate::print_json(&result)?;
            Ok(if result.valid { 0 } else { 1 })
        }
        GstinCommand::Extract {
            supplier,
            buyer,
            profile,
        } => {
            let profile = profile.as_deref().or(config.business.gstin.as_deref());
            let gstin = extract_invoice_gstin(supplier.as_deref(), buyer.as_deref(), profile);
            crate::print_json(&GstinExtraction { gstin })?;
            Ok(0)
        }
    }
}

/// Normalize and format-check a GSTIN.
pub fn format_report(raw: &str) -> GstinFormatReport {
    match Gstin::new(raw) {
        Ok(gstin) => GstinFormatReport {
            normalized: gstin.as_str().to_string(),
            valid: true,
            state_code: Some(gstin.state_code().to_string()),
            pan: Some(gstin.pan().to_string()),
        },
        Err(_) => GstinFormatReport {
            normalized: normalize_gstin(raw),
            valid: false,
            state_code: None,
            pan: None,
        },
    }
}

/// Apply the acceptance rule, taking unset profile and tier from `config`.
pub fn check_invoice(
    invoice: Option<&str>,
    profile: Option<&str>,
    premium: bool,
    free: bool,
    config: &CliConfig,
) -> GstinValidationResult {
    let profile = profile.or(config.business.gstin.as_deref());
    let is_premium = if premium {
        true
    } else if free {
        false
    } else {
        config.business.premium
    };
    validate_invoice_for_premium(invoice, profile, is_premium)
}

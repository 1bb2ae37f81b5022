//! # verdant-compliance — Multi-Framework Compliance Classification
//!
//! Maps an emission line's `(scope, category)` to the regulatory framework
//! labels that apply to it, for an India taxonomy and a global one.
//!
//! - **Labels** (`label.rs`): [`ComplianceLabel`], [`Region`] and the
//!   framework name constants.
//! - **Tables** (`table.rs`): the static category and scope tables. Adding a
//!   category or a framework is a row edit there, never a new branch.
//! - **Classification** (`classify.rs`): lookups over the tables, per entry
//!   and per ledger.
//!
//! Classification is permissive and additive. An unknown category yields no
//! labels for that jurisdiction; nothing here returns an error or blocks a
//! workflow.

pub mod classify;
pub mod label;
pub mod table;

pub use classify::{
    category_labels, classify_entry, classify_ledger, framework_coverage, get_compliance_labels,
    known_categories, scope_labels, EntryClassification,
};
pub use label::{ComplianceLabel, Region};

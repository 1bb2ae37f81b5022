//! # Invoice Identifier Extraction
//!
//! An invoice names two parties. The business is usually the buyer, so the
//! buyer's GSTIN is checked against the profile first, then the supplier's.
//! When neither matches, the buyer is returned (or the supplier when the
//! buyer is absent) so the acceptance check can report the mismatch.

use crate::present;

/// Choose which invoice GSTIN to compare against the profile.
///
/// Returns the chosen identifier in normalized form, or `None` when the
/// invoice carries neither.
pub fn extract_invoice_gstin(
    supplier_gstin: Option<&str>,
    buyer_gstin: Option<&str>,
    profile_gstin: Option<&str>,
) -> Option<String> {
    let supplier = present(supplier_gstin);
    let buyer = present(buyer_gstin);

    if let Some(profile) = present(profile_gstin) {
        if buyer.as_deref() == Some(profile.as_str()) {
            return buyer;
        }
        if supplier.as_deref() == Some(profile.as_str()) {
            return supplier;
        }
    }
    buyer.or(supplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = "27AAAPL1234C1Z5";
    const OTHER: &str = "29XXXXX0000X1Z1";
    const THIRD: &str = "07ABCDE9876FAZZ";

    #[test]
    fn buyer_match_wins() {
        assert_eq!(
            extract_invoice_gstin(Some(OTHER), Some(PROFILE), Some(PROFILE)),
            Some(PROFILE.to_string())
        );
    }

    #[test]
    fn supplier_match_when_business_is_seller() {
        assert_eq!(
            extract_invoice_gstin(Some("27aaapl1234c1z5"), Some(OTHER), Some(PROFILE)),
            Some(PROFILE.to_string())
        );
    }

    #[test]
    fn no_match_defaults_to_buyer_then_supplier() {
        assert_eq!(
            extract_invoice_gstin(Some(OTHER), Some(THIRD), Some(PROFILE)),
            Some(THIRD.to_string())
        );
        assert_eq!(
            extract_invoice_gstin(Some(OTHER), None, Some(PROFILE)),
            Some(OTHER.to_string())
        );
        assert_eq!(
            extract_invoice_gstin(Some(OTHER), Some("  "), Some(PROFILE)),
            Some(OTHER.to_string())
        );
    }

    #[test]
    fn no_profile_defaults_to_buyer() {
        assert_eq!(
            extract_invoice_gstin(Some(OTHER), Some(THIRD), None),
            Some(THIRD.to_string())
        );
    }

    #[test]
    fn nothing_present() {
        assert_eq!(extract_invoice_gstin(None, None, Some(PROFILE)), None);
        assert_eq!(extract_invoice_gstin(Some(""), Some(" "), None), None);
    }
}

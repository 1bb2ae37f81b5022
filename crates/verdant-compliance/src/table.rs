//! # Framework Tables
//!
//! Static mapping data. Category keys are lowercase; lookups normalize the
//! caller's category before indexing.
//!
//! | Category | India frameworks | Global frameworks |
//! |----------|------------------|-------------------|
//! | fuel | CPCB, BRSR | GHG Protocol, ISO 14064-1 |
//! | electricity | BRSR | GHG Protocol, ISO 14064-1 |
//! | transport | BRSR | GHG Protocol, ISO 14064-1 |
//! | materials | GSTIN-HSN, BRSR | GHG Protocol, ISO 14064-1 |
//! | waste | CPCB, BRSR | GHG Protocol, ISO 14064-1 |
//! | cloud | GSTIN-HSN, BRSR | GHG Protocol, ISO 14064-1 |
//! | software | GSTIN-HSN | GHG Protocol |
//! | it_hardware | CPCB, GSTIN-HSN | GHG Protocol, ISO 14064-1 |
//! | services | GSTIN-HSN | GHG Protocol |
//! | travel | BRSR | GHG Protocol, ISO 14064-1 |

use verdant_core::EmissionScope;

use crate::label::{ComplianceLabel, BRSR, CPCB, GHG_PROTOCOL, GSTIN_HSN, ISO_14064_1};

/// Labels for one emission category.
#[derive(Debug)]
pub struct CategoryRow {
    pub category: &'static str,
    pub india: &'static [ComplianceLabel],
    pub global: &'static [ComplianceLabel],
}

/// Fixed scope-level label pair.
#[derive(Debug)]
pub struct ScopeRow {
    pub scope: EmissionScope,
    pub india: ComplianceLabel,
    pub global: ComplianceLabel,
}

const fn india(framework: &'static str, label: &'static str) -> ComplianceLabel {
    ComplianceLabel::india(framework, label)
}

const fn global(framework: &'static str, label: &'static str) -> ComplianceLabel {
    ComplianceLabel::global(framework, label)
}

pub static CATEGORY_TABLE: &[CategoryRow] = &[
    CategoryRow {
        category: "fuel",
        india: &[
            india(CPCB, "Air Act 1981: fuel combustion emission consent"),
            india(BRSR, "Principle 6: Scope 1 emissions and energy from fuel"),
        ],
        global: &[
            global(GHG_PROTOCOL, "Scope 1: stationary and mobile combustion"),
            global(ISO_14064_1, "Category 1: direct GHG emissions"),
        ],
    },
    CategoryRow {
        category: "electricity",
        india: &[india(BRSR, "Principle 6: energy consumption and Scope 2 emissions")],
        global: &[
            global(GHG_PROTOCOL, "Scope 2: purchased electricity (location-based)"),
            global(ISO_14064_1, "Category 2: indirect emissions from imported energy"),
        ],
    },
    CategoryRow {
        category: "transport",
        india: &[india(BRSR, "Principle 6: Scope 3 upstream logistics")],
        global: &[
            global(GHG_PROTOCOL, "Scope 3 Category 4: upstream transportation and distribution"),
            global(ISO_14064_1, "Category 3: indirect emissions from transportation"),
        ],
    },
    CategoryRow {
        category: "materials",
        india: &[
            india(GSTIN_HSN, "HSN-classified goods purchase"),
            india(BRSR, "Principle 2: sustainable sourcing of inputs"),
        ],
        global: &[
            global(GHG_PROTOCOL, "Scope 3 Category 1: purchased goods"),
            global(ISO_14064_1, "Category 4: indirect emissions from products used"),
        ],
    },
    CategoryRow {
        category: "waste",
        india: &[
            india(CPCB, "Solid Waste Management Rules 2016: generator obligations"),
            india(BRSR, "Principle 6: waste generated and disposal method"),
        ],
        global: &[
            global(GHG_PROTOCOL, "Scope 3 Category 5: waste generated in operations"),
            global(ISO_14064_1, "Category 4: indirect emissions from waste disposal"),
        ],
    },
    CategoryRow {
        category: "cloud",
        india: &[
            india(GSTIN_HSN, "SAC 9983: IT infrastructure and hosting services"),
            india(BRSR, "Principle 6: Scope 3 purchased digital services"),
        ],
        global: &[
            global(GHG_PROTOCOL, "Scope 3 Category 1: purchased cloud services"),
            global(ISO_14064_1, "Category 4: indirect emissions from services used"),
        ],
    },
    CategoryRow {
        category: "software",
        india: &[india(GSTIN_HSN, "SAC 9973: software licensing services")],
        global: &[global(GHG_PROTOCOL, "Scope 3 Category 1: purchased software")],
    },
    CategoryRow {
        category: "it_hardware",
        india: &[
            india(CPCB, "E-Waste (Management) Rules 2022: producer and consumer duties"),
            india(GSTIN_HSN, "HSN 8471: computing equipment"),
        ],
        global: &[
            global(GHG_PROTOCOL, "Scope 3 Category 2: capital goods"),
            global(ISO_14064_1, "Category 4: indirect emissions from capital goods"),
        ],
    },
    CategoryRow {
        category: "services",
        india: &[india(GSTIN_HSN, "SAC-classified service purchase")],
        global: &[global(GHG_PROTOCOL, "Scope 3 Category 1: purchased services")],
    },
    CategoryRow {
        category: "travel",
        india: &[india(BRSR, "Principle 6: Scope 3 business travel")],
        global: &[
            global(GHG_PROTOCOL, "Scope 3 Category 6: business travel"),
            global(ISO_14064_1, "Category 3: indirect emissions from business travel"),
        ],
    },
];

pub static SCOPE_TABLE: &[ScopeRow] = &[
    ScopeRow {
        scope: EmissionScope::Scope1,
        india: india(BRSR, "Principle 6: Scope 1 direct emissions disclosure"),
        global: global(GHG_PROTOCOL, "Scope 1: direct emissions"),
    },
    ScopeRow {
        scope: EmissionScope::Scope2,
        india: india(BRSR, "Principle 6: Scope 2 energy indirect emissions disclosure"),
        global: global(GHG_PROTOCOL, "Scope 2: energy indirect emissions"),
    },
    ScopeRow {
        scope: EmissionScope::Scope3,
        india: india(BRSR, "Principle 6 leadership indicator: Scope 3 emissions"),
        global: global(GHG_PROTOCOL, "Scope 3: value chain emissions"),
    },
];

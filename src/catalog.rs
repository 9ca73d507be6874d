//! # Demo Catalog Module
//!
//! Seeded marketplace data shown throughout the demo. Every record here is
//! static and immutable: the demo has no backend, so listings, analytics
//! metrics, and lifecycle stages are fixed at compile time and recreated
//! fresh on every render pass.
//!
//! ## Key Types
//! - `MineralListing`: one row of the public listings table
//! - `AnalyticsMetric`: one bar of the analytics chart
//! - `Mineral`, `Incoterm`, `DepositType`, `Role`, `Supplier`: closed
//!   pick-list enums

use chrono::NaiveDate;
use std::fmt;

/// Trade-term label attached to listings. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incoterm {
    Fob,
    Cif,
}

impl Incoterm {
    pub const ALL: [Incoterm; 2] = [Incoterm::Fob, Incoterm::Cif];
}

impl fmt::Display for Incoterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incoterm::Fob => write!(f, "FOB"),
            Incoterm::Cif => write!(f, "CIF"),
        }
    }
}

/// Conceptual deposit mechanism named on a listing. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositType {
    Escrow,
    BlockFund,
}

impl fmt::Display for DepositType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepositType::Escrow => write!(f, "Escrow"),
            DepositType::BlockFund => write!(f, "Block Fund"),
        }
    }
}

/// The subset of minerals open for spot bidding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mineral {
    CopperCathode,
    Graphite,
    Coltan,
}

impl Mineral {
    pub const ALL: [Mineral; 3] = [Mineral::CopperCathode, Mineral::Graphite, Mineral::Coltan];
}

impl fmt::Display for Mineral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mineral::CopperCathode => write!(f, "Copper Cathode"),
            Mineral::Graphite => write!(f, "Graphite"),
            Mineral::Coltan => write!(f, "Coltan"),
        }
    }
}

/// Registration role offered on the membership page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Buyer, Role::Seller];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Buyer => write!(f, "Buyer"),
            Role::Seller => write!(f, "Seller"),
        }
    }
}

/// Suppliers awaiting verification on the admin page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supplier {
    ZambiaCopper,
    DrcMinerals,
}

impl Supplier {
    pub const ALL: [Supplier; 2] = [Supplier::ZambiaCopper, Supplier::DrcMinerals];
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Supplier::ZambiaCopper => write!(f, "Zambia Copper Ltd"),
            Supplier::DrcMinerals => write!(f, "DRC Minerals SARL"),
        }
    }
}

/// One row of the public listings table.
#[derive(Debug, Clone)]
pub struct MineralListing {
    pub mineral: &'static str,
    pub origin: &'static str,
    pub quantity_mt: u32,
    pub incoterm: Incoterm,
    pub deposit: DepositType,
    pub shipment_date: NaiveDate,
    pub pricing_note: &'static str,
}

/// Column headers of the listings table, in display order.
pub const LISTING_COLUMNS: [&str; 7] = [
    "Mineral",
    "Origin",
    "Quantity (MT)",
    "Incoterm",
    "Deposit Type",
    "Shipment Date",
    "Pricing Note",
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// The four seeded public listings.
pub fn listings() -> [MineralListing; 4] {
    [
        MineralListing {
            mineral: "Copper Cathode",
            origin: "DRC",
            quantity_mt: 500,
            incoterm: Incoterm::Fob,
            deposit: DepositType::Escrow,
            shipment_date: date(2026, 2, 15),
            pricing_note: "LME Ref",
        },
        MineralListing {
            mineral: "Copper Concentrate",
            origin: "Zambia",
            quantity_mt: 800,
            incoterm: Incoterm::Cif,
            deposit: DepositType::BlockFund,
            shipment_date: date(2026, 3, 20),
            pricing_note: "Negotiated",
        },
        MineralListing {
            mineral: "Graphite",
            origin: "Tanzania",
            quantity_mt: 300,
            incoterm: Incoterm::Fob,
            deposit: DepositType::Escrow,
            shipment_date: date(2026, 4, 10),
            pricing_note: "Spot Bid",
        },
        MineralListing {
            mineral: "Coltan",
            origin: "DRC",
            quantity_mt: 120,
            incoterm: Incoterm::Fob,
            deposit: DepositType::BlockFund,
            shipment_date: date(2026, 5, 5),
            pricing_note: "Private Deal",
        },
    ]
}

/// One bar of the analytics chart.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsMetric {
    pub name: &'static str,
    pub value: u32,
}

/// The seeded analytics metrics, in chart order.
pub const ANALYTICS_METRICS: [AnalyticsMetric; 4] = [
    AnalyticsMetric { name: "Active Deals", value: 12 },
    AnalyticsMetric { name: "Buyers", value: 18 },
    AnalyticsMetric { name: "Sellers", value: 10 },
    AnalyticsMetric { name: "Risk-Filtered", value: 7 },
];

/// Ordered stages of the conceptual order flow.
pub const LIFECYCLE_STEPS: [&str; 6] = [
    "Mineral Listing",
    "Bid Submission",
    "Escrow / Block Fund",
    "Admin Approval",
    "Shipment",
    "Deal Completed",
];

/// Documents requested during membership verification.
pub const MEMBERSHIP_DOCUMENTS: [&str; 3] = [
    "Business License",
    "Mining Permit / Certificate",
    "ID / Directors Info",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_table_shape() {
        assert_eq!(listings().len(), 4);
        assert_eq!(LISTING_COLUMNS.len(), 7);
    }

    #[test]
    fn test_first_listing_literals() {
        let rows = listings();
        let first = &rows[0];
        assert_eq!(first.mineral, "Copper Cathode");
        assert_eq!(first.origin, "DRC");
        assert_eq!(first.quantity_mt, 500);
        assert_eq!(first.incoterm.to_string(), "FOB");
        assert_eq!(first.deposit.to_string(), "Escrow");
        assert_eq!(first.shipment_date.format("%Y-%m-%d").to_string(), "2026-02-15");
        assert_eq!(first.pricing_note, "LME Ref");
    }

    #[test]
    fn test_analytics_metrics_seed() {
        let names: Vec<_> = ANALYTICS_METRICS.iter().map(|m| m.name).collect();
        let values: Vec<_> = ANALYTICS_METRICS.iter().map(|m| m.value).collect();
        assert_eq!(names, ["Active Deals", "Buyers", "Sellers", "Risk-Filtered"]);
        assert_eq!(values, [12, 18, 10, 7]);
    }

    #[test]
    fn test_lifecycle_steps_order() {
        assert_eq!(LIFECYCLE_STEPS.len(), 6);
        assert_eq!(LIFECYCLE_STEPS[0], "Mineral Listing");
        assert_eq!(LIFECYCLE_STEPS[5], "Deal Completed");
    }

    #[test]
    fn test_biddable_minerals() {
        let names: Vec<_> = Mineral::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["Copper Cathode", "Graphite", "Coltan"]);
    }
}

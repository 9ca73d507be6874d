/// The closed set of navigable demo pages. The sidebar exposes exactly
/// these, in this order, so an unrecognized selection cannot occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    MineralDeals,
    SpotBidding,
    Consulting,
    BankingRisk,
    Membership,
    AdminBackOffice,
    Analytics,
    OrderLifeCycle,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::About,
        Page::MineralDeals,
        Page::SpotBidding,
        Page::Consulting,
        Page::BankingRisk,
        Page::Membership,
        Page::AdminBackOffice,
        Page::Analytics,
        Page::OrderLifeCycle,
    ];

    /// Sidebar label, emoji prefix included.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "🏠 Home",
            Page::About => "🏢 About",
            Page::MineralDeals => "📦 Mineral Deals",
            Page::SpotBidding => "⚡ Spot Deals & Bidding",
            Page::Consulting => "🤝 Consulting",
            Page::BankingRisk => "🏦 Banking & Risk",
            Page::Membership => "👤 Membership",
            Page::AdminBackOffice => "🛠 Admin Back Office",
            Page::Analytics => "📊 Analytics",
            Page::OrderLifeCycle => "🧭 Order Life Cycle",
        }
    }

    /// Heading shown at the top of the main surface.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Africa’s Transparent Mineral Bidding & Trading Platform",
            Page::About => "About MTA",
            Page::MineralDeals => "Public Mineral Listings (Demo Data)",
            Page::SpotBidding => "Spot Deal Bidding (Simulation)",
            Page::Consulting => "One-on-One Consulting Workflow",
            Page::BankingRisk => "Banking & Risk Management (Conceptual)",
            Page::Membership => "Membership & Verification (Mocked)",
            Page::AdminBackOffice => "Admin Dashboard",
            Page::Analytics => "Demo Analytics",
            Page::OrderLifeCycle => "End-to-End Order Life Cycle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_pages_enumerated() {
        assert_eq!(Page::ALL.len(), 10);
        assert_eq!(Page::ALL[0], Page::Home);
        assert_eq!(Page::ALL[9], Page::OrderLifeCycle);
    }

    #[test]
    fn test_labels_unique() {
        let labels: HashSet<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), Page::ALL.len());
    }

    #[test]
    fn test_titles_unique() {
        let titles: HashSet<_> = Page::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(titles.len(), Page::ALL.len());
    }
}

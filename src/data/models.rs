//! Plain data records backing the prototype. All collections live in memory
//! and are seeded once at startup; nothing here is ever persisted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    pub property_type: String,
    pub description: String,
    pub price_per_fragment: u64,
    pub total_fragments: u32,
    pub sold_fragments: u32,
    pub yield_percent: f64,
    pub expected_yield: f64,
    pub occupancy_rate: u32,
    pub risk: RiskLevel,
    pub trending: bool,
}

impl Property {
    pub fn sold_ratio(&self) -> f64 {
        if self.total_fragments == 0 {
            return 0.0;
        }
        f64::from(self.sold_fragments) / f64::from(self.total_fragments)
    }

    pub fn available_fragments(&self) -> u32 {
        self.total_fragments.saturating_sub(self.sold_fragments)
    }
}

/// A user's holding in one property: one or more tokenized fragments plus
/// the legal paperwork state attached to them.
#[derive(Debug, Clone)]
pub struct FragmentHolding {
    pub id: String,
    pub property_id: String,
    pub property_name: String,
    pub percentage_owned: f64,
    pub fragment_ids: Vec<u32>,
    pub cost_basis: u64,
    pub income_received: u64,
    /// ISO date, e.g. "2025-03-14"
    pub purchase_date: String,
    pub next_payout: String,
    pub issuance_date: String,
    pub poa_issued: bool,
    pub token_id: String,
    pub chain_status: String,
}

#[derive(Debug, Clone)]
pub struct SecondaryListing {
    pub id: String,
    pub property_name: String,
    pub fragment_no: u32,
    pub price: u64,
    pub original_price: u64,
    pub seller_rating: f64,
    pub days_listed: u32,
    pub condition: String,
}

impl SecondaryListing {
    /// Percent gain of the ask price over the original purchase price.
    pub fn gain_percent(&self) -> f64 {
        if self.original_price == 0 {
            return 0.0;
        }
        (self.price as f64 - self.original_price as f64) / self.original_price as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Income,
    Market,
    Alert,
    Kyc,
}

impl NotificationKind {
    pub fn glyph(self) -> &'static str {
        match self {
            NotificationKind::Income => "₹",
            NotificationKind::Market => "◆",
            NotificationKind::Alert => "▲",
            NotificationKind::Kyc => "✓",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
}

#[derive(Debug, Clone)]
pub struct IncomeEntry {
    pub id: String,
    pub property: String,
    pub date: String,
    pub amount: u64,
}

#[derive(Debug, Clone)]
pub struct KycDocument {
    pub id: String,
    pub name: String,
    pub doc_type: String,
    pub upload_date: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct MarketStats {
    pub total_volume: String,
    pub active_listings: u32,
    pub avg_price_change: String,
    pub buyer_seller_ratio: String,
    pub total_trades_this_month: u32,
}

#[derive(Debug, Clone)]
pub struct NeighborhoodData {
    pub walkability_score: u32,
    pub amenities: Vec<String>,
    /// (year label, growth percent) pairs for the area growth bar chart.
    pub growth_trend: Vec<(String, u64)>,
}

#[derive(Debug, Clone)]
pub struct PortfolioSummary {
    pub total_value: u64,
    pub total_roi: f64,
    pub rental_income: u64,
    pub properties_owned: u32,
    pub fragments_held: u32,
    pub next_payout: String,
    pub health_score: u32,
}

#[derive(Debug, Clone)]
pub struct WealthPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub profession: String,
    pub tier: String,
    pub kyc_complete: bool,
}

#[derive(Debug, Clone)]
pub struct AiInsight {
    pub title: String,
    pub text: String,
}

//! Seed data for the prototype. One global read-only provider, created on
//! first access and shared by every screen.

use once_cell::sync::Lazy;

use super::models::*;

pub struct MockData {
    pub user: UserProfile,
    pub summary: PortfolioSummary,
    pub properties: Vec<Property>,
    pub holdings: Vec<FragmentHolding>,
    pub secondary_listings: Vec<SecondaryListing>,
    pub notifications: Vec<Notification>,
    pub recent_income: Vec<IncomeEntry>,
    /// Monthly income for the fragment detail chart, oldest first.
    pub income_history: Vec<(String, u64)>,
    /// Resale price trend for the secondary market chart, oldest first.
    pub price_history: Vec<(String, u64)>,
    pub wealth_today: Vec<WealthPoint>,
    pub wealth_month: Vec<WealthPoint>,
    pub wealth_year: Vec<WealthPoint>,
    pub neighborhood: NeighborhoodData,
    pub kyc_documents: Vec<KycDocument>,
    pub market_stats: MarketStats,
    pub insight: AiInsight,
}

impl MockData {
    /// Lookup with deterministic fallback: an empty or unknown id resolves to
    /// the first property, never to an error state.
    pub fn property_by_id(&self, id: &str) -> &Property {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .or_else(|| self.properties.first())
            .expect("seed data contains at least one property")
    }

    /// Same fallback contract as [`Self::property_by_id`], for holdings.
    pub fn holding_by_id(&self, id: &str) -> &FragmentHolding {
        self.holdings
            .iter()
            .find(|h| h.id == id)
            .or_else(|| self.holdings.first())
            .expect("seed data contains at least one holding")
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn wealth_series(&self, period: WealthPeriod) -> &[WealthPoint] {
        match period {
            WealthPeriod::Today => &self.wealth_today,
            WealthPeriod::Month => &self.wealth_month,
            WealthPeriod::Year => &self.wealth_year,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WealthPeriod {
    Today,
    Month,
    Year,
}

impl WealthPeriod {
    pub const ALL: [WealthPeriod; 3] = [WealthPeriod::Today, WealthPeriod::Month, WealthPeriod::Year];

    pub fn label(self) -> &'static str {
        match self {
            WealthPeriod::Today => "Today",
            WealthPeriod::Month => "Month",
            WealthPeriod::Year => "Year",
        }
    }
}

pub fn provider() -> &'static MockData {
    static DATA: Lazy<MockData> = Lazy::new(seed);
    &DATA
}

fn property(
    id: &str,
    name: &str,
    location: &str,
    property_type: &str,
    description: &str,
    price_per_fragment: u64,
    total_fragments: u32,
    sold_fragments: u32,
    yield_percent: f64,
    expected_yield: f64,
    occupancy_rate: u32,
    risk: RiskLevel,
    trending: bool,
) -> Property {
    Property {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        property_type: property_type.to_string(),
        description: description.to_string(),
        price_per_fragment,
        total_fragments,
        sold_fragments,
        yield_percent,
        expected_yield,
        occupancy_rate,
        risk,
        trending,
    }
}

fn seed() -> MockData {
    let properties = vec![
        property(
            "p-1",
            "Ashford Residency",
            "Indiranagar, Bangalore",
            "Luxury Apartment",
            "A 24-unit boutique residence two streets off 100 Feet Road, fully \
             leased to technology executives on three-year corporate leases.",
            250_000,
            100,
            62,
            8.4,
            9.1,
            96,
            RiskLevel::Low,
            true,
        ),
        property(
            "p-2",
            "Marina Bay Villas",
            "ECR, Chennai",
            "Beachfront Villa",
            "Eight sea-facing villas on the East Coast Road operated as premium \
             serviced stays with yields tied to seasonal occupancy.",
            480_000,
            80,
            51,
            10.2,
            11.0,
            82,
            RiskLevel::Medium,
            true,
        ),
        property(
            "p-3",
            "Summit Business Park",
            "HITEC City, Hyderabad",
            "Commercial Office",
            "Grade-A office floor pre-leased to a listed IT services firm for \
             nine years with built-in 15% escalations.",
            320_000,
            150,
            121,
            9.6,
            9.8,
            100,
            RiskLevel::Low,
            false,
        ),
        property(
            "p-4",
            "Heritage Court",
            "Civil Lines, Jaipur",
            "Heritage Boutique Hotel",
            "A restored 1920s haveli running as an eighteen-key boutique hotel; \
             returns vary with tourist season.",
            180_000,
            120,
            44,
            12.8,
            13.5,
            68,
            RiskLevel::High,
            false,
        ),
        property(
            "p-5",
            "Lakeview Greens",
            "Powai, Mumbai",
            "Premium Apartment",
            "Lake-facing 3BHK inventory in a gated tower, leased unfurnished to \
             long-tenure corporate tenants.",
            540_000,
            100,
            88,
            7.2,
            7.9,
            94,
            RiskLevel::Low,
            true,
        ),
        property(
            "p-6",
            "Cyber Square Retail",
            "Sector 62, Noida",
            "High-Street Retail",
            "Ground-floor retail units anchored by a national coffee chain and a \
             premium grocer; footfall-linked rental upside.",
            210_000,
            140,
            59,
            11.4,
            12.2,
            77,
            RiskLevel::Medium,
            false,
        ),
    ];

    let holdings = vec![
        FragmentHolding {
            id: "f-1".to_string(),
            property_id: "p-1".to_string(),
            property_name: "Ashford Residency".to_string(),
            percentage_owned: 5.0,
            fragment_ids: vec![14, 15, 22, 23, 24],
            cost_basis: 1_250_000,
            income_received: 86_400,
            purchase_date: "2025-03-14".to_string(),
            next_payout: "2026-09-01".to_string(),
            issuance_date: "2025-03-18".to_string(),
            poa_issued: true,
            token_id: "OP-ASH-0014-8821".to_string(),
            chain_status: "Anchored".to_string(),
        },
        FragmentHolding {
            id: "f-2".to_string(),
            property_id: "p-3".to_string(),
            property_name: "Summit Business Park".to_string(),
            percentage_owned: 2.0,
            fragment_ids: vec![7, 8, 9],
            cost_basis: 960_000,
            income_received: 74_900,
            purchase_date: "2025-06-02".to_string(),
            next_payout: "2026-09-05".to_string(),
            issuance_date: "2025-06-06".to_string(),
            poa_issued: true,
            token_id: "OP-SBP-0007-3310".to_string(),
            chain_status: "Anchored".to_string(),
        },
        FragmentHolding {
            id: "f-3".to_string(),
            property_id: "p-2".to_string(),
            property_name: "Marina Bay Villas".to_string(),
            percentage_owned: 2.5,
            fragment_ids: vec![31, 32],
            cost_basis: 960_000,
            income_received: 51_200,
            purchase_date: "2025-11-20".to_string(),
            next_payout: "2026-09-03".to_string(),
            issuance_date: "2025-11-25".to_string(),
            poa_issued: true,
            token_id: "OP-MBV-0031-5577".to_string(),
            chain_status: "Anchored".to_string(),
        },
        FragmentHolding {
            id: "f-4".to_string(),
            property_id: "p-6".to_string(),
            property_name: "Cyber Square Retail".to_string(),
            percentage_owned: 1.4,
            fragment_ids: vec![102, 103],
            cost_basis: 420_000,
            income_received: 18_300,
            purchase_date: "2026-02-09".to_string(),
            next_payout: "2026-09-07".to_string(),
            issuance_date: "2026-02-12".to_string(),
            poa_issued: false,
            token_id: "OP-CSR-0102-1198".to_string(),
            chain_status: "Minting".to_string(),
        },
    ];

    let secondary_listings = vec![
        SecondaryListing {
            id: "sl-1".to_string(),
            property_name: "Ashford Residency".to_string(),
            fragment_no: 41,
            price: 272_000,
            original_price: 250_000,
            seller_rating: 4.8,
            days_listed: 3,
            condition: "POA attached".to_string(),
        },
        SecondaryListing {
            id: "sl-2".to_string(),
            property_name: "Lakeview Greens".to_string(),
            fragment_no: 17,
            price: 588_000,
            original_price: 540_000,
            seller_rating: 4.5,
            days_listed: 9,
            condition: "POA attached".to_string(),
        },
        SecondaryListing {
            id: "sl-3".to_string(),
            property_name: "Heritage Court".to_string(),
            fragment_no: 75,
            price: 176_000,
            original_price: 180_000,
            seller_rating: 4.1,
            days_listed: 21,
            condition: "Transfer pending".to_string(),
        },
        SecondaryListing {
            id: "sl-4".to_string(),
            property_name: "Summit Business Park".to_string(),
            fragment_no: 58,
            price: 349_000,
            original_price: 320_000,
            seller_rating: 4.9,
            days_listed: 1,
            condition: "POA attached".to_string(),
        },
    ];

    let notifications = vec![
        Notification {
            id: "n-1".to_string(),
            kind: NotificationKind::Income,
            title: "Rental payout credited".to_string(),
            message: "₹7,200 from Ashford Residency has been credited to your account.".to_string(),
            time: "Today, 9:04 AM".to_string(),
            read: false,
        },
        Notification {
            id: "n-2".to_string(),
            kind: NotificationKind::Market,
            title: "New listing in Marketplace".to_string(),
            message: "Cyber Square Retail fragments are now open for investment.".to_string(),
            time: "Today, 8:12 AM".to_string(),
            read: false,
        },
        Notification {
            id: "n-3".to_string(),
            kind: NotificationKind::Alert,
            title: "Price movement".to_string(),
            message: "Marina Bay Villas resale prices moved +3.1% this week.".to_string(),
            time: "Yesterday, 6:40 PM".to_string(),
            read: true,
        },
        Notification {
            id: "n-4".to_string(),
            kind: NotificationKind::Kyc,
            title: "KYC verified".to_string(),
            message: "Your video KYC has been approved. All features are unlocked.".to_string(),
            time: "Mon, 11:15 AM".to_string(),
            read: true,
        },
        Notification {
            id: "n-5".to_string(),
            kind: NotificationKind::Income,
            title: "Rental payout credited".to_string(),
            message: "₹6,250 from Summit Business Park has been credited.".to_string(),
            time: "Mon, 9:01 AM".to_string(),
            read: true,
        },
    ];

    let recent_income = vec![
        IncomeEntry {
            id: "in-1".to_string(),
            property: "Ashford Residency".to_string(),
            date: "2026-08-01".to_string(),
            amount: 7_200,
        },
        IncomeEntry {
            id: "in-2".to_string(),
            property: "Summit Business Park".to_string(),
            date: "2026-08-01".to_string(),
            amount: 6_250,
        },
        IncomeEntry {
            id: "in-3".to_string(),
            property: "Marina Bay Villas".to_string(),
            date: "2026-07-01".to_string(),
            amount: 4_800,
        },
        IncomeEntry {
            id: "in-4".to_string(),
            property: "Cyber Square Retail".to_string(),
            date: "2026-07-01".to_string(),
            amount: 2_050,
        },
    ];

    let income_history = vec![
        ("Jan".to_string(), 14_100),
        ("Feb".to_string(), 14_900),
        ("Mar".to_string(), 15_400),
        ("Apr".to_string(), 15_200),
        ("May".to_string(), 16_800),
        ("Jun".to_string(), 17_300),
        ("Jul".to_string(), 18_900),
        ("Aug".to_string(), 20_300),
    ];

    let price_history = vec![
        ("Jan".to_string(), 248_000),
        ("Feb".to_string(), 251_000),
        ("Mar".to_string(), 255_000),
        ("Apr".to_string(), 254_000),
        ("May".to_string(), 260_000),
        ("Jun".to_string(), 265_000),
        ("Jul".to_string(), 268_000),
        ("Aug".to_string(), 272_000),
    ];

    let wealth_today = wealth(&[
        ("9am", 3_538_000),
        ("11am", 3_540_500),
        ("1pm", 3_539_200),
        ("3pm", 3_544_800),
        ("5pm", 3_547_100),
        ("7pm", 3_550_400),
    ]);
    let wealth_month = wealth(&[
        ("W1", 3_471_000),
        ("W2", 3_492_500),
        ("W3", 3_518_000),
        ("W4", 3_550_400),
    ]);
    let wealth_year = wealth(&[
        ("Sep", 2_710_000),
        ("Nov", 2_895_000),
        ("Jan", 3_040_000),
        ("Mar", 3_215_000),
        ("May", 3_390_000),
        ("Jul", 3_502_000),
        ("Aug", 3_550_400),
    ]);

    let neighborhood = NeighborhoodData {
        walkability_score: 87,
        amenities: vec![
            "Metro 400m".to_string(),
            "International School".to_string(),
            "Multispecialty Hospital".to_string(),
            "High-Street Retail".to_string(),
            "Tech Park 2km".to_string(),
        ],
        growth_trend: vec![
            ("2022".to_string(), 6),
            ("2023".to_string(), 8),
            ("2024".to_string(), 11),
            ("2025".to_string(), 13),
            ("2026".to_string(), 15),
        ],
    };

    let kyc_documents = vec![
        KycDocument {
            id: "d-1".to_string(),
            name: "Aadhaar Card".to_string(),
            doc_type: "Government ID".to_string(),
            upload_date: "2025-03-10".to_string(),
            status: "Verified".to_string(),
        },
        KycDocument {
            id: "d-2".to_string(),
            name: "PAN Card".to_string(),
            doc_type: "Tax ID".to_string(),
            upload_date: "2025-03-10".to_string(),
            status: "Verified".to_string(),
        },
        KycDocument {
            id: "d-3".to_string(),
            name: "Address Proof".to_string(),
            doc_type: "Utility Bill".to_string(),
            upload_date: "2025-03-11".to_string(),
            status: "Verified".to_string(),
        },
        KycDocument {
            id: "d-4".to_string(),
            name: "Power of Attorney – Ashford".to_string(),
            doc_type: "Legal Document".to_string(),
            upload_date: "2025-03-18".to_string(),
            status: "Verified".to_string(),
        },
    ];

    MockData {
        user: UserProfile {
            name: "Rahul Kapoor".to_string(),
            initials: "RK".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            profession: "Software Engineer".to_string(),
            tier: "Premium Investor".to_string(),
            kyc_complete: true,
        },
        summary: PortfolioSummary {
            total_value: 3_550_400,
            total_roi: 12.6,
            rental_income: 230_800,
            properties_owned: 4,
            fragments_held: 12,
            next_payout: "2026-09-01".to_string(),
            health_score: 84,
        },
        properties,
        holdings,
        secondary_listings,
        notifications,
        recent_income,
        income_history,
        price_history,
        wealth_today,
        wealth_month,
        wealth_year,
        neighborhood,
        kyc_documents,
        market_stats: MarketStats {
            total_volume: "₹4.2 Cr".to_string(),
            active_listings: 23,
            avg_price_change: "+9.4%".to_string(),
            buyer_seller_ratio: "2.3 : 1".to_string(),
            total_trades_this_month: 148,
        },
        insight: AiInsight {
            title: "Portfolio Insight".to_string(),
            text: "Your holdings lean residential. Adding one commercial fragment \
                   (Summit Business Park has 29 left) would lift projected yield \
                   by roughly 0.4% while keeping risk Low."
                .to_string(),
        },
    }
}

fn wealth(points: &[(&str, u64)]) -> Vec<WealthPoint> {
    points
        .iter()
        .map(|(label, value)| WealthPoint {
            label: (*label).to_string(),
            value: *value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_property_id_falls_back_to_first() {
        let data = provider();
        let fallback = data.property_by_id("does-not-exist");
        assert_eq!(fallback.id, data.properties[0].id);
    }

    #[test]
    fn empty_id_falls_back_to_first_holding() {
        let data = provider();
        assert_eq!(data.holding_by_id("").id, data.holdings[0].id);
    }

    #[test]
    fn known_ids_resolve_exactly() {
        let data = provider();
        assert_eq!(data.property_by_id("p-3").name, "Summit Business Park");
        assert_eq!(data.holding_by_id("f-2").property_id, "p-3");
    }

    #[test]
    fn every_holding_references_a_seeded_property() {
        let data = provider();
        for holding in &data.holdings {
            assert!(
                data.properties.iter().any(|p| p.id == holding.property_id),
                "holding {} points at missing property {}",
                holding.id,
                holding.property_id
            );
        }
    }
}

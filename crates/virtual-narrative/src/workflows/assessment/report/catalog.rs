use super::super::domain::MaturityTier;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub name: &'static str,
    pub description: &'static str,
}

/// What an organization at `tier` can typically do with its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityProfile {
    pub tier: MaturityTier,
    pub tier_label: &'static str,
    pub capabilities: Vec<Capability>,
    pub example: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationProfile {
    pub tier: MaturityTier,
    pub tier_label: &'static str,
    pub recommendations: Vec<&'static str>,
    pub next_steps: Vec<&'static str>,
}

/// Static per-tier capability and recommendation tables.
///
/// Entries are kept in catalog order, which is also the order the roadmap is
/// rendered in. A catalog built with [`MaturityCatalog::from_parts`] may omit
/// tiers; lookups then return `None` and the report shows a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaturityCatalog {
    capabilities: Vec<CapabilityProfile>,
    recommendations: Vec<RecommendationProfile>,
}

impl Default for MaturityCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl MaturityCatalog {
    pub fn from_parts(
        capabilities: Vec<CapabilityProfile>,
        recommendations: Vec<RecommendationProfile>,
    ) -> Self {
        Self {
            capabilities,
            recommendations,
        }
    }

    pub fn standard() -> Self {
        let capabilities = MaturityTier::ordered()
            .into_iter()
            .map(standard_capabilities)
            .collect();
        let recommendations = MaturityTier::ordered()
            .into_iter()
            .map(standard_recommendations)
            .collect();
        Self::from_parts(capabilities, recommendations)
    }

    pub fn capabilities_for(&self, tier: MaturityTier) -> Option<&CapabilityProfile> {
        self.capabilities.iter().find(|profile| profile.tier == tier)
    }

    pub fn recommendations_for(&self, tier: MaturityTier) -> Option<&RecommendationProfile> {
        self.recommendations
            .iter()
            .find(|profile| profile.tier == tier)
    }

    /// Every capability profile except the current tier's, lower tiers included.
    pub fn roadmap(&self, current: MaturityTier) -> Vec<CapabilityProfile> {
        self.capabilities
            .iter()
            .filter(|profile| profile.tier != current)
            .cloned()
            .collect()
    }
}

fn capability(name: &'static str, description: &'static str) -> Capability {
    Capability { name, description }
}

fn standard_capabilities(tier: MaturityTier) -> CapabilityProfile {
    let (capabilities, example) = match tier {
        MaturityTier::InitialAdHoc => (
            vec![
                capability("Descriptive Analytics", "Reporting and summarizing past data."),
                capability(
                    "Manual Reporting",
                    "Periodic reporting using basic tools like Excel.",
                ),
                capability(
                    "Limited Automation",
                    "Minimal automation in data collection and reporting.",
                ),
            ],
            "Tracking monthly sales with basic Excel sheets.",
        ),
        MaturityTier::Developing => (
            vec![
                capability(
                    "Basic Diagnostic Analytics",
                    "Understanding why certain outcomes occurred.",
                ),
                capability("Standardized Reports", "Some standardization in reporting."),
                capability(
                    "Some Automation",
                    "Introduction of basic analytics tools and dashboards.",
                ),
            ],
            "Dashboards showing sales performance against targets.",
        ),
        MaturityTier::Defined => (
            vec![
                capability(
                    "Predictive Analytics",
                    "Forecasting future outcomes using statistical techniques.",
                ),
                capability(
                    "Automated Reporting",
                    "Self-service dashboards and automated insights.",
                ),
                capability(
                    "Data-Driven Decision-Making",
                    "Reports and analysis directly influence decisions.",
                ),
            ],
            "Predicting customer churn using historical data.",
        ),
        MaturityTier::Managed => (
            vec![
                capability(
                    "Prescriptive Analytics",
                    "Recommending actions based on predictive models.",
                ),
                capability(
                    "Advanced Reporting",
                    "Real-time dashboards and actionable insights.",
                ),
                capability(
                    "Integrated Analytics",
                    "Analytics tools embedded in business processes.",
                ),
            ],
            "Dynamic product recommendations based on customer behavior.",
        ),
        MaturityTier::Optimized => (
            vec![
                capability(
                    "Cognitive/AI Analytics",
                    "AI-driven insights and self-learning systems.",
                ),
                capability(
                    "Real-Time Decision-Making",
                    "Autonomous systems adjust to new data.",
                ),
                capability(
                    "Integrated AI",
                    "AI and machine learning integrated into core business functions.",
                ),
            ],
            "Real-time pricing adjustments based on market conditions.",
        ),
    };

    CapabilityProfile {
        tier,
        tier_label: tier.label(),
        capabilities,
        example,
    }
}

fn standard_recommendations(tier: MaturityTier) -> RecommendationProfile {
    let (recommendations, next_steps) = match tier {
        MaturityTier::InitialAdHoc => (
            vec![
                "Establish a formal data governance framework to define roles and responsibilities.",
                "Implement basic data quality checks to ensure accuracy and completeness.",
                "Start using simple reporting tools (e.g., Excel, Google Sheets) to track key metrics.",
            ],
            vec![
                "Move towards basic diagnostic analytics by introducing business intelligence tools (e.g., Tableau, Power BI).",
                "Standardize reporting processes to reduce manual effort.",
            ],
        ),
        MaturityTier::Developing => (
            vec![
                "Standardize data definitions and metadata management to improve consistency.",
                "Automate data collection and reporting processes to reduce manual effort.",
                "Introduce basic diagnostic analytics to understand trends and patterns.",
            ],
            vec![
                "Adopt predictive analytics to forecast future outcomes.",
                "Invest in self-service dashboards to empower business users.",
            ],
        ),
        MaturityTier::Defined => (
            vec![
                "Expand predictive analytics capabilities to forecast key business outcomes.",
                "Integrate analytics tools into business processes for real-time decision-making.",
                "Train staff on data-driven decision-making to maximize the value of analytics.",
            ],
            vec![
                "Explore prescriptive analytics to recommend actionable insights.",
                "Integrate real-time data streams for continuous monitoring.",
            ],
        ),
        MaturityTier::Managed => (
            vec![
                "Leverage prescriptive analytics to recommend optimal actions.",
                "Integrate advanced analytics tools into core business functions.",
                "Focus on real-time data processing and decision-making.",
            ],
            vec![
                "Adopt AI-driven analytics for cognitive insights and self-learning systems.",
                "Explore autonomous decision-making capabilities.",
            ],
        ),
        MaturityTier::Optimized => (
            vec![
                "Continuously refine AI and machine learning models for better accuracy.",
                "Expand autonomous decision-making capabilities across the organization.",
                "Foster a culture of innovation to explore new analytics use cases.",
            ],
            vec![
                "Stay ahead of industry trends by adopting emerging technologies.",
                "Focus on scaling AI-driven insights across all business units.",
            ],
        ),
    };

    RecommendationProfile {
        tier,
        tier_label: tier.label(),
        recommendations,
        next_steps,
    }
}

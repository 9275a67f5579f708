use super::domain::Pillar;
use serde::Serialize;

/// Answer recorded for a question nobody has answered yet. Encodes the lowest rating.
pub const DEFAULT_ANSWER: &str = " (1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Asked once up front to derive the pillar's weight.
    Importance,
    /// One of the three maturity questions asked inside a pillar section.
    Maturity,
}

/// A single radio question. Option `i` (zero based) encodes rating `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub key: &'static str,
    pub pillar: Pillar,
    pub kind: QuestionKind,
    pub ordinal: u8,
    pub prompt: &'static str,
    pub options: [&'static str; 5],
}

impl Question {
    /// Option text carrying `rating`, for ratings 1 through 5.
    pub fn option_for(&self, rating: u8) -> Option<&'static str> {
        let index = usize::from(rating).checked_sub(1)?;
        self.options.get(index).copied()
    }

    /// The option whose text equals `answer`, ignoring surrounding whitespace.
    pub fn matching_option(&self, answer: &str) -> Option<&'static str> {
        let answer = answer.trim();
        self.options.iter().copied().find(|option| *option == answer)
    }
}

/// Section intro shown above each pillar's questions.
pub const fn section_intro(pillar: Pillar) -> &'static str {
    match pillar {
        Pillar::Governance => "This section assesses how well data governance is established in your organization.",
        Pillar::Quality => "This section evaluates how well your organization maintains accurate, complete, and reliable data.",
        Pillar::MetadataManagement => "This section evaluates how well your organization manages metadata, including data definitions, lineage, and classification.",
        Pillar::Integration => "This section evaluates how well data is integrated across your organization, ensuring seamless interoperability.",
        Pillar::AnalyticsAndAi => "This section assesses your organization's ability to leverage data analytics and AI for decision-making.",
        Pillar::SecurityAndPrivacy => "This section evaluates how well your organization ensures data security, privacy, and compliance with regulations.",
    }
}

/// The fixed question catalog: six importance questions then three maturity
/// questions per pillar.
#[derive(Debug, Clone, Copy)]
pub struct Questionnaire {
    questions: &'static [Question],
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self {
            questions: &STANDARD_QUESTIONS,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn lookup(&self, key: &str) -> Option<&'static Question> {
        let key = key.trim();
        self.questions.iter().find(|question| question.key == key)
    }

    pub fn importance_question(&self, pillar: Pillar) -> Option<&'static Question> {
        self.questions
            .iter()
            .find(|question| question.pillar == pillar && question.kind == QuestionKind::Importance)
    }

    /// Maturity questions for `pillar`, in the order they are asked.
    pub fn pillar_questions(&self, pillar: Pillar) -> Vec<&'static Question> {
        let mut questions: Vec<&'static Question> = self
            .questions
            .iter()
            .filter(|question| question.pillar == pillar && question.kind == QuestionKind::Maturity)
            .collect();
        questions.sort_by_key(|question| question.ordinal);
        questions
    }
}

const IMPORTANT: [&str; 5] = [
    "Not Important (1)",
    "Slightly Important (2)",
    "Moderately Important (3)",
    "Very Important (4)",
    "Extremely Important (5)",
];

const CRITICAL: [&str; 5] = [
    "Not Critical (1)",
    "Slightly Critical (2)",
    "Moderately Critical (3)",
    "Very Critical (4)",
    "Extremely Critical (5)",
];

static STANDARD_QUESTIONS: [Question; 24] = [
    Question {
        key: "gov_weight",
        pillar: Pillar::Governance,
        kind: QuestionKind::Importance,
        ordinal: 1,
        prompt: "How important is it for your organization to have clear data ownership and accountability?",
        options: IMPORTANT,
    },
    Question {
        key: "dq_weight",
        pillar: Pillar::Quality,
        kind: QuestionKind::Importance,
        ordinal: 1,
        prompt: "How critical is data accuracy and completeness for your organization's decision-making?",
        options: CRITICAL,
    },
    Question {
        key: "mm_weight",
        pillar: Pillar::MetadataManagement,
        kind: QuestionKind::Importance,
        ordinal: 1,
        prompt: "How important is it for your organization to have a centralized metadata repository?",
        options: IMPORTANT,
    },
    Question {
        key: "di_weight",
        pillar: Pillar::Integration,
        kind: QuestionKind::Importance,
        ordinal: 1,
        prompt: "How important is seamless data integration across different systems for your organization?",
        options: IMPORTANT,
    },
    Question {
        key: "ai_weight",
        pillar: Pillar::AnalyticsAndAi,
        kind: QuestionKind::Importance,
        ordinal: 1,
        prompt: "How important is leveraging data analytics and AI for decision-making in your organization?",
        options: IMPORTANT,
    },
    Question {
        key: "sp_weight",
        pillar: Pillar::SecurityAndPrivacy,
        kind: QuestionKind::Importance,
        ordinal: 1,
        prompt: "How important is ensuring data security and compliance with regulations for your organization?",
        options: IMPORTANT,
    },
    Question {
        key: "gov_q1",
        pillar: Pillar::Governance,
        kind: QuestionKind::Maturity,
        ordinal: 1,
        prompt: "Does your organization have a formal Data Governance policy?",
        options: [
            "No governance exists (1)",
            "Some informal rules, but not enforced (2)",
            "Formal governance in place, but not consistently followed (3)",
            "Governance is standardized and monitored (4)",
            "Governance is automated, AI-driven, and continuously optimized (5)",
        ],
    },
    Question {
        key: "gov_q2",
        pillar: Pillar::Governance,
        kind: QuestionKind::Maturity,
        ordinal: 2,
        prompt: "Are roles and responsibilities clearly defined? (e.g., Data Stewards, Chief Data Officer)?",
        options: [
            "No defined roles (1)",
            "Some responsibilities exist but unclear (2)",
            "Defined roles exist, but accountability is weak (3)",
            "Roles are well-defined and monitored (4)",
            "Governance roles are optimized and continuously improved (5)",
        ],
    },
    Question {
        key: "gov_q3",
        pillar: Pillar::Governance,
        kind: QuestionKind::Maturity,
        ordinal: 3,
        prompt: "How frequently is your Data Governance policy reviewed and updated?",
        options: [
            "Never (1)",
            "Ad-hoc updates with no schedule (2)",
            "Reviewed every few years (3)",
            "Reviewed annually (4)",
            "Continuously improved with data-driven feedback (5)",
        ],
    },
    Question {
        key: "dq1",
        pillar: Pillar::Quality,
        kind: QuestionKind::Maturity,
        ordinal: 1,
        prompt: "How does your organization ensure data accuracy?",
        options: [
            "No process for accuracy (1)",
            "Basic manual checks (2)",
            "Defined validation rules (3)",
            "Automated quality checks (4)",
            "AI-powered real-time monitoring (5)",
        ],
    },
    Question {
        key: "dq2",
        pillar: Pillar::Quality,
        kind: QuestionKind::Maturity,
        ordinal: 2,
        prompt: "How is data completeness ensured in your organization?",
        options: [
            "No strategy in place (1)",
            "Manual data entry reviews (2)",
            "Automated missing value checks (3)",
            "Proactive data validation (4)",
            "Machine learning-driven data integrity (5)",
        ],
    },
    Question {
        key: "dq3",
        pillar: Pillar::Quality,
        kind: QuestionKind::Maturity,
        ordinal: 3,
        prompt: "How consistently is data updated and synchronized across systems?",
        options: [
            "No updates, data silos exist (1)",
            "Periodic manual updates (2)",
            "Automated scheduled updates (3)",
            "Real-time data sync (4)",
            "Self-healing, AI-driven consistency (5)",
        ],
    },
    Question {
        key: "mm1",
        pillar: Pillar::MetadataManagement,
        kind: QuestionKind::Maturity,
        ordinal: 1,
        prompt: "Does your organization maintain a centralized metadata repository?",
        options: [
            "No metadata repository exists (1)",
            "Some metadata exists in scattered documentation (2)",
            "A structured metadata catalog is available (3)",
            "A centralized metadata repository is maintained (4)",
            "Fully automated metadata management with AI-driven lineage tracking (5)",
        ],
    },
    Question {
        key: "mm2",
        pillar: Pillar::MetadataManagement,
        kind: QuestionKind::Maturity,
        ordinal: 2,
        prompt: "How well-defined and standardized are your data definitions?",
        options: [
            "No definitions exist (1)",
            "Ad-hoc definitions in some areas (2)",
            "Standardized definitions exist but not enforced (3)",
            "Organization-wide metadata standards are enforced (4)",
            "AI-driven metadata governance ensures full compliance (5)",
        ],
    },
    Question {
        key: "mm3",
        pillar: Pillar::MetadataManagement,
        kind: QuestionKind::Maturity,
        ordinal: 3,
        prompt: "How is data lineage tracked in your organization?",
        options: [
            "No lineage tracking (1)",
            "Basic manual lineage documentation (2)",
            "Automated lineage tracking for some systems (3)",
            "Comprehensive automated lineage tracking (4)",
            "AI-driven lineage tracking with real-time anomaly detection (5)",
        ],
    },
    Question {
        key: "di1",
        pillar: Pillar::Integration,
        kind: QuestionKind::Maturity,
        ordinal: 1,
        prompt: "How does your organization handle data integration between different systems?",
        options: [
            "No integration exists (1)",
            "Manual data transfers (2)",
            "Basic ETL processes in place (3)",
            "Automated API-based data flows (4)",
            "Real-time AI-driven integration across platforms (5)",
        ],
    },
    Question {
        key: "di2",
        pillar: Pillar::Integration,
        kind: QuestionKind::Maturity,
        ordinal: 2,
        prompt: "How frequently does your organization update and synchronize data across different platforms?",
        options: [
            "Never (1)",
            "Occasionally with manual intervention (2)",
            "Automated updates on a scheduled basis (3)",
            "Near real-time synchronization (4)",
            "AI-driven, self-healing data synchronization (5)",
        ],
    },
    Question {
        key: "di3",
        pillar: Pillar::Integration,
        kind: QuestionKind::Maturity,
        ordinal: 3,
        prompt: "Does your organization utilize cloud-based data integration platforms?",
        options: [
            "No cloud integration (1)",
            "Limited use of cloud data storage (2)",
            "Some cloud integration but no automation (3)",
            "Fully automated cloud-based integration (4)",
            "AI-optimized multi-cloud integration (5)",
        ],
    },
    Question {
        key: "ai1",
        pillar: Pillar::AnalyticsAndAi,
        kind: QuestionKind::Maturity,
        ordinal: 1,
        prompt: "What is the level of adoption of business intelligence and reporting in your organization?",
        options: [
            "No formal reporting (1)",
            "Basic manual reports with spreadsheets (2)",
            "Automated dashboards with static reports (3)",
            "Interactive BI tools with real-time data (4)",
            "AI-driven predictive analytics and self-service BI (5)",
        ],
    },
    Question {
        key: "ai2",
        pillar: Pillar::AnalyticsAndAi,
        kind: QuestionKind::Maturity,
        ordinal: 2,
        prompt: "How is machine learning used in your organization?",
        options: [
            "Not used at all (1)",
            "Basic experiments without production deployment (2)",
            "Some predictive models used in decision-making (3)",
            "Machine learning models are embedded in core processes (4)",
            "AI-driven automation and decision intelligence across the business (5)",
        ],
    },
    Question {
        key: "ai3",
        pillar: Pillar::AnalyticsAndAi,
        kind: QuestionKind::Maturity,
        ordinal: 3,
        prompt: "How well is AI governance and ethics considered in your organization?",
        options: [
            "No AI governance in place (1)",
            "Basic awareness but no formal guidelines (2)",
            "AI policies exist but are inconsistently followed (3)",
            "AI governance is well-defined and monitored (4)",
            "AI ethics, bias detection, and compliance are actively managed (5)",
        ],
    },
    Question {
        key: "sp1",
        pillar: Pillar::SecurityAndPrivacy,
        kind: QuestionKind::Maturity,
        ordinal: 1,
        prompt: "How is access to sensitive data controlled in your organization?",
        options: [
            "No access control (1)",
            "Basic password protection (2)",
            "Role-based access control (RBAC) in place (3)",
            "Multi-factor authentication and encryption (4)",
            "Zero-trust security model with continuous monitoring (5)",
        ],
    },
    Question {
        key: "sp2",
        pillar: Pillar::SecurityAndPrivacy,
        kind: QuestionKind::Maturity,
        ordinal: 2,
        prompt: "Does your organization comply with data protection regulations (e.g., GDPR, HIPAA, Kenya Data Protection Act)?",
        options: [
            "No compliance efforts (1)",
            "Minimal awareness, but no formal compliance (2)",
            "Compliance policies exist but are inconsistently followed (3)",
            "Fully compliant with regular audits (4)",
            "Continuous compliance monitoring and automated reporting (5)",
        ],
    },
    Question {
        key: "sp3",
        pillar: Pillar::SecurityAndPrivacy,
        kind: QuestionKind::Maturity,
        ordinal: 3,
        prompt: "How well does your organization handle data encryption and secure storage?",
        options: [
            "No encryption (1)",
            "Basic encryption for some data (2)",
            "Encryption used for sensitive data (3)",
            "Industry-standard encryption applied across systems (4)",
            "End-to-end encryption with automated security updates (5)",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::super::extract::extract_rating;
    use super::*;

    #[test]
    fn every_option_encodes_its_position() {
        for question in Questionnaire::standard().questions() {
            for (index, option) in question.options.iter().enumerate() {
                assert_eq!(
                    usize::from(extract_rating(option)),
                    index + 1,
                    "{} option {index} encodes the wrong rating",
                    question.key
                );
            }
        }
    }

    #[test]
    fn each_pillar_has_one_importance_and_three_maturity_questions() {
        let questionnaire = Questionnaire::standard();
        for pillar in Pillar::ordered() {
            assert!(questionnaire.importance_question(pillar).is_some());
            let ordinals: Vec<u8> = questionnaire
                .pillar_questions(pillar)
                .iter()
                .map(|question| question.ordinal)
                .collect();
            assert_eq!(ordinals, vec![1, 2, 3], "{pillar} question order");
        }
    }

    #[test]
    fn lookup_trims_keys_and_rejects_unknown_ids() {
        let questionnaire = Questionnaire::standard();
        assert_eq!(
            questionnaire.lookup(" dq1 ").map(|question| question.pillar),
            Some(Pillar::Quality)
        );
        assert!(questionnaire.lookup("dq4").is_none());
    }

    #[test]
    fn option_for_maps_ratings_to_text() {
        let question = Questionnaire::standard()
            .lookup("gov_q1")
            .expect("governance question");
        assert_eq!(
            question.option_for(2),
            Some("Some informal rules, but not enforced (2)")
        );
        assert_eq!(question.option_for(0), None);
        assert_eq!(question.option_for(6), None);
    }
}

//! Medium-neutral document tree for a [`MaturityReport`] plus text renderers.

use super::super::domain::WeightingMode;
use super::catalog::CapabilityProfile;
use super::summary::{CatalogSection, MaturityReport};
use mime::Mime;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const REPORT_TITLE: &str = "The Virtual Narrative: Data Maturity Assessment Report";

const CONTACT_NAME: &str = "Virtual Analytics";
const CONTACT_DETAILS: &str = "www.virtualanalytics.co.ke | info@virtualanalytics.co.ke";
const TEXT_WIDTH: usize = 80;

static TEXT_MARKDOWN: LazyLock<Mime> = LazyLock::new(|| {
    "text/markdown; charset=utf-8"
        .parse()
        .expect("static mime")
});

/// Color intent for headings; renderers without color ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Alert,
    Positive,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title {
        text: String,
    },
    Heading {
        level: u8,
        text: String,
        tone: Tone,
    },
    Paragraph {
        text: String,
        style: TextStyle,
        centered: bool,
    },
    Bullet {
        text: String,
    },
    LabeledItem {
        label: String,
        text: String,
    },
}

impl Block {
    fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
            tone: Tone::Neutral,
        }
    }

    fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            text: text.into(),
            style: TextStyle::Regular,
            centered: false,
        }
    }

    fn centered(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Paragraph {
            text: text.into(),
            style,
            centered: true,
        }
    }

    fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet { text: text.into() }
    }

    fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::LabeledItem {
            label: label.into(),
            text: text.into(),
        }
    }

    fn is_list_item(&self) -> bool {
        matches!(self, Self::Bullet { .. } | Self::LabeledItem { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Title { text }
            | Self::Heading { text, .. }
            | Self::Paragraph { text, .. }
            | Self::Bullet { text }
            | Self::LabeledItem { text, .. } => text,
        }
    }
}

/// Ordered report blocks, ready for any exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn from_report(report: &MaturityReport) -> Self {
        let mut blocks = vec![
            Block::Title {
                text: REPORT_TITLE.to_string(),
            },
            Block::paragraph(format!(
                "Scores below were computed using {}.",
                report.weighting.label().to_lowercase()
            )),
        ];

        let classification = &report.classification;
        let score_label = match report.weighting {
            WeightingMode::Dynamic => "Weighted Average Maturity Score",
            WeightingMode::Equal => "Average Maturity Score",
        };
        blocks.push(Block::heading(2, "Maturity Level and Score"));
        blocks.push(Block::paragraph(format!(
            "Your organization's data maturity level is: {}",
            classification.tier_label
        )));
        blocks.push(Block::paragraph(format!(
            "{score_label}: {:.2}/5",
            classification.score
        )));
        blocks.push(Block::paragraph(format!(
            "Recommendation: {}",
            classification.recommendation
        )));

        blocks.push(Block::heading(2, "Breakdown by Category (Weighted Scores)"));
        blocks.extend(report.breakdown.pillars.iter().map(|score| {
            Block::labeled(score.pillar_label, format!("{:.2}/5", score.weighted_score))
        }));

        blocks.push(Block::heading(2, "AI-Driven Insights"));
        blocks.extend(
            report
                .insights
                .iter()
                .map(|insight| Block::labeled(insight.pillar_label, insight.message)),
        );

        let capability_tone = if classification.tier.is_early_stage() {
            Tone::Alert
        } else {
            Tone::Positive
        };
        blocks.push(Block::Heading {
            level: 2,
            text: "Current Analytics Capabilities".to_string(),
            tone: capability_tone,
        });
        match &report.current_capabilities {
            CatalogSection::Available(profile) => push_capabilities(&mut blocks, profile),
            CatalogSection::Missing { placeholder } => {
                blocks.push(Block::paragraph(*placeholder));
            }
        }

        blocks.push(Block::heading(2, "Recommendations for Improvement"));
        match &report.recommendations {
            CatalogSection::Available(profile) => {
                blocks.extend(profile.recommendations.iter().copied().map(Block::bullet));
                blocks.push(Block::heading(3, "Next Steps"));
                blocks.extend(profile.next_steps.iter().copied().map(Block::bullet));
            }
            CatalogSection::Missing { placeholder } => {
                blocks.push(Block::paragraph(*placeholder));
            }
        }

        blocks.push(Block::heading(2, "Roadmap to Higher Maturity Levels"));
        blocks.push(Block::paragraph(
            "Here's what you can achieve by progressing to higher stages of data maturity:",
        ));
        for stage in &report.roadmap {
            blocks.push(Block::heading(3, stage.tier_label));
            push_capabilities(&mut blocks, stage);
        }

        blocks.push(Block::centered(
            "Thank you for using The Virtual Narrative: Data Maturity Assessment Tool!",
            TextStyle::Italic,
        ));
        blocks.push(Block::Heading {
            level: 2,
            text: "Need a Helping Hand Across the Chasm to Data Maturity?".to_string(),
            tone: Tone::Accent,
        });
        blocks.push(Block::centered(
            "Embarking on the journey to data maturity can be challenging, but you don't have to do it alone.",
            TextStyle::Regular,
        ));
        blocks.push(Block::centered(
            "Reach out to us for expert guidance and support:",
            TextStyle::Regular,
        ));
        blocks.push(Block::centered(CONTACT_NAME, TextStyle::Bold));
        blocks.push(Block::centered(CONTACT_DETAILS, TextStyle::Bold));
        blocks.push(Block::centered(
            "Let us help you unlock the full potential of your data!",
            TextStyle::Regular,
        ));

        Self { blocks }
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.blocks.iter().any(|block| {
            block.text().contains(needle)
                || matches!(block, Block::LabeledItem { label, .. } if label.contains(needle))
        })
    }
}

fn push_capabilities(blocks: &mut Vec<Block>, profile: &CapabilityProfile) {
    blocks.extend(
        profile
            .capabilities
            .iter()
            .map(|capability| Block::labeled(capability.name, capability.description)),
    );
    blocks.push(Block::paragraph(format!("Example: {}", profile.example)));
}

/// Export formats with a concrete renderer in this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    #[default]
    Text,
    Markdown,
}

impl DocumentFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" | "plain" => Some(Self::Text),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
        }
    }

    pub fn content_type(self) -> Mime {
        match self {
            Self::Text => mime::TEXT_PLAIN_UTF_8,
            Self::Markdown => TEXT_MARKDOWN.clone(),
        }
    }

    pub fn render(self, document: &ReportDocument) -> String {
        let mut output = String::new();
        let mut previous: Option<&Block> = None;

        for block in &document.blocks {
            if let Some(previous) = previous {
                // List items stay contiguous; everything else is separated.
                if !(previous.is_list_item() && block.is_list_item()) {
                    output.push('\n');
                }
            }
            match self {
                Self::Text => render_text(block, &mut output),
                Self::Markdown => render_markdown(block, &mut output),
            }
            previous = Some(block);
        }

        output
    }
}

fn render_text(block: &Block, output: &mut String) {
    match block {
        Block::Title { text } => {
            output.push_str(text);
            output.push('\n');
            output.push_str(&"=".repeat(text.chars().count()));
        }
        Block::Heading { level, text, .. } if *level <= 2 => {
            output.push_str(text);
            output.push('\n');
            output.push_str(&"-".repeat(text.chars().count()));
        }
        Block::Heading { text, .. } => {
            output.push_str(text);
            output.push(':');
        }
        Block::Paragraph { text, centered, .. } => {
            if *centered {
                output.push_str(format!("{text:^width$}", width = TEXT_WIDTH).trim_end());
            } else {
                output.push_str(text);
            }
        }
        Block::Bullet { text } => {
            output.push_str("- ");
            output.push_str(text);
        }
        Block::LabeledItem { label, text } => {
            output.push_str(&format!("- {label}: {text}"));
        }
    }
    output.push('\n');
}

fn render_markdown(block: &Block, output: &mut String) {
    match block {
        Block::Title { text } => output.push_str(&format!("# {text}")),
        Block::Heading { level, text, .. } => {
            let hashes = "#".repeat(usize::from((*level).clamp(2, 6)));
            output.push_str(&format!("{hashes} {text}"));
        }
        Block::Paragraph { text, style, .. } => match style {
            TextStyle::Regular => output.push_str(text),
            TextStyle::Bold => output.push_str(&format!("**{text}**")),
            TextStyle::Italic => output.push_str(&format!("_{text}_")),
        },
        Block::Bullet { text } => output.push_str(&format!("- {text}")),
        Block::LabeledItem { label, text } => output.push_str(&format!("- **{label}**: {text}")),
    }
    output.push('\n');
}

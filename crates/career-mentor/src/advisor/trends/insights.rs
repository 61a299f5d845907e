use serde::Serialize;

use super::dataset::{DemandEntry, TrendsDataset};

/// One actionable recommendation for a career track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerAdvice {
    pub track: &'static str,
    pub tip: &'static str,
}

/// The curated recommendations shown under the charts.
pub fn standard_advice() -> Vec<CareerAdvice> {
    vec![
        CareerAdvice {
            track: "AI/ML",
            tip: "Focus on Python, TensorFlow, and real-world projects.",
        },
        CareerAdvice {
            track: "Web Dev",
            tip: "Master React, Next.js, and full-stack deployment.",
        },
        CareerAdvice {
            track: "Cybersecurity",
            tip: "Gain certifications like CEH, CompTIA Security+.",
        },
        CareerAdvice {
            track: "Blockchain",
            tip: "Learn Solidity and smart contract development.",
        },
    ]
}

/// A single highlighted skill with its demand score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightEntry {
    pub skill: &'static str,
    pub demand: u8,
}

impl From<DemandEntry> for HighlightEntry {
    fn from(entry: DemandEntry) -> Self {
        Self {
            skill: entry.skill,
            demand: entry.demand,
        }
    }
}

/// Headline insights derived from the demand column: the leader, the
/// runner-up, and everything still climbing behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsHighlights {
    pub fastest_growing: HighlightEntry,
    pub career_hotspot: HighlightEntry,
    pub emerging: Vec<&'static str>,
}

/// Rank the demand entries and pick out the highlights. Needs at least two
/// entries to say anything useful.
pub fn derive_highlights(dataset: &TrendsDataset) -> Option<TrendsHighlights> {
    let mut ranked = dataset.demand.clone();
    ranked.sort_by(|a, b| b.demand.cmp(&a.demand).then_with(|| a.skill.cmp(b.skill)));

    let mut ranked = ranked.into_iter();
    let fastest_growing = ranked.next()?;
    let career_hotspot = ranked.next()?;
    let emerging = ranked.map(|entry| entry.skill).collect();

    Some(TrendsHighlights {
        fastest_growing: fastest_growing.into(),
        career_hotspot: career_hotspot.into(),
        emerging,
    })
}

/// Everything the trends page renders: the raw dataset, the derived
/// highlights, and the curated advice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendsReport {
    pub dataset: TrendsDataset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<TrendsHighlights>,
    pub advice: Vec<CareerAdvice>,
}

impl TrendsReport {
    pub fn standard() -> Self {
        Self::from_dataset(TrendsDataset::standard())
    }

    pub fn from_dataset(dataset: TrendsDataset) -> Self {
        let highlights = derive_highlights(&dataset);
        Self {
            dataset,
            highlights,
            advice: standard_advice(),
        }
    }
}

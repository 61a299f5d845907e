use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Years covered by every growth series, oldest first.
pub const TREND_YEARS: [u16; 5] = [2020, 2021, 2022, 2023, 2024];

/// Adoption of one skill track across [`TREND_YEARS`], in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthSeries {
    pub skill: &'static str,
    pub adoption: [u8; 5],
}

/// Market demand for one skill track, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemandEntry {
    pub skill: &'static str,
    pub demand: u8,
}

/// The curated market snapshot behind the trends page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendsDataset {
    pub growth: Vec<GrowthSeries>,
    pub demand: Vec<DemandEntry>,
}

impl TrendsDataset {
    pub fn standard() -> Self {
        Self {
            growth: vec![
                GrowthSeries {
                    skill: "AI",
                    adoption: [40, 55, 70, 85, 95],
                },
                GrowthSeries {
                    skill: "WebDev",
                    adoption: [60, 70, 75, 80, 85],
                },
                GrowthSeries {
                    skill: "DataScience",
                    adoption: [30, 50, 65, 75, 90],
                },
            ],
            demand: vec![
                DemandEntry {
                    skill: "AI/ML",
                    demand: 95,
                },
                DemandEntry {
                    skill: "Web Dev",
                    demand: 80,
                },
                DemandEntry {
                    skill: "Cloud",
                    demand: 75,
                },
                DemandEntry {
                    skill: "Cybersecurity",
                    demand: 70,
                },
                DemandEntry {
                    skill: "Blockchain",
                    demand: 60,
                },
            ],
        }
    }
}

#[derive(Debug)]
pub enum TrendsImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Demand { skill: String, value: String },
}

impl std::fmt::Display for TrendsImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendsImportError::Io(err) => write!(f, "failed to read demand export: {}", err),
            TrendsImportError::Csv(err) => write!(f, "invalid demand CSV data: {}", err),
            TrendsImportError::Demand { skill, value } => {
                write!(f, "demand for {} is not a percentage: {}", skill, value)
            }
        }
    }
}

impl std::error::Error for TrendsImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrendsImportError::Io(err) => Some(err),
            TrendsImportError::Csv(err) => Some(err),
            TrendsImportError::Demand { .. } => None,
        }
    }
}

impl From<std::io::Error> for TrendsImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TrendsImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Refreshes the demand column of the standard dataset from a CSV export
/// with `Skill,Demand` columns. Rows naming unknown skills are skipped;
/// growth series are never touched.
pub struct DemandCsvImporter;

impl DemandCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TrendsDataset, TrendsImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<TrendsDataset, TrendsImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut dataset = TrendsDataset::standard();

        for row in csv_reader.deserialize::<DemandRow>() {
            let row = row?;
            let skill = row.skill.trim();
            if let Some(entry) = dataset
                .demand
                .iter_mut()
                .find(|entry| entry.skill.eq_ignore_ascii_case(skill))
            {
                let demand: u8 =
                    row.demand
                        .trim()
                        .parse()
                        .map_err(|_| TrendsImportError::Demand {
                            skill: skill.to_string(),
                            value: row.demand.clone(),
                        })?;
                entry.demand = demand.min(100);
            }
        }

        Ok(dataset)
    }
}

#[derive(Debug, Deserialize)]
struct DemandRow {
    #[serde(rename = "Skill", alias = "skill")]
    skill: String,
    #[serde(rename = "Demand", alias = "demand")]
    demand: String,
}

use crate::vocab;
use serde::Deserialize;

/// One record of the status/region table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusRecord {
    #[serde(rename = "Genus")]
    pub genus: String,
    #[serde(rename = "Species")]
    pub species: String,
    #[serde(rename = "Subspecies")]
    pub subspecies: String,
    #[serde(rename = "Common name")]
    pub common_name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Region")]
    pub region: String,
}

impl StatusRecord {
    /// Genus and species, plus the subspecies when one is given
    pub fn scientific_name(&self) -> String {
        if self.subspecies.is_empty() {
            format!("{} {}", self.genus, self.species)
        } else {
            format!("{} {} {}", self.genus, self.species, self.subspecies)
        }
    }

    /// Expand the record into one row per `/`-separated status term.
    pub fn expand(&self) -> Vec<SpeciesGeographyRow> {
        let scientific_name = self.scientific_name();
        self.status
            .split('/')
            .map(|term| SpeciesGeographyRow {
                scientific_name: scientific_name.clone(),
                common_name: self.common_name.clone(),
                region: self.region.clone(),
                status: vocab::status_label(term).to_string(),
            })
            .collect()
    }
}

/// A row of the `species_geography` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesGeographyRow {
    pub scientific_name: String,
    pub common_name: String,
    pub region: String,
    pub status: String,
}

/// One record of the sequence metadata table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SequenceRecord {
    pub accession: String,
    pub title: String,
    pub length: String,
    pub taxid: String,
    pub scientific_name: String,
    pub common_name: String,
    pub marker: String,
    pub genomic_location: String,
}

/// Row counts produced by a loader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub records: usize,
    pub rows: usize,
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
///
/// Field names map onto the column headers of the published SpaceX launch
/// CSV, so the same struct deserializes CSV and records-oriented JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// 0 = failure, 1 = success.
    #[serde(rename = "class")]
    pub outcome_class: u8,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome_class: u8,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome_class,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome_class == 1
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed column indices.
///
/// Never mutated after construction; the UI shares it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in first-appearance order.
    sites: Vec<String>,
    /// Distinct booster categories in first-appearance order.
    booster_categories: Vec<String>,
    /// Observed `[min, max]` payload mass, `None` for an empty table.
    payload_bounds: Option<PayloadRange>,
}

impl LaunchDataset {
    /// Build column indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut payload_bounds: Option<PayloadRange> = None;

        for rec in &records {
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            if !booster_categories.contains(&rec.booster_version_category) {
                booster_categories.push(rec.booster_version_category.clone());
            }
            let mass = rec.payload_mass_kg;
            payload_bounds = Some(match payload_bounds {
                None => PayloadRange::new(mass, mass),
                Some(b) => PayloadRange::new(b.min.min(mass), b.max.max(mass)),
            });
        }

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        self.payload_bounds
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Selection values
// ---------------------------------------------------------------------------

/// Which launch site the dropdown currently points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub const ALL_KEY: &'static str = "ALL";

    pub fn site(name: impl Into<String>) -> Self {
        SiteSelection::Site(name.into())
    }

    /// Whether a record launched from `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }

    /// Human-readable label for dropdowns.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Launch Sites",
            SiteSelection::Site(s) => s,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", Self::ALL_KEY),
            SiteSelection::Site(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for SiteSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_KEY {
            Ok(SiteSelection::All)
        } else {
            Ok(SiteSelection::Site(s.to_string()))
        }
    }
}

/// Inclusive payload mass interval in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min <= mass <= max`. An inverted range contains nothing.
    pub fn contains(&self, mass: f64) -> bool {
        self.min <= mass && mass <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.0}, {:.0}] kg", self.min, self.max)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The three-launch table used across the crate's tests.
    pub(crate) fn three_launches() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, 1, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 1500.0, 0, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 2500.0, 1, "B4"),
        ])
    }

    #[test]
    fn indices_follow_first_appearance() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("VAFB SLC-4E", 9600.0, 0, "FT"),
            LaunchRecord::new("CCAFS LC-40", 0.0, 1, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 475.0, 1, "B4"),
        ]);
        assert_eq!(ds.sites(), ["VAFB SLC-4E", "CCAFS LC-40"]);
        assert_eq!(ds.booster_categories(), ["FT", "v1.0", "B4"]);
        assert_eq!(ds.payload_bounds(), Some(PayloadRange::new(0.0, 9600.0)));
        assert!(ds.has_site("CCAFS LC-40"));
        assert!(!ds.has_site("KSC LC-39A"));
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), None);
        assert!(ds.sites().is_empty());
    }

    #[test]
    fn site_selection_parses_all_key() {
        assert_eq!("ALL".parse::<SiteSelection>().unwrap(), SiteSelection::All);
        assert_eq!(
            "KSC LC-39A".parse::<SiteSelection>().unwrap(),
            SiteSelection::site("KSC LC-39A")
        );
        assert_eq!(SiteSelection::All.to_string(), "ALL");
        assert_eq!(SiteSelection::All.label(), "All Launch Sites");
    }

    #[test]
    fn payload_range_is_inclusive() {
        let r = PayloadRange::new(1000.0, 3000.0);
        assert!(r.contains(1000.0));
        assert!(r.contains(3000.0));
        assert!(!r.contains(999.9));
        assert!(!r.contains(3000.1));

        let inverted = PayloadRange::new(3000.0, 1000.0);
        assert!(inverted.is_inverted());
        assert!(!inverted.contains(2000.0));
    }
}

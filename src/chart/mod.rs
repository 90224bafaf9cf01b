//! Chart descriptions produced by the dashboard handlers.
//!
//! Handlers are pure functions of the shared [`LaunchDataset`] and the
//! current selection. They return plain data; `ui::plot` turns it into
//! egui_plot items.
//!
//! [`LaunchDataset`]: crate::data::model::LaunchDataset

pub mod outcome;
pub mod scatter;

use serde::Serialize;

/// One wedge of a proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

/// Label → value breakdown rendered as a pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
    /// Shown instead of the pie when a selection could not be honoured.
    pub notice: Option<String>,
}

impl PieChart {
    pub fn new(title: impl Into<String>, slices: Vec<Slice>) -> Self {
        Self {
            title: title.into(),
            slices,
            notice: None,
        }
    }

    /// A chart with no slices, carrying the reason it is empty.
    pub fn empty(title: impl Into<String>, notice: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slices: Vec::new(),
            notice: Some(notice.into()),
        }
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Share of each slice in `[0, 1]`; all zero when nothing is counted.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|s| if total > 0.0 { s.value / total } else { 0.0 })
            .collect()
    }
}

/// One plotted launch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_version_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
    pub notice: Option<String>,
}

impl ScatterChart {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points grouped by booster category, categories in first-appearance order.
    pub fn series(&self) -> Vec<(&str, Vec<[f64; 2]>)> {
        let mut series: Vec<(&str, Vec<[f64; 2]>)> = Vec::new();
        for p in &self.points {
            let xy = [p.payload_mass_kg, f64::from(p.outcome_class)];
            match series
                .iter()
                .position(|(cat, _)| *cat == p.booster_version_category)
            {
                Some(i) => series[i].1.push(xy),
                None => series.push((p.booster_version_category.as_str(), vec![xy])),
            }
        }
        series
    }
}

use std::sync::Arc;

use crate::chart::outcome::outcome_chart;
use crate::chart::scatter::scatter_chart;
use crate::chart::{PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::config::Config;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};
use crate::reactive::{Control, OutputSlot, slots_for};

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// What the user has picked in the side panel. One per window.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, shared read-only.
    pub dataset: Arc<LaunchDataset>,

    pub selection: SelectionState,

    /// Extent and step of the payload sliders.
    pub slider_bounds: PayloadRange,
    pub slider_step: f64,

    /// Output slot A.
    pub pie: PieChart,
    /// Output slot B.
    pub scatter: ScatterChart,

    /// Indices of launches behind the scatter plot (cached for the table).
    pub visible_indices: Vec<usize>,

    pub site_colors: ColorMap,
    pub booster_colors: ColorMap,

    pub title: String,
}

impl AppState {
    /// Build the initial state: all sites, the full observed payload range.
    pub fn new(dataset: Arc<LaunchDataset>, config: &Config) -> Self {
        let slider_bounds = config.slider_bounds(dataset.payload_bounds());
        let selection = SelectionState {
            site: SiteSelection::All,
            payload: dataset.payload_bounds().unwrap_or(slider_bounds),
        };

        let mut state = Self {
            site_colors: ColorMap::new(dataset.sites()),
            booster_colors: ColorMap::new(dataset.booster_categories()),
            pie: PieChart::new(String::new(), Vec::new()),
            scatter: ScatterChart {
                title: String::new(),
                points: Vec::new(),
                notice: None,
            },
            visible_indices: Vec::new(),
            dataset,
            selection,
            slider_bounds,
            slider_step: config.slider_step,
            title: config.title.clone(),
        };
        state.refresh(OutputSlot::SuccessPie);
        state.refresh(OutputSlot::PayloadScatter);
        state
    }

    /// Dropdown entries: "All" followed by every site in the dataset.
    pub fn site_options(&self) -> Vec<SiteSelection> {
        std::iter::once(SiteSelection::All)
            .chain(self.dataset.sites().iter().cloned().map(SiteSelection::Site))
            .collect()
    }

    /// Re-run every handler bound to `control`.
    pub fn on_control_changed(&mut self, control: Control) {
        for slot in slots_for(control) {
            self.refresh(slot);
        }
    }

    /// Recompute one output slot from the current selection.
    pub fn refresh(&mut self, slot: OutputSlot) {
        let ds = &self.dataset;
        let sel = &self.selection;
        match slot {
            OutputSlot::SuccessPie => {
                self.pie = outcome_chart(ds, &sel.site);
                log::debug!("Pie for {}: {} slices", sel.site, self.pie.slices.len());
            }
            OutputSlot::PayloadScatter => {
                self.scatter = scatter_chart(ds, &sel.site, sel.payload);
                self.visible_indices = ds
                    .records()
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| {
                        sel.payload.contains(r.payload_mass_kg) && sel.site.matches(&r.launch_site)
                    })
                    .map(|(i, _)| i)
                    .collect();
                log::debug!(
                    "Scatter for {} in {}: {} points",
                    sel.site,
                    sel.payload,
                    self.scatter.points.len()
                );
            }
        }
    }

    /// Pick a site from the dropdown.
    pub fn select_site(&mut self, site: SiteSelection) {
        if self.selection.site != site {
            self.selection.site = site;
            self.on_control_changed(Control::SiteDropdown);
        }
    }

    /// Move the lower payload handle; the upper handle follows if crossed.
    pub fn set_payload_min(&mut self, min: f64) {
        let min = min.clamp(self.slider_bounds.min, self.slider_bounds.max);
        let max = self.selection.payload.max.max(min);
        self.set_payload(PayloadRange::new(min, max));
    }

    /// Move the upper payload handle; the lower handle follows if crossed.
    pub fn set_payload_max(&mut self, max: f64) {
        let max = max.clamp(self.slider_bounds.min, self.slider_bounds.max);
        let min = self.selection.payload.min.min(max);
        self.set_payload(PayloadRange::new(min, max));
    }

    /// Back to the full observed payload range.
    pub fn reset_payload(&mut self) {
        let full = self.dataset.payload_bounds().unwrap_or(self.slider_bounds);
        self.set_payload(full);
    }

    fn set_payload(&mut self, range: PayloadRange) {
        if self.selection.payload != range {
            self.selection.payload = range;
            self.on_control_changed(Control::PayloadSlider);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::three_launches;

    fn state() -> AppState {
        AppState::new(Arc::new(three_launches()), &Config::default())
    }

    #[test]
    fn starts_with_all_sites_and_observed_range() {
        let s = state();
        assert_eq!(s.selection.site, SiteSelection::All);
        assert_eq!(s.selection.payload, PayloadRange::new(500.0, 2500.0));
        assert_eq!(s.slider_bounds, PayloadRange::new(0.0, 10000.0));
        assert_eq!(s.pie.title, "Success Count for All Launch Sites");
        assert_eq!(s.scatter.points.len(), 3);
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn options_are_derived_from_dataset() {
        let labels: Vec<String> = state().site_options().iter().map(|o| o.to_string()).collect();
        assert_eq!(labels, ["ALL", "CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn site_change_updates_both_slots() {
        let mut s = state();
        s.select_site(SiteSelection::site("KSC LC-39A"));
        assert_eq!(s.pie.title, "Total Success Launches for KSC LC-39A");
        assert_eq!(s.pie.value_of("1"), Some(1.0));
        assert_eq!(s.scatter.points.len(), 1);
        assert_eq!(s.visible_indices, vec![2]);
    }

    #[test]
    fn slider_change_leaves_pie_alone() {
        let mut s = state();
        let pie_before = s.pie.clone();
        s.set_payload_max(1000.0);
        assert_eq!(s.pie, pie_before);
        assert_eq!(s.selection.payload, PayloadRange::new(500.0, 1000.0));
        assert_eq!(s.scatter.points.len(), 1);
        assert_eq!(s.visible_indices, vec![0]);
    }

    #[test]
    fn crossing_handles_drags_the_other_along() {
        let mut s = state();
        s.set_payload_min(4000.0);
        assert_eq!(s.selection.payload, PayloadRange::new(4000.0, 4000.0));
        s.set_payload_max(1000.0);
        assert_eq!(s.selection.payload, PayloadRange::new(1000.0, 1000.0));
        assert!(!s.selection.payload.is_inverted());

        s.set_payload_max(20000.0);
        assert_eq!(s.selection.payload.max, 10000.0);

        s.reset_payload();
        assert_eq!(s.selection.payload, PayloadRange::new(500.0, 2500.0));
    }

    #[test]
    fn table_rows_match_scatter_points() {
        let mut s = state();
        s.select_site(SiteSelection::site("CCAFS LC-40"));
        s.set_payload_min(1000.0);
        assert_eq!(s.visible_indices.len(), s.scatter.points.len());
        assert_eq!(s.visible_indices, vec![1]);
    }

    #[test]
    fn unknown_site_renders_empty_charts() {
        let mut s = state();
        s.select_site(SiteSelection::site("Boca Chica"));
        assert!(s.pie.is_empty());
        assert!(s.pie.notice.is_some());
        assert!(s.scatter.is_empty());
        assert!(s.visible_indices.is_empty());
    }
}

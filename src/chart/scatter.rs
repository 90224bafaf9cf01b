use super::{ScatterChart, ScatterPoint};
use crate::data::filter::filter_by_payload;
use crate::data::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelection};
use crate::error::SelectionError;

pub fn title_for(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Success count on Payload mass for All Sites".to_string(),
        SiteSelection::Site(s) => format!("Success count on Payload mass for {s}"),
    }
}

/// Project payload-filtered records onto (payload, outcome, category) points,
/// keeping only `site` unless it is `All`. Input order is preserved.
pub fn project_scatter<'a, I>(records: I, site: &SiteSelection) -> ScatterChart
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let points = records
        .into_iter()
        .filter(|r| site.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome_class: r.outcome_class,
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect();

    ScatterChart {
        title: title_for(site),
        points,
        notice: None,
    }
}

/// UI-boundary handler for the scatter slot: payload filter, then site.
pub fn scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    payload: PayloadRange,
) -> ScatterChart {
    let mut chart = project_scatter(filter_by_payload(dataset.records(), payload), site);

    let problem = match site {
        SiteSelection::Site(s) if !dataset.has_site(s) => {
            Some(SelectionError::UnknownSite { site: s.clone() })
        }
        _ if payload.is_inverted() => Some(SelectionError::InvertedRange { range: payload }),
        _ => None,
    };
    if let Some(err) = problem {
        log::warn!("Scatter chart: {err}");
        chart.notice = Some(format!("No data: {err}"));
    }
    chart
}

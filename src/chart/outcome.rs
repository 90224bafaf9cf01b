use std::collections::BTreeMap;

use super::{PieChart, Slice};
use crate::data::model::{LaunchDataset, SiteSelection};
use crate::error::SelectionError;

pub fn title_for(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Success Count for All Launch Sites".to_string(),
        SiteSelection::Site(s) => format!("Total Success Launches for {s}"),
    }
}

/// Success breakdown for the site dropdown.
///
/// * `All`: one slice per site (first-appearance order) valued at the sum of
///   the outcome column, i.e. the site's success count. Failures do not
///   contribute to the slice sizes.
/// * `Site(s)`: the site's launches grouped by outcome class, labelled
///   `"0"` / `"1"`, valued at the record count.
pub fn aggregate_outcomes(
    dataset: &LaunchDataset,
    site: &SiteSelection,
) -> Result<PieChart, SelectionError> {
    match site {
        SiteSelection::All => {
            let slices = dataset
                .sites()
                .iter()
                .map(|name| Slice {
                    label: name.clone(),
                    value: dataset
                        .records()
                        .iter()
                        .filter(|r| &r.launch_site == name)
                        .map(|r| f64::from(r.outcome_class))
                        .sum(),
                })
                .collect();
            Ok(PieChart::new(title_for(site), slices))
        }
        SiteSelection::Site(name) => {
            if !dataset.has_site(name) {
                return Err(SelectionError::UnknownSite { site: name.clone() });
            }
            let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
            for rec in dataset.records().iter().filter(|r| &r.launch_site == name) {
                *counts.entry(rec.outcome_class).or_default() += 1;
            }
            let slices = counts
                .into_iter()
                .map(|(class, n)| Slice {
                    label: class.to_string(),
                    value: n as f64,
                })
                .collect();
            Ok(PieChart::new(title_for(site), slices))
        }
    }
}

/// UI-boundary handler for the outcome pie: never fails.
pub fn outcome_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    aggregate_outcomes(dataset, site).unwrap_or_else(|err| {
        log::warn!("Outcome chart: {err}");
        PieChart::empty(title_for(site), format!("No data: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::three_launches;
    use crate::data::model::LaunchRecord;

    fn larger() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, 0, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 500.0, 0, "v1.1"),
            LaunchRecord::new("CCAFS LC-40", 2000.0, 1, "FT"),
            LaunchRecord::new("KSC LC-39A", 5300.0, 1, "FT"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, 1, "B4"),
            LaunchRecord::new("CCAFS SLC-40", 3600.0, 0, "B5"),
            LaunchRecord::new("KSC LC-39A", 6070.0, 0, "B4"),
            LaunchRecord::new("CCAFS LC-40", 4400.0, 1, "FT"),
        ])
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let chart = aggregate_outcomes(&three_launches(), &SiteSelection::All).unwrap();
        assert_eq!(chart.title, "Success Count for All Launch Sites");
        assert_eq!(
            chart.slices,
            vec![
                Slice { label: "CCAFS LC-40".into(), value: 1.0 },
                Slice { label: "KSC LC-39A".into(), value: 1.0 },
            ]
        );
    }

    #[test]
    fn single_site_splits_by_class() {
        let chart =
            aggregate_outcomes(&three_launches(), &SiteSelection::site("CCAFS LC-40")).unwrap();
        assert_eq!(chart.title, "Total Success Launches for CCAFS LC-40");
        assert_eq!(chart.value_of("0"), Some(1.0));
        assert_eq!(chart.value_of("1"), Some(1.0));
        assert_eq!(chart.slices[0].label, "0");
    }

    #[test]
    fn all_sites_total_matches_success_sum() {
        let ds = larger();
        let chart = aggregate_outcomes(&ds, &SiteSelection::All).unwrap();
        let successes: f64 = ds.records().iter().map(|r| f64::from(r.outcome_class)).sum();
        assert_eq!(chart.total(), successes);
        // A site without successes keeps a zero slice.
        assert_eq!(chart.value_of("CCAFS SLC-40"), Some(0.0));
    }

    #[test]
    fn site_slices_cover_every_launch_of_that_site() {
        let ds = larger();
        for site in ds.sites() {
            let chart = aggregate_outcomes(&ds, &SiteSelection::site(site.clone())).unwrap();
            let launches = ds.records().iter().filter(|r| &r.launch_site == site).count();
            let zeros = chart.value_of("0").unwrap_or(0.0);
            let ones = chart.value_of("1").unwrap_or(0.0);
            assert_eq!(zeros + ones, launches as f64, "{site}");
        }
    }

    #[test]
    fn only_observed_classes_get_slices() {
        let chart = aggregate_outcomes(&larger(), &SiteSelection::site("CCAFS SLC-40")).unwrap();
        assert_eq!(chart.slices, vec![Slice { label: "0".into(), value: 1.0 }]);
    }

    #[test]
    fn unknown_site_is_an_error() {
        let err = aggregate_outcomes(&three_launches(), &SiteSelection::site("Boca Chica"))
            .unwrap_err();
        assert_eq!(err, SelectionError::UnknownSite { site: "Boca Chica".into() });
    }

    #[test]
    fn handler_turns_unknown_site_into_empty_chart() {
        let chart = outcome_chart(&three_launches(), &SiteSelection::site("Boca Chica"));
        assert!(chart.is_empty());
        assert_eq!(chart.title, "Total Success Launches for Boca Chica");
        assert!(chart.notice.unwrap().contains("Boca Chica"));
    }
}

use proptest::prelude::*;
use tcd_indices::{Measurement, compute};
use tcd_reference::ReferenceCatalog;
use tcd_report::Report;

proptest! {
    #[test]
    fn upsert_twice_equals_once(
        idx in 0usize..9,
        vps in 0.0_f64..300.0,
        vfd in 0.0_f64..150.0,
    ) {
        let catalog = ReferenceCatalog::builtin();
        let id = catalog.entries()[idx].id.clone();
        let result = compute(&Measurement::new(id.as_str(), vps, vfd), &catalog).unwrap();

        let mut once = Report::new();
        once.upsert(result.clone());

        let mut twice = Report::new();
        twice.upsert(result.clone());
        twice.upsert(result);

        prop_assert_eq!(twice.len(), 1);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn at_most_one_row_per_artery(picks in prop::collection::vec(0usize..9, 0..40)) {
        let catalog = ReferenceCatalog::builtin();
        let mut report = Report::new();
        for (n, idx) in picks.iter().enumerate() {
            let id = catalog.entries()[*idx].id.as_str();
            let m = Measurement::new(id, 50.0 + n as f64, 20.0);
            report.upsert(compute(&m, &catalog).unwrap());
        }

        let mut distinct: Vec<usize> = picks.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(report.len(), distinct.len());
    }
}

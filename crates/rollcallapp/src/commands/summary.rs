use crate::model::{AttendanceRecord, Status, StatusCount};

/// Tallies records per status, in [`Status::ALL`] order, zero counts included.
pub fn aggregate(records: &[AttendanceRecord]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Status::ALL
        .iter()
        .map(|&status| StatusCount { status, count: 0 })
        .collect();

    for record in records {
        if let Some(bucket) = counts.iter_mut().find(|c| c.status == record.status) {
            bucket.count += 1;
        }
    }

    tracing::debug!(records = records.len(), "Aggregated status counts");
    counts
}

pub fn total(counts: &[StatusCount]) -> usize {
    counts.iter().map(|c| c.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::filter;
    use crate::model::FilterWindow;
    use crate::store::memory::fixtures::{date, StoreFixture};
    use crate::store::RecordStore;

    fn count_of(counts: &[StatusCount], status: Status) -> usize {
        counts.iter().find(|c| c.status == status).unwrap().count
    }

    #[test]
    fn empty_view_has_every_status_at_zero() {
        let counts = aggregate(&[]);
        assert_eq!(counts.len(), 5);
        assert!(counts.iter().all(|c| c.count == 0));
        let order: Vec<Status> = counts.iter().map(|c| c.status).collect();
        assert_eq!(order, Status::ALL.to_vec());
    }

    #[test]
    fn november_single_day_scenario() {
        let store = StoreFixture::november().store;
        let w = FilterWindow::new(date("2025-11-11"), date("2025-11-11")).unwrap();
        let view = filter::run(store.list(), &w);
        let counts = aggregate(&view);

        assert_eq!(count_of(&counts, Status::Office), 0);
        assert_eq!(count_of(&counts, Status::MedicalLeave), 1);
        assert_eq!(count_of(&counts, Status::AnnualLeave), 1);
        assert_eq!(count_of(&counts, Status::PublicHoliday), 0);
        assert_eq!(count_of(&counts, Status::ExternalAssignment), 1);
        assert_eq!(total(&counts), view.len());
    }

    #[test]
    fn counts_sum_to_view_length() {
        let store = StoreFixture::november()
            .with_record("D", "JMIP", Status::Office, "2025-11-11", "2025-11-11")
            .with_record("E", "JMIP", Status::Office, "2025-11-12", "2025-11-12")
            .with_record("F", "JKRC", Status::PublicHoliday, "2025-11-12", "2025-11-12")
            .store;
        for (start, end) in [
            ("2025-11-01", "2025-11-30"),
            ("2025-11-12", "2025-11-12"),
            ("2025-11-14", "2025-11-20"),
        ] {
            let w = FilterWindow::new(date(start), date(end)).unwrap();
            let view = filter::run(store.list(), &w);
            assert_eq!(total(&aggregate(&view)), view.len());
        }
    }

    #[test]
    fn later_window_counts_are_all_zero() {
        let store = StoreFixture::november().store;
        let w = FilterWindow::new(date("2025-11-14"), date("2025-11-20")).unwrap();
        let counts = aggregate(&filter::run(store.list(), &w));
        assert_eq!(counts.len(), 5);
        assert_eq!(total(&counts), 0);
    }
}

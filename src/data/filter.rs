use super::model::{Dataset, JobRecord, Selection};

// ---------------------------------------------------------------------------
// City filter
// ---------------------------------------------------------------------------

/// Keep the records whose canonical city equals `city` exactly, in input order.
pub fn filter_records<'a, I>(records: I, city: &str) -> Vec<&'a JobRecord>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    records
        .into_iter()
        .filter(|r| r.city.as_deref() == Some(city))
        .collect()
}

/// The records of `dataset` located in the selected city.
pub fn filter_by_city<'a>(dataset: &'a Dataset, selection: &Selection) -> Vec<&'a JobRecord> {
    filter_records(dataset.records(), selection.city())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DataSource;

    fn record(title: &str, city: Option<&str>) -> JobRecord {
        JobRecord {
            job_title: title.to_string(),
            city: city.map(str::to_string),
            locality: "Centre".to_string(),
            salary: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(
            vec![
                record("Chef", Some("Mumbai")),
                record("Driver", Some("Pune")),
                record("Cook", None),
                record("Waiter", Some("Mumbai")),
            ],
            DataSource::Remote("test".to_string()),
        )
    }

    #[test]
    fn keeps_matching_rows_in_order() {
        let ds = dataset();
        let sel = ds.select("Mumbai").unwrap();
        let titles: Vec<&str> = filter_by_city(&ds, &sel)
            .iter()
            .map(|r| r.job_title.as_str())
            .collect();
        assert_eq!(titles, ["Chef", "Waiter"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = dataset();
        let sel = ds.select("Pune").unwrap();
        let once = filter_by_city(&ds, &sel);
        let twice = filter_records(once.iter().copied(), sel.city());
        assert_eq!(once, twice);
        assert_eq!(once, filter_by_city(&ds, &sel));
    }

    #[test]
    fn match_is_exact() {
        let ds = dataset();
        assert!(filter_records(ds.records(), "mumbai").is_empty());
        assert!(filter_records(ds.records(), "Mumbai ").is_empty());
    }
}

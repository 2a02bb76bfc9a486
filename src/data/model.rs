use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// JobRecord – one row of the source CSV after normalization
// ---------------------------------------------------------------------------

/// A single job posting.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub job_title: String,
    /// Title-cased city; `None` when the source cell was blank.
    pub city: Option<String>,
    pub locality: String,
    /// Numeric salary; `None` when the source text had no parsable number.
    pub salary: Option<f64>,
}

// ---------------------------------------------------------------------------
// DataSource – where a dataset came from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(String),
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full normalized dataset with its sorted set of distinct cities.
///
/// Only the loader builds one, and only after the required columns were found,
/// so every `Dataset` is complete.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<JobRecord>,
    cities: BTreeSet<String>,
    source: DataSource,
}

impl Dataset {
    pub(crate) fn from_records(records: Vec<JobRecord>, source: DataSource) -> Self {
        let cities = records.iter().filter_map(|r| r.city.clone()).collect();
        Dataset {
            records,
            cities,
            source,
        }
    }

    /// All records in source order.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Distinct non-missing cities, sorted.
    pub fn cities(&self) -> &BTreeSet<String> {
        &self.cities
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Select `city` if it is one of this dataset's cities.
    pub fn select(&self, city: &str) -> Option<Selection> {
        self.cities
            .get(city)
            .map(|c| Selection { city: c.clone() })
    }

    /// The first city in sorted order, if there is any city at all.
    pub fn default_selection(&self) -> Option<Selection> {
        self.cities
            .first()
            .map(|c| Selection { city: c.clone() })
    }
}

// ---------------------------------------------------------------------------
// Selection – the active city filter
// ---------------------------------------------------------------------------

/// A city known to exist in the dataset it was obtained from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    city: String,
}

impl Selection {
    pub fn city(&self) -> &str {
        &self.city
    }
}

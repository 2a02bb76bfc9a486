use crate::data::filter::filter_by_city;
use crate::data::model::{Dataset, JobRecord, Selection};
use crate::data::summary::{
    self, HistogramBin, LocalityCount, DENSITY_POINTS, SALARY_BINS, TOP_LOCALITIES,
};

/// Shown in place of the listing when the selected city has no postings.
pub const NO_JOBS_NOTICE: &str = "No jobs found for the selected city.";

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Everything one render draws, derived from a dataset and a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub city: String,
    pub listing: Listing,
    pub salary_chart: SalaryChart,
    pub locality_chart: LocalityChart,
}

impl PageView {
    pub fn listing_heading(&self) -> String {
        format!("Available Jobs in {}", self.city)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Cards(Vec<JobCard>),
    NoJobs,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobCard {
    pub job_title: String,
    pub locality: String,
    pub salary: Option<f64>,
}

impl JobCard {
    fn from_record(record: &JobRecord) -> Self {
        JobCard {
            job_title: record.job_title.clone(),
            locality: record.locality.clone(),
            salary: record.salary,
        }
    }

    /// The raw number, unit-less, or a dash when missing.
    pub fn salary_label(&self) -> String {
        match self.salary {
            Some(v) => format!("{v}"),
            None => "—".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryChart {
    pub title: String,
    pub bins: Vec<HistogramBin>,
    /// Density curve scaled to bin counts; empty when it cannot be estimated.
    pub density: Vec<[f64; 2]>,
}

impl SalaryChart {
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalityChart {
    pub title: String,
    /// Most postings first.
    pub bars: Vec<LocalityCount>,
}

// ---------------------------------------------------------------------------
// Render
// ---------------------------------------------------------------------------

/// Derive the full page for `selection`. Pure: same inputs, same page.
pub fn render(dataset: &Dataset, selection: &Selection) -> PageView {
    let city = selection.city();
    let rows = filter_by_city(dataset, selection);

    let listing = if rows.is_empty() {
        Listing::NoJobs
    } else {
        Listing::Cards(rows.iter().map(|r| JobCard::from_record(r)).collect())
    };

    let salaries = summary::salaries(&rows);
    let bins = summary::histogram(&salaries, SALARY_BINS);
    let density = bins
        .first()
        .map(|b| summary::density_curve(&salaries, b.width(), DENSITY_POINTS))
        .unwrap_or_default();
    if !salaries.is_empty() && density.is_empty() {
        log::warn!("Not enough salary spread in {city} for a density curve");
    }

    PageView {
        city: city.to_string(),
        listing,
        salary_chart: SalaryChart {
            title: format!("Salary Distribution in {city}"),
            bins,
            density,
        },
        locality_chart: LocalityChart {
            title: format!("Top Hiring Localities in {city}"),
            bars: summary::top_localities(&rows, TOP_LOCALITIES),
        },
    }
}

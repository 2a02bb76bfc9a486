use std::path::PathBuf;

use crate::config::Config;
use crate::data::error::LoadError;
use crate::data::loader;
use crate::data::model::{DataSource, Dataset, Selection};
use crate::view::{self, PageView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the current (or last attempted) dataset comes from.
    pub source: DataSource,

    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Dataset>,

    /// The active city.
    pub selection: Option<Selection>,

    /// Page derived from `dataset` and `selection`.
    pub view: Option<PageView>,

    /// The one error banner shown instead of any content.
    pub error: Option<String>,

    /// Transient status line (e.g. export results).
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            source: DataSource::Remote(config.csv_url()),
            dataset: None,
            selection: None,
            view: None,
            error: None,
            status_message: None,
        }
    }

    /// Fetch `source` again and rebuild everything.
    pub fn reload(&mut self) {
        let result = loader::load(&self.source);
        self.apply_load(result);
    }

    /// Switch to a local CSV file.
    pub fn open_file(&mut self, path: PathBuf) {
        self.source = DataSource::File(path);
        self.reload();
    }

    /// Ingest a load result. Failure clears every derived value and leaves a
    /// single error message.
    pub fn apply_load(&mut self, result: Result<Dataset, LoadError>) {
        match result {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} job postings in {} cities from {}",
                    dataset.len(),
                    dataset.cities().len(),
                    dataset.source()
                );
                if dataset.is_empty() {
                    log::warn!("{} has a header but no rows", dataset.source());
                }
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", self.source);
                self.dataset = None;
                self.selection = None;
                self.view = None;
                self.error = Some(e.user_message());
            }
        }
    }

    /// Install a new dataset, keeping the current city when it still exists.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection = self
            .selection
            .as_ref()
            .and_then(|s| dataset.select(s.city()))
            .or_else(|| dataset.default_selection());
        self.dataset = Some(dataset);
        self.error = None;
        self.status_message = None;
        self.refresh_view();
    }

    /// Change the active city; unknown cities are ignored.
    pub fn select_city(&mut self, city: &str) {
        let Some(selection) = self.dataset.as_ref().and_then(|ds| ds.select(city)) else {
            log::warn!("Ignoring selection of unknown city {city:?}");
            return;
        };
        if self.selection.as_ref() != Some(&selection) {
            self.selection = Some(selection);
            self.refresh_view();
        }
    }

    fn refresh_view(&mut self) {
        self.view = match (&self.dataset, &self.selection) {
            (Some(ds), Some(sel)) => Some(view::render(ds, sel)),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;
    use crate::view::Listing;

    fn dataset(csv: &str) -> Dataset {
        parse_csv(csv.as_bytes(), DataSource::Remote("test".to_string())).unwrap()
    }

    fn state() -> AppState {
        AppState::new(&Config::default())
    }

    const JOBS: &str = "job title,city,salary,locality\n\
        Chef,pune,100,Baner\n\
        Driver,mumbai,200,Andheri\n";

    #[test]
    fn source_comes_from_config() {
        assert_eq!(
            state().source,
            DataSource::Remote(Config::default().csv_url())
        );
    }

    #[test]
    fn loading_selects_first_city_and_renders() {
        let mut st = state();
        st.apply_load(Ok(dataset(JOBS)));

        assert_eq!(st.selection.as_ref().unwrap().city(), "Mumbai");
        let view = st.view.as_ref().unwrap();
        assert_eq!(view.city, "Mumbai");
        assert!(matches!(&view.listing, Listing::Cards(cards) if cards.len() == 1));
        assert!(st.error.is_none());
    }

    #[test]
    fn selecting_a_city_rerenders() {
        let mut st = state();
        st.apply_load(Ok(dataset(JOBS)));
        st.select_city("Pune");
        assert_eq!(st.view.as_ref().unwrap().city, "Pune");

        st.select_city("Atlantis");
        assert_eq!(st.selection.as_ref().unwrap().city(), "Pune");
    }

    #[test]
    fn failed_load_leaves_only_the_error() {
        let mut st = state();
        st.apply_load(Ok(dataset(JOBS)));

        let missing = parse_csv(
            "job title,city,locality\nChef,pune,Baner\n".as_bytes(),
            DataSource::Remote("test".to_string()),
        );
        st.apply_load(missing);

        assert!(st.dataset.is_none());
        assert!(st.selection.is_none());
        assert!(st.view.is_none());
        assert_eq!(
            st.error.as_deref(),
            Some("Your CSV file must contain the following columns: job title, city, salary, locality")
        );
    }

    #[test]
    fn reload_keeps_selected_city_when_present() {
        let mut st = state();
        st.apply_load(Ok(dataset(JOBS)));
        st.select_city("Pune");

        st.apply_load(Ok(dataset("job title,city,salary,locality\nCook,pune,50,Aundh\n")));
        assert_eq!(st.selection.as_ref().unwrap().city(), "Pune");

        st.apply_load(Ok(dataset("job title,city,salary,locality\nCook,goa,50,Panaji\n")));
        assert_eq!(st.selection.as_ref().unwrap().city(), "Goa");
    }

    #[test]
    fn dataset_without_cities_has_no_view() {
        let mut st = state();
        st.apply_load(Ok(dataset("job title,city,salary,locality\n")));
        assert!(st.dataset.is_some());
        assert!(st.view.is_none());
        assert!(st.error.is_none());
    }

    #[test]
    fn open_missing_file_reports_error() {
        let mut st = state();
        st.open_file(std::env::temp_dir().join("job-finder-no-such-file.csv"));
        assert!(st.error.as_deref().unwrap().starts_with("Error while processing the file:"));
        assert!(st.view.is_none());
    }
}

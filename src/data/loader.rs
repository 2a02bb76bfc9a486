use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::error::LoadError;
use super::model::{DataSource, Dataset};
use super::normalize::ColumnMap;

/// Shared download link for a Google Drive file id.
pub fn drive_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?id={file_id}")
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Reload whatever `source` points at.
pub fn load(source: &DataSource) -> Result<Dataset, LoadError> {
    match source {
        DataSource::Remote(url) => load_url(url),
        DataSource::File(path) => load_file(path),
    }
}

/// Download a CSV over HTTP(S) and build a dataset from it. Blocks until the
/// whole body has arrived; there is no retry.
pub fn load_url(url: &str) -> Result<Dataset, LoadError> {
    let body = fetch_text(url)?;
    parse_csv(body.as_bytes(), DataSource::Remote(url.to_string()))
}

/// Read a CSV from the local filesystem.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(file, DataSource::File(path.to_path_buf()))
}

/// Parse CSV text (header row first) into a normalized [`Dataset`].
///
/// Missing required columns abort before any row is read. Short rows are
/// accepted with absent cells read as blank; a row with more fields than the
/// header is malformed.
pub fn parse_csv<R: Read>(reader: R, source: DataSource) -> Result<Dataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);

    let headers = reader.headers()?;
    let expected = headers.len();
    let columns = ColumnMap::resolve(headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        if row.len() > expected {
            return Err(LoadError::Malformed {
                line: row.position().map_or(0, |p| p.line()),
                expected,
                found: row.len(),
            });
        }
        records.push(columns.record(&row));
    }

    let missing_salary = records.iter().filter(|r| r.salary.is_none()).count();
    let missing_city = records.iter().filter(|r| r.city.is_none()).count();
    log::debug!(
        "{source}: {} rows, {missing_salary} without a numeric salary, {missing_city} without a city",
        records.len()
    );

    Ok(Dataset::from_records(records, source))
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

fn fetch_text(url: &str) -> Result<String, LoadError> {
    let fetch_err = |source: reqwest::Error| LoadError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("job-finder/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(fetch_err)?;

    log::info!("Fetching {url}");
    let response = client.get(url).send().map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(fetch_err)?;
    if looks_like_html(&body) {
        return Err(LoadError::NotCsv {
            url: url.to_string(),
        });
    }
    Ok(body)
}

fn looks_like_html(body: &str) -> bool {
    let head: String = body
        .trim_start_matches('\u{feff}')
        .trim_start()
        .chars()
        .take(15)
        .collect::<String>()
        .to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

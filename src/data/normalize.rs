use csv::StringRecord;

use super::error::LoadError;
use super::model::JobRecord;

/// Column names every source CSV must carry, compared after [`normalize_header`].
pub const REQUIRED_COLUMNS: [&str; 4] = ["job title", "city", "salary", "locality"];

// ---------------------------------------------------------------------------
// Header resolution
// ---------------------------------------------------------------------------

/// Lower-case and trim a header name. A leading byte-order mark is dropped.
pub fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Positions of the required columns inside a CSV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    job_title: usize,
    city: usize,
    salary: usize,
    locality: usize,
}

impl ColumnMap {
    /// Locate the required columns, failing with every missing name at once.
    /// Duplicate headers resolve to their first occurrence.
    pub fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let position = |wanted: &str| names.iter().position(|n| n == wanted);

        let found: Vec<Option<usize>> = REQUIRED_COLUMNS.iter().map(|c| position(*c)).collect();
        match found[..] {
            [Some(job_title), Some(city), Some(salary), Some(locality)] => Ok(ColumnMap {
                job_title,
                city,
                salary,
                locality,
            }),
            _ => Err(LoadError::MissingColumns {
                missing: REQUIRED_COLUMNS
                    .iter()
                    .zip(&found)
                    .filter(|(_, idx)| idx.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect(),
            }),
        }
    }

    /// Build a typed record from one CSV row. Short rows read as blank cells.
    /// Job title and locality are kept verbatim.
    pub fn record(&self, row: &StringRecord) -> JobRecord {
        let cell = |idx: usize| row.get(idx).unwrap_or("");
        JobRecord {
            job_title: cell(self.job_title).to_string(),
            city: normalize_city(cell(self.city)),
            locality: cell(self.locality).to_string(),
            salary: parse_salary(cell(self.salary)),
        }
    }
}

// ---------------------------------------------------------------------------
// Cell coercion
// ---------------------------------------------------------------------------

/// Trim and title-case a city name; blank cells are missing.
pub fn normalize_city(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(title_case(trimmed))
    }
}

/// Naive word capitalization: a cased character is upper-cased when the
/// character before it is not cased (not a letter with an upper/lower form),
/// lower-cased otherwise.
///
/// `"navi-mumbai"` becomes `"Navi-Mumbai"`, and `"3rd block"` becomes `"3Rd Block"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}

/// Keep only ASCII digits and `.`, then parse. Anything unparsable is missing.
pub fn parse_salary(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_lowercased_and_trimmed() {
        assert_eq!(normalize_header("  Job Title "), "job title");
        assert_eq!(normalize_header("\u{feff}CITY"), "city");
    }

    #[test]
    fn resolve_finds_columns_in_any_order() {
        let headers = StringRecord::from(vec!["Salary", " LOCALITY", "extra", "City ", "Job Title"]);
        let cols = ColumnMap::resolve(&headers).unwrap();
        let row = StringRecord::from(vec!["₹45,000", "Andheri", "x", "mumbai", "Chef"]);
        let rec = cols.record(&row);
        assert_eq!(rec.job_title, "Chef");
        assert_eq!(rec.city.as_deref(), Some("Mumbai"));
        assert_eq!(rec.locality, "Andheri");
        assert_eq!(rec.salary, Some(45000.0));
    }

    #[test]
    fn resolve_reports_all_missing_columns() {
        let headers = StringRecord::from(vec!["job title", "city"]);
        match ColumnMap::resolve(&headers) {
            Err(LoadError::MissingColumns { missing }) => {
                assert_eq!(missing, ["salary", "locality"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_header_uses_first_occurrence() {
        let headers = StringRecord::from(vec!["job title", "city", "City", "salary", "locality"]);
        let cols = ColumnMap::resolve(&headers).unwrap();
        let row = StringRecord::from(vec!["Chef", "pune", "delhi", "100", "Baner"]);
        assert_eq!(cols.record(&row).city.as_deref(), Some("Pune"));
    }

    #[test]
    fn short_row_reads_blank_cells() {
        let headers = StringRecord::from(vec!["job title", "city", "salary", "locality"]);
        let cols = ColumnMap::resolve(&headers).unwrap();
        let rec = cols.record(&StringRecord::from(vec!["Driver", "pune"]));
        assert_eq!(rec.salary, None);
        assert_eq!(rec.locality, "");
    }

    #[test]
    fn title_and_locality_are_not_trimmed() {
        let headers = StringRecord::from(vec!["job title", "city", "salary", "locality"]);
        let cols = ColumnMap::resolve(&headers).unwrap();
        let rec = cols.record(&StringRecord::from(vec![" Chef", "pune", "100", " Andheri"]));
        assert_eq!(rec.job_title, " Chef");
        assert_eq!(rec.locality, " Andheri");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("new delhi"), "New Delhi");
        assert_eq!(title_case("NEW DELHI"), "New Delhi");
        assert_eq!(title_case("navi-mumbai"), "Navi-Mumbai");
        assert_eq!(title_case("3rd block"), "3Rd Block");
    }

    #[test]
    fn blank_city_is_missing() {
        assert_eq!(normalize_city("   "), None);
        assert_eq!(normalize_city("  bengaluru "), Some("Bengaluru".to_string()));
    }

    #[test]
    fn salary_keeps_digits_and_decimal_point() {
        assert_eq!(parse_salary("₹45,000"), Some(45000.0));
        assert_eq!(parse_salary("INR 12,500.50 per month"), Some(12500.5));
        assert_eq!(parse_salary("-500"), Some(500.0));
        assert_eq!(parse_salary("12,000 - 15,000"), Some(1_200_015_000.0));
    }

    #[test]
    fn salary_without_digits_is_missing() {
        assert_eq!(parse_salary("N/A"), None);
        assert_eq!(parse_salary(""), None);
        assert_eq!(parse_salary("."), None);
        assert_eq!(parse_salary("1.2.3"), None);
    }
}

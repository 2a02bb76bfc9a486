use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::view::{JobCard, Listing, PageView, NO_JOBS_NOTICE};

const CARD_STYLE: &str = "margin-bottom:15px; padding:10px; border:1px solid #e0e0e0; \
                          border-radius:8px; background-color:#f9f9f9;";

/// Standalone HTML page with one card per listed job.
pub fn listing_html(page: &PageView) -> String {
    let heading = escape(&page.listing_heading());
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{heading}</title>\n</head>\n<body>\n<h3>{heading}</h3>\n"
    );

    match &page.listing {
        Listing::Cards(cards) => {
            for card in cards {
                html.push_str(&card_html(card));
            }
        }
        Listing::NoJobs => {
            let _ = writeln!(html, "<p class=\"notice\">{}</p>", escape(NO_JOBS_NOTICE));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn card_html(card: &JobCard) -> String {
    format!(
        "<div style=\"{CARD_STYLE}\">\n  <h5 style=\"margin:0;\">{}</h5>\n  \
         <p style=\"margin:0;\"><strong>{}</strong><br>Salary: <strong>{}</strong></p>\n</div>\n",
        escape(&card.job_title),
        escape(&card.locality),
        escape(&card.salary_label()),
    )
}

/// Write [`listing_html`] to `path`.
pub fn write_listing_html(page: &PageView, path: &Path) -> Result<()> {
    std::fs::write(path, listing_html(page))
        .with_context(|| format!("writing {}", path.display()))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{LocalityChart, SalaryChart};

    fn page(listing: Listing) -> PageView {
        PageView {
            city: "Mumbai".to_string(),
            listing,
            salary_chart: SalaryChart {
                title: String::new(),
                bins: Vec::new(),
                density: Vec::new(),
            },
            locality_chart: LocalityChart {
                title: String::new(),
                bars: Vec::new(),
            },
        }
    }

    #[test]
    fn one_card_per_job_with_escaped_text() {
        let html = listing_html(&page(Listing::Cards(vec![
            JobCard {
                job_title: "Chef <Head>".to_string(),
                locality: "Andheri & West".to_string(),
                salary: Some(45000.0),
            },
            JobCard {
                job_title: "Waiter".to_string(),
                locality: "Bandra".to_string(),
                salary: None,
            },
        ])));

        assert_eq!(html.matches("<div ").count(), 2);
        assert!(html.contains("Chef &lt;Head&gt;"));
        assert!(html.contains("Andheri &amp; West"));
        assert!(html.contains("Salary: <strong>45000</strong>"));
        assert!(html.contains("Salary: <strong>—</strong>"));
        assert!(html.contains("<h3>Available Jobs in Mumbai</h3>"));
    }

    #[test]
    fn empty_listing_exports_notice() {
        let html = listing_html(&page(Listing::NoJobs));
        assert!(html.contains(NO_JOBS_NOTICE));
        assert!(!html.contains("<div "));
    }

    #[test]
    fn writes_file() {
        let path = std::env::temp_dir().join(format!("job-finder-export-{}.html", std::process::id()));
        write_listing_html(&page(Listing::NoJobs), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        std::fs::remove_file(&path).unwrap();
    }
}

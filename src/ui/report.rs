use std::io::{self, Write};

use crate::data::filter::FilterOptions;
use crate::data::stats::Stats;
use crate::state::{AppState, LoadState};

// ---------------------------------------------------------------------------
// Plain-text presenter (`--report`)
// ---------------------------------------------------------------------------

/// Write the listing and statistics for the current state.
///
/// On a failed load only the error message is written and the statistics
/// section is omitted.
pub fn write_report<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    match &state.load_state {
        LoadState::Ready => {}
        LoadState::Failed(msg) => return writeln!(out, "{msg}"),
        LoadState::Loading => return writeln!(out, "Loading…"),
    }

    if state.visible_indices.is_empty() {
        writeln!(out, "No companies match the current filters.")?;
    }
    for company in state.visible() {
        writeln!(out, "{}", company.name)?;
        writeln!(out, "  {} | {}", company.sector, company.location)?;
        if !company.description.is_empty() {
            writeln!(out, "  {}", company.description)?;
        }
        writeln!(
            out,
            "  Revenue: {}",
            company.revenue.as_deref().unwrap_or("")
        )?;
        writeln!(out)?;
    }

    write_stats(out, &state.stats)
}

fn write_stats<W: Write>(out: &mut W, stats: &Stats) -> io::Result<()> {
    writeln!(out, "Statistics")?;
    writeln!(out, "  Total companies: {}", stats.count)?;
    writeln!(out, "  Average revenue: {}", stats.average_revenue_label())?;
    writeln!(out, "  Companies per country:")?;
    if stats.country_counts.is_empty() {
        writeln!(out, "    No data")?;
    }
    for entry in &stats.country_counts {
        writeln!(out, "    {}: {}", entry.country, entry.count)?;
    }
    Ok(())
}

/// Write the sector and country option lists.
pub fn write_filter_options<W: Write>(out: &mut W, options: &FilterOptions) -> io::Result<()> {
    writeln!(out, "Sectors:")?;
    for sector in &options.sectors {
        writeln!(out, "  {sector}")?;
    }
    writeln!(out, "Countries:")?;
    for country in &options.countries {
        writeln!(out, "  {country}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Criteria;
    use crate::data::model::Company;
    use crate::error::DataLoadError;
    use std::path::PathBuf;

    fn make_company(name: &str, sector: &str, location: &str, revenue: &str) -> Company {
        Company {
            name: name.to_string(),
            sector: sector.to_string(),
            location: location.to_string(),
            description: String::new(),
            revenue: Some(revenue.to_string()),
        }
    }

    fn loaded(criteria: Criteria) -> AppState {
        let mut state = AppState::with_criteria(criteria);
        state.apply_load_result(Ok(vec![
            make_company("Acme", "Fintech", "Austin, TX, USA", "$10M"),
            make_company("Globex", "Energy", "Toronto, ON, Canada", "$100M"),
            make_company("Initech", "Fintech", "London, UK", "$10M to $50M"),
            make_company("Hooli", "Search", "Palo Alto, CA, USA", "N/A"),
        ]));
        state
    }

    fn render(state: &AppState) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, state).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_filtered_by_sector() {
        let text = render(&loaded(Criteria {
            sector: Some("Fintech".to_string()),
            ..Default::default()
        }));
        assert!(text.contains("Acme\n  Fintech | Austin, TX, USA\n  Revenue: $10M\n"));
        assert!(text.contains("Initech"));
        assert!(!text.contains("Globex"));
        assert!(text.contains("Total companies: 2\n"));
        assert!(text.contains("Average revenue: $20.0M\n"));
        assert!(text.contains("    USA: 1\n    UK: 1\n"));
    }

    #[test]
    fn test_report_country_tally_descending() {
        let text = render(&loaded(Criteria::default()));
        assert!(text.contains("    USA: 2\n    Canada: 1\n    UK: 1\n"));
        // (10 + 100 + 30) / 3, Hooli has no usable revenue.
        assert!(text.contains("Average revenue: $46.7M\n"));
    }

    #[test]
    fn test_report_empty_state() {
        let text = render(&loaded(Criteria {
            name: "nothing like this".to_string(),
            ..Default::default()
        }));
        assert!(text.starts_with("No companies match the current filters.\n"));
        assert!(text.contains("Total companies: 0\n"));
        assert!(text.contains("Average revenue: $0.0M\n"));
        assert!(text.contains("    No data\n"));
    }

    #[test]
    fn test_report_error_hides_statistics() {
        let mut state = AppState::default();
        state.apply_load_result(Err(DataLoadError::NotASequence {
            path: PathBuf::from("data.json"),
            found: "a string",
        }));
        let text = render(&state);
        assert_eq!(text, format!("{}\n", crate::state::LOAD_ERROR_MESSAGE));
        assert!(!text.contains("Statistics"));
    }

    #[test]
    fn test_filter_options_listing() {
        let state = loaded(Criteria::default());
        let mut buf = Vec::new();
        write_filter_options(&mut buf, &state.options).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Sectors:\n  Energy\n  Fintech\n  Search\nCountries:\n  Canada\n  UK\n  USA\n\n"
        );
    }
}

use std::collections::BTreeSet;

use super::model::Company;

// ---------------------------------------------------------------------------
// Filter options: the distinct values offered by the selection controls
// ---------------------------------------------------------------------------

/// Sorted distinct sectors and countries present in the collection.
///
/// Computed once after load. The "all" entry is not part of these sets; the
/// UI represents it as "no selection".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub sectors: BTreeSet<String>,
    pub countries: BTreeSet<String>,
}

impl FilterOptions {
    /// Build the option sets from the full collection.
    pub fn from_companies(companies: &[Company]) -> Self {
        let mut options = FilterOptions::default();
        for company in companies {
            options.sectors.insert(company.sector.clone());
            options.countries.insert(company.country().to_string());
        }
        options
    }
}

// ---------------------------------------------------------------------------
// Criteria: the current name / sector / location query
// ---------------------------------------------------------------------------

/// Current filter criteria. All three predicates are AND-combined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Case-insensitive substring of the name. Empty = no filter.
    pub name: String,
    /// Exact sector. `None` (or empty) = no filter.
    pub sector: Option<String>,
    /// Substring of the full location text. `None` (or empty) = no filter.
    ///
    /// This is a literal substring test, not an "ends with country" test:
    /// selecting `"USA"` also matches `"USA Plaza, Toronto, Canada"`.
    pub location: Option<String>,
}

impl Criteria {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && active(&self.sector).is_none() && active(&self.location).is_none()
    }
}

/// A selection counts as a filter only when it is set and non-empty.
fn active(selection: &Option<String>) -> Option<&str> {
    selection.as_deref().filter(|s| !s.is_empty())
}

/// Return indices of companies that pass all active filters, in input order.
pub fn filtered_indices(companies: &[Company], criteria: &Criteria) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..companies.len()).collect();
    }

    let name_lower = criteria.name.to_lowercase();
    let sector = active(&criteria.sector);
    let location = active(&criteria.location);

    let indices: Vec<usize> = companies
        .iter()
        .enumerate()
        .filter(|(_, company)| matches_all(company, &name_lower, sector, location))
        .map(|(i, _)| i)
        .collect();

    log::debug!("Filter {criteria:?} matched {} of {}", indices.len(), companies.len());
    indices
}

fn matches_all(
    company: &Company,
    name_lower: &str,
    sector: Option<&str>,
    location: Option<&str>,
) -> bool {
    if !name_lower.is_empty() && !company.name.to_lowercase().contains(name_lower) {
        return false;
    }
    if let Some(sector) = sector {
        if company.sector != sector {
            return false;
        }
    }
    if let Some(location) = location {
        if !company.location.contains(location) {
            return false;
        }
    }
    true
}

use std::collections::HashMap;

use super::model::Company;

// ---------------------------------------------------------------------------
// Revenue parsing
// ---------------------------------------------------------------------------

/// Parse a revenue string into millions.
///
/// `$` and `M` are stripped, the remainder is split on `" to "` or `-`, and
/// each piece is read as a decimal number:
/// * one piece → that value (`"$10M"` → 10)
/// * two pieces → their mean (`"$10M to $50M"`, `"$10-50M"` → 30)
/// * anything else, or any piece without a number → `None`
pub fn parse_revenue(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let cleaned: String = text.chars().filter(|&c| c != '$' && c != 'M').collect();
    let values: Option<Vec<f64>> = cleaned
        .replace(" to ", "-")
        .split('-')
        .map(|piece| leading_decimal(piece.trim()))
        .collect();

    match values?.as_slice() {
        [value] => Some(*value),
        [low, high] => Some((low + high) / 2.0),
        _ => None,
    }
}

/// Read the longest decimal number at the start of `s` (`"12.5abc"` → 12.5).
fn leading_decimal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Number of companies in one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

/// Summary of a subset: size, mean revenue, per-country breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub count: usize,
    /// Mean of the available revenues, in millions. 0 when none are available.
    pub average_revenue_millions: f64,
    /// Sorted by descending count; ties keep first-seen order.
    pub country_counts: Vec<CountryCount>,
}

impl Stats {
    /// Average revenue formatted for display: `"$12.5M"`.
    ///
    /// Halves round away from zero (1.25 → `"$1.3M"`).
    pub fn average_revenue_label(&self) -> String {
        let rounded = (self.average_revenue_millions * 10.0).round() / 10.0;
        format!("${rounded:.1}M")
    }
}

/// Compute statistics over a subset of companies.
pub fn compute_stats<'a, I>(subset: I) -> Stats
where
    I: IntoIterator<Item = &'a Company>,
{
    let mut count = 0;
    let mut revenue_total = 0.0;
    let mut with_revenue = 0usize;
    let mut country_counts: Vec<CountryCount> = Vec::new();
    let mut position: HashMap<&'a str, usize> = HashMap::new();

    for company in subset {
        count += 1;

        match company.revenue.as_deref().and_then(parse_revenue) {
            Some(revenue) => {
                revenue_total += revenue;
                with_revenue += 1;
            }
            None => log::debug!(
                "No usable revenue for {:?}: {:?}",
                company.name,
                company.revenue
            ),
        }

        let country = company.country();
        match position.get(country) {
            Some(&i) => country_counts[i].count += 1,
            None => {
                position.insert(country, country_counts.len());
                country_counts.push(CountryCount {
                    country: country.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable: equal counts stay in first-seen order.
    country_counts.sort_by(|a, b| b.count.cmp(&a.count));

    let average_revenue_millions = if with_revenue > 0 {
        revenue_total / with_revenue as f64
    } else {
        0.0
    };

    Stats {
        count,
        average_revenue_millions,
        country_counts,
    }
}

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// One row of the rental dataset. Only the columns the aggregations need
/// are deserialized; the CSV carries more.
#[derive(Debug, Clone, Deserialize)]
pub struct RentalRow {
    pub city: String,
    #[serde(rename = "total (R$)")]
    pub total: Decimal,
}

/// Per-city scalar produced by one of the reductions.
#[derive(Debug, Clone, PartialEq)]
pub struct CityStat {
    pub city: String,
    pub total: Decimal,
}

/// Arithmetic mean of the total column per city, rounded to 2 decimal
/// places. Output sorted by city name for stable rendering.
pub fn mean_total_by_city(rows: &[RentalRow]) -> Vec<CityStat> {
    let mut sums: HashMap<&str, (Decimal, u32)> = HashMap::new();
    for row in rows {
        let entry = sums.entry(row.city.as_str()).or_insert((Decimal::ZERO, 0));
        entry.0 += row.total;
        entry.1 += 1;
    }

    let mut stats: Vec<CityStat> = sums
        .into_iter()
        .map(|(city, (sum, count))| CityStat {
            city: city.to_string(),
            total: (sum / Decimal::from(count)).round_dp(2),
        })
        .collect();
    stats.sort_by(|a, b| a.city.cmp(&b.city));
    stats
}

/// Most frequent total per city. Ties resolve to the value encountered
/// first in dataset order. Output sorted by city name.
pub fn mode_total_by_city(rows: &[RentalRow]) -> Vec<CityStat> {
    let mut counts: HashMap<&str, HashMap<Decimal, (usize, usize)>> = HashMap::new();
    for (idx, row) in rows.iter().enumerate() {
        let per_city = counts.entry(row.city.as_str()).or_default();
        let entry = per_city.entry(row.total).or_insert((0, idx));
        entry.0 += 1;
    }

    let mut stats: Vec<CityStat> = Vec::with_capacity(counts.len());
    for (city, values) in counts {
        let mut best: Option<(Decimal, usize, usize)> = None;
        for (value, (count, first_idx)) in values {
            let replaces = match &best {
                None => true,
                Some((_, best_count, best_idx)) => {
                    count > *best_count || (count == *best_count && first_idx < *best_idx)
                }
            };
            if replaces {
                best = Some((value, count, first_idx));
            }
        }
        if let Some((total, _, _)) = best {
            stats.push(CityStat {
                city: city.to_string(),
                total,
            });
        }
    }
    stats.sort_by(|a, b| a.city.cmp(&b.city));
    stats
}

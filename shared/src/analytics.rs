use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::customers::CustomerLead;
use crate::lot::Lot;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LeadSummary {
    pub total_leads: usize,
    pub leads_with_promo: usize,
    /// Most won prize first; ties broken by name.
    pub prize_counts: Vec<(String, usize)>,
    /// Oldest day first.
    pub daily_counts: Vec<(NaiveDate, usize)>,
}

pub fn summarize(leads: &[CustomerLead]) -> LeadSummary {
    let mut prizes: BTreeMap<&str, usize> = BTreeMap::new();
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for lead in leads {
        *prizes.entry(lead.prize.as_str()).or_default() += 1;
        *days.entry(lead.created_at.date_naive()).or_default() += 1;
    }

    let mut prize_counts: Vec<(String, usize)> = prizes
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    // BTreeMap already ordered by name, so a stable sort keeps ties alphabetical
    prize_counts.sort_by(|a, b| b.1.cmp(&a.1));

    LeadSummary {
        total_leads: leads.len(),
        leads_with_promo: leads
            .iter()
            .filter(|l| l.promo_code.as_deref().map_or(false, |c| !c.is_empty()))
            .count(),
        prize_counts,
        daily_counts: days.into_iter().collect(),
    }
}

/// Configured chance of each lot, in the same order as `lots`.
pub fn win_rates(lots: &[Lot]) -> Vec<f64> {
    let total: u64 = lots.iter().map(|l| l.weight() as u64).sum();
    lots.iter()
        .map(|lot| {
            if total == 0 {
                0.0
            } else {
                lot.weight() as f64 / total as f64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::tests::lead;

    #[test]
    fn test_summarize_counts() {
        let mut leads = vec![
            lead(1, "A", "Coffee", 1),
            lead(2, "B", "Cake", 1),
            lead(3, "C", "Coffee", 2),
            lead(4, "D", "Bagel", 3),
        ];
        leads[1].promo_code = Some("CAKE".to_string());
        leads[2].promo_code = Some(String::new());

        let summary = summarize(&leads);
        assert_eq!(summary.total_leads, 4);
        assert_eq!(summary.leads_with_promo, 1);
        assert_eq!(
            summary.prize_counts,
            vec![
                ("Coffee".to_string(), 2),
                ("Bagel".to_string(), 1),
                ("Cake".to_string(), 1),
            ]
        );
        let days: Vec<usize> = summary.daily_counts.iter().map(|(_, c)| *c).collect();
        assert_eq!(days, vec![2, 1, 1]);
    }

    #[test]
    fn test_win_rates() {
        let lots = vec![Lot::new("A", 1), Lot::new("B", 0), Lot::new("C", 3)];
        assert_eq!(win_rates(&lots), vec![0.25, 0.0, 0.75]);
        assert_eq!(win_rates(&[Lot::new("A", 0)]), vec![0.0]);
    }
}

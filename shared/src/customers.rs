use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::validation::{validate_email, validate_phone};

/// A lead captured on the play page after a spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerLead {
    #[serde(alias = "_id")]
    pub id: String,
    pub wheel_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub prize: String,
    #[serde(default)]
    pub promo_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload posted once the visitor fills in their details.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomerLead {
    pub wheel_id: String,
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
    pub prize: String,
    pub promo_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Email,
    Prize,
    CreatedAt,
}

impl SortColumn {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Prize => "Prize",
            Self::CreatedAt => "Date",
        }
    }

    pub fn all_options() -> Vec<Self> {
        vec![Self::Name, Self::Email, Self::Prize, Self::CreatedAt]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerQuery {
    pub search: String,
    pub prize: Option<String>,
    pub sort_by: SortColumn,
    pub ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for CustomerQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            prize: None,
            sort_by: SortColumn::CreatedAt,
            ascending: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPage {
    pub rows: Vec<CustomerLead>,
    /// Matches before pagination.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

impl CustomerQuery {
    pub fn matches(&self, lead: &CustomerLead) -> bool {
        if let Some(prize) = &self.prize {
            if !lead.prize.eq_ignore_ascii_case(prize) {
                return false;
            }
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            Some(lead.name.as_str()),
            Some(lead.email.as_str()),
            lead.phone.as_deref(),
            lead.promo_code.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filters, sorts and slices one page out of `leads`.
    pub fn apply(&self, leads: &[CustomerLead]) -> CustomerPage {
        let mut rows: Vec<CustomerLead> = leads.iter().filter(|l| self.matches(l)).cloned().collect();

        rows.sort_by(|a, b| {
            let ordering = match self.sort_by {
                SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                SortColumn::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
                SortColumn::Prize => a.prize.to_lowercase().cmp(&b.prize.to_lowercase()),
                SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            if self.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        let page_size = if self.page_size == 0 { DEFAULT_PAGE_SIZE } else { self.page_size };
        let total = rows.len();
        let page_count = total.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, page_count);

        let rows = rows
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        CustomerPage {
            rows,
            total,
            page,
            page_count,
        }
    }
}

/// Sorted, de-duplicated prize names for the filter dropdown.
pub fn distinct_prizes(leads: &[CustomerLead]) -> Vec<String> {
    let mut prizes: Vec<String> = leads.iter().map(|l| l.prize.clone()).collect();
    prizes.sort();
    prizes.dedup();
    prizes
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn lead(id: u32, name: &str, prize: &str, day: u32) -> CustomerLead {
        CustomerLead {
            id: id.to_string(),
            wheel_id: "w1".to_string(),
            name: name.to_string(),
            email: format!("{}@mail.test", name.to_lowercase()),
            phone: None,
            prize: prize.to_string(),
            promo_code: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
        }
    }

    fn sample() -> Vec<CustomerLead> {
        vec![
            lead(1, "Alice", "Free coffee", 3),
            lead(2, "bob", "10% off", 1),
            lead(3, "Chloe", "Free coffee", 2),
            CustomerLead {
                phone: Some("+33 6 00 00 00 01".to_string()),
                promo_code: Some("CAKE10".to_string()),
                ..lead(4, "Dan", "Free cake", 4)
            },
        ]
    }

    #[test]
    fn test_default_query_sorts_newest_first() {
        let page = CustomerQuery::default().apply(&sample());
        let names: Vec<_> = page.rows.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Dan", "Alice", "Chloe", "bob"]);
        assert_eq!(page.total, 4);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_search_matches_any_contact_field() {
        let mut query = CustomerQuery::default();
        query.search = "cake10".to_string();
        assert_eq!(query.apply(&sample()).rows[0].name, "Dan");

        query.search = "ALICE@".to_string();
        assert_eq!(query.apply(&sample()).total, 1);

        query.search = "+33 6".to_string();
        assert_eq!(query.apply(&sample()).total, 1);
    }

    #[test]
    fn test_prize_filter_and_name_sort() {
        let query = CustomerQuery {
            prize: Some("free COFFEE".to_string()),
            sort_by: SortColumn::Name,
            ascending: true,
            ..CustomerQuery::default()
        };
        let page = query.apply(&sample());
        let names: Vec<_> = page.rows.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Chloe"]);
    }

    #[test]
    fn test_pagination_clamps_page() {
        let leads: Vec<_> = (1..=25).map(|i| lead(i, &format!("N{:02}", i), "P", 1)).collect();
        let mut query = CustomerQuery {
            sort_by: SortColumn::Name,
            ascending: true,
            page: 3,
            ..CustomerQuery::default()
        };
        let page = query.apply(&leads);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.rows[0].name, "N21");

        query.page = 99;
        assert_eq!(query.apply(&leads).page, 3);
        query.page = 0;
        assert_eq!(query.apply(&leads).page, 1);
        query.page_size = 0;
        assert_eq!(query.apply(&leads).rows.len(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_empty_table_has_one_page() {
        let page = CustomerQuery::default().apply(&[]);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.page, 1);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_distinct_prizes() {
        assert_eq!(
            distinct_prizes(&sample()),
            vec!["10% off", "Free cake", "Free coffee"]
        );
    }

    #[test]
    fn test_new_lead_validation() {
        let mut new_lead = NewCustomerLead {
            wheel_id: "w1".to_string(),
            name: "Alice".to_string(),
            email: "alice@mail.test".to_string(),
            phone: None,
            prize: "Free coffee".to_string(),
            promo_code: None,
        };
        assert!(new_lead.validate().is_ok());

        new_lead.phone = Some("abc".to_string());
        assert!(new_lead.validate().is_err());

        new_lead.phone = Some("06 12 34 56 78".to_string());
        new_lead.email = "nope".to_string();
        let errors = new_lead.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}

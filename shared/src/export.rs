use chrono::NaiveDate;
use thiserror::Error;

use crate::customers::CustomerLead;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer flush failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output was not utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

const HEADER: [&str; 6] = ["Name", "Email", "Phone", "Prize", "Promo Code", "Date"];

/// Serializes leads as RFC 4180 CSV with a header row.
pub fn leads_to_csv(leads: &[CustomerLead]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for lead in leads {
        let date = lead.created_at.format("%Y-%m-%d %H:%M").to_string();
        writer.write_record([
            lead.name.as_str(),
            lead.email.as_str(),
            lead.phone.as_deref().unwrap_or(""),
            lead.prize.as_str(),
            lead.promo_code.as_deref().unwrap_or(""),
            date.as_str(),
        ])?;
    }

    writer.flush()?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn export_file_name(today: NaiveDate) -> String {
    format!("customers-{}.csv", today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::tests::lead;

    #[test]
    fn test_csv_has_header_and_rows() {
        let csv = leads_to_csv(&[lead(1, "Alice", "Free coffee", 3)]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Name,Email,Phone,Prize,Promo Code,Date"));
        assert_eq!(
            lines.next(),
            Some("Alice,alice@mail.test,,Free coffee,,2024-05-03 12:00")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_quotes_special_characters() {
        let mut tricky = lead(2, "Smith, John", "Cake \"XL\"", 1);
        tricky.promo_code = Some("A1".to_string());
        let csv = leads_to_csv(&[tricky]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Smith, John\","));
        assert!(row.contains("\"Cake \"\"XL\"\"\""));
        assert!(row.contains(",A1,"));
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = leads_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_export_file_name() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        assert_eq!(export_file_name(day), "customers-2024-05-03.csv");
    }
}

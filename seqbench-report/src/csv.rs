//! CSV Output

use crate::report::{Measurement, SearchStatus};

/// Column header for CSV rows
pub const CSV_HEADER: &str = "id,complexity,length,elapsed_secs,hits,status,exit_code";

/// One CSV row without a trailing newline
pub fn format_csv_row(m: &Measurement) -> String {
    let exit_code = match m.status {
        SearchStatus::Succeeded => "0".to_string(),
        SearchStatus::Failed {
            exit_code: Some(code),
        } => code.to_string(),
        SearchStatus::Failed { exit_code: None } => String::new(),
    };
    format!(
        "{},{},{},{},{},{},{}",
        escape(&m.id),
        m.complexity,
        m.length,
        m.elapsed_secs,
        m.hits,
        m.status,
        exit_code
    )
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(id: &str, status: SearchStatus) -> Measurement {
        Measurement {
            id: id.to_string(),
            complexity: 12,
            length: 40,
            elapsed_secs: 1.5,
            hits: 7,
            status,
        }
    }

    #[test]
    fn test_row() {
        let row = format_csv_row(&measurement("P1", SearchStatus::Succeeded));
        assert_eq!(row, "P1,12,40,1.5,7,succeeded,0");
    }

    #[test]
    fn test_failed_rows() {
        let row = format_csv_row(&measurement(
            "P2",
            SearchStatus::Failed { exit_code: Some(2) },
        ));
        assert_eq!(row, "P2,12,40,1.5,7,failed,2");

        let row = format_csv_row(&measurement("P3", SearchStatus::Failed { exit_code: None }));
        assert!(row.ends_with(",failed,"));
    }

    #[test]
    fn test_escaping() {
        let row = format_csv_row(&measurement("a,\"b\"", SearchStatus::Succeeded));
        assert!(row.starts_with("\"a,\"\"b\"\"\","));
    }
}

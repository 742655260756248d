//! Request types for the payroll API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /payroll`.
///
/// Each entry is one timesheet line, exactly as it would appear in an input
/// file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Timesheet lines, `NAME=DDHH:MM-HH:MM,...`.
    pub lines: Vec<String>,
}

impl PayrollRequest {
    /// Builds a request from anything yielding lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{"lines": ["RENE=MO10:00-12:00", "ASTRID=SU20:00-21:00"]}"#;
        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.lines, vec!["RENE=MO10:00-12:00", "ASTRID=SU20:00-21:00"]);
    }

    #[test]
    fn test_missing_lines_field_is_rejected() {
        let result: Result<PayrollRequest, _> = serde_json::from_str("{}");
        assert!(result.unwrap_err().to_string().contains("missing field `lines`"));
    }

    #[test]
    fn test_new_collects_lines() {
        let request = PayrollRequest::new(["KIM=FR10:00-12:00"]);
        assert_eq!(request.lines.len(), 1);
    }
}

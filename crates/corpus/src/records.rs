use campusqa_common::text::{normalize, parse_ctc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Deserialize a scalar field that upstream CSV conversion emits
/// inconsistently as string, number, or null.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Num(f64),
        Bool(bool),
        Null,
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Str(s) => s,
        Scalar::Num(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Null => String::new(),
    })
}

fn scalar_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, serde_json::Value> = HashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(k, v)| {
            let value = match v {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            (k, value)
        })
        .collect())
}

/// One row of the upstream academic schedule document.
///
/// Extra columns (serial numbers etc.) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AcademicScheduleRow {
    #[serde(rename = "Particulars", default, deserialize_with = "scalar_string")]
    pub particulars: String,

    #[serde(rename = "ODD SEMESTER", default, deserialize_with = "scalar_string")]
    pub odd_semester: String,

    #[serde(rename = "EVEN SEMESTER", default, deserialize_with = "scalar_string")]
    pub even_semester: String,
}

/// Upstream placement data document.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlacementData {
    #[serde(default, deserialize_with = "scalar_map")]
    pub total_placed: HashMap<String, String>,

    #[serde(default)]
    pub companies: Vec<CompanyRow>,
}

/// One company entry of the placement document.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRow {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,

    #[serde(default, deserialize_with = "scalar_map")]
    pub branch_wise: HashMap<String, String>,

    #[serde(default, deserialize_with = "scalar_string")]
    pub total_selected: String,

    #[serde(default, deserialize_with = "scalar_string")]
    pub ctc_lpa: String,
}

/// One row of the upstream faculty directory.
#[derive(Debug, Clone, Deserialize)]
pub struct FacultyRow {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,

    #[serde(default, deserialize_with = "scalar_string")]
    pub department: String,
}

/// Normalized academic calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct AcademicEvent {
    pub name: String,
    pub odd_semester_range: String,
    pub even_semester_range: String,
}

/// Normalized placement record. `ctc_lpa` is already parsed; malformed
/// figures have been coerced to `0.0` upstream of any aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    pub company: String,
    pub branch_wise_counts: HashMap<String, String>,
    pub total_selected: String,
    pub ctc_lpa: f64,
}

impl PlacementRecord {
    /// CTC rounded to the nearest whole LPA, as displayed in answers and
    /// used for sorting and threshold derivation.
    pub fn ctc_rounded(&self) -> i64 {
        self.ctc_lpa.round() as i64
    }
}

/// Normalized faculty directory row.
#[derive(Debug, Clone, PartialEq)]
pub struct FacultyMember {
    pub name: String,
    pub department: String,
}

/// A normalized institutional record, ready for corpus synthesis.
///
/// All free-text fields have been through [`normalize`]; rows missing a
/// required field never become a `Record` (they are skipped, not errored).
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Academic(AcademicEvent),
    Placement(PlacementRecord),
    Faculty(FacultyMember),
}

impl AcademicScheduleRow {
    /// Normalize into a record; `None` when any required field is empty.
    pub fn normalized(&self) -> Option<Record> {
        let name = normalize(&self.particulars);
        let odd = normalize(&self.odd_semester);
        let even = normalize(&self.even_semester);

        if name.is_empty() || odd.is_empty() || even.is_empty() {
            return None;
        }

        Some(Record::Academic(AcademicEvent {
            name,
            odd_semester_range: odd,
            even_semester_range: even,
        }))
    }
}

impl CompanyRow {
    /// Normalize into a record; `None` when the company name or headcount
    /// is missing. An unparseable CTC is not a skip condition, it parses
    /// to `0.0`.
    pub fn normalized(&self) -> Option<Record> {
        let company = normalize(&self.name);
        let total_selected = normalize(&self.total_selected);

        if company.is_empty() || total_selected.is_empty() {
            return None;
        }

        Some(Record::Placement(PlacementRecord {
            company,
            branch_wise_counts: self
                .branch_wise
                .iter()
                .map(|(k, v)| (normalize(k), normalize(v)))
                .collect(),
            total_selected,
            ctc_lpa: parse_ctc(&self.ctc_lpa),
        }))
    }
}

impl FacultyRow {
    /// Normalize into a record; `None` when name or department is empty.
    pub fn normalized(&self) -> Option<Record> {
        let name = normalize(&self.name);
        let department = normalize(&self.department);

        if name.is_empty() || department.is_empty() {
            return None;
        }

        Some(Record::Faculty(FacultyMember { name, department }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_string_accepts_numbers() {
        let row: CompanyRow = serde_json::from_str(
            r#"{"name": "ORACLE", "total_selected": 3, "ctc_lpa": 14.0}"#,
        )
        .unwrap();
        assert_eq!(row.total_selected, "3");
        assert_eq!(row.ctc_lpa, "14");
    }

    #[test]
    fn test_academic_row_normalized() {
        let row = AcademicScheduleRow {
            particulars: "  MSE\u{2013}I \n".to_string(),
            odd_semester: "09.09.2024 to 18.09.2024".to_string(),
            even_semester: "17.02.2025 to 24.02.2025".to_string(),
        };
        match row.normalized() {
            Some(Record::Academic(event)) => {
                assert_eq!(event.name, "MSE-I");
                assert_eq!(event.odd_semester_range, "09.09.2024 to 18.09.2024");
            }
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[test]
    fn test_academic_row_missing_field_skipped() {
        let row = AcademicScheduleRow {
            particulars: "MSE-I".to_string(),
            odd_semester: "   ".to_string(),
            even_semester: "17.02.2025 to 24.02.2025".to_string(),
        };
        assert!(row.normalized().is_none());
    }

    #[test]
    fn test_company_row_bad_ctc_coerced() {
        let row = CompanyRow {
            name: "TCS".to_string(),
            branch_wise: HashMap::new(),
            total_selected: "50".to_string(),
            ctc_lpa: "N/A".to_string(),
        };
        match row.normalized() {
            Some(Record::Placement(record)) => {
                assert_eq!(record.ctc_lpa, 0.0);
                assert_eq!(record.ctc_rounded(), 0);
            }
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[test]
    fn test_company_row_missing_headcount_skipped() {
        let row = CompanyRow {
            name: "TCS".to_string(),
            branch_wise: HashMap::new(),
            total_selected: String::new(),
            ctc_lpa: "7.00".to_string(),
        };
        assert!(row.normalized().is_none());
    }

    #[test]
    fn test_ctc_rounded() {
        let record = PlacementRecord {
            company: "X".to_string(),
            branch_wise_counts: HashMap::new(),
            total_selected: "1".to_string(),
            ctc_lpa: 6.8,
        };
        assert_eq!(record.ctc_rounded(), 7);
    }
}

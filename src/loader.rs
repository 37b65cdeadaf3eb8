use std::{fs::File, io::Read, path::Path};

use log::debug;

use crate::SummaryError;

/// One input line after the header: `subject,variant,value`.
///
/// The value is kept verbatim so a rejected row can be reported exactly as
/// it appeared in the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow {
    pub subject: String,
    pub variant: String,
    pub value: String,
}

impl RawRow {
    pub fn new<S, V, X>(subject: S, variant: V, value: X) -> Self
    where
        S: Into<String>,
        V: Into<String>,
        X: Into<String>,
    {
        Self {
            subject: subject.into(),
            variant: variant.into(),
            value: value.into(),
        }
    }
}

/// Reads every row of the CSV file at `path`, discarding the first record.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>, SummaryError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SummaryError::io(format!("{}: {e}", path.display())))?;
    let rows = read_rows(file)?;
    debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, SummaryError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() < 3 {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(SummaryError::MalformedRecord {
                line,
                fields: record.len(),
            });
        }
        rows.push(RawRow::new(&record[0], &record[1], &record[2]));
    }
    Ok(rows)
}

/// True when `value` is a non-empty run of ASCII digits.
pub fn is_digit_literal(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_discards_header() {
        let input = "name,test,result\nA,baseline,10\nA,opt1,5\n";
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                RawRow::new("A", "baseline", "10"),
                RawRow::new("A", "opt1", "5"),
            ]
        );
    }

    #[test]
    fn test_read_rows_discards_header_whatever_its_content() {
        let input = "A,baseline,10\nB,baseline,20\n";
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(rows, vec![RawRow::new("B", "baseline", "20")]);
    }

    #[test]
    fn test_read_rows_honours_quoting() {
        let input = "h1,h2,h3\n\"prog, large\",\"say \"\"hi\"\"\",42\n";
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(rows, vec![RawRow::new("prog, large", "say \"hi\"", "42")]);
    }

    #[test]
    fn test_read_rows_ignores_extra_fields() {
        let input = "h1,h2,h3\nA,opt1,7,extra\n";
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(rows, vec![RawRow::new("A", "opt1", "7")]);
    }

    #[test]
    fn test_read_rows_rejects_short_record() {
        let input = "h1,h2,h3\nA,baseline,1\nB,opt1\n";
        let err = read_rows(input.as_bytes()).unwrap_err();
        assert_eq!(err, SummaryError::MalformedRecord { line: 3, fields: 2 });
    }

    #[test]
    fn test_read_rows_empty_input() {
        assert!(read_rows("".as_bytes()).unwrap().is_empty());
        assert!(read_rows("h1,h2,h3\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_rows_missing_file() {
        let err = load_rows("/nonexistent/benchsummary/input.csv").unwrap_err();
        assert!(matches!(err, SummaryError::Io(_)));
    }

    #[test]
    fn test_digit_literal() {
        assert!(is_digit_literal("0"));
        assert!(is_digit_literal("00120"));
        assert!(!is_digit_literal(""));
        assert!(!is_digit_literal("-5"));
        assert!(!is_digit_literal("1.5"));
        assert!(!is_digit_literal("1e3"));
        assert!(!is_digit_literal(" 12"));
        assert!(!is_digit_literal("abc"));
        assert!(!is_digit_literal("incorrect"));
    }
}

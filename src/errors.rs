use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SummaryError {
    #[error("io error: {0}")]
    Io(String),
    #[error("csv error: {0}")]
    Csv(String),
    #[error("malformed record on line {line}: expected 3 fields, found {fields}")]
    MalformedRecord { line: u64, fields: usize },
    #[error("subject {subject} has no baseline result")]
    MissingBaseline { subject: String },
    #[error("subject {subject} has no result for {variant}")]
    MissingVariant { subject: String, variant: String },
    #[error("subject {subject} has a zero result for {variant}")]
    ZeroDivision { subject: String, variant: String },
    #[error("no scores collected for {variant}")]
    EmptySample { variant: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SummaryError {
    pub fn io<T: Into<String>>(msg: T) -> Self {
        SummaryError::Io(msg.into())
    }

    pub fn csv<T: Into<String>>(msg: T) -> Self {
        SummaryError::Csv(msg.into())
    }

    pub fn missing_baseline<T: Into<String>>(subject: T) -> Self {
        SummaryError::MissingBaseline {
            subject: subject.into(),
        }
    }

    pub fn missing_variant<S: Into<String>, V: Into<String>>(subject: S, variant: V) -> Self {
        SummaryError::MissingVariant {
            subject: subject.into(),
            variant: variant.into(),
        }
    }

    pub fn zero_division<S: Into<String>, V: Into<String>>(subject: S, variant: V) -> Self {
        SummaryError::ZeroDivision {
            subject: subject.into(),
            variant: variant.into(),
        }
    }

    pub fn empty_sample<T: Into<String>>(variant: T) -> Self {
        SummaryError::EmptySample {
            variant: variant.into(),
        }
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        SummaryError::InvalidInput(msg.into())
    }
}

impl From<std::io::Error> for SummaryError {
    fn from(err: std::io::Error) -> Self {
        SummaryError::io(err.to_string())
    }
}

impl From<csv::Error> for SummaryError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(io) => SummaryError::io(io.to_string()),
            _ => SummaryError::csv(err.to_string()),
        }
    }
}

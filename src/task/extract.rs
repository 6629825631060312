//! Pull the labeled header fields out of a pasted document blurb.
//!
//! Recognised labels (case-insensitive, English or Vietnamese):
//!
//! | field               | labels                             |
//! |---------------------|------------------------------------|
//! | `document_date`     | `Document date:` / `Ngày văn bản:` |
//! | `reference_number`  | `Reference:` / `Số/Ký hiệu:`       |
//! | `issuing_authority` | `Author:` / `Tác giả:`             |
//! | `summary`           | `Summary:` / `Trích yếu:`          |
//!
//! Missing labels yield empty fields.

use once_cell::sync::Lazy;
use regex::Regex;

static DOCUMENT_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:document date|ngày văn bản):\s*(\S+)").expect("valid document date regex")
});

static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:reference|số/ký hiệu):\s*(\S+)").expect("valid reference regex")
});

static AUTHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:author|tác giả):\s*(.+?)\s*(?:summary|trích yếu):")
        .expect("valid author regex")
});

static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:summary|trích yếu):\s*(.+)").expect("valid summary regex")
});

/// Header fields found in a document blurb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFields {
    pub document_date: String,
    pub reference_number: String,
    pub issuing_authority: String,
    pub summary: String,
}

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

pub fn extract_fields(text: &str) -> DocumentFields {
    DocumentFields {
        document_date: capture(&DOCUMENT_DATE_RE, text),
        reference_number: capture(&REFERENCE_RE, text),
        issuing_authority: capture(&AUTHOR_RE, text),
        summary: capture(&SUMMARY_RE, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_all_fields() {
        let text = "Document date: 12/11/2025\n\
                    Reference: 123/QD-UBND\n\
                    Author: People's Committee\n  of the District\n\
                    Summary: Plan for the\nyear-end inspection.\n";
        let fields = extract_fields(text);
        assert_eq!(fields.document_date, "12/11/2025");
        assert_eq!(fields.reference_number, "123/QD-UBND");
        assert_eq!(fields.issuing_authority, "People's Committee\n  of the District");
        assert_eq!(fields.summary, "Plan for the\nyear-end inspection.");
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let fields = extract_fields("REFERENCE:  45/CV  trailing\nsummary: short");
        assert_eq!(fields.reference_number, "45/CV");
        assert_eq!(fields.summary, "short");
    }

    #[test]
    fn test_vietnamese_markers() {
        let text = "Ngày văn bản: 01/10/2025\nSố/Ký hiệu: 77/BC\nTác giả: Sở Tài chính\nTrích yếu: Báo cáo quý III";
        let fields = extract_fields(text);
        assert_eq!(fields.document_date, "01/10/2025");
        assert_eq!(fields.reference_number, "77/BC");
        assert_eq!(fields.issuing_authority, "Sở Tài chính");
        assert_eq!(fields.summary, "Báo cáo quý III");
    }

    #[test]
    fn test_missing_markers_are_empty() {
        assert_eq!(extract_fields("nothing labeled here"), DocumentFields::default());

        // Author needs a following Summary marker to be bounded.
        let fields = extract_fields("Author: Ministry of Finance");
        assert_eq!(fields.issuing_authority, "");
        assert_eq!(fields.summary, "");
    }
}

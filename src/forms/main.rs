use std::io::Read;

#[cfg(feature = "server")]
use actix_multipart::form::{MultipartForm, tempfile::TempFile};

use crate::domain::lead::LeadCreate;
use crate::forms::FormError;
use crate::forms::lead::LeadDraft;

#[cfg(feature = "server")]
#[derive(MultipartForm)]
/// CSV file with one lead per row, uploaded from the list page.
pub struct UploadLeadsForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

#[cfg(feature = "server")]
impl UploadLeadsForm {
    pub fn parse(&self, headcount_max: Option<i64>) -> Result<Vec<LeadCreate>, FormError> {
        let file = self.csv.file.reopen()?;
        parse_leads_csv(file, headcount_max)
    }
}

/// Reads leads from CSV with a header row naming the lead fields.
///
/// Every row goes through the same rules as the entry form; the first invalid
/// row rejects the whole file. Unknown columns are ignored, missing ones are
/// treated as empty.
pub fn parse_leads_csv<R: Read>(
    reader: R,
    headcount_max: Option<i64>,
) -> Result<Vec<LeadCreate>, FormError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut leads = Vec::new();
    for (index, record) in rdr.deserialize::<LeadDraft>().enumerate() {
        let draft = record?;
        // Row numbers as seen in a spreadsheet: the header is row 1.
        let row = index + 2;
        let lead = draft
            .check(headcount_max)
            .map_err(|errors| FormError::InvalidRow { row, errors })?;
        leads.push(lead);
    }

    if leads.is_empty() {
        return Err(FormError::EmptyUpload);
    }

    Ok(leads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::lead::{EMAIL_INVALID, NAME_REQUIRED};

    #[test]
    fn parses_rows_with_missing_and_extra_columns() {
        let csv = "name,email,company,headcount,notes\n\
                   Ann,a@x.com,Acme,12,vip\n\
                   Bob,b@x.com,,,\n";

        let leads = parse_leads_csv(csv.as_bytes(), Some(100)).unwrap();

        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].company.as_deref(), Some("Acme"));
        assert_eq!(leads[0].headcount, Some(12));
        assert_eq!(leads[1].name, "Bob");
        assert_eq!(leads[1].company, None);
        assert_eq!(leads[1].industry, None);
    }

    #[test]
    fn first_invalid_row_rejects_the_file() {
        let csv = "name,email\nAnn,a@x.com\n,bad\n";

        let err = parse_leads_csv(csv.as_bytes(), None).unwrap_err();

        match err {
            FormError::InvalidRow { row, errors } => {
                assert_eq!(row, 3);
                assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
                assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn header_only_file_is_empty() {
        let err = parse_leads_csv("name,email\n".as_bytes(), None).unwrap_err();
        assert!(matches!(err, FormError::EmptyUpload));
    }
}

//! Writes validated quote requests to disk as JSON.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::domain::{quote::format_date, Preferences, QuoteRequest};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write quote: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode quote: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Preference first, then the user's documents folder, then the working dir.
pub fn default_export_dir(preferences: &Preferences) -> PathBuf {
    preferences
        .export_dir
        .clone()
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| dirs::document_dir().map(|dir| dir.join("Freight Quotes")))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn export_file_name(request: &QuoteRequest) -> String {
    format!(
        "quote-{}-{}-{}.json",
        slug(&request.origin.fields.postal_code),
        slug(&request.destination.fields.postal_code),
        format_date(request.pickup_date)
    )
}

pub fn export_quote(request: &QuoteRequest, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(request));
    let content = serde_json::to_string_pretty(request)?;
    fs::write(&path, content)?;
    log::info!(
        "[export] Wrote {} quote ({} lines) to {}",
        request.mode.label(),
        request.lines.len(),
        path.display()
    );
    Ok(path)
}

fn slug(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect();
    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::{
        address_book::AddressBook, quote::QuoteDraft, validate_quote, AddressDraft, CargoItem,
        FreightMode,
    };

    fn sample_request() -> QuoteRequest {
        let mut book = AddressBook::default();
        let mut add = |company: &str, postal: &str| {
            book.add(AddressDraft {
                company: company.to_string(),
                street: "1 Dock".to_string(),
                city: "Erie".to_string(),
                postal_code: postal.to_string(),
                ..AddressDraft::default()
            })
            .unwrap()
        };
        let origin = add("Acme", "16501");
        let destination = add("Birch", "K1A 0B1");
        let draft = QuoteDraft {
            mode: FreightMode::Ltl,
            origin_id: Some(origin),
            destination_id: Some(destination),
            pickup_date: "2026-11-02".to_string(),
            items: vec![CargoItem {
                weight: "500".into(),
                length: "48".into(),
                width: "40".into(),
                height: "48".into(),
                quantity: "1".into(),
                ..CargoItem::default()
            }],
            notes: "Liftgate at delivery".to_string(),
        };
        validate_quote(&draft, &book, date!(2026 - 10 - 17)).unwrap()
    }

    #[test]
    fn file_name_uses_postal_codes_and_date() {
        assert_eq!(
            export_file_name(&sample_request()),
            "quote-16501-K1A0B1-2026-11-02.json"
        );
    }

    #[test]
    fn writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let path = export_quote(&sample_request(), &target).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written["notes"], serde_json::json!("Liftgate at delivery"));
        assert_eq!(written["summary"]["shipmentClass"], serde_json::json!("100"));
    }

    #[test]
    fn preference_overrides_default_dir() {
        let preferences = Preferences {
            export_dir: Some(PathBuf::from("/tmp/quotes")),
            ..Preferences::default()
        };
        assert_eq!(default_export_dir(&preferences), PathBuf::from("/tmp/quotes"));

        let blank = Preferences {
            export_dir: Some(PathBuf::new()),
            ..Preferences::default()
        };
        assert_ne!(default_export_dir(&blank), PathBuf::new());
    }

    #[test]
    fn slug_never_empty() {
        assert_eq!(slug("  "), "unknown");
        assert_eq!(slug("43215-1234"), "432151234");
    }
}

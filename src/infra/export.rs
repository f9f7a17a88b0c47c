//! CSV download file built from the session's product list.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::domain::{ExportError, ProductList};

pub const EXPORT_FILE_NAME: &str = "product_list.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// Spreadsheet tools only detect UTF-8 when the file starts with a BOM.
const UTF8_BOM: &str = "\u{feff}";

#[derive(Clone, Debug, PartialEq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

impl CsvExport {
    pub fn from_list(list: &ProductList) -> Result<Self, ExportError> {
        let mut contents = String::from(UTF8_BOM);
        contents.push_str(&list.export()?);
        Ok(Self {
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            contents,
        })
    }

    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name);
        fs::write(&path, self.contents.as_bytes())?;
        info!(
            path = %path.display(),
            mime = self.mime,
            bytes = self.contents.len(),
            "exported product list"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_record, Platform};

    fn list_with_japanese_name() -> ProductList {
        let mut list = ProductList::new();
        list.add(compute_record("ワイヤレスイヤホン", 1000, 2000, Platform::Rakuten));
        list.add(compute_record("USB cable", 200, 800, Platform::Mercari));
        list
    }

    #[test]
    fn export_file_metadata() {
        let export = CsvExport::from_list(&list_with_japanese_name()).unwrap();
        assert_eq!(export.file_name, "product_list.csv");
        assert_eq!(export.mime, "text/csv");
    }

    #[test]
    fn contents_start_with_bom_then_header() {
        let export = CsvExport::from_list(&ProductList::new()).unwrap();
        assert!(export.contents.as_bytes().starts_with(&[0xEF, 0xBB, 0xBF]));
        assert_eq!(
            export.contents.trim_start_matches('\u{feff}'),
            "name,costPrice,sellingPrice,platform,feeRate,fee,profit,profitMargin\n"
        );
    }

    #[test]
    fn saved_file_round_trips_non_ascii_text() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports");
        let export = CsvExport::from_list(&list_with_japanese_name()).unwrap();

        let path = export.save_to(&nested).unwrap();
        assert_eq!(path, nested.join("product_list.csv"));

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "ワイヤレスイヤホン,1000,2000,楽天市場,10.0,200,800,80.0");
        assert_eq!(rows[2], "USB cable,200,800,メルカリ,10.0,80,520,260.0");
    }

    #[test]
    fn saving_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let first = CsvExport::from_list(&list_with_japanese_name()).unwrap();
        first.save_to(dir.path()).unwrap();

        let second = CsvExport::from_list(&ProductList::new()).unwrap();
        let path = second.save_to(dir.path()).unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}

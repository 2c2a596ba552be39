// src/extract/mod.rs

use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::debug;

use crate::error::ExtractError;

/// Reads the list of stock codes out of a cached listing.
pub trait Extractor {
    fn extract_codes(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

impl<E: Extractor + ?Sized> Extractor for &E {
    fn extract_codes(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        (**self).extract_codes(path)
    }
}

/// Spreadsheet extractor backed by calamine. The format is picked from the
/// file extension, so `.xls`, `.xlsx` and `.ods` all work.
#[derive(Debug, Clone)]
pub struct XlsExtractor {
    column: u32,
}

impl XlsExtractor {
    pub fn new(column: u32) -> Self {
        Self { column }
    }
}

impl Extractor for XlsExtractor {
    fn extract_codes(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let open_err = |source| ExtractError::FileOpen {
            path: path.to_path_buf(),
            source,
        };

        let mut workbook = open_workbook_auto(path).map_err(open_err)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ExtractError::SheetNotFound {
                path: path.to_path_buf(),
            })?
            .map_err(open_err)?;

        debug!(path=%path.display(), size=?range.get_size(), "read first sheet");
        Ok(codes_from_range(&range, self.column))
    }
}

/// Collect the non-empty cells of `column` from every row after the header.
/// Row and column indices are absolute, row 0 being the header.
pub fn codes_from_range(range: &Range<Data>, column: u32) -> Vec<String> {
    let Some((last_row, _)) = range.end() else {
        return Vec::new();
    };

    (1..=last_row)
        .filter_map(|row| range.get_value((row, column)))
        .filter_map(cell_text)
        .collect()
}

/// Text of a cell as it would be displayed, `None` when blank.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

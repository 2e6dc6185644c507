//! CSV catalog loading
//!
//! Expected headers: `Name`, `Tags`, `ReviewCount`, `Brand`, `ImageURL`,
//! `Rating`. Only `Name` and `Tags` are required; column order is free and
//! unknown columns are ignored.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Catalog, Item};
use crate::error::{Result, TagmatchError};

const NAME_COLUMN: &str = "Name";
const TAGS_COLUMN: &str = "Tags";
const REVIEW_COUNT_COLUMN: &str = "ReviewCount";
const BRAND_COLUMN: &str = "Brand";
const IMAGE_URL_COLUMN: &str = "ImageURL";
const RATING_COLUMN: &str = "Rating";

struct Columns {
    name: usize,
    tags: usize,
    review_count: Option<usize>,
    brand: Option<usize>,
    image_url: Option<usize>,
    rating: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |column: &str| headers.iter().position(|h| h.trim() == column);
        let require = |column: &str| {
            find(column).ok_or_else(|| TagmatchError::MissingColumn {
                column: column.to_string(),
            })
        };

        Ok(Columns {
            name: require(NAME_COLUMN)?,
            tags: require(TAGS_COLUMN)?,
            review_count: find(REVIEW_COUNT_COLUMN),
            brand: find(BRAND_COLUMN),
            image_url: find(IMAGE_URL_COLUMN),
            rating: find(RATING_COLUMN),
        })
    }
}

fn text_field(record: &csv::StringRecord, column: Option<usize>) -> String {
    column
        .and_then(|idx| record.get(idx))
        .unwrap_or_default()
        .to_string()
}

fn number_field(
    record: &csv::StringRecord,
    column: Option<usize>,
    header: &str,
    row: usize,
    origin: &Path,
) -> Result<Option<f64>> {
    let raw = match column.and_then(|idx| record.get(idx)) {
        Some(raw) => raw.trim(),
        None => return Ok(None),
    };
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>().map(Some).map_err(|_| {
        TagmatchError::invalid_catalog(
            origin,
            format!("row {row}: {header} is not a number: {raw:?}"),
        )
    })
}

impl Catalog {
    /// Load a catalog from a CSV file on disk
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TagmatchError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = std::fs::File::open(path)
            .map_err(|e| TagmatchError::io_operation("open catalog", path.display(), e))?;
        Self::read_csv(file, path)
    }

    /// Load a catalog from any CSV source (headers required)
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read_csv(reader, &PathBuf::from("<reader>"))
    }

    fn read_csv<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::from_headers(reader.headers()?)?;

        let mut items = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // Header is line 1
            let row = idx + 2;

            let name = record.get(columns.name).ok_or_else(|| {
                TagmatchError::invalid_catalog(origin, format!("row {row}: missing {NAME_COLUMN}"))
            })?;
            let tags = record.get(columns.tags).ok_or_else(|| {
                TagmatchError::invalid_catalog(origin, format!("row {row}: missing {TAGS_COLUMN}"))
            })?;

            items.push(Item {
                name: name.to_string(),
                tags: tags.to_string(),
                review_count: number_field(
                    &record,
                    columns.review_count,
                    REVIEW_COUNT_COLUMN,
                    row,
                    origin,
                )?,
                brand: text_field(&record, columns.brand),
                image_url: text_field(&record, columns.image_url),
                rating: number_field(&record, columns.rating, RATING_COLUMN, row, origin)?,
            });
        }

        debug!(origin = %origin.display(), items = items.len(), "load_catalog");
        Ok(Catalog::new(items))
    }
}

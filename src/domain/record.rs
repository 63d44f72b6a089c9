use serde::{Serialize, Serializer};

/// Written into every cell of a record whose page could not be retrieved.
pub const FETCH_FAILED_MARKER: &str = "取得失敗";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductFields {
    pub about_item: String,
    pub manufacturer_description: String,
    pub product_information: String,
    pub product_description: String,
}

impl ProductFields {
    pub fn cells(&self) -> [&str; 4] {
        [
            self.about_item.as_str(),
            self.manufacturer_description.as_str(),
            self.product_information.as_str(),
            self.product_description.as_str(),
        ]
    }

    pub fn found_count(&self) -> usize {
        self.cells().iter().filter(|c| !c.is_empty()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Extracted(ProductFields),
    FetchFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Complete,
    Partial,
    /// Page fetched but none of the four fields was found.
    Empty,
    Failed,
}

#[derive(Serialize)]
struct RenderedRecord<'a> {
    about_item: &'a str,
    manufacturer_description: &'a str,
    product_information: &'a str,
    product_description: &'a str,
}

impl Record {
    /// Flat view for tabular consumers; a failed fetch fills every cell with
    /// [`FETCH_FAILED_MARKER`].
    pub fn cells(&self) -> [&str; 4] {
        match self {
            Record::Extracted(fields) => fields.cells(),
            Record::FetchFailed => [FETCH_FAILED_MARKER; 4],
        }
    }

    pub fn status(&self) -> RecordStatus {
        match self {
            Record::FetchFailed => RecordStatus::Failed,
            Record::Extracted(fields) => match fields.found_count() {
                4 => RecordStatus::Complete,
                0 => RecordStatus::Empty,
                _ => RecordStatus::Partial,
            },
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [about_item, manufacturer_description, product_information, product_description] =
            self.cells();

        RenderedRecord {
            about_item,
            manufacturer_description,
            product_information,
            product_description,
        }
        .serialize(serializer)
    }
}

use csv::Writer;

use super::{
    error::{ExportError, ProductError},
    product::ProductRecord,
};

pub const CSV_HEADER: [&str; 8] = [
    "name",
    "costPrice",
    "sellingPrice",
    "platform",
    "feeRate",
    "fee",
    "profit",
    "profitMargin",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub count: usize,
    pub total_cost: u64,
    pub total_selling: u64,
    pub total_profit: i64,
}

/// Products tracked in the current session, in the order they were added.
/// Records are addressed by position only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductList {
    records: Vec<ProductRecord>,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    /// Removes the record at `index`; later records shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<ProductRecord, ProductError> {
        if index >= self.records.len() {
            return Err(ProductError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn aggregate(&self) -> ListSummary {
        self.records.iter().fold(
            ListSummary {
                count: self.records.len(),
                ..ListSummary::default()
            },
            |mut summary, record| {
                summary.total_cost += record.cost_price() as u64;
                summary.total_selling += record.selling_price() as u64;
                summary.total_profit += record.profit();
                summary
            },
        )
    }

    /// Serializes the list as CSV with a header row. An empty list yields the
    /// header alone.
    pub fn export(&self) -> Result<String, ExportError> {
        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;

        for record in &self.records {
            writer.write_record(&[
                record.name().to_string(),
                record.cost_price().to_string(),
                record.selling_price().to_string(),
                record.platform().to_string(),
                format!("{:.1}", record.fee_rate()),
                record.fee().to_string(),
                record.profit().to_string(),
                format!("{:.1}", record.profit_margin()),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| ExportError::Io(err.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

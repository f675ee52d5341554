use std::path::Path;

use contracts::projections::p200_revenue_register::UnifiedSaleRow;
use thiserror::Error;

/// File name of the persisted unified register
pub const UNIFIED_FILE: &str = "unified_revenue.csv";

const COLUMNS: [&str; 8] = [
    "date",
    "platform",
    "order_id",
    "product_name",
    "gross_revenue",
    "discount",
    "net_revenue",
    "quantity",
];

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Overwrite the register file with the given rows.
///
/// The register is rebuilt whole on every unify run; there is no
/// incremental merge.
pub fn write_register(path: &Path, rows: &[UnifiedSaleRow]) -> Result<(), RegisterError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;

    for row in rows {
        writer.write_record(&[
            row.date.format("%Y-%m-%d").to_string(),
            row.platform.to_string(),
            row.order_id.clone(),
            row.product_name.clone(),
            row.gross_revenue.to_string(),
            row.discount.to_string(),
            row.net_revenue.to_string(),
            row.quantity.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

use std::path::Path;

use chrono::NaiveDate;
use contracts::dashboards::d300_revenue_summary::OrderRow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("required column '{0}' is missing from the order export")]
    MissingColumn(&'static str),

    #[error("order export row {row}: cannot parse '{value}' as a date")]
    BadDate { row: usize, value: String },

    #[error("order export row {row}: cannot parse '{value}' as a number")]
    BadNumber { row: usize, value: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Load raw order rows from the delimited export at `path`.
///
/// Header names are canonicalized (trimmed, lowercased) before lookup, so
/// "Net Sales" and " net sales " both resolve. Unparsable dates or numbers
/// fail the whole load.
pub fn load_order_rows(path: &Path) -> Result<Vec<OrderRow>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let day_col = column("day")?;
    let order_id_col = column("order id")?;
    let product_col = column("product title")?;
    let total_col = column("total sales")?;
    let discounts_col = column("discounts")?;
    let net_col = column("net sales")?;
    let quantity_col = column("quantity ordered")?;

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        rows.push(OrderRow {
            day: parse_date(index, field(day_col))?,
            order_id: field(order_id_col).to_string(),
            product_title: field(product_col).to_string(),
            total_sales: parse_number(index, field(total_col))?,
            discounts: parse_number(index, field(discounts_col))?,
            net_sales: parse_number(index, field(net_col))?,
            quantity: parse_integer(index, field(quantity_col))?,
        });
    }

    Ok(rows)
}

fn parse_date(row: usize, value: &str) -> Result<NaiveDate, LoadError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| LoadError::BadDate {
        row,
        value: value.to_string(),
    })
}

fn parse_number(row: usize, value: &str) -> Result<f64, LoadError> {
    value.parse::<f64>().map_err(|_| LoadError::BadNumber {
        row,
        value: value.to_string(),
    })
}

fn parse_integer(row: usize, value: &str) -> Result<i64, LoadError> {
    value.parse::<i64>().map_err(|_| LoadError::BadNumber {
        row,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_with_messy_headers() {
        let file = write_csv(
            "Day, Order ID ,Product Title,Total Sales,Discounts,Net Sales,Quantity Ordered\n\
             2025-05-01,ORD-1,Smart Wallet,1200,200,1000,1\n\
             2025-05-02,ORD-2,Travel Bag,900,0,900,2\n",
        );

        let rows = load_order_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].order_id, "ORD-1");
        assert_eq!(rows[0].net_sales, 1000.0);
        assert_eq!(rows[1].day, "2025-05-02".parse().unwrap());
        assert_eq!(rows[1].quantity, 2);
    }

    #[test]
    fn missing_column_fails_the_load() {
        let file = write_csv(
            "day,order id,product title,total sales,discounts,quantity ordered\n\
             2025-05-01,ORD-1,Smart Wallet,1200,200,1\n",
        );

        assert!(matches!(
            load_order_rows(file.path()),
            Err(LoadError::MissingColumn("net sales"))
        ));
    }

    #[test]
    fn unparsable_date_fails_fast() {
        let file = write_csv(
            "day,order id,product title,total sales,discounts,net sales,quantity ordered\n\
             05/01/2025,ORD-1,Smart Wallet,1200,200,1000,1\n",
        );

        assert!(matches!(
            load_order_rows(file.path()),
            Err(LoadError::BadDate { row: 0, .. })
        ));
    }
}

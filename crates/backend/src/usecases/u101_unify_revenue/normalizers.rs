use chrono::NaiveDate;
use contracts::{enums::Platform, projections::p200_revenue_register::UnifiedSaleRow};

use super::UnifyError;

/// A raw marketplace export: canonicalized headers plus its records.
///
/// Header lookup is case/whitespace-insensitive; everything else about the
/// source schema is up to the per-platform normalizer.
pub struct RawFrame {
    platform: Platform,
    headers: Vec<String>,
    records: Vec<csv::StringRecord>,
}

impl RawFrame {
    pub fn from_reader<R: std::io::Read>(platform: Platform, reader: R) -> Result<Self, UnifyError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            platform,
            headers,
            records,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    fn column(&self, name: &'static str) -> Result<usize, UnifyError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or(UnifyError::MissingColumn {
                platform: self.platform,
                column: name,
            })
    }

    fn optional_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn field<'a>(&self, record: &'a csv::StringRecord, col: usize) -> &'a str {
        record.get(col).unwrap_or("").trim()
    }

    fn parse_date(&self, row: usize, value: &str) -> Result<NaiveDate, UnifyError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| UnifyError::BadDate {
            platform: self.platform,
            row,
            value: value.to_string(),
        })
    }

    fn parse_number(&self, row: usize, value: &str) -> Result<f64, UnifyError> {
        value.parse::<f64>().map_err(|_| UnifyError::BadNumber {
            platform: self.platform,
            row,
            value: value.to_string(),
        })
    }

    fn parse_integer(&self, row: usize, value: &str) -> Result<i64, UnifyError> {
        value.parse::<i64>().map_err(|_| UnifyError::BadNumber {
            platform: self.platform,
            row,
            value: value.to_string(),
        })
    }
}

/// Map a raw export to unified rows using the platform's own schema
pub fn normalize(frame: &RawFrame) -> Result<Vec<UnifiedSaleRow>, UnifyError> {
    match frame.platform() {
        Platform::Shopify => normalize_shopify(frame),
        Platform::Amazon => normalize_amazon(frame),
        Platform::Myntra => normalize_myntra(frame),
    }
}

/// Shopify order export. Net revenue comes straight from the "net sales"
/// column; the quantity column is absent in older exports and defaults to 1.
pub fn normalize_shopify(frame: &RawFrame) -> Result<Vec<UnifiedSaleRow>, UnifyError> {
    let day = frame.column("day")?;
    let order_id = frame.column("order id")?;
    let product = frame.column("product title")?;
    let gross = frame.column("total sales")?;
    let discount = frame.column("discounts")?;
    let net = frame.column("net sales")?;
    let quantity = frame.optional_column("quantity ordered");

    frame
        .records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            Ok(UnifiedSaleRow {
                date: frame.parse_date(row, frame.field(record, day))?,
                platform: Platform::Shopify,
                order_id: frame.field(record, order_id).to_string(),
                product_name: frame.field(record, product).to_string(),
                gross_revenue: frame.parse_number(row, frame.field(record, gross))?,
                discount: frame.parse_number(row, frame.field(record, discount))?,
                net_revenue: frame.parse_number(row, frame.field(record, net))?,
                quantity: match quantity {
                    Some(col) => frame.parse_integer(row, frame.field(record, col))?,
                    None => 1,
                },
            })
        })
        .collect()
}

/// Amazon settlement-style export. The source carries no net column, so
/// net revenue is derived as item price minus promotion discount.
pub fn normalize_amazon(frame: &RawFrame) -> Result<Vec<UnifiedSaleRow>, UnifyError> {
    let date = frame.column("order-date")?;
    let order_id = frame.column("amazon-order-id")?;
    let sku = frame.column("sku")?;
    let price = frame.column("item-price")?;
    let discount = frame.column("promotion-discount")?;
    let quantity = frame.column("quantity")?;

    frame
        .records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let gross_revenue = frame.parse_number(row, frame.field(record, price))?;
            let discount_value = frame.parse_number(row, frame.field(record, discount))?;
            Ok(UnifiedSaleRow {
                date: frame.parse_date(row, frame.field(record, date))?,
                platform: Platform::Amazon,
                order_id: frame.field(record, order_id).to_string(),
                product_name: frame.field(record, sku).to_string(),
                gross_revenue,
                discount: discount_value,
                net_revenue: gross_revenue - discount_value,
                quantity: frame.parse_integer(row, frame.field(record, quantity))?,
            })
        })
        .collect()
}

/// Myntra order export: style-level rows with MRP, discount and net amount
pub fn normalize_myntra(frame: &RawFrame) -> Result<Vec<UnifiedSaleRow>, UnifyError> {
    let date = frame.column("order_date")?;
    let order_id = frame.column("order_id")?;
    let style = frame.column("style_id")?;
    let mrp = frame.column("mrp")?;
    let discount = frame.column("discount")?;
    let net = frame.column("net_amount")?;
    let quantity = frame.column("qty")?;

    frame
        .records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            Ok(UnifiedSaleRow {
                date: frame.parse_date(row, frame.field(record, date))?,
                platform: Platform::Myntra,
                order_id: frame.field(record, order_id).to_string(),
                product_name: frame.field(record, style).to_string(),
                gross_revenue: frame.parse_number(row, frame.field(record, mrp))?,
                discount: frame.parse_number(row, frame.field(record, discount))?,
                net_revenue: frame.parse_number(row, frame.field(record, net))?,
                quantity: frame.parse_integer(row, frame.field(record, quantity))?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(platform: Platform, csv_text: &str) -> RawFrame {
        RawFrame::from_reader(platform, csv_text.as_bytes()).unwrap()
    }

    #[test]
    fn shopify_rows_map_directly() {
        let frame = frame(
            Platform::Shopify,
            "Day,Order ID,Product Title,Total Sales,Discounts,Net Sales,Quantity Ordered\n\
             2025-05-01,SHP-1,Smart Wallet,1200,200,1000,2\n",
        );

        let rows = normalize_shopify(&frame).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].platform, Platform::Shopify);
        assert_eq!(rows[0].gross_revenue, 1200.0);
        assert_eq!(rows[0].net_revenue, 1000.0);
        assert_eq!(rows[0].quantity, 2);
    }

    #[test]
    fn shopify_quantity_defaults_to_one() {
        let frame = frame(
            Platform::Shopify,
            "day,order id,product title,total sales,discounts,net sales\n\
             2025-05-01,SHP-1,Smart Wallet,1200,200,1000\n",
        );

        let rows = normalize_shopify(&frame).unwrap();
        assert_eq!(rows[0].quantity, 1);
    }

    #[test]
    fn amazon_net_revenue_is_derived() {
        let frame = frame(
            Platform::Amazon,
            "order-date,amazon-order-id,sku,item-price,promotion-discount,quantity\n\
             2025-05-03,AMZ-9,SKU-77,1500,300,1\n",
        );

        let rows = normalize_amazon(&frame).unwrap();
        assert_eq!(rows[0].platform, Platform::Amazon);
        assert_eq!(rows[0].net_revenue, 1200.0);
    }

    #[test]
    fn myntra_rows_map_directly() {
        let frame = frame(
            Platform::Myntra,
            "order_date,order_id,style_id,mrp,discount,net_amount,qty\n\
             2025-05-04,MYN-5,STYLE-12,2000,800,1200,1\n",
        );

        let rows = normalize_myntra(&frame).unwrap();
        assert_eq!(rows[0].platform, Platform::Myntra);
        assert_eq!(rows[0].product_name, "STYLE-12");
        assert_eq!(rows[0].net_revenue, 1200.0);
    }

    #[test]
    fn missing_source_column_propagates() {
        let frame = frame(
            Platform::Amazon,
            "order-date,amazon-order-id,sku,item-price,quantity\n\
             2025-05-03,AMZ-9,SKU-77,1500,1\n",
        );

        assert!(matches!(
            normalize_amazon(&frame),
            Err(UnifyError::MissingColumn {
                platform: Platform::Amazon,
                column: "promotion-discount"
            })
        ));
    }

    #[test]
    fn unparsable_date_fails_fast() {
        let frame = frame(
            Platform::Myntra,
            "order_date,order_id,style_id,mrp,discount,net_amount,qty\n\
             yesterday,MYN-5,STYLE-12,2000,800,1200,1\n",
        );

        assert!(matches!(
            normalize_myntra(&frame),
            Err(UnifyError::BadDate { row: 0, .. })
        ));
    }
}

pub mod d300_revenue_summary;

pub mod d300_revenue_summary;
pub mod email_report;
pub mod u101_unify;

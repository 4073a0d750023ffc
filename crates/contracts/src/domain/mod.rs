pub mod a001_sales_ledger;
pub mod a002_client_portfolio;
pub mod a003_growth_advisory;

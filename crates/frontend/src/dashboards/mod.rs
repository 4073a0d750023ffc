pub mod d400_sales_overview;
pub mod d401_client_portfolio;
pub mod d402_growth_advisory;

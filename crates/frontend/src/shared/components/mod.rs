pub mod charts;
pub mod month_selector;
pub mod number_format;
pub mod stat_card;

pub mod bill;
pub mod model;
pub mod multi_start;
pub mod optimizer;
pub mod rates;
pub mod season;
pub mod tier;

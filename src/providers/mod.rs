pub mod smartinvest;

pub use smartinvest::SmartInvestProvider;

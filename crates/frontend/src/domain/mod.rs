pub mod a001_business_type;
pub mod a002_feature_type;
pub mod a003_business;

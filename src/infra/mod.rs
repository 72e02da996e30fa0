pub mod geo;
pub mod locale;
pub mod storage;

pub mod domain;
pub mod ports;
pub mod report_use_cases;
pub mod service;

pub mod domain;
pub mod environment_use_cases;
pub mod ports;
pub mod service;

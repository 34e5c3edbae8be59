pub mod logging;
pub mod sensitive_info;

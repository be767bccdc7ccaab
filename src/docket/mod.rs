pub mod config;
pub mod datetime;
pub mod evidence_summary;
pub mod files;
pub mod incident_summary;
pub mod message;
pub mod model;
pub mod police_report;
pub mod reference;
pub mod session;
pub mod sms;
pub mod splash;
pub mod store;
pub mod warn;

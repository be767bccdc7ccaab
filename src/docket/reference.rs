use crate::docket::datetime::format_timestamp;
use crate::docket::model::Incident;

/// Single-line reference to an incident, suitable for the warning-message
/// reference slot and clipboard use.
pub fn format_incident_reference(incident: &Incident) -> String {
    format!(
        "Incident Report {} - {} ({})",
        incident.report_number,
        incident.title,
        format_timestamp(incident.timestamp)
    )
}

use super::*;
use crate::net::types::TriageLevel;

fn entry(audit_id: &str) -> AuditEntry {
    AuditEntry {
        audit_id: audit_id.to_owned(),
        doctor_name: "Dr. Bernard Thimotius".to_owned(),
        triage_result: TriageLevel::Monitoring,
        analysis_time: "2026-01-31T10:20:30".to_owned(),
    }
}

#[test]
fn blank_search_keeps_every_entry() {
    let entries = vec![entry("JGTX-AAAA0001"), entry("JGTX-BBBB0002")];
    assert_eq!(filter_by_audit_id(&entries, "  ").len(), 2);
}

#[test]
fn search_is_case_insensitive_substring() {
    let entries = vec![entry("JGTX-AAAA0001"), entry("JGTX-BBBB0002")];
    let hits = filter_by_audit_id(&entries, "bbbb");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].audit_id, "JGTX-BBBB0002");
}

#[test]
fn search_without_match_is_empty() {
    let entries = vec![entry("JGTX-AAAA0001")];
    assert!(filter_by_audit_id(&entries, "zzzz").is_empty());
}

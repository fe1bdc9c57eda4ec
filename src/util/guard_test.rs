use super::*;
use crate::net::types::User;

fn user(role: Role) -> User {
    User {
        username: format!("{role}-user"),
        full_name: None,
        role,
    }
}

fn settled(role: Option<Role>) -> SessionState {
    SessionState::settled(role.map(user))
}

const ROLES: [Role; 3] = [Role::Admin, Role::Doctor, Role::Radiologist];
const TO_LOGIN: GuardDecision = GuardDecision::Redirect(AppRoute::Login);

// =============================================================
// Initializing
// =============================================================

#[test]
fn initializing_never_redirects() {
    let booting = SessionState::booting();
    assert_eq!(evaluate(&booting, None), GuardDecision::Loading);
    for required in ROLES {
        assert_eq!(evaluate(&booting, Some(required)), GuardDecision::Loading);
    }
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn unauthenticated_redirects_to_login() {
    let session = settled(None);
    assert_eq!(evaluate(&session, None), TO_LOGIN);
    assert_eq!(evaluate(&session, Some(Role::Admin)), TO_LOGIN);
}

// =============================================================
// Role checks
// =============================================================

#[test]
fn non_admin_on_admin_route_goes_to_dashboard() {
    for role in [Role::Doctor, Role::Radiologist] {
        assert_eq!(
            evaluate(&settled(Some(role)), Some(Role::Admin)),
            GuardDecision::Redirect(AppRoute::Dashboard),
            "role {role}"
        );
    }
}

#[test]
fn admin_on_clinician_only_view_goes_to_audit_history() {
    assert_eq!(
        evaluate(&settled(Some(Role::Admin)), Some(Role::Doctor)),
        GuardDecision::Redirect(AppRoute::AuditHistory)
    );
}

#[test]
fn matching_role_renders() {
    for role in ROLES {
        let session = settled(Some(role));
        assert_eq!(evaluate(&session, Some(role)), GuardDecision::Render);
    }
}

#[test]
fn no_required_role_renders_for_every_authenticated_user() {
    for role in ROLES {
        let session = settled(Some(role));
        assert_eq!(evaluate(&session, None), GuardDecision::Render);
    }
}

// =============================================================
// Paths
// =============================================================

#[test]
fn restored_doctor_is_sent_from_audit_history_to_dashboard() {
    let session = settled(Some(Role::Doctor));
    let audit = evaluate_path(&session, "/audit-history");
    assert_eq!(audit, GuardDecision::Redirect(AppRoute::Dashboard));
    assert_eq!(evaluate_path(&session, "/dashboard"), GuardDecision::Render);
}

#[test]
fn admin_reaches_audit_history_and_dashboard() {
    let session = settled(Some(Role::Admin));
    for path in ["/audit-history", "/dashboard", "/analysis-result"] {
        let decision = evaluate_path(&session, path);
        assert_eq!(decision, GuardDecision::Render, "path {path}");
    }
}

#[test]
fn public_paths_render_without_session() {
    let session = settled(None);
    for path in ["/", "/login", "/no-such-page"] {
        let decision = evaluate_path(&session, path);
        assert_eq!(decision, GuardDecision::Render, "path {path}");
    }
    let result_page = evaluate_path(&session, "/analysis-result");
    assert_eq!(result_page, TO_LOGIN);
}

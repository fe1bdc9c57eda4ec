//! Closed set of client routes.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::net::types::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Public landing page.
    Landing,
    Login,
    /// Upload and analysis desk; any authenticated role.
    Dashboard,
    /// Result viewer; any authenticated role.
    AnalysisResult,
    /// Audit trail; admins only.
    AuditHistory,
}

impl AppRoute {
    pub const ALL: [Self; 5] = [
        Self::Landing,
        Self::Login,
        Self::Dashboard,
        Self::AnalysisResult,
        Self::AuditHistory,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::AnalysisResult => "/analysis-result",
            Self::AuditHistory => "/audit-history",
        }
    }

    /// Match a location path. Unknown paths resolve to the landing page,
    /// mirroring the router's catch-all.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Self::Landing)
    }

    /// Whether the route sits behind the session guard.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard | Self::AnalysisResult | Self::AuditHistory)
    }

    /// Role the route demands beyond being logged in.
    pub fn required_role(self) -> Option<Role> {
        match self {
            Self::AuditHistory => Some(Role::Admin),
            Self::Landing | Self::Login | Self::Dashboard | Self::AnalysisResult => None,
        }
    }

    /// Default view for a role. Total over [`Role`]; new roles must be
    /// mapped here explicitly.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AuditHistory,
            Role::Doctor | Role::Radiologist => Self::Dashboard,
        }
    }
}

//! WarmTarget: every resource the warming engine knows how to prefetch.
//!
//! Screen names are resolved to targets by substring keyword matching,
//! first match wins. The matching is intentionally confined to this module
//! so a stricter lookup only ever changes one place.

use serde::{Deserialize, Serialize};

use crate::config::WarmingConfig;
use crate::models::{CacheKey, CachePolicy, MemberRole};

/// A prefetchable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarmTarget {
    UserProfile,
    UserRole,
    OrgContext,
    UpcomingEvents,
    VolunteerHours,
    AttendanceRecords,
    MemberDashboard,
    PersonalHoursStats,
    OfficerDashboard,
    PendingHours,
    OrgMembers,
}

impl WarmTarget {
    /// Resolve a predicted screen name to a target.
    ///
    /// Keyword order matters: Events, VolunteerHours, Attendance, Dashboard.
    /// Screens matching none of the keywords resolve to no target.
    pub fn from_screen_name(screen: &str, role: MemberRole) -> Option<Self> {
        if screen.contains("Events") {
            Some(Self::UpcomingEvents)
        } else if screen.contains("VolunteerHours") {
            Some(Self::VolunteerHours)
        } else if screen.contains("Attendance") {
            Some(Self::AttendanceRecords)
        } else if screen.contains("Dashboard") {
            Some(Self::dashboard_for(role))
        } else {
            None
        }
    }

    /// Resolve a time-of-day prediction to a target.
    ///
    /// Time-based warming only covers the Dashboard and Events keywords.
    pub fn from_screen_name_restricted(screen: &str, role: MemberRole) -> Option<Self> {
        if screen.contains("Dashboard") {
            Some(Self::dashboard_for(role))
        } else if screen.contains("Events") {
            Some(Self::UpcomingEvents)
        } else {
            None
        }
    }

    /// The dashboard variant appropriate for a role.
    pub fn dashboard_for(role: MemberRole) -> Self {
        match role {
            MemberRole::Member => Self::MemberDashboard,
            MemberRole::Officer => Self::OfficerDashboard,
        }
    }

    /// Stable resource name used in cache keys and logs.
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::UserProfile => "user_profile",
            Self::UserRole => "user_role",
            Self::OrgContext => "org_context",
            Self::UpcomingEvents => "upcoming_events",
            Self::VolunteerHours => "volunteer_hours",
            Self::AttendanceRecords => "attendance_records",
            Self::MemberDashboard => "member_dashboard",
            Self::PersonalHoursStats => "personal_hours_stats",
            Self::OfficerDashboard => "officer_dashboard",
            Self::PendingHours => "pending_hours",
            Self::OrgMembers => "org_members",
        }
    }

    /// Cache key for this target under the given config.
    pub fn cache_key(self, config: &WarmingConfig) -> CacheKey {
        match self {
            // Organization-shared resources.
            Self::OrgContext | Self::UpcomingEvents | Self::OrgMembers | Self::PendingHours => {
                CacheKey::shared(self.resource_name())
            }
            // Everything else is scoped to the current user.
            _ => CacheKey::for_user(self.resource_name(), &config.user_id),
        }
    }

    /// Staleness class for this target.
    pub fn policy(self) -> CachePolicy {
        match self {
            Self::UserProfile => CachePolicy::Static,
            Self::UserRole | Self::OrgContext => CachePolicy::Critical,
            Self::PendingHours => CachePolicy::Realtime,
            Self::UpcomingEvents
            | Self::VolunteerHours
            | Self::AttendanceRecords
            | Self::MemberDashboard
            | Self::PersonalHoursStats
            | Self::OfficerDashboard
            | Self::OrgMembers => CachePolicy::Dynamic,
        }
    }
}

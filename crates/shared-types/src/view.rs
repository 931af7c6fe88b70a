//! Declarative list configurations selected per role.
//!
//! Role pages never branch on the role inside the list. They look up a
//! [`ViewConfiguration`] once and hand it to the shared list component,
//! which turns each flag into the presence or absence of one affordance.

use std::num::NonZeroU32;

use crate::ClinicRole;

/// Build a non-zero list limit in a const context.
///
/// Evaluating this with `0` inside a `const` item fails compilation.
pub const fn view_limit(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(limit) => limit,
        None => panic!("view limit must be positive"),
    }
}

/// Display configuration for the shared consultation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfiguration {
    pub title: &'static str,
    pub description: &'static str,
    pub show_statistics: bool,
    pub show_clinic_filter: bool,
    pub show_join_button: bool,
    pub show_end_button: bool,
    pub show_download_button: bool,
    /// Upper bound on rendered items.
    pub limit: NonZeroU32,
}

/// Which list a page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The full video consultation list page.
    VideoConsultations,
    /// The short "recent consultations" panel on a role dashboard.
    DashboardRecent,
}

impl ViewConfiguration {
    /// Assert the title invariant; usable in `const` items.
    pub const fn checked(self) -> Self {
        assert!(!self.title.is_empty(), "view title must not be empty");
        self
    }

    /// Number of action buttons (join, end, download) enabled per row.
    pub fn action_count(&self) -> usize {
        [
            self.show_join_button,
            self.show_end_button,
            self.show_download_button,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }

    /// Look up the configuration a role's page supplies for a list.
    pub fn for_role(role: ClinicRole, kind: ViewKind) -> Self {
        match (kind, role) {
            (ViewKind::VideoConsultations, ClinicRole::Receptionist) => RECEPTIONIST_CONSULTATIONS,
            (ViewKind::VideoConsultations, ClinicRole::Doctor) => DOCTOR_CONSULTATIONS,
            (ViewKind::VideoConsultations, ClinicRole::SuperAdmin) => SUPER_ADMIN_CONSULTATIONS,
            (ViewKind::DashboardRecent, ClinicRole::SuperAdmin) => SUPER_ADMIN_RECENT,
            (ViewKind::DashboardRecent, _) => STAFF_RECENT,
        }
    }
}

const RECEPTIONIST_CONSULTATIONS: ViewConfiguration = ViewConfiguration {
    title: "Video Consultations",
    description: "Upcoming and past video consultations for your clinic.",
    show_statistics: false,
    show_clinic_filter: false,
    show_join_button: false,
    show_end_button: false,
    show_download_button: false,
    limit: view_limit(100),
}
.checked();

const DOCTOR_CONSULTATIONS: ViewConfiguration = ViewConfiguration {
    title: "My Video Consultations",
    description: "Join scheduled sessions and close them when you are done.",
    show_statistics: false,
    show_clinic_filter: false,
    show_join_button: true,
    show_end_button: true,
    show_download_button: false,
    limit: view_limit(50),
}
.checked();

const SUPER_ADMIN_CONSULTATIONS: ViewConfiguration = ViewConfiguration {
    title: "All Video Consultations",
    description: "Video consultations across every clinic on the platform.",
    show_statistics: true,
    show_clinic_filter: true,
    show_join_button: false,
    show_end_button: true,
    show_download_button: true,
    limit: view_limit(200),
}
.checked();

const SUPER_ADMIN_RECENT: ViewConfiguration = ViewConfiguration {
    title: "Recent Consultations",
    description: "",
    show_statistics: false,
    show_clinic_filter: true,
    show_join_button: false,
    show_end_button: false,
    show_download_button: true,
    limit: view_limit(10),
}
.checked();

const STAFF_RECENT: ViewConfiguration = ViewConfiguration {
    title: "Recent Consultations",
    description: "",
    show_statistics: false,
    show_clinic_filter: false,
    show_join_button: false,
    show_end_button: false,
    show_download_button: false,
    limit: view_limit(10),
}
.checked();

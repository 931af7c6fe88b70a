use dioxus::prelude::*;
use shared_types::{ClinicRole, ViewConfiguration, ViewKind};

use crate::components::{ConsultationList, HealthStatusCard, PageShell};
use crate::role_gate::RoleGate;

/// Page heading; the list below carries its own.
pub(crate) const PAGE_TITLE: &str = "Administration";

/// Network-wide overview: system health above the recent consultations.
#[component]
pub fn SuperAdminDashboard() -> Element {
    rsx! {
        RoleGate { required: ClinicRole::SuperAdmin,
            PageShell { title: "{PAGE_TITLE}", description: "All clinics in the network.",
                HealthStatusCard {}
                ConsultationList {
                    config: ViewConfiguration::for_role(ClinicRole::SuperAdmin, ViewKind::DashboardRecent),
                }
            }
        }
    }
}

#[component]
pub fn SuperAdminVideoConsultations() -> Element {
    rsx! {
        RoleGate { required: ClinicRole::SuperAdmin,
            PageShell { title: "{PAGE_TITLE}",
                ConsultationList {
                    config: ViewConfiguration::for_role(ClinicRole::SuperAdmin, ViewKind::VideoConsultations),
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_types::{ClinicRole, ViewConfiguration, ViewKind};

use crate::components::{ConsultationList, HealthStatusCard, PageShell};
use crate::role_gate::RoleGate;

/// Page heading; the list below carries its own.
pub(crate) const PAGE_TITLE: &str = "Front Desk";

#[component]
pub fn ReceptionistDashboard() -> Element {
    rsx! {
        RoleGate { required: ClinicRole::Receptionist,
            PageShell { title: "{PAGE_TITLE}", description: "Latest consultations across your clinic.",
                RoleGate { required: ClinicRole::SuperAdmin, suppress_warning: true,
                    HealthStatusCard {}
                }
                ConsultationList {
                    config: ViewConfiguration::for_role(ClinicRole::Receptionist, ViewKind::DashboardRecent),
                }
            }
        }
    }
}

#[component]
pub fn ReceptionistVideoConsultations() -> Element {
    rsx! {
        RoleGate { required: ClinicRole::Receptionist,
            PageShell { title: "{PAGE_TITLE}",
                ConsultationList {
                    config: ViewConfiguration::for_role(ClinicRole::Receptionist, ViewKind::VideoConsultations),
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_types::{ClinicRole, ViewConfiguration, ViewKind};

use crate::components::{ConsultationList, PageShell};
use crate::role_gate::RoleGate;

/// Page heading; the list below carries its own.
pub(crate) const PAGE_TITLE: &str = "My Consultations";

#[component]
pub fn DoctorVideoConsultations() -> Element {
    rsx! {
        RoleGate { required: ClinicRole::Doctor,
            PageShell { title: "{PAGE_TITLE}",
                ConsultationList {
                    config: ViewConfiguration::for_role(ClinicRole::Doctor, ViewKind::VideoConsultations),
                }
            }
        }
    }
}

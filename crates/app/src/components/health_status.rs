use dioxus::prelude::*;
use shared_types::{AppError, HealthStatus};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton};

use crate::format_helpers::format_uptime;

/// Super admin system health card.
#[component]
pub fn HealthStatusCard() -> Element {
    let health = use_resource(move || async move { server::api::get_health_status().await });

    match &*health.read() {
        Some(Ok(status)) => rsx! { HealthStatusView { health: status.clone() } },
        Some(Err(e)) => {
            let message = AppError::friendly_message(&e.to_string());
            rsx! {
                Card { class: "health-card",
                    CardHeader {
                        CardTitle { "System Health" }
                        CardDescription { "{message}" }
                    }
                }
            }
        }
        None => rsx! {
            Card { class: "health-card",
                CardHeader { CardTitle { "System Health" } }
                CardContent { Skeleton { height: "4rem" } }
            }
        },
    }
}

#[component]
pub fn HealthStatusView(health: HealthStatus) -> Element {
    let overall = if health.is_ok() {
        BadgeVariant::Success
    } else {
        BadgeVariant::Destructive
    };
    let uptime = format_uptime(health.uptime_seconds);

    rsx! {
        Card { class: "health-card",
            CardHeader {
                CardTitle { "System Health" }
                CardDescription { "Version {health.version} · up {uptime}" }
            }
            CardContent {
                Badge { variant: overall, "{health.status}" }
                ul { class: "health-services",
                    for service in health.services.iter() {
                        li { key: "{service.name}", class: "health-service",
                            span { class: "health-service-name", "{service.name}" }
                            if service.healthy {
                                Badge { variant: BadgeVariant::Success, "healthy" }
                            } else {
                                Badge { variant: BadgeVariant::Destructive, "unhealthy" }
                            }
                            span { class: "health-service-detail", "{service.detail}" }
                        }
                    }
                }
            }
        }
    }
}

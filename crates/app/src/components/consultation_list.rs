//! The shared, role-agnostic video consultation list.
//!
//! Role pages hand [`ConsultationList`] a [`ViewConfiguration`] and nothing
//! else. The container fetches data; [`ConsultationListView`] renders purely
//! from props, turning each capability flag into exactly one affordance.

use dioxus::prelude::*;
use shared_types::{
    AppError, Clinic, ConsultationPage, ConsultationQuery, ConsultationStats, ConsultationStatus,
    VideoConsultation, ViewConfiguration,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, FormSelect, LinkButton, SelectOption, Skeleton,
};
use uuid::Uuid;

use crate::format_helpers::{format_datetime_human, format_duration};

/// Number of skeleton rows shown while loading.
const SKELETON_ROWS: usize = 5;

/// What the list currently has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Failed(String),
    Loaded(ConsultationPage),
}

/// Data-fetching container: one instance per page, configured by value.
#[component]
pub fn ConsultationList(config: ViewConfiguration) -> Element {
    let mut selected_clinic = use_signal(String::new);
    let mut pending = use_signal(|| Option::<Uuid>::None);
    let mut action_error = use_signal(|| Option::<String>::None);

    let mut page = use_resource(move || {
        let clinic = selected_clinic.read().clone();
        async move {
            let query = ConsultationQuery::for_view(&config, Some(clinic));
            server::api::list_consultations(query).await
        }
    });

    let clinics = use_resource(move || async move {
        if !config.show_clinic_filter {
            return Vec::new();
        }
        server::api::list_clinics().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load clinics for filter");
            Vec::new()
        })
    });

    let state = match &*page.read() {
        None => ListState::Loading,
        Some(Err(e)) => ListState::Failed(AppError::friendly_message(&e.to_string())),
        Some(Ok(p)) => ListState::Loaded(p.clone()),
    };

    let handle_end = move |id: Uuid| {
        pending.set(Some(id));
        spawn(async move {
            match server::api::end_consultation(id).await {
                Ok(_) => {
                    action_error.set(None);
                    page.restart();
                }
                Err(e) => {
                    action_error.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
            pending.set(None);
        });
    };

    rsx! {
        if let Some(message) = action_error() {
            div { class: "list-action-error", role: "alert", "{message}" }
        }
        ConsultationListView {
            config,
            state,
            clinics: clinics.read().clone().unwrap_or_default(),
            selected_clinic: selected_clinic(),
            pending: pending(),
            on_clinic_change: move |clinic: String| selected_clinic.set(clinic),
            on_retry: move |_| page.restart(),
            on_end: handle_end,
        }
    }
}

/// Pure rendering of the list. Never reads context or fetches.
#[component]
pub fn ConsultationListView(
    config: ViewConfiguration,
    state: ListState,
    #[props(default)] clinics: Vec<Clinic>,
    #[props(default)] selected_clinic: String,
    #[props(default)] pending: Option<Uuid>,
    #[props(default)] on_clinic_change: EventHandler<String>,
    #[props(default)] on_retry: EventHandler<()>,
    #[props(default)] on_end: EventHandler<Uuid>,
) -> Element {
    let stats = match &state {
        ListState::Loading => StatsState::Pending,
        ListState::Failed(_) => StatsState::Unavailable,
        ListState::Loaded(page) => StatsState::Ready(page.stats.clone()),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./consultation_list.css") }
        section { class: "consultation-list",
            div { class: "consultation-list-header",
                div {
                    h2 { class: "consultation-list-title", "{config.title}" }
                    if !config.description.is_empty() {
                        p { class: "consultation-list-description", "{config.description}" }
                    }
                }
                if config.show_clinic_filter {
                    div { class: "clinic-filter",
                        FormSelect {
                            label: "Clinic",
                            value: selected_clinic.clone(),
                            placeholder: "All clinics",
                            options: clinics
                                .iter()
                                .map(|c| SelectOption::new(c.id.clone(), c.name.clone()))
                                .collect::<Vec<_>>(),
                            onchange: move |clinic: String| on_clinic_change.call(clinic),
                        }
                    }
                }
            }

            if config.show_statistics {
                StatisticsPanel { stats }
            }

            match state {
                ListState::Loading => rsx! {
                    div { class: "consultation-list-loading",
                        for _ in 0..SKELETON_ROWS {
                            Skeleton { height: "2rem" }
                        }
                    }
                },
                ListState::Failed(message) => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Error" }
                            CardDescription { "Failed to load video consultations." }
                        }
                        CardContent {
                            p { class: "consultation-list-error", "{message}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| on_retry.call(()),
                                "Retry"
                            }
                        }
                    }
                },
                ListState::Loaded(page) if page.consultations.is_empty() => rsx! {
                    Card {
                        CardContent {
                            p { class: "consultation-list-empty", "No video consultations found." }
                        }
                    }
                },
                ListState::Loaded(page) => rsx! {
                    ConsultationTable {
                        config,
                        consultations: page.consultations,
                        clinics: clinics.clone(),
                        pending,
                        on_end,
                    }
                },
            }
        }
    }
}

#[component]
fn ConsultationTable(
    config: ViewConfiguration,
    consultations: Vec<VideoConsultation>,
    clinics: Vec<Clinic>,
    pending: Option<Uuid>,
    on_end: EventHandler<Uuid>,
) -> Element {
    let has_actions = config.action_count() > 0;
    let limit = config.limit.get() as usize;
    let clinic_name = move |id: &str| {
        clinics
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Patient" }
                DataTableColumn { "Doctor" }
                DataTableColumn { "Clinic" }
                DataTableColumn { "Scheduled" }
                DataTableColumn { "Duration" }
                DataTableColumn { "Status" }
                if has_actions {
                    DataTableColumn { "Actions" }
                }
            }
            DataTableBody {
                for consultation in consultations.into_iter().take(limit) {
                    DataTableRow { key: "{consultation.id}",
                        DataTableCell { "{consultation.patient_name}" }
                        DataTableCell { "{consultation.doctor_name}" }
                        DataTableCell { {clinic_name(&consultation.clinic_id)} }
                        DataTableCell { {format_datetime_human(&consultation.scheduled_at)} }
                        DataTableCell { {format_duration(consultation.duration_minutes)} }
                        DataTableCell {
                            StatusBadge { status: consultation.status }
                        }
                        if has_actions {
                            DataTableCell {
                                RowActions {
                                    config,
                                    consultation: consultation.clone(),
                                    busy: pending == Some(consultation.id),
                                    on_end,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Join / end / download affordances for one row. Each is present iff its
/// flag is set; rows it does not apply to get it disabled. Join and download
/// are plain links: the meeting room and the summary attachment route.
#[component]
fn RowActions(
    config: ViewConfiguration,
    consultation: VideoConsultation,
    busy: bool,
    on_end: EventHandler<Uuid>,
) -> Element {
    let id = consultation.id;
    let can_join = consultation.can_join();
    let can_end = consultation.can_end() && !busy;
    let can_download = consultation.has_summary();

    rsx! {
        div { class: "row-actions",
            if config.show_join_button {
                LinkButton {
                    variant: ButtonVariant::Primary,
                    action: "join",
                    href: consultation.meeting_url.clone(),
                    disabled: !can_join,
                    new_tab: true,
                    "Join"
                }
            }
            if config.show_end_button {
                Button {
                    variant: ButtonVariant::Destructive,
                    action: "end",
                    disabled: !can_end,
                    onclick: move |_| on_end.call(id),
                    if busy { "Ending..." } else { "End" }
                }
            }
            if config.show_download_button {
                LinkButton {
                    variant: ButtonVariant::Outline,
                    action: "download",
                    href: format!("/api/consultations/{id}/summary"),
                    disabled: !can_download,
                    "Download"
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: ConsultationStatus) -> Element {
    let variant = match status {
        ConsultationStatus::Scheduled => BadgeVariant::Secondary,
        ConsultationStatus::InProgress => BadgeVariant::Primary,
        ConsultationStatus::Completed => BadgeVariant::Success,
        ConsultationStatus::Cancelled => BadgeVariant::Destructive,
    };
    rsx! {
        Badge { variant, "{status.label()}" }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum StatsState {
    Pending,
    Unavailable,
    Ready(ConsultationStats),
}

/// Status counts for the filtered set: skeletons while loading, a dash per
/// cell once the load has failed.
#[component]
fn StatisticsPanel(stats: StatsState) -> Element {
    let ready = match &stats {
        StatsState::Ready(s) => Some(s),
        _ => None,
    };
    let cells: [(&str, Option<usize>); 5] = [
        ("Total", ready.map(|s| s.total)),
        ("Scheduled", ready.map(|s| s.scheduled)),
        ("In Progress", ready.map(|s| s.in_progress)),
        ("Completed", ready.map(|s| s.completed)),
        ("Cancelled", ready.map(|s| s.cancelled)),
    ];
    let unavailable = stats == StatsState::Unavailable;

    rsx! {
        div { class: "consultation-stats",
            for (label, value) in cells {
                Card { key: "{label}",
                    CardHeader {
                        span { class: "stat-label", "{label}" }
                    }
                    CardContent {
                        match value {
                            Some(count) => rsx! { span { class: "stat-number", "{count}" } },
                            None if unavailable => rsx! { span { class: "stat-unavailable", "\u{2014}" } },
                            None => rsx! { Skeleton {} },
                        }
                    }
                }
            }
        }
    }
}

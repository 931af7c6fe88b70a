use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::Validate;

use crate::{AppError, ViewConfiguration};

/// Hard ceiling on a single consultation query.
pub const MAX_CONSULTATION_LIMIT: u32 = 500;

/// Limit applied when a query omits one.
pub const DEFAULT_CONSULTATION_LIMIT: u32 = 100;

fn default_limit() -> u32 {
    DEFAULT_CONSULTATION_LIMIT
}

/// A clinic on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Clinic {
    pub id: String,
    pub name: String,
    pub city: String,
}

/// Lifecycle of a video consultation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ConsultationStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ConsultationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Scheduled => "scheduled",
            ConsultationStatus::InProgress => "in_progress",
            ConsultationStatus::Completed => "completed",
            ConsultationStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsultationStatus::Scheduled => "Scheduled",
            ConsultationStatus::InProgress => "In Progress",
            ConsultationStatus::Completed => "Completed",
            ConsultationStatus::Cancelled => "Cancelled",
        }
    }

    /// Still open: can be joined or ended.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            ConsultationStatus::Scheduled | ConsultationStatus::InProgress
        )
    }
}

/// A single video consultation between a patient and a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VideoConsultation {
    pub id: Uuid,
    pub clinic_id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: ConsultationStatus,
    pub meeting_url: String,
}

impl VideoConsultation {
    pub fn can_join(&self) -> bool {
        self.status.is_open()
    }

    pub fn can_end(&self) -> bool {
        self.status.is_open()
    }

    /// A summary exists once the consultation has completed.
    pub fn has_summary(&self) -> bool {
        self.status == ConsultationStatus::Completed
    }

    /// Close an open consultation.
    pub fn end(&mut self) -> Result<(), AppError> {
        if !self.can_end() {
            return Err(AppError::conflict(format!(
                "Consultation is already {}",
                self.status.label().to_lowercase()
            )));
        }
        self.status = ConsultationStatus::Completed;
        Ok(())
    }

    /// Plain-text summary offered as a download for completed consultations.
    pub fn summary_text(&self, clinic_name: &str) -> Result<String, AppError> {
        if !self.has_summary() {
            return Err(AppError::conflict(
                "Summary is available once the consultation has completed",
            ));
        }
        Ok(format!(
            "Video consultation summary\n\
             ID: {}\n\
             Clinic: {}\n\
             Patient: {}\n\
             Doctor: {}\n\
             Scheduled: {}\n\
             Duration: {} minutes\n\
             Status: {}\n",
            self.id,
            clinic_name,
            self.patient_name,
            self.doctor_name,
            self.scheduled_at.format("%Y-%m-%d %H:%M UTC"),
            self.duration_minutes,
            self.status.label(),
        ))
    }
}

/// Query issued by the shared list component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema, utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ConsultationQuery {
    #[serde(default)]
    pub clinic_id: Option<String>,
    /// Defaults to [`DEFAULT_CONSULTATION_LIMIT`] when omitted.
    #[serde(default = "default_limit")]
    #[cfg_attr(
        feature = "validation",
        validate(range(
            min = 1,
            max = MAX_CONSULTATION_LIMIT,
            message = "Limit must be between 1 and the consultation maximum"
        ))
    )]
    pub limit: u32,
}

impl ConsultationQuery {
    /// Query bounded by a view's limit, optionally narrowed to one clinic.
    pub fn for_view(config: &ViewConfiguration, clinic_id: Option<String>) -> Self {
        Self {
            clinic_id: clinic_id.filter(|id| !id.is_empty()),
            limit: config.limit.get().min(MAX_CONSULTATION_LIMIT),
        }
    }

    fn matches(&self, consultation: &VideoConsultation) -> bool {
        self.clinic_id
            .as_deref()
            .map_or(true, |id| consultation.clinic_id == id)
    }
}

/// Status counts over every consultation matching a query's clinic filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ConsultationStats {
    pub total: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl ConsultationStats {
    fn record(&mut self, status: ConsultationStatus) {
        self.total += 1;
        match status {
            ConsultationStatus::Scheduled => self.scheduled += 1,
            ConsultationStatus::InProgress => self.in_progress += 1,
            ConsultationStatus::Completed => self.completed += 1,
            ConsultationStatus::Cancelled => self.cancelled += 1,
        }
    }
}

/// One page of consultations plus statistics for the whole filtered set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ConsultationPage {
    pub consultations: Vec<VideoConsultation>,
    pub stats: ConsultationStats,
}

impl ConsultationPage {
    /// Filter by clinic, order newest first, count, then cut to the limit.
    pub fn select<'a>(
        all: impl IntoIterator<Item = &'a VideoConsultation>,
        query: &ConsultationQuery,
    ) -> Self {
        let mut stats = ConsultationStats::default();
        let mut consultations: Vec<VideoConsultation> = all
            .into_iter()
            .filter(|c| query.matches(c))
            .inspect(|c| stats.record(c.status))
            .cloned()
            .collect();

        consultations.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
        consultations.truncate(query.limit as usize);

        Self {
            consultations,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClinicRole, ViewKind};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn consultation(clinic: &str, day: u32, status: ConsultationStatus) -> VideoConsultation {
        VideoConsultation {
            id: Uuid::new_v4(),
            clinic_id: clinic.to_string(),
            patient_name: "Jordan Lee".to_string(),
            doctor_name: "Dr. Amara Osei".to_string(),
            scheduled_at: Utc.with_ymd_and_hms(2026, 3, day, 9, 30, 0).unwrap(),
            duration_minutes: 20,
            status,
            meeting_url: "https://meet.example.com/room".to_string(),
        }
    }

    fn query(clinic_id: Option<&str>, limit: u32) -> ConsultationQuery {
        ConsultationQuery {
            clinic_id: clinic_id.map(str::to_string),
            limit,
        }
    }

    #[test]
    fn select_orders_newest_first() {
        let all = vec![
            consultation("north", 1, ConsultationStatus::Completed),
            consultation("north", 3, ConsultationStatus::Scheduled),
            consultation("north", 2, ConsultationStatus::InProgress),
        ];
        let page = ConsultationPage::select(&all, &query(None, 10));
        let days: Vec<u32> = page
            .consultations
            .iter()
            .map(|c| c.scheduled_at.format("%d").to_string().parse().unwrap())
            .collect();
        assert_eq!(days, vec![3, 2, 1]);
    }

    #[test]
    fn select_filters_by_clinic() {
        let all = vec![
            consultation("north", 1, ConsultationStatus::Completed),
            consultation("south", 2, ConsultationStatus::Scheduled),
            consultation("north", 3, ConsultationStatus::Scheduled),
        ];
        let page = ConsultationPage::select(&all, &query(Some("north"), 10));
        assert_eq!(page.consultations.len(), 2);
        assert!(page.consultations.iter().all(|c| c.clinic_id == "north"));
        assert_eq!(page.stats.total, 2);
    }

    #[test]
    fn stats_cover_the_filtered_set_before_the_limit() {
        let all = vec![
            consultation("north", 1, ConsultationStatus::Completed),
            consultation("north", 2, ConsultationStatus::Cancelled),
            consultation("north", 3, ConsultationStatus::Scheduled),
            consultation("north", 4, ConsultationStatus::InProgress),
            consultation("south", 5, ConsultationStatus::Scheduled),
        ];
        let page = ConsultationPage::select(&all, &query(Some("north"), 1));
        assert_eq!(page.consultations.len(), 1);
        assert_eq!(
            page.stats,
            ConsultationStats {
                total: 4,
                scheduled: 1,
                in_progress: 1,
                completed: 1,
                cancelled: 1,
            }
        );
    }

    #[test]
    fn select_never_exceeds_limit() {
        let all: Vec<_> = (1..=28)
            .map(|day| consultation("north", day, ConsultationStatus::Scheduled))
            .collect();
        for limit in [1, 5, 28, 100] {
            let page = ConsultationPage::select(&all, &query(None, limit));
            assert!(page.consultations.len() <= limit as usize);
        }
    }

    #[test]
    fn for_view_uses_config_limit_and_drops_empty_clinic() {
        let config = ViewConfiguration::for_role(ClinicRole::SuperAdmin, ViewKind::VideoConsultations);
        let q = ConsultationQuery::for_view(&config, Some(String::new()));
        assert_eq!(q.limit, 200);
        assert_eq!(q.clinic_id, None);

        let q = ConsultationQuery::for_view(&config, Some("north".to_string()));
        assert_eq!(q.clinic_id.as_deref(), Some("north"));
    }

    #[test]
    fn omitted_limit_uses_default() {
        let q: ConsultationQuery = serde_json::from_str(r#"{"clinic_id":"north"}"#).unwrap();
        assert_eq!(q.limit, DEFAULT_CONSULTATION_LIMIT);
        let q: ConsultationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q, query(None, DEFAULT_CONSULTATION_LIMIT));
    }

    #[test]
    fn ending_open_consultation_completes_it() {
        let mut c = consultation("north", 1, ConsultationStatus::InProgress);
        c.end().unwrap();
        assert_eq!(c.status, ConsultationStatus::Completed);

        let mut c = consultation("north", 1, ConsultationStatus::Scheduled);
        c.end().unwrap();
        assert_eq!(c.status, ConsultationStatus::Completed);
    }

    #[test]
    fn ending_closed_consultation_conflicts() {
        for status in [ConsultationStatus::Completed, ConsultationStatus::Cancelled] {
            let mut c = consultation("north", 1, status);
            let err = c.end().unwrap_err();
            assert_eq!(err.kind, crate::AppErrorKind::Conflict);
            assert_eq!(c.status, status);
        }
    }

    #[test]
    fn summary_requires_completion() {
        let c = consultation("north", 1, ConsultationStatus::Scheduled);
        assert!(c.summary_text("North Clinic").is_err());

        let c = consultation("north", 1, ConsultationStatus::Completed);
        let text = c.summary_text("North Clinic").unwrap();
        assert!(text.contains("Clinic: North Clinic"));
        assert!(text.contains("Scheduled: 2026-03-01 09:30 UTC"));
        assert!(text.contains("Duration: 20 minutes"));
    }
}

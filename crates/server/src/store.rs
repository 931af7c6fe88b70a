//! In-memory consultation store.
//!
//! Holds clinics and video consultations for the lifetime of the process.
//! Nothing is persisted; with `features.demo_data` on, the store is seeded
//! with a fixed set of clinics and consultations spread around "now".

use std::sync::{Arc, OnceLock, RwLock};

use chrono::{DateTime, Duration, DurationRound, Utc};
use shared_types::{
    AppError, Clinic, ConsultationPage, ConsultationQuery, ConsultationStatus, VideoConsultation,
};
use uuid::Uuid;

/// Handle shared between REST handlers and server functions.
pub type SharedStore = Arc<RwLock<ConsultationStore>>;

static STORE: OnceLock<SharedStore> = OnceLock::new();

/// Create the process-wide store. Only the first call has effect.
pub fn init(seed_demo_data: bool) -> SharedStore {
    STORE
        .get_or_init(|| {
            let store = if seed_demo_data {
                let store = ConsultationStore::demo(Utc::now());
                tracing::info!(
                    clinics = store.clinics.len(),
                    consultations = store.consultations.len(),
                    "seeded demo consultation store"
                );
                store
            } else {
                tracing::info!("starting with an empty consultation store");
                ConsultationStore::default()
            };
            Arc::new(RwLock::new(store))
        })
        .clone()
}

/// The process-wide store; empty if `init` was never called.
pub fn shared() -> SharedStore {
    STORE
        .get_or_init(|| Arc::new(RwLock::new(ConsultationStore::default())))
        .clone()
}

fn poisoned() -> AppError {
    AppError::internal("Consultation store is unavailable")
}

/// Run `f` under the read lock.
pub fn read<T>(
    store: &SharedStore,
    f: impl FnOnce(&ConsultationStore) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let guard = store.read().map_err(|_| poisoned())?;
    f(&guard)
}

/// Run `f` under the write lock.
pub fn write<T>(
    store: &SharedStore,
    f: impl FnOnce(&mut ConsultationStore) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut guard = store.write().map_err(|_| poisoned())?;
    f(&mut guard)
}

#[derive(Debug, Default, Clone)]
pub struct ConsultationStore {
    clinics: Vec<Clinic>,
    consultations: Vec<VideoConsultation>,
}

impl ConsultationStore {
    pub fn new(clinics: Vec<Clinic>, consultations: Vec<VideoConsultation>) -> Self {
        Self {
            clinics,
            consultations,
        }
    }

    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    pub fn page(&self, query: &ConsultationQuery) -> Result<ConsultationPage, AppError> {
        if let Some(clinic_id) = query.clinic_id.as_deref() {
            self.clinic(clinic_id)?;
        }
        Ok(ConsultationPage::select(&self.consultations, query))
    }

    pub fn get(&self, id: Uuid) -> Result<&VideoConsultation, AppError> {
        self.consultations
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(format!("Consultation {id} not found")))
    }

    fn clinic(&self, id: &str) -> Result<&Clinic, AppError> {
        self.clinics
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(format!("Clinic '{id}' not found")))
    }

    /// Move an open consultation to `Completed`.
    pub fn end(&mut self, id: Uuid) -> Result<VideoConsultation, AppError> {
        let consultation = self
            .consultations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(format!("Consultation {id} not found")))?;
        consultation.end()?;
        tracing::info!(%id, "consultation ended");
        Ok(consultation.clone())
    }

    /// Plain-text summary for a completed consultation.
    pub fn summary(&self, id: Uuid) -> Result<String, AppError> {
        let consultation = self.get(id)?;
        let clinic_name = self
            .clinic(&consultation.clinic_id)
            .map(|c| c.name.as_str())
            .unwrap_or(consultation.clinic_id.as_str());
        consultation.summary_text(clinic_name)
    }

    /// Demo data: three clinics with consultations every few hours around `now`.
    pub fn demo(now: DateTime<Utc>) -> Self {
        let clinics = vec![
            clinic("north", "Northside Family Clinic", "Leeds"),
            clinic("harbour", "Harbour Health Centre", "Bristol"),
            clinic("riverside", "Riverside Medical Practice", "York"),
        ];

        const PATIENTS: &[&str] = &[
            "Jordan Lee",
            "Priya Raman",
            "Tomás García",
            "Mei Chen",
            "Oluwaseun Adeyemi",
            "Hannah Schmidt",
            "Ravi Kapoor",
            "Sofia Rossi",
        ];
        const DOCTORS: &[&str] = &["Dr. Amara Osei", "Dr. Liam Walsh", "Dr. Noor Haddad"];

        let anchor = now.duration_trunc(Duration::hours(1)).unwrap_or(now);
        let consultations = (0..36i64)
            .map(|i| {
                let offset = Duration::hours(3 * (i - 24));
                let scheduled_at = anchor + offset;
                let status = demo_status(i, scheduled_at, now);
                let index = i as usize;
                VideoConsultation {
                    id: Uuid::new_v4(),
                    clinic_id: clinics[index % clinics.len()].id.clone(),
                    patient_name: PATIENTS[index % PATIENTS.len()].to_string(),
                    doctor_name: DOCTORS[index % DOCTORS.len()].to_string(),
                    scheduled_at,
                    duration_minutes: [15, 20, 30, 45][index % 4],
                    status,
                    meeting_url: format!("https://meet.example.com/consult/{:04}", i),
                }
            })
            .collect();

        Self {
            clinics,
            consultations,
        }
    }
}

fn clinic(id: &str, name: &str, city: &str) -> Clinic {
    Clinic {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
    }
}

fn demo_status(i: i64, scheduled_at: DateTime<Utc>, now: DateTime<Utc>) -> ConsultationStatus {
    if scheduled_at > now {
        ConsultationStatus::Scheduled
    } else if now - scheduled_at < Duration::hours(1) {
        ConsultationStatus::InProgress
    } else if i % 7 == 3 {
        ConsultationStatus::Cancelled
    } else {
        ConsultationStatus::Completed
    }
}

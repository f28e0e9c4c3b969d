//! In-memory demo roster.
//!
//! Stands in for a persistence layer the service deliberately does not have:
//! a handful of Stockholm-area cleaners and jobs seeded at startup, enough to
//! drive the map endpoints end to end.

use crate::domain::{
    cleaner::Cleaner,
    errors::DomainError,
    job::{Job, Priority},
};
use chrono::Utc;

pub struct DemoRoster {
    cleaners: Vec<Cleaner>,
    jobs: Vec<Job>,
}

impl DemoRoster {
    pub fn seed() -> Self {
        let now = Utc::now();
        let cleaners = vec![
            Cleaner {
                id: "cleaner_001".into(),
                name: "Anna Andersson".into(),
                email: Some("anna@example.com".into()),
                phone: Some("070-123 45 67".into()),
                home_address: "Södermalm, Stockholm".into(),
            },
            Cleaner {
                id: "cleaner_002".into(),
                name: "Erik Lindqvist".into(),
                email: Some("erik@example.com".into()),
                phone: Some("070-234 56 78".into()),
                home_address: "Kommunalvägen 28, Huddinge".into(),
            },
            Cleaner {
                id: "cleaner_003".into(),
                name: "Maria Nilsson".into(),
                email: Some("maria@example.com".into()),
                phone: None,
                home_address: "Dragarbrunnsgatan 50, Uppsala".into(),
            },
        ];
        let jobs = vec![
            Job {
                id: "job_001".into(),
                client_name: "Konsulthuset Stockholm".into(),
                address: "Kungsgatan 12, Stockholm".into(),
                scheduled_start_time: "08:00".into(),
                scheduled_end_time: "10:30".into(),
                priority: Priority::High,
                created_at: Some(now),
            },
            Job {
                id: "job_002".into(),
                client_name: "Villa Södermalm".into(),
                address: "Folkungagatan 15, Stockholm".into(),
                scheduled_start_time: "11:00".into(),
                scheduled_end_time: "14:00".into(),
                priority: Priority::Urgent,
                created_at: Some(now),
            },
            Job {
                id: "job_003".into(),
                client_name: "Kontoret Uppsala".into(),
                address: "S:t Persgatan 8, Uppsala".into(),
                scheduled_start_time: "09:00".into(),
                scheduled_end_time: "11:00".into(),
                priority: Priority::Medium,
                created_at: Some(now),
            },
            Job {
                id: "job_004".into(),
                client_name: "Fönsterputs Flemingsberg".into(),
                address: "Diagnosvägen 10, Huddinge".into(),
                scheduled_start_time: "14:30".into(),
                scheduled_end_time: "16:00".into(),
                priority: Priority::Low,
                created_at: Some(now),
            },
            // No city-table match: exercises the randomized fallback path.
            Job {
                id: "job_005".into(),
                client_name: "Lagerhallen Sundbyberg".into(),
                address: "Sundbybergs allé 1, Sundbyberg".into(),
                scheduled_start_time: "16:30".into(),
                scheduled_end_time: "18:00".into(),
                priority: Priority::Medium,
                created_at: Some(now),
            },
        ];
        Self { cleaners, jobs }
    }

    pub fn cleaners(&self) -> &[Cleaner] {
        &self.cleaners
    }

    pub fn find_cleaner(&self, id: &str) -> Option<&Cleaner> {
        self.cleaners.iter().find(|c| c.id == id)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn find_job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Select roster jobs by id, preserving the requested order.
    pub fn jobs_by_ids<'a, I>(&self, ids: I) -> Result<Vec<Job>, DomainError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .map(|id| {
                self.find_job(id)
                    .cloned()
                    .ok_or_else(|| DomainError::NotFound(format!("job {}", id)))
            })
            .collect()
    }
}

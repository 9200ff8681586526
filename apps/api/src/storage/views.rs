//! Derived views: pure functions over store contents and a requesting user.

use crate::models::{
    Application, ApplicationWithJob, DashboardStats, Job, JobWithStatus, StatusStage,
};
use crate::storage::StorageError;

/// Jobs newest first. `sort_by` is stable, so equal dates keep insertion order.
pub fn jobs_newest_first<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> Vec<Job> {
    let mut jobs: Vec<Job> = jobs.into_iter().cloned().collect();
    jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
    jobs
}

/// Every job, newest first, annotated with the user's application if there is one.
pub fn jobs_with_status<'a>(
    jobs: impl IntoIterator<Item = &'a Job>,
    applications: impl IntoIterator<Item = &'a Application>,
    user_id: i64,
) -> Vec<JobWithStatus> {
    let mine: Vec<&Application> = applications
        .into_iter()
        .filter(|a| a.user_id == user_id)
        .collect();

    jobs_newest_first(jobs)
        .into_iter()
        .map(|job| {
            let application = mine.iter().find(|a| a.job_id == job.id);
            JobWithStatus {
                status: application.map(|a| a.status),
                applied_date: application.map(|a| a.applied_date),
                job,
            }
        })
        .collect()
}

/// The user's applications, most recently applied first, each joined with its job.
///
/// A missing job is a data-integrity fault and fails the whole view.
pub fn applications_with_job<'a>(
    applications: impl IntoIterator<Item = &'a Application>,
    find_job: impl Fn(i64) -> Option<&'a Job>,
    user_id: i64,
) -> Result<Vec<ApplicationWithJob>, StorageError> {
    let mut mine: Vec<&Application> = applications
        .into_iter()
        .filter(|a| a.user_id == user_id)
        .collect();
    mine.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));

    mine.into_iter()
        .map(|application| {
            let job = find_job(application.job_id).ok_or(StorageError::DanglingJob {
                application_id: application.id,
                job_id: application.job_id,
            })?;
            Ok(ApplicationWithJob {
                application: application.clone(),
                job: job.clone(),
            })
        })
        .collect()
}

pub fn dashboard_stats<'a>(
    applications: impl IntoIterator<Item = &'a Application>,
    user_id: i64,
) -> DashboardStats {
    applications
        .into_iter()
        .filter(|a| a.user_id == user_id)
        .fold(DashboardStats::default(), |mut stats, application| {
            stats.total_applications += 1;
            match application.status.stage() {
                StatusStage::InProgress => stats.in_progress += 1,
                StatusStage::InterviewInvite => stats.interview_invites += 1,
                StatusStage::Rejected => stats.rejected += 1,
                StatusStage::Accepted => {}
            }
            stats
        })
}

//! Collaboration progress: task and milestone aggregation plus a schedule
//! check against the collaboration's date range.

use brandmatch_core::{Collaboration, Milestone, MilestoneStatus, Task, TaskStatus};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;

use crate::to_score;

/// Share of the overall figure taken from tasks; milestones take the rest.
pub const TASK_WEIGHT: f64 = 0.6;
pub const MILESTONE_WEIGHT: f64 = 0.4;

/// Points behind the expected progress before a collaboration is behind.
pub const BEHIND_MARGIN: i32 = 10;
/// Points behind the expected progress before a collaboration is at risk.
pub const AT_RISK_MARGIN: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProgress {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub cancelled: usize,
    pub progress_percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub missed: usize,
    pub progress_percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScheduleStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "Behind Schedule")]
    BehindSchedule,
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleStatus::OnTrack => write!(f, "On Track"),
            ScheduleStatus::BehindSchedule => write!(f, "Behind Schedule"),
            ScheduleStatus::AtRisk => write!(f, "At Risk"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationProgress {
    pub tasks: TaskProgress,
    pub milestones: MilestoneProgress,
    pub overall_progress: u8,
    /// Whole days until the end date, rounded up. Negative once overdue.
    pub days_remaining: Option<i64>,
    /// Share of the date range already elapsed, when both dates are set.
    pub expected_progress: Option<u8>,
    pub status: ScheduleStatus,
}

#[allow(clippy::cast_precision_loss)]
fn percentage(numerator: f64, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    to_score(100.0 * numerator / total as f64)
}

#[must_use]
pub fn calculate_task_progress(tasks: &[Task]) -> TaskProgress {
    let mut progress = TaskProgress {
        total: tasks.len(),
        ..TaskProgress::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Completed => progress.completed += 1,
            TaskStatus::InProgress => progress.in_progress += 1,
            TaskStatus::Pending => progress.pending += 1,
            TaskStatus::Cancelled => progress.cancelled += 1,
        }
    }
    #[allow(clippy::cast_precision_loss)]
    let done = progress.completed as f64 + 0.5 * progress.in_progress as f64;
    progress.progress_percentage = percentage(done, progress.total);
    progress
}

#[must_use]
pub fn calculate_milestone_progress(milestones: &[Milestone]) -> MilestoneProgress {
    let mut progress = MilestoneProgress {
        total: milestones.len(),
        ..MilestoneProgress::default()
    };
    for milestone in milestones {
        match milestone.status {
            MilestoneStatus::Completed => progress.completed += 1,
            MilestoneStatus::Pending => progress.pending += 1,
            MilestoneStatus::Missed => progress.missed += 1,
        }
    }
    #[allow(clippy::cast_precision_loss)]
    let done = progress.completed as f64;
    progress.progress_percentage = percentage(done, progress.total);
    progress
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// `ceil((end - now) / 1 day)`.
fn days_until(end: NaiveDate, now: DateTime<Utc>) -> i64 {
    let remaining = start_of_day(end) - now;
    // num_days truncates toward zero, which is already the ceiling below zero.
    let whole = remaining.num_days();
    whole + i64::from(remaining > TimeDelta::days(whole))
}

fn expected_progress(start: NaiveDate, end: NaiveDate, now: DateTime<Utc>) -> Option<u8> {
    let total = (start_of_day(end) - start_of_day(start)).num_seconds();
    if total <= 0 {
        return None;
    }
    let elapsed = (now - start_of_day(start)).num_seconds();
    #[allow(clippy::cast_precision_loss)]
    let ratio = elapsed as f64 / total as f64;
    Some(to_score(100.0 * ratio))
}

fn schedule_status(overall: u8, expected: Option<u8>) -> ScheduleStatus {
    let Some(expected) = expected else {
        return ScheduleStatus::OnTrack;
    };
    let (overall, expected) = (i32::from(overall), i32::from(expected));
    if overall < expected - AT_RISK_MARGIN {
        ScheduleStatus::AtRisk
    } else if overall < expected - BEHIND_MARGIN {
        ScheduleStatus::BehindSchedule
    } else {
        ScheduleStatus::OnTrack
    }
}

/// Progress of a collaboration as of `now`.
#[must_use]
pub fn calculate_progress(collab: &Collaboration, now: DateTime<Utc>) -> CollaborationProgress {
    let tasks = calculate_task_progress(&collab.tasks);
    let milestones = calculate_milestone_progress(&collab.milestones);
    let overall_progress = to_score(
        TASK_WEIGHT * f64::from(tasks.progress_percentage)
            + MILESTONE_WEIGHT * f64::from(milestones.progress_percentage),
    );

    let days_remaining = collab.end_date.map(|end| days_until(end, now));
    let expected = match (collab.start_date, collab.end_date) {
        (Some(start), Some(end)) => expected_progress(start, end, now),
        _ => None,
    };
    let status = schedule_status(overall_progress, expected);

    tracing::debug!(
        collaboration_id = %collab.id,
        overall = overall_progress,
        expected = ?expected,
        status = %status,
        "calculated collaboration progress"
    );

    CollaborationProgress {
        tasks,
        milestones,
        overall_progress,
        days_remaining,
        expected_progress: expected,
        status,
    }
}

//! Read models for the four screens.
//!
//! Everything here is derived on demand from the repositories and never
//! stored. Categories in particular are recomputed from the decision record
//! each time.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::solution::ProblemSolution;
use crate::domain::triage::WorryTimeSettings;
use crate::domain::worry::{DecisionQuestion, Worry, WorryCategory, WorryStatus};

use super::repositories::{SolutionRepository, WorryRepository};

/// Worry-time slot as shown to the user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub time: String,
    pub hour: u32,
    pub minute: u32,
    pub duration: u32,
    pub next_worry_time: Timestamp,
}

impl ScheduleView {
    pub fn new<Tz: TimeZone>(settings: &WorryTimeSettings, now: &DateTime<Tz>) -> Self {
        Self {
            time: settings.to_string(),
            hour: settings.hour(),
            minute: settings.minute(),
            duration: settings.duration(),
            next_worry_time: Timestamp::from_zoned(&settings.next_occurrence(now)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub new_count: usize,
    pub postponed_count: usize,
    pub in_progress_count: usize,
    pub dealt_with_count: usize,
    pub completed_solutions: usize,
    pub schedule: ScheduleView,
}

impl HomeView {
    pub fn build(
        worries: &WorryRepository,
        solutions: &SolutionRepository,
        schedule: ScheduleView,
    ) -> Self {
        Self {
            new_count: worries.with_status(WorryStatus::New).len(),
            postponed_count: worries.with_status(WorryStatus::Postponed).len(),
            in_progress_count: worries.with_status(WorryStatus::InProgress).len(),
            dealt_with_count: worries.list().iter().filter(|w| w.is_dealt_with()).count(),
            completed_solutions: solutions.completed().len(),
            schedule,
        }
    }
}

/// Unresolved worries, in the order they were logged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogView {
    pub worries: Vec<Worry>,
    pub schedule: ScheduleView,
}

impl LogView {
    pub fn build(worries: &WorryRepository, schedule: ScheduleView) -> Self {
        Self {
            worries: worries
                .list()
                .iter()
                .filter(|w| !w.is_dealt_with())
                .cloned()
                .collect(),
            schedule,
        }
    }
}

/// A dealt-with worry and what came out of triaging it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionEntry {
    #[serde(flatten)]
    pub worry: Worry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<WorryCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_label: Option<&'static str>,
}

/// Dealt-with worries that carry a reflection, newest first.
pub fn past_reflections(worries: &WorryRepository) -> Vec<ReflectionEntry> {
    let mut entries: Vec<_> = worries
        .list()
        .iter()
        .filter(|w| w.is_dealt_with() && w.reflection().is_some())
        .map(|w| {
            let category = w.category();
            ReflectionEntry {
                worry: w.clone(),
                category,
                category_label: category.map(|c| c.label()),
            }
        })
        .collect();
    entries.sort_by(|a, b| b.worry.created_at().cmp(a.worry.created_at()));
    entries
}

/// Completed problem-solving records, newest first.
pub fn past_solutions(solutions: &SolutionRepository) -> Vec<ProblemSolution> {
    solutions.completed().into_iter().cloned().collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct LearnSection {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<&'static str>,
    pub points: Vec<LearnPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearnPoint {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearnView {
    pub title: &'static str,
    pub sections: Vec<LearnSection>,
}

fn point(text: &'static str) -> LearnPoint {
    LearnPoint { text, detail: None }
}

impl LearnView {
    /// Static explanation of worry postponement.
    pub fn content() -> Self {
        Self {
            title: "Learn About Worry Postponement",
            sections: vec![
                LearnSection {
                    title: "The Science Behind It",
                    intro: Some(
                        "Worry postponement is based on cognitive behavioral therapy \
                         principles. It works by helping you:",
                    ),
                    points: vec![
                        point("Break the cycle of repetitive worrying"),
                        point("Reduce anxiety by containing worry to specific times"),
                        point("Improve your ability to focus on the present moment"),
                        point("Develop better emotional regulation skills"),
                    ],
                    closing: None,
                },
                LearnSection {
                    title: "How It Works",
                    intro: Some("The process involves three key steps:"),
                    points: vec![
                        LearnPoint {
                            text: "Notice and Log",
                            detail: Some(
                                "When a worry appears, acknowledge it and write it down \
                                 instead of engaging with it immediately.",
                            ),
                        },
                        LearnPoint {
                            text: "Postpone",
                            detail: Some(
                                "Remind yourself that you'll address this concern during \
                                 your designated worry time.",
                            ),
                        },
                        LearnPoint {
                            text: "Review and Process",
                            detail: Some(
                                "During your worry time, review your concerns mindfully and \
                                 develop action plans for solvable worries.",
                            ),
                        },
                    ],
                    closing: None,
                },
                LearnSection {
                    title: "Decision Tree",
                    intro: Some(
                        "During worry time, you'll use a decision tree to help determine if \
                         a worry needs immediate attention. You'll be asked:",
                    ),
                    points: DecisionQuestion::ORDER
                        .iter()
                        .map(|q| LearnPoint {
                            text: q.prompt(),
                            detail: Some(q.helper()),
                        })
                        .collect(),
                    closing: Some(
                        "If you answer \"no\" to any of these questions, it's a sign that this \
                         worry can be postponed or let go. This helps you focus your energy on \
                         concerns that truly need your attention.",
                    ),
                },
            ],
        }
    }
}

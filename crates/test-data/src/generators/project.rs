//! Project generation.

use std::ops::RangeInclusive;

use fake::{
    Fake,
    faker::{
        company::en::{Bs, CompanyName},
        lorem::en::{Paragraph, Sentence},
    },
};
use rand::{Rng, seq::SliceRandom};
use time::{Duration, OffsetDateTime};
use workforce::models::{Project, ProjectOverview, ProjectStatus};

/// Configuration for project generation.
#[derive(Debug, Clone)]
pub struct ProjectGenConfig {
    /// Statuses, picked uniformly.
    pub statuses: Vec<ProjectStatus>,
    /// How many days before the base time a project may have started.
    pub start_days_ago: RangeInclusive<i64>,
    /// Project length in days.
    pub duration_days: RangeInclusive<i64>,
    pub readiness_score: RangeInclusive<i32>,
    pub progress: RangeInclusive<i32>,
    /// Number of objective sentences in the overview.
    pub objectives: usize,
}

impl Default for ProjectGenConfig {
    fn default() -> Self {
        Self {
            statuses: ProjectStatus::ALL.to_vec(),
            start_days_ago: 0..=365,
            duration_days: 30..=365,
            readiness_score: 50..=100,
            progress: 0..=100,
            objectives: 3,
        }
    }
}

/// Generates projects led by existing employees.
pub struct ProjectGenerator {
    config: ProjectGenConfig,
}

impl ProjectGenerator {
    /// Creates a new project generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ProjectGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ProjectGenConfig) -> Self {
        Self { config }
    }

    /// Generates one project with an already-allocated id.
    ///
    /// The lead is picked uniformly from `lead_ids`; with no candidates the
    /// project has no lead.
    pub fn generate(
        &self,
        project_id: i64,
        lead_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Project {
        let phrase: String = Bs().fake_with_rng(rng);
        let client_name: String = CompanyName().fake_with_rng(rng);

        let start_date =
            base_time - Duration::days(rng.gen_range(self.config.start_days_ago.clone()));
        let end_date =
            start_date + Duration::days(rng.gen_range(self.config.duration_days.clone()));

        let summary: String = Paragraph(2..5).fake_with_rng(rng);
        let objectives: Vec<String> = (0..self.config.objectives)
            .map(|_| Sentence(4..10).fake_with_rng::<String, _>(rng))
            .collect();

        Project {
            project_id,
            name: title_case(&phrase),
            client_name,
            start_date,
            end_date,
            lead_emp_id: lead_ids.choose(rng).copied(),
            status: self
                .config
                .statuses
                .choose(rng)
                .copied()
                .unwrap_or(ProjectStatus::Draft),
            readiness_score: rng.gen_range(self.config.readiness_score.clone()),
            progress: rng.gen_range(self.config.progress.clone()),
            overview: ProjectOverview {
                summary,
                objectives,
            },
            created_at: base_time,
        }
    }
}

impl Default for ProjectGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercases the first letter of every word and lowercases the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

//! Project team and assignment generation.

use rand::{Rng, seq::SliceRandom};
use time::{Duration, OffsetDateTime};
use workforce::models::{AssignmentRole, ProjectAssignment};

/// Configuration for assignment generation.
#[derive(Debug, Clone)]
pub struct AssignmentGenConfig {
    /// Employees per project team (inclusive bounds).
    pub team_size: (usize, usize),
    /// Roles on a project, picked uniformly.
    pub roles: Vec<AssignmentRole>,
    /// Allocation percentages, picked uniformly.
    pub allocation_pcts: Vec<i32>,
    /// Assignments are dated up to this many days before the base time.
    pub max_days_assigned: i64,
}

impl Default for AssignmentGenConfig {
    fn default() -> Self {
        Self {
            team_size: (3, 8),
            roles: AssignmentRole::ALL.to_vec(),
            allocation_pcts: vec![25, 50, 100],
            max_days_assigned: 100,
        }
    }
}

/// Staffs projects with employees.
pub struct AssignmentGenerator {
    config: AssignmentGenConfig,
}

impl AssignmentGenerator {
    /// Creates a new assignment generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AssignmentGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: AssignmentGenConfig) -> Self {
        Self { config }
    }

    /// Draws a team for one project, without repeats.
    ///
    /// The size is uniform over the configured range with both bounds clamped
    /// to the number of employees, so a small pool yields the whole pool.
    pub fn choose_team(&self, employee_ids: &[i64], rng: &mut impl Rng) -> Vec<i64> {
        let (min, max) = self.config.team_size;
        let upper = max.min(employee_ids.len());
        let lower = min.min(upper);
        let size = rng.gen_range(lower..=upper);

        employee_ids.choose_multiple(rng, size).copied().collect()
    }

    /// Generates one assignment with an already-allocated id.
    pub fn generate(
        &self,
        emp_project_id: i64,
        project_id: i64,
        emp_id: i64,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> ProjectAssignment {
        let days_ago = rng.gen_range(0..=self.config.max_days_assigned);

        ProjectAssignment {
            emp_project_id,
            project_id,
            emp_id,
            role: self
                .config
                .roles
                .choose(rng)
                .copied()
                .unwrap_or(AssignmentRole::Contributor),
            is_active: true,
            allocation_pct: self
                .config
                .allocation_pcts
                .choose(rng)
                .copied()
                .unwrap_or(100),
            assigned_date: base_time - Duration::days(days_ago),
            created_at: base_time,
        }
    }
}

impl Default for AssignmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

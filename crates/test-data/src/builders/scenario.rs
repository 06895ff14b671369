//! Fluent builder for constructing seeding scenarios.

use std::ops::RangeInclusive;

use rand::Rng;
use time::OffsetDateTime;
use tracing::info;
use workforce::models::{ChildDepartment, Employee, ParentDepartment, Project, ProjectAssignment};
use workforce::sequence::{EMPLOYEE, PROJECT, PROJECT_EMPLOYEE};
use workforce::{Collection, DocumentStore, SequenceGenerator};

use crate::config::{DepartmentSpec, SeedConfig, default_departments};
use crate::db::{SeedError, Seeder};
use crate::generators::{
    AssignmentGenConfig, AssignmentGenerator, DepartmentGenerator, EmployeeGenConfig,
    EmployeeGenerator, ProjectGenConfig, ProjectGenerator,
};

/// Every record written by a scenario run.
#[derive(Debug, Default)]
pub struct ScenarioResult {
    pub parents: Vec<ParentDepartment>,
    pub children: Vec<ChildDepartment>,
    pub employees: Vec<Employee>,
    pub projects: Vec<Project>,
    pub assignments: Vec<ProjectAssignment>,
}

impl ScenarioResult {
    /// Number of employees assigned to a project in this run.
    pub fn team_size(&self, project_id: i64) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.project_id == project_id)
            .count()
    }
}

/// Builder for seeding a complete employee-management dataset.
///
/// # Example
///
/// ```rust,ignore
/// let result = ScenarioBuilder::new()
///     .with_employees(25)
///     .with_projects(8)
///     .with_team_size(3..=8)
///     .build(&store, &mut rng)
///     .await?;
/// ```
///
/// Records are generated and seeded phase by phase (departments, employees,
/// projects, assignments) so every id is persisted before any later record
/// references it. Within a phase each record is inserted as soon as its id
/// is allocated.
pub struct ScenarioBuilder {
    departments: Vec<DepartmentSpec>,

    employee_count: usize,
    employee_config: EmployeeGenConfig,

    project_count: usize,
    project_config: ProjectGenConfig,

    assignment_config: AssignmentGenConfig,

    batch_size: usize,
    base_time: Option<OffsetDateTime>,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Creates a new scenario builder with default settings.
    pub fn new() -> Self {
        Self {
            departments: default_departments(),
            employee_count: 25,
            employee_config: EmployeeGenConfig::default(),
            project_count: 8,
            project_config: ProjectGenConfig::default(),
            assignment_config: AssignmentGenConfig::default(),
            batch_size: 50,
            base_time: None,
        }
    }

    /// Creates a builder from a [`SeedConfig`].
    pub fn from_config(config: SeedConfig) -> Self {
        let (min, max) = config.team_size;
        Self::new()
            .with_departments(config.departments)
            .with_employees(config.employee_count)
            .with_projects(config.project_count)
            .with_team_size(min..=max)
            .with_batch_size(config.batch_size)
    }

    /// Sets the department catalog.
    pub fn with_departments(mut self, departments: Vec<DepartmentSpec>) -> Self {
        self.departments = departments;
        self
    }

    /// Sets the number of employees to generate.
    pub fn with_employees(mut self, count: usize) -> Self {
        self.employee_count = count;
        self
    }

    /// Sets the employee generation configuration.
    pub fn with_employee_config(mut self, config: EmployeeGenConfig) -> Self {
        self.employee_config = config;
        self
    }

    /// Sets the number of projects to generate.
    pub fn with_projects(mut self, count: usize) -> Self {
        self.project_count = count;
        self
    }

    /// Sets the project generation configuration.
    pub fn with_project_config(mut self, config: ProjectGenConfig) -> Self {
        self.project_config = config;
        self
    }

    /// Sets the range of team sizes per project.
    pub fn with_team_size(mut self, range: RangeInclusive<usize>) -> Self {
        self.assignment_config.team_size = (*range.start(), *range.end());
        self
    }

    /// Sets the assignment generation configuration.
    pub fn with_assignment_config(mut self, config: AssignmentGenConfig) -> Self {
        self.assignment_config = config;
        self
    }

    /// Sets how often the seeder logs progress.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Pins the timestamp all generated dates are relative to.
    pub fn with_base_time(mut self, base_time: OffsetDateTime) -> Self {
        self.base_time = Some(base_time);
        self
    }

    /// Generates the scenario and seeds it into the store.
    ///
    /// Fails on the first store error; records and sequence values already
    /// written by this run are left in place.
    pub async fn build<S>(self, store: &S, rng: &mut impl Rng) -> Result<ScenarioResult, SeedError>
    where
        S: DocumentStore + Clone,
    {
        let base_time = self.base_time.unwrap_or_else(OffsetDateTime::now_utc);
        let seeder = Seeder::new(store.clone()).with_batch_size(self.batch_size);
        let sequences = SequenceGenerator::new(store.clone());
        let mut result = ScenarioResult::default();

        // Departments continue after whatever ids are already stored
        let first_parent_id = store
            .max_i64(Collection::DepartmentParent, "departmentId")
            .await?
            .map_or(1, |id| id + 1);
        let first_child_id = store
            .max_i64(Collection::DepartmentChild, "childDeptId")
            .await?
            .map_or(1, |id| id + 1);

        let departments = DepartmentGenerator::with_catalog(self.departments.clone()).generate(
            first_parent_id,
            first_child_id,
            base_time,
        );
        seeder.seed_parent_departments(&departments.parents).await?;
        seeder.seed_child_departments(&departments.children).await?;
        let dept_ids = departments.child_ids();

        // Employees. Each id is persisted before the next is taken, so a
        // failed insert costs at most one sequence value.
        let employee_gen = EmployeeGenerator::with_config(self.employee_config.clone());
        let (key, floor) = EMPLOYEE;
        info!("Seeding {} employees...", self.employee_count);
        for i in 0..self.employee_count {
            let id = sequences.next_value(key, floor).await?;
            let employee = employee_gen.generate(id, &dept_ids, base_time, rng);
            seeder.seed_employee(&employee).await?;
            result.employees.push(employee);
            seeder.report_progress("employees", i + 1, self.employee_count);
        }
        info!("Seeded {} employees", result.employees.len());
        let employee_ids: Vec<i64> = result.employees.iter().map(|e| e.employee_id).collect();

        // Projects
        let project_gen = ProjectGenerator::with_config(self.project_config.clone());
        let (key, floor) = PROJECT;
        info!("Seeding {} projects...", self.project_count);
        for i in 0..self.project_count {
            let id = sequences.next_value(key, floor).await?;
            let project = project_gen.generate(id, &employee_ids, base_time, rng);
            seeder.seed_project(&project).await?;
            result.projects.push(project);
            seeder.report_progress("projects", i + 1, self.project_count);
        }
        info!("Seeded {} projects", result.projects.len());

        // Assignments
        info!("Staffing {} projects...", result.projects.len());
        let assignment_gen = AssignmentGenerator::with_config(self.assignment_config.clone());
        let (key, floor) = PROJECT_EMPLOYEE;
        for project in &result.projects {
            for emp_id in assignment_gen.choose_team(&employee_ids, rng) {
                let id = sequences.next_value(key, floor).await?;
                let assignment =
                    assignment_gen.generate(id, project.project_id, emp_id, base_time, rng);
                seeder.seed_assignment(&assignment).await?;
                result.assignments.push(assignment);
            }
        }
        info!("Seeded {} project assignments", result.assignments.len());

        result.parents = departments.parents;
        result.children = departments.children;
        Ok(result)
    }
}

/// Preset scenarios for common needs.
impl ScenarioBuilder {
    /// The standard seeding run.
    ///
    /// - 5 departments with 12 teams between them
    /// - 25 employees
    /// - 8 projects, each staffed by 3-8 employees
    pub fn standard() -> Self {
        Self::from_config(SeedConfig::default())
    }

    /// A small dataset for quick checks.
    ///
    /// - 2 departments with 2 teams each
    /// - 6 employees
    /// - 2 projects, each staffed by 2-4 employees
    pub fn small() -> Self {
        Self::new()
            .with_departments(vec![
                DepartmentSpec::new("Engineering", &["Backend", "QA"]),
                DepartmentSpec::new("Sales", &["Direct Sales", "Partner Sales"]),
            ])
            .with_employees(6)
            .with_projects(2)
            .with_team_size(2..=4)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use async_trait::async_trait;
    use rand::SeedableRng;
    use workforce::bson::Document;
    use workforce::models::Counter;
    use workforce::{InMemoryStore, StoreError};

    use super::*;

    #[tokio::test]
    async fn test_build_small() {
        let store = InMemoryStore::new();
        let mut rng = rand::rngs::StdRng::seed_from_u64(12345);

        let result = ScenarioBuilder::small()
            .build(&store, &mut rng)
            .await
            .unwrap();

        assert_eq!(result.parents.len(), 2);
        assert_eq!(result.children.len(), 4);
        assert_eq!(result.employees.len(), 6);
        assert_eq!(result.projects.len(), 2);
        for project in &result.projects {
            assert!((2..=4).contains(&result.team_size(project.project_id)));
        }
        assert_eq!(
            store.count_documents(Collection::ProjectEmployee).await.unwrap(),
            result.assignments.len() as u64
        );
    }

    #[tokio::test]
    async fn test_ids_start_at_sequence_floors() {
        let store = InMemoryStore::new();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);

        let result = ScenarioBuilder::small()
            .build(&store, &mut rng)
            .await
            .unwrap();

        let employee_ids: Vec<i64> = result.employees.iter().map(|e| e.employee_id).collect();
        assert_eq!(employee_ids, (1000..1006).collect::<Vec<_>>());
        assert_eq!(result.projects[0].project_id, 5000);
        assert_eq!(result.assignments[0].emp_project_id, 7000);

        let assignment_ids: HashSet<i64> =
            result.assignments.iter().map(|a| a.emp_project_id).collect();
        assert_eq!(assignment_ids.len(), result.assignments.len());
    }

    #[tokio::test]
    async fn test_second_run_continues_ids() {
        let store = InMemoryStore::new();
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);

        ScenarioBuilder::small()
            .build(&store, &mut rng)
            .await
            .unwrap();
        let second = ScenarioBuilder::small()
            .build(&store, &mut rng)
            .await
            .unwrap();

        assert_eq!(second.parents[0].department_id, 3);
        assert_eq!(second.children[0].child_dept_id, 5);
        assert_eq!(second.employees[0].employee_id, 1006);
        assert_eq!(second.projects[0].project_id, 5002);
        assert_eq!(store.count_documents(Collection::Employee).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_no_employees_means_no_assignments() {
        let store = InMemoryStore::new();
        let mut rng = rand::thread_rng();

        let result = ScenarioBuilder::small()
            .with_employees(0)
            .build(&store, &mut rng)
            .await
            .unwrap();

        assert_eq!(result.projects.len(), 2);
        assert!(result.projects.iter().all(|p| p.lead_emp_id.is_none()));
        assert!(result.assignments.is_empty());
    }

    #[tokio::test]
    async fn test_base_time_is_applied() {
        let store = InMemoryStore::new();
        let mut rng = rand::thread_rng();
        let base_time = OffsetDateTime::UNIX_EPOCH + time::Duration::days(20_000);

        let result = ScenarioBuilder::small()
            .with_base_time(base_time)
            .build(&store, &mut rng)
            .await
            .unwrap();

        assert!(result.employees.iter().all(|e| e.created_at == base_time));
        assert!(result.projects.iter().all(|p| p.start_date <= base_time));
    }

    #[test]
    fn test_preset_standard() {
        let builder = ScenarioBuilder::standard();
        assert_eq!(builder.departments.len(), 5);
        assert_eq!(builder.employee_count, 25);
        assert_eq!(builder.project_count, 8);
        assert_eq!(builder.assignment_config.team_size, (3, 8));
    }

    /// Store that rejects every insert into one collection.
    #[derive(Clone)]
    struct RejectingStore {
        inner: InMemoryStore,
        rejects: Collection,
    }

    #[async_trait]
    impl DocumentStore for RejectingStore {
        async fn insert_one(&self, c: Collection, d: Document) -> Result<(), StoreError> {
            if c == self.rejects {
                return Err(StoreError::Unavailable(format!("{c} is read-only")));
            }
            self.inner.insert_one(c, d).await
        }
        async fn count_documents(&self, c: Collection) -> Result<u64, StoreError> {
            self.inner.count_documents(c).await
        }
        async fn max_i64(&self, c: Collection, f: &str) -> Result<Option<i64>, StoreError> {
            self.inner.max_i64(c, f).await
        }
        async fn distinct_i64(&self, c: Collection, f: &str) -> Result<Vec<i64>, StoreError> {
            self.inner.distinct_i64(c, f).await
        }
        async fn find_counter(&self, key: &str) -> Result<Option<Counter>, StoreError> {
            self.inner.find_counter(key).await
        }
        async fn insert_counter(&self, counter: &Counter) -> Result<bool, StoreError> {
            self.inner.insert_counter(counter).await
        }
        async fn increment_counter(&self, key: &str, by: i64) -> Result<Option<i64>, StoreError> {
            self.inner.increment_counter(key, by).await
        }
    }

    #[tokio::test]
    async fn test_failed_employee_insert_aborts_run() {
        let inner = InMemoryStore::new();
        let store = RejectingStore {
            inner: inner.clone(),
            rejects: Collection::Employee,
        };
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        let result = ScenarioBuilder::standard().build(&store, &mut rng).await;

        assert!(matches!(result, Err(SeedError::Store(StoreError::Unavailable(_)))));
        assert_eq!(inner.documents(Collection::DepartmentParent).len(), 5);
        assert_eq!(inner.documents(Collection::DepartmentChild).len(), 12);
        assert!(inner.documents(Collection::Employee).is_empty());
        assert!(inner.documents(Collection::Project).is_empty());
        assert!(inner.documents(Collection::ProjectEmployee).is_empty());

        // Only the id of the rejected record was consumed
        let counter = inner.find_counter("employee").await.unwrap().unwrap();
        assert_eq!(counter.value, 1000);
        assert!(inner.find_counter("project").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_project_insert_keeps_earlier_phases() {
        let inner = InMemoryStore::new();
        let store = RejectingStore {
            inner: inner.clone(),
            rejects: Collection::Project,
        };
        let mut rng = rand::rngs::StdRng::seed_from_u64(8);

        let result = ScenarioBuilder::small().build(&store, &mut rng).await;

        assert!(matches!(result, Err(SeedError::Store(_))));
        assert_eq!(inner.documents(Collection::Employee).len(), 6);
        assert!(inner.documents(Collection::Project).is_empty());
        assert!(inner.documents(Collection::ProjectEmployee).is_empty());

        let counter = inner.find_counter("project").await.unwrap().unwrap();
        assert_eq!(counter.value, 5000);
        assert!(inner.find_counter("projectEmployee").await.unwrap().is_none());

        // A later run picks up right after the lost id
        let retry = ScenarioBuilder::small()
            .build(&inner, &mut rng)
            .await
            .unwrap();
        assert_eq!(retry.projects[0].project_id, 5001);
    }
}

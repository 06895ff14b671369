//! Employee generation.

use fake::{
    Fake,
    faker::{
        lorem::en::Paragraph,
        name::en::{FirstName, LastName},
        phone_number::en::PhoneNumber,
    },
};
use rand::{Rng, seq::SliceRandom};
use time::OffsetDateTime;
use workforce::models::Employee;

/// Configuration for employee generation.
#[derive(Debug, Clone)]
pub struct EmployeeGenConfig {
    /// Job titles, picked uniformly.
    pub roles: Vec<String>,
    /// Office locations, picked uniformly.
    pub locations: Vec<String>,
    /// Skill pool each employee draws from.
    pub skills: Vec<String>,
    /// Distinct skills per employee.
    pub skills_per_employee: usize,
    /// Domain for generated email addresses.
    pub email_domain: String,
    /// Stored verbatim on every employee. Synthetic fixture data only.
    pub fixture_password: String,
    /// Upper bound on the length of the `about` text.
    pub about_max_chars: usize,
}

impl Default for EmployeeGenConfig {
    fn default() -> Self {
        Self {
            roles: to_strings(&[
                "Developer",
                "Senior Developer",
                "Manager",
                "Designer",
                "Product Manager",
                "Sales Rep",
            ]),
            locations: to_strings(&["New York", "London", "Remote", "Bangalore", "San Francisco"]),
            skills: to_strings(&[
                "Python", "Angular", "React", "Node.js", "MongoDB", "SQL", "AWS", "Design",
            ]),
            skills_per_employee: 3,
            email_domain: "example.com".to_string(),
            fixture_password: "password123".to_string(),
            about_max_chars: 200,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Generates realistic employee data for testing.
pub struct EmployeeGenerator {
    config: EmployeeGenConfig,
}

impl EmployeeGenerator {
    /// Creates a new employee generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: EmployeeGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: EmployeeGenConfig) -> Self {
        Self { config }
    }

    /// Generates one employee with an already-allocated id.
    ///
    /// The department is picked uniformly from `dept_ids`; with no departments
    /// the employee is left unassigned.
    pub fn generate(
        &self,
        employee_id: i64,
        dept_ids: &[i64],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Employee {
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);
        let name = format!("{first_name} {last_name}");
        let email = self.generate_email(&first_name, &last_name);

        let contact_no: String = PhoneNumber().fake_with_rng(rng);
        let about: String = Paragraph(3..6).fake_with_rng(rng);

        let skills = self
            .config
            .skills
            .choose_multiple(rng, self.config.skills_per_employee)
            .cloned()
            .collect();

        Employee {
            employee_id,
            avatar_url: avatar_url(&name),
            name,
            email,
            dept_id: dept_ids.choose(rng).copied(),
            role: pick(&self.config.roles, rng),
            contact_no,
            password: self.config.fixture_password.clone(),
            is_active: true,
            location: pick(&self.config.locations, rng),
            about: truncate_text(&about, self.config.about_max_chars),
            skills,
            created_at: base_time,
        }
    }

    /// Builds `first.last@domain` from the name parts.
    fn generate_email(&self, first_name: &str, last_name: &str) -> String {
        let normalize = |part: &str| -> String {
            part.to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect()
        };

        format!(
            "{}.{}@{}",
            normalize(first_name),
            normalize(last_name),
            self.config.email_domain
        )
    }
}

impl Default for EmployeeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(values: &[String], rng: &mut impl Rng) -> String {
    values.choose(rng).cloned().unwrap_or_default()
}

/// Avatar image seeded with the employee's name.
fn avatar_url(name: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
        name.replace(' ', "%20")
    )
}

/// Shortens `text` to at most `max_chars` characters, cutting at a word
/// boundary and ending with a period.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let head: String = text.chars().take(max_chars - 1).collect();
    let cut = match head.rfind(char::is_whitespace) {
        Some(idx) => &head[..idx],
        None => head.as_str(),
    };

    format!("{}.", cut.trim_end_matches(|c: char| !c.is_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_generate_employee() {
        let employee_gen = EmployeeGenerator::new();
        let mut rng = rand::thread_rng();
        let employee = employee_gen.generate(1000, &[1, 2, 3], OffsetDateTime::now_utc(), &mut rng);

        assert_eq!(employee.employee_id, 1000);
        assert!(employee.name.contains(' '));
        assert!(employee.email.ends_with("@example.com"));
        assert!(matches!(employee.dept_id, Some(1..=3)));
        assert!(employee.is_active);
        assert!(employee.about.chars().count() <= 200);
        assert!(
            employee
                .avatar_url
                .starts_with("https://api.dicebear.com/7.x/avataaars/svg?seed=")
        );
    }

    #[test]
    fn test_skills_are_distinct() {
        let employee_gen = EmployeeGenerator::new();
        let mut rng = rand::rngs::StdRng::seed_from_u64(12345);

        for id in 0..20 {
            let employee = employee_gen.generate(id, &[1], OffsetDateTime::now_utc(), &mut rng);
            let mut skills = employee.skills.clone();
            skills.sort();
            skills.dedup();
            assert_eq!(skills.len(), 3);
        }
    }

    #[test]
    fn test_no_departments_leaves_employee_unassigned() {
        let employee_gen = EmployeeGenerator::new();
        let mut rng = rand::thread_rng();
        let employee = employee_gen.generate(1000, &[], OffsetDateTime::now_utc(), &mut rng);
        assert_eq!(employee.dept_id, None);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let employee_gen = EmployeeGenerator::new();
        let now = OffsetDateTime::now_utc();
        let mut rng_a = rand::rngs::StdRng::seed_from_u64(7);
        let mut rng_b = rand::rngs::StdRng::seed_from_u64(7);

        assert_eq!(
            employee_gen.generate(1000, &[1, 2], now, &mut rng_a),
            employee_gen.generate(1000, &[1, 2], now, &mut rng_b)
        );
    }

    #[test]
    fn test_email_from_name_parts() {
        let employee_gen = EmployeeGenerator::new();
        assert_eq!(
            employee_gen.generate_email("Mary-Jane", "O'Neil"),
            "maryjane.oneil@example.com"
        );
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short text.", 200), "short text.");
        assert_eq!(truncate_text("alpha beta gamma delta", 12), "alpha beta.");
        assert!(truncate_text(&"word ".repeat(100), 200).chars().count() <= 200);
        assert_eq!(truncate_text("anything", 0), "");
    }
}

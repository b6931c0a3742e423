#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the resume-check binary.
#[macro_export]
macro_rules! resume_check {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("resume-check"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic resume-check config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".resume-check.toml", content);
    }

    /// Writes a resume fixture and returns its path.
    pub fn create_resume(&self, name: &str, content: &str) -> PathBuf {
        self.create_file(name, content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A resume that passes every check and scores 100.
pub const SOLID_RESUME: &str = "\
Jane Doe
jane.doe@example.com | +1 (555) 123-4567

Summary
Senior software engineer with a decade of shipping reliable distributed
systems, focused on measurable outcomes, mentoring, and clear technical
communication across product teams.

Experience
Acme Corp, Senior Engineer, 2018 - 2024
- Managed a team of 5 engineers and delivered the platform rewrite on schedule
- Developed data pipelines that reduced batch processing time by 40%
- Designed and implemented monitoring dashboards adopted by 12 product teams
- Led the cloud migration, achieving $200000 in annual savings over 2 years
- Built internal deployment tools and optimized release cadence to twice weekly
- Created onboarding documentation that increased new hire velocity by 25%
- Achieved SOC 2 certification while collaborating across 3 departments
- Executed the quarterly roadmap and improved code review throughput by 30%
- Increased test coverage from 60% to 95% across critical services
- Improved uptime to 99.9% by introducing automated failover drills
- Reduced infrastructure spend by 18% through careful capacity planning
- Implemented access controls covering 40+ internal services

Globex Inc, Engineer, 2014 - 2018
- Delivered customer-facing features in close partnership with design and support
- Optimized query layers, cutting page load times by 35%

Education
- B.Sc. Computer Science, State University, graduated 2014

Skills
- Rust, Python, SQL, Kubernetes, PostgreSQL, distributed systems, observability
- Leadership, mentoring, incident response, capacity planning
";

/// Has contact info and the essential sections, but is brief enough to
/// collect warnings. No critical findings.
pub const BRIEF_RESUME: &str = "\
Jane Doe
jane.doe@example.com
Summary
Engineer focused on reliability.
Experience
Acme Corp, Engineer, 2018 - 2024
- Managed releases and developed internal tooling, improving uptime by 15%
Education
- B.Sc. Computer Science, 2018
Skills
- Rust, SQL
";

/// Long enough to pass the short-text guard, but missing contact details
/// and the essential sections. Collects critical findings.
pub const WEAK_RESUME: &str = "\
This candidate worked at several companies doing various tasks and helped out \
wherever possible, hopefully bringing value to each role along the way through \
general contributions and assorted day to day responsibilities across teams.
";

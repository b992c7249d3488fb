//! In-memory mock data the board starts with.

use super::project::{Project, ProjectKind};
use super::task::{DateSpan, Priority, Status, Task};

/// People the board knows about, shown as avatars in the top bar.
pub const USERS: &[&str] = &["Alex", "Sarah", "Mike", "User"];

/// Generate the sample projects and tasks.
pub fn sample_board() -> (Vec<Project>, Vec<Task>) {
    let launch = Project::new("Product Launch", ProjectKind::Project);
    let marketing = Project::new("Marketing", ProjectKind::Project);
    let roadmap = Project::new("Q4 Roadmap", ProjectKind::Doc);
    let notes = Project::new("Meeting Notes", ProjectKind::Doc);

    let task = |wbs: &str,
                title: &str,
                status: Status,
                priority: Priority,
                assignee: &str,
                tag: &str,
                due: &str,
                project: &Project,
                description: &str| {
        let mut t = Task::new(title, due, project.id);
        t.wbs = wbs.to_string();
        t.status = status;
        t.priority = priority;
        t.assignee = assignee.to_string();
        t.tags = vec![tag.to_string()];
        t.description = description.to_string();
        t
    };

    // ── Product Launch ──────────────────────────────────────────
    let mut phase = task("1.0", "Product Launch Phase", Status::InProgress, Priority::High,
        "Alex", "Core", "Oct 30", &launch, "Main tracking item.");
    phase.start_date = Some("Oct 6".into());
    phase.planned = Some(DateSpan::new("Oct 6", "Oct 27"));

    let mut design = task("1.1", "Design System V2", Status::Done, Priority::High,
        "Alex", "Design", "Oct 24", &launch, "Update palette.");
    design.start_date = Some("Oct 13".into());
    design.planned = Some(DateSpan::new("Oct 9", "Oct 20"));

    let mut interviews = task("1.2", "User Interview Analysis", Status::Todo, Priority::Low,
        "Alex", "Research", "Oct 28", &launch, "Collate feedback.");
    interviews.start_date = Some("Oct 20".into());

    let survey = task("1.2.1", "Compile Survey Data", Status::Todo, Priority::Low,
        "Mike", "Research", "Oct 27", &launch, "Raw data processing.");

    // ── Marketing ───────────────────────────────────────────────
    let mut campaign = task("2.0", "Marketing Campaign", Status::InProgress, Priority::Medium,
        "Sarah", "Marketing", "Oct 31", &marketing, "Q4 push.");
    campaign.start_date = Some("Oct 15".into());
    campaign.planned = Some(DateSpan::new("Oct 13", "Oct 31"));

    let mut strategy = task("2.1", "Q4 Strategy Draft", Status::InProgress, Priority::Medium,
        "Sarah", "Marketing", "Oct 26", &marketing, "Initial draft.");
    strategy.start_date = Some("Oct 19".into());

    let landing = task("2.2", "Landing Page Update", Status::Todo, Priority::Medium,
        "Sarah", "Dev", "Oct 29", &marketing, "New testimonials.");

    let mut finance = task("3.0", "Finance Review", Status::Review, Priority::High,
        "User", "Finance", "Oct 30", &launch, "Q3 Report.");
    finance.start_date = Some("Oct 22".into());

    let projects = vec![launch, marketing, roadmap, notes];
    let tasks = vec![phase, design, interviews, survey, campaign, strategy, landing, finance];
    (projects, tasks)
}

//! # Team Task Tracker
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Creates: InMemoryTaskRepository (adapter)               │
//! │    ├── Creates: InMemoryMemberRepository (adapter)             │
//! │    └── Runs: the use cases against them                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The demo walks a task through its whole lifecycle, including a
//! completion that is blocked by an open dependency.

use tracker_adapter::repository::in_memory::{
    InMemoryMemberRepository, InMemoryTaskRepository, InMemoryTeamRepository,
};
use tracker_domain::repository::team_repository::TeamRepository;
use tracker_domain::{Team, TeamId, UserId};
use tracker_usecase::dto::{AddDependencyDto, AssignTaskDto, CreateTaskDto, RegisterMemberDto};
use tracker_usecase::{
    AddDependencyUseCase, AssignTaskUseCase, CompleteTaskUseCase, CreateTaskUseCase,
    RegisterMemberUseCase, StartTaskUseCase,
};

use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Team Task Tracker");
    info!("Hexagonal Architecture + Clean Architecture + DDD");
    info!("");

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    // Adapters (could be swapped for SQL, a file store, etc.). The
    // in-memory handles are cheap clones over one shared map.
    let task_repo = InMemoryTaskRepository::new();
    let member_repo = InMemoryMemberRepository::new();
    let mut team_repo = InMemoryTeamRepository::new();

    let mut register_member = RegisterMemberUseCase::new(member_repo.clone());
    let mut create_task = CreateTaskUseCase::new(task_repo.clone());
    let mut assign_task = AssignTaskUseCase::new(task_repo.clone(), member_repo);
    let mut start_task = StartTaskUseCase::new(task_repo.clone());
    let mut add_dependency = AddDependencyUseCase::new(task_repo.clone());
    let mut complete_task = CompleteTaskUseCase::new(task_repo);

    // ========================================
    // Register Members and a Team
    // ========================================

    info!("Registering members...");

    let ada = register_member
        .execute(RegisterMemberDto {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .expect("register member");
    let grace = register_member
        .execute(RegisterMemberDto {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        })
        .expect("register member");

    let mut team = Team::new(TeamId::new("team-platform"), "Platform");
    team.add_member(UserId::new(ada.member_id.clone()));
    team.add_member(UserId::new(grace.member_id.clone()));
    team_repo.save(&team).expect("save team");

    info!("  registered {} members in team '{}'", team.member_count(), team.name());

    // ========================================
    // Create Tasks
    // ========================================

    info!("");
    info!("Creating tasks...");

    let schema = create_task
        .execute(CreateTaskDto {
            title: "Design the schema".to_string(),
            description: Some("Tables for tasks, members, teams".to_string()),
            priority: Some("high".to_string()),
        })
        .expect("create task");

    let endpoint = create_task
        .execute(CreateTaskDto {
            title: "Build the endpoint".to_string(),
            description: None,
            priority: None,
        })
        .expect("create task");

    info!("  {} [{}] {}", schema.task_id, schema.priority, schema.title);
    info!("  {} [{}] {}", endpoint.task_id, endpoint.priority, endpoint.title);

    // ========================================
    // Assign and Wire the Dependency
    // ========================================

    info!("");
    info!("Assigning and linking...");

    assign_task
        .execute(AssignTaskDto {
            task_id: schema.task_id.clone(),
            member_id: ada.member_id.clone(),
        })
        .expect("assign task");

    assign_task
        .execute(AssignTaskDto {
            task_id: endpoint.task_id.clone(),
            member_id: grace.member_id.clone(),
        })
        .expect("assign task");

    // The endpoint can't ship before the schema exists
    add_dependency
        .execute(AddDependencyDto {
            task_id: endpoint.task_id.clone(),
            depends_on: schema.task_id.clone(),
        })
        .expect("add dependency");

    info!("  '{}' now depends on '{}'", endpoint.title, schema.title);

    // ========================================
    // Work Through the Lifecycle
    // ========================================

    info!("");
    info!("Working...");

    start_task.execute(&schema.task_id).expect("start task");

    // Blocked: the schema is still open
    match complete_task.execute(&endpoint.task_id) {
        Err(err) => warn!("  completion blocked as expected: {}", err),
        Ok(response) => {
            error!("  '{}' completed despite an open dependency", response.title);
            std::process::exit(1);
        }
    }

    let done = complete_task.execute(&schema.task_id).expect("complete task");
    info!("  '{}' is {}", done.title, done.status);

    let done = complete_task.execute(&endpoint.task_id).expect("complete task");
    info!("  '{}' is {}", done.title, done.status);

    info!("");
    info!("Tracker demo complete");
}

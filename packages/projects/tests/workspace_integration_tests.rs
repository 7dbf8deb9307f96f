// ABOUTME: End-to-end workspace scenarios against the JSON file backend
// ABOUTME: Seeds the demo data, walks both roles through their flows and reopens from disk

mod common;

use common::{date, file_workspace, open_workspace, DEMO_PASSWORD};
use pretty_assertions::assert_eq;
use stratos_projects::{
    ProjectCreateInput, ProjectStatus, Role, Sentiment, SignupInput, TaskStatus, WorkspaceError,
};

#[tokio::test]
async fn test_manager_and_member_flow_survives_reopen() {
    let (temp_dir, store, mut ws) = file_workspace().await;
    assert!(ws.seed_demo(DEMO_PASSWORD).await.unwrap());

    // Manager creates a project staffed by Mike and Emma
    let sarah = ws.log_in("sarah@company.com", DEMO_PASSWORD).await.unwrap();
    let launch = ws
        .create_project(
            sarah.id,
            ProjectCreateInput {
                name: "Client Portal Launch".to_string(),
                description: "Ship the self-service portal".to_string(),
                status: Some(ProjectStatus::InProgress),
                due_date: date(2025, 8, 1),
                team_members: vec![2, 4],
            },
        )
        .await
        .unwrap();
    assert_eq!(launch.id, 3);
    assert_eq!(ws.visible_projects().len(), 3);

    // Mike analyzes a note and turns the first action item into a task
    ws.log_out().await.unwrap();
    let mike = ws.log_in("mike@company.com", DEMO_PASSWORD).await.unwrap();
    let visible: Vec<u32> = ws.visible_projects().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![1, 3]);

    let analysis = ws
        .analyze("The technical integration has a performance problem")
        .await
        .unwrap();
    assert_eq!(analysis.sentiment, Sentiment::Negative);
    assert!(!analysis.action_items.is_empty());

    let task = ws
        .convert_action_item(mike.id, &analysis.action_items[0], launch.id, date(2025, 7, 1))
        .await
        .unwrap();
    assert_eq!(task.id, 4);
    assert_eq!(task.due_date, date(2025, 7, 8));
    ws.update_task_status(task.id, TaskStatus::InProgress)
        .await
        .unwrap();

    // Everything is readable from a fresh process
    let reopened = open_workspace(store.clone()).await;
    assert_eq!(reopened.current_user().map(|u| u.id), Some(mike.id));
    assert_eq!(reopened.projects(), ws.projects());
    assert_eq!(reopened.tasks(), ws.tasks());
    assert_eq!(reopened.history().len(), 1);

    for file in ["currentUser", "users", "projects", "tasks", "analysisHistory", "credentials"] {
        let path = temp_dir.path().join(format!("{}.json", file));
        assert!(path.exists(), "missing {}", path.display());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains(DEMO_PASSWORD));
    }
}

#[tokio::test]
async fn test_manager_delete_cascades_and_member_view_shrinks() {
    let (_temp_dir, _store, mut ws) = file_workspace().await;
    ws.seed_demo(DEMO_PASSWORD).await.unwrap();

    let sarah = ws.log_in("sarah@company.com", DEMO_PASSWORD).await.unwrap();
    let removed = ws.delete_project(sarah.id, 1).await.unwrap();
    assert_eq!(removed, 2);

    let remaining: Vec<u32> = ws.tasks().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![3]);

    ws.log_out().await.unwrap();
    ws.log_in("alex@company.com", DEMO_PASSWORD).await.unwrap();
    let visible: Vec<u32> = ws.visible_tasks().iter().map(|t| t.id).collect();
    assert_eq!(visible, vec![3]);
}

#[tokio::test]
async fn test_dashboard_for_seeded_manager() {
    let (_temp_dir, _store, mut ws) = file_workspace().await;
    ws.seed_demo(DEMO_PASSWORD).await.unwrap();
    ws.log_in("sarah@company.com", DEMO_PASSWORD).await.unwrap();

    let stats = ws.dashboard(date(2025, 7, 20)).unwrap();

    assert_eq!(stats.total_projects, 2);
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(stats.active_tasks, 2);
    assert_eq!(stats.in_progress_tasks, 1);
    // Technology audit was due 2025-07-10
    assert_eq!(stats.overdue_tasks, 1);
    let loads: Vec<(String, usize, u8)> = stats
        .team_workload
        .iter()
        .map(|w| (w.name.clone(), w.open_tasks, w.load_percent))
        .collect();
    assert_eq!(
        loads,
        vec![
            ("Mike Chen".to_string(), 0, 0),
            ("Alex Rivera".to_string(), 1, 20),
            ("Emma Davis".to_string(), 1, 20),
        ]
    );
}

#[tokio::test]
async fn test_signed_out_workspace_sees_nothing() {
    let (_temp_dir, _store, mut ws) = file_workspace().await;
    ws.seed_demo(DEMO_PASSWORD).await.unwrap();

    assert!(ws.visible_projects().is_empty());
    assert!(ws.visible_tasks().is_empty());
    assert!(matches!(
        ws.dashboard(date(2025, 7, 1)),
        Err(WorkspaceError::NotSignedIn)
    ));
}

#[tokio::test]
async fn test_new_account_joins_seeded_workspace() {
    let (_temp_dir, _store, mut ws) = file_workspace().await;
    ws.seed_demo(DEMO_PASSWORD).await.unwrap();

    let user = ws
        .sign_up(SignupInput {
            name: "Priya Patel".to_string(),
            email: "priya@company.com".to_string(),
            password: "another-pass".to_string(),
            role: Role::TeamMember,
        })
        .await
        .unwrap();

    assert_eq!(user.id, 5);
    assert!(ws.visible_projects().is_empty());
    ws.log_out().await.unwrap();
    assert!(matches!(
        ws.log_in("priya@company.com", DEMO_PASSWORD).await,
        Err(WorkspaceError::InvalidCredentials)
    ));
}

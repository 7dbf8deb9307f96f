// ABOUTME: Tests for workspace account operations
// ABOUTME: Covers sign-up validation, duplicate emails, log-in and session persistence

#[cfg(test)]
mod tests {
    use crate::manager::{Workspace, WorkspaceError};
    use crate::test_utils::{fast_workspace, signup};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use stratos_core::Role;
    use stratos_storage::{CollectionKey, CollectionStore, MemoryStore};

    async fn empty_workspace() -> (Arc<dyn CollectionStore>, Workspace) {
        let store: Arc<dyn CollectionStore> = Arc::new(MemoryStore::new());
        let ws = fast_workspace(store.clone()).await;
        (store, ws)
    }

    #[tokio::test]
    async fn test_sign_up_seeds_preferences_and_signs_in() {
        let (_store, mut ws) = empty_workspace().await;

        let user = ws
            .sign_up(signup("Sarah", "sarah@company.com", Role::Manager))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(
            user.analysis_preferences.focus_areas,
            vec!["strategy", "ROI", "client relations"]
        );
        assert_eq!(user.analysis_preferences.sentiment_focus, "business impact");
        assert_eq!(ws.current_user(), Some(&user));
    }

    #[tokio::test]
    async fn test_team_member_gets_technical_preferences() {
        let (_store, mut ws) = empty_workspace().await;

        let user = ws
            .sign_up(signup("Mike", "mike@company.com", Role::TeamMember))
            .await
            .unwrap();

        assert_eq!(
            user.analysis_preferences.focus_areas,
            vec!["technical debt", "UX", "performance"]
        );
        assert_eq!(ws.team_members().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let (_store, mut ws) = empty_workspace().await;
        ws.sign_up(signup("Sarah", "sarah@company.com", Role::Manager))
            .await
            .unwrap();

        let result = ws
            .sign_up(signup("Impostor", "SARAH@company.com", Role::TeamMember))
            .await;

        assert!(matches!(result, Err(WorkspaceError::DuplicateEmail(_))));
        assert_eq!(ws.users().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_fields_are_validation_errors() {
        let (_store, mut ws) = empty_workspace().await;
        let mut input = signup("", "", Role::TeamMember);
        input.password = String::new();

        match ws.sign_up(input).await {
            Err(WorkspaceError::Validation(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "email", "password"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(ws.users().is_empty());
    }

    #[tokio::test]
    async fn test_log_in_with_wrong_password_or_unknown_email() {
        let (_store, mut ws) = empty_workspace().await;
        ws.sign_up(signup("Mike", "mike@company.com", Role::TeamMember))
            .await
            .unwrap();
        ws.log_out().await.unwrap();

        let wrong = ws.log_in("mike@company.com", "nope").await;
        let unknown = ws.log_in("ghost@company.com", "secret-pass").await;

        assert!(matches!(wrong, Err(WorkspaceError::InvalidCredentials)));
        assert!(matches!(unknown, Err(WorkspaceError::InvalidCredentials)));
        assert!(ws.current_user().is_none());
    }

    #[tokio::test]
    async fn test_session_survives_reopen_and_log_out_clears_it() {
        let (store, mut ws) = empty_workspace().await;
        let user = ws
            .sign_up(signup("Emma", "emma@company.com", Role::TeamMember))
            .await
            .unwrap();
        ws.log_out().await.unwrap();
        ws.log_in("emma@company.com", "secret-pass").await.unwrap();

        let reopened = fast_workspace(store.clone()).await;
        assert_eq!(reopened.current_user().map(|u| u.id), Some(user.id));

        ws.log_out().await.unwrap();
        assert!(ws.session().is_none());
        assert!(store
            .read(CollectionKey::CurrentUser)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_user_records_never_contain_password() {
        let (store, mut ws) = empty_workspace().await;
        ws.sign_up(signup("Alex", "alex@company.com", Role::TeamMember))
            .await
            .unwrap();

        let blob = store.read(CollectionKey::Users).await.unwrap().unwrap();

        assert!(!blob.contains("secret-pass"));
        assert!(!blob.contains("password"));
        assert!(blob.contains("\"analysisPreferences\""));
    }
}

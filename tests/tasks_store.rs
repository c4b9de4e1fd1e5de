#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};
    use taskdesk::db::{db::Db, tasks::Tasks};
    use taskdesk::libs::error::TaskError;
    use taskdesk::libs::task::{NewTask, TaskFilter, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("tasks.db")).unwrap();
            StoreTestContext { _temp_dir: temp_dir, db }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_defaults_completed_to_false(ctx: &mut StoreTestContext) {
        let tasks = Tasks::new(&ctx.db.conn);

        let task = tasks.insert(&NewTask::new("alice", "buy milk")).unwrap();
        assert!(!task.completed);
        assert_eq!(task.owner, "alice");
        assert_eq!(task.created_at, task.updated_at);

        let stored = tasks.get("alice", &task.id).unwrap();
        assert_eq!(stored, task);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_rejects_missing_fields(ctx: &mut StoreTestContext) {
        let tasks = Tasks::new(&ctx.db.conn);

        let no_description = NewTask {
            owner: Some("alice".to_string()),
            ..NewTask::default()
        };
        let err = tasks.insert(&no_description).unwrap_err();
        assert!(matches!(err, TaskError::MissingField("description")));
        assert!(err.is_validation());

        let no_owner = NewTask {
            description: Some("buy milk".to_string()),
            ..NewTask::default()
        };
        assert!(matches!(tasks.insert(&no_owner), Err(TaskError::MissingField("owner"))));

        assert!(tasks.fetch("alice", TaskFilter::All).unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_fetch_by_filter_keeps_insertion_order(ctx: &mut StoreTestContext) {
        let tasks = Tasks::new(&ctx.db.conn);
        let a = tasks.insert(&NewTask::new("alice", "a")).unwrap();
        let b = tasks.insert(&NewTask::new("alice", "b")).unwrap();
        let c = tasks.insert(&NewTask::new("alice", "c")).unwrap();
        tasks.update("alice", &b.id, &TaskPatch::completed(true)).unwrap();

        let all: Vec<String> = tasks.fetch("alice", TaskFilter::All).unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(all, vec![a.id.clone(), b.id.clone(), c.id.clone()]);

        let done = tasks.fetch("alice", TaskFilter::Completed).unwrap();
        assert_eq!(done.len(), 1);
        assert!(done.iter().all(|t| t.completed));
        assert_eq!(done[0].id, b.id);

        let open: Vec<String> =
            tasks.fetch("alice", TaskFilter::Incomplete).unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(open, vec![a.id, c.id]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_twice_restores_state(ctx: &mut StoreTestContext) {
        let tasks = Tasks::new(&ctx.db.conn);
        let task = tasks.insert(&NewTask::new("alice", "water plants")).unwrap();

        thread::sleep(Duration::from_millis(2));
        let once = tasks.update("alice", &task.id, &TaskPatch::completed(!task.completed)).unwrap();
        assert!(once.completed);
        assert_eq!(once.description, "water plants");
        assert!(once.updated_at > task.updated_at);
        assert_eq!(once.created_at, task.created_at);

        let twice = tasks.update("alice", &task.id, &TaskPatch::completed(!once.completed)).unwrap();
        assert_eq!(twice.completed, task.completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_rejects_blank_description(ctx: &mut StoreTestContext) {
        let tasks = Tasks::new(&ctx.db.conn);
        let task = tasks.insert(&NewTask::new("alice", "call bob")).unwrap();

        let err = tasks.update("alice", &task.id, &TaskPatch::description("  ")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(tasks.get("alice", &task.id).unwrap().description, "call bob");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_removes_exactly_one(ctx: &mut StoreTestContext) {
        let tasks = Tasks::new(&ctx.db.conn);
        let keep = tasks.insert(&NewTask::new("alice", "keep")).unwrap();
        let gone = tasks.insert(&NewTask::new("alice", "gone")).unwrap();

        tasks.delete("alice", &gone.id).unwrap();

        let remaining = tasks.fetch("alice", TaskFilter::All).unwrap();
        assert_eq!(remaining, vec![keep]);
        assert!(matches!(tasks.delete("alice", &gone.id), Err(TaskError::NotFound(_))));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_tasks_are_scoped_to_owner(ctx: &mut StoreTestContext) {
        let tasks = Tasks::new(&ctx.db.conn);
        let mine = tasks.insert(&NewTask::new("alice", "mine")).unwrap();
        tasks.insert(&NewTask::new("bob", "his")).unwrap();

        let listed = tasks.fetch("alice", TaskFilter::All).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, mine.id);

        assert!(matches!(tasks.get("bob", &mine.id), Err(TaskError::NotFound(_))));
        assert!(matches!(
            tasks.update("bob", &mine.id, &TaskPatch::completed(true)),
            Err(TaskError::NotFound(_))
        ));
        assert!(matches!(tasks.delete("bob", &mine.id), Err(TaskError::NotFound(_))));
        assert!(!tasks.get("alice", &mine.id).unwrap().completed);
    }
}

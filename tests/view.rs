#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use taskdesk::api::{FetchError, TaskApi};
    use taskdesk::libs::fetch::LoadingFlag;
    use taskdesk::libs::session::Session;
    use taskdesk::libs::task::{Task, TaskFilter, TaskPatch};
    use taskdesk::libs::view::{render, TaskListView};

    /// In-memory server that records every call it receives.
    #[derive(Default)]
    struct MockApi {
        tasks: Mutex<Vec<Task>>,
        calls: Mutex<Vec<String>>,
        fail_mutations: bool,
        loading: Mutex<Option<LoadingFlag>>,
        seen_loading: Mutex<Vec<bool>>,
    }

    impl MockApi {
        fn with_tasks(tasks: Vec<Task>) -> Self {
            Self {
                tasks: Mutex::new(tasks),
                ..Self::default()
            }
        }

        fn failing(tasks: Vec<Task>) -> Self {
            Self {
                fail_mutations: true,
                ..Self::with_tasks(tasks)
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn watch(&self, loading: LoadingFlag) {
            *self.loading.lock().unwrap() = Some(loading);
        }

        fn seen_loading(&self) -> Vec<bool> {
            self.seen_loading.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
            if let Some(loading) = self.loading.lock().unwrap().as_ref() {
                self.seen_loading.lock().unwrap().push(loading.get());
            }
        }

        fn reject(&self) -> Result<(), FetchError> {
            if self.fail_mutations {
                return Err(FetchError::Status {
                    status: 500,
                    message: "Internal server error".to_string(),
                });
            }
            Ok(())
        }
    }

    impl TaskApi for MockApi {
        async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, FetchError> {
            self.record(format!("list {}", filter));
            let tasks = self.tasks.lock().unwrap();
            Ok(tasks.iter().filter(|t| filter.matches(t)).cloned().collect())
        }

        async fn get(&self, id: &str) -> Result<Task, FetchError> {
            self.record(format!("get {}", id));
            let tasks = self.tasks.lock().unwrap();
            tasks.iter().find(|t| t.id == id).cloned().ok_or(FetchError::Status {
                status: 404,
                message: format!("Task '{}' not found", id),
            })
        }

        async fn create(&self, description: &str) -> Result<Task, FetchError> {
            self.record(format!("create {}", description));
            self.reject()?;
            let mut tasks = self.tasks.lock().unwrap();
            let created = task(&format!("t{}", tasks.len() + 1), description, false);
            tasks.push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, FetchError> {
            self.record(format!("update {} {:?}", id, patch.completed));
            self.reject()?;
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks.iter_mut().find(|t| t.id == id).ok_or(FetchError::Status {
                status: 404,
                message: format!("Task '{}' not found", id),
            })?;
            if let Some(completed) = patch.completed {
                task.completed = completed;
            }
            Ok(task.clone())
        }

        async fn delete(&self, id: &str) -> Result<(), FetchError> {
            self.record(format!("delete {}", id));
            self.reject()?;
            self.tasks.lock().unwrap().retain(|t| t.id != id);
            Ok(())
        }
    }

    fn task(id: &str, description: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            owner: "alice".to_string(),
            description: description.to_string(),
            completed,
            created_at: "2024-05-01T10:00:00.000000Z".to_string(),
            updated_at: "2024-05-01T10:00:00.000000Z".to_string(),
        }
    }

    fn sample() -> Vec<Task> {
        vec![task("a", "A", false), task("b", "B", true), task("c", "C", false)]
    }

    fn logged_in() -> Session {
        Session::new(Some("token".to_string()))
    }

    fn ids(view: &TaskListView<MockApi>) -> Vec<&str> {
        view.tasks().iter().map(|t| t.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_anonymous_view_sends_no_request() {
        let mut view = TaskListView::new(Session::anonymous(), MockApi::with_tasks(sample()));
        view.mount().await;

        assert!(view.fetch().api().calls().is_empty());
        assert!(view.tasks().is_empty());
        assert!(!view.is_loading());
        assert!(view.render().contains("No tasks found"));
    }

    #[tokio::test]
    async fn test_mount_loads_all_tasks_in_order() {
        let mut view = TaskListView::new(logged_in(), MockApi::with_tasks(sample()));
        view.mount().await;

        assert_eq!(view.fetch().api().calls(), vec!["list all"]);
        assert_eq!(ids(&view), vec!["a", "b", "c"]);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_set_filter_reloads_once_per_change() {
        let mut view = TaskListView::new(logged_in(), MockApi::with_tasks(sample()));
        view.mount().await;

        view.set_filter(TaskFilter::Incomplete).await;
        assert_eq!(view.filter(), TaskFilter::Incomplete);
        assert_eq!(ids(&view), vec!["a", "c"]);

        view.set_filter(TaskFilter::Incomplete).await;
        assert_eq!(view.fetch().api().calls(), vec!["list all", "list incomplete"]);
    }

    #[tokio::test]
    async fn test_toggle_inverts_and_reloads_current_filter() {
        let mut view = TaskListView::with_filter(logged_in(), MockApi::with_tasks(sample()), TaskFilter::Incomplete);
        view.mount().await;
        assert_eq!(ids(&view), vec!["a", "c"]);

        assert!(view.toggle("a", false).await);

        assert_eq!(
            view.fetch().api().calls(),
            vec!["list incomplete", "update a Some(true)", "list incomplete"]
        );
        assert_eq!(ids(&view), vec!["c"]);
    }

    #[tokio::test]
    async fn test_delete_reloads_and_drops_task() {
        let mut view = TaskListView::new(logged_in(), MockApi::with_tasks(sample()));
        view.mount().await;

        assert!(view.delete("b").await);

        assert_eq!(view.fetch().api().calls(), vec!["list all", "delete b", "list all"]);
        assert_eq!(ids(&view), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_list_and_skips_reload() {
        let mut view = TaskListView::new(logged_in(), MockApi::failing(sample()));
        view.mount().await;

        assert!(!view.toggle("a", false).await);
        assert!(!view.delete("b").await);

        assert_eq!(
            view.fetch().api().calls(),
            vec!["list all", "update a Some(true)", "delete b"]
        );
        assert_eq!(ids(&view), vec!["a", "b", "c"]);
        assert!(!view.find("a").unwrap().completed);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_loading_is_raised_while_requests_are_in_flight() {
        let mut view = TaskListView::new(logged_in(), MockApi::with_tasks(sample()));
        let loading = view.loading();
        view.fetch().api().watch(loading.clone());
        assert!(!loading.get());

        view.mount().await;
        view.toggle("a", false).await;
        view.delete("b").await;

        assert_eq!(view.fetch().api().seen_loading(), vec![true; 5]);
        assert!(!loading.get());
        assert!(!view.is_loading());
        assert!(!view.render().contains("Loading..."));
    }

    #[test]
    fn test_render_states() {
        let loading = render(&[], true);
        assert!(loading.starts_with("Your tasks (0)"));
        assert!(loading.contains("Loading..."));

        let empty = render(&[], false);
        assert!(empty.contains("No tasks found"));
        assert!(empty.contains("+ Add new task: taskdesk add <description>"));

        let tasks = sample();
        let table = render(&tasks, false);
        assert!(table.starts_with("Your tasks (3)"));
        assert!(table.contains("Task #1"));
        assert!(table.contains("Task #3"));
        assert!(table.contains("[x]"));
        assert!(table.contains("taskdesk delete b"));
        assert!(table.contains("taskdesk edit c <description>"));
        let a = table.find("Task #1").unwrap();
        let c = table.find("Task #3").unwrap();
        assert!(a < c);
    }
}

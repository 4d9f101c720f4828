//! Controller tests for TodoListManager over the in-memory mock API


use list_manager::TodoListManager;
use mock_api::MockTodoApi;
use todo_api::RemoteTodo;
use todo_core::{Config, Priority, StatusFilter};

#[tokio::test]
async fn load_replaces_the_list() {
    let mock = MockTodoApi::seeded(&[
        (1, "delectus aut autem", false),
        (2, "quis ut nam", true),
        (3, "fugiat veniam minus", false),
    ]);
    let manager = TodoListManager::new(mock.clone());

    assert!(manager.load().await);

    let todos = manager.todos().await;
    assert_eq!(todos.len(), 3);
    let ids: Vec<u64> = todos.iter().map(|todo| todo.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(todos[0].title, "delectus aut autem");
    assert!(todos[1].completed);
    assert!(!todos[2].completed);

    assert!(!manager.is_loading().await);
    assert!(manager.error().await.is_none());
    assert!(manager.snapshot().await.last_loaded.is_some());
    assert_eq!(mock.fetch_calls(), 1);
}

#[tokio::test]
async fn load_requests_at_most_the_page_limit() {
    let seed: Vec<RemoteTodo> = (1..=15)
        .map(|id| RemoteTodo {
            id,
            user_id: 1,
            title: format!("todo {id}"),
            completed: false,
        })
        .collect();
    let mock = MockTodoApi::with_todos(seed);
    let manager = TodoListManager::new(mock);

    assert!(manager.load().await);
    assert_eq!(manager.len().await, 10);
}

#[tokio::test]
async fn load_of_an_empty_collection_yields_an_empty_list() {
    let manager = TodoListManager::new(MockTodoApi::new());

    assert!(manager.load().await);
    assert!(manager.is_empty().await);
    assert!(manager.snapshot().await.last_loaded.is_some());
}

#[tokio::test]
async fn failed_load_keeps_the_previous_list_and_sets_the_error() {
    let mock = MockTodoApi::seeded(&[(1, "one", false), (2, "two", true)]);
    let manager = TodoListManager::new(mock.clone());

    assert!(manager.load().await);
    assert_eq!(manager.len().await, 2);

    mock.set_fail(true);
    assert!(!manager.load().await);
    assert_eq!(manager.len().await, 2, "prior list must stay untouched");
    assert_eq!(manager.error().await.as_deref(), Some("Failed to load todos"));
    assert!(!manager.is_loading().await);

    // a later successful load clears the error again
    mock.set_fail(false);
    assert!(manager.load().await);
    assert!(manager.error().await.is_none());
}

#[tokio::test]
async fn config_controls_page_limit_and_user_id() {
    let seed: Vec<RemoteTodo> = (1..=8)
        .map(|id| RemoteTodo {
            id,
            user_id: 1,
            title: format!("todo {id}"),
            completed: false,
        })
        .collect();
    let mock = MockTodoApi::with_todos(seed);

    let mut config = Config::default();
    config.page_limit = 5;
    config.user_id = 9;
    let manager = TodoListManager::with_config(mock.clone(), &config);

    assert!(manager.load().await);
    assert_eq!(manager.len().await, 5);

    manager.create("buy milk", Priority::Medium).await;
    let stored = mock.remote_todos();
    assert_eq!(stored.last().map(|todo| todo.user_id), Some(9));
}

#[tokio::test]
async fn create_appends_the_server_assigned_item() {
    let mock = MockTodoApi::seeded(&[(1, "one", false), (2, "two", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    let created = manager
        .create("buy milk", Priority::High)
        .await
        .expect("create should succeed");

    assert_eq!(created.id, 3, "server assigns the next id");
    assert_eq!(created.title, "buy milk");
    assert_eq!(created.priority, Priority::High);
    assert!(!created.completed);

    let todos = manager.todos().await;
    assert_eq!(todos.len(), 3);
    assert_eq!(todos.last().map(|todo| todo.id), Some(3));
    assert!(manager.error().await.is_none());
}

#[tokio::test]
async fn create_posts_the_trimmed_title() {
    let mock = MockTodoApi::new();
    let manager = TodoListManager::new(mock.clone());

    let created = manager
        .create("  buy milk  ", Priority::Low)
        .await
        .expect("create should succeed");

    assert_eq!(created.title, "buy milk");
    assert_eq!(
        mock.remote_todos().last().map(|todo| todo.title.clone()),
        Some("buy milk".to_string())
    );
}

#[tokio::test]
async fn create_with_a_blank_title_makes_no_network_call() {
    let mock = MockTodoApi::new();
    let manager = TodoListManager::new(mock.clone());

    assert!(manager.create("   \t ", Priority::Medium).await.is_none());
    assert_eq!(mock.create_calls(), 0);
    assert!(manager.is_empty().await);
    assert!(manager.error().await.is_none());
}

#[tokio::test]
async fn failed_create_sets_the_error_and_keeps_the_list() {
    let mock = MockTodoApi::seeded(&[(1, "one", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    mock.set_fail(true);
    assert!(manager.create("buy milk", Priority::High).await.is_none());
    assert_eq!(manager.len().await, 1);
    assert_eq!(manager.error().await.as_deref(), Some("Failed to add todo"));
}

#[tokio::test]
async fn the_last_error_wins() {
    let mock = MockTodoApi::new();
    let manager = TodoListManager::new(mock.clone());

    mock.set_fail(true);
    manager.load().await;
    assert_eq!(manager.error().await.as_deref(), Some("Failed to load todos"));

    manager.create("buy milk", Priority::Low).await;
    assert_eq!(manager.error().await.as_deref(), Some("Failed to add todo"));
}

#[tokio::test]
async fn toggling_twice_restores_the_flag() {
    let mock = MockTodoApi::seeded(&[(1, "one", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    assert!(manager.toggle(1).await);
    assert!(manager.todos().await[0].completed);

    assert!(manager.toggle(1).await);
    assert!(!manager.todos().await[0].completed);

    // each patch carries the completed flag and nothing else
    let patches = mock.patches();
    assert_eq!(patches.len(), 2);
    assert_eq!(patches[0].1.completed, Some(true));
    assert_eq!(patches[1].1.completed, Some(false));
    for (_, patch) in patches {
        assert!(patch.title.is_none());
        assert!(patch.priority.is_none());
    }
}

#[tokio::test]
async fn toggle_of_an_unknown_id_makes_no_network_call() {
    let mock = MockTodoApi::seeded(&[(1, "one", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    assert!(!manager.toggle(99).await);
    assert_eq!(mock.update_calls(), 0);
}

#[tokio::test]
async fn failed_toggle_is_silent_and_keeps_the_flag() {
    let mock = MockTodoApi::seeded(&[(1, "one", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    mock.set_fail(true);
    assert!(!manager.toggle(1).await);
    assert!(!manager.todos().await[0].completed);
    assert!(manager.error().await.is_none(), "toggle never surfaces errors");
}

#[tokio::test]
async fn remove_drops_the_item_locally_on_success() {
    let mock = MockTodoApi::seeded(&[(1, "one", false), (2, "two", true)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    assert!(manager.remove(1).await);
    let ids: Vec<u64> = manager.todos().await.iter().map(|todo| todo.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(mock.delete_calls(), 1);
}

#[tokio::test]
async fn remove_of_a_server_missing_id_leaves_the_list_unchanged() {
    let mock = MockTodoApi::seeded(&[(1, "one", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    // the DELETE still goes out; the 404 is absorbed silently
    assert!(!manager.remove(42).await);
    assert_eq!(mock.delete_calls(), 1);
    assert_eq!(manager.len().await, 1);
    assert!(manager.error().await.is_none());
}

#[tokio::test]
async fn failed_remove_is_silent_and_keeps_the_item() {
    let mock = MockTodoApi::seeded(&[(1, "one", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    mock.set_fail(true);
    assert!(!manager.remove(1).await);
    assert_eq!(manager.len().await, 1);
    assert!(manager.error().await.is_none());
}

#[tokio::test]
async fn edit_flow_stages_and_saves() {
    let mock = MockTodoApi::seeded(&[(1, "water plants", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    assert!(manager.begin_edit(1).await);
    let draft = manager.editing().await.expect("draft should be staged");
    assert_eq!(draft.id, 1);
    assert_eq!(draft.title, "water plants");

    manager.set_draft_title("walk the dog").await;
    manager.set_draft_priority(Priority::Low).await;
    let draft = manager.editing().await.expect("draft should be staged");
    assert_eq!(draft.title, "walk the dog");
    assert_eq!(draft.priority, Priority::Low);

    assert!(manager.save_edit().await);
    assert!(manager.editing().await.is_none());

    let todos = manager.todos().await;
    assert_eq!(todos[0].title, "walk the dog");
    assert_eq!(todos[0].priority, Priority::Low);

    let patches = mock.patches();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].0, 1);
    assert_eq!(patches[0].1.title.as_deref(), Some("walk the dog"));
    assert_eq!(patches[0].1.priority, Some(Priority::Low));
    assert!(patches[0].1.completed.is_none());
}

#[tokio::test]
async fn begin_edit_of_an_unknown_id_is_refused() {
    let manager = TodoListManager::new(MockTodoApi::new());
    manager.load().await;

    assert!(!manager.begin_edit(99).await);
    assert!(manager.editing().await.is_none());
}

#[tokio::test]
async fn draft_mutators_without_a_draft_are_noops() {
    let mock = MockTodoApi::seeded(&[(1, "one", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    manager.set_draft_title("ignored").await;
    manager.set_draft_priority(Priority::High).await;
    assert!(manager.editing().await.is_none());

    assert!(!manager.save_edit().await, "nothing staged, nothing sent");
    assert_eq!(mock.update_calls(), 0);
}

#[tokio::test]
async fn cancel_edit_discards_the_draft() {
    let mock = MockTodoApi::seeded(&[(1, "water plants", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    manager.begin_edit(1).await;
    manager.set_draft_title("never sent").await;
    manager.cancel_edit().await;

    assert!(manager.editing().await.is_none());
    assert_eq!(manager.todos().await[0].title, "water plants");
    assert!(!manager.save_edit().await);
    assert_eq!(mock.update_calls(), 0);
}

#[tokio::test]
async fn failed_save_keeps_the_draft_for_a_retry() {
    let mock = MockTodoApi::seeded(&[(1, "water plants", false)]);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    manager.begin_edit(1).await;
    manager.set_draft_title("walk the dog").await;

    mock.set_fail(true);
    assert!(!manager.save_edit().await);

    let draft = manager.editing().await.expect("draft should survive");
    assert_eq!(draft.title, "walk the dog");
    assert_eq!(manager.todos().await[0].title, "water plants");
    assert!(manager.error().await.is_none(), "edit never surfaces errors");

    mock.set_fail(false);
    assert!(manager.save_edit().await);
    assert_eq!(manager.todos().await[0].title, "walk the dog");
}

#[tokio::test]
async fn a_draft_survives_a_reload() {
    let seed: Vec<RemoteTodo> = (1..=12)
        .map(|id| RemoteTodo {
            id,
            user_id: 1,
            title: format!("todo {id}"),
            completed: false,
        })
        .collect();
    let mock = MockTodoApi::with_todos(seed);
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    // the created item (id 13) sits beyond the page limit, so the next
    // load drops it locally while the server keeps it
    let created = manager
        .create("extra", Priority::Low)
        .await
        .expect("create should succeed");
    assert_eq!(created.id, 13);
    assert!(manager.begin_edit(13).await);

    manager.load().await;
    assert!(manager.todos().await.iter().all(|todo| todo.id != 13));
    let draft = manager.editing().await.expect("draft should survive reload");
    assert_eq!(draft.id, 13);

    // saving still patches the server item and clears the draft, merging
    // into nothing locally
    assert!(manager.save_edit().await);
    assert!(manager.editing().await.is_none());
    assert!(manager.todos().await.iter().all(|todo| todo.id != 13));
    assert_eq!(mock.patches().last().map(|(id, _)| *id), Some(13));
}

#[tokio::test]
async fn visible_todos_filters_and_sorts() {
    let mock = MockTodoApi::new();
    let manager = TodoListManager::new(mock.clone());
    manager.load().await;

    let low = manager.create("low", Priority::Low).await.unwrap();
    let high = manager.create("high", Priority::High).await.unwrap();
    let medium = manager.create("medium", Priority::Medium).await.unwrap();
    assert!(manager.toggle(low.id).await);

    let all: Vec<u64> = manager
        .visible_todos(StatusFilter::All, false)
        .await
        .iter()
        .map(|todo| todo.id)
        .collect();
    assert_eq!(all, vec![low.id, high.id, medium.id], "arrival order");

    let pending: Vec<u64> = manager
        .visible_todos(StatusFilter::Pending, false)
        .await
        .iter()
        .map(|todo| todo.id)
        .collect();
    assert_eq!(pending, vec![high.id, medium.id]);

    let completed: Vec<u64> = manager
        .visible_todos(StatusFilter::Completed, false)
        .await
        .iter()
        .map(|todo| todo.id)
        .collect();
    assert_eq!(completed, vec![low.id]);

    let sorted: Vec<u64> = manager
        .visible_todos(StatusFilter::All, true)
        .await
        .iter()
        .map(|todo| todo.id)
        .collect();
    assert_eq!(sorted, vec![high.id, medium.id, low.id]);
}

#[tokio::test]
async fn counts_track_completion() {
    let mock = MockTodoApi::seeded(&[(1, "one", false), (2, "two", true), (3, "three", false)]);
    let manager = TodoListManager::new(mock);
    manager.load().await;

    assert_eq!(manager.pending_count().await, 2);
    assert_eq!(manager.completed_count().await, 1);

    manager.toggle(1).await;
    assert_eq!(manager.pending_count().await, 1);
    assert_eq!(manager.completed_count().await, 2);
}

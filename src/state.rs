use crate::config::Config;
use crate::error::Result;
use crate::models::todo::Todo;
use deadpool_postgres::Pool;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The in-memory todo list guarded by the store's lock.
struct TodoList {
    items: Vec<Todo>,
    next_id: i32,
}

/// A thread-safe in-memory todo store.
///
/// One coarse lock guards the item sequence and the id counter together, so
/// the counter increment and the insert are a single atomic step.
#[derive(Clone)]
pub struct TodoStore {
    inner: Arc<Mutex<TodoList>>,
}

impl TodoStore {
    /// Creates a new, empty `TodoStore`.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TodoList {
                items: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Returns a snapshot of all todos.
    pub async fn list(&self) -> Vec<Todo> {
        let list = self.inner.lock().await;
        list.items.clone()
    }

    /// Creates a new todo with the next id.
    pub async fn create(&self, title: String) -> Todo {
        let mut list = self.inner.lock().await;
        let todo = Todo {
            id: list.next_id,
            title,
            done: false,
        };
        list.next_id += 1;
        list.items.push(todo.clone());
        todo
    }

    /// Updates the todo with the given id, returning `None` if it does not exist.
    pub async fn update(&self, id: i32, title: String, done: bool) -> Option<Todo> {
        let mut list = self.inner.lock().await;
        let item = list.items.iter_mut().find(|t| t.id == id)?;
        item.title = title;
        item.done = done;
        Some(item.clone())
    }

    /// Deletes the todo with the given id, returning whether it existed.
    pub async fn delete(&self, id: i32) -> bool {
        let mut list = self.inner.lock().await;
        let before = list.items.len();
        list.items.retain(|t| t.id != id);
        list.items.len() != before
    }
}

/// The application's state.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: Pool,
    /// The application's configuration.
    pub config: Config,
    /// The in-memory todo store.
    pub todos: TodoStore,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = crate::db::create_pool(&config.database_url)?;
        tracing::info!("✅ PostgreSQL Pool initialized with deadpool-postgres");

        let todos = TodoStore::new();
        tracing::info!("✅ In-memory TodoStore initialized");

        Ok(AppState {
            db,
            config: config.clone(),
            todos,
        })
    }
}

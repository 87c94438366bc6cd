//! Workbench
//!
//! State of the tabbed todo/settings page. Todos and theme are written
//! through to the key-value store on every change; tab and modal are
//! transient. A failed write never rolls back the in-memory change, the
//! error is handed back for the caller to report.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::PagesConfig;
use crate::domain::{position_of, Tab, Theme, TodoItem};
use crate::error::PagesResult;
use crate::store::{KeyValueStore, ThemeRepository, TodoRepository};

#[derive(Debug, Clone)]
pub struct Workbench<S> {
    store: S,
    todos_repo: TodoRepository<S>,
    theme_repo: ThemeRepository<S>,
    todos: Vec<TodoItem>,
    theme: Theme,
    active_tab: Tab,
    modal_open: bool,
}

impl<S: KeyValueStore + Clone> Workbench<S> {
    /// Restore todos and theme from `store`
    pub fn load(store: S, config: &PagesConfig) -> Self {
        let todos_repo = TodoRepository::new(store.clone(), config.todos_key.clone());
        let theme_repo = ThemeRepository::new(store.clone(), config.theme_key.clone());

        let todos = todos_repo.load().unwrap_or_else(|e| {
            warn!("could not restore todos, starting empty: {}", e);
            Vec::new()
        });
        let theme = theme_repo.load();
        debug!(todos = todos.len(), theme = theme.as_str(), "workbench restored");

        Self {
            store,
            todos_repo,
            theme_repo,
            todos,
            theme,
            active_tab: Tab::default(),
            modal_open: false,
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Add a todo stamped with the current time
    ///
    /// Blank or whitespace-only text is ignored and yields `Ok(None)`.
    pub fn add_todo(&mut self, text: &str) -> PagesResult<Option<i64>> {
        self.add_todo_at(text, chrono::Utc::now().timestamp_millis())
    }

    /// Add a todo created at `now_ms`; the id is bumped past existing ids if needed
    pub fn add_todo_at(&mut self, text: &str, now_ms: i64) -> PagesResult<Option<i64>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let id = self.next_todo_id(now_ms);
        self.todos.push(TodoItem::new(id, text.to_string()));
        self.persist_todos()?;
        Ok(Some(id))
    }

    /// Add the text in `input`, clearing it whenever it held a todo
    ///
    /// The input is emptied even if persisting fails, since the todo is
    /// already in the list by then.
    pub fn take_todo_input(&mut self, input: &mut String) -> PagesResult<Option<i64>> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        let text = std::mem::take(input);
        self.add_todo(&text)
    }

    // `now_ms` if it is past every id, else one past the largest. When that
    // would overflow, the nearest free id at or below `now_ms`.
    fn next_todo_id(&self, now_ms: i64) -> i64 {
        let Some(max) = self.todos.iter().map(|t| t.id).max() else {
            return now_ms;
        };
        if now_ms > max {
            return now_ms;
        }
        max.checked_add(1).unwrap_or_else(|| {
            let taken: HashSet<i64> = self.todos.iter().map(|t| t.id).collect();
            (i64::MIN..=now_ms)
                .rev()
                .find(|id| !taken.contains(id))
                .unwrap_or(i64::MIN)
        })
    }

    /// Flip `completed` on the matching todo; false if none matched
    pub fn toggle_todo(&mut self, id: i64) -> PagesResult<bool> {
        let found = match position_of(&self.todos, id) {
            Some(index) => {
                let todo = &mut self.todos[index];
                todo.completed = !todo.completed;
                true
            }
            None => false,
        };
        self.persist_todos()?;
        Ok(found)
    }

    /// Remove the matching todo keeping the others in order
    pub fn delete_todo(&mut self, id: i64) -> PagesResult<bool> {
        let found = match position_of(&self.todos, id) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        };
        self.persist_todos()?;
        Ok(found)
    }

    fn persist_todos(&self) -> PagesResult<()> {
        self.todos_repo.save(&self.todos)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> PagesResult<()> {
        self.theme = theme;
        self.theme_repo.save(theme)
    }

    pub fn toggle_theme(&mut self) -> PagesResult<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Wipe the store and reset todos and theme to their defaults
    pub fn clear_all_data(&mut self) -> PagesResult<()> {
        self.todos.clear();
        self.theme = Theme::Light;
        debug!("clearing all stored data");
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{THEME_KEY, TODOS_KEY};
    use crate::error::PagesError;
    use crate::store::MemoryStore;

    fn workbench() -> (Workbench<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        (Workbench::load(store.clone(), &PagesConfig::default()), store)
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let (mut bench, store) = workbench();
        assert_eq!(bench.add_todo("").unwrap(), None);
        assert_eq!(bench.add_todo("   ").unwrap(), None);
        assert!(bench.todos().is_empty());
        assert_eq!(store.get(TODOS_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_appends_incomplete_item() {
        let (mut bench, _) = workbench();
        bench.add_todo("first").unwrap();
        let id = bench.add_todo("buy milk").unwrap().expect("added");

        assert_eq!(bench.todos().len(), 2);
        let last = bench.todos().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "buy milk");
        assert!(!last.completed);
        assert_ne!(bench.todos()[0].id, id);
    }

    #[test]
    fn test_ids_stay_unique_on_clock_collision() {
        let (mut bench, _) = workbench();
        let a = bench.add_todo_at("a", 1000).unwrap().unwrap();
        let b = bench.add_todo_at("b", 1000).unwrap().unwrap();
        let c = bench.add_todo_at("c", 900).unwrap().unwrap();
        assert_eq!((a, b, c), (1000, 1001, 1002));
    }

    #[test]
    fn test_ids_stay_unique_at_id_ceiling() {
        let store = MemoryStore::new();
        store
            .set(TODOS_KEY, &format!(r#"[{{"id":{},"text":"last","completed":false}}]"#, i64::MAX))
            .unwrap();
        let mut bench = Workbench::load(store, &PagesConfig::default());

        let a = bench.add_todo_at("next", 5).unwrap().unwrap();
        let b = bench.add_todo_at("again", 5).unwrap().unwrap();
        let c = bench.add_todo("now").unwrap().unwrap();
        assert_eq!((a, b), (5, 4));

        let ids: HashSet<i64> = bench.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 4);
        assert!(ids.contains(&c));
    }

    #[test]
    fn test_take_input_clears_text() {
        let (mut bench, _) = workbench();
        let mut input = "   ".to_string();
        assert_eq!(bench.take_todo_input(&mut input).unwrap(), None);
        assert_eq!(input, "   ");

        let mut input = "buy milk".to_string();
        assert!(bench.take_todo_input(&mut input).unwrap().is_some());
        assert!(input.is_empty());
        assert_eq!(bench.todos()[0].text, "buy milk");
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let (mut bench, _) = workbench();
        let id = bench.add_todo_at("x", 1).unwrap().unwrap();
        let other = bench.add_todo_at("y", 2).unwrap().unwrap();

        assert!(bench.toggle_todo(id).unwrap());
        assert!(bench.todos()[0].completed);
        assert!(!bench.todos()[1].completed);

        bench.toggle_todo(id).unwrap();
        assert!(!bench.todos()[0].completed);
        assert!(!bench.toggle_todo(other + 100).unwrap());
    }

    #[test]
    fn test_delete_keeps_order() {
        let (mut bench, _) = workbench();
        for (i, text) in ["a", "b", "c"].iter().enumerate() {
            bench.add_todo_at(text, i as i64 + 1).unwrap();
        }
        assert!(bench.delete_todo(2).unwrap());

        let texts: Vec<_> = bench.todos().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert!(!bench.delete_todo(2).unwrap());
    }

    #[test]
    fn test_add_then_delete_leaves_empty_storage() {
        let (mut bench, store) = workbench();
        let id = bench.add_todo("Write report").unwrap().unwrap();
        bench.delete_todo(id).unwrap();

        assert!(bench.todos().is_empty());
        assert_eq!(store.get(TODOS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_state_survives_reload() {
        let (mut bench, store) = workbench();
        let id = bench.add_todo_at("persist me", 5).unwrap().unwrap();
        bench.toggle_todo(id).unwrap();
        bench.toggle_theme().unwrap();
        bench.select_tab(Tab::About);
        bench.open_modal();

        let reloaded = Workbench::load(store, &PagesConfig::default());
        assert_eq!(reloaded.todos(), bench.todos());
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(reloaded.active_tab(), Tab::TodoList);
        assert!(!reloaded.modal_open());
    }

    #[test]
    fn test_theme_double_toggle() {
        let (mut bench, store) = workbench();
        assert_eq!(bench.theme(), Theme::Light);
        assert_eq!(bench.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(bench.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_clear_all_data() {
        let (mut bench, store) = workbench();
        bench.add_todo("a").unwrap();
        bench.set_theme(Theme::Dark).unwrap();

        bench.clear_all_data().unwrap();
        assert!(bench.todos().is_empty());
        assert_eq!(bench.theme(), Theme::Light);
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_todos_start_empty() {
        let store = MemoryStore::new();
        store.set(TODOS_KEY, "{broken").unwrap();
        store.set(THEME_KEY, "dark").unwrap();

        let bench = Workbench::load(store, &PagesConfig::default());
        assert!(bench.todos().is_empty());
        assert_eq!(bench.theme(), Theme::Dark);
    }

    /// Store that reads nothing and refuses every write
    #[derive(Clone)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> PagesResult<Option<String>> {
            Err(PagesError::Storage("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> PagesResult<()> {
            Err(PagesError::Storage("storage disabled".to_string()))
        }

        fn clear(&self) -> PagesResult<()> {
            Err(PagesError::Storage("storage disabled".to_string()))
        }
    }

    #[test]
    fn test_unavailable_storage_keeps_memory_state() {
        let mut bench = Workbench::load(ReadOnlyStore, &PagesConfig::default());
        assert_eq!(bench.theme(), Theme::Light);

        assert!(matches!(bench.add_todo("offline"), Err(PagesError::Storage(_))));
        assert_eq!(bench.todos().len(), 1);

        let mut input = "offline again".to_string();
        assert!(bench.take_todo_input(&mut input).is_err());
        assert!(input.is_empty());
        assert_eq!(bench.todos().len(), 2);

        assert!(bench.set_theme(Theme::Dark).is_err());
        assert_eq!(bench.theme(), Theme::Dark);
    }
}

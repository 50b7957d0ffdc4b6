use std::collections::HashSet;
use taskpad_core::{Task, TaskId, TaskList, TaskListError};
use uuid::Uuid;

fn list_with(entries: &[(&str, &str)]) -> (TaskList, Vec<TaskId>) {
    let mut list = TaskList::default();
    let mut ids = Vec::new();
    for (title, about) in entries.iter().copied() {
        let (next, id) = list.added(title, about);
        list = next;
        ids.push(id.expect("fixture input must be valid"));
    }
    (list, ids)
}

#[test]
fn added_appends_at_the_end_with_unique_ids() {
    let (list, ids) = list_with(&[("first", "a"), ("second", "b"), ("third", "c")]);

    assert_eq!(list.len(), 3);
    let titles: Vec<&str> = list.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);

    let unique: HashSet<TaskId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn added_with_blank_field_is_identity() {
    let (list, _) = list_with(&[("existing", "task")]);

    let (unchanged, created) = list.added("", "about");
    assert_eq!(unchanged, list);
    assert_eq!(created, None);

    let (unchanged, created) = list.added("title", "   ");
    assert_eq!(unchanged, list);
    assert_eq!(created, None);
}

#[test]
fn deleted_is_idempotent() {
    let (list, ids) = list_with(&[("keep", "a"), ("drop", "b")]);

    let once = list.deleted(ids[1]);
    let twice = once.deleted(ids[1]);

    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
    assert_eq!(once.tasks()[0].title, "keep");
}

#[test]
fn deleted_missing_id_is_identity() {
    let (list, _) = list_with(&[("only", "one")]);
    assert_eq!(list.deleted(Uuid::new_v4()), list);
}

#[test]
fn toggled_twice_is_identity() {
    let (list, ids) = list_with(&[("flip", "me"), ("leave", "me")]);

    let toggled = list.toggled(ids[0]);
    assert!(toggled.get(ids[0]).unwrap().completed);
    assert!(!toggled.get(ids[1]).unwrap().completed);

    assert_eq!(toggled.toggled(ids[0]), list);
}

#[test]
fn toggled_missing_id_is_identity() {
    let (list, _) = list_with(&[("only", "one")]);
    assert_eq!(list.toggled(Uuid::new_v4()), list);
}

#[test]
fn edited_replaces_fields_and_preserves_identity() {
    let (list, ids) = list_with(&[("old title", "old about")]);
    let completed_before = list.get(ids[0]).unwrap().completed;

    let edited = list.edited(ids[0], "new title", "new about");
    let task = edited.get(ids[0]).unwrap();

    assert_eq!(task.id, ids[0]);
    assert_eq!(task.completed, completed_before);
    assert_eq!(task.title, "new title");
    assert_eq!(task.about, "new about");
}

#[test]
fn edited_with_blank_field_is_identity() {
    let (list, ids) = list_with(&[("keep title", "keep about")]);

    assert_eq!(list.edited(ids[0], "", "new about"), list);
    assert_eq!(list.edited(ids[0], "new title", "   "), list);
}

#[test]
fn edited_missing_id_is_identity() {
    let (list, _) = list_with(&[("only", "one")]);
    assert_eq!(list.edited(Uuid::new_v4(), "x", "y"), list);
}

#[test]
fn add_toggle_delete_scenario() {
    let empty = TaskList::default();

    let (one, id) = empty.added("Buy milk", "2%");
    let id = id.unwrap();
    assert_eq!(one.len(), 1);
    assert!(!one.get(id).unwrap().completed);

    let done = one.toggled(id);
    assert!(done.get(id).unwrap().completed);

    let cleared = done.deleted(id);
    assert!(cleared.is_empty());
}

#[test]
fn from_tasks_rejects_duplicate_ids() {
    let id = Uuid::new_v4();
    let first = Task::with_id(id, "one", "a").unwrap();
    let second = Task::with_id(id, "two", "b").unwrap();

    let err = TaskList::from_tasks(vec![first, second]).unwrap_err();
    assert_eq!(err, TaskListError::DuplicateId(id));
}

#[test]
fn from_tasks_rejects_invalid_records() {
    let mut task = Task::new("valid", "fields").unwrap();
    task.title = String::new();

    let err = TaskList::from_tasks(vec![task]).unwrap_err();
    assert!(matches!(err, TaskListError::Validation(_)));
}

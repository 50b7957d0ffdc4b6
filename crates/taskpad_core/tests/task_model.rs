use taskpad_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn new_task_sets_defaults() {
    let task = Task::new("Buy milk", "2%").unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.about, "2%");
    assert!(!task.completed);
}

#[test]
fn new_task_rejects_blank_fields() {
    let err = Task::new("   ", "about").unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyTitle);

    let err = Task::new("title", "\t\n").unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyAbout);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "title", "about").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn fields_are_stored_as_entered() {
    // Validation trims for the emptiness check only; surrounding whitespace
    // the user typed is preserved in the record.
    let task = Task::new("  padded title ", " padded about ").unwrap();
    assert_eq!(task.title, "  padded title ");
    assert_eq!(task.about, " padded about ");
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(id, "Buy milk", "2%").unwrap();
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["about"], "2%");
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn share_text_is_two_lines() {
    let task = Task::new("Buy milk", "2% from the corner shop").unwrap();
    assert_eq!(
        task.share_text(),
        "Task: Buy milk\nAbout: 2% from the corner shop"
    );
}

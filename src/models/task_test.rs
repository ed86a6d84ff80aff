use super::*;

#[test]
fn test_parse_status() {
    assert_eq!("To Do".parse::<Status>(), Ok(Status::ToDo));
    assert_eq!("todo".parse::<Status>(), Ok(Status::ToDo));
    assert_eq!(" in progress ".parse::<Status>(), Ok(Status::InProgress));
    assert_eq!("DONE".parse::<Status>(), Ok(Status::Done));

    let err = "Blocked".parse::<Status>().unwrap_err();
    assert_eq!(err, ParseStatusError("Blocked".to_string()));
    assert_eq!(err.to_string(), "unknown status \"Blocked\"");
}

#[test]
fn test_status_cycle() {
    let mut status = Status::ToDo;
    for want in [Status::InProgress, Status::Done, Status::ToDo] {
        status = status.next();
        assert_eq!(status, want);
    }
    assert_eq!(Status::ToDo.prev(), Status::Done);
    assert_eq!(Status::Done.prev().prev(), Status::ToDo);
}

#[test]
fn test_status_display_matches_parse() {
    for status in Status::ALL {
        assert_eq!(status.to_string().parse::<Status>(), Ok(status));
    }
}

#[test]
fn test_task_field() {
    let task = Task::new(7, "Write docs", "Not Completed", Status::InProgress);
    assert_eq!(task.field(TaskField::Title), "Write docs");
    assert_eq!(task.field(TaskField::Description), "Not Completed");
    assert_eq!(task.field(TaskField::Status), "In Progress");
}

#[test]
fn test_new_task_defaults_to_todo() {
    let new = NewTask::new("a", "b");
    assert_eq!(new.status, Status::ToDo);
    assert_eq!(new.with_status(Status::Done).status, Status::Done);
}

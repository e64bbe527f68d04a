use std::{
    fmt,
    ops::Deref,
};
use super::{
    Task,
    Tasks,
    TaskStatus,
};

impl Task {
    pub fn status(&self) -> TaskStatus {
        self.status.into()
    }

    pub fn is_open(&self) -> bool {
        self.status() == TaskStatus::Open
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Vec<Task>> for Tasks {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

impl Deref for Tasks {
    type Target = [Task];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Tasks {
    pub fn into_inner(self) -> Vec<Task> {
        self.0
    }

    /// The open tasks assigned to the given user.
    pub fn open_for<'a>(&'a self, user: &'a str) -> impl Iterator<Item = &'a Task> {
        self.0.iter()
            .filter(move |task| task.assigned_to == user && task.is_open())
    }
}

#[cfg(test)]
mod test {
    use super::{
        Task,
        TaskStatus,
    };

    #[test]
    fn status_conversions() {
        assert_eq!(TaskStatus::from(0), TaskStatus::Open);
        assert_eq!(TaskStatus::from(1), TaskStatus::Closed);
        // out of range values fall back to the catch-all
        assert_eq!(TaskStatus::from(42), TaskStatus::Unknown);
        assert_eq!(TaskStatus::Closed.to_string(), "Closed");

        let task = Task::default();
        assert!(task.is_open());
    }
}

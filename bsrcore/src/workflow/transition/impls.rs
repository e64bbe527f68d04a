use super::*;

impl StateTransitions {
    pub fn get(&self, state: State) -> Option<&Transition> {
        self.0.get(&state)
    }
}

impl Default for StateTransitions {
    fn default() -> Self {
        Self(HashMap::from([
            (State::DuplicationCheck, Transition {
                assignee: Some(Approver::Librarian),
                task_description: Some("Duplication Check".to_string()),
                permits: Permit::Read | Permit::Write | Permit::Submit | Permit::Share,
                revokee: None,
            }),
            (State::HodApproval, Transition {
                assignee: Some(Approver::Hod),
                task_description: Some("HOD Approval".to_string()),
                permits: Permit::Read | Permit::Submit | Permit::Share,
                revokee: Some(Approver::Librarian),
            }),
            (State::ConvenerApproval, Transition {
                assignee: Some(Approver::LibraryConvener),
                task_description: Some("Library Convener Approval".to_string()),
                permits: Permit::Read | Permit::Submit | Permit::Share,
                revokee: Some(Approver::Hod),
            }),
            (State::Approved, Transition {
                assignee: None,
                task_description: None,
                permits: EnumSet::empty(),
                revokee: Some(Approver::LibraryConvener),
            }),
            (State::Rejected, Transition {
                assignee: None,
                task_description: None,
                permits: EnumSet::empty(),
                revokee: Some(Approver::LibraryConvener),
            }),
        ]))
    }
}

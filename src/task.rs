//! The three canned writing tasks

/// Which writing task the user is working on.
///
/// Determines the active form, the prompt template, and where a finished
/// generation lands. Each task's form and result are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskKind {
    #[default]
    ReplyEmail,
    CancelSubscription,
    MeetingNotes,
}

impl TaskKind {
    /// Selector order, left to right.
    pub const ALL: [TaskKind; 3] = [
        Self::ReplyEmail,
        Self::CancelSubscription,
        Self::MeetingNotes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::ReplyEmail => "Reply to Email",
            Self::CancelSubscription => "Cancel Subscription",
            Self::MeetingNotes => "Take Meeting Notes",
        }
    }

    /// Heading shown above a successful result.
    pub fn output_title(self) -> &'static str {
        match self {
            Self::ReplyEmail => "Suggested Email Reply",
            Self::CancelSubscription => "Subscription Cancellation Draft/Guidance",
            Self::MeetingNotes => "Generated Meeting Notes",
        }
    }

    /// Position in the selector row.
    pub fn index(self) -> usize {
        match self {
            Self::ReplyEmail => 0,
            Self::CancelSubscription => 1,
            Self::MeetingNotes => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::ReplyEmail => Self::CancelSubscription,
            Self::CancelSubscription => Self::MeetingNotes,
            Self::MeetingNotes => Self::ReplyEmail,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::ReplyEmail => Self::MeetingNotes,
            Self::CancelSubscription => Self::ReplyEmail,
            Self::MeetingNotes => Self::CancelSubscription,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_are_inverse() {
        for task in TaskKind::ALL {
            assert_eq!(task.next().prev(), task);
            assert_eq!(task.prev().next(), task);
        }
    }

    #[test]
    fn index_matches_selector_order() {
        for (i, task) in TaskKind::ALL.iter().enumerate() {
            assert_eq!(task.index(), i);
        }
    }
}

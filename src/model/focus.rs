//! Focus tracking for the screen's interactive elements

/// Which element receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    AddButton,
    List,
    /// Nothing focused (input blurred)
    None,
}

impl Focus {
    /// Next element in Tab order. A blurred screen resumes at the input.
    pub fn next(&self) -> Focus {
        match self {
            Focus::Input => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List | Focus::None => Focus::Input,
        }
    }

    /// Previous element in Tab order
    pub fn prev(&self) -> Focus {
        match self {
            Focus::Input => Focus::List,
            Focus::AddButton => Focus::Input,
            Focus::List => Focus::AddButton,
            Focus::None => Focus::Input,
        }
    }

    pub fn is_input(&self) -> bool {
        *self == Focus::Input
    }
}

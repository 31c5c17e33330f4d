/// One open conditional level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    branch_true: bool,
    in_else: bool,
}

impl Frame {
    /// Open a frame for `IF condition`
    pub(crate) fn new(condition: bool) -> Self {
        Self {
            branch_true: condition,
            in_else: false,
        }
    }

    /// Truth of this branch as currently stored (inverted once `ELSE` is taken)
    pub fn branch_true(&self) -> bool {
        self.branch_true
    }

    /// Whether this frame has entered its `ELSE` arm
    pub fn in_else(&self) -> bool {
        self.in_else
    }

    /// Enter the `ELSE` arm. Returns `false` if it was already entered.
    pub(crate) fn enter_else(&mut self) -> bool {
        if self.in_else {
            return false;
        }
        self.in_else = true;
        self.branch_true = !self.branch_true;
        true
    }
}

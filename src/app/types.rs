/// Modal input states layered over the picker.
pub enum InputMode {
    /// Yes/no gate in front of a worktree deletion. Holds the encoded
    /// selection taken when the prompt opened.
    ConfirmDelete { selection: String },
    /// Destination prompt for worktree creation. An empty submit accepts
    /// the `../<branch>` default.
    PathInput { branch: String, buffer: String },
}

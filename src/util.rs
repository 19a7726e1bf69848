/// A key binding and what it does, for the help overlay.
#[derive(Clone, Copy)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

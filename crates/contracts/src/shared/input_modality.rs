/// How the user is currently driving the page.
///
/// Keyboard modality turns on visible focus rings; any mouse press turns them off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputModality {
    #[default]
    Pointer,
    Keyboard,
}

impl InputModality {
    /// Body class set while in keyboard modality
    pub const KEYBOARD_CLASS: &'static str = "keyboard-nav";

    /// Modality after a key press anywhere on the page
    pub fn after_key(self, key: &str) -> Self {
        if key == "Tab" {
            InputModality::Keyboard
        } else {
            self
        }
    }

    /// Modality after a mouse button goes down
    pub fn after_pointer_down(self) -> Self {
        InputModality::Pointer
    }

    pub fn is_keyboard(self) -> bool {
        self == InputModality::Keyboard
    }
}

use crate::basic::Dir;
use ggez::input::keyboard::KeyCode::{self, *};

/// What a key press asks the game to do
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Control {
    Turn(Dir),
    Quit,
}

#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
    pub quit: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self { u: Up, d: Down, l: Left, r: Right, quit: Escape }
    }
}

impl Controls {
    /// `None` for keys that aren't bound
    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        #[rustfmt::skip]
        let control = match key {
            k if k == self.u => Control::Turn(Dir::U),
            k if k == self.d => Control::Turn(Dir::D),
            k if k == self.l => Control::Turn(Dir::L),
            k if k == self.r => Control::Turn(Dir::R),
            k if k == self.quit => Control::Quit,
            _ => return None,
        };
        Some(control)
    }
}

#[test]
fn test_default_controls() {
    let controls = Controls::default();
    for (key, control) in [
        (Up, Some(Control::Turn(Dir::U))),
        (Down, Some(Control::Turn(Dir::D))),
        (Left, Some(Control::Turn(Dir::L))),
        (Right, Some(Control::Turn(Dir::R))),
        (Escape, Some(Control::Quit)),
        (Space, None),
        (A, None),
    ] {
        assert_eq!(controls.control_for(key), control, "{:?}", key);
    }
}

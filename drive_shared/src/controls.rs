//! Held player controls.
//!
//! The four controls are independent: any combination may be active at once,
//! including opposing pairs (accelerate + brake, turn right + turn left).

use serde::{Deserialize, Serialize};

/// A single held control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Accelerate,
    Brake,
    TurnRight,
    TurnLeft,
}

impl Control {
    /// All controls, in the order the vehicle update applies them.
    pub const ALL: [Control; 4] = [
        Control::Accelerate,
        Control::Brake,
        Control::TurnRight,
        Control::TurnLeft,
    ];

    fn flag(self) -> ControlSet {
        match self {
            Control::Accelerate => ControlSet::ACCELERATE,
            Control::Brake => ControlSet::BRAKE,
            Control::TurnRight => ControlSet::TURN_RIGHT,
            Control::TurnLeft => ControlSet::TURN_LEFT,
        }
    }
}

bitflags::bitflags! {
    /// Set of currently held controls.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ControlSet: u8 {
        const ACCELERATE = 1 << 0;
        const BRAKE = 1 << 1;
        const TURN_RIGHT = 1 << 2;
        const TURN_LEFT = 1 << 3;
    }
}

impl ControlSet {
    /// Marks a control as held.
    pub fn press(&mut self, control: Control) {
        self.insert(control.flag());
    }

    /// Marks a control as released.
    pub fn release(&mut self, control: Control) {
        self.remove(control.flag());
    }

    pub fn is_active(&self, control: Control) -> bool {
        self.contains(control.flag())
    }

    /// Iterates held controls in update order.
    pub fn active(&self) -> impl Iterator<Item = Control> {
        let set = *self;
        Control::ALL.into_iter().filter(move |c| set.is_active(*c))
    }
}

impl FromIterator<Control> for ControlSet {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        let mut set = ControlSet::empty();
        for c in iter {
            set.press(c);
        }
        set
    }
}

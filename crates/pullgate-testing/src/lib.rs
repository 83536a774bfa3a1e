//! Testing utilities and harness for the pullgate refresh controller.

pub mod robot;

pub use robot::{GestureRobot, ScrollStub};

pub mod prelude {
    pub use crate::robot::{GestureRobot, ScrollStub};
}

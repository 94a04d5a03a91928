mod debounce;
mod input;
mod keyboard;
mod selection;

pub use debounce::{Debouncer, TimerToken};
pub use input::{InputEvent, InputHub, Subscription};
pub use keyboard::KeyCommand;
pub use selection::SelectionState;

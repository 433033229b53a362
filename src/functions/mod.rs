pub mod constants;
pub mod keypad;
pub mod math;

pub use constants::Constant;
pub use keypad::ScientificKey;
pub use math::Function;

pub mod appointment;
pub mod enums;
pub mod exam;
pub mod user;

pub use appointment::*;
pub use enums::*;
pub use exam::*;
pub use user::*;

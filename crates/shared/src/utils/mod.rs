mod gracefull;
mod logs;
mod math;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::math::round2;

pub mod level;
pub mod locomo25;
pub mod profile;
pub mod session;
pub mod stand_up;
pub mod two_step;

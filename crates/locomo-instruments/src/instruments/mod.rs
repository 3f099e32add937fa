pub mod locomo25;
pub mod stand_up;
pub mod two_step;

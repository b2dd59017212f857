//! Domain logic: calendar math and the selection/allowance state machine.

pub mod calendar;
pub mod planner;

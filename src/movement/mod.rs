//! Movement resolution.
//!
//! Moving is strictly two-phase:
//! 1. `plan_move` checks, without mutating anything, whether a controlled
//!    entity can step and collects the push chain ahead of it
//! 2. `PushPlan::commit` applies a successful plan, furthest entity first
//!
//! `MovementResolver` drives this for every controlled entity in
//! leading-first order. The rule pass and state evaluation that follow a
//! move are sequenced by `World`.

pub mod push;
pub mod resolver;

pub use push::{plan_move, Blocked, PushPlan};
pub use resolver::MovementResolver;

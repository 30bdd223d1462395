// ABOUTME: Domain service layer for plan generation and coaching logic
// ABOUTME: Keeps remote-call and fallback decisions out of the HTTP route handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they parse the request, call a service and store
//! the result. Services never touch HTTP types.

/// Free-text fitness questions answered by the remote model
pub mod coach_chat;

/// Static workout and diet plans served when the remote call fails
pub mod fallback_plans;

/// Remote-first plan generation with fallback
pub mod plan_generation;

pub use coach_chat::CoachChat;
pub use fallback_plans::fallback_plan;
pub use plan_generation::PlanGenerator;

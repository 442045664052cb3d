//! Execution plan assembly tests
//!
//! These tests drive the plan mutators the way a program builder would and
//! check the namespace rules, name uniqueness and atomicity of rejections.


mod atomicity;
mod elements;
mod functions;

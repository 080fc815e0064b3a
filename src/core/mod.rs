pub mod calculator;
pub mod email;
pub mod runner;
pub mod string_rule;
pub mod tax;

pub mod builtin;
pub mod experiments;

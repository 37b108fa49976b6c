//! Dedicated editor sections.

pub mod jvm;
pub mod launcher;

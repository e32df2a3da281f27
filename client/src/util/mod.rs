//! Small helpers shared by the landing sections.

pub mod report;

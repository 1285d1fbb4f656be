//! Runtime module — process lifecycle: boot, parse run, output rendering.

pub mod boot;
pub mod run;
pub mod output;

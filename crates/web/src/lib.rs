//! Server-side integration for chartson charts.
//!
//! This crate turns a [chartson_options::options::Options] tree into the
//! artifacts a server-rendered page needs: the HTML mount fragment, header
//! scripts, and decoded browser events. Post-processors implementing
//! [process::OptionsProcessor] run over the tree before it is encoded;
//! [drilldown::DrilldownProcessor] is the built-in one.

pub mod drilldown;
pub mod error;
pub mod fragment;
pub mod process;
pub mod selection;

pub use crate::error::Result;
pub use crate::error::WebError;
pub use crate::fragment::ChartFragment;
pub use crate::process::OptionsProcessor;

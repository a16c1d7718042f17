//! The shop driver: seeds an inventory, advances it day by day and renders
//! each day's state.

pub mod cli;
pub mod fixture;
pub mod report;
pub mod run;

pub use cli::{CommandLine, OutputFormat};
pub use fixture::fixture_items;
pub use report::{DayReport, render_text_day};
pub use run::{run, shop_violations};

pub use dbtune_app as app;
pub use dbtune_domain as domain;
pub use dbtune_infra as infra;
pub use dbtune_ui as ui;

pub mod error;
pub mod logging;

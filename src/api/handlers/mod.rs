pub mod apps;
pub mod lookup;

pub use apps::*;
pub use lookup::*;

use crate::services::ApplicationService;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub service: ApplicationService,
}

use std::sync::Arc;

use crate::config::Config;
use crate::email::Notifier;
use crate::sheet::SheetStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sheet: Arc<dyn SheetStore>,
    pub notifier: Arc<dyn Notifier>,
}

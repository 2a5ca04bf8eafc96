use std::sync::Arc;

use oxalens_core::application::OxaLensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: OxaLensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: OxaLensService) -> Self {
        Self { args, service }
    }
}

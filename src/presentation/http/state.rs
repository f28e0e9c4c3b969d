use crate::{
    application::render_map::use_case::RenderMapUseCase, config::Config,
    infrastructure::demo::DemoRoster,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub render_map: Arc<RenderMapUseCase>,
    pub demo: Arc<DemoRoster>,
}

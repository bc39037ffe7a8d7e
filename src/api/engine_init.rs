use tracing::debug;

use crate::data::LoadTracker;
use crate::error::PcpResult;
use crate::filter::CrossFilterBus;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{
    InvalidationLevel, PcpEngine, PcpEngineConfig, ResizeDebouncer,
    engine_core::{EngineCore, RuntimeState},
    plot_model::PlotModel,
};

impl<R: Renderer> PcpEngine<R> {
    /// Creates an engine with axes built over an empty record set.
    pub fn new(renderer: R, config: PcpEngineConfig) -> PcpResult<Self> {
        config.validate()?;
        let model = PlotModel::new(&config)?;
        let resize = ResizeDebouncer::new(config.resize_debounce_ms);
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            axes = config.axes.len(),
            "pcp engine init"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                config,
                model,
                interaction: InteractionState::default(),
                runtime: RuntimeState {
                    plugins: Vec::new(),
                    invalidation: InvalidationLevel::Full,
                    loads: LoadTracker::default(),
                    subscription: None,
                    resize,
                    last_view: None,
                },
            },
        })
    }

    /// Creates an engine already subscribed to `bus`.
    pub fn with_cross_filter(
        renderer: R,
        config: PcpEngineConfig,
        bus: &CrossFilterBus,
    ) -> PcpResult<Self> {
        let mut engine = Self::new(renderer, config)?;
        engine.attach_cross_filter(bus);
        Ok(engine)
    }
}

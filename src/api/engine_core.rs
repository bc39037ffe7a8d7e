use crate::data::LoadTracker;
use crate::extensions::PcpPlugin;
use crate::filter::CrossFilterSubscription;
use crate::interaction::InteractionState;

use super::{
    InvalidationLevel, PcpEngineConfig, PcpViewModel, ResizeDebouncer, plot_model::PlotModel,
};

/// Internal engine core state used by the public facade (`PcpEngine`).
pub(super) struct EngineCore {
    pub(super) config: PcpEngineConfig,
    pub(super) model: PlotModel,
    pub(super) interaction: InteractionState,
    pub(super) runtime: RuntimeState,
}

/// Bookkeeping that is not part of the plotted state.
pub(super) struct RuntimeState {
    pub(super) plugins: Vec<Box<dyn PcpPlugin>>,
    pub(super) invalidation: InvalidationLevel,
    pub(super) loads: LoadTracker,
    pub(super) subscription: Option<CrossFilterSubscription>,
    pub(super) resize: ResizeDebouncer,
    pub(super) last_view: Option<PcpViewModel>,
}

//! Per-turn service scope - a disposable bundle of the three collaborator
//! handles the turn loop needs.
//!
//! Each loop iteration acquires a fresh scope and drops it at iteration end,
//! bounding any per-call resource lifetime to a single turn. Scopes are
//! never shared across turns or across concurrent callers.

use std::sync::Arc;

use crate::ports::{DebateAi, RapperRepository, SpeechSynthesizer};

/// The bundle of services needed for one debate turn.
pub struct DebateServices {
    pub ai: Arc<dyn DebateAi>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub rappers: Arc<dyn RapperRepository>,
}

/// Factory producing one [`DebateServices`] scope per turn.
pub trait DebateServiceFactory: Send + Sync {
    fn create_scope(&self) -> DebateServices;
}

/// Factory handing out fresh handles to a shared set of services.
///
/// This is the production wiring: the underlying clients are cheap shared
/// handles, so a scope is a fresh set of `Arc` clones per turn.
pub struct SharedServiceFactory {
    ai: Arc<dyn DebateAi>,
    speech: Arc<dyn SpeechSynthesizer>,
    rappers: Arc<dyn RapperRepository>,
}

impl SharedServiceFactory {
    /// Create a factory over the given service handles.
    pub fn new(
        ai: Arc<dyn DebateAi>,
        speech: Arc<dyn SpeechSynthesizer>,
        rappers: Arc<dyn RapperRepository>,
    ) -> Self {
        Self {
            ai,
            speech,
            rappers,
        }
    }
}

impl DebateServiceFactory for SharedServiceFactory {
    fn create_scope(&self) -> DebateServices {
        DebateServices {
            ai: Arc::clone(&self.ai),
            speech: Arc::clone(&self.speech),
            rappers: Arc::clone(&self.rappers),
        }
    }
}

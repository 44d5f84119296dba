//! WebAssembly boundary.
//!
//! Exports `newPuzzle(seed: u32)` and `moveTile(cellIndex: u32)`, and calls
//! back into the host through `puzzle.updatePuzzleDisplay(ptr)` after every
//! change. `ptr` is the address of the process-wide [`PuzzleState`], which
//! lives inside a `static` and therefore never moves. The host reads
//! [`STATE_SIZE`](crate::state::STATE_SIZE) bytes from it during the call and
//! must not write through it or call back into the engine.
//!
//! Diagnostics go through [`HostLogger`] to `stderr.writeToStderr(ptr, len)`.

mod imports;
pub mod logger;

use std::sync::Once;

pub use logger::HostLogger;

use crate::config::EngineConfig;
use crate::state::{PuzzleEngine, PuzzleObserver, PuzzleState, SharedEngine};

/// Observer that hands the record's address to the host renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostDisplay;

impl PuzzleObserver for HostDisplay {
    fn puzzle_updated(&mut self, state: &PuzzleState) {
        // SAFETY: `state` is live for the whole call and the host only reads.
        unsafe { imports::update_puzzle_display(state) }
    }
}

static ENGINE: SharedEngine<HostDisplay> =
    SharedEngine::new(PuzzleEngine::with_config(&EngineConfig::DEFAULT, HostDisplay));

static LOGGER: HostLogger = HostLogger::new(EngineConfig::DEFAULT.log_level);

static INIT_LOGGING: Once = Once::new();

/// Install [`HostLogger`] the first time the host calls in.
fn init_logging() {
    INIT_LOGGING.call_once(|| {
        // Another logger may already be installed when embedded natively.
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LOGGER.level());
        }
    });
}

/// The engine behind the exports.
pub fn engine() -> &'static SharedEngine<HostDisplay> {
    &ENGINE
}

/// Generate a new puzzle from a host-supplied seed.
#[export_name = "newPuzzle"]
pub extern "C" fn new_puzzle(seed: u32) {
    init_logging();
    ENGINE.new_puzzle(seed);
}

/// Request a move of the tile in `cell_index`; illegal requests do nothing.
#[export_name = "moveTile"]
pub extern "C" fn move_tile(cell_index: u32) {
    init_logging();
    let cell_index = usize::try_from(cell_index).unwrap_or(usize::MAX);
    ENGINE.move_tile(cell_index);
}

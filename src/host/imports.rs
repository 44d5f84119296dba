//! Functions the host provides.
//!
//! On `wasm32` these are real imports resolved at instantiation. Elsewhere
//! they are stand-ins so the glue can be unit tested natively.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::state::PuzzleState;

    #[link(wasm_import_module = "puzzle")]
    extern "C" {
        /// Re-render from the 17-byte record at `state`.
        #[link_name = "updatePuzzleDisplay"]
        pub fn update_puzzle_display(state: *const PuzzleState);
    }

    #[link(wasm_import_module = "stderr")]
    extern "C" {
        /// Append `len` UTF-8 bytes at `ptr` to the diagnostics output.
        #[link_name = "writeToStderr"]
        pub fn write_to_stderr(ptr: *const u8, len: u32);
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::*;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use crate::state::PuzzleState;

    #[cfg(test)]
    use std::cell::RefCell;

    #[cfg(test)]
    thread_local! {
        pub(crate) static DISPLAYED: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
        pub(crate) static STDERR: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
    }

    pub(crate) unsafe fn update_puzzle_display(state: *const PuzzleState) {
        #[cfg(test)]
        {
            // SAFETY: callers pass a live record for the duration of the call.
            let state = unsafe { &*state };
            DISPLAYED.with(|displayed| displayed.borrow_mut().push(state.as_bytes().to_vec()));
        }
        #[cfg(not(test))]
        let _ = state;
    }

    pub(crate) unsafe fn write_to_stderr(ptr: *const u8, len: u32) {
        #[cfg(test)]
        {
            // SAFETY: callers pass a live buffer of `len` bytes.
            let bytes = unsafe { std::slice::from_raw_parts(ptr, len as usize) };
            STDERR.with(|stderr| stderr.borrow_mut().extend_from_slice(bytes));
        }
        #[cfg(not(test))]
        let _ = (ptr, len);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use native::*;

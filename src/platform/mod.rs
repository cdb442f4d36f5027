//! Platform abstraction layer
//!
//! The simulation needs exactly one thing from its host: the current size of
//! the render surface. It is read on every tick, never cached.

use crate::sim::Viewport;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WindowViewport;

/// Query for the live viewport size
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl<F> ViewportSource for F
where
    F: Fn() -> Viewport,
{
    fn viewport(&self) -> Viewport {
        self()
    }
}

/// A dimension reported by the host; a missing one is a fatal precondition
/// violation, never a zero-sized viewport.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn surface_dimension(value: Option<f64>) -> f32 {
    value.expect("viewport queried before render surface attached") as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_closure_source_is_read_live() {
        let size = Rc::new(Cell::new(Viewport::new(800.0, 600.0)));
        let source = {
            let size = size.clone();
            move || size.get()
        };

        assert_eq!(source.viewport(), Viewport::new(800.0, 600.0));
        size.set(Viewport::new(1024.0, 768.0));
        assert_eq!(source.viewport(), Viewport::new(1024.0, 768.0));
    }

    #[test]
    fn test_surface_dimension_passes_value_through() {
        assert_eq!(surface_dimension(Some(1280.0)), 1280.0);
    }

    #[test]
    #[should_panic(expected = "render surface attached")]
    fn test_missing_surface_dimension_halts() {
        surface_dimension(None);
    }
}

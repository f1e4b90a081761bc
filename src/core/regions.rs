//! Click listeners on the rectangles of the loaded floor plan.
//!
//! The browser side implements [`Region`] for SVG `<rect>` elements. Keeping
//! the bookkeeping here means the "release before rebind" rule is the same
//! code in the page and in tests.

use tracing::{debug, warn};

use super::error::FloorplanError;

/// Something a click listener can be attached to and detached from.
pub trait Region {
    /// The listener handed to every region of one floor plan.
    type Listener: ?Sized;

    fn listen(&self, listener: &Self::Listener) -> Result<(), FloorplanError>;

    fn unlisten(&self, listener: &Self::Listener) -> Result<(), FloorplanError>;
}

/// Regions of the current floor plan that have a listener attached.
#[derive(Debug)]
pub struct RegionBindings<R> {
    bound: Vec<R>,
}

impl<R> Default for RegionBindings<R> {
    fn default() -> Self {
        Self { bound: Vec::new() }
    }
}

impl<R: Region> RegionBindings<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    pub fn regions(&self) -> &[R] {
        &self.bound
    }

    /// Detaches the listener from every bound region.
    ///
    /// Keeps going when a region fails so nothing stays bound by accident;
    /// the first failure is returned after the set is cleared.
    pub fn release_all(&mut self, listener: &R::Listener) -> Result<usize, FloorplanError> {
        let mut first_err = None;
        let mut released = 0;
        for region in self.bound.drain(..) {
            match region.unlisten(listener) {
                Ok(()) => released += 1,
                Err(err) => {
                    warn!(error = %err, "failed to detach region listener");
                    first_err.get_or_insert(err);
                }
            }
        }
        if released > 0 {
            debug!(released, "released region listeners");
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(released),
        }
    }

    /// Releases the previous set, then attaches the listener to `regions`.
    ///
    /// On failure the regions bound so far stay tracked so a later
    /// [`release_all`](Self::release_all) still detaches them.
    pub fn bind_all(
        &mut self,
        regions: Vec<R>,
        listener: &R::Listener,
    ) -> Result<usize, FloorplanError> {
        self.release_all(listener)?;
        for region in regions {
            region.listen(listener)?;
            self.bound.push(region);
        }
        debug!(bound = self.bound.len(), "bound region listeners");
        Ok(self.bound.len())
    }
}

/// The floor plan currently shown: its root element and its bound regions.
///
/// Both are replaced together; releasing the plan drops the root as well.
#[derive(Debug)]
pub struct FloorPlanView<E, R> {
    root: Option<E>,
    bindings: RegionBindings<R>,
}

impl<E, R> Default for FloorPlanView<E, R> {
    fn default() -> Self {
        Self {
            root: None,
            bindings: RegionBindings::default(),
        }
    }
}

impl<E, R: Region> FloorPlanView<E, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root element of the plan on screen, if any.
    pub fn root(&self) -> Option<&E> {
        self.root.as_ref()
    }

    pub fn bindings(&self) -> &RegionBindings<R> {
        &self.bindings
    }

    /// Forgets the root and detaches every region.
    pub fn release(&mut self, listener: &R::Listener) -> Result<usize, FloorplanError> {
        self.root = None;
        self.bindings.release_all(listener)
    }

    /// Installs a freshly injected plan and binds its regions.
    pub fn show(
        &mut self,
        root: E,
        regions: Vec<R>,
        listener: &R::Listener,
    ) -> Result<usize, FloorplanError> {
        self.root = Some(root);
        self.bindings.bind_all(regions, listener)
    }
}

/// What a click on a region reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionClick {
    pub width: Option<String>,
}

impl RegionClick {
    pub fn new(width: Option<String>) -> Self {
        Self { width }
    }

    pub fn message(&self) -> String {
        format!(
            "Click on rect with width = {}",
            self.width.as_deref().unwrap_or("(none)")
        )
    }
}

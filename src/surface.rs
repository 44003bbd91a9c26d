use crate::ui::plot::PlotView;

// ---------------------------------------------------------------------------
// View surface – minimal stand-in for the host's dock-widget system
// ---------------------------------------------------------------------------

/// Where an attached panel should be docked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockRegion {
    Left,
    Right,
    Bottom,
}

/// The only thing the controller knows about the GUI host: it can attach a
/// plot view under a title in some region. The egui app stores the view for
/// rendering; tests use a recording stub.
pub trait ViewSurface {
    fn attach(&mut self, view: PlotView, title: &str, region: DockRegion);
}

/// Holds the currently attached plot panel, replacing any previous one.
#[derive(Default)]
pub struct PlotSlot {
    attached: Option<(PlotView, String)>,
}

impl PlotSlot {
    pub fn attached_mut(&mut self) -> Option<(&mut PlotView, &str)> {
        self.attached
            .as_mut()
            .map(|(view, title)| (view, title.as_str()))
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }
}

impl ViewSurface for PlotSlot {
    fn attach(&mut self, view: PlotView, title: &str, _region: DockRegion) {
        self.attached = Some((view, title.to_string()));
    }
}

use crate::detent::Detent;
use crate::geometry::{Axis, Edge, Point, ProposedSize, Size};
use crate::gesture::{DrawerState, Settle, nearest_detent};
use crate::position::{Anchor, Position};
use indexmap::IndexSet;
use std::fmt;

/// The panel is drawn this much larger than the container along its motion
/// axis, so its far edge never shows when dragged past full coverage.
pub const PANEL_OVERSCAN: f64 = 1.6;

/// Thickness of the default drag handle along the motion axis.
pub const HANDLE_THICKNESS: f64 = 20.0;

/// Detents in insertion order. Earlier entries win nearest-detent ties.
pub type DetentSet = IndexSet<Detent>;

/// Layout configuration for a single drawer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawerLayout {
    pub position: Position,
    /// Resting positions the drawer snaps to. Empty means no snapping.
    pub detents: DetentSet,
    /// Resting positions at which the drawer content accepts input.
    pub interactive_detents: DetentSet,
}

impl DrawerLayout {
    pub fn new(
        position: Position,
        detents: impl IntoIterator<Item = Detent>,
        interactive_detents: impl IntoIterator<Item = Detent>,
    ) -> Self {
        Self {
            position,
            detents: detents.into_iter().collect(),
            interactive_detents: interactive_detents.into_iter().collect(),
        }
    }

    /// Computes the visual traits of the drawer inside `container`.
    ///
    /// Every position goes through the same routine: the motion axis and the
    /// anchored end of that axis are the only things that differ.
    pub fn traits<'a>(&'a self, state: &DrawerState, container: Size) -> Traits<'a> {
        let axis = self.position.axis();
        let anchor = self.position.anchor();

        let extent = container.along(axis);
        let panel_extent = extent * PANEL_OVERSCAN;
        let exposed = extent * state.ratio();
        let offset = match anchor {
            Anchor::Start => exposed - panel_extent,
            Anchor::End => extent - exposed,
        };

        let is_content_disabled = !self.interactive_detents.contains(&state.detent());

        Traits {
            content_alignment: self.position.content_alignment(),
            content_size: ProposedSize::on_axis(axis, extent),
            panel_size: ProposedSize::on_axis(axis, panel_extent),
            panel_offset: Point::on_axis(axis, offset),
            handle_size: ProposedSize::on_axis(axis, HANDLE_THICKNESS),
            is_content_disabled,
            drag_region: if is_content_disabled {
                DragRegion::Panel
            } else {
                DragRegion::Handle
            },
            axis,
            anchor,
            extent,
            detents: &self.detents,
        }
    }
}

/// Where a drag gesture may begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragRegion {
    /// Anywhere on the panel; content is inert.
    Panel,
    /// Only the handle; content keeps its own gestures.
    Handle,
}

/// Visual and behavioral traits of a drawer for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Traits<'a> {
    pub content_alignment: Edge,
    pub content_size: ProposedSize,
    pub panel_size: ProposedSize,
    pub panel_offset: Point,
    pub handle_size: ProposedSize,
    pub is_content_disabled: bool,
    pub drag_region: DragRegion,
    axis: Axis,
    anchor: Anchor,
    extent: f64,
    detents: &'a DetentSet,
}

impl Traits<'_> {
    /// Follows an in-progress drag. `translation` is measured from where the
    /// gesture started.
    pub fn on_drag(&self, state: &mut DrawerState, translation: Point) {
        let adjusted = self.adjusted_ratio(state, translation);
        state.drag_to(adjusted);
    }

    /// Resolves the end of a drag to the nearest detent.
    ///
    /// The settled detent and the resting ratio are written immediately; the
    /// returned [`Settle`] describes the motion the host should animate.
    pub fn on_drag_end(&self, state: &mut DrawerState, translation: Point) -> Settle {
        let adjusted = self.adjusted_ratio(state, translation);
        let nearest = nearest_detent(adjusted, self.detents);

        log::debug!(
            "drag released at ratio {:.3}, resting at detent {}",
            adjusted,
            nearest
        );

        state.settle_at(nearest)
    }

    /// Settled ratio moved by the translation, before damping.
    fn adjusted_ratio(&self, state: &DrawerState, translation: Point) -> f64 {
        state.detent().value() - self.normalized(translation)
    }

    fn normalized(&self, translation: Point) -> f64 {
        if self.extent > 0.0 {
            self.anchor.drag_sign() * translation.along(self.axis) / self.extent
        } else {
            0.0
        }
    }
}

impl fmt::Display for Traits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let panel = self.panel_size.along(self.axis).unwrap_or_default();
        write!(
            f,
            "offset={} panel={:.1} align={} content={} drag={:?}",
            self.panel_offset,
            panel,
            self.content_alignment,
            if self.is_content_disabled {
                "disabled"
            } else {
                "enabled"
            },
            self.drag_region,
        )
    }
}

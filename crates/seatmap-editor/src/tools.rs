//! Tool and selection state.
//!
//! The active tool decides how a canvas click is interpreted. Selection is
//! orthogonal to the tool and holds at most one seat *or* one object. The
//! whole state is a plain serializable struct so hosts can persist or
//! mirror it.
//!
//! | Tool | Empty canvas | Seat | Object |
//! |------|--------------|------|--------|
//! | **Select** | nothing | select | select |
//! | **Add** | add seat, or armed object kind | nothing | nothing |
//! | **Delete** | nothing | remove | remove |

use seatmap_core::{ElementId, ObjectKind, Result, SeatMapError, SeatShape};
use seatmap_render::Hit;
use serde::{Deserialize, Serialize};

/// The active tool determines how input events are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Add,
    Delete,
}

/// Current selection: at most one seat or one object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    None,
    Seat(ElementId),
    Object(ElementId),
}

impl Selection {
    pub fn seat(&self) -> Option<ElementId> {
        match *self {
            Self::Seat(id) => Some(id),
            _ => None,
        }
    }

    pub fn object(&self) -> Option<ElementId> {
        match *self {
            Self::Object(id) => Some(id),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<ElementId> {
        match *self {
            Self::Seat(id) | Self::Object(id) => Some(id),
            Self::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// What a click should do to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Nothing,
    AddSeat,
    AddObject(ObjectKind),
    Select(Selection),
    RemoveSeat(ElementId),
    RemoveObject(ElementId),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    pub tool: ToolKind,
    pub selection: Selection,
    /// Object kind placed by the add tool instead of a seat. Stays armed
    /// across clicks until disarmed.
    pub armed: Option<ObjectKind>,
    /// Shape given to new and generated seats.
    pub shape: SeatShape,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tools. Leaving the add tool disarms any object kind.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool != ToolKind::Add {
            self.armed = None;
        }
        self.tool = tool;
    }

    /// Arm `kind` for placement, switching to the add tool. Arming the kind
    /// that is already armed disarms it.
    pub fn arm(&mut self, kind: ObjectKind) {
        if self.armed == Some(kind) {
            self.armed = None;
        } else {
            self.armed = Some(kind);
            self.tool = ToolKind::Add;
        }
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub fn select_seat(&mut self, id: ElementId) {
        self.selection = Selection::Seat(id);
    }

    pub fn select_object(&mut self, id: ElementId) {
        self.selection = Selection::Object(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Clear the selection if it points at `id`.
    pub fn forget(&mut self, id: ElementId) {
        if self.selection.id() == Some(id) {
            self.selection = Selection::None;
        }
    }

    /// Decide what a click (a press and release without a drag) does.
    /// `has_entry_types` is whether the catalog has at least one entry type.
    pub fn resolve_click(&self, hit: Option<Hit>, has_entry_types: bool) -> Result<ClickAction> {
        let action = match (self.tool, hit) {
            (ToolKind::Add, None) => match self.armed {
                Some(kind) => ClickAction::AddObject(kind),
                None if has_entry_types => ClickAction::AddSeat,
                None => return Err(SeatMapError::NoEntryTypes),
            },
            (ToolKind::Add, Some(_)) => ClickAction::Nothing,

            (ToolKind::Select, Some(Hit::Seat(id))) => ClickAction::Select(Selection::Seat(id)),
            (ToolKind::Select, Some(Hit::Object(id) | Hit::ResizeHandle { object: id, .. })) => {
                ClickAction::Select(Selection::Object(id))
            }
            (ToolKind::Select, None) => ClickAction::Nothing,

            (ToolKind::Delete, Some(Hit::Seat(id))) => ClickAction::RemoveSeat(id),
            (ToolKind::Delete, Some(Hit::Object(id) | Hit::ResizeHandle { object: id, .. })) => {
                ClickAction::RemoveObject(id)
            }
            (ToolKind::Delete, None) => ClickAction::Nothing,
        };
        Ok(action)
    }
}

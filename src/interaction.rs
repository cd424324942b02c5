//! Pointer interaction with the control primitives.
//!
//! A small state machine: hovering picks a target, pressing grabs it, moving
//! drags a handle or resizes a circle, releasing lets go. Every change to the
//! primitives is returned as a fresh snapshot for the host to recompute from.

use crate::angle::{HALF_TURN, QUARTER_TURN, SIXTEENTH_TURN};
use crate::defaults::{
    CIRCLE_HIT_MARGIN, HANDLE_RADIUS, MAX_CIRCLE_RADIUS, MIN_CIRCLE_RADIUS, SURFACE_HEIGHT, SURFACE_WIDTH,
};
use crate::design::DisplayOptions;
use crate::geometry::{angle, distance};
use crate::log::debug;
use crate::silhouette::ControlPrimitives;
use crate::types::{Circle, Point};

/// Draggable points, in hit-test priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Foot,
    LegCenter,
    BackCenter,
    Head,
}

impl Handle {
    pub const ALL: [Handle; 4] = [Handle::Foot, Handle::LegCenter, Handle::BackCenter, Handle::Head];

    pub fn position(self, primitives: &ControlPrimitives) -> Point {
        match self {
            Handle::Foot => primitives.foot_point,
            Handle::LegCenter => primitives.leg_circle.center,
            Handle::BackCenter => primitives.back_circle.center,
            Handle::Head => primitives.head_point,
        }
    }

    fn position_mut(self, primitives: &mut ControlPrimitives) -> &mut Point {
        match self {
            Handle::Foot => &mut primitives.foot_point,
            Handle::LegCenter => &mut primitives.leg_circle.center,
            Handle::BackCenter => &mut primitives.back_circle.center,
            Handle::Head => &mut primitives.head_point,
        }
    }
}

/// Resizable circles, in hit-test priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleRef {
    Leg,
    Back,
}

impl CircleRef {
    pub const ALL: [CircleRef; 2] = [CircleRef::Leg, CircleRef::Back];

    pub fn circle(self, primitives: &ControlPrimitives) -> Circle {
        match self {
            CircleRef::Leg => primitives.leg_circle,
            CircleRef::Back => primitives.back_circle,
        }
    }

    fn circle_mut(self, primitives: &mut ControlPrimitives) -> &mut Circle {
        match self {
            CircleRef::Leg => &mut primitives.leg_circle,
            CircleRef::Back => &mut primitives.back_circle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Handle(Handle),
    Circle(CircleRef),
}

/// Axis of a resize cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    NorthSouth,
    EastWest,
    NortheastSouthwest,
    NorthwestSoutheast,
}

impl ResizeDirection {
    /// Cursor axis for a pointer at `pointer` resizing a circle centred on
    /// `center`, snapped to the nearest eighth of a turn
    pub fn between(center: Point, pointer: Point) -> Self {
        let a = angle(center, pointer);
        let upward = a < 0.0;
        let a = a.abs();
        if (SIXTEENTH_TURN..QUARTER_TURN - SIXTEENTH_TURN).contains(&a) {
            if upward { Self::NortheastSouthwest } else { Self::NorthwestSoutheast }
        } else if (QUARTER_TURN - SIXTEENTH_TURN..QUARTER_TURN + SIXTEENTH_TURN).contains(&a) {
            Self::NorthSouth
        } else if (QUARTER_TURN + SIXTEENTH_TURN..HALF_TURN - SIXTEENTH_TURN).contains(&a) {
            if upward { Self::NorthwestSoutheast } else { Self::NortheastSouthwest }
        } else {
            Self::EastWest
        }
    }

    /// CSS cursor keyword
    pub fn css(self) -> &'static str {
        match self {
            Self::NorthSouth => "ns-resize",
            Self::EastWest => "ew-resize",
            Self::NortheastSouthwest => "nesw-resize",
            Self::NorthwestSoutheast => "nwse-resize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Grab,
    Grabbing,
    Resize(ResizeDirection),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle {
        hover: Option<HitTarget>,
    },
    Dragging {
        handle: Handle,
        /// Handle position when grabbed
        origin: Point,
        /// Pointer position when grabbed
        grab: Point,
    },
    Resizing {
        circle: CircleRef,
        original_radius: f64,
    },
}

#[derive(Debug, Clone)]
pub struct Interaction {
    primitives: ControlPrimitives,
    display: DisplayOptions,
    state: InteractionState,
    cursor: Cursor,
}

impl Interaction {
    pub fn new(primitives: ControlPrimitives, display: DisplayOptions) -> Self {
        Interaction {
            primitives,
            display,
            state: InteractionState::Idle { hover: None },
            cursor: Cursor::Default,
        }
    }

    pub fn primitives(&self) -> &ControlPrimitives {
        &self.primitives
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Hidden handles and circles stop being hit targets
    pub fn set_display(&mut self, display: DisplayOptions) {
        self.display = display;
    }

    /// Replace the primitives, e.g. with a preset. Ends any gesture.
    pub fn reset(&mut self, primitives: ControlPrimitives) {
        self.primitives = primitives;
        self.state = InteractionState::Idle { hover: None };
        self.cursor = Cursor::Default;
    }

    /// Handles first, then circle rims
    pub fn hit_test(&self, p: Point) -> Option<HitTarget> {
        if self.display.construction_handles {
            let hit = Handle::ALL
                .into_iter()
                .find(|h| distance(p, h.position(&self.primitives)) <= HANDLE_RADIUS);
            if let Some(handle) = hit {
                return Some(HitTarget::Handle(handle));
            }
        }
        if self.display.construction_lines {
            let hit = CircleRef::ALL.into_iter().find(|c| {
                let circle = c.circle(&self.primitives);
                (distance(p, circle.center) - circle.radius).abs() <= CIRCLE_HIT_MARGIN
            });
            if let Some(circle) = hit {
                return Some(HitTarget::Circle(circle));
            }
        }
        None
    }

    /// Grab whatever is under the pointer. Returns whether a gesture started.
    pub fn pointer_down(&mut self, p: Point) -> bool {
        if !matches!(self.state, InteractionState::Idle { .. }) {
            return false;
        }
        match self.hit_test(p) {
            Some(HitTarget::Handle(handle)) => {
                self.state = InteractionState::Dragging {
                    handle,
                    origin: handle.position(&self.primitives),
                    grab: p,
                };
                self.cursor = Cursor::Grabbing;
                debug!("drag {:?}", handle);
                true
            }
            Some(HitTarget::Circle(circle)) => {
                self.state = InteractionState::Resizing {
                    circle,
                    original_radius: circle.circle(&self.primitives).radius,
                };
                debug!("resize {:?}", circle);
                true
            }
            None => false,
        }
    }

    /// Drag, resize or update the hover target. Returns the new primitives
    /// when they changed.
    pub fn pointer_move(&mut self, p: Point) -> Option<ControlPrimitives> {
        match self.state {
            InteractionState::Dragging { handle, origin, grab } => {
                let moved = origin + (p - grab);
                *handle.position_mut(&mut self.primitives) = clamp_to_surface(moved);
                Some(self.primitives)
            }
            InteractionState::Resizing { circle, .. } => {
                let target = circle.circle_mut(&mut self.primitives);
                target.radius = clamp_radius(distance(p, target.center)).round();
                self.cursor = Cursor::Resize(ResizeDirection::between(target.center, p));
                Some(self.primitives)
            }
            InteractionState::Idle { .. } => {
                let hover = self.hit_test(p);
                self.cursor = match hover {
                    Some(HitTarget::Handle(_)) => Cursor::Grab,
                    Some(HitTarget::Circle(c)) => {
                        Cursor::Resize(ResizeDirection::between(c.circle(&self.primitives).center, p))
                    }
                    None => Cursor::Default,
                };
                self.state = InteractionState::Idle { hover };
                None
            }
        }
    }

    /// Let go of the current gesture, keeping its result
    pub fn pointer_up(&mut self) {
        self.state = InteractionState::Idle { hover: None };
        self.cursor = Cursor::Default;
    }

    /// The pointer left the surface: forget a hovered handle. Gestures in
    /// progress continue, the pointer is captured.
    pub fn pointer_out(&mut self) {
        if let InteractionState::Idle {
            hover: Some(HitTarget::Handle(_)),
        } = self.state
        {
            self.state = InteractionState::Idle { hover: None };
            self.cursor = Cursor::Default;
        }
    }
}

fn clamp_to_surface(p: Point) -> Point {
    Point::new(p.x.clamp(0.0, SURFACE_WIDTH), p.y.clamp(0.0, SURFACE_HEIGHT))
}

fn clamp_radius(radius: f64) -> f64 {
    radius.clamp(MIN_CIRCLE_RADIUS, MAX_CIRCLE_RADIUS)
}

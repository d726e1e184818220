use egui::{Context, Key, Pos2, Response};

/// Keyboard shortcuts the document understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

/// Input relevant to the drawing surface, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the surface
    PointerDown(Pos2),
    /// Pointer moved over the surface (with or without the button held)
    PointerMove(Pos2),
    /// Primary button released after a press on the surface
    PointerUp,
    /// Pointer left the surface
    PointerLeave,
    Shortcut(Shortcut),
}

/// Handles converting raw egui input into surface events
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pressed: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's egui input for the surface widget `canvas`.
    ///
    /// The pointer only counts as over the surface when no other layer (a window,
    /// a popup) covers the canvas at that position.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let canvas_rect = canvas.rect;
        let over_canvas = canvas.contains_pointer();
        // A focused text field owns the keyboard
        let shortcuts_enabled = !ctx.wants_keyboard_input();
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        ctx.input(|input| {
            let hover = input
                .pointer
                .hover_pos()
                .filter(|pos| over_canvas && canvas_rect.contains(*pos));

            if input.pointer.primary_pressed() {
                if let Some(pos) = hover {
                    events.push(InputEvent::PointerDown(to_local(pos)));
                    self.pressed = true;
                    // The press already placed the first point there
                    self.last_pointer_pos = Some(pos);
                }
            }

            match hover {
                Some(pos) => {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove(to_local(pos)));
                    }
                }
                None => {
                    if self.last_pointer_pos.is_some() {
                        events.push(InputEvent::PointerLeave);
                        self.pressed = false;
                    }
                }
            }
            self.last_pointer_pos = hover;

            if input.pointer.primary_released() && self.pressed {
                events.push(InputEvent::PointerUp);
                self.pressed = false;
            }

            if shortcuts_enabled && input.modifiers.command {
                if input.key_pressed(Key::Y)
                    || (input.modifiers.shift && input.key_pressed(Key::Z))
                {
                    events.push(InputEvent::Shortcut(Shortcut::Redo));
                } else if input.key_pressed(Key::Z) {
                    events.push(InputEvent::Shortcut(Shortcut::Undo));
                }
            }
        });

        events
    }
}

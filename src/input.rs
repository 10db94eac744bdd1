use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::navigation::NavigationEvent;

/// Maps a pixel position to `[-1, 1]` along the shorter viewport axis, with the
/// longer axis extended proportionally. `y` points up.
pub fn viewport_offset(px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
    let x = (2.0 * px / width - 1.0) * (width / height).max(1.0);
    let y = (1.0 - 2.0 * py / height) * (height / width).max(1.0);
    (x, y)
}

/// Collects window input between frames and turns it into navigation events.
pub struct InputState {
    cursor: Option<PhysicalPosition<f64>>,
    scroll_pixels_per_line: f64,
    scroll_accumulated: f64,
    pending: Vec<NavigationEvent>,
}

impl InputState {
    pub fn new(scroll_pixels_per_line: f64) -> Self {
        InputState {
            cursor: None,
            scroll_pixels_per_line,
            scroll_accumulated: 0.0,
            pending: Vec::new(),
        }
    }

    /// Returns `true` if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent, size: PhysicalSize<u32>) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(*position);
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.on_scroll(*delta);
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_input(*state, *button, size)
            }
            _ => false,
        }
    }

    /// Accumulates wheel motion in browser `deltaY` units: positive means the
    /// wheel moved toward the user.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => -(y as f64) * self.scroll_pixels_per_line,
            MouseScrollDelta::PixelDelta(position) => -position.y,
        };
        self.scroll_accumulated += delta_y;
    }

    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(position);
    }

    pub fn on_mouse_input(
        &mut self,
        state: ElementState,
        button: MouseButton,
        size: PhysicalSize<u32>,
    ) -> bool {
        if state != ElementState::Pressed || button != MouseButton::Left {
            return false;
        }
        let Some(cursor) = self.cursor else {
            return false;
        };
        if size.width == 0 || size.height == 0 {
            return false;
        }
        let (x, y) = viewport_offset(cursor.x, cursor.y, size.width as f64, size.height as f64);
        self.pending.push(NavigationEvent::Retarget { x, y });
        true
    }

    /// Everything gathered since the last call, scroll first.
    pub fn take_events(&mut self) -> Vec<NavigationEvent> {
        let mut events = Vec::with_capacity(self.pending.len() + 1);
        if self.scroll_accumulated != 0.0 {
            events.push(NavigationEvent::Scroll {
                delta_y: self.scroll_accumulated,
            });
            self.scroll_accumulated = 0.0;
        }
        events.append(&mut self.pending);
        events
    }
}

/// UI events the page logic understands.
/// The TypeScript layer pushes these; Rust applies them at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Scroll container moved: distance from the top and viewport height, in pixels.
    Scroll { top_px: f32, viewport_px: f32 },
    /// Navbar sound button.
    SetSound { enabled: bool },
    /// Navbar reduced-motion button.
    SetReducedMotion { enabled: bool },
}

/// Pending UI events between two frames.
///
/// Browsers fire many scroll events per frame and only the last position
/// matters, so consecutive scrolls collapse into one entry. Toggles are kept
/// in order because the runner reports each change.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        if let (InputEvent::Scroll { .. }, Some(last @ InputEvent::Scroll { .. })) =
            (event, self.pending.last_mut())
        {
            *last = event;
            return;
        }
        self.pending.push(event);
    }

    /// Take everything pushed since the last frame, oldest first.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(top_px: f32) -> InputEvent {
        InputEvent::Scroll { top_px, viewport_px: 800.0 }
    }

    #[test]
    fn consecutive_scrolls_collapse_to_latest() {
        let mut q = InputQueue::new();
        q.push(scroll(10.0));
        q.push(scroll(40.0));
        q.push(scroll(90.0));
        assert_eq!(q.drain(), vec![scroll(90.0)]);
        assert!(q.is_empty());
    }

    #[test]
    fn toggles_split_scroll_runs() {
        let mut q = InputQueue::new();
        q.push(scroll(10.0));
        q.push(InputEvent::SetSound { enabled: true });
        q.push(scroll(20.0));
        q.push(InputEvent::SetReducedMotion { enabled: true });
        q.push(InputEvent::SetReducedMotion { enabled: false });
        assert_eq!(q.len(), 5);
        assert_eq!(
            q.drain(),
            vec![
                scroll(10.0),
                InputEvent::SetSound { enabled: true },
                scroll(20.0),
                InputEvent::SetReducedMotion { enabled: true },
                InputEvent::SetReducedMotion { enabled: false },
            ]
        );
    }
}

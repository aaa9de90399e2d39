//! Pure carousel state: index arithmetic, drag gestures and resize bookkeeping
//!
//! Everything here is DOM-free so it can be exercised natively; the
//! controller's Actor feeds DOM events through [`CarouselState::handle`].

/// Direction of a one-slide move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    /// Wheel mapping: scrolling down advances, anything else retreats.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            Step::Forward
        } else {
            Step::Backward
        }
    }

    /// Swipe mapping. `None` when `|dx|` does not exceed the threshold.
    pub fn from_drag(dx: f64, threshold: f64) -> Option<Self> {
        if dx.abs() <= threshold {
            return None;
        }
        // Dragging the track left brings the next slide in
        Some(if dx < 0.0 { Step::Forward } else { Step::Backward })
    }
}

/// Events the carousel Actor reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    NextClicked,
    PrevClicked,
    WheelScrolled { delta_y: f64 },
    PointerPressed { x: f64 },
    PointerReleased { x: f64 },
    PointerCancelled,
    WindowResized,
}

/// What the view needs to lay the track out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub index: usize,
    pub layout_generation: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    index: usize,
    slide_count: usize,
    drag_threshold: f64,
    drag_origin: Option<f64>,
    layout_generation: u32,
}

impl CarouselState {
    /// Returns `None` for an empty carousel; there is nothing to index into.
    pub fn new(slide_count: usize, drag_threshold: f64) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            index: 0,
            slide_count,
            drag_threshold,
            drag_origin: None,
            layout_generation: 0,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn frame(&self) -> Frame {
        Frame {
            index: self.index,
            layout_generation: self.layout_generation,
        }
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.slide_count;
    }

    pub fn retreat(&mut self) {
        self.index = (self.index + self.slide_count - 1) % self.slide_count;
    }

    pub fn step(&mut self, step: Step) {
        match step {
            Step::Forward => self.advance(),
            Step::Backward => self.retreat(),
        }
    }

    pub fn press(&mut self, x: f64) {
        self.drag_origin = Some(x);
    }

    /// Finish a drag. Returns the step taken, if any.
    pub fn release(&mut self, x: f64) -> Option<Step> {
        let origin = self.drag_origin.take()?;
        let step = Step::from_drag(x - origin, self.drag_threshold)?;
        self.step(step);
        Some(step)
    }

    pub fn cancel_drag(&mut self) {
        self.drag_origin = None;
    }

    /// Force a re-layout without touching the index.
    pub fn relayout(&mut self) {
        self.layout_generation = self.layout_generation.wrapping_add(1);
    }

    pub fn handle(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::NextClicked => self.advance(),
            CarouselEvent::PrevClicked => self.retreat(),
            CarouselEvent::WheelScrolled { delta_y } => self.step(Step::from_wheel_delta(delta_y)),
            CarouselEvent::PointerPressed { x } => self.press(x),
            CarouselEvent::PointerReleased { x } => {
                self.release(x);
            }
            CarouselEvent::PointerCancelled => self.cancel_drag(),
            CarouselEvent::WindowResized => self.relayout(),
        }
    }
}

/// Active flag per slide; exactly one entry is `true` for a valid index.
pub fn active_flags(slide_count: usize, index: usize) -> Vec<bool> {
    (0..slide_count).map(|i| i == index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(count: usize) -> CarouselState {
        CarouselState::new(count, 30.0).unwrap()
    }

    fn drag(state: &mut CarouselState, from: f64, to: f64) {
        state.handle(CarouselEvent::PointerPressed { x: from });
        state.handle(CarouselEvent::PointerReleased { x: to });
    }

    #[test]
    fn test_empty_carousel_is_rejected() {
        assert!(CarouselState::new(0, 30.0).is_none());
    }

    #[test]
    fn test_wraps_in_both_directions() {
        let mut state = carousel(4);
        state.retreat();
        assert_eq!(state.index(), 3);
        state.advance();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut state = carousel(1);
        state.handle(CarouselEvent::NextClicked);
        state.handle(CarouselEvent::PrevClicked);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_exactly_one_active_slide_after_every_move() {
        let mut state = carousel(5);
        let events = [
            CarouselEvent::NextClicked,
            CarouselEvent::PrevClicked,
            CarouselEvent::PrevClicked,
            CarouselEvent::WheelScrolled { delta_y: 120.0 },
            CarouselEvent::WheelScrolled { delta_y: -120.0 },
            CarouselEvent::NextClicked,
        ];
        for event in events {
            state.handle(event);
            let flags = active_flags(5, state.frame().index);
            assert_eq!(flags.iter().filter(|active| **active).count(), 1);
            assert!(flags[state.index()]);
        }
    }

    #[test]
    fn test_next_then_prev_scenario() {
        let mut state = carousel(5);
        for _ in 0..3 {
            state.handle(CarouselEvent::NextClicked);
        }
        assert_eq!(state.index(), 3);
        assert!(active_flags(5, state.index())[3]);

        let mut visited = Vec::new();
        for _ in 0..5 {
            state.handle(CarouselEvent::PrevClicked);
            visited.push(state.index());
        }
        assert_eq!(visited, vec![2, 1, 0, 4, 3]);
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn test_wheel_direction() {
        let mut state = carousel(3);
        state.handle(CarouselEvent::WheelScrolled { delta_y: 53.0 });
        assert_eq!(state.index(), 1);
        state.handle(CarouselEvent::WheelScrolled { delta_y: -53.0 });
        assert_eq!(state.index(), 0);
        // Zero delta falls into the retreat branch
        state.handle(CarouselEvent::WheelScrolled { delta_y: 0.0 });
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_short_drag_is_ignored() {
        let mut state = carousel(5);
        drag(&mut state, 100.0, 75.0);
        drag(&mut state, 100.0, 130.0);
        assert_eq!(state.index(), 0);
        // Both releases consumed their origin
        assert_eq!(state.release(-500.0), None);
    }

    #[test]
    fn test_left_drag_advances_right_drag_retreats() {
        let mut state = carousel(5);
        drag(&mut state, 200.0, 120.0);
        assert_eq!(state.index(), 1);
        drag(&mut state, 120.0, 200.0);
        drag(&mut state, 120.0, 200.0);
        assert_eq!(state.index(), 4);
    }

    #[test]
    fn test_release_without_press_does_nothing() {
        let mut state = carousel(5);
        assert_eq!(state.release(0.0), None);
        state.handle(CarouselEvent::PointerReleased { x: -500.0 });
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_cancel_discards_origin() {
        let mut state = carousel(5);
        state.handle(CarouselEvent::PointerPressed { x: 300.0 });
        state.handle(CarouselEvent::PointerCancelled);
        state.handle(CarouselEvent::PointerReleased { x: 0.0 });
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_custom_threshold() {
        let mut state = CarouselState::new(3, 5.0).unwrap();
        state.press(50.0);
        assert_eq!(state.release(44.0), Some(Step::Forward));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_resize_keeps_index_and_bumps_generation() {
        let mut state = carousel(5);
        state.handle(CarouselEvent::NextClicked);
        let before = state.frame();
        state.handle(CarouselEvent::WindowResized);
        let after = state.frame();
        assert_eq!(after.index, before.index);
        assert_ne!(after.layout_generation, before.layout_generation);
    }

    #[test]
    fn test_drag_threshold_is_exclusive() {
        assert_eq!(Step::from_drag(30.0, 30.0), None);
        assert_eq!(Step::from_drag(-30.0, 30.0), None);
        assert_eq!(Step::from_drag(-30.5, 30.0), Some(Step::Forward));
        assert_eq!(Step::from_drag(31.0, 30.0), Some(Step::Backward));
    }
}

use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselState {
    Running,
    Paused,
}

/// What the view layer has to do with its timers after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselCommand {
    /// Start the rotation interval.
    Start,
    /// Cancel both the rotation interval and any pending resume.
    Stop,
    /// Cancel the rotation interval and call back
    /// [`RotationCarousel::cooldown_elapsed`] with `generation` later.
    ScheduleResume { generation: u64, after_ms: u32 },
    Nothing,
}

/// Auto-rotating index over `len` items, paused by hover and by manual
/// selection, and only ever running while visible.
#[derive(Clone, Debug)]
pub struct RotationCarousel {
    len: usize,
    index: usize,
    state: CarouselState,
    visible: bool,
    hovered: bool,
    cooldown_ms: u32,
    generation: u64,
    pending_resume: Option<u64>,
}

impl RotationCarousel {
    pub fn new(len: usize, cooldown_ms: u32) -> Self {
        Self {
            len,
            index: 0,
            state: CarouselState::Paused,
            visible: false,
            hovered: false,
            cooldown_ms,
            generation: 0,
            pending_resume: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    fn eligible(&self) -> bool {
        self.len > 0 && self.visible && !self.hovered
    }

    fn resume(&mut self) -> CarouselCommand {
        if self.state == CarouselState::Running || !self.eligible() {
            return CarouselCommand::Nothing;
        }
        self.pending_resume = None;
        self.state = CarouselState::Running;
        CarouselCommand::Start
    }

    fn pause(&mut self) -> CarouselCommand {
        self.state = CarouselState::Paused;
        CarouselCommand::Stop
    }

    pub fn set_visible(&mut self, visible: bool) -> CarouselCommand {
        if self.visible == visible {
            return CarouselCommand::Nothing;
        }
        self.visible = visible;
        if visible {
            if self.pending_resume.is_some() {
                return CarouselCommand::Nothing;
            }
            self.resume()
        } else {
            self.pending_resume = None;
            self.pause()
        }
    }

    pub fn pointer_enter(&mut self) -> CarouselCommand {
        self.hovered = true;
        if self.state == CarouselState::Running {
            self.pause()
        } else {
            CarouselCommand::Nothing
        }
    }

    pub fn pointer_leave(&mut self) -> CarouselCommand {
        self.hovered = false;
        self.resume()
    }

    /// Jumps to `index` (wrapped), pauses, and asks for a resume after the
    /// cool-down. A later selection supersedes an earlier pending resume.
    pub fn select_index(&mut self, index: usize) -> CarouselCommand {
        if self.len == 0 {
            return CarouselCommand::Nothing;
        }
        self.index = index % self.len;
        self.state = CarouselState::Paused;
        self.generation += 1;
        self.pending_resume = Some(self.generation);
        debug!("Carousel selected {}, resuming in {}ms", self.index, self.cooldown_ms);
        CarouselCommand::ScheduleResume {
            generation: self.generation,
            after_ms: self.cooldown_ms,
        }
    }

    pub fn cooldown_elapsed(&mut self, generation: u64) -> CarouselCommand {
        if self.pending_resume != Some(generation) {
            return CarouselCommand::Nothing;
        }
        self.pending_resume = None;
        self.resume()
    }

    /// Advances one item if running. Returns the index afterwards.
    pub fn tick(&mut self) -> usize {
        if self.state == CarouselState::Running && self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

/// Step-through list with a progress bar that fills before each advance.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureProgress {
    len: usize,
    current: usize,
    progress: f64,
    step: f64,
}

impl FeatureProgress {
    pub fn new(len: usize, autoplay_ms: u32, tick_ms: u32) -> Self {
        let ticks = (autoplay_ms as f64 / tick_ms as f64).max(1.0);
        Self {
            len,
            current: 0,
            progress: 0.0,
            step: 100.0 / ticks,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Percentage in `0.0..=100.0`.
    pub fn progress(&self) -> f64 {
        self.progress.min(100.0)
    }

    pub fn tick(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.progress < 100.0 {
            self.progress += self.step;
        } else {
            self.current = (self.current + 1) % self.len;
            self.progress = 0.0;
        }
    }

    pub fn select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.current = index % self.len;
        self.progress = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_carousel(len: usize) -> RotationCarousel {
        let mut carousel = RotationCarousel::new(len, 4_000);
        assert_eq!(carousel.set_visible(true), CarouselCommand::Start);
        carousel
    }

    #[test]
    fn starts_paused_until_visible() {
        let mut carousel = RotationCarousel::new(4, 4_000);
        assert_eq!(carousel.state(), CarouselState::Paused);
        assert_eq!(carousel.tick(), 0);

        assert_eq!(carousel.set_visible(true), CarouselCommand::Start);
        assert_eq!(carousel.state(), CarouselState::Running);
        assert_eq!(carousel.tick(), 1);
    }

    #[test]
    fn selection_pauses_then_resumes_after_cooldown() {
        let mut carousel = visible_carousel(4);

        let command = carousel.select_index(2);
        assert_eq!(
            command,
            CarouselCommand::ScheduleResume {
                generation: 1,
                after_ms: 4_000
            }
        );
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.state(), CarouselState::Paused);
        assert_eq!(carousel.tick(), 2);

        assert_eq!(carousel.cooldown_elapsed(1), CarouselCommand::Start);
        assert_eq!(carousel.state(), CarouselState::Running);
        assert_eq!(carousel.tick(), 3);
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.tick(), 1);
    }

    #[test]
    fn newer_selection_supersedes_pending_resume() {
        let mut carousel = visible_carousel(4);
        carousel.select_index(1);
        carousel.select_index(3);

        assert_eq!(carousel.cooldown_elapsed(1), CarouselCommand::Nothing);
        assert_eq!(carousel.state(), CarouselState::Paused);
        assert_eq!(carousel.cooldown_elapsed(2), CarouselCommand::Start);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn cooldown_does_not_resume_when_hidden() {
        let mut carousel = visible_carousel(4);
        carousel.select_index(2);
        assert_eq!(carousel.set_visible(false), CarouselCommand::Stop);

        assert_eq!(carousel.cooldown_elapsed(1), CarouselCommand::Nothing);
        assert_eq!(carousel.state(), CarouselState::Paused);

        assert_eq!(carousel.set_visible(true), CarouselCommand::Start);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut carousel = visible_carousel(3);
        assert_eq!(carousel.pointer_enter(), CarouselCommand::Stop);
        assert_eq!(carousel.tick(), 0);

        assert_eq!(carousel.pointer_leave(), CarouselCommand::Start);
        assert_eq!(carousel.tick(), 1);
    }

    #[test]
    fn cooldown_while_hovered_waits_for_pointer_leave() {
        let mut carousel = visible_carousel(3);
        carousel.pointer_enter();
        carousel.select_index(1);

        assert_eq!(carousel.cooldown_elapsed(1), CarouselCommand::Nothing);
        assert_eq!(carousel.pointer_leave(), CarouselCommand::Start);
    }

    #[test]
    fn selection_wraps_modulo_len() {
        let mut carousel = visible_carousel(4);
        carousel.select_index(6);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_never_runs() {
        let mut carousel = RotationCarousel::new(0, 4_000);
        assert_eq!(carousel.set_visible(true), CarouselCommand::Nothing);
        assert_eq!(carousel.select_index(1), CarouselCommand::Nothing);
        assert_eq!(carousel.tick(), 0);
    }

    #[test]
    fn feature_progress_fills_then_advances() {
        let mut steps = FeatureProgress::new(3, 4_000, 100);
        for _ in 0..40 {
            steps.tick();
        }
        assert_eq!(steps.progress(), 100.0);
        assert_eq!(steps.current(), 0);

        steps.tick();
        assert_eq!(steps.current(), 1);
        assert_eq!(steps.progress(), 0.0);
    }

    #[test]
    fn feature_progress_wraps_and_select_resets() {
        let mut steps = FeatureProgress::new(2, 200, 100);
        for _ in 0..3 {
            steps.tick();
        }
        assert_eq!(steps.current(), 1);
        for _ in 0..3 {
            steps.tick();
        }
        assert_eq!(steps.current(), 0);

        steps.tick();
        steps.select(1);
        assert_eq!(steps.current(), 1);
        assert_eq!(steps.progress(), 0.0);
    }
}

use crate::element::binding::RenderBinding;
use crate::element::compose::{ComposedElement, compose_element};
use crate::element::model::Element;
use crate::foundation::error::ReelResult;
use crate::scene::graph::SceneGraph;
use crate::timeline::readout::PlaybackStatus;

/// Whether [`Timeline::tick`] advances time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayState {
    /// Time only moves through explicit seeks.
    #[default]
    Paused,
    /// Each tick advances time by `delta * play_speed`.
    Playing,
}

/// Elements sharing one time axis, bound to a scene.
///
/// `0 <= current_time <= max_duration` holds after every operation. Every operation that moves
/// time re-applies all elements to the scene.
#[derive(Debug)]
pub struct Timeline<S> {
    elements: Vec<Element>,
    bindings: Vec<RenderBinding>,
    scene: S,
    current_time: f64,
    state: PlayState,
    play_speed: f64,
}

impl<S: SceneGraph> Timeline<S> {
    /// Empty timeline driving `scene`.
    pub fn new(scene: S) -> Self {
        Self {
            elements: Vec::new(),
            bindings: Vec::new(),
            scene,
            current_time: 0.0,
            state: PlayState::Paused,
            play_speed: 1.0,
        }
    }

    /// Replace all elements, rebuild the scene and rewind to `0`.
    pub fn set_elements(&mut self, elements: Vec<Element>) -> ReelResult<()> {
        self.scene.reset();
        self.bindings.clear();
        self.elements.clear();
        self.current_time = 0.0;
        for element in elements {
            self.add_element(element)?;
        }
        tracing::debug!(
            elements = self.elements.len(),
            max_duration = self.max_duration(),
            "timeline elements replaced"
        );
        Ok(())
    }

    /// Bind one more element and show it at the current time.
    pub fn add_element(&mut self, element: Element) -> ReelResult<()> {
        let binding = RenderBinding::bind(&element, &mut self.scene)?;
        binding.apply(&element, &mut self.scene, self.current_time);
        self.bindings.push(binding);
        self.elements.push(element);
        Ok(())
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The driven scene.
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Consume the timeline and return its scene.
    pub fn into_scene(self) -> S {
        self.scene
    }

    /// Longest element duration; `0` without elements.
    pub fn max_duration(&self) -> f64 {
        self.elements
            .iter()
            .map(Element::duration)
            .fold(0.0, f64::max)
    }

    /// Current time in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// `current_time / max_duration`, or `0` for an empty timeline.
    pub fn progress(&self) -> f64 {
        let max = self.max_duration();
        if max > 0.0 { self.current_time / max } else { 0.0 }
    }

    /// Current play state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// `true` while playing.
    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Multiplier applied to tick deltas; negative plays backwards.
    pub fn play_speed(&self) -> f64 {
        self.play_speed
    }

    /// `true` at time `0`.
    pub fn at_start(&self) -> bool {
        self.current_time <= 0.0
    }

    /// `true` at `max_duration`.
    pub fn at_end(&self) -> bool {
        self.current_time >= self.max_duration()
    }

    /// Advance by `delta * play_speed` while playing; pauses on reaching the end it is heading to.
    pub fn tick(&mut self, delta: f64) {
        if self.state != PlayState::Playing {
            return;
        }
        self.set_time(self.current_time + delta * self.play_speed);
        let hit_start = self.play_speed < 0.0 && self.at_start();
        let hit_end = self.play_speed > 0.0 && self.at_end();
        if hit_start || hit_end {
            self.state = PlayState::Paused;
            tracing::debug!(time = self.current_time, "playback reached the end of range");
        }
    }

    /// Jump to `progress * max_duration` and pause.
    pub fn seek_to_progress(&mut self, progress: f64) {
        self.state = PlayState::Paused;
        self.set_time(progress * self.max_duration());
        tracing::debug!(progress, time = self.current_time, "seek");
    }

    /// Move by `frames / fps` seconds without touching the play state.
    ///
    /// Ignored unless `fps` is positive.
    pub fn skip_frames(&mut self, frames: i64, fps: f64) {
        if fps.is_nan() || fps <= 0.0 {
            return;
        }
        self.set_time(self.current_time + frames as f64 / fps);
    }

    /// [`Timeline::skip_frames`], then pause.
    pub fn step_frames(&mut self, frames: i64, fps: f64) {
        self.skip_frames(frames, fps);
        self.pause();
    }

    /// Jump to `0`.
    pub fn set_to_start(&mut self) {
        self.set_time(0.0);
    }

    /// Jump to `max_duration`.
    pub fn set_to_end(&mut self) {
        self.set_time(self.max_duration());
    }

    /// Start playing at the current speed, wrapping around when parked at the far end.
    pub fn play(&mut self) {
        self.play_with_speed(self.play_speed);
    }

    /// Set the speed and start playing.
    ///
    /// Playing forwards from the end restarts at `0`; playing backwards from the start jumps to
    /// the end first.
    pub fn play_with_speed(&mut self, speed: f64) {
        self.play_speed = speed;
        if speed > 0.0 && self.at_end() {
            self.set_to_start();
        } else if speed < 0.0 && self.at_start() {
            self.set_to_end();
        }
        self.state = PlayState::Playing;
        tracing::debug!(speed, time = self.current_time, "play");
    }

    /// Stop advancing on tick.
    pub fn pause(&mut self) {
        if self.state == PlayState::Playing {
            tracing::debug!(time = self.current_time, "pause");
        }
        self.state = PlayState::Paused;
    }

    /// Set the speed without changing the play state.
    pub fn set_play_speed(&mut self, speed: f64) {
        self.play_speed = speed;
    }

    /// Readout of the current position, counting frames at `fps`.
    pub fn status(&self, fps: f64) -> PlaybackStatus {
        PlaybackStatus::new(self.current_time, self.max_duration(), fps)
    }

    /// Compose every element at `t` without touching the scene or the current time.
    pub fn sample(&self, t: f64) -> Vec<ComposedElement> {
        self.elements.iter().map(|e| compose_element(e, t)).collect()
    }

    /// Clamp `t`, make it current and apply all elements.
    pub(crate) fn set_time(&mut self, t: f64) {
        let t = if t.is_nan() { 0.0 } else { t };
        self.current_time = t.clamp(0.0, self.max_duration());
        self.apply_current();
    }

    fn apply_current(&mut self) {
        for (element, binding) in self.elements.iter().zip(&self.bindings) {
            binding.apply(element, &mut self.scene, self.current_time);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/playback.rs"]
mod tests;

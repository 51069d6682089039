use crate::config::{self, DrawerConfig};
use crate::events::AppEvent;
use crate::host::drag::DragTracker;
use crate::host::settle::SettleAnimation;
use drawer_core::{DrawerLayout, DrawerState, Size, Traits};
use std::time::{Duration, Instant};

/// A headless drawer: owns the live state and feeds events through the engine.
pub struct Host {
    config: DrawerConfig,
    layout: DrawerLayout,
    state: DrawerState,
    container: Size,
    animation: Option<SettleAnimation>,
    drag: DragTracker,
    last_tick: Option<Instant>,
    last_frame: Option<String>,
}

impl Host {
    pub fn new(config: DrawerConfig) -> Self {
        Self {
            layout: config.layout(),
            state: DrawerState::new(config.initial_detent),
            container: config.container,
            animation: None,
            drag: DragTracker::default(),
            last_tick: None,
            last_frame: None,
            config,
        }
    }

    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    pub fn layout(&self) -> &DrawerLayout {
        &self.layout
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn is_settling(&self) -> bool {
        self.animation.is_some()
    }

    /// State as it should be drawn right now, including a settle in flight.
    pub fn presented(&self) -> DrawerState {
        match &self.animation {
            Some(anim) => self.state.presented_at(anim.value()),
            None => self.state,
        }
    }

    pub fn frame(&self) -> Traits<'_> {
        self.layout.traits(&self.presented(), self.container)
    }

    /// Applies one event. Returns whether the drawer needs redrawing.
    pub fn update(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Drag(translation) => {
                let Some(translation) = self.drag.moved(translation) else {
                    return false;
                };
                self.animation = None;
                let traits = self.layout.traits(&self.state, self.container);
                traits.on_drag(&mut self.state, translation);
                true
            }
            AppEvent::DragEnd(translation) => {
                let Some(translation) = self.drag.ended(translation) else {
                    return false;
                };
                let traits = self.layout.traits(&self.state, self.container);
                let settle = traits.on_drag_end(&mut self.state, translation);
                log::info!("Drawer resting at detent {}", settle.detent);

                self.animation = (!settle.is_noop())
                    .then(|| SettleAnimation::new(&settle, &self.config.settle))
                    .filter(|anim| !anim.is_finished());
                self.last_tick = None;
                true
            }
            AppEvent::Resize(size) => {
                let changed = self.container != size;
                self.container = size;
                changed
            }
            AppEvent::Reposition(position) => {
                let changed = self.layout.position != position;
                self.layout.position = position;
                changed
            }
            AppEvent::Tick => {
                let now = Instant::now();
                let dt = self
                    .last_tick
                    .map(|last| now.duration_since(last))
                    .unwrap_or_else(|| self.config.settle.frame_interval());
                self.last_tick = Some(now);
                self.advance(dt)
            }
            AppEvent::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.apply_config(new_config);
                    log::info!("Configuration reloaded");
                    true
                }
                Err(e) => {
                    log::error!("Failed to reload config: {}", e);
                    false
                }
            },
        }
    }

    /// Steps a running settle animation by `dt`.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(anim) = &mut self.animation else {
            return false;
        };
        anim.advance(dt);
        if anim.is_finished() {
            self.animation = None;
            self.last_tick = None;
        }
        true
    }

    /// Swaps in a new configuration. The live container size and the settled
    /// detent carry over.
    pub fn apply_config(&mut self, config: DrawerConfig) {
        self.layout = config.layout();
        self.config = config;
    }

    /// Logs the current frame if it differs from the last one logged.
    pub fn render(&mut self) {
        let frame = self.frame().to_string();
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return;
        }
        log::debug!(
            "ratio={:.3} detent={} {}",
            self.presented().ratio(),
            self.state.detent(),
            frame
        );
        self.last_frame = Some(frame);
    }
}

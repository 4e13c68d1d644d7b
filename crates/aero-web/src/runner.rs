use aero_engine::{
    FlightScene, FrameBuffer, FrameHeader, InputEvent, InputQueue, LoadedModel, ModelDescriptor,
    Posable, Pose, Preloader, ProceduralAircraft, ProtocolLayout, SiteConfig, SiteEvent,
    SiteFlags, SiteManifest, SoundCue,
};

/// Owns all page state and wires up the frame loop.
///
/// The exported wasm functions keep one `SiteRunner` in a `thread_local!`,
/// because wasm-bindgen cannot export the runner's generic internals directly.
pub struct SiteRunner {
    config: SiteConfig,
    flags: SiteFlags,
    input: InputQueue,
    preloader: Preloader,
    scene: FlightScene<Box<dyn Posable>>,
    manifest: SiteManifest,
    frame: FrameBuffer,
    /// Events raised during the current frame.
    events: Vec<SiteEvent>,
    /// Sounds the renderer should be playing after the current frame.
    cues: Vec<SoundCue>,
    initialized: bool,
}

impl SiteRunner {
    pub fn new(config: SiteConfig) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        let aircraft: Box<dyn Posable> = Box::new(ProceduralAircraft::new());

        Self {
            flags: SiteFlags::default(),
            input: InputQueue::new(),
            preloader: Preloader::from_config(&config),
            scene: FlightScene::new(&config, aircraft),
            manifest: SiteManifest::default(),
            frame: FrameBuffer::new(layout),
            events: Vec::with_capacity(config.max_events),
            cues: Vec::new(),
            config,
            initialized: false,
        }
    }

    /// Initialize the page. Call once after construction.
    pub fn init(&mut self) {
        self.initialized = true;
        self.publish();
        log::debug!(
            "frame buffer: {} floats, {} events max",
            self.frame.layout().buffer_total_floats,
            self.config.max_events
        );
    }

    /// Parse the asset manifest. A model entry replaces the procedural aircraft;
    /// a malformed manifest is logged and ignored.
    pub fn load_manifest(&mut self, json: &str) {
        match SiteManifest::from_json(json) {
            Ok(manifest) => {
                if let Some(entry) = &manifest.model {
                    log::info!("flying model {}", entry.path);
                    self.scene.replace_object(Box::new(LoadedModel::new(entry.clone())));
                }
                self.manifest = manifest;
            }
            Err(e) => log::error!("bad site manifest, keeping defaults: {}", e),
        }
    }

    /// Push a UI event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply input, advance preloader or scene, publish the frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.events.clear();

        for event in self.input.drain() {
            self.apply_input(event);
        }

        if self.flags.loading {
            let tick = self.preloader.tick(dt);
            if tick.progress_changed {
                self.events.push(SiteEvent::preload_progress(self.preloader.progress()));
            }
            if tick.completed {
                self.flags.loading = false;
                self.scene.mount();
                self.events.push(SiteEvent::preload_complete());
                log::info!("preloader finished, scene mounted");
            }
        } else {
            let tick = self.scene.tick(dt, self.flags.reduced_motion);
            if let Some((current, previous)) = tick.section_change {
                self.events.push(SiteEvent::section_changed(current.index(), previous.index()));
            }
        }

        self.cues = self.manifest.cues(self.flags.sound_enabled, &self.events);
        self.publish();
    }

    fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Scroll { top_px, viewport_px } => {
                self.scene.scroll_mut().set_scroll(top_px, viewport_px);
            }
            InputEvent::SetSound { enabled } => {
                if self.flags.sound_enabled != enabled {
                    self.flags.sound_enabled = enabled;
                    self.events.push(SiteEvent::sound_toggled(enabled));
                    log::info!("sound {}", if enabled { "on" } else { "off" });
                }
            }
            InputEvent::SetReducedMotion { enabled } => {
                if self.flags.reduced_motion != enabled {
                    log::info!("reduced motion {}", if enabled { "on" } else { "off" });
                }
                self.flags.reduced_motion = enabled;
            }
        }
    }

    fn publish(&mut self) {
        let header = FrameHeader {
            flags: self.flags.bits(),
            preload_progress: self.preloader.progress(),
            scroll_offset: self.scene.scroll().offset(),
            section: self.scene.section().index(),
            nav_scrolled: self.scene.nav_scrolled(),
            elapsed: self.scene.elapsed(),
        };
        let object = self.scene.object();
        self.frame
            .publish(&header, &object.pose(), &object.transform(), &self.events);
    }

    // ---- State accessors ----

    pub fn flags(&self) -> SiteFlags {
        self.flags
    }

    pub fn preload_progress(&self) -> u32 {
        self.preloader.progress()
    }

    /// Pose most recently handed to the renderable.
    pub fn pose(&self) -> Pose {
        self.scene.object().pose()
    }

    pub fn events(&self) -> &[SiteEvent] {
        &self.events
    }

    pub fn model_descriptor(&self) -> ModelDescriptor {
        self.scene.object().descriptor()
    }

    pub fn sound_cues(&self) -> &[SoundCue] {
        &self.cues
    }

    /// Sounds to play this frame as a JSON array.
    pub fn sounds_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.cues)
    }

    /// Renderer build instructions as JSON.
    pub fn model_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.model_descriptor())
    }

    // ---- Frame buffer accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn frame(&self) -> &[f32] {
        self.frame.as_slice()
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn max_events(&self) -> u32 {
        self.frame.layout().max_events as u32
    }
}

impl Default for SiteRunner {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

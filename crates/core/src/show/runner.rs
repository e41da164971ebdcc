// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stages a show on a hub and runs its script

use super::config::{LyricsConfig, RigKind, SendStep, ShowConfig, Step, TriggerStep};
use crate::clock::{Clock, SystemClock};
use crate::cue::{CueError, ShowCue};
use crate::display::{BigText, Display, DisplayError, LyricsCard, Visual};
use crate::event::{Event, EventKind};
use crate::hub::{EventHub, HubError, Node};
use crate::nodes::{Artist, LightingRig, SmokeMachine, SoundRack};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Origin used for events the operator sends through the hub
pub const HUB_ORIGIN: &str = "HUB";

#[derive(Debug, Error)]
pub enum ShowError {
    #[error("invalid cue: {0}")]
    Cue(#[from] CueError),
    #[error("hub error: {0}")]
    Hub(#[from] HubError),
    #[error("no node named {0:?} on stage")]
    UnknownNode(String),
    #[error("node {0:?} cannot trigger events")]
    NotAnOriginator(String),
}

/// What a script step achieved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Broadcast { delivered: usize },
    Delivered { target: String },
    /// The target was not on stage; nothing was delivered
    Missed { target: String },
}

/// A staged show: validated cue plus the rig registered on a hub
pub struct Show<C: Clock = SystemClock> {
    hub: EventHub<C>,
    cue: ShowCue,
    lyrics: Option<LyricsConfig>,
    artists: HashMap<String, Arc<Artist>>,
}

impl Show<SystemClock> {
    pub fn stage(config: &ShowConfig, monitor: Arc<dyn Display>) -> Result<Self, ShowError> {
        Self::stage_with_clock(config, monitor, SystemClock)
    }
}

impl<C: Clock> Show<C> {
    /// Validate the cue and register every rig entry. Reactions are drawn
    /// on `monitor`.
    pub fn stage_with_clock(
        config: &ShowConfig,
        monitor: Arc<dyn Display>,
        clock: C,
    ) -> Result<Self, ShowError> {
        let cue = config.cue.build()?;
        let hub = EventHub::with_clock(config.hub, clock);
        let mut artists = HashMap::new();

        for entry in &config.rig {
            let node: Arc<dyn Node> = match entry.kind {
                RigKind::Artist => {
                    let artist = Arc::new(Artist::new(entry.name.clone(), Arc::clone(&monitor)));
                    artists.insert(entry.name.clone(), Arc::clone(&artist));
                    artist
                }
                RigKind::Lighting => {
                    let mut rig = LightingRig::new(entry.name.clone(), Arc::clone(&monitor));
                    if !cue.light_preset().is_empty() {
                        rig = rig.with_chorus_preset(cue.light_preset());
                    }
                    Arc::new(rig)
                }
                RigKind::Smoke => Arc::new(SmokeMachine::new(entry.name.clone(), Arc::clone(&monitor))),
                RigKind::Sound => Arc::new(SoundRack::new(entry.name.clone(), Arc::clone(&monitor))),
            };
            hub.register(node)?;
        }

        tracing::info!(cue = cue.name(), nodes = hub.len(), "show staged");
        Ok(Self {
            hub,
            cue,
            lyrics: config.lyrics.clone(),
            artists,
        })
    }

    pub fn cue(&self) -> &ShowCue {
        &self.cue
    }

    pub fn hub(&self) -> &EventHub<C> {
        &self.hub
    }

    pub fn run_step(&self, step: &Step) -> Result<StepOutcome, ShowError> {
        match step {
            Step::Trigger(step) => self.trigger(step),
            Step::Send(step) => self.send(step),
        }
    }

    /// Banner of the cue's screen text on the LED wall then the projector,
    /// and the lyrics card (if any) on the projector then the LED wall.
    pub fn present_visuals(
        &self,
        led: Arc<dyn Display>,
        projector: Arc<dyn Display>,
    ) -> Result<(), DisplayError> {
        let banner = BigText::new(Arc::clone(&led), self.cue.screen_text());
        banner.show()?;
        banner.show_on(projector.as_ref())?;

        if let Some(lyrics) = &self.lyrics {
            let card = LyricsCard::new(
                Arc::clone(&projector),
                lyrics.title.clone(),
                lyrics.lines.clone(),
            );
            card.show()?;
            card.show_on(led.as_ref())?;
        }
        Ok(())
    }

    fn trigger(&self, step: &TriggerStep) -> Result<StepOutcome, ShowError> {
        let Some(artist) = self.artists.get(&step.trigger) else {
            if self.hub.contains(&step.trigger) {
                return Err(ShowError::NotAnOriginator(step.trigger.clone()));
            }
            return Err(ShowError::UnknownNode(step.trigger.clone()));
        };
        let delivered = artist.trigger(step.kind.clone(), step.payload.clone())?;
        Ok(StepOutcome::Broadcast { delivered })
    }

    fn send(&self, step: &SendStep) -> Result<StepOutcome, ShowError> {
        let payload = match (&step.payload, &step.kind) {
            (Some(payload), _) => payload.clone(),
            (None, EventKind::SmokeNow) => format!("{}%", self.cue.smoke_level_pct()),
            (None, _) => String::new(),
        };
        let event = Event::new(step.kind.clone(), HUB_ORIGIN, payload);

        match self.hub.send(&step.send, event) {
            Ok(()) => Ok(StepOutcome::Delivered {
                target: step.send.clone(),
            }),
            Err(HubError::NodeNotFound(target)) => Ok(StepOutcome::Missed { target }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

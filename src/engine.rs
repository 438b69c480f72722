use core::convert::Infallible;
use core::iter;

use embedded_hal::delay::DelayNs;
use log::info;
use smart_leds::{SmartLedsWrite, brightness};

use crate::audio::{AudioCalibration, SAMPLE_WINDOW, SampleSource};
use crate::color::{BLACK, Rgb};
use crate::command_processor::{CommandProcessor, ProtocolStats};
use crate::config::EngineConfig;
use crate::effect::{EffectId, EffectRegistry, RenderContext};
use crate::error::EngineError;
use crate::pacer::{Pacer, PacingPolicy};
use crate::params::UserParameters;
use crate::transport::{LinkState, Transport};

/// Error type of an engine built from the given peripherals
pub type EngineFault<T, S, D> = EngineError<
    <T as Transport>::Error,
    <S as SampleSource>::Error,
    <D as SmartLedsWrite>::Error,
>;

/// Main loop - polls the link, applies remote commands and renders effects
///
/// `N` is the number of LEDs on the strip.
pub struct Engine<T, S, D, P, const N: usize>
where
    T: Transport,
    S: SampleSource,
    D: SmartLedsWrite<Color = Rgb>,
    P: DelayNs,
{
    // Peripherals
    transport: T,
    source: S,
    driver: D,
    pacer: Pacer<P>,
    brightness: u8,

    // Internal state
    link: LinkState,
    params: UserParameters,
    commands: CommandProcessor,
    effects: EffectRegistry,
    samples: [u16; SAMPLE_WINDOW],
    frame_buffer: [Rgb; N],
}

impl<T, S, D, P, const N: usize> Engine<T, S, D, P, N>
where
    T: Transport,
    S: SampleSource,
    D: SmartLedsWrite<Color = Rgb>,
    P: DelayNs,
{
    /// Create the engine
    ///
    /// Blanks the strip, then records one audio window to calibrate the
    /// meter. The room is assumed to be quiet at this point.
    pub fn new(
        transport: T,
        mut source: S,
        mut driver: D,
        delay: P,
        config: &EngineConfig,
    ) -> Result<Self, EngineFault<T, S, D>> {
        driver
            .write(iter::repeat_n(BLACK, N))
            .map_err(EngineError::Display)?;

        let mut samples = [0; SAMPLE_WINDOW];
        source.fill(&mut samples).map_err(EngineError::Capture)?;
        let calibration = AudioCalibration::from_quiet_window(
            &samples,
            config.meter.floor_offset,
            config.meter.sensitivity,
        );
        info!(
            "audio calibrated: floor {} ceiling {}",
            calibration.floor, calibration.ceiling
        );

        Ok(Self {
            transport,
            source,
            driver,
            pacer: Pacer::new(delay, config.pacing),
            brightness: config.brightness,
            link: LinkState::Disconnected,
            params: UserParameters::new(config.effect, config.color, config.speed),
            commands: CommandProcessor::new(),
            effects: EffectRegistry::new(calibration, &config.meter),
            samples,
            frame_buffer: [BLACK; N],
        })
    }

    /// Run the main loop until a peripheral fails
    pub fn run(&mut self) -> Result<Infallible, EngineFault<T, S, D>> {
        loop {
            self.tick()?;
        }
    }

    /// One main loop iteration
    ///
    /// While disconnected, advertising is (re)started. While connected, at
    /// most one pending command is applied. The current effect is rendered
    /// in both states.
    pub fn tick(&mut self) -> Result<(), EngineFault<T, S, D>> {
        self.poll_link()?;

        if self.link == LinkState::Connected {
            let record = self
                .commands
                .decode_next(&mut self.transport)
                .map_err(EngineError::Transport)?;
            if let Some(record) = record {
                CommandProcessor::apply(&mut self.params, record);
            }
        }

        self.render_effect()
    }

    pub const fn link_state(&self) -> LinkState {
        self.link
    }

    pub const fn params(&self) -> &UserParameters {
        &self.params
    }

    pub const fn protocol_stats(&self) -> ProtocolStats {
        self.commands.stats()
    }

    pub const fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    /// Pixel buffer as last rendered, before output brightness
    pub const fn frame(&self) -> &[Rgb; N] {
        &self.frame_buffer
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    fn poll_link(&mut self) -> Result<(), EngineFault<T, S, D>> {
        let link = if self.transport.is_connected() {
            LinkState::Connected
        } else {
            LinkState::Disconnected
        };
        if link != self.link {
            info!("link {:?}", link);
            self.link = link;
        }

        if link == LinkState::Disconnected {
            self.transport
                .start_advertising()
                .map_err(EngineError::Transport)?;
        }
        Ok(())
    }

    /// Render the active effect
    ///
    /// Under [`PacingPolicy::Faithful`] frames are rendered until the effect
    /// closes its cycle, otherwise exactly one frame is rendered.
    fn render_effect(&mut self) -> Result<(), EngineFault<T, S, D>> {
        let id = self.params.effect;
        loop {
            if id == EffectId::AudioMeter {
                self.source
                    .fill(&mut self.samples)
                    .map_err(EngineError::Capture)?;
            }

            let ctx = RenderContext {
                params: &self.params,
                samples: &self.samples,
            };
            let frame = self.effects.render(id, &ctx, &mut self.frame_buffer);
            self.flush()?;

            // Queued bytes only cut a hold short while they can be consumed
            let transport = &self.transport;
            let connected = self.link == LinkState::Connected;
            self.pacer
                .hold(frame.hold, || connected && transport.bytes_waiting());
            self.effects.finish_frame(id, &mut self.frame_buffer);

            if frame.ends_cycle || self.pacer.policy() == PacingPolicy::Responsive {
                return Ok(());
            }
        }
    }

    fn flush(&mut self) -> Result<(), EngineFault<T, S, D>> {
        self.driver
            .write(brightness(self.frame_buffer.iter().copied(), self.brightness))
            .map_err(EngineError::Display)
    }
}

#![no_std]

pub mod audio;
pub mod color;
pub mod command_processor;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
#[cfg(feature = "esp32-log")]
pub mod logger;
pub mod pacer;
pub mod params;
pub mod protocol;
pub mod transport;

pub use audio::{AudioCalibration, PeakState, SAMPLE_WINDOW, SampleSource};
pub use command_processor::{CommandProcessor, ProtocolStats};
pub use config::{EngineConfig, MeterConfig};
pub use effect::{EffectId, EffectRegistry};
pub use engine::{Engine, EngineFault};
pub use error::EngineError;
pub use pacer::{Pacer, PacingPolicy};
pub use params::UserParameters;
pub use protocol::{Button, CommandRecord};
pub use transport::{BufferedTransport, LinkBuffer, LinkState, Transport};

pub use color::Rgb;
pub use embassy_time::Duration;

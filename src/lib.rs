//! # Overview
//!
//! `midi-wire` decodes raw MIDI 1.0 messages, as handed out by OS APIs or a driver, into a
//! strongly-typed [`Message`](enum.Message.html).
//!
//! Usage is as simple as:
//!
//! ```rust
//! use midi_wire::{decode, num::u4, Message};
//!
//! let msg = decode(&[0x91, 0x3C, 0x40]);
//! assert_eq!(
//!     msg,
//!     Some(Message::NoteOn {
//!         channel: u4::new(1),
//!         note: 60,
//!         velocity: 64,
//!     })
//! );
//! ```
//!
//! Every message category is its own variant, so consumers are forced to handle all of them:
//!
//! ```rust
//! use midi_wire::Message;
//!
//! fn describe(msg: Message) -> &'static str {
//!     match msg {
//!         Message::NoteOn { .. } | Message::NoteOff { .. } => "note",
//!         Message::PolyphonicAftertouch { .. } | Message::ChannelAftertouch { .. } => "pressure",
//!         Message::ControlChange { .. } | Message::ProgramChange { .. } => "control",
//!         Message::PitchBend { .. } => "bend",
//!         Message::TuneRequest => "tune",
//!         Message::TimingClock
//!         | Message::Start
//!         | Message::Stop
//!         | Message::Continue => "transport",
//!         Message::ActiveSensing | Message::SystemReset => "housekeeping",
//!     }
//! }
//!
//! assert_eq!(describe(Message::ALL_NOTES_OFF), "control");
//! ```
//!
//! # Input rules
//!
//! Each call decodes exactly one message.
//! The input must begin with an explicit status byte (running status is not supported) and hold
//! at least 2 bytes.
//! A missing second data byte reads as `0`, and anything after the third byte is ignored.
//!
//! Segmenting a continuous byte stream into messages is up to the caller.
//!
//! Malformed input is expected when scanning live data, so it is not treated as exceptional:
//! [`decode`](fn.decode.html) simply returns `None`.
//! If the reason is needed, [`Message::parse`](enum.Message.html#method.parse) returns an
//! [`Error`](struct.Error.html) instead.
//!
//! # About features
//!
//! - The `std` feature
//!
//!   Implements `std::error::Error` for the error type.
//!   Enabled by default. Disabling it with `default-features = false` makes the crate `no_std`.
//!
//! - The `alloc` feature
//!
//!   Enables [`decode_batch`](fn.decode_batch.html).
//!
//! - The `parallel` feature
//!
//!   Decodes large batches on multiple threads, through the `rayon` dependency.
//!
//! - The `strict` feature
//!
//!   By default data bytes are passed through as received, even if a noncompliant sender set
//!   their top bit.
//!   By enabling the `strict` feature such channel messages are rejected with
//!   `ErrorKind::DataOutOfRange`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

macro_rules! bail {
    ($err:expr) => {{
        return Err($err.into());
    }};
}
macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            bail!($err)
        }
    }};
}

/// All of the errors this crate produces.
mod error;

mod prelude {
    pub(crate) use crate::{
        error::{ErrorKind, Result},
        primitive::{u14, u4, u7},
    };
    #[cfg(feature = "alloc")]
    pub(crate) use alloc::vec::Vec;
    pub(crate) use core::ops;

    pub(crate) fn bit_range<T>(val: T, range: ops::Range<u32>) -> T
    where
        T: From<u8>
            + ops::Shr<u32, Output = T>
            + ops::Shl<u32, Output = T>
            + ops::Not<Output = T>
            + ops::BitAnd<Output = T>,
    {
        let mask = !((!T::from(0)) << (range.end - range.start));
        (val >> range.start) & mask
    }
}

#[cfg(feature = "alloc")]
mod batch;
mod message;
mod primitive;
mod status;

#[cfg(feature = "alloc")]
pub use crate::batch::{decode_batch, PARALLEL_THRESHOLD};
pub use crate::{
    error::{Error, ErrorKind, Result},
    message::{decode, Message, RawMessage},
    status::Status,
};

/// Exotically-sized integers used by the MIDI standard.
pub mod num {
    pub use crate::primitive::{u14, u3, u4, u7};
}

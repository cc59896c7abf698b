//! Typed MIDI messages and their decoder.

use crate::{prelude::*, status::Status};
use tracing::trace;

/// A decoded MIDI message.
///
/// Channel messages carry the channel they were sent on, taken from the bottom nibble of the
/// status byte.
/// System messages carry no channel and no data at all.
///
/// Data bytes other than the controller number are kept exactly as received, so a noncompliant
/// sender's out-of-range bytes stay visible to the consumer (unless the `strict` feature is
/// enabled, in which case such messages are rejected).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Message {
    /// Stop playing a note.
    NoteOff {
        /// The MIDI channel that this message is associated with.
        channel: u4,
        /// The key to stop playing.
        note: u8,
        /// The velocity with which to release it.
        velocity: u8,
    },
    /// Start playing a note.
    NoteOn {
        /// The MIDI channel that this message is associated with.
        channel: u4,
        /// The key to start playing.
        note: u8,
        /// The velocity (strength) with which to press it.
        ///
        /// Note that by convention a `NoteOn` message with a velocity of 0 is equivalent to a
        /// `NoteOff`.
        velocity: u8,
    },
    /// Modify the pressure on a single key after it has been played.
    PolyphonicAftertouch {
        /// The MIDI channel that this message is associated with.
        channel: u4,
        /// The key for which to modify its pressure.
        note: u8,
        /// The new pressure for the key.
        pressure: u8,
    },
    /// Modify the value of a MIDI controller.
    ControlChange {
        /// The MIDI channel that this message is associated with.
        channel: u4,
        /// The controller to modify.
        ///
        /// See the MIDI spec for the meaning of each index.
        control: u7,
        /// The value to set it to.
        value: u8,
    },
    /// Change the program (also known as instrument) for a channel.
    ProgramChange {
        /// The MIDI channel that this message is associated with.
        channel: u4,
        /// The new program (instrument) to use for the channel.
        program: u8,
    },
    /// Change the pressure of a whole channel at once, usually the greatest pressure among all
    /// held keys.
    ChannelAftertouch {
        /// The MIDI channel that this message is associated with.
        channel: u4,
        /// The new pressure for the channel.
        pressure: u8,
    },
    /// Set the pitch bend value for the entire channel.
    ///
    /// The 14-bit bend value travels split in two, least significant half first.
    /// Use [`pitch_bend_value`](#method.pitch_bend_value) to join the halves.
    PitchBend {
        /// The MIDI channel that this message is associated with.
        channel: u4,
        /// Bottom 7 bits of the bend value.
        lsb: u8,
        /// Top 7 bits of the bend value.
        msb: u8,
    },
    /// Request the device to tune itself.
    TuneRequest,
    /// If sent, they should be sent 24 times per quarter note.
    TimingClock,
    /// Request the device to start playing at position 0.
    Start,
    /// Request the device to stop playing, but keep track of the position where it stopped.
    Stop,
    /// Request the device to continue playing without resetting the position.
    Continue,
    /// Once one of these messages is transmitted, a message should arrive every 300ms or else the
    /// connection is considered broken.
    ActiveSensing,
    /// Request the device to reset itself, usually to the same state as it was after turning on.
    SystemReset,
}
impl Message {
    /// "All Notes Off": controller 123 with value 0, on channel 0.
    ///
    /// This is a Control Change by convention, not a distinct wire message.
    pub const ALL_NOTES_OFF: Message = Message::ControlChange {
        channel: u4::new(0),
        control: u7::new(123),
        value: 0,
    };

    /// Decode a complete MIDI message from its raw bytes, discarding the reason for failure.
    ///
    /// Equivalent to `Message::parse(raw).ok()`.
    #[inline]
    pub fn decode(raw: &[u8]) -> Option<Message> {
        Message::parse(raw).ok()
    }

    /// Decode a complete MIDI message from its raw bytes.
    ///
    /// `raw` must start with a status byte, followed by the data bytes of that message.
    /// At least 2 bytes are required, even for system messages which do not have data bytes.
    /// If only 2 bytes are given, the second data byte is taken as `0`.
    /// Bytes past the third are ignored.
    ///
    /// Running status is not supported: the status byte must always be present.
    pub fn parse(raw: &[u8]) -> Result<Message> {
        let msg = Message::read(raw);
        if let Err(err) = &msg {
            trace!(len = raw.len(), "rejected midi input: {}", err);
        }
        msg
    }

    fn read(raw: &[u8]) -> Result<Message> {
        ensure!(raw.len() >= 2, ErrorKind::TooShort { len: raw.len() });
        let status_byte = raw[0];
        let status =
            Status::from_byte(status_byte).ok_or(ErrorKind::UnrecognizedStatus(status_byte))?;

        if cfg!(feature = "strict") && status.is_channel_voice() {
            if let Some(&byte) = raw[1..]
                .iter()
                .take(status.data_len())
                .find(|byte| bit_range(**byte, 7..8) != 0)
            {
                bail!(ErrorKind::DataOutOfRange(byte));
            }
        }

        let channel = u4::from(status_byte);
        let data1 = raw[1];
        let data2 = raw.get(2).copied().unwrap_or(0);

        let msg = match status {
            Status::NoteOff => Message::NoteOff {
                channel,
                note: data1,
                velocity: data2,
            },
            Status::NoteOn => Message::NoteOn {
                channel,
                note: data1,
                velocity: data2,
            },
            Status::PolyphonicAftertouch => Message::PolyphonicAftertouch {
                channel,
                note: data1,
                pressure: data2,
            },
            Status::ControlChange => Message::ControlChange {
                channel,
                control: u7::from(data1),
                value: data2,
            },
            Status::ProgramChange => Message::ProgramChange {
                channel,
                program: data1,
            },
            Status::ChannelAftertouch => Message::ChannelAftertouch {
                channel,
                pressure: data1,
            },
            Status::PitchBend => Message::PitchBend {
                channel,
                lsb: data1,
                msb: data2,
            },
            Status::TuneRequest => Message::TuneRequest,
            Status::TimingClock => Message::TimingClock,
            Status::Start => Message::Start,
            Status::Continue => Message::Continue,
            Status::Stop => Message::Stop,
            Status::ActiveSensing => Message::ActiveSensing,
            Status::SystemReset => Message::SystemReset,
        };
        Ok(msg)
    }

    /// Get the category of this message.
    pub fn status(&self) -> Status {
        match self {
            Message::NoteOff { .. } => Status::NoteOff,
            Message::NoteOn { .. } => Status::NoteOn,
            Message::PolyphonicAftertouch { .. } => Status::PolyphonicAftertouch,
            Message::ControlChange { .. } => Status::ControlChange,
            Message::ProgramChange { .. } => Status::ProgramChange,
            Message::ChannelAftertouch { .. } => Status::ChannelAftertouch,
            Message::PitchBend { .. } => Status::PitchBend,
            Message::TuneRequest => Status::TuneRequest,
            Message::TimingClock => Status::TimingClock,
            Message::Start => Status::Start,
            Message::Continue => Status::Continue,
            Message::Stop => Status::Stop,
            Message::ActiveSensing => Status::ActiveSensing,
            Message::SystemReset => Status::SystemReset,
        }
    }

    /// The channel this message is sent on, or `None` for system messages.
    pub fn channel(&self) -> Option<u4> {
        match *self {
            Message::NoteOff { channel, .. }
            | Message::NoteOn { channel, .. }
            | Message::PolyphonicAftertouch { channel, .. }
            | Message::ControlChange { channel, .. }
            | Message::ProgramChange { channel, .. }
            | Message::ChannelAftertouch { channel, .. }
            | Message::PitchBend { channel, .. } => Some(channel),
            _ => None,
        }
    }

    /// Whether this message carries a channel.
    #[inline]
    pub fn is_channel_voice(&self) -> bool {
        self.status().is_channel_voice()
    }

    /// Whether this is one of the channel-less system messages.
    #[inline]
    pub fn is_system(&self) -> bool {
        !self.is_channel_voice()
    }

    /// Join the two halves of a pitch bend into its 14-bit value.
    ///
    /// A value of `0x0000` indicates full bend downwards, `0x2000` no bend and `0x3FFF` full bend
    /// upwards.
    /// Returns `None` if this is not a `PitchBend` message.
    pub fn pitch_bend_value(&self) -> Option<u14> {
        match *self {
            Message::PitchBend { lsb, msb, .. } => Some(u14::from_lsb_msb(lsb, msb)),
            _ => None,
        }
    }

    /// The data bytes in wire order, unused slots set to zero.
    fn data_bytes(&self) -> [u8; 2] {
        match *self {
            Message::NoteOff { note, velocity, .. } | Message::NoteOn { note, velocity, .. } => {
                [note, velocity]
            }
            Message::PolyphonicAftertouch { note, pressure, .. } => [note, pressure],
            Message::ControlChange { control, value, .. } => [control.as_int(), value],
            Message::ProgramChange { program, .. } => [program, 0],
            Message::ChannelAftertouch { pressure, .. } => [pressure, 0],
            Message::PitchBend { lsb, msb, .. } => [lsb, msb],
            _ => [0, 0],
        }
    }

    /// Encode this message into its raw bytes: the status byte followed by as many data bytes
    /// as the category has on the wire.
    ///
    /// Data bytes are written as stored, without masking.
    /// Note that system messages encode to a single byte, which [`decode`](#method.decode) will
    /// refuse since it requires at least 2 bytes.
    pub fn encode(&self) -> RawMessage {
        let status = self.status();
        let channel = self.channel().map(u4::as_int).unwrap_or(0);
        let [data1, data2] = self.data_bytes();
        RawMessage {
            bytes: [status.as_byte() | channel, data1, data2],
            len: 1 + status.data_len() as u8,
        }
    }
}

/// Decode a complete MIDI message from its raw bytes.
///
/// Returns `None` if there are fewer than 2 bytes or if the status byte is not recognized.
/// See [`Message::parse`](enum.Message.html#method.parse) for the exact rules, and for a variant
/// that reports why decoding failed.
#[inline]
pub fn decode(raw: &[u8]) -> Option<Message> {
    Message::decode(raw)
}

/// The raw bytes of an encoded message, stored inline.
///
/// Dereferences to a byte slice holding 1 to 3 bytes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct RawMessage {
    bytes: [u8; 3],
    len: u8,
}
impl RawMessage {
    /// The encoded bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}
impl ops::Deref for RawMessage {
    type Target = [u8];
    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}
impl AsRef<[u8]> for RawMessage {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
impl From<Message> for RawMessage {
    #[inline]
    fn from(msg: Message) -> RawMessage {
        msg.encode()
    }
}

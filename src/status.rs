//! Classification of status bytes into message categories.

/// The category of a MIDI message, as identified by its status byte.
///
/// Channel messages are identified by the top nibble of the status byte alone, the bottom nibble
/// being the channel.
/// System messages are identified by the whole byte.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Status {
    /// Note Off, status `0x8n`.
    NoteOff,
    /// Note On, status `0x9n`.
    NoteOn,
    /// Polyphonic Key Pressure, status `0xAn`.
    PolyphonicAftertouch,
    /// Control Change, status `0xBn`.
    ControlChange,
    /// Program Change, status `0xCn`.
    ProgramChange,
    /// Channel Pressure, status `0xDn`.
    ChannelAftertouch,
    /// Pitch Bend Change, status `0xEn`.
    PitchBend,
    /// Tune Request, status `0xF6`.
    TuneRequest,
    /// Timing Clock, status `0xF8`.
    TimingClock,
    /// Start, status `0xFA`.
    Start,
    /// Continue, status `0xFB`.
    Continue,
    /// Stop, status `0xFC`.
    Stop,
    /// Active Sensing, status `0xFE`.
    ActiveSensing,
    /// System Reset, status `0xFF`.
    SystemReset,
}
impl Status {
    /// Classify a status byte.
    ///
    /// Returns `None` for data bytes (`0x00 ..= 0x7F`) and for system messages this crate does
    /// not decode (SysEx, MTC quarter frames, song position/select and the undefined slots).
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Status> {
        use self::Status::*;
        Some(match byte {
            0xF6 => TuneRequest,
            0xF8 => TimingClock,
            0xFA => Start,
            0xFB => Continue,
            0xFC => Stop,
            0xFE => ActiveSensing,
            0xFF => SystemReset,
            0xF0..=0xFF => return None,
            _ => match byte >> 4 {
                0x8 => NoteOff,
                0x9 => NoteOn,
                0xA => PolyphonicAftertouch,
                0xB => ControlChange,
                0xC => ProgramChange,
                0xD => ChannelAftertouch,
                0xE => PitchBend,
                _ => return None,
            },
        })
    }

    /// Get the status byte for this category.
    ///
    /// For channel messages the channel nibble is left as zero.
    #[inline]
    pub fn as_byte(self) -> u8 {
        use self::Status::*;
        match self {
            NoteOff => 0x80,
            NoteOn => 0x90,
            PolyphonicAftertouch => 0xA0,
            ControlChange => 0xB0,
            ProgramChange => 0xC0,
            ChannelAftertouch => 0xD0,
            PitchBend => 0xE0,
            TuneRequest => 0xF6,
            TimingClock => 0xF8,
            Start => 0xFA,
            Continue => 0xFB,
            Stop => 0xFC,
            ActiveSensing => 0xFE,
            SystemReset => 0xFF,
        }
    }

    /// How many data bytes follow the status byte on the wire.
    #[inline]
    pub fn data_len(self) -> usize {
        const LENGTH_BY_STATUS: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 1, 1, 2, 0];
        LENGTH_BY_STATUS[(self.as_byte() >> 4) as usize] as usize
    }

    /// Whether messages of this category carry a channel.
    #[inline]
    pub fn is_channel_voice(self) -> bool {
        self.as_byte() < 0xF0
    }

    /// Whether this is a one-byte System Realtime category (`0xF8 ..= 0xFF`).
    ///
    /// Realtime messages may be interleaved anywhere in a MIDI stream, even between the bytes of
    /// another message.
    #[inline]
    pub fn is_realtime(self) -> bool {
        self.as_byte() >= 0xF8
    }
}

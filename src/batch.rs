//! Decoding of many already-segmented messages at once.

use crate::{message::decode, prelude::*, Message};

/// Batches with at least this many packets are decoded on multiple threads, if the `parallel`
/// feature is enabled.
///
/// Below this size the cost of distributing the work is larger than the decoding itself.
pub const PARALLEL_THRESHOLD: usize = 4 * 1024;

/// Decode a batch of packets, each holding exactly one raw MIDI message.
///
/// The output holds one entry per packet, in the same order, with `None` wherever
/// [`decode`](fn.decode.html) would return `None`.
///
/// Packets must already be segmented and running-status-expanded by whoever read them off the
/// wire.
///
/// This function will make use of multiple threads for large batches if the `parallel` feature
/// is enabled.
/// The result does not depend on whether it is enabled.
///
/// This function is only available with the `alloc` feature enabled.
pub fn decode_batch<P>(packets: &[P]) -> Vec<Option<Message>>
where
    P: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if packets.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;

            return packets
                .par_iter()
                .map(|packet| decode(packet.as_ref()))
                .collect();
        }
    }

    //Fall back to decoding serially
    packets
        .iter()
        .map(|packet| decode(packet.as_ref()))
        .collect()
}

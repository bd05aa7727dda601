use pnet::util::MacAddr;

const MAC_LEN: usize = 6;
const MAC_REPETITIONS: usize = 16;
const SYNCHRONIZATION_STREAM: [u8; MAC_LEN] = [0xFF; MAC_LEN];

/// Length of a magic packet on the wire.
pub const MAGIC_PACKET_LEN: usize = MAC_LEN + MAC_LEN * MAC_REPETITIONS;

/// The standard wake payload: six `0xFF` bytes followed by sixteen copies
/// of the target's hardware address. Network firmware matches this layout
/// byte for byte, so it goes into a fixed buffer that is never touched
/// again after construction.
pub struct MagicPacket {
    bytes: [u8; MAGIC_PACKET_LEN],
}

impl MagicPacket {
    pub fn new(mac: &MacAddr) -> MagicPacket {
        let octets: [u8; MAC_LEN] = mac.octets();
        let mut bytes = [0u8; MAGIC_PACKET_LEN];

        bytes[..MAC_LEN].copy_from_slice(&SYNCHRONIZATION_STREAM);
        for repetition in bytes[MAC_LEN..].chunks_exact_mut(MAC_LEN) {
            repetition.copy_from_slice(&octets);
        }

        MagicPacket { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

//! Logical channel address codec.
//!
//! A logical channel identifier packs device, side and port into one
//! decimal integer, read right to left:
//!
//! - port: 2 digits (01-12 on the client side, 01-04 on the line side)
//! - side: 1 digit (1 = client, 2 = line)
//! - device index: remaining digits (open-ended, one per physical unit)
//!
//! Example: `1112` is voyager 1, client side, port 12; `1203` is
//! voyager 1, line side, port 3.
//!
//! All decode functions are total and pure. An identifier outside the
//! valid domain yields `None`, never a partial guess.

/// A packed logical channel identifier.
pub type ChannelId = u32;

/// Highest client-side port number.
pub const CLIENT_PORT_MAX: u8 = 12;

/// Highest line-side port number (one per transponder).
pub const LINE_PORT_MAX: u8 = 4;

/// Which face of the device a channel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Client-facing electrical interface.
    Client,
    /// Line-facing optical transport interface.
    Line,
}

/// Decodes the side digit of a channel identifier.
pub fn decode_side(id: ChannelId) -> Option<Side> {
    match (id % 1000) / 100 {
        1 => Some(Side::Client),
        2 => Some(Side::Line),
        _ => None,
    }
}

/// Decodes the port field of a channel identifier, range-checked for
/// the given side.
pub fn decode_port(id: ChannelId, side: Side) -> Option<u8> {
    let port = ((id % 1000) % 100) as u8;
    let max = match side {
        Side::Client => CLIENT_PORT_MAX,
        Side::Line => LINE_PORT_MAX,
    };
    if (1..=max).contains(&port) {
        Some(port)
    } else {
        None
    }
}

/// Decodes the device index. Unvalidated: the device count is
/// open-ended across installations.
pub fn decode_device(id: ChannelId) -> u32 {
    id / 1000
}

/// Maps a channel identifier to its host interface name.
///
/// Voyager interfaces are named `swpX` (client side) or `swpLX`
/// (line side).
pub fn interface_name(id: ChannelId) -> Option<String> {
    let side = decode_side(id)?;
    let port = decode_port(id, side)?;
    Some(match side {
        Side::Client => format!("swp{}", port),
        Side::Line => format!("swpL{}", port),
    })
}

/// Maps a channel identifier to its transponder name.
///
/// Voyagers have four transponders, `L1` to `L4`, on the line side
/// only; client-side identifiers have no transponder.
pub fn transponder_name(id: ChannelId) -> Option<String> {
    let side = decode_side(id)?;
    let port = decode_port(id, side)?;
    match side {
        Side::Line => Some(format!("L{}", port)),
        Side::Client => None,
    }
}

/// Parses the integer suffix after the last occurrence of `sep`.
///
/// Channel names carry their index as a suffix, e.g. `Channel-1101`.
/// Returns `None` when the separator is absent or the suffix is not a
/// number.
pub fn trailing_index(name: &str, sep: char) -> Option<u32> {
    let pos = name.rfind(sep)?;
    name[pos + sep.len_utf8()..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_side() {
        assert_eq!(decode_side(1101), Some(Side::Client));
        assert_eq!(decode_side(1204), Some(Side::Line));
        assert_eq!(decode_side(1001), None);
        assert_eq!(decode_side(1301), None);
        assert_eq!(decode_side(1999), None);
    }

    #[test]
    fn test_decode_port_client_bounds() {
        assert_eq!(decode_port(1101, Side::Client), Some(1));
        assert_eq!(decode_port(1112, Side::Client), Some(12));
        assert_eq!(decode_port(1100, Side::Client), None);
        assert_eq!(decode_port(1113, Side::Client), None);
    }

    #[test]
    fn test_decode_port_line_bounds() {
        assert_eq!(decode_port(1201, Side::Line), Some(1));
        assert_eq!(decode_port(1204, Side::Line), Some(4));
        assert_eq!(decode_port(1200, Side::Line), None);
        assert_eq!(decode_port(1205, Side::Line), None);
    }

    #[test]
    fn test_decode_device() {
        assert_eq!(decode_device(1112), 1);
        assert_eq!(decode_device(2203), 2);
        assert_eq!(decode_device(12101), 12);
        // No validation on the device field
        assert_eq!(decode_device(999), 0);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        for device in [1u32, 2, 7, 42] {
            for (side_digit, side, port) in [(1u32, Side::Client, 12u32), (2, Side::Line, 3)] {
                let id = device * 1000 + side_digit * 100 + port;
                assert_eq!(decode_device(id), device);
                assert_eq!(decode_side(id), Some(side));
                assert_eq!(decode_port(id, side), Some(port as u8));
            }
        }
    }

    #[test]
    fn test_interface_name() {
        assert_eq!(interface_name(1101).as_deref(), Some("swp1"));
        assert_eq!(interface_name(1112).as_deref(), Some("swp12"));
        assert_eq!(interface_name(1201).as_deref(), Some("swpL1"));
        assert_eq!(interface_name(1204).as_deref(), Some("swpL4"));
        assert_eq!(interface_name(1100), None);
        assert_eq!(interface_name(1113), None);
        assert_eq!(interface_name(1001), None);
        assert_eq!(interface_name(1301), None);
        assert_eq!(interface_name(1200), None);
        assert_eq!(interface_name(1205), None);
    }

    #[test]
    fn test_transponder_name() {
        assert_eq!(transponder_name(1201).as_deref(), Some("L1"));
        assert_eq!(transponder_name(1204).as_deref(), Some("L4"));
        // Client side has no transponder
        assert_eq!(transponder_name(1101), None);
        assert_eq!(transponder_name(1112), None);
        assert_eq!(transponder_name(1100), None);
        assert_eq!(transponder_name(1113), None);
        assert_eq!(transponder_name(1001), None);
        assert_eq!(transponder_name(1301), None);
        assert_eq!(transponder_name(1200), None);
        assert_eq!(transponder_name(1205), None);
    }

    #[test]
    fn test_transponder_defined_iff_line_side() {
        for id in [1101u32, 1112, 1201, 1204, 1100, 1301, 1205] {
            let is_line = decode_side(id) == Some(Side::Line) && decode_port(id, Side::Line).is_some();
            assert_eq!(transponder_name(id).is_some(), is_line, "id {}", id);
        }
    }

    #[test]
    fn test_idempotence() {
        for id in [1101u32, 1204, 1100, 1301] {
            assert_eq!(interface_name(id), interface_name(id));
            assert_eq!(transponder_name(id), transponder_name(id));
        }
    }

    #[test]
    fn test_trailing_index() {
        assert_eq!(trailing_index("Channel-1101", '-'), Some(1101));
        assert_eq!(trailing_index("lch-group-7", '-'), Some(7));
        assert_eq!(trailing_index("Channel1101", '-'), None);
        assert_eq!(trailing_index("Channel-", '-'), None);
        assert_eq!(trailing_index("Channel-abc", '-'), None);
    }

    #[test]
    fn test_trailing_index_multibyte_separator() {
        // A separator wider than one byte must not break the suffix slice
        assert_eq!(trailing_index("Chλ42", 'λ'), Some(42));
        assert_eq!(trailing_index("Ch§1101", '§'), Some(1101));
        assert_eq!(trailing_index("Chλ", 'λ'), None);
    }
}

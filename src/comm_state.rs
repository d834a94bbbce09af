//! SOTDMA communication state.
//!
//! The last 19 bits of several AIS message families describe the
//! sending station's slot reservation: a 2-bit sync state, a 3-bit
//! slot timeout, and a 14-bit sub-message whose meaning depends on the
//! timeout. The same physical bits are a slot offset, a UTC hh:mm, a
//! slot number, or a station count; ITU-R M.1371 keys the
//! interpretation off `slot_timeout` alone.

use crate::cursor::FieldCursor;
use crate::error::DecodeError;

/// The timeout-dependent interpretation of the 14-bit sub-message.
///
/// Exactly one variant exists per decode; the protocol's four
/// "validity flags" are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAllocation {
    /// Offset to the slot in which the station will transmit next
    /// (slot_timeout 0 or 7).
    SlotOffset(u16),
    /// UTC hour and minute of the station's clock (slot_timeout 1).
    UtcTime { hour: u8, minute: u8, spare: u8 },
    /// Slot number used for this transmission (slot_timeout 2, 4, 6).
    SlotNumber(u16),
    /// Number of stations the sender currently receives
    /// (slot_timeout 3 or 5).
    ReceivedStations(u16),
}

/// Decoded SOTDMA communication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SotdmaState {
    /// Synchronization state: 0 UTC direct, 1 UTC indirect, 2 synced
    /// to a base station, 3 synced to another station.
    pub sync_state: u8,
    /// Frames remaining until a new slot is selected.
    pub slot_timeout: u8,
    /// Timeout-dependent sub-message.
    pub allocation: SlotAllocation,
}

impl SotdmaState {
    /// Read the 19-bit communication state at the cursor.
    pub fn read(cursor: &mut FieldCursor) -> Result<Self, DecodeError> {
        let sync_state = cursor.read_unsigned(2)? as u8;
        let slot_timeout = cursor.read_unsigned(3)? as u8;

        let allocation = match slot_timeout {
            0 | 7 => SlotAllocation::SlotOffset(cursor.read_unsigned(14)? as u16),
            1 => SlotAllocation::UtcTime {
                hour: cursor.read_unsigned(5)? as u8,
                minute: cursor.read_unsigned(7)? as u8,
                spare: cursor.read_unsigned(2)? as u8,
            },
            2 | 4 | 6 => SlotAllocation::SlotNumber(cursor.read_unsigned(14)? as u16),
            // 3 and 5; the 3-bit field has no other values.
            _ => SlotAllocation::ReceivedStations(cursor.read_unsigned(14)? as u16),
        };

        Ok(Self {
            sync_state,
            slot_timeout,
            allocation,
        })
    }

    /// Slot offset, when the allocation carries one.
    pub fn slot_offset(&self) -> Option<u16> {
        match self.allocation {
            SlotAllocation::SlotOffset(offset) => Some(offset),
            _ => None,
        }
    }

    /// UTC `(hour, minute)`, when the allocation carries them.
    pub fn utc_time(&self) -> Option<(u8, u8)> {
        match self.allocation {
            SlotAllocation::UtcTime { hour, minute, .. } => Some((hour, minute)),
            _ => None,
        }
    }

    /// Slot number, when the allocation carries one.
    pub fn slot_number(&self) -> Option<u16> {
        match self.allocation {
            SlotAllocation::SlotNumber(slot) => Some(slot),
            _ => None,
        }
    }

    /// Received-station count, when the allocation carries one.
    pub fn received_stations(&self) -> Option<u16> {
        match self.allocation {
            SlotAllocation::ReceivedStations(count) => Some(count),
            _ => None,
        }
    }
}

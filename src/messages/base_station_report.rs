//! Messages 4 (Base Station Report) and 11 (UTC/Date Response).
//!
//! The two types share one 168-bit layout; only the message id
//! differs. A base station broadcasts its UTC date/time, position, and
//! fixing-device type, closing with the 19-bit SOTDMA communication
//! state.

use std::fmt::Display;

use tracing::debug;

use crate::comm_state::SotdmaState;
use crate::cursor::FieldCursor;
use crate::error::DecodeError;
use crate::payload::ArmoredPayload;

/// Divisor turning signed 1/10000-minute coordinates into degrees.
const COORD_DIVISOR: f64 = 600000.0;

/// Decoded message 4 or 11.
///
/// Field values are reported raw: the standard's "not available"
/// sentinels (year 0, hour 24, minute/second 60, longitude 181,
/// latitude 91) pass through unmodified for the caller to interpret.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseStationReport {
    /// Message id, 4 or 11.
    pub message_id: u8,
    /// Repeat indicator (0-3).
    pub repeat_indicator: u8,
    /// MMSI of the reporting station.
    pub mmsi: u32,
    /// UTC year (14 bits raw, 0 = not available).
    pub year: u16,
    /// UTC month.
    pub month: u8,
    /// UTC day.
    pub day: u8,
    /// UTC hour.
    pub hour: u8,
    /// UTC minute.
    pub minute: u8,
    /// UTC second.
    pub second: u8,
    /// Position accuracy flag; true means better than 10 m.
    pub position_accuracy: bool,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// EPFD device type (GPS, GLONASS, ...).
    pub fix_type: u8,
    /// Long-range transmission control flag.
    pub transmission_ctl: u8,
    /// 9 spare bits, normally zero.
    pub spare: u16,
    /// RAIM flag of the electronic position fixing device.
    pub raim: bool,
    /// SOTDMA communication state.
    pub comm_state: SotdmaState,
}

impl BaseStationReport {
    /// Decode a message 4/11 payload.
    ///
    /// The caller's dispatcher has already established from the
    /// leading 6 bits that this is a type 4 or 11 body; the id is
    /// extracted but not re-validated here.
    ///
    /// # Arguments
    /// * `body` - Armored payload from the NMEA sentence
    /// * `pad` - Trailing pad bits to discard (0-5)
    pub fn decode(body: &str, pad: usize) -> Result<Self, DecodeError> {
        debug!(body, pad, "decoding base station report");

        let payload = ArmoredPayload::from_armored(body, pad)?;
        let mut cursor = FieldCursor::new(&payload);

        let report = Self {
            message_id: cursor.read_unsigned(6)? as u8,
            repeat_indicator: cursor.read_unsigned(2)? as u8,
            mmsi: cursor.read_unsigned(30)?,
            year: cursor.read_unsigned(14)? as u16,
            month: cursor.read_unsigned(4)? as u8,
            day: cursor.read_unsigned(5)? as u8,
            hour: cursor.read_unsigned(5)? as u8,
            minute: cursor.read_unsigned(6)? as u8,
            second: cursor.read_unsigned(6)? as u8,
            position_accuracy: cursor.read_bool()?,
            longitude: cursor.read_scaled_float(28, COORD_DIVISOR)?,
            latitude: cursor.read_scaled_float(27, COORD_DIVISOR)?,
            fix_type: cursor.read_unsigned(4)? as u8,
            transmission_ctl: cursor.read_unsigned(1)? as u8,
            spare: cursor.read_unsigned(9)? as u16,
            raim: cursor.read_bool()?,
            comm_state: SotdmaState::read(&mut cursor)?,
        };

        debug!(
            mmsi = report.mmsi,
            message_id = report.message_id,
            "decoded base station report"
        );
        Ok(report)
    }
}

impl Display for BaseStationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "type {} mmsi {} {:04}-{:02}-{:02} {:02}:{:02}:{:02} lon {:.5} lat {:.5}",
            self.message_id,
            self.mmsi,
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.longitude,
            self.latitude,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comm_state::SlotAllocation;

    #[test]
    fn decodes_slot_offset_report() {
        crate::tracing_init::init_test_tracing();
        let report = BaseStationReport::decode("4h3Owoiuiq000rdhR6G>oQ?020S:", 0).unwrap();

        assert_eq!(report.message_id, 4);
        assert_eq!(report.repeat_indicator, 3);
        assert_eq!(report.mmsi, 3669983);
        assert_eq!(report.year, 2012);
        assert_eq!(report.month, 7);
        assert_eq!(report.day, 18);
        assert_eq!(report.hour, 0);
        assert_eq!(report.minute, 0);
        assert_eq!(report.second, 0);
        assert!(report.position_accuracy);
        assert!((report.longitude - -74.108475).abs() < 1e-6);
        assert!((report.latitude - 40.601393).abs() < 1e-6);
        assert_eq!(report.fix_type, 15);
        assert_eq!(report.transmission_ctl, 0);
        assert_eq!(report.spare, 0);
        assert!(report.raim);

        assert_eq!(report.comm_state.sync_state, 0);
        assert_eq!(report.comm_state.slot_timeout, 0);
        assert_eq!(report.comm_state.allocation, SlotAllocation::SlotOffset(2250));
    }

    #[test]
    fn sentinel_values_pass_through_raw() {
        // Station reporting no date, no time, and a 0,0 position.
        let report = BaseStationReport::decode("402FhL0000Htt000000000000@08", 0).unwrap();

        assert_eq!(report.mmsi, 2470000);
        assert_eq!(report.year, 0);
        assert_eq!(report.month, 0);
        assert_eq!(report.day, 0);
        assert_eq!(report.hour, 24);
        assert_eq!(report.minute, 60);
        assert_eq!(report.second, 60);
        assert_eq!(report.longitude, 0.0);
        assert_eq!(report.latitude, 0.0);
        assert!(!report.raim);
        assert_eq!(report.comm_state.slot_timeout, 4);
        assert_eq!(report.comm_state.slot_number(), Some(8));
    }

    #[test]
    fn message_11_uses_the_same_layout() {
        let report = BaseStationReport::decode(";028j>iuiq0DoO0ARF@EEmG008Pb", 0).unwrap();

        assert_eq!(report.message_id, 11);
        assert_eq!(report.mmsi, 2241083);
        assert_eq!(report.year, 2012);
        assert_eq!(report.month, 7);
        assert_eq!(report.day, 18);
        assert_eq!(report.comm_state.slot_number(), Some(2090));
    }

    #[test]
    fn truncated_body_never_yields_a_record() {
        let body = "4h3Owoiuiq000rdhR6G>oQ?020S:";
        // 168 bits need all 28 characters; every shorter prefix fails.
        for end in 0..body.len() {
            assert!(matches!(
                BaseStationReport::decode(&body[..end], 0),
                Err(DecodeError::TruncatedField { .. })
            ));
        }
        assert!(BaseStationReport::decode(body, 0).is_ok());
    }

    #[test]
    fn display_summarizes_the_report() {
        let report = BaseStationReport::decode("402=3g1uiposjOP71jSQ1sA026sd", 0).unwrap();
        let line = report.to_string();
        assert!(line.contains("type 4"));
        assert!(line.contains("mmsi 2311100"));
        assert!(line.contains("23:59:50"));
    }
}

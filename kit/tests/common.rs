#![allow(dead_code)]

use bluecap_kit::prelude::*;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn strings(pairs: &[(&str, &str)]) -> StringValues {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Sensor enable switch, written as one byte.
#[derive(Debug, PartialEq, Eq, Clone, Copy, StringEnum, RawEnum)]
#[repr(u8)]
pub enum Enabled {
    #[string_value(label = "No")]
    Off = 0,
    #[string_value(label = "Yes")]
    On = 1,
}

/// Accelerometer sample: one signed byte per axis, in units of 1/64 g.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Acceleration {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub raw: [i8; 3],
}

impl Acceleration {
    pub fn new(raw: [i8; 3]) -> Self {
        Self {
            x: f64::from(raw[0]) / 64.0,
            y: f64::from(raw[1]) / 64.0,
            z: f64::from(raw[2]) / 64.0,
            raw,
        }
    }
}

impl RawRecord for Acceleration {
    type Raw = i8;

    fn from_raw_values(values: &[i8]) -> Option<Self> {
        let raw: [i8; 3] = values.try_into().ok()?;
        Some(Self::new(raw))
    }

    fn to_raw_values(&self) -> Vec<i8> {
        self.raw.to_vec()
    }

    fn from_strings(values: &StringValues) -> Result<Self, Error> {
        Ok(Self::new([
            string_field(values, "xRaw")?,
            string_field(values, "yRaw")?,
            string_field(values, "zRaw")?,
        ]))
    }

    fn string_values(&self) -> StringValues {
        let mut values = StringValues::new();
        insert_field(&mut values, "x", self.x);
        insert_field(&mut values, "y", self.y);
        insert_field(&mut values, "z", self.z);
        insert_field(&mut values, "xRaw", self.raw[0]);
        insert_field(&mut values, "yRaw", self.raw[1]);
        insert_field(&mut values, "zRaw", self.raw[2]);
        values
    }
}

/// Barometer calibration: four unsigned coefficients followed by four signed ones.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BarometerCalibration {
    pub unsigned: [u16; 4],
    pub signed: [i16; 4],
}

const UNSIGNED_KEYS: [&str; 4] = ["c1", "c2", "c3", "c4"];
const SIGNED_KEYS: [&str; 4] = ["c5", "c6", "c7", "c8"];

impl RawPairRecord for BarometerCalibration {
    type Raw1 = u16;
    type Raw2 = i16;

    const RAW_VALUE_COUNTS: (usize, usize) = (4, 4);

    fn from_raw_values(values: (&[u16], &[i16])) -> Option<Self> {
        Some(Self {
            unsigned: values.0.try_into().ok()?,
            signed: values.1.try_into().ok()?,
        })
    }

    fn to_raw_values(&self) -> (Vec<u16>, Vec<i16>) {
        (self.unsigned.to_vec(), self.signed.to_vec())
    }

    fn from_strings(values: &StringValues) -> Result<Self, Error> {
        let mut calibration = Self {
            unsigned: [0; 4],
            signed: [0; 4],
        };
        for (slot, key) in calibration.unsigned.iter_mut().zip(UNSIGNED_KEYS) {
            *slot = string_field(values, key)?;
        }
        for (slot, key) in calibration.signed.iter_mut().zip(SIGNED_KEYS) {
            *slot = string_field(values, key)?;
        }
        Ok(calibration)
    }

    fn string_values(&self) -> StringValues {
        let mut values = StringValues::new();
        for (value, key) in self.unsigned.iter().zip(UNSIGNED_KEYS) {
            insert_field(&mut values, key, *value);
        }
        for (value, key) in self.signed.iter().zip(SIGNED_KEYS) {
            insert_field(&mut values, key, *value);
        }
        values
    }
}

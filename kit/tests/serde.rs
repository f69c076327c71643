use bluecap_kit::prelude::*;
use bluecap_kit::{
    deserialize_array, deserialize_pair_array, deserialize_pair_record, deserialize_record, deserialize_scalar,
    serialize_array, serialize_pair_array, serialize_pair_record, serialize_pair_record_bounded, serialize_record,
    to_little_endian_bytes,
};
use rand::prelude::*;

mod common;

use common::{init_logger, strings, Acceleration, BarometerCalibration};

fn scalar_round_trip<T: Scalar>(value: T) {
    let bytes = to_little_endian_bytes(value);
    assert_eq!(bytes.len(), T::SIZE);
    assert_eq!(deserialize_scalar::<T>(&bytes, 0).unwrap(), value);
}

#[test]
fn random_scalars_round_trip() {
    init_logger();
    let mut rng = rand::thread_rng();
    for _ in 0..64 {
        scalar_round_trip(rng.gen::<u8>());
        scalar_round_trip(rng.gen::<i16>());
        scalar_round_trip(rng.gen::<u32>());
        scalar_round_trip(rng.gen::<i64>());
        scalar_round_trip(rng.gen::<u128>());
        scalar_round_trip(rng.gen::<f32>());
        scalar_round_trip(rng.gen::<f64>());
        scalar_round_trip(rng.gen::<bool>());
    }
}

#[test]
fn random_arrays_round_trip() {
    init_logger();
    let mut rng = rand::thread_rng();
    for _ in 0..16 {
        let len = rng.gen_range(0..64);
        let values: Vec<i32> = (0..len).map(|_| rng.gen()).collect();
        let data = serialize_array(&values);
        assert_eq!(data.len(), values.len() * 4);
        assert_eq!(deserialize_array::<i32>(&data).unwrap(), values);
    }
}

#[test]
fn random_pairs_round_trip() {
    init_logger();
    let mut rng = rand::thread_rng();
    for _ in 0..16 {
        let a: Vec<u16> = (0..rng.gen_range(0..8)).map(|_| rng.gen()).collect();
        let b: Vec<f32> = (0..rng.gen_range(0..8)).map(|_| rng.gen()).collect();
        let data = serialize_pair_array((a.as_slice(), b.as_slice()));
        let (da, db) = deserialize_pair_array::<u16, f32>(&data, a.len(), b.len()).unwrap();
        assert_eq!(da, a);
        assert_eq!(db, b);
    }
}

#[test]
fn little_endian_on_the_wire() {
    assert_eq!(&to_little_endian_bytes(0x0a0b_0c0du32)[..], &[0x0d, 0x0c, 0x0b, 0x0a]);
    assert_eq!(serialize_array(&[-2i16, 0x0102]), [0xfe, 0xff, 0x02, 0x01]);
}

#[test]
fn malformed_peripheral_data() {
    init_logger();
    assert_eq!(deserialize_array::<u32>(&[1, 2, 3]), Err(Error::MisalignedLength));
    assert_eq!(deserialize_scalar::<u32>(&[1, 2, 3], 2), Err(Error::OutOfBounds));
    assert_eq!(deserialize_record::<Acceleration>(&[1, 2]), Err(Error::InvalidValue));
    assert_eq!(
        deserialize_pair_record::<BarometerCalibration>(&[0; 15]),
        Err(Error::MisalignedLength)
    );
}

#[test]
fn accelerometer_record() {
    init_logger();
    let sample = deserialize_record::<Acceleration>(&[0x40, 0xc0, 0x20]).unwrap();
    assert_eq!(sample.raw, [64, -64, 32]);
    assert_eq!((sample.x, sample.y, sample.z), (1.0, -1.0, 0.5));
    assert_eq!(serialize_record(&sample), [0x40, 0xc0, 0x20]);
}

#[test]
fn accelerometer_strings() {
    let sample = Acceleration::from_strings(&strings(&[("xRaw", "-3"), ("yRaw", "0"), ("zRaw", "64")])).unwrap();
    assert_eq!(sample.raw, [-3, 0, 64]);
    assert_eq!(sample.z, 1.0);

    let values = sample.string_values();
    assert_eq!(values["zRaw"], "64");
    assert_eq!(values["z"], "1");
    assert_eq!(Acceleration::from_strings(&values).unwrap(), sample);

    assert_eq!(
        Acceleration::from_strings(&strings(&[("xRaw", "1"), ("yRaw", "2")])),
        Err(Error::MissingField)
    );
    assert_eq!(
        Acceleration::from_strings(&strings(&[("xRaw", "1"), ("yRaw", "2"), ("zRaw", "200")])),
        Err(Error::Parse)
    );
}

#[test]
fn barometer_calibration_pair() {
    init_logger();
    let calibration = BarometerCalibration {
        unsigned: [0xa1b2, 2, 3, 4],
        signed: [-1, -2, 300, -400],
    };
    let data = serialize_pair_record(&calibration);
    assert_eq!(data.len(), 16);
    assert_eq!(&data[..2], &[0xb2, 0xa1]);
    assert_eq!(&data[8..10], &[0xff, 0xff]);
    assert_eq!(deserialize_pair_record::<BarometerCalibration>(&data).unwrap(), calibration);

    let bounded = serialize_pair_record_bounded(&calibration).unwrap();
    assert_eq!(&bounded[..], &data[..]);
}

#[test]
fn barometer_calibration_strings() {
    let calibration = BarometerCalibration {
        unsigned: [10, 20, 30, 40],
        signed: [-5, 6, -7, 8],
    };
    let values = calibration.string_values();
    assert_eq!(values.len(), 8);
    assert_eq!(BarometerCalibration::from_strings(&values).unwrap(), calibration);

    let mut partial = values.clone();
    partial.remove("c8");
    assert_eq!(BarometerCalibration::from_strings(&partial), Err(Error::MissingField));
}

#[cfg(feature = "std")]
mod tests {
    use core::convert::TryFrom;
    use envmon_device::drivers::sensors::bme280::*;
    use envmon_device::drivers::sensors::error::{LogicError, SensorError};
    use envmon_device::testutil::*;
    use envmon_device::ClimateReading;

    const ID: u8 = 0xD0;
    const CTRL_HUM: u8 = 0xF2;
    const CTRL_MEAS: u8 = 0xF4;
    const CONFIG: u8 = 0xF5;
    const BURST_DATA: u8 = 0xF7;

    const DIG_T1: u8 = 0x88;
    const DIG_H5: u8 = 0xE5;

    /// A sensor at 25.08 C and 38.27 %RH.
    fn device() -> MockTransport {
        let mut bus = MockTransport::new();
        bus.set(ADDR, ID, &[0x60])
            .set(ADDR, 0x88, &[0x70, 0x6B])
            .set(ADDR, 0x8A, &[0x43, 0x67])
            .set(ADDR, 0x8C, &[0x18, 0xFC])
            .set(ADDR, 0xA1, &[75])
            .set(ADDR, 0xE1, &[0x6A, 0x01])
            .set(ADDR, 0xE3, &[0])
            .set(ADDR, 0xE4, &[0x13, 0x29])
            .set(ADDR, 0xE5, &[0x29, 0x03])
            .set(ADDR, 0xE7, &[30])
            .set(
                ADDR,
                BURST_DATA,
                &[0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00, 0x69, 0x78],
            );
        bus
    }

    fn running(bus: &mut MockTransport) -> Bme280 {
        let mut bme280 = Bme280::new(Config::default());
        bme280.bring_up(bus).unwrap();
        bus.clear_transactions();
        bme280
    }

    fn written_registers(bus: &MockTransport) -> Vec<(u8, Vec<u8>)> {
        bus.transactions()
            .iter()
            .filter_map(|t| match t {
                Transaction::Write { register, data, .. } => Some((*register, data.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bring_up_sequence() {
        let mut bus = device();
        bus.set(ADDR, CONFIG, &[0b0000_0011])
            .set(ADDR, CTRL_HUM, &[0b1111_0000])
            .set(ADDR, CTRL_MEAS, &[0b0001_0100]);
        let mut bme280 = Bme280::new(Config::default());

        bme280.bring_up(&mut bus).unwrap();
        assert_eq!(State::Running, bme280.state());
        assert_eq!(
            vec![
                (CONFIG, vec![0b0000_0010]),
                (CTRL_MEAS, vec![0b0001_0100]),
                (CTRL_HUM, vec![0b1111_0001]),
                (CTRL_MEAS, vec![0b0011_0100]),
                (CTRL_MEAS, vec![0b0011_0111]),
            ],
            written_registers(&bus)
        );
    }

    #[test]
    fn calibration_decoded_at_bring_up() {
        let mut bus = device();
        let bme280 = running(&mut bus);

        assert_eq!(
            Some(&CalibrationSet {
                t1: 27504,
                t2: 26435,
                t3: -1000,
                h1: 75,
                h2: 362,
                h3: 0,
                h4: 313,
                h5: 50,
                h6: 30,
            }),
            bme280.calibration()
        );
    }

    #[test]
    fn wrong_chip_id() {
        let mut bus = device();
        bus.set(ADDR, ID, &[0x58]);
        let mut bme280 = Bme280::new(Config::default());

        assert_eq!(
            Err(SensorError::Logic(LogicError::Identity {
                expected: 0x60,
                found: Some(0x58)
            })),
            bme280.bring_up(&mut bus)
        );
        assert_eq!(State::Failed(BringUpStep::VerifyDeviceId), bme280.state());
        assert_eq!(1, bus.transactions().len());
    }

    #[test]
    fn missing_chip_is_a_transport_error() {
        let mut bus = MockTransport::new();
        let mut bme280 = Bme280::new(Config::default());

        assert_eq!(
            Err(SensorError::Transport(MockError::NoDevice(ADDR))),
            bme280.bring_up(&mut bus)
        );
    }

    #[test]
    fn failed_calibration_read_leaves_no_calibration() {
        let mut bus = device();
        bus.nack_reads(ADDR, DIG_H5, 1);
        let mut bme280 = Bme280::new(Config::default());

        assert!(bme280.bring_up(&mut bus).unwrap_err().is_transport());
        assert_eq!(State::Failed(BringUpStep::ReadCalibration), bme280.state());
        assert!(bme280.calibration().is_none());
        assert_eq!(
            Err(SensorError::Logic(LogicError::NotRunning)),
            bme280.read_sample(&mut bus)
        );
    }

    #[test]
    fn failure_after_calibration_discards_it() {
        let mut bus = device();
        bus.nack_writes(ADDR, CTRL_HUM, 1);
        let mut bme280 = Bme280::new(Config::default());

        assert!(bme280.bring_up(&mut bus).is_err());
        assert_eq!(
            State::Failed(BringUpStep::SetHumidityOversampling),
            bme280.state()
        );
        assert!(bme280.calibration().is_none());
    }

    #[test]
    fn read_sample_from_one_burst() {
        let mut bus = device();
        let mut bme280 = running(&mut bus);

        let reading = bme280.read_sample(&mut bus).unwrap();
        assert_eq!(
            ClimateReading {
                temperature: 25.08,
                humidity: 38.271484375,
            },
            reading
        );
        assert_eq!(
            &[Transaction::Read {
                device: ADDR,
                register: BURST_DATA,
                len: 8
            }][..],
            bus.transactions()
        );
    }

    #[test]
    fn calibration_read_exactly_once() {
        let mut bus = device();
        let mut bme280 = Bme280::new(Config::default());
        bme280.bring_up(&mut bus).unwrap();

        for _ in 0..3 {
            bme280.read_sample(&mut bus).unwrap();
        }
        bme280.read_temperature(&mut bus).unwrap();
        assert_eq!(1, bus.reads_of(ADDR, DIG_T1));
        assert_eq!(4, bus.reads_of(ADDR, BURST_DATA));
    }

    #[test]
    fn each_sample_uses_its_own_temperature() {
        let mut bus = device();
        let mut bme280 = running(&mut bus);

        let first = bme280.read_sample(&mut bus).unwrap();
        bus.set(
            ADDR,
            BURST_DATA,
            &[0x65, 0x5A, 0xC0, 0x97, 0x5E, 0x00, 0x69, 0x78],
        );
        let second = bme280.read_sample(&mut bus).unwrap();

        assert_eq!(56.33, second.temperature);
        assert_ne!(first.humidity, second.humidity);
    }

    #[test]
    fn read_temperature_only() {
        let mut bus = device();
        let mut bme280 = running(&mut bus);
        assert_eq!(Ok(25.08), bme280.read_temperature(&mut bus));
    }

    #[test]
    fn set_mode_touches_mode_bits_only() {
        let mut bus = device();
        let mut bme280 = running(&mut bus);
        assert_eq!(ClimateMode::Normal, bme280.mode(&mut bus).unwrap());

        bme280.set_mode(&mut bus, ClimateMode::Forced).unwrap();
        assert_eq!(vec![vec![0b0010_0001]], bus.writes_to(ADDR, CTRL_MEAS));
        assert_eq!(ClimateMode::Forced, bme280.mode(&mut bus).unwrap());

        bme280.set_mode(&mut bus, ClimateMode::Sleep).unwrap();
        assert_eq!(ClimateMode::Sleep, bme280.mode(&mut bus).unwrap());
    }

    #[test]
    fn mode_decodes_both_forced_encodings() {
        let mut bus = device();
        let mut bme280 = running(&mut bus);

        bus.set(ADDR, CTRL_MEAS, &[0b0010_0110]);
        assert_eq!(Ok(ClimateMode::Forced), bme280.mode(&mut bus));
        bus.set(ADDR, CTRL_MEAS, &[0b0010_0101]);
        assert_eq!(Ok(ClimateMode::Forced), bme280.mode(&mut bus));
    }

    #[test]
    fn invalid_mode_never_reaches_the_bus() {
        assert_eq!(Err(LogicError::InvalidMode(4)), ClimateMode::try_from(4));
    }

    #[test]
    fn operations_need_bring_up() {
        let mut bus = device();
        let mut bme280 = Bme280::new(Config::default());

        assert_eq!(
            Err(SensorError::Logic(LogicError::NotRunning)),
            bme280.read_sample(&mut bus)
        );
        assert_eq!(
            Err(SensorError::Logic(LogicError::NotRunning)),
            bme280.set_mode(&mut bus, ClimateMode::Normal)
        );
        assert!(bus.transactions().is_empty());
    }

    #[test]
    fn burst_read_failure_is_reported() {
        let mut bus = device();
        let mut bme280 = running(&mut bus);
        bus.nack_reads(ADDR, BURST_DATA, 1);

        assert_eq!(
            Err(SensorError::Transport(MockError::Nack {
                device: ADDR,
                register: BURST_DATA
            })),
            bme280.read_sample(&mut bus)
        );
        assert!(bme280.read_sample(&mut bus).is_ok());
    }
}

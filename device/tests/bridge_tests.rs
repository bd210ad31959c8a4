#[cfg(feature = "std")]
mod tests {
    use envmon_device::drivers::sensors::bridge::{compensate, Monitor};
    use envmon_device::drivers::sensors::error::{LogicError, Quantity, SensorError};
    use envmon_device::drivers::sensors::{bme280, ccs811};
    use envmon_device::testutil::*;
    use envmon_device::{ClimateReading, GasReading, Measurement};

    const GAS: u8 = ccs811::ADDR;
    const CLIMATE: u8 = bme280::ADDR;

    const STATUS: u8 = 0x00;
    const ALG_RESULT_DATA: u8 = 0x02;
    const ENV_DATA: u8 = 0x05;
    const BURST_DATA: u8 = 0xF7;

    const APP_VALID: u8 = 0b0001_0000;
    const DATA_READY: u8 = 0b0000_1000;

    fn bus() -> MockTransport {
        let mut bus = MockTransport::new();
        bus.set(GAS, 0x20, &[0x81])
            .set(GAS, STATUS, &[APP_VALID])
            .set(GAS, ALG_RESULT_DATA, &[0x01, 0xF4, 0x00, 0x42]);
        bus.set(CLIMATE, 0xD0, &[0x60])
            .set(CLIMATE, 0x88, &[0x70, 0x6B])
            .set(CLIMATE, 0x8A, &[0x43, 0x67])
            .set(CLIMATE, 0x8C, &[0x18, 0xFC])
            .set(CLIMATE, 0xA1, &[75])
            .set(CLIMATE, 0xE1, &[0x6A, 0x01])
            .set(CLIMATE, 0xE3, &[0])
            .set(CLIMATE, 0xE4, &[0x13, 0x29])
            .set(CLIMATE, 0xE5, &[0x29, 0x03])
            .set(CLIMATE, 0xE7, &[30])
            .set(
                CLIMATE,
                BURST_DATA,
                &[0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00, 0x69, 0x78],
            );
        bus
    }

    fn monitor(bus: &mut MockTransport) -> Monitor {
        let mut monitor = Monitor::new(
            ccs811::Ccs811::new(Default::default()),
            bme280::Bme280::new(Default::default()),
        );
        monitor.bring_up(bus, &mut TestDelay::new()).unwrap();
        bus.clear_transactions();
        monitor
    }

    #[test]
    fn bring_up_gas_then_climate() {
        let mut bus = bus();
        let mut monitor = Monitor::new(
            ccs811::Ccs811::new(Default::default()),
            bme280::Bme280::new(Default::default()),
        );
        monitor.bring_up(&mut bus, &mut TestDelay::new()).unwrap();

        assert_eq!(ccs811::State::Running, monitor.gas.state());
        assert_eq!(bme280::State::Running, monitor.climate.state());
        let first_climate = bus
            .transactions()
            .iter()
            .position(|t| t.device() == CLIMATE)
            .unwrap();
        assert!(bus.transactions()[..first_climate]
            .iter()
            .all(|t| t.device() == GAS));
        assert!(bus.transactions()[first_climate..]
            .iter()
            .all(|t| t.device() == CLIMATE));
    }

    #[test]
    fn gas_failure_skips_climate_bring_up() {
        let mut bus = bus();
        bus.set(GAS, STATUS, &[0]);
        let mut monitor = Monitor::new(
            ccs811::Ccs811::new(Default::default()),
            bme280::Bme280::new(Default::default()),
        );

        assert_eq!(
            Err(SensorError::Logic(LogicError::AppNotValid)),
            monitor.bring_up(&mut bus, &mut TestDelay::new())
        );
        assert!(bus.transactions().iter().all(|t| t.device() == GAS));
    }

    #[test]
    fn compensate_writes_fresh_climate_values() {
        let mut bus = bus();
        let mut monitor = monitor(&mut bus);

        let reading = compensate(&mut bus, &mut monitor.climate, &mut monitor.gas).unwrap();
        assert_eq!(
            ClimateReading {
                temperature: 25.08,
                humidity: 38.271484375
            },
            reading
        );
        assert_eq!(vec![vec![79, 0, 101, 0]], bus.writes_to(GAS, ENV_DATA));
    }

    #[test]
    fn poll_with_new_data() {
        let mut bus = bus();
        let mut monitor = monitor(&mut bus);
        bus.set(GAS, STATUS, &[APP_VALID | DATA_READY]);

        let measurement = monitor.poll(&mut bus).unwrap();
        assert_eq!(
            Some(Measurement {
                gas: GasReading {
                    co2: 500,
                    tvoc: 66
                },
                climate: ClimateReading {
                    temperature: 25.08,
                    humidity: 38.271484375
                },
            }),
            measurement
        );
        assert_eq!(
            &[
                Transaction::Read {
                    device: GAS,
                    register: STATUS,
                    len: 1
                },
                Transaction::Read {
                    device: CLIMATE,
                    register: BURST_DATA,
                    len: 8
                },
                Transaction::Write {
                    device: GAS,
                    register: ENV_DATA,
                    data: vec![79, 0, 101, 0]
                },
                Transaction::Read {
                    device: GAS,
                    register: ALG_RESULT_DATA,
                    len: 4
                },
            ][..],
            bus.transactions()
        );
    }

    #[test]
    fn poll_without_data_checks_for_errors() {
        let mut bus = bus();
        let mut monitor = monitor(&mut bus);

        assert_eq!(Ok(None), monitor.poll(&mut bus));
        assert_eq!(2, bus.reads_of(GAS, STATUS));
        assert_eq!(0, bus.reads_of(CLIMATE, BURST_DATA));

        bus.respond(GAS, STATUS, &[APP_VALID])
            .respond(GAS, STATUS, &[APP_VALID | 0b0000_0001]);
        assert_eq!(
            Err(SensorError::Logic(LogicError::DeviceInternal)),
            monitor.poll(&mut bus)
        );
    }

    #[test]
    fn climate_failure_stops_the_cycle() {
        let mut bus = bus();
        let mut monitor = monitor(&mut bus);
        bus.set(GAS, STATUS, &[APP_VALID | DATA_READY])
            .nack_reads(CLIMATE, BURST_DATA, 1);

        assert!(monitor.poll(&mut bus).unwrap_err().is_transport());
        assert!(bus.writes_to(GAS, ENV_DATA).is_empty());
        assert_eq!(0, bus.reads_of(GAS, ALG_RESULT_DATA));
    }

    #[test]
    fn out_of_range_climate_is_not_written() {
        let mut bus = bus();
        let mut monitor = monitor(&mut bus);
        bus.set(
            CLIMATE,
            BURST_DATA,
            &[0x65, 0x5A, 0xC0, 0x97, 0x5E, 0x00, 0x69, 0x78],
        );

        assert_eq!(
            Err(SensorError::Logic(LogicError::OutOfRange {
                quantity: Quantity::Temperature,
                value: 56.33
            })),
            compensate(&mut bus, &mut monitor.climate, &mut monitor.gas)
        );
        assert!(bus.writes_to(GAS, ENV_DATA).is_empty());
    }
}

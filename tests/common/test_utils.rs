//! Test utilities and helper functions

use crate::common::mock_interface::{MockInterface, MockLatchInterface};
use gpio8::{GpioBank, VgpioLatch};

/// Create a mock bank driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_bank() -> (GpioBank<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = GpioBank::new(interface);
    (driver, interface_clone)
}

/// Create a mock latch driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_latch() -> (VgpioLatch<MockLatchInterface>, MockLatchInterface) {
    let interface = MockLatchInterface::new();
    let interface_clone = interface.clone();
    let driver = VgpioLatch::new(interface);
    (driver, interface_clone)
}

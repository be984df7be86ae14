//! Register interface implementation for memory-mapped access
//!
//! This module provides the `device-driver` trait implementation used on
//! target hardware: a typed wrapper over a bank's base address performing
//! one 32-bit volatile access per register operation. The register map
//! decides which offsets exist; nothing here exposes raw offset arithmetic
//! to callers.

use core::convert::Infallible;
use core::ptr;

use device_driver::RegisterInterface;

use crate::Bank;

/// Memory-mapped register interface
///
/// One instance stands for exclusive access to one register block: a GPIO
/// bank or the virtual I/O latch. Register addresses handed in by the
/// register map are byte offsets from the wrapped base address.
///
/// Access through this interface cannot fail, so its error type is
/// [`Infallible`].
pub struct MmioInterface {
    base: usize,
}

impl MmioInterface {
    /// Create an interface over a raw base address
    ///
    /// Prefer [`for_bank`](Self::for_bank) and [`vgpio`](Self::vgpio) for
    /// the fixed blocks this peripheral defines; this constructor exists
    /// for relocated register blocks (e.g. behind an MMU mapping).
    ///
    /// # Safety
    ///
    /// `base` must be the start of a mapped register block laid out per the
    /// register map accessed through it, suitably aligned for 32-bit
    /// accesses, and no other interface instance may alias the same block.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Create an interface over the given GPIO bank's register block
    ///
    /// # Safety
    ///
    /// The bank's register block must be mapped at its fixed base address,
    /// and no other interface instance may alias the same bank.
    pub const unsafe fn for_bank(bank: Bank) -> Self {
        Self {
            base: bank.base_address(),
        }
    }

    /// Create an interface over the virtual I/O latch register
    ///
    /// # Safety
    ///
    /// The latch register must be mapped at its fixed address, and no other
    /// interface instance may alias it.
    pub const unsafe fn vgpio() -> Self {
        Self {
            base: crate::VGPIO_ADDR,
        }
    }

    /// Base address this interface wraps
    pub const fn base_address(&self) -> usize {
        self.base
    }

    fn register_ptr(&self, address: u16) -> *mut u32 {
        (self.base + address as usize) as *mut u32
    }
}

impl RegisterInterface for MmioInterface {
    type Error = Infallible;
    type AddressType = u16;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        debug_assert_eq!(size_bits, 32);
        debug_assert_eq!(read_data.len(), 4);

        let value = unsafe { ptr::read_volatile(self.register_ptr(address)) };
        read_data.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        debug_assert_eq!(size_bits, 32);
        debug_assert_eq!(write_data.len(), 4);

        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(write_data);
        let value = u32::from_le_bytes(bytes);

        unsafe { ptr::write_volatile(self.register_ptr(address), value) };
        Ok(())
    }
}

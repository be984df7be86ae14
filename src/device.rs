//! High-level driver API for the GPIO controller
//!
//! This module provides the per-bank driver over the register map, plus the
//! driver for the virtual I/O latch. Both are generic over the register
//! interface, so the same code runs against raw MMIO on target and against
//! a register-file mock in host tests.

use device_driver::RegisterInterface;

use crate::interrupt::{IrqMask, IrqStatus};
use crate::registers::Gpio8 as RegisterDevice;
use crate::registers::vgpio::LatchDevice;
use crate::Error;

/// Number of pins per bank
pub const PIN_COUNT: u8 = 8;

/// Driver for one GPIO bank
///
/// The controller replicates the same register block for both banks; one
/// `GpioBank` drives whichever block its interface wraps. The driver holds
/// no state of its own beyond the interface — in particular no output
/// shadow register, see the single-pin helpers.
pub struct GpioBank<I> {
    device: RegisterDevice<I>,
}

impl<I> GpioBank<I>
where
    I: RegisterInterface<AddressType = u16>,
{
    /// Create a driver over the given register interface
    ///
    /// Performs no register traffic; the peripheral keeps whatever state it
    /// had (registers are reset only by a hardware reset).
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
        }
    }

    /// Overwrite the direction register
    ///
    /// Bit = 1 configures the corresponding pin as an output. Any 8-bit
    /// value is valid.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn set_direction(&mut self, mask: u8) -> Result<(), Error<I::Error>> {
        self.device.direction().write(|w| {
            w.set_pins(mask);
        })?;
        Ok(())
    }

    /// Read the direction register back
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn direction(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.direction().read()?.pins())
    }

    /// Overwrite the output data register
    ///
    /// Sets all 8 pins atomically. The written level is only observable on
    /// pins currently configured as outputs; for input-configured pins the
    /// bit is stored but has no external effect.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn write(&mut self, value: u8) -> Result<(), Error<I::Error>> {
        self.device.data_out().write(|w| {
            w.set_pins(value);
        })?;
        Ok(())
    }

    /// Read the output data register back
    ///
    /// Returns the last value written to `DATAO`, which is not necessarily
    /// the level visible on the pins — see [`read`](Self::read) for that.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn output(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.data_out().read()?.pins())
    }

    /// Read the instantaneous physical level of all 8 pins
    ///
    /// Reflects the electrical line state regardless of each pin's
    /// direction.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn read(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.data_in().read()?.pins())
    }

    /// Drive a single pin high
    ///
    /// Reads the current pin levels from `DATAI` (not a software shadow of
    /// the last write), sets bit `pin`, and writes the result to `DATAO`.
    /// For input-configured pins the externally driven level is therefore
    /// folded into the written byte. The read and write halves are not
    /// atomic against concurrent line changes; callers needing atomicity
    /// must serialize access themselves.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    ///
    /// # Panics
    /// Panics if `pin` is not in `0..8`.
    pub fn set_pin(&mut self, pin: u8) -> Result<(), Error<I::Error>> {
        assert!(pin < PIN_COUNT);
        let current = self.read()?;
        self.write(current | (1 << pin))
    }

    /// Drive a single pin low
    ///
    /// Same read-modify-write sequence as [`set_pin`](Self::set_pin), with
    /// bit `pin` cleared.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    ///
    /// # Panics
    /// Panics if `pin` is not in `0..8`.
    pub fn clear_pin(&mut self, pin: u8) -> Result<(), Error<I::Error>> {
        assert!(pin < PIN_COUNT);
        let current = self.read()?;
        self.write(current & !(1 << pin))
    }

    /// Toggle a single pin
    ///
    /// Same read-modify-write sequence as [`set_pin`](Self::set_pin), with
    /// bit `pin` flipped relative to the `DATAI` level observed at call
    /// time. On a pin that is not looped back this flips the externally
    /// driven level, not the last written output bit.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    ///
    /// # Panics
    /// Panics if `pin` is not in `0..8`.
    pub fn toggle_pin(&mut self, pin: u8) -> Result<(), Error<I::Error>> {
        assert!(pin < PIN_COUNT);
        let current = self.read()?;
        self.write(current ^ (1 << pin))
    }

    /// Overwrite the interrupt mask register
    ///
    /// There is no incremental enable/disable primitive; for a partial
    /// update, read the mask back with [`irq_mask`](Self::irq_mask), modify
    /// it, and write the result.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn enable_irq(&mut self, mask: IrqMask) -> Result<(), Error<I::Error>> {
        self.device.irq_enable().write(|w| {
            w.set_level_high(mask.level_high());
            w.set_level_low(mask.level_low());
            w.set_rising_edge(mask.rising_edge());
            w.set_falling_edge(mask.falling_edge());
        })?;
        Ok(())
    }

    /// Read the interrupt mask register back
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn irq_mask(&mut self) -> Result<IrqMask, Error<I::Error>> {
        let reg = self.device.irq_enable().read()?;
        Ok(IrqMask::from_bits(
            u32::from(reg.level_high())
                | u32::from(reg.level_low()) << 8
                | u32::from(reg.rising_edge()) << 16
                | u32::from(reg.falling_edge()) << 24,
        ))
    }

    /// Read the masked interrupt status
    ///
    /// Asserted bits are raw-pending AND enabled in the mask; this is the
    /// only software-visible "fired" signal. Always a bitwise subset of the
    /// current enable mask.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn irq_status(&mut self) -> Result<IrqStatus, Error<I::Error>> {
        let reg = self.device.irq_masked_status().read()?;
        Ok(IrqStatus::from_bits(
            u32::from(reg.level_high())
                | u32::from(reg.level_low()) << 8
                | u32::from(reg.rising_edge()) << 16
                | u32::from(reg.falling_edge()) << 24,
        ))
    }

    /// Read the raw interrupt status
    ///
    /// Sticky pending bits independent of masking. A trigger condition sets
    /// the bit even while the corresponding mask bit is disabled.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn raw_irq_status(&mut self) -> Result<IrqStatus, Error<I::Error>> {
        let reg = self.device.irq_raw_status().read()?;
        Ok(IrqStatus::from_bits(
            u32::from(reg.level_high())
                | u32::from(reg.level_low()) << 8
                | u32::from(reg.rising_edge()) << 16
                | u32::from(reg.falling_edge()) << 24,
        ))
    }

    /// Acknowledge pending interrupts
    ///
    /// Write-1-to-clear: every set bit in `mask` clears the corresponding
    /// bit in the raw status (and therefore the masked status). Clearing a
    /// bit that is not pending is a no-op for that bit. A level trigger
    /// whose condition still holds re-pends immediately after the clear.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn clear_irq(&mut self, mask: IrqMask) -> Result<(), Error<I::Error>> {
        self.device.irq_clear().write(|w| {
            w.set_level_high(mask.level_high());
            w.set_level_low(mask.level_low());
            w.set_rising_edge(mask.rising_edge());
            w.set_falling_edge(mask.falling_edge());
        })?;
        Ok(())
    }
}

/// Driver for the virtual I/O latch
///
/// One 32-bit register, logically split into two independent 16-bit halves:
/// the low half is software-driven output observed by an external
/// simulation harness, the high half is externally driven input. Used as a
/// progress/observability channel, not a synchronization primitive.
pub struct VgpioLatch<I> {
    device: LatchDevice<I>,
}

impl<I> VgpioLatch<I>
where
    I: RegisterInterface<AddressType = u16>,
{
    /// Create a driver over the given register interface
    pub fn new(interface: I) -> Self {
        Self {
            device: LatchDevice::new(interface),
        }
    }

    /// Write the output half, preserving the input half
    ///
    /// Reads the full register, replaces the low 16 bits with `value`, and
    /// writes it back. The preservation is only atomic against a concurrent
    /// external writer of the high half if the platform performs
    /// single-instruction 32-bit register accesses; on the simulation bench
    /// this channel is polled, so the race is accepted.
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn write_output(&mut self, value: u16) -> Result<(), Error<I::Error>> {
        self.device.latch().modify(|w| {
            w.set_output(value);
        })?;
        Ok(())
    }

    /// Read the output half back
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn read_output(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.latch().read()?.output())
    }

    /// Read the externally driven input half
    ///
    /// # Errors
    /// Returns an error if the register interface fails.
    pub fn read_input(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.latch().read()?.input())
    }
}

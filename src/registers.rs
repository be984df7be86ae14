//! Register definitions for the GPIO controller
//!
//! The controller exposes seven 32-bit registers per bank: the data path
//! (`DATAI`/`DATAO`/`DIR`) at the bottom of the block and the interrupt
//! subsystem (`IM`/`MIS`/`RIS`/`IC`) at offset `0xFF00`. The same block is
//! replicated for both banks; only the base address differs, so one register
//! device serves either bank depending on the interface it is given.
//!
//! ## Interrupt register layout
//! `IM`, `MIS`, `RIS` and `IC` all share one bit layout: four trigger
//! categories of 8 pins each. Bit `category_base + pin` belongs to `pin`,
//! with category bases 0 (level-high), 8 (level-low), 16 (rising edge) and
//! 24 (falling edge).

device_driver::create_device!(
    device_name: Gpio8,
    dsl: {
        config {
            type RegisterAddressType = u16;
            type DefaultByteOrder = LE;
        }

        // ==================== DATA PATH ====================

        /// DATAI - Input Data Register (0x0000)
        /// Read-only; writes through the data path go to DATAO.
        register DataIn {
            const ADDRESS = 0x0000;
            const SIZE_BITS = 32;

            /// Current electrical level of the 8 pins, regardless of direction
            pins: uint = 0..8,
            reserved: uint = 8..32,
        },

        /// DATAO - Output Data Register (0x0004)
        register DataOut {
            const ADDRESS = 0x0004;
            const SIZE_BITS = 32;

            /// Software-driven output level; only observable on pins whose
            /// DIR bit is set
            pins: uint = 0..8,
            reserved: uint = 8..32,
        },

        /// DIR - Direction Register (0x0008)
        register Direction {
            const ADDRESS = 0x0008;
            const SIZE_BITS = 32;

            /// Per-pin direction, bit = 1 selects output
            pins: uint = 0..8,
            reserved: uint = 8..32,
        },

        // ==================== INTERRUPT SUBSYSTEM ====================

        /// IM - Interrupt Mask Register (0xFF00)
        register IrqEnable {
            const ADDRESS = 0xFF00;
            const SIZE_BITS = 32;

            /// Enable level-high trigger per pin
            level_high: uint = 0..8,
            /// Enable level-low trigger per pin
            level_low: uint = 8..16,
            /// Enable rising (positive) edge trigger per pin
            rising_edge: uint = 16..24,
            /// Enable falling (negative) edge trigger per pin
            falling_edge: uint = 24..32,
        },

        /// MIS - Masked Interrupt Status Register (0xFF04)
        /// Asserted bits are raw-pending AND enabled in IM.
        register IrqMaskedStatus {
            const ADDRESS = 0xFF04;
            const SIZE_BITS = 32;

            /// Level-high pending and enabled, per pin
            level_high: uint = 0..8,
            /// Level-low pending and enabled, per pin
            level_low: uint = 8..16,
            /// Rising edge pending and enabled, per pin
            rising_edge: uint = 16..24,
            /// Falling edge pending and enabled, per pin
            falling_edge: uint = 24..32,
        },

        /// RIS - Raw Interrupt Status Register (0xFF08)
        /// Sticky pending bits, independent of masking.
        register IrqRawStatus {
            const ADDRESS = 0xFF08;
            const SIZE_BITS = 32;

            /// Level-high pending, per pin
            level_high: uint = 0..8,
            /// Level-low pending, per pin
            level_low: uint = 8..16,
            /// Rising edge pending, per pin
            rising_edge: uint = 16..24,
            /// Falling edge pending, per pin
            falling_edge: uint = 24..32,
        },

        /// IC - Interrupt Clear Register (0xFF0C)
        /// Write-1-to-clear; clears the corresponding RIS (and MIS) bits.
        register IrqClear {
            const ADDRESS = 0xFF0C;
            const SIZE_BITS = 32;

            /// Clear level-high pending, per pin
            level_high: uint = 0..8,
            /// Clear level-low pending, per pin
            level_low: uint = 8..16,
            /// Clear rising edge pending, per pin
            rising_edge: uint = 16..24,
            /// Clear falling edge pending, per pin
            falling_edge: uint = 24..32,
        }
    }
);

/// Virtual I/O latch device
///
/// A degenerate one-register instance of the same access pattern, used as an
/// observability channel toward an external simulation harness. The register
/// sits alone at its own fixed address, so its device address space starts
/// at zero and the interface supplies the absolute location.
pub mod vgpio {
    device_driver::create_device!(
        device_name: Vgpio,
        dsl: {
            config {
                type RegisterAddressType = u16;
                type DefaultByteOrder = LE;
            }

            /// VGPIO - Virtual I/O latch register
            /// Two independent 16-bit halves sharing one 32-bit register.
            register Latch {
                const ADDRESS = 0x0000;
                const SIZE_BITS = 32;

                /// Software-writable output half, observed externally
                output: uint = 0..16,
                /// Externally driven input half, readable by software
                input: uint = 16..32,
            }
        }
    );

    // Re-export latch device
    pub use Vgpio as LatchDevice;
}

//! Register bus abstraction
//!
//! Every peripheral register the driver touches is a 32-bit word at a
//! fixed physical address. Implementations either dereference that
//! address (real silicon) or decode it into a register model (host tests).

/// 32-bit memory-mapped register access
///
/// Reads take `&self` and have no side effects. None of the registers the
/// GPIO driver reads are clear-on-read.
pub trait RegisterBus {
    /// Read the register at `addr`
    fn read(&self, addr: u32) -> u32;

    /// Write `value` to the register at `addr`
    fn write(&mut self, addr: u32, value: u32);

    /// Read-modify-write the register at `addr`
    ///
    /// This is not atomic with respect to interrupts. Callers that share a
    /// register with an interrupt handler must mask that interrupt first.
    fn modify<F>(&mut self, addr: u32, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(addr);
        self.write(addr, f(value));
    }

    /// Set the bits of `mask` in the register at `addr`
    fn set_bits(&mut self, addr: u32, mask: u32) {
        self.modify(addr, |v| v | mask);
    }

    /// Clear the bits of `mask` in the register at `addr`
    fn clear_bits(&mut self, addr: u32, mask: u32) {
        self.modify(addr, |v| v & !mask);
    }

    /// Replace the `width`-bit field at `shift` with `value`
    fn write_field(&mut self, addr: u32, shift: u32, width: u32, value: u32) {
        let mask = field_mask(width) << shift;
        self.modify(addr, |v| (v & !mask) | ((value << shift) & mask));
    }

    /// Extract the `width`-bit field at `shift`
    fn read_field(&self, addr: u32, shift: u32, width: u32) -> u32 {
        (self.read(addr) >> shift) & field_mask(width)
    }
}

/// Mask with the low `width` bits set
pub const fn field_mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    fn read(&self, addr: u32) -> u32 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u32, value: u32) {
        (**self).write(addr, value)
    }
}

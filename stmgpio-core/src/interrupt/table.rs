//! Interrupt handler table
//!
//! Replaces fixed vector-table entries with a table of callbacks keyed by
//! interrupt line. The vector (or a test) calls [`InterruptTable::dispatch`]
//! and the registered handler runs with a caller-supplied context.

use heapless::FnvIndexMap;

use super::line::Interrupt;
use crate::fmt::trace;

/// Handler capacity; covers all seven EXTI lines
pub const MAX_HANDLERS: usize = 8;

/// Interrupt handler
///
/// Handlers must acknowledge every pending pin they service, otherwise the
/// line fires again as soon as they return.
pub type Handler<C> = fn(&mut C);

/// No room left for another handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TableFull;

/// Registered handlers by interrupt line
pub struct InterruptTable<C> {
    handlers: FnvIndexMap<Interrupt, Handler<C>, MAX_HANDLERS>,
}

impl<C> Default for InterruptTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InterruptTable<C> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            handlers: FnvIndexMap::new(),
        }
    }

    /// Register `handler` for `irq`
    ///
    /// Returns the handler it replaced, if any.
    pub fn register(
        &mut self,
        irq: Interrupt,
        handler: Handler<C>,
    ) -> Result<Option<Handler<C>>, TableFull> {
        self.handlers.insert(irq, handler).map_err(|_| TableFull)
    }

    /// Remove the handler for `irq`
    pub fn unregister(&mut self, irq: Interrupt) -> Option<Handler<C>> {
        self.handlers.remove(&irq)
    }

    /// Check whether `irq` has a handler
    pub fn is_registered(&self, irq: Interrupt) -> bool {
        self.handlers.contains_key(&irq)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler registered for `irq`
    ///
    /// Returns `false` if no handler is registered.
    pub fn dispatch(&self, irq: Interrupt, ctx: &mut C) -> bool {
        match self.handlers.get(&irq) {
            Some(handler) => {
                trace!("dispatch {}", irq);
                handler(ctx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counts {
        first: u32,
        second: u32,
    }

    fn bump_first(c: &mut Counts) {
        c.first += 1;
    }

    fn bump_second(c: &mut Counts) {
        c.second += 1;
    }

    #[test]
    fn test_dispatch_runs_registered_handler() {
        let mut table: InterruptTable<Counts> = InterruptTable::new();
        let mut counts = Counts::default();

        assert!(table.register(Interrupt::Exti0, bump_first).unwrap().is_none());
        assert!(table.dispatch(Interrupt::Exti0, &mut counts));
        assert_eq!(counts.first, 1);
        assert_eq!(counts.second, 0);
    }

    #[test]
    fn test_dispatch_unregistered_line() {
        let table: InterruptTable<Counts> = InterruptTable::new();
        let mut counts = Counts::default();

        assert!(!table.dispatch(Interrupt::Exti9_5, &mut counts));
        assert_eq!(counts.first, 0);
    }

    #[test]
    fn test_register_replaces() {
        let mut table: InterruptTable<Counts> = InterruptTable::new();
        let mut counts = Counts::default();

        table.register(Interrupt::Exti1, bump_first).unwrap();
        let previous = table.register(Interrupt::Exti1, bump_second).unwrap();
        assert!(previous.is_some());
        assert_eq!(table.len(), 1);

        table.dispatch(Interrupt::Exti1, &mut counts);
        assert_eq!(counts.first, 0);
        assert_eq!(counts.second, 1);
    }

    #[test]
    fn test_unregister() {
        let mut table: InterruptTable<Counts> = InterruptTable::new();
        let mut counts = Counts::default();

        table.register(Interrupt::Exti15_10, bump_first).unwrap();
        assert!(table.is_registered(Interrupt::Exti15_10));
        assert!(table.unregister(Interrupt::Exti15_10).is_some());
        assert!(table.is_empty());
        assert!(!table.dispatch(Interrupt::Exti15_10, &mut counts));
    }

    #[test]
    fn test_all_lines_fit() {
        let mut table: InterruptTable<Counts> = InterruptTable::new();
        for irq in Interrupt::ALL {
            assert!(table.register(irq, bump_first).is_ok());
        }
        assert_eq!(table.len(), Interrupt::ALL.len());
    }
}

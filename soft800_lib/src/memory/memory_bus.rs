/*
 * Memory
 * A flat 64KB address space backed by RAM with write hooks: callbacks
 * registered on an address that are called, in registration order, each time
 * a byte lands at that address. This is how memory mapped I/O registers are
 * wired (see the ANTIC WSYNC register).
 *
 * While the hooks of an address run, they are detached from the bus: a hook
 * writing to its own address does not trigger itself again. Hooks writing to
 * other hooked addresses do trigger them, preventing infinite mutual
 * recursion is left to whoever registers them.
 */
use super::*;
use crate::value::Address;
use std::collections::BTreeMap;
use std::fmt;

pub type WriteHook = Box<dyn FnMut(&mut Memory, Address, u8)>;

#[derive(Default)]
pub struct Memory {
    ram: RAM,
    hooks: BTreeMap<Address, Vec<WriteHook>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn peek(&self, address: Address) -> u8 {
        self.ram.byte(address)
    }

    /// Write the given bytes sequentially from `address`. Write hooks are
    /// called after each byte is stored.
    pub fn poke(&mut self, address: Address, data: &[u8]) -> Result<(), MemoryError> {
        let start = address.as_usize();

        if start + data.len() > MEMMAX + 1 {
            return Err(MemoryError::WriteOverflow(data.len(), start));
        }

        for (offset, byte) in data.iter().enumerate() {
            let location = start + offset;
            self.ram.write(location, &[*byte])?;
            self.call_hooks(Address::from(location as u16), *byte);
        }

        Ok(())
    }

    /// Read a little endian 16 bits address stored at `pointer`. With
    /// `zero_page` set, the high byte is read in the same page as the low byte
    /// (0x00FF reads its high byte at 0x0000 and not 0x0100), this reproduces
    /// the 6502 indirect zero page addressing.
    pub fn address_at(&self, pointer: Address, zero_page: bool) -> Address {
        let high_pointer = if zero_page {
            let [low, high] = pointer.as_u16().to_le_bytes();
            Address::from(u16::from_le_bytes([low.wrapping_add(1), high]))
        } else {
            pointer.wrapping_add(1)
        };

        Address::from(u16::from_le_bytes([
            self.peek(pointer),
            self.peek(high_pointer),
        ]))
    }

    pub fn register_write_hook(
        &mut self,
        address: Address,
        hook: impl FnMut(&mut Memory, Address, u8) + 'static,
    ) {
        self.hooks.entry(address).or_default().push(Box::new(hook));
    }

    /// Remove all the hooks registered at this address, return how many were
    /// removed.
    pub fn clear_write_hooks(&mut self, address: Address) -> usize {
        self.hooks.remove(&address).map(|v| v.len()).unwrap_or(0)
    }

    pub fn count_write_hooks(&self, address: Address) -> usize {
        self.hooks.get(&address).map(|v| v.len()).unwrap_or(0)
    }

    fn call_hooks(&mut self, address: Address, byte: u8) {
        let mut hooks = match self.hooks.remove(&address) {
            Some(hooks) => hooks,
            None => return,
        };

        for hook in hooks.iter_mut() {
            hook(self, address, byte);
        }

        // hooks registered meanwhile come after the existing ones
        if let Some(added) = self.hooks.remove(&address) {
            hooks.extend(added);
        }
        self.hooks.insert(address, hooks);
    }
}

impl AddressableIO for Memory {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        self.ram.read(addr, len)
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        let address = Address::try_from(location)
            .map_err(|_| MemoryError::WriteOverflow(data.len(), location))?;

        self.poke(address, data)
    }

    fn get_size(&self) -> usize {
        self.ram.get_size()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooked: Vec<String> = self
            .hooks
            .iter()
            .map(|(addr, hooks)| format!("{}×{}", addr, hooks.len()))
            .collect();

        write!(f, "Memory {} bytes, hooks [{}]", self.get_size(), hooked.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_peek_poke() {
        let mut memory = Memory::new();
        memory
            .poke(Address::from(0x1000u16), &[0xff, 0xae, 0x81])
            .unwrap();
        assert_eq!(0xff, memory.peek(Address::from(0x1000u16)));
        assert_eq!(0xae, memory.peek(Address::from(0x1001u16)));
        assert_eq!(0x81, memory.peek(Address::from(0x1002u16)));
        assert_eq!(vec![0xff, 0xae, 0x81], memory.read(0x1000, 3).unwrap());
    }

    #[test]
    fn test_poke_overflow() {
        let mut memory = Memory::new();
        assert_eq!(
            Err(MemoryError::WriteOverflow(2, 0xffff)),
            memory.poke(Address::MAX, &[0x01, 0x02])
        );
        memory.poke(Address::MAX, &[0x01]).unwrap();
    }

    #[test]
    fn test_address_at() {
        let mut memory = Memory::new();
        memory.poke(Address::from(0x0000u16), &[0x12]).unwrap();
        memory.poke(Address::from(0x00ffu16), &[0x34, 0x56]).unwrap();
        assert_eq!(
            Address::from(0x1234u16),
            memory.address_at(Address::from(0x00ffu16), true)
        );
        assert_eq!(
            Address::from(0x5634u16),
            memory.address_at(Address::from(0x00ffu16), false)
        );
        memory.poke(Address::from(0x2000u16), &[0x0a, 0x80]).unwrap();
        assert_eq!(
            Address::from(0x800au16),
            memory.address_at(Address::from(0x2000u16), false)
        );
    }

    #[test]
    fn test_write_hooks_order() {
        let mut memory = Memory::new();
        let calls: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let first = calls.clone();
        let second = calls.clone();
        memory.register_write_hook(Address::from(0xd40au16), move |memory, addr, byte| {
            // the byte is stored before the hooks are called
            assert_eq!(byte, memory.peek(addr));
            first.borrow_mut().push(format!("first {} {:02x}", addr, byte));
        });
        memory.register_write_hook(Address::from(0xd40au16), move |_, addr, byte| {
            second.borrow_mut().push(format!("second {} {:02x}", addr, byte));
        });
        memory
            .poke(Address::from(0xd409u16), &[0x01, 0x02, 0x03])
            .unwrap();
        assert_eq!(
            vec!["first $D40A 02".to_owned(), "second $D40A 02".to_owned()],
            *calls.borrow()
        );
        assert_eq!(2, memory.count_write_hooks(Address::from(0xd40au16)));
    }

    #[test]
    fn test_write_hook_writing_memory() {
        let mut memory = Memory::new();
        memory.register_write_hook(Address::from(0x0200u16), |memory, _, byte| {
            memory
                .poke(Address::from(0x0201u16), &[byte.wrapping_add(1)])
                .unwrap();
            // no recursion on its own address
            memory.poke(Address::from(0x0200u16), &[0x00]).unwrap();
        });
        let counter = Rc::new(RefCell::new(0));
        let rcounter = counter.clone();
        memory.register_write_hook(Address::from(0x0201u16), move |_, _, _| {
            *rcounter.borrow_mut() += 1;
        });
        memory.poke(Address::from(0x0200u16), &[0x41]).unwrap();
        assert_eq!(0x42, memory.peek(Address::from(0x0201u16)));
        assert_eq!(0x00, memory.peek(Address::from(0x0200u16)));
        assert_eq!(1, *counter.borrow());
        assert_eq!(1, memory.count_write_hooks(Address::from(0x0200u16)));
    }

    #[test]
    fn test_clear_hooks() {
        let mut memory = Memory::new();
        memory.register_write_hook(Address::from(0x10u8), |_, _, _| {});
        assert_eq!(1, memory.clear_write_hooks(Address::from(0x10u8)));
        assert_eq!(0, memory.count_write_hooks(Address::from(0x10u8)));
    }
}
